//! Delimited-text rendering of a BOM.
//!
//! The output is not RFC 4180 CSV: fields are never quoted. Any separator
//! character inside a value is replaced with `-`, and every data row ends
//! with a trailing separator. Downstream spreadsheets depend on this exact
//! shape, so it must not be "fixed".

use super::bom::BomEntry;
use super::occurrence::Separator;

/// Column titles, in output order.
pub const HEADER_FIELDS: [&str; 5] = ["Part number", "Name", "Description", "Instances", "Assembly"];

/// Character substituted for the separator inside field values.
pub const SEPARATOR_REPLACEMENT: char = '-';

/// Replace every occurrence of `separator` in `value` with a hyphen.
pub fn sanitize_field(value: &str, separator: Separator) -> String {
    value.replace(separator.as_char(), &SEPARATOR_REPLACEMENT.to_string())
}

/// Render the assembly flag the way the BOM file spells it.
pub fn assembly_flag(is_assembly: bool) -> &'static str {
    if is_assembly {
        "True"
    } else {
        "False"
    }
}

/// Build the header line, newline included.
pub fn header_line(separator: Separator) -> String {
    let sep = separator.as_char().to_string();
    let mut line = HEADER_FIELDS.join(&sep);
    line.push('\n');
    line
}

/// Format BOM rows as delimited text.
///
/// Produces the header line followed by one line per entry, in the order
/// given.
pub fn format_csv(entries: &[(String, BomEntry)], separator: Separator) -> String {
    let sep = separator.as_char();
    let mut out = header_line(separator);

    for (part_number, entry) in entries {
        let fields = [
            sanitize_field(part_number, separator),
            sanitize_field(&entry.name, separator),
            sanitize_field(&entry.description, separator),
            entry.instance_count.to_string(),
            assembly_flag(entry.is_assembly).to_string(),
        ];

        for field in &fields {
            out.push_str(field);
            out.push(sep);
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bom::aggregate;
    use crate::core::occurrence::OccurrenceRecord;

    fn entry(name: &str, description: &str, count: usize, is_assembly: bool) -> BomEntry {
        BomEntry {
            name: name.to_string(),
            description: description.to_string(),
            instance_count: count,
            is_assembly,
        }
    }

    #[test]
    fn test_empty_bom_is_header_only() {
        assert_eq!(
            format_csv(&[], Separator::Comma),
            "Part number,Name,Description,Instances,Assembly\n"
        );
        assert_eq!(
            format_csv(&[], Separator::Semicolon),
            "Part number;Name;Description;Instances;Assembly\n"
        );
    }

    #[test]
    fn test_bracket_and_gear_scenario() {
        let occurrences = vec![
            OccurrenceRecord::new("A1", "Bracket").with_description("L-bracket"),
            OccurrenceRecord::new("A1", "Bracket").with_description("L-bracket"),
            OccurrenceRecord::new("B2", "Gear, 10t").with_description("Steel").with_assembly(true),
        ];

        let bom = aggregate(&occurrences, true, true);
        let expected = "Part number,Name,Description,Instances,Assembly\n\
                        A1,Bracket,L-bracket,2,False,\n\
                        B2,Gear- 10t,Steel,1,True,\n";

        assert_eq!(bom.to_csv(Separator::Comma), expected);
    }

    #[test]
    fn test_only_active_separator_is_replaced() {
        let rows = vec![("P;1,2".to_string(), entry("a,b;c", "x", 1, false))];

        let comma = format_csv(&rows, Separator::Comma);
        assert!(comma.ends_with("P;1-2,a-b;c,x,1,False,\n"));

        let semicolon = format_csv(&rows, Separator::Semicolon);
        assert!(semicolon.ends_with("P-1,2;a,b-c;x;1;False;\n"));
    }

    #[test]
    fn test_rows_split_into_five_fields_and_trailing_empty() {
        let rows = vec![
            ("A,1".to_string(), entry("Nut, hex", "M6, zinc", 4, false)),
            ("B2".to_string(), entry("Frame", "", 1, true)),
        ];
        let text = format_csv(&rows, Separator::Comma);

        for line in text.lines().skip(1) {
            let fields: Vec<&str> = line.split(',').collect();
            assert_eq!(fields.len(), 6, "line: {line}");
            assert_eq!(fields[5], "");
        }
    }

    #[test]
    fn test_semicolon_rows_split_into_five_fields_and_trailing_empty() {
        let rows = vec![
            ("A;1".to_string(), entry("Nut; hex", "M6; zinc, plated", 4, false)),
            ("B2".to_string(), entry("Frame;;", "", 1, true)),
        ];
        let text = format_csv(&rows, Separator::Semicolon);

        for line in text.lines().skip(1) {
            let fields: Vec<&str> = line.split(';').collect();
            assert_eq!(fields.len(), 6, "line: {line}");
            assert_eq!(fields[5], "");
        }
        assert!(text.contains("A-1;Nut- hex;M6- zinc, plated;4;False;\n"));
        assert!(text.contains("B2;Frame--;;1;True;\n"));
    }

    #[test]
    fn test_header_has_no_trailing_separator() {
        assert_eq!(header_line(Separator::Semicolon).matches(';').count(), 4);
    }

    #[test]
    fn test_assembly_flag_text() {
        assert_eq!(assembly_flag(true), "True");
        assert_eq!(assembly_flag(false), "False");
    }

    #[test]
    fn test_sanitize_field() {
        assert_eq!(sanitize_field("a,b,,c", Separator::Comma), "a-b--c");
        assert_eq!(sanitize_field("a,b", Separator::Semicolon), "a,b");
        assert_eq!(sanitize_field("", Separator::Comma), "");
    }
}
