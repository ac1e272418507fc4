use serde::{Deserialize, Serialize};

use crate::extraction::{PhoneNumberExtractor, StructuredPhoneExtractor};

/// One qualifying line of delimited input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// 1-based line number in the source text.
    pub line: usize,
    pub id: String,
    pub phone_data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRow {
    pub id: String,
    pub phone_numbers: Vec<String>,
}

/// Lazily splits file content into records. Blank lines and lines with
/// fewer than two columns produce nothing.
pub fn records(content: &str) -> impl Iterator<Item = Record> + '_ {
    content
        .split('\n')
        .enumerate()
        .filter(|(_, line)| !trim_text(line).is_empty())
        .filter_map(|(index, line)| parse_line(index + 1, line))
}

fn parse_line(line_number: usize, line: &str) -> Option<Record> {
    let mut columns = line.split([',', '\t']).map(clean_column);
    let id = columns.next()?;
    let phone_data = columns.next()?;

    Some(Record {
        line: line_number,
        id: id.to_string(),
        phone_data: phone_data.to_string(),
    })
}

/// Trims whitespace and byte-order marks; exports from spreadsheets often start with U+FEFF.
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Trims whitespace, then drops one leading and one trailing quote character.
pub fn clean_column(column: &str) -> &str {
    let column = trim_text(column);
    let column = column
        .strip_prefix(['"', '\''])
        .unwrap_or(column);
    column.strip_suffix(['"', '\'']).unwrap_or(column)
}

/// Tokenizes `content` and extracts the phone cell of every record.
pub fn parse_csv_phone_numbers(content: &str) -> Vec<ParsedRow> {
    parse_records_with(content, &StructuredPhoneExtractor::new())
}

pub fn parse_records_with(content: &str, extractor: &dyn PhoneNumberExtractor) -> Vec<ParsedRow> {
    records(content)
        .map(|record| ParsedRow {
            phone_numbers: extractor.extract(&record.phone_data),
            id: record.id,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let content = "1,(11)5178-7965 (C)\n2\t02291 460318\n3,1155551234,extra\n";
        let ids: Vec<String> = records(content).map(|r| r.id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_quotes_and_whitespace_stripped() {
        let record = records("  \"20123456789\" , 'PAR: 02291 460318'  ").next().unwrap();
        assert_eq!(record.id, "20123456789");
        assert_eq!(record.phone_data, "PAR: 02291 460318");
    }

    #[test]
    fn test_only_one_quote_layer_removed() {
        assert_eq!(clean_column("\"\"nested\"\""), "\"nested\"");
        assert_eq!(clean_column("\"mixed'"), "mixed");
        assert_eq!(clean_column("\""), "");
    }

    #[test]
    fn test_short_and_blank_lines_skipped() {
        let content = "header-only\n\n   \n7,1155551234\r\nlonely\n";
        let parsed: Vec<Record> = records(content).collect();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].line, 4);
        assert_eq!(parsed[0].id, "7");
        assert_eq!(parsed[0].phone_data, "1155551234");
    }

    #[test]
    fn test_byte_order_mark_stripped() {
        let content = "\u{feff}20111,1155551234\n\u{feff}\n20222,\u{feff}\"02291 460318\"\n";
        let parsed: Vec<Record> = records(content).collect();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].id, "20111");
        assert_eq!(parsed[1].id, "20222");
        assert_eq!(parsed[1].phone_data, "02291 460318");
        assert_eq!(parse_csv_phone_numbers(content)[0].id, "20111");
    }

    #[test]
    fn test_empty_second_column_still_yields_record() {
        let parsed: Vec<Record> = records("9,").collect();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].phone_data, "");
    }

    #[test]
    fn test_parse_csv_phone_numbers() {
        let content = "1,(11)5178-7965 (C) - ()5178-7965 (C)\n2,abc def\n";
        let rows = parse_csv_phone_numbers(content);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].phone_numbers, vec!["11 5178-7965", "51 78-7965"]);
        assert!(rows[1].phone_numbers.is_empty());
    }

    #[test]
    fn test_parsed_row_json_shape() {
        let row = ParsedRow {
            id: "1".to_string(),
            phone_numbers: vec!["1155551234".to_string()],
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["phoneNumbers"][0], "1155551234");
    }
}
