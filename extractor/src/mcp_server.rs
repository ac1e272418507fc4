use serde_json::{json, Value};
use std::fs;
use tracing::debug;

use crate::comparator::PhoneNumberComparator;
use crate::extract_phone_numbers;
use crate::reconcile::reconcile;
use crate::rows::{parse_csv_phone_numbers, ParsedRow};

#[derive(Clone, Default)]
pub struct McpServer {
    comparator: PhoneNumberComparator,
}

impl McpServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_country(country: &str) -> Self {
        Self {
            comparator: PhoneNumberComparator::new(country),
        }
    }

    pub async fn handle_request(&self, request: Value) -> Result<Value, String> {
        let method = request["method"].as_str().unwrap_or("");
        debug!(method, "mcp request");

        match method {
            "initialize" => self.handle_initialize(),
            "tools/list" => self.handle_tools_list(),
            "tools/call" => self.handle_tool_call(&request["params"]),
            _ => Err(format!("Unknown method: {}", method)),
        }
    }

    fn handle_initialize(&self) -> Result<Value, String> {
        Ok(json!({
            "result": {
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": "phone-extractor",
                    "version": env!("CARGO_PKG_VERSION")
                }
            }
        }))
    }

    fn handle_tools_list(&self) -> Result<Value, String> {
        Ok(json!({
            "result": {
                "tools": [
                    {
                        "name": "extract_phones",
                        "description": "Extract normalized phone numbers from one raw phone-data cell",
                        "inputSchema": {
                            "type": "object",
                            "properties": {
                                "text": {
                                    "type": "string",
                                    "description": "Raw cell content, e.g. \"(11)5178-7965 (C) - ()5178-7965 (C)\""
                                }
                            },
                            "required": ["text"]
                        }
                    },
                    {
                        "name": "parse_csv",
                        "description": "Split CSV/TSV content into records and extract phone numbers from the second column",
                        "inputSchema": {
                            "type": "object",
                            "properties": {
                                "content": {
                                    "type": "string",
                                    "description": "CSV content"
                                },
                                "file_path": {
                                    "type": "string",
                                    "description": "Path to a CSV file, used when content is absent"
                                }
                            }
                        }
                    },
                    {
                        "name": "compare_phones",
                        "description": "Check whether two phone numbers denote the same subscriber",
                        "inputSchema": {
                            "type": "object",
                            "properties": {
                                "first": { "type": "string" },
                                "second": { "type": "string" },
                                "country": {
                                    "type": "string",
                                    "description": "Two-letter region for numbers not in international form"
                                }
                            },
                            "required": ["first", "second"]
                        }
                    },
                    {
                        "name": "reconcile_phones",
                        "description": "Compare a record's CSV phone numbers with numbers from an enrichment source",
                        "inputSchema": {
                            "type": "object",
                            "properties": {
                                "id": { "type": "string" },
                                "csv_phones": { "type": "array", "items": { "type": "string" } },
                                "api_phones": { "type": "array", "items": { "type": "string" } },
                                "country": { "type": "string" }
                            },
                            "required": ["csv_phones", "api_phones"]
                        }
                    }
                ]
            }
        }))
    }

    fn handle_tool_call(&self, params: &Value) -> Result<Value, String> {
        let tool_name = params["name"].as_str().ok_or("Missing tool name")?;

        let arguments = &params["arguments"];

        match tool_name {
            "extract_phones" => Ok(self.extract_phones(arguments)),
            "parse_csv" => self.parse_csv(arguments),
            "compare_phones" => self.compare_phones(arguments),
            "reconcile_phones" => self.reconcile_phones(arguments),
            _ => Err(format!("Unknown tool: {}", tool_name)),
        }
    }

    fn country<'a>(&'a self, args: &'a Value) -> &'a str {
        args["country"]
            .as_str()
            .unwrap_or_else(|| self.comparator.default_country())
    }

    fn extract_phones(&self, args: &Value) -> Value {
        // A missing cell is an empty cell.
        let text = args["text"].as_str().unwrap_or("");
        let phones = extract_phone_numbers(text);

        json!({
            "result": {
                "content": [{
                    "type": "text",
                    "text": format!("Found {} phone number(s)", phones.len())
                }],
                "data": phones
            }
        })
    }

    fn parse_csv(&self, args: &Value) -> Result<Value, String> {
        let content = match (args["content"].as_str(), args["file_path"].as_str()) {
            (Some(content), _) => content.to_string(),
            (None, Some(path)) => fs::read_to_string(path)
                .map_err(|e| format!("Error reading file {}: {}", path, e))?,
            (None, None) => return Err("content or file_path is required".to_string()),
        };

        let results = parse_csv_phone_numbers(&content);
        let total_phones: usize = results.iter().map(|r| r.phone_numbers.len()).sum();

        Ok(json!({
            "result": {
                "content": [{
                    "type": "text",
                    "text": format!("Parsed {} rows, found {} phone number(s)", results.len(), total_phones)
                }],
                "data": {
                    "success": true,
                    "results": results,
                    "totalRows": results.len()
                }
            }
        }))
    }

    fn compare_phones(&self, args: &Value) -> Result<Value, String> {
        let first = args["first"].as_str().ok_or("first is required")?;
        let second = args["second"].as_str().ok_or("second is required")?;
        let country = self.country(args);

        let same = self.comparator.compare(first, second, country);
        let summary = if same {
            "Same phone number"
        } else {
            "Different or invalid phone numbers"
        };

        Ok(json!({
            "result": {
                "content": [{
                    "type": "text",
                    "text": summary
                }],
                "data": { "match": same, "country": country }
            }
        }))
    }

    fn reconcile_phones(&self, args: &Value) -> Result<Value, String> {
        let csv_phones = string_list(&args["csv_phones"]).ok_or("csv_phones must be an array of strings")?;
        let api_phones = string_list(&args["api_phones"]).ok_or("api_phones must be an array of strings")?;
        let row = ParsedRow {
            id: args["id"].as_str().unwrap_or("").to_string(),
            phone_numbers: csv_phones,
        };

        let result = reconcile(&self.comparator, &row, &api_phones, self.country(args));
        let data = serde_json::to_value(&result).map_err(|e| e.to_string())?;

        Ok(json!({
            "result": {
                "content": [{
                    "type": "text",
                    "text": format!(
                        "{} confirmed, {} new phone number(s)",
                        result.matched_phones.len(),
                        result.new_phones.len()
                    )
                }],
                "data": data
            }
        }))
    }
}

fn string_list(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect()
}
