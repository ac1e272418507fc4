use clap::Parser;
use phone_extractor::mcp_server::McpServer;
use phone_extractor::{init_logging, DEFAULT_COUNTRY};
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};
use tracing::warn;

/// MCP server over stdio, one JSON-RPC message per line
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Region used for numbers that are not in international form
    #[arg(short, long, env = "PHONE_COUNTRY", default_value = DEFAULT_COUNTRY)]
    country: String,

    /// Debug logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let server = McpServer::with_country(&args.country);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(&line) {
            Ok(request) => {
                let id = request["id"].clone();

                match server.handle_request(request).await {
                    Ok(mut resp) => {
                        if let Some(obj) = resp.as_object_mut() {
                            obj.insert("jsonrpc".to_string(), json!("2.0"));
                            if !id.is_null() {
                                obj.insert("id".to_string(), id);
                            }
                        }
                        resp
                    }
                    Err(err) => json!({
                        "jsonrpc": "2.0",
                        "id": id,
                        "error": {
                            "code": -1,
                            "message": err
                        }
                    }),
                }
            }
            Err(err) => {
                warn!(error = %err, "unparsable request");
                json!({
                    "jsonrpc": "2.0",
                    "error": {
                        "code": -32700,
                        "message": "Parse error"
                    }
                })
            }
        };

        writeln!(stdout, "{}", response)?;
        stdout.flush()?;
    }

    Ok(())
}
