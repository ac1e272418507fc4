use clap::Parser;
use phone_extractor::mcp_server::McpServer;
use phone_extractor::{init_logging, parse_csv_phone_numbers, DEFAULT_COUNTRY};
use serde_json::{json, Value};
use std::convert::Infallible;
use std::net::SocketAddr;
use warp::http::StatusCode;
use warp::{Filter, Reply};
use tracing::{error, info};

/// MCP and CSV parsing endpoints over HTTP
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Region used for numbers that are not in international form
    #[arg(short, long, env = "PHONE_COUNTRY", default_value = DEFAULT_COUNTRY)]
    country: String,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

async fn handle_mcp_request(request: Value, server: McpServer) -> Result<impl Reply, Infallible> {
    let id = request["id"].clone();

    match server.handle_request(request).await {
        Ok(mut response) => {
            if let Some(obj) = response.as_object_mut() {
                obj.insert("jsonrpc".to_string(), json!("2.0"));
                if !id.is_null() {
                    obj.insert("id".to_string(), id);
                }
            }
            Ok(warp::reply::json(&response))
        }
        Err(err) => {
            let error_response = json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": {
                    "code": -1,
                    "message": err
                }
            });
            Ok(warp::reply::json(&error_response))
        }
    }
}

async fn handle_parse_csv(body: warp::hyper::body::Bytes) -> Result<impl Reply, Infallible> {
    let text = match std::str::from_utf8(&body) {
        Ok(text) => text,
        Err(err) => {
            error!(error = %err, "csv body is not utf-8");
            return Ok(warp::reply::with_status(
                warp::reply::json(&json!({ "error": "CSV content must be UTF-8 text" })),
                StatusCode::BAD_REQUEST,
            ));
        }
    };

    if text.trim().is_empty() {
        return Ok(warp::reply::with_status(
            warp::reply::json(&json!({ "error": "No file provided" })),
            StatusCode::BAD_REQUEST,
        ));
    }

    let results = parse_csv_phone_numbers(text);
    info!(bytes = body.len(), rows = results.len(), "parsed csv upload");

    Ok(warp::reply::with_status(
        warp::reply::json(&json!({
            "success": true,
            "results": results,
            "totalRows": results.len()
        })),
        StatusCode::OK,
    ))
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let server = McpServer::with_country(&args.country);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST", "OPTIONS"]);

    let mcp_route = warp::path("mcp")
        .and(warp::post())
        .and(warp::body::json())
        .and_then(move |request: Value| {
            let server = server.clone();
            async move { handle_mcp_request(request, server).await }
        });

    let parse_csv_route = warp::path("parse-csv")
        .and(warp::post())
        .and(warp::body::content_length_limit(16 * 1024 * 1024))
        .and(warp::body::bytes())
        .and_then(handle_parse_csv);

    let health_route = warp::path("health").and(warp::get()).map(|| {
        warp::reply::json(&json!({
            "status": "ok",
            "service": "phone-extractor-mcp"
        }))
    });

    let routes = mcp_route.or(parse_csv_route).or(health_route).with(cors);

    info!(address = %args.bind, "http server starting");
    println!("MCP HTTP server starting on http://{}", args.bind);
    println!("Health check: http://{}/health", args.bind);
    println!("MCP endpoint: http://{}/mcp", args.bind);
    println!("CSV endpoint: http://{}/parse-csv", args.bind);

    warp::serve(routes).run(args.bind).await;
}
