//! AWS Lambda handler for the quote calculation API
//!
//! Accepts a quote request via JSON and returns the derived figures with the
//! 25-year cash-flow projection.
//!
//! Supports Lambda Function URLs for direct HTTP access:
//! - `GET /health` -> `{"status":"ok"}`
//! - `POST /calc`  -> quote response, 400 on malformed JSON, 422 on a field
//!   outside its domain

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use pv_calculator::{calculate, CalcRequest};

fn error_response(status: u16, message: &str) -> Response<Body> {
    let body = serde_json::json!({ "error": message });
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(body.to_string()))
        .unwrap()
}

fn json_response(body: String) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(body))
        .unwrap()
}

fn health_response() -> Response<Body> {
    json_response(r#"{"status":"ok"}"#.to_string())
}

fn calc_response(body_str: &str) -> Response<Body> {
    let request: CalcRequest = match serde_json::from_str(body_str) {
        Ok(r) => r,
        Err(e) => {
            return error_response(400, &format!("Invalid JSON: {}", e));
        }
    };

    if let Err(e) = request.validate() {
        log::warn!("rejected request: {}", e);
        return error_response(422, &e.to_string());
    }

    let response = calculate(&request);
    json_response(serde_json::to_string(&response).unwrap())
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    let method = event.method().as_str().to_string();
    let path = event.uri().path().to_string();

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let response = match (method.as_str(), path.as_str()) {
        ("GET", "/health") => health_response(),
        ("POST", "/calc") => calc_response(&body_str),
        _ => error_response(404, "not found"),
    };

    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
