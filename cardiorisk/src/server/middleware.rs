// cardiorisk/src/server/middleware.rs
//! Request logging: method, path, status and duration of every request.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use log::{info, warn};
use std::time::Instant;

pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
    if status >= 400 {
        warn!("{} {} -> {} ({:.2} ms)", method, path, status, duration_ms);
    } else {
        info!("{} {} -> {} ({:.2} ms)", method, path, status, duration_ms);
    }
    response
}
