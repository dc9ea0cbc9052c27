use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;

use crate::error::AppError;

/// Reads an id the lenient way: leading whitespace and a `+` are skipped, then
/// digits are taken up to the first non-digit. No digits, or a negative id,
/// can never match a stored item.
pub fn parse_id(raw: &str) -> Result<u64, AppError> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];

    if negative || digits.is_empty() {
        return Err(AppError::NotFound);
    }

    digits.parse().map_err(|_| AppError::NotFound)
}

pub async fn log_request(request: Request, next: Next) -> Response {
    info!("{} {}", request.method(), request.uri());

    next.run(request).await
}
