//! JSON body extraction settings.
//!
//! Actix rejects unparseable bodies with a plain-text 400 by default. This
//! configuration turns them into the domain error envelope instead.

use actix_web::{HttpRequest, error::JsonPayloadError, web};
use serde_json::json;
use tracing::debug;

use crate::domain::Error;

/// Message returned for request bodies that cannot be decoded.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

fn payload_error(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = req.path(), "rejected request body");
    Error::invalid_request(INVALID_BODY_MESSAGE)
        .with_details(json!({ "reason": err.to_string() }))
        .into()
}

/// JSON extractor configuration shared by every endpoint.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(payload_error)
}
