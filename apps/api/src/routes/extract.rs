//! Request/response helpers shared by every route module.

use axum::{extract::rejection::JsonRejection, Json};
use chrono::Local;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::AppError;

const NO_JSON: &str = "No JSON data provided";

/// Unwraps a JSON body into `T`.
///
/// Malformed JSON, a non-object body and an empty object `{}` are all
/// rejected with the same 400.
pub fn json_body<T: DeserializeOwned>(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<T, AppError> {
    let Json(value) = payload.map_err(|_| AppError::Validation(NO_JSON.to_string()))?;

    match &value {
        Value::Object(fields) if !fields.is_empty() => {}
        _ => return Err(AppError::Validation(NO_JSON.to_string())),
    }

    serde_json::from_value(value).map_err(|_| AppError::Validation(NO_JSON.to_string()))
}

/// Local time in ISO-8601 with microseconds.
pub fn iso_timestamp() -> String {
    Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}
