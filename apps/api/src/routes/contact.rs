use axum::{extract::rejection::JsonRejection, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::models::contact::ContactMessage;
use crate::routes::extract::json_body;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: &'static str,
}

/// POST /contact
/// Acknowledges a contact form submission. Nothing is stored or sent.
pub async fn contact_handler(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ContactResponse>, AppError> {
    let contact: ContactMessage = json_body(payload)?;
    if let Some(field) = contact.first_missing_required() {
        return Err(AppError::missing_field(field));
    }

    info!(
        name = contact.name.as_deref().unwrap_or_default(),
        email = contact.email.as_deref().unwrap_or_default(),
        message = contact.message.as_deref().unwrap_or_default(),
        "Contact form submission"
    );

    Ok(Json(ContactResponse {
        success: true,
        message: "Thank you for your message. We will get back to you soon!",
    }))
}
