use serde::Deserialize;

/// Body of `POST /contact`. Acknowledged and logged, never stored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactMessage {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactMessage {
    /// First of `name`, `email`, `message` that is absent or empty.
    pub fn first_missing_required(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.as_deref().unwrap_or("").is_empty())
        .map(|(field, _)| field)
    }
}
