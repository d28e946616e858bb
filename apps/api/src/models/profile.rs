use serde::{Deserialize, Serialize};

/// Fields that must be present (and non-empty) before anything is generated,
/// in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 3] = ["fullName", "email", "jobTitle"];

/// User-submitted career data. Lives for a single request and is never stored.
///
/// Every field is optional at the wire level; an empty string is treated the
/// same as an absent field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub job_title: Option<String>,
    pub experience: Option<String>,
    pub skills: Option<String>,
    pub education: Option<String>,
    pub career_objective: Option<String>,
    pub achievements: Option<String>,
}

impl Profile {
    pub fn full_name(&self) -> &str {
        text(&self.full_name)
    }

    pub fn email(&self) -> &str {
        text(&self.email)
    }

    pub fn phone(&self) -> &str {
        text(&self.phone)
    }

    pub fn location(&self) -> &str {
        text(&self.location)
    }

    pub fn job_title(&self) -> &str {
        text(&self.job_title)
    }

    pub fn experience(&self) -> &str {
        text(&self.experience)
    }

    pub fn skills(&self) -> &str {
        text(&self.skills)
    }

    pub fn education(&self) -> &str {
        text(&self.education)
    }

    pub fn career_objective(&self) -> &str {
        text(&self.career_objective)
    }

    pub fn achievements(&self) -> &str {
        text(&self.achievements)
    }

    /// Returns the wire name of the first required field that is absent or empty.
    pub fn first_missing_required(&self) -> Option<&'static str> {
        let values = [self.full_name(), self.email(), self.job_title()];
        REQUIRED_FIELDS
            .into_iter()
            .zip(values)
            .find(|(_, value)| value.is_empty())
            .map(|(field, _)| field)
    }
}

fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

/// The four generated text blocks. Always produced as a complete set, either
/// all from the LLM or all from the template fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSections {
    pub resume_summary: String,
    pub skill_highlights: String,
    pub cover_letter: String,
    pub portfolio_bio: String,
}
