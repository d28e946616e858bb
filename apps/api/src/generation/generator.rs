//! Content generation: chooses between the LLM path and the template fallback.
//!
//! Flow: build_user_context → four section prompts (concurrently) →
//!       ContentSections, or fallback_sections on any upstream failure.
//!
//! Sections are never mixed: one failed prompt discards the other three.

use chrono::NaiveDate;
use tracing::{error, info, warn};

use crate::generation::context::build_user_context;
use crate::generation::fallback::{fallback_sections, legacy_fallback_resume};
use crate::generation::prompts::{
    Section, LEGACY_RESUME_MAX_TOKENS, LEGACY_RESUME_SYSTEM,
};
use crate::llm_client::{CompletionBackend, UpstreamError};
use crate::models::profile::{ContentSections, Profile};

/// Why the template fallback was used instead of the LLM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    NotConfigured,
    UpstreamFailure,
}

impl FallbackReason {
    /// Informational `message` for `POST /generate`.
    pub fn content_message(self) -> &'static str {
        match self {
            FallbackReason::NotConfigured => {
                "Content generated using fallback method (OpenAI API not configured)"
            }
            FallbackReason::UpstreamFailure => {
                "Content generated using fallback method due to API issue"
            }
        }
    }

    /// Informational `message` for `POST /generate-resume`.
    pub fn resume_message(self) -> &'static str {
        match self {
            FallbackReason::NotConfigured => {
                "Resume generated using fallback method (OpenAI API key not configured)"
            }
            FallbackReason::UpstreamFailure => {
                "Resume generated using fallback method due to API issue"
            }
        }
    }
}

/// A complete set of sections plus how they were produced.
#[derive(Debug, Clone)]
pub struct GeneratedContent {
    pub sections: ContentSections,
    pub fallback: Option<FallbackReason>,
}

/// Runs all four section prompts against the backend.
/// Returns the first upstream error if any of them fails.
pub async fn generate_sections(
    backend: &dyn CompletionBackend,
    profile: &Profile,
) -> Result<ContentSections, UpstreamError> {
    let user_context = build_user_context(profile);

    let [summary, skills, cover, bio] = Section::ALL.map(|section| {
        let prompt = section.prompt();
        let user_prompt = prompt.render_user(&user_context);
        async move {
            backend
                .complete(prompt.system, &user_prompt, prompt.max_tokens)
                .await
        }
    });

    let (resume_summary, skill_highlights, cover_letter, portfolio_bio) =
        tokio::try_join!(summary, skills, cover, bio)?;

    Ok(ContentSections {
        resume_summary,
        skill_highlights,
        cover_letter,
        portfolio_bio,
    })
}

/// Produces content sections, falling back to templates when no backend is
/// configured or the backend fails. Never fails itself.
pub async fn generate_content(
    backend: Option<&dyn CompletionBackend>,
    profile: &Profile,
) -> GeneratedContent {
    let Some(backend) = backend else {
        warn!("Using fallback content generation (no OpenAI API key)");
        return GeneratedContent {
            sections: fallback_sections(profile),
            fallback: Some(FallbackReason::NotConfigured),
        };
    };

    match generate_sections(backend, profile).await {
        Ok(sections) => {
            info!(
                "Generated AI content for {} with model {}",
                profile.full_name(),
                backend.model()
            );
            GeneratedContent {
                sections,
                fallback: None,
            }
        }
        Err(e) => {
            error!("OpenAI API error: {e}");
            GeneratedContent {
                sections: fallback_sections(profile),
                fallback: Some(FallbackReason::UpstreamFailure),
            }
        }
    }
}

/// Builds the single-shot prompt used by `POST /generate-resume`.
///
/// Filled in one pass, so braces inside user text are left alone.
pub fn build_legacy_prompt(profile: &Profile) -> String {
    format!(
        r#"Create a professional resume for the following person. Format it in a clean, ATS-friendly structure:

Personal Information:
- Name: {full_name}
- Email: {email}
- Phone: {phone}
- Location: {location}

Target Job Title: {job_title}

Professional Experience:
{experience}

Skills:
{skills}

Education:
{education}

Please create a well-formatted, professional resume that highlights the candidate's strengths and is optimized for the target job title. Include:
1. A compelling professional summary
2. Organized work experience with bullet points showing achievements
3. A clean skills section
4. Properly formatted education section
5. Use action verbs and quantify achievements where possible

Format the output as clean text with clear section headers and bullet points."#,
        full_name = profile.full_name(),
        email = profile.email(),
        phone = profile.phone(),
        location = profile.location(),
        job_title = profile.job_title(),
        experience = or_placeholder(profile.experience(), "No experience provided"),
        skills = or_placeholder(profile.skills(), "No skills provided"),
        education = or_placeholder(profile.education(), "No education provided"),
    )
}

/// Generates a whole resume in one LLM call, or the fixed-layout fallback.
pub async fn generate_legacy_resume(
    backend: Option<&dyn CompletionBackend>,
    profile: &Profile,
    generated_on: NaiveDate,
) -> (String, Option<FallbackReason>) {
    let Some(backend) = backend else {
        warn!("Using fallback resume generation (no OpenAI API key)");
        return (
            legacy_fallback_resume(profile, generated_on),
            Some(FallbackReason::NotConfigured),
        );
    };

    let prompt = build_legacy_prompt(profile);
    match backend
        .complete(LEGACY_RESUME_SYSTEM, &prompt, LEGACY_RESUME_MAX_TOKENS)
        .await
    {
        Ok(resume) => {
            info!("Resume generated successfully for {}", profile.full_name());
            (resume, None)
        }
        Err(e) => {
            error!("OpenAI API error: {e}");
            (
                legacy_fallback_resume(profile, generated_on),
                Some(FallbackReason::UpstreamFailure),
            )
        }
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::llm_client::{CompletionBackend, UpstreamError};

    /// Backend that echoes the system prompt's persona, or fails on demand.
    pub struct StubBackend {
        pub fail_when_system_contains: Option<&'static str>,
        pub calls: AtomicUsize,
    }

    impl StubBackend {
        pub fn succeeding() -> Self {
            Self {
                fail_when_system_contains: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing_on(needle: &'static str) -> Self {
            Self {
                fail_when_system_contains: Some(needle),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CompletionBackend for StubBackend {
        async fn complete(
            &self,
            system_prompt: &str,
            _user_prompt: &str,
            max_tokens: u32,
        ) -> Result<String, UpstreamError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.fail_when_system_contains {
                Some(needle) if system_prompt.contains(needle) => Err(UpstreamError::Api {
                    status: 429,
                    message: "quota exceeded".to_string(),
                }),
                _ => Ok(format!("AI text ({max_tokens} tokens)")),
            }
        }

        fn model(&self) -> &str {
            "stub-model"
        }
    }
}
