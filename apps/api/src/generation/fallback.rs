//! Template fallback: deterministic, network-free content used whenever the
//! LLM path is unavailable or fails.
//!
//! Skills are cut to a fixed number of characters (50 / 30 / 40). The cut is a
//! plain character count and ignores word boundaries.

use chrono::NaiveDate;

use crate::generation::assembler::format_generated_on;
use crate::models::profile::{ContentSections, Profile};

const SUMMARY_SKILLS_CHARS: usize = 50;
const COVER_LETTER_SKILLS_CHARS: usize = 30;
const BIO_SKILLS_CHARS: usize = 40;

const CORE_COMPETENCIES: [&str; 4] = [
    "Problem-solving and analytical thinking",
    "Team collaboration and communication",
    "Project management and organization",
    "Adaptability and continuous learning",
];

const LEGACY_ADDITIONAL_INFORMATION: [&str; 4] = [
    "Strong communication and interpersonal skills",
    "Ability to work independently and as part of a team",
    "Detail-oriented with excellent problem-solving abilities",
    "Adaptable and eager to learn new technologies and methods",
];

/// Builds all four content sections from the profile alone. Never fails.
pub fn fallback_sections(profile: &Profile) -> ContentSections {
    let full_name = profile.full_name();
    let job_title = profile.job_title();
    let skills = profile.skills();
    let first_name = full_name.split_whitespace().next().unwrap_or(full_name);

    let competencies = CORE_COMPETENCIES
        .iter()
        .map(|c| format!("• {c}"))
        .collect::<Vec<_>>()
        .join("\n");

    ContentSections {
        resume_summary: format!(
            "{full_name} is a motivated {job_title} with strong technical skills and a passion \
             for delivering high-quality results. Experienced in {}... and committed to \
             continuous learning and professional growth.",
            char_prefix(skills, SUMMARY_SKILLS_CHARS)
        ),
        skill_highlights: format!(
            "Technical Skills: {skills}\n\nCore Competencies:\n{competencies}"
        ),
        cover_letter: format!(
            "As an experienced {job_title}, I am excited about the opportunity to contribute to \
             your team. My background in {}... and proven track record of delivering results \
             make me an ideal candidate for this position.",
            char_prefix(skills, COVER_LETTER_SKILLS_CHARS)
        ),
        portfolio_bio: format!(
            "{full_name} is a dedicated {job_title} with expertise in {}. Known for delivering \
             innovative solutions and maintaining high standards of work quality, {first_name} \
             brings both technical proficiency and strong collaborative skills to every project.",
            char_prefix(skills, BIO_SKILLS_CHARS)
        ),
    }
}

/// Fixed-layout resume for `POST /generate-resume` when the LLM is not used.
///
/// Unlike the assembled resume, every section is always present and empty
/// ones get a placeholder sentence.
pub fn legacy_fallback_resume(profile: &Profile, generated_on: NaiveDate) -> String {
    let full_name = profile.full_name();

    let experience = non_empty_or(
        profile.experience(),
        "Please provide your work experience details to enhance this section.",
    );
    let skills = if profile.skills().is_empty() {
        "Please list your relevant skills.".to_string()
    } else {
        profile
            .skills()
            .split(',')
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let education = non_empty_or(
        profile.education(),
        "Please provide your educational background.",
    );
    let additional = LEGACY_ADDITIONAL_INFORMATION
        .iter()
        .map(|line| format!("• {line}"))
        .collect::<Vec<_>>()
        .join("\n");

    let resume = format!(
        "{name_upper}\n{rule}\n\n\
         Contact Information:\n\
         Email: {email}\n\
         Phone: {phone}\n\
         Location: {location}\n\n\
         PROFESSIONAL SUMMARY\n\
         Motivated and skilled professional seeking a {job_title} position. Committed to \
         delivering high-quality results and contributing to organizational success.\n\n\
         PROFESSIONAL EXPERIENCE\n{experience}\n\n\
         SKILLS\n{skills}\n\n\
         EDUCATION\n{education}\n\n\
         ADDITIONAL INFORMATION\n{additional}\n\n\
         ---\n\
         Resume generated on {date}",
        name_upper = full_name.to_uppercase(),
        rule = "=".repeat(full_name.chars().count()),
        email = profile.email(),
        phone = profile.phone(),
        location = profile.location(),
        job_title = profile.job_title(),
        date = format_generated_on(generated_on),
    );

    resume.trim().to_string()
}

/// First `n` characters of `text`, counted as chars rather than bytes.
fn char_prefix(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn non_empty_or<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}
