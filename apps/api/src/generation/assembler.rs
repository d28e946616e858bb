//! Resume assembler: merges profile fields and generated sections into the
//! plain-text document returned as `resume`.
//!
//! Section order is fixed: header, contact, summary, skills, then experience,
//! education and achievements when provided, then the generation date.

use chrono::NaiveDate;

use crate::models::profile::{ContentSections, Profile};

/// Formats the footer date, e.g. `March 05, 2024`.
pub fn format_generated_on(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

pub fn assemble_resume(
    profile: &Profile,
    sections: &ContentSections,
    generated_on: NaiveDate,
) -> String {
    let full_name = profile.full_name();
    let mut parts: Vec<String> = Vec::new();

    parts.push(full_name.to_uppercase());
    parts.push("=".repeat(full_name.chars().count()));
    parts.push(String::new());

    let contact: Vec<String> = [
        ("Email", profile.email()),
        ("Phone", profile.phone()),
        ("Location", profile.location()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(label, value)| format!("{label}: {value}"))
    .collect();

    if !contact.is_empty() {
        parts.extend(contact);
        parts.push(String::new());
    }

    push_section(&mut parts, "PROFESSIONAL SUMMARY", 20, &sections.resume_summary);
    push_section(&mut parts, "SKILLS & EXPERTISE", 18, &sections.skill_highlights);

    let optional = [
        ("PROFESSIONAL EXPERIENCE", 23, profile.experience()),
        ("EDUCATION", 9, profile.education()),
        ("KEY ACHIEVEMENTS", 15, profile.achievements()),
    ];
    for (heading, underline, body) in optional {
        if !body.is_empty() {
            push_section(&mut parts, heading, underline, body);
        }
    }

    parts.push(format!("Generated on {}", format_generated_on(generated_on)));

    parts.join("\n")
}

fn push_section(parts: &mut Vec<String>, heading: &str, underline: usize, body: &str) {
    parts.push(heading.to_string());
    parts.push("-".repeat(underline));
    parts.push(body.to_string());
    parts.push(String::new());
}
