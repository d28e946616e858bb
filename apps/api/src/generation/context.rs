//! Context builder: flattens a profile into the text block every section prompt embeds.

use crate::models::profile::Profile;

/// Renders the profile as `Label: value` lines in a fixed order.
///
/// Name and target title are always present; the remaining fields are
/// appended only when non-empty.
pub fn build_user_context(profile: &Profile) -> String {
    let mut lines = vec![
        format!("Name: {}", profile.full_name()),
        format!("Target Job Title: {}", profile.job_title()),
    ];

    let optional = [
        ("Career Objective", profile.career_objective()),
        ("Professional Experience", profile.experience()),
        ("Skills", profile.skills()),
        ("Education", profile.education()),
        ("Key Achievements", profile.achievements()),
    ];

    lines.extend(
        optional
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(label, value)| format!("{label}: {value}")),
    );

    lines.join("\n")
}
