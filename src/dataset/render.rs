//! Plain-text rendering of CV sections
//!
//! Every function is pure and returns lines joined with `\n`. Multi-entry
//! sections separate entries with one blank line, which search relies on.

use super::{CvDataset, Skill};

/// Width of the skill bar in characters
pub const SKILL_BAR_WIDTH: usize = 20;
/// Percentage covered by one bar character
const PERCENT_PER_CELL: f64 = 5.0;

/// Proportional bar: `round(level / 5)` `#` characters padded with `.`
pub fn skill_bar(level: u8) -> String {
    let filled = ((f64::from(level.min(100)) / PERCENT_PER_CELL).round() as usize)
        .min(SKILL_BAR_WIDTH);
    format!("{}{}", "#".repeat(filled), ".".repeat(SKILL_BAR_WIDTH - filled))
}

fn skill_line(skill: &Skill) -> String {
    format!(
        "{:<16} {:>3}% {}",
        skill.name,
        skill.level,
        skill_bar(skill.level)
    )
}

/// `Label       : value` lines
pub fn render_basic(cv: &CvDataset) -> String {
    cv.basic
        .iter()
        .map(|info| format!("{:<12}: {}", info.label, info.value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per skill with a percentage and a bar
pub fn render_skills(cv: &CvDataset) -> String {
    cv.skills.iter().map(skill_line).collect::<Vec<_>>().join("\n")
}

/// `[period] company`, the role and one `- bullet` line per bullet
///
/// An entry without bullets still gets a bare `  - ` line.
pub fn render_experience(cv: &CvDataset) -> String {
    cv.experience
        .iter()
        .map(|job| {
            format!(
                "[{}] {}\n  Role: {}\n  - {}",
                job.period,
                job.company,
                job.role,
                job.bullets.join("\n  - ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// `[period] degree @ school` followed by the indented description
pub fn render_education(cv: &CvDataset) -> String {
    cv.education
        .iter()
        .map(|e| format!("[{}] {} @ {}\n  {}", e.period, e.degree, e.school, e.description))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Email, LinkedIn and GitHub lines
pub fn render_contact(cv: &CvDataset) -> String {
    format!(
        "Email: {}\nLinkedIn: {}\nGitHub: {}",
        cv.contact.email, cv.contact.linkedin, cv.contact.github
    )
}
