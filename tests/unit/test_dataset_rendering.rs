//! Unit tests for CV rendering and search

use cvterm::dataset::render::{
    render_contact, render_education, render_experience, render_skills, skill_bar, SKILL_BAR_WIDTH,
};
use cvterm::dataset::{CvDataset, Skill};
use cvterm::interpreter::search::{matching_blocks, search_experience};

fn dataset_with_skills(skills: &[(&str, u8)]) -> CvDataset {
    let mut cv = CvDataset::sample();
    cv.skills = skills
        .iter()
        .map(|(name, level)| Skill {
            name: name.to_string(),
            level: *level,
        })
        .collect();
    cv
}

#[test]
fn test_skill_rated_80_fills_16_of_20() {
    let bar = skill_bar(80);
    assert_eq!(bar.chars().count(), SKILL_BAR_WIDTH);
    assert_eq!(bar.chars().filter(|&c| c == '#').count(), 16);
    assert_eq!(bar, format!("{}{}", "#".repeat(16), ".".repeat(4)));
}

#[test]
fn test_skill_bar_edges() {
    assert_eq!(skill_bar(0), ".".repeat(20));
    assert_eq!(skill_bar(100), "#".repeat(20));
    // 2.6 rounds up, 2.4 rounds down.
    assert_eq!(skill_bar(13).matches('#').count(), 3);
    assert_eq!(skill_bar(12).matches('#').count(), 2);
}

#[test]
fn test_skills_section_line_per_skill() {
    let cv = dataset_with_skills(&[("Rust", 80), ("Go", 5)]);
    let rendered = render_skills(&cv);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Rust"));
    assert!(lines[0].contains(" 80% "));
    assert!(lines[0].ends_with(&skill_bar(80)));
    assert!(lines[1].contains("  5% "));
}

#[test]
fn test_builtin_skills_render() {
    let rendered = render_skills(CvDataset::builtin());
    let plsql = rendered
        .lines()
        .find(|l| l.starts_with("PL/SQL"))
        .unwrap();
    assert!(plsql.ends_with("################...."));
}

#[test]
fn test_experience_has_one_block_per_job() {
    let cv = CvDataset::builtin();
    let rendered = render_experience(cv);
    assert_eq!(rendered.split("\n\n").count(), cv.experience.len());
    for job in &cv.experience {
        assert!(rendered.contains(&format!("[{}] {}", job.period, job.company)));
    }
}

#[test]
fn test_education_mentions_school() {
    let rendered = render_education(CvDataset::builtin());
    assert_eq!(rendered.matches("@ Romanian-American University of Bucharest").count(), 2);
}

#[test]
fn test_contact_lists_links() {
    let rendered = render_contact(CvDataset::builtin());
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Email: "));
    assert!(lines[1].starts_with("LinkedIn: https://"));
    assert!(lines[2].starts_with("GitHub: https://"));
}

#[test]
fn test_search_plsql_matches_exactly_the_plsql_jobs() {
    let cv = CvDataset::builtin();
    let blocks: Vec<String> = render_experience(cv)
        .split("\n\n")
        .map(str::to_string)
        .collect();
    let expected: Vec<String> = blocks
        .iter()
        .filter(|b| b.to_lowercase().contains("pl/sql"))
        .cloned()
        .collect();

    let found = matching_blocks(cv, "PL/SQL");
    assert!(!found.is_empty());
    assert!(found.len() < blocks.len());
    assert_eq!(found, expected);
    assert_eq!(matching_blocks(cv, "pl/sql"), found);
}

#[test]
fn test_search_no_match_message() {
    assert_eq!(
        search_experience(CvDataset::builtin(), "zzzznotfound"),
        "No matches for 'zzzznotfound'."
    );
}

#[test]
fn test_search_output_is_blank_line_separated() {
    let cv = CvDataset::builtin();
    let found = matching_blocks(cv, "PL/SQL");
    assert_eq!(search_experience(cv, "PL/SQL"), found.join("\n\n"));
}
