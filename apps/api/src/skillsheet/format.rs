//! Renders a `SkillSheet` into the text block embedded in LLM prompts.
//!
//! The labels, section order and indentation here end up verbatim in every
//! prompt that carries a skill sheet. Changing any of them changes prompt
//! content, so tests pin the exact output.

use crate::skillsheet::layout::PHASE_SEPARATOR;
use crate::skillsheet::models::{Project, SkillSheet};

pub const BANNER: &str = "【スキルシート情報】";
pub const BASIC_INFO_HEADING: &str = "■ 基本情報";
pub const SELF_PR_HEADING: &str = "■ 自己PR";
pub const CERTIFICATIONS_HEADING: &str = "■ 保有資格";
pub const PROJECTS_HEADING: &str = "■ プロジェクト経歴";

const TECH_SEPARATOR: &str = ", ";

pub fn format_skill_sheet(sheet: &SkillSheet) -> String {
    let mut lines = vec![BANNER.to_string(), String::new()];

    if !sheet.basic_info.is_empty() {
        lines.push(BASIC_INFO_HEADING.to_string());
        for (label, value) in &sheet.basic_info.fields {
            lines.push(format!("  {label}: {value}"));
        }
        lines.push(String::new());
    }

    if !sheet.self_pr.is_empty() {
        lines.push(SELF_PR_HEADING.to_string());
        lines.push(format!("  {}", sheet.self_pr));
        lines.push(String::new());
    }

    if !sheet.certifications.is_empty() {
        lines.push(CERTIFICATIONS_HEADING.to_string());
        for cert in &sheet.certifications {
            lines.push(format!("  - {cert}"));
        }
        lines.push(String::new());
    }

    if !sheet.projects.is_empty() {
        lines.push(PROJECTS_HEADING.to_string());
        for (index, project) in sheet.projects.iter().enumerate() {
            push_project(&mut lines, index + 1, project);
        }
        lines.push(String::new());
    }

    // Every line, including the last, ends with a newline
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn push_project(lines: &mut Vec<String>, position: usize, project: &Project) {
    lines.push(String::new());
    match &project.id {
        Some(id) => lines.push(format!("  【プロジェクト {id}】")),
        None => lines.push(format!("  【プロジェクト {position}】")),
    }

    if let Some(period) = &project.period {
        lines.push(format!("    期間: {period}"));
    }
    if let Some(summary) = &project.summary {
        lines.push(format!("    概要: {summary}"));
    }
    if let Some(role) = &project.role {
        lines.push(format!("    役割: {role}"));
    }

    let tech: Vec<String> = [
        ("OS", &project.server_os),
        ("DB", &project.database),
        ("ツール", &project.tools),
        ("言語", &project.language),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.as_ref().map(|v| format!("{label}: {v}")))
    .collect();
    if !tech.is_empty() {
        lines.push(format!("    技術: {}", tech.join(TECH_SEPARATOR)));
    }

    if !project.phases.is_empty() {
        lines.push(format!("    担当工程: {}", project.phases.join(PHASE_SEPARATOR)));
    }
}
