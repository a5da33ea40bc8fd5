// Skill sheet ingestion: workbook bytes → grid → SkillSheet → prompt text.
// Extraction is positional; all offsets live in `layout`.

pub mod cache;
pub mod extract;
pub mod format;
pub mod grid;
pub mod handlers;
pub mod layout;
pub mod loader;
pub mod models;
pub mod projects;

use crate::skillsheet::grid::Grid;
use crate::skillsheet::loader::SkillSheetError;
use crate::skillsheet::models::SkillSheet;

/// Prefix of every user-facing parse failure message.
pub const PARSE_ERROR_PREFIX: &str = "スキルシート解析エラー";

/// Loads the `スキルシート` worksheet and extracts every section.
/// Only the loader can fail; extraction itself is total.
pub fn parse_skill_sheet(bytes: &[u8]) -> Result<SkillSheet, SkillSheetError> {
    let grid = loader::load(bytes)?;
    Ok(extract_skill_sheet(&grid))
}

pub fn extract_skill_sheet(grid: &Grid) -> SkillSheet {
    let sheet = SkillSheet {
        basic_info: extract::extract_basic_info(grid),
        self_pr: extract::extract_self_pr(grid),
        certifications: extract::extract_certifications(grid),
        projects: projects::extract_projects(grid),
    };

    tracing::debug!(
        "Extracted skill sheet: {} basic fields, {} certifications, {} projects",
        sheet.basic_info.fields.len(),
        sheet.certifications.len(),
        sheet.projects.len()
    );
    sheet
}

/// Error text shown to the uploader, e.g. `スキルシート解析エラー: シート「スキルシート」が見つかりません`.
pub fn describe_parse_error(err: &SkillSheetError) -> String {
    format!("{PARSE_ERROR_PREFIX}: {err}")
}
