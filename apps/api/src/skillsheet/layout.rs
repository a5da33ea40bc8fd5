//! Fixed positions, glyphs and labels of the skill-sheet template.
//!
//! Extraction is purely positional: every row/column index the extractors read
//! lives here, 0-indexed against the absolute sheet position. Layout drift in
//! the template is fixed in this file only.

/// Name of the worksheet the loader selects.
pub const SHEET_NAME: &str = "スキルシート";

/// A labelled single-cell field at a fixed position.
#[derive(Debug, Clone, Copy)]
pub struct FieldPosition {
    pub label: &'static str,
    pub row: usize,
    pub col: usize,
}

const fn field(label: &'static str, row: usize, col: usize) -> FieldPosition {
    FieldPosition { label, row, col }
}

// ── Basic info (rows 3-5 of the sheet) ──────────────────────────────────────

/// Basic-info fields in output order.
pub const BASIC_INFO_FIELDS: [FieldPosition; 9] = [
    field("ふりがな", 2, 1),
    field("性別", 2, 3),
    field("年齢", 2, 5),
    field("生年月日", 2, 7),
    field("氏名", 3, 1),
    field("国籍", 3, 3),
    field("配偶者", 3, 5),
    field("最寄駅", 3, 7),
    field("学歴", 4, 1),
];

// ── Self-introduction ───────────────────────────────────────────────────────

pub const SELF_PR_ROWS: std::ops::Range<usize> = 6..9;
pub const SELF_PR_COL: usize = 1;

// ── Certifications ──────────────────────────────────────────────────────────

pub const CERT_ROW: usize = 4;
pub const CERT_START_COL: usize = 7;
/// Acquisition date, only paired with the entry in `CERT_START_COL`.
pub const CERT_DATE_COL: usize = 6;
pub const CERT_HEADER_LABEL: &str = "資格";

// ── Project table ───────────────────────────────────────────────────────────

/// First data row of the project table (row 12 of the sheet).
pub const PROJECT_START_ROW: usize = 11;
/// Blank-run termination is only checked on rows strictly after this one.
pub const PROJECT_TERMINATION_MIN_ROW: usize = 15;
/// A run of this many blank identifier cells ends the table.
pub const PROJECT_BLANK_RUN: usize = 5;

pub const PROJECT_ID_COL: usize = 1;
pub const PROJECT_PERIOD_COL: usize = 2;
pub const PROJECT_SUMMARY_COL: usize = 3;
pub const PROJECT_ROLE_COL: usize = 4;
pub const PROJECT_OS_COL: usize = 5;
pub const PROJECT_DB_COL: usize = 6;
pub const PROJECT_TOOLS_COL: usize = 7;
pub const PROJECT_LANGUAGE_COL: usize = 8;

/// "Not applicable" placeholder. Filtered for OS/DB/tools only.
pub const NOT_APPLICABLE: &str = "ー";

/// Glyphs that mark a phase as worked on.
pub const PHASE_MARKS: [&str; 2] = ["●", "○"];

/// Phase columns in vocabulary order (J-O of the sheet).
pub const PHASE_COLUMNS: [(usize, &str); 6] = [
    (9, "要件定義"),
    (10, "基本設計"),
    (11, "詳細設計"),
    (12, "実装/テスト"),
    (13, "結合テスト"),
    (14, "保守/運用"),
];

pub const PHASE_SEPARATOR: &str = "、";
