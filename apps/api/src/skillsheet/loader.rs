//! Workbook bytes → `Grid` for the skill-sheet worksheet.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use thiserror::Error;
use tracing::warn;

use crate::skillsheet::grid::{Cell, Grid};
use crate::skillsheet::layout::SHEET_NAME;

#[derive(Debug, Error)]
pub enum SkillSheetError {
    #[error("ファイルを読み込めません: {0}")]
    Unreadable(String),

    #[error("シート「{0}」が見つかりません")]
    MissingSheet(String),
}

/// Opens a workbook from raw bytes and returns the `スキルシート` sheet as a grid.
/// The format (xlsx/xlsm/xlsb/xls/ods) is detected from the content.
pub fn load(bytes: &[u8]) -> Result<Grid, SkillSheetError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| SkillSheetError::Unreadable(e.to_string()))?;

    if !workbook.sheet_names().iter().any(|name| name == SHEET_NAME) {
        return Err(SkillSheetError::MissingSheet(SHEET_NAME.to_string()));
    }

    let range = workbook
        .worksheet_range(SHEET_NAME)
        .map_err(|e| SkillSheetError::Unreadable(e.to_string()))?;

    Ok(grid_from_range(&range))
}

/// Copies a calamine range into a grid at absolute sheet positions.
/// calamine ranges start at the first used cell, so leading blank rows and
/// columns are restored here.
pub fn grid_from_range(range: &Range<Data>) -> Grid {
    let mut grid = Grid::default();
    let Some((row0, col0)) = range.start() else {
        return grid;
    };

    let mut error_cells = 0usize;
    for (row, col, data) in range.used_cells() {
        if matches!(data, Data::Error(_)) {
            error_cells += 1;
        }
        let cell = convert_cell(data);
        if cell != Cell::Empty {
            grid.set(row0 as usize + row, col0 as usize + col, cell);
        }
    }
    if error_cells > 0 {
        warn!("Skill sheet contains {error_cells} error cell(s); treated as empty");
    }
    grid
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::text(s.as_str()),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::text(if *b { "TRUE" } else { "FALSE" }),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ts) if ts.time() == chrono::NaiveTime::MIN => {
                Cell::text(ts.format("%Y-%m-%d").to_string())
            }
            Some(ts) => Cell::text(ts.format("%Y-%m-%d %H:%M:%S").to_string()),
            None => Cell::Number(dt.as_f64()),
        },
    }
}
