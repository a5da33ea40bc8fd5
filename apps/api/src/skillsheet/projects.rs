//! Project history table scanner.
//!
//! Rows from `PROJECT_START_ROW` onward are project rows when their identifier
//! cell is non-empty. Blank identifier rows are skipped, and after
//! `PROJECT_TERMINATION_MIN_ROW` a window of `PROJECT_BLANK_RUN` blank
//! identifiers ends the table. Gaps of up to four blank rows are allowed
//! inside real data.

use crate::skillsheet::grid::Grid;
use crate::skillsheet::layout::{
    NOT_APPLICABLE, PHASE_COLUMNS, PHASE_MARKS, PROJECT_BLANK_RUN, PROJECT_DB_COL,
    PROJECT_ID_COL, PROJECT_LANGUAGE_COL, PROJECT_OS_COL, PROJECT_PERIOD_COL, PROJECT_ROLE_COL,
    PROJECT_START_ROW, PROJECT_SUMMARY_COL, PROJECT_TERMINATION_MIN_ROW, PROJECT_TOOLS_COL,
};
use crate::skillsheet::models::Project;

pub fn extract_projects(grid: &Grid) -> Vec<Project> {
    let mut projects = Vec::new();

    for row in PROJECT_START_ROW..grid.row_count() {
        if let Some(id) = grid.text_at(row, PROJECT_ID_COL) {
            projects.push(read_project_row(grid, row, id));
        } else if row > PROJECT_TERMINATION_MIN_ROW && ends_table(grid, row) {
            break;
        }
    }

    projects
}

fn read_project_row(grid: &Grid, row: usize, id: String) -> Project {
    let applicable = |col: usize| grid.text_at(row, col).filter(|v| v != NOT_APPLICABLE);

    Project {
        id: Some(id),
        period: grid.text_at(row, PROJECT_PERIOD_COL),
        summary: grid.text_at(row, PROJECT_SUMMARY_COL),
        role: grid.text_at(row, PROJECT_ROLE_COL),
        server_os: applicable(PROJECT_OS_COL),
        database: applicable(PROJECT_DB_COL),
        tools: applicable(PROJECT_TOOLS_COL),
        language: grid.text_at(row, PROJECT_LANGUAGE_COL),
        phases: marked_phases(grid, row),
    }
}

fn marked_phases(grid: &Grid, row: usize) -> Vec<String> {
    PHASE_COLUMNS
        .iter()
        .filter(|(col, _)| {
            grid.text_at(row, *col)
                .is_some_and(|mark| PHASE_MARKS.contains(&mark.as_str()))
        })
        .map(|(_, name)| name.to_string())
        .collect()
}

/// True when every row of the window starting at `row` has a blank
/// identifier. A window cut short by the end of the grid never qualifies.
fn ends_table(grid: &Grid, row: usize) -> bool {
    let window_end = (row + PROJECT_BLANK_RUN).min(grid.row_count());
    let blank = (row..window_end)
        .filter(|&r| grid.text_at(r, PROJECT_ID_COL).is_none())
        .count();
    blank >= PROJECT_BLANK_RUN
}
