//! Fixed-position extractors for the header part of the skill sheet.
//!
//! Each function is total over any grid: missing rows, short rows and odd
//! cell types simply produce fewer values.

use crate::skillsheet::grid::Grid;
use crate::skillsheet::layout::{
    BASIC_INFO_FIELDS, CERT_DATE_COL, CERT_HEADER_LABEL, CERT_ROW, CERT_START_COL, SELF_PR_COL,
    SELF_PR_ROWS,
};
use crate::skillsheet::models::BasicInfo;

pub fn extract_basic_info(grid: &Grid) -> BasicInfo {
    let fields = BASIC_INFO_FIELDS
        .iter()
        .filter_map(|f| {
            grid.text_at(f.row, f.col)
                .map(|value| (f.label.to_string(), value))
        })
        .collect();
    BasicInfo { fields }
}

/// Joins the non-empty self-PR cells with a single space.
pub fn extract_self_pr(grid: &Grid) -> String {
    SELF_PR_ROWS
        .filter_map(|row| grid.text_at(row, SELF_PR_COL))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn extract_certifications(grid: &Grid) -> Vec<String> {
    let mut certifications = Vec::new();

    for col in CERT_START_COL..grid.row_len(CERT_ROW) {
        let Some(name) = grid.text_at(CERT_ROW, col) else {
            continue;
        };
        if name == CERT_HEADER_LABEL {
            continue;
        }

        let date = (col == CERT_START_COL)
            .then(|| grid.text_at(CERT_ROW, CERT_DATE_COL))
            .flatten();
        certifications.push(match date {
            Some(date) => format!("{date} {name}"),
            None => name,
        });
    }

    certifications
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skillsheet::grid::Cell;

    fn grid_with(cells: &[(usize, usize, &str)]) -> Grid {
        let mut grid = Grid::default();
        for &(row, col, text) in cells {
            grid.set(row, col, Cell::text(text));
        }
        grid
    }

    #[test]
    fn test_basic_info_in_template_order() {
        let mut grid = grid_with(&[
            (3, 1, "山田 太郎"),
            (2, 1, "やまだ たろう"),
            (2, 3, "男"),
            (4, 1, "〇〇大学 情報工学科 卒"),
        ]);
        grid.set(2, 5, Cell::Number(28.0));

        let info = extract_basic_info(&grid);
        let labels: Vec<&str> = info.fields.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(labels, vec!["ふりがな", "性別", "年齢", "氏名", "学歴"]);
        assert_eq!(info.get("年齢"), Some("28"));
        assert_eq!(info.get("国籍"), None);
    }

    #[test]
    fn test_basic_info_on_tiny_grid_is_empty() {
        let grid = grid_with(&[(0, 0, "タイトル")]);
        assert!(extract_basic_info(&grid).is_empty());
    }

    #[test]
    fn test_self_pr_joins_non_empty_rows() {
        let grid = grid_with(&[(6, 1, "  Javaでの開発経験5年。 "), (8, 1, "チームリーダー経験あり。")]);
        assert_eq!(
            extract_self_pr(&grid),
            "Javaでの開発経験5年。 チームリーダー経験あり。"
        );
    }

    #[test]
    fn test_self_pr_ignores_rows_outside_range() {
        let grid = grid_with(&[(5, 1, "前"), (9, 1, "後"), (7, 2, "別の列")]);
        assert_eq!(extract_self_pr(&grid), "");
    }

    #[test]
    fn test_certifications_skip_header_and_pair_first_date() {
        let grid = grid_with(&[
            (4, 6, "2020/10"),
            (4, 7, "基本情報技術者"),
            (4, 8, "資格"),
            (4, 10, "TOEIC 800"),
        ]);
        assert_eq!(
            extract_certifications(&grid),
            vec!["2020/10 基本情報技術者".to_string(), "TOEIC 800".to_string()]
        );
    }

    #[test]
    fn test_certifications_without_date() {
        let grid = grid_with(&[(4, 7, "応用情報技術者")]);
        assert_eq!(extract_certifications(&grid), vec!["応用情報技術者".to_string()]);
    }

    #[test]
    fn test_certifications_missing_row() {
        let grid = grid_with(&[(0, 0, "x")]);
        assert!(extract_certifications(&grid).is_empty());
    }
}
