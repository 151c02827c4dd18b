//! Formatter Module
//!
//! ワークシートをテキスト行に変換する処理と、日時セルの文字列化を提供するモジュール。
//! シリアル値から日時への変換（1900年/1904年エポック）はcalamineが行います。

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};

use crate::types::{CellValue, Worksheet};

/// セル同士の区切り文字列
pub const SEPARATOR: &str = ", ";

/// 1行分のセル値を区切り文字列で連結する
///
/// 空セルは`None`として出力され、行末の空セルも省略しません。
///
/// # 使用例
///
/// ```rust
/// use excel2txt::{render_row, CellValue};
///
/// let row = vec![CellValue::Float(1.0), CellValue::String("x".into()), CellValue::Empty];
/// assert_eq!(render_row(&row), "1, x, None");
/// ```
pub fn render_row(row: &[CellValue]) -> String {
    let mut line = String::new();
    for (idx, cell) in row.iter().enumerate() {
        if idx > 0 {
            line.push_str(SEPARATOR);
        }
        line.push_str(&cell.to_string());
    }
    line
}

/// ワークシートを上から順にテキスト行へ変換する
///
/// 行の並べ替えやフィルタリングは行いません。
pub fn render_lines(worksheet: &Worksheet) -> impl Iterator<Item = String> + '_ {
    worksheet.rows().map(|row| render_row(&row))
}

/// 日時を `YYYY-MM-DD HH:MM:SS` 形式に変換（秒未満は切り捨て）
pub(crate) fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// 時刻を `HH:MM:SS` 形式に変換
pub(crate) fn format_time(time: &NaiveTime) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}

/// 経過時間を `[N day[s], ]H:MM:SS` 形式に変換
///
/// 例: 26時間 → `1 day, 2:00:00`、90分 → `1:30:00`
pub(crate) fn format_duration(duration: &Duration) -> String {
    let total = duration.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();

    let days = total / 86_400;
    let rest = total % 86_400;
    let clock = format!("{}:{:02}:{:02}", rest / 3600, (rest % 3600) / 60, rest % 60);

    match days {
        0 => format!("{}{}", sign, clock),
        1 => format!("{}1 day, {}", sign, clock),
        n => format!("{}{} days, {}", sign, n, clock),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{Data, Range};
    use chrono::NaiveDate;

    #[test]
    fn test_render_row_basic() {
        let row = vec![
            CellValue::Float(1.0),
            CellValue::String("x".to_string()),
            CellValue::Empty,
        ];
        assert_eq!(render_row(&row), "1, x, None");
    }

    #[test]
    fn test_render_row_keeps_trailing_empty_cells() {
        let row = vec![
            CellValue::String("a".to_string()),
            CellValue::Empty,
            CellValue::Empty,
        ];
        assert_eq!(render_row(&row), "a, None, None");
    }

    #[test]
    fn test_render_row_empty() {
        assert_eq!(render_row(&[]), "");
    }

    #[test]
    fn test_render_row_does_not_escape_separator() {
        let row = vec![CellValue::String("a, b".to_string()), CellValue::Int(3)];
        assert_eq!(render_row(&row), "a, b, 3");
    }

    #[test]
    fn test_render_lines_in_row_order() {
        let mut range = Range::new((0, 0), (2, 1));
        range.set_value((0, 0), Data::String("name".to_string()));
        range.set_value((0, 1), Data::String("qty".to_string()));
        range.set_value((1, 0), Data::String("apple".to_string()));
        range.set_value((1, 1), Data::Float(3.0));
        range.set_value((2, 0), Data::String("pear".to_string()));

        let sheet = Worksheet::new("Fruit".to_string(), range, None);
        let lines: Vec<String> = render_lines(&sheet).collect();

        assert_eq!(lines, vec!["name, qty", "apple, 3", "pear, None"]);
    }

    #[test]
    fn test_format_datetime() {
        let dt = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_milli_opt(12, 0, 5, 750)
            .unwrap();
        assert_eq!(format_datetime(&dt), "2024-01-02 12:00:05");
    }

    #[test]
    fn test_format_time() {
        let time = NaiveTime::from_hms_opt(8, 5, 0).unwrap();
        assert_eq!(format_time(&time), "08:05:00");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(&Duration::seconds(5400)), "1:30:00");
        assert_eq!(format_duration(&Duration::hours(26)), "1 day, 2:00:00");
        assert_eq!(format_duration(&Duration::hours(72)), "3 days, 0:00:00");
        assert_eq!(format_duration(&Duration::seconds(-60)), "-0:01:00");
    }

    #[allow(unused_doc_comments)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        /// 日時の大小関係が日時文字列の大小関係と一致すること
        proptest! {
            #[test]
            fn test_datetime_text_order(
                secs1 in 0i64..12_600_000_000,
                secs2 in 0i64..12_600_000_000
            ) {
                let base = NaiveDate::from_ymd_opt(1900, 1, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap();
                let dt1 = base + Duration::seconds(secs1);
                let dt2 = base + Duration::seconds(secs2);

                prop_assert_eq!(
                    dt1.cmp(&dt2),
                    format_datetime(&dt1).cmp(&format_datetime(&dt2))
                );
            }

            #[test]
            fn test_render_row_cell_count(values in proptest::collection::vec(0i64..1000, 1..20)) {
                let row: Vec<CellValue> = values.iter().map(|v| CellValue::Int(*v)).collect();
                let line = render_row(&row);
                prop_assert_eq!(line.split(SEPARATOR).count(), values.len());
            }
        }
    }
}
