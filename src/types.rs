//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。

use std::fmt;

use calamine::{Data, Range};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::formatter;

/// 空セルの表示文字列
pub const NULL_TOKEN: &str = "None";

/// セルの値を表す列挙型
///
/// 各バリアントの文字列化規則は`Display`実装に一か所だけ定義されています。
///
/// | バリアント | 出力例 |
/// |-----------|--------|
/// | `Empty` | `None` |
/// | `String` | そのまま |
/// | `Int` / `Float` | `1`, `1.5` |
/// | `Bool` | `True`, `False` |
/// | `DateTime` | `2024-01-02 00:00:00` |
/// | `Time` | `12:30:00` |
/// | `Duration` | `1 day, 2:00:00` |
/// | `Error` | `#DIV/0!` |
/// | `Formula` | `=SUM(A1:B1)` |
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// 空セル
    Empty,

    /// 文字列
    String(String),

    /// 整数
    Int(i64),

    /// 浮動小数点数
    Float(f64),

    /// 論理値
    Bool(bool),

    /// 日時
    DateTime(NaiveDateTime),

    /// 日付部分を持たない時刻（1900年エポックでシリアル値が1未満）
    Time(NaiveTime),

    /// 経過時間
    Duration(Duration),

    /// エラー値（例: #DIV/0!）
    Error(String),

    /// 数式（先頭の`=`を含まない）
    Formula(String),
}

impl CellValue {
    /// 値が空かどうかを判定
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => f.write_str(NULL_TOKEN),
            CellValue::String(s) => f.write_str(s),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(n) => write!(f, "{}", n),
            CellValue::Bool(true) => f.write_str("True"),
            CellValue::Bool(false) => f.write_str("False"),
            CellValue::DateTime(dt) => f.write_str(&formatter::format_datetime(dt)),
            CellValue::Time(t) => f.write_str(&formatter::format_time(t)),
            CellValue::Duration(d) => f.write_str(&formatter::format_duration(d)),
            CellValue::Error(e) => f.write_str(e),
            CellValue::Formula(formula) => write!(f, "={}", formula),
        }
    }
}

impl From<&Data> for CellValue {
    fn from(cell: &Data) -> Self {
        match cell {
            Data::Empty => CellValue::Empty,
            Data::String(s) => CellValue::String(s.clone()),
            Data::Int(i) => CellValue::Int(*i),
            Data::Float(n) => CellValue::Float(*n),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => {
                // エポック（1900年/1904年）の判定はcalamineに任せる
                let converted = if dt.is_duration() {
                    dt.as_duration().map(CellValue::Duration)
                } else {
                    dt.as_datetime().map(datetime_or_time)
                };
                // 日付として表現できないシリアル値は数値のまま扱う
                converted.unwrap_or(CellValue::Float(dt.as_f64()))
            }
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::String(s.clone()),
            Data::Error(e) => CellValue::Error(e.to_string()),
        }
    }
}

/// 1900-01-01より前の日時は日付部分を持たない時刻として扱う
fn datetime_or_time(dt: NaiveDateTime) -> CellValue {
    match NaiveDate::from_ymd_opt(1900, 1, 1) {
        Some(first_day) if dt.date() < first_day => CellValue::Time(dt.time()),
        _ => CellValue::DateTime(dt),
    }
}

/// 1枚のワークシート
///
/// calamineから取得したセル範囲を所有します。ワークブックとは独立した値なので、
/// ワークブックを閉じた後も安全に参照できます。
#[derive(Debug, Clone)]
pub struct Worksheet {
    name: String,
    cells: Range<Data>,
    formulas: Option<Range<String>>,
}

impl Worksheet {
    pub(crate) fn new(name: String, cells: Range<Data>, formulas: Option<Range<String>>) -> Self {
        Self {
            name,
            cells,
            formulas,
        }
    }

    /// シート名
    pub fn name(&self) -> &str {
        &self.name
    }

    /// A1から数えた (行数, 列数)
    ///
    /// セルが1つもない場合は`(0, 0)`。
    pub fn dimensions(&self) -> (u32, u32) {
        let cell_end = self.cells.end();
        let formula_end = self.formulas.as_ref().and_then(|f| f.end());

        match (cell_end, formula_end) {
            (None, None) => (0, 0),
            (Some(end), None) | (None, Some(end)) => (end.0 + 1, end.1 + 1),
            (Some(a), Some(b)) => (a.0.max(b.0) + 1, a.1.max(b.1) + 1),
        }
    }

    /// 指定位置（0始まり、A1基準）のセル値を取得
    pub fn cell(&self, row: u32, col: u32) -> CellValue {
        if let Some(formula) = self
            .formulas
            .as_ref()
            .and_then(|f| f.get_value((row, col)))
            .filter(|f| !f.is_empty())
        {
            return CellValue::Formula(formula.clone());
        }

        self.cells
            .get_value((row, col))
            .map(CellValue::from)
            .unwrap_or(CellValue::Empty)
    }

    /// 行を上から順に走査する
    ///
    /// 使用範囲の前にある空行・空列も`Empty`として含めます（A1起点のグリッド）。
    /// 行末の空セルも切り詰めません。
    pub fn rows(&self) -> impl Iterator<Item = Vec<CellValue>> + '_ {
        let (height, width) = self.dimensions();
        (0..height).map(move |row| (0..width).map(|col| self.cell(row, col)).collect())
    }
}
