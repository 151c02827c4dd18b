//! Public API Types
//!
//! 公開APIで使用する設定型と既定値を定義するモジュール。

use std::path::PathBuf;

/// ワークブック全体を変換する際の既定の出力先
pub const DEFAULT_WORKBOOK_OUTPUT: &str = "./workbook.output.txt";

/// ワークブックの読み込みモード
///
/// 2つのフラグは互いに独立しています。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// 読み取り専用モード
    ///
    /// * `true`: シートはアクセスされた時点で1枚ずつデコードされる（逐次走査向け）
    /// * `false`: 読み込み時にすべてのシートをデコードしてメモリに保持する
    pub read_only: bool,

    /// 値のみモード
    ///
    /// * `true`: 数式セルはキャッシュされた計算結果を返す
    /// * `false`: 数式セルは数式文字列（例: `=SUM(A1:B1)`）を返す
    pub values_only: bool,
}

impl Default for LoadOptions {
    /// CLIと同じ既定値（読み取り専用・値のみ）
    fn default() -> Self {
        Self {
            read_only: true,
            values_only: true,
        }
    }
}

/// ワークブック全体変換の既定の出力パス（`./workbook.output.txt`）
pub fn default_workbook_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_WORKBOOK_OUTPUT)
}

/// 単一シート変換の既定の出力パス（`./<サニタイズ済みシート名>.txt`）
///
/// # 使用例
///
/// ```rust
/// use excel2txt::default_sheet_output_path;
///
/// assert_eq!(default_sheet_output_path("a/b").to_str(), Some("./ab.txt"));
/// ```
pub fn default_sheet_output_path(sheet_name: &str) -> PathBuf {
    PathBuf::from(format!(
        "./{}.txt",
        crate::sanitize::sanitize_filename(sheet_name)
    ))
}
