//! Sanitize Module
//!
//! シート名から出力ファイル名を作る際に、ファイルシステムで使えない文字を取り除く。

/// ファイル名として使用できない文字
pub const INVALID_FILENAME_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// ファイル名から不正な文字 `<>:"/\|?*` を取り除く
///
/// 置換ではなく削除します。長さの制限や予約名（`CON`など）の扱いは行いません。
///
/// # 使用例
///
/// ```rust
/// use excel2txt::sanitize_filename;
///
/// assert_eq!(sanitize_filename("a/b"), "ab");
/// assert_eq!(sanitize_filename("<<Q1>>"), "Q1");
/// ```
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .filter(|c| !INVALID_FILENAME_CHARS.contains(c))
        .collect()
}
