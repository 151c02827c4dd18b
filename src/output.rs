//! Output Module
//!
//! テキスト出力の書式（シート見出し、行、シート区切り）をまとめたライター。

use std::io::{self, Write};

use crate::formatter::render_lines;
use crate::types::Worksheet;

/// 見出しの両側に付ける記号
const HEADER_MARK: &str = "##########";

/// テキスト出力ライター
///
/// 任意の`Write`に対して、変換結果を1行ずつ書き込みます。
pub(crate) struct TextWriter<W: Write> {
    inner: W,
}

impl<W: Write> TextWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// シート見出し `##########  <name>  ##########` と空行1つを書き込む
    pub fn write_header(&mut self, sheet_name: &str) -> io::Result<()> {
        write!(
            self.inner,
            "{}  {}  {}\n\n",
            HEADER_MARK, sheet_name, HEADER_MARK
        )
    }

    /// シートの全行を書き込み、書き込んだ行数を返す
    pub fn write_sheet(&mut self, worksheet: &Worksheet) -> io::Result<usize> {
        let mut count = 0;
        for line in render_lines(worksheet) {
            writeln!(self.inner, "{}", line)?;
            count += 1;
        }
        Ok(count)
    }

    /// シート区切り（空行2つ）を書き込む
    pub fn write_separator(&mut self) -> io::Result<()> {
        self.inner.write_all(b"\n\n")
    }

    /// バッファをフラッシュして内部のライターを返す
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
