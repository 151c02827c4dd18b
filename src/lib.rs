//! excel2txt - Dump Excel workbooks as plain text
//!
//! Excelワークブックをプレーンテキストに変換するクレートです。
//! ワークブック全体（シート名の辞書順に見出し付きで連結）または名前で指定した
//! 単一シートを、1行 = 1テキスト行、セルは `, ` 区切りで出力します。
//! 空セルは `None` として出力されます。
//!
//! スプレッドシートの読み込みにはcalamineを使用します（XLSX/XLSM/XLSB/XLS/ODS）。
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use excel2txt::ConverterBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let converter = ConverterBuilder::new().build();
//!
//!     // すべてのシートを ./workbook.output.txt に出力
//!     converter.convert_workbook_file(Path::new("example.xlsx"), None)?;
//!
//!     // "Summary" シートだけを summary.txt に出力
//!     converter.convert_sheet_file(
//!         Path::new("example.xlsx"),
//!         "Summary",
//!         Some(Path::new("summary.txt")),
//!     )?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # 読み込み済みのワークブックから変換
//!
//! ```rust,no_run
//! use excel2txt::{ConverterBuilder, LoadOptions, Workbook};
//!
//! # fn main() -> Result<(), excel2txt::Excel2TxtError> {
//! let mut workbook = Workbook::open("example.xlsx", LoadOptions::default())?;
//! let converter = ConverterBuilder::new().build();
//!
//! let mut text = Vec::new();
//! converter.write_workbook(&mut workbook, &mut text)?;
//! # Ok(())
//! # }
//! ```

mod api;
mod builder;
mod cli;
mod error;
mod formatter;
mod output;
mod parser;
mod sanitize;
mod types;

// 公開API
pub use api::{
    default_sheet_output_path, default_workbook_output_path, LoadOptions, DEFAULT_WORKBOOK_OUTPUT,
};
pub use builder::{Converter, ConverterBuilder};
pub use cli::{parse_args, usage, wants_help, Arguments, Invocation};
pub use error::{ArgsError, Excel2TxtError};
pub use formatter::{render_lines, render_row, SEPARATOR};
pub use parser::Workbook;
pub use sanitize::{sanitize_filename, INVALID_FILENAME_CHARS};
pub use types::{CellValue, Worksheet, NULL_TOKEN};
