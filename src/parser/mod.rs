//! Parser Module
//!
//! calamineを使用したワークブック読み込みの薄いアダプター。

mod workbook;

pub use workbook::Workbook;
