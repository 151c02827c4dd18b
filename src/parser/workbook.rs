//! Workbook Module
//!
//! calamineのラッパーとして、ワークブックを読み取り専用で開き、
//! シート単位で`Worksheet`を取り出す機能を提供します。

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Reader, Sheets};

use crate::api::LoadOptions;
use crate::error::Excel2TxtError;
use crate::types::Worksheet;

/// ワークブック
///
/// calamineの`Sheets`（XLSX/XLSM/XLSB/XLS/ODS）を保持します。
/// 構造を変更するAPIは持たず、常に読み取り専用です。
pub struct Workbook<RS = BufReader<File>> {
    /// calamineのワークブック
    sheets: Sheets<RS>,
    /// 読み込みモード
    options: LoadOptions,
    /// `read_only = false`の場合に事前デコードしたシート
    loaded: BTreeMap<String, Worksheet>,
}

impl Workbook<BufReader<File>> {
    /// ファイルパスからワークブックを開く
    ///
    /// 形式は拡張子から判定し、判定できない場合は各形式を順に試します。
    /// パスの存在確認は呼び出し側の責務です。
    ///
    /// # 戻り値
    ///
    /// * `Ok(Workbook)` - 読み込みに成功した場合
    /// * `Err(Excel2TxtError::Load)` - スプレッドシートとして解析できない場合
    pub fn open<P: AsRef<Path>>(path: P, options: LoadOptions) -> Result<Self, Excel2TxtError> {
        let path = path.as_ref();
        tracing::debug!(
            path = %path.display(),
            read_only = options.read_only,
            values_only = options.values_only,
            "opening workbook"
        );

        let sheets = open_workbook_auto(path)?;
        Self::with_sheets(sheets, options)
    }
}

impl<RS: Read + Seek + Clone> Workbook<RS> {
    /// メモリ上のデータなど、任意のリーダーからワークブックを開く
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use std::io::Cursor;
    /// use excel2txt::{LoadOptions, Workbook};
    ///
    /// # fn main() -> Result<(), excel2txt::Excel2TxtError> {
    /// let data: Vec<u8> = std::fs::read("example.xlsx")?;
    /// let workbook = Workbook::from_reader(Cursor::new(data), LoadOptions::default())?;
    /// println!("{:?}", workbook.sheet_names());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_reader(reader: RS, options: LoadOptions) -> Result<Self, Excel2TxtError> {
        let sheets = open_workbook_auto_from_rs(reader)?;
        Self::with_sheets(sheets, options)
    }
}

impl<RS: Read + Seek> Workbook<RS> {
    fn with_sheets(sheets: Sheets<RS>, options: LoadOptions) -> Result<Self, Excel2TxtError> {
        let mut workbook = Self {
            sheets,
            options,
            loaded: BTreeMap::new(),
        };

        if !options.read_only {
            for name in workbook.sheet_names() {
                let worksheet = workbook.decode(&name)?;
                workbook.loaded.insert(name, worksheet);
            }
        }

        Ok(workbook)
    }

    /// 読み込みモード
    pub fn options(&self) -> LoadOptions {
        self.options
    }

    /// すべてのシート名をワークブック内の順序で取得
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    /// シートが存在するかを判定
    pub fn has_sheet(&self, name: &str) -> bool {
        self.sheet_names().iter().any(|n| n == name)
    }

    /// シート名からワークシートを取得
    ///
    /// # 戻り値
    ///
    /// * `Ok(Worksheet)` - シートの取得に成功した場合
    /// * `Err(Excel2TxtError::SheetNotFound)` - シートが存在しない場合
    /// * `Err(Excel2TxtError::Load)` - シートの解析に失敗した場合
    pub fn worksheet(&mut self, name: &str) -> Result<Worksheet, Excel2TxtError> {
        if let Some(worksheet) = self.loaded.get(name) {
            return Ok(worksheet.clone());
        }
        if !self.has_sheet(name) {
            return Err(Excel2TxtError::SheetNotFound(name.to_string()));
        }
        self.decode(name)
    }

    /// calamineからシートを1枚デコードする
    fn decode(&mut self, name: &str) -> Result<Worksheet, Excel2TxtError> {
        let cells = self.sheets.worksheet_range(name)?;

        // 数式は値のみモードでない場合だけ取得する
        let formulas = if self.options.values_only {
            None
        } else {
            Some(self.sheets.worksheet_formula(name)?)
        };

        tracing::debug!(sheet = name, dimensions = ?cells.get_size(), "decoded worksheet");
        Ok(Worksheet::new(name.to_string(), cells, formulas))
    }
}

impl<RS> std::fmt::Debug for Workbook<RS> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workbook")
            .field("options", &self.options)
            .field("loaded", &self.loaded.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
