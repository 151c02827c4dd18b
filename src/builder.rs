//! Builder Module
//!
//! Fluent Builder APIで`Converter`を構築し、ワークブック全体または単一シートを
//! テキストファイルへ変換する。

use std::fs::File;
use std::io::{BufWriter, Read, Seek, Write};
use std::path::{Path, PathBuf};

use crate::api::{default_sheet_output_path, default_workbook_output_path, LoadOptions};
use crate::error::Excel2TxtError;
use crate::output::TextWriter;
use crate::parser::Workbook;

/// 変換処理の設定を保持する内部構造体
#[derive(Debug, Clone, Default)]
pub(crate) struct ConversionConfig {
    /// パスから読み込む際のモード
    pub load: LoadOptions,
}

/// Fluent Builder APIを提供する構造体
///
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust
/// use excel2txt::ConverterBuilder;
///
/// let converter = ConverterBuilder::new()
///     .read_only(true)
///     .values_only(false)
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct ConverterBuilder {
    /// 内部設定（構築中）
    config: ConversionConfig,
}

impl ConverterBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - 読み取り専用モード: 有効
    /// - 値のみモード: 有効（数式はキャッシュ値で出力）
    pub fn new() -> Self {
        Self::default()
    }

    /// 読み取り専用モードを指定する
    ///
    /// * `true`: シートを1枚ずつ必要な時点でデコードする（デフォルト）
    /// * `false`: 読み込み時にすべてのシートをデコードする
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.config.load.read_only = read_only;
        self
    }

    /// 値のみモードを指定する
    ///
    /// * `true`: 数式セルはキャッシュされた計算結果を出力する（デフォルト）
    /// * `false`: 数式セルは `=SUM(A1:B1)` のような数式文字列を出力する
    pub fn values_only(mut self, values_only: bool) -> Self {
        self.config.load.values_only = values_only;
        self
    }

    /// `Converter`インスタンスを生成する
    pub fn build(self) -> Converter {
        Converter {
            config: self.config,
        }
    }
}

/// 変換処理のファサード
///
/// パスを受け取る`*_file`系メソッドは、設定された`LoadOptions`でワークブックを開いてから
/// 読み込み済みの`Workbook`を受け取るメソッドに委譲します。
///
/// # 使用例
///
/// ```rust,no_run
/// use std::path::Path;
/// use excel2txt::ConverterBuilder;
///
/// # fn main() -> Result<(), excel2txt::Excel2TxtError> {
/// let converter = ConverterBuilder::new().build();
///
/// // すべてのシートを ./workbook.output.txt へ
/// converter.convert_workbook_file(Path::new("example.xlsx"), None)?;
///
/// // "Sheet1" だけを ./Sheet1.txt へ
/// converter.convert_sheet_file(Path::new("example.xlsx"), "Sheet1", None)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    /// 変換設定
    config: ConversionConfig,
}

impl Converter {
    /// 変換に使用する読み込みモード
    pub fn load_options(&self) -> LoadOptions {
        self.config.load
    }

    /// 設定された読み込みモードでワークブックを開く
    pub fn open(&self, path: &Path) -> Result<Workbook, Excel2TxtError> {
        Workbook::open(path, self.config.load)
    }

    /// ワークブック全体をテキストファイルに変換する（パス指定）
    ///
    /// # 戻り値
    ///
    /// * `Ok(PathBuf)` - 書き込んだ出力ファイルのパス
    /// * `Err(Excel2TxtError::Load)` - 入力ファイルを解析できない場合
    /// * `Err(Excel2TxtError::Io)` - 出力に失敗した場合
    pub fn convert_workbook_file(
        &self,
        input: &Path,
        output: Option<&Path>,
    ) -> Result<PathBuf, Excel2TxtError> {
        let mut workbook = self.open(input)?;
        self.convert_workbook(&mut workbook, output)
    }

    /// ワークブック全体をテキストファイルに変換する
    ///
    /// 出力先を省略した場合は `./workbook.output.txt` に書き込みます。
    /// 既存のファイルは上書きされます。途中で失敗した場合、出力ファイルは
    /// 書きかけのまま残ることがあります。
    pub fn convert_workbook<RS: Read + Seek>(
        &self,
        workbook: &mut Workbook<RS>,
        output: Option<&Path>,
    ) -> Result<PathBuf, Excel2TxtError> {
        let path = output
            .map(Path::to_path_buf)
            .unwrap_or_else(default_workbook_output_path);

        tracing::info!(output = %path.display(), "converting workbook");
        let file = BufWriter::new(File::create(&path)?);
        self.write_workbook(workbook, file)?;
        tracing::info!(output = %path.display(), "workbook written");

        Ok(path)
    }

    /// ワークブック全体を任意のライターに書き込む
    ///
    /// シートはシート名の辞書順で出力されます（ワークブック内の順序ではありません）。
    /// 各シートは見出し行、空行、全行、空行2つの順に出力されます。
    ///
    /// ```text
    /// ##########  A  ##########
    ///
    /// 1, x, None
    ///
    ///
    /// ##########  B  ##########
    /// ...
    /// ```
    pub fn write_workbook<RS: Read + Seek, W: Write>(
        &self,
        workbook: &mut Workbook<RS>,
        output: W,
    ) -> Result<(), Excel2TxtError> {
        let mut sheet_names = workbook.sheet_names();
        sheet_names.sort();

        let mut writer = TextWriter::new(output);
        for sheet_name in &sheet_names {
            let worksheet = workbook.worksheet(sheet_name)?;
            writer.write_header(sheet_name)?;
            let lines = writer.write_sheet(&worksheet)?;
            writer.write_separator()?;
            tracing::debug!(sheet = %sheet_name, lines, "sheet written");
        }
        writer.finish()?;

        Ok(())
    }

    /// 単一シートをテキストファイルに変換する（パス指定）
    pub fn convert_sheet_file(
        &self,
        input: &Path,
        sheet_name: &str,
        output: Option<&Path>,
    ) -> Result<PathBuf, Excel2TxtError> {
        let mut workbook = self.open(input)?;
        self.convert_sheet(&mut workbook, sheet_name, output)
    }

    /// 単一シートをテキストファイルに変換する
    ///
    /// 出力先を省略した場合は `./<サニタイズ済みシート名>.txt` に書き込みます。
    ///
    /// # 戻り値
    ///
    /// * `Ok(PathBuf)` - 書き込んだ出力ファイルのパス
    /// * `Err(Excel2TxtError::SheetNotFound)` - シートが存在しない場合（出力ファイルは作成されない）
    /// * `Err(Excel2TxtError::Io)` - 出力に失敗した場合
    pub fn convert_sheet<RS: Read + Seek>(
        &self,
        workbook: &mut Workbook<RS>,
        sheet_name: &str,
        output: Option<&Path>,
    ) -> Result<PathBuf, Excel2TxtError> {
        // 出力ファイルを作る前にシートの存在を確認する
        let worksheet = workbook.worksheet(sheet_name)?;

        let path = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_sheet_output_path(sheet_name));

        tracing::info!(sheet = sheet_name, output = %path.display(), "converting sheet");
        let mut writer = TextWriter::new(BufWriter::new(File::create(&path)?));
        let lines = writer.write_sheet(&worksheet)?;
        writer.finish()?;
        tracing::info!(sheet = sheet_name, lines, "sheet written");

        Ok(path)
    }

    /// 単一シートを任意のライターに書き込む
    ///
    /// 見出しや区切りは付けず、各行を改行で終端して出力します。
    pub fn write_sheet<RS: Read + Seek, W: Write>(
        &self,
        workbook: &mut Workbook<RS>,
        sheet_name: &str,
        output: W,
    ) -> Result<(), Excel2TxtError> {
        let worksheet = workbook.worksheet(sheet_name)?;

        let mut writer = TextWriter::new(output);
        writer.write_sheet(&worksheet)?;
        writer.finish()?;

        Ok(())
    }
}
