//! CLI Module
//!
//! コマンドライン引数の定義（clap derive）と、`Arguments`への変換を提供する。
//! この関数群は標準出力への書き込みやプロセス終了を行わない。

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser};

use crate::error::ArgsError;

const USAGE: &str = "excel2txt INPUT_FILEPATH [-s|--sheet SHEET_NAME] [-o|--output OUTPUT_FILEPATH]
       excel2txt -h|--help";

/// clapによる引数定義
///
/// `-h`/`--help`と入力パスは`parse_args`が先に処理するため、clapが受け取るのは
/// 入力パスより後ろのオプションだけ。
#[derive(Debug, Parser)]
#[command(
    name = "excel2txt",
    about = "Convert an Excel workbook, or a single sheet of it, into a plain text file",
    after_help = "INPUT_FILEPATH is the workbook to convert (xlsx, xlsm, xlsb, xls, ods).",
    override_usage = USAGE,
    disable_help_flag = true,
    args_override_self = true
)]
struct RawArgs {
    /// Convert only this sheet [default output: ./<SHEET_NAME>.txt]
    #[arg(
        short = 's',
        long = "sheet",
        value_name = "SHEET_NAME",
        allow_hyphen_values = true
    )]
    sheet: Option<String>,

    /// Output file, or '-' for stdout [default: ./workbook.output.txt]
    #[arg(
        short = 'o',
        long = "output",
        value_name = "OUTPUT_FILEPATH",
        allow_hyphen_values = true
    )]
    output: Option<PathBuf>,
}

/// 解析済みのコマンドライン引数
///
/// 1回の起動につき1度だけ構築され、変更されません。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments {
    /// 入力ファイルのパス（存在確認済み）
    pub input_path: PathBuf,
    /// 変換するシート名（`None`の場合はワークブック全体）
    pub sheet_name: Option<String>,
    /// 出力ファイルのパス（`None`の場合は既定のパス）
    pub output_path: Option<PathBuf>,
}

/// 起動内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// `-h`/`--help`が指定された
    Help,
    /// 変換を実行する
    Convert(Arguments),
}

/// 使用方法のテキスト
pub fn usage() -> String {
    RawArgs::command().render_help().to_string()
}

/// 引数に`-h`/`--help`が含まれるか（プログラム名は除く）
pub fn wants_help<I, T>(args: I) -> bool
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .skip(1)
        .map(Into::into)
        .any(|arg| arg == "-h" || arg == "--help")
}

/// コマンドライン引数を解析する
///
/// 先頭要素はプログラム名、2番目の要素は入力パスとして扱います。
///
/// # 処理順序
///
/// 1. `-h`/`--help`がどこかにあれば、他の引数を見ずに`Invocation::Help`を返す
/// 2. 入力パスがなければ`ArgsError::InputNotSpecified`
/// 3. 入力パスが存在しなければ`ArgsError::FileNotFound`
/// 4. 残りの引数で`-s`/`--sheet`、`-o`/`--output`の値がなければそれぞれのエラー
/// 5. それ以外の引数は`ArgsError::Unrecognized`
///
/// # 使用例
///
/// ```rust
/// use excel2txt::{parse_args, ArgsError, Invocation};
///
/// assert_eq!(parse_args(["excel2txt", "-h"]), Ok(Invocation::Help));
/// assert_eq!(parse_args(["excel2txt"]), Err(ArgsError::InputNotSpecified));
/// ```
pub fn parse_args<I, T>(args: I) -> Result<Invocation, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if wants_help(args.iter().cloned()) {
        return Ok(Invocation::Help);
    }

    let (program, input, options) = match args.as_slice() {
        [program, input, options @ ..] => (program, input, options),
        _ => return Err(ArgsError::InputNotSpecified),
    };

    let input_path = PathBuf::from(input);
    if !input_path.exists() {
        return Err(ArgsError::FileNotFound(input_path));
    }

    let raw = RawArgs::try_parse_from(std::iter::once(program).chain(options))
        .map_err(map_clap_error)?;

    Ok(Invocation::Convert(Arguments {
        input_path,
        sheet_name: raw.sheet,
        output_path: raw.output,
    }))
}

/// clapのエラーを`ArgsError`に変換する
fn map_clap_error(err: clap::Error) -> ArgsError {
    let invalid_arg = match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => arg.clone(),
        _ => String::new(),
    };

    match err.kind() {
        ErrorKind::InvalidValue | ErrorKind::NoEquals if invalid_arg.starts_with("--sheet") => {
            ArgsError::SheetNameMissing
        }
        ErrorKind::InvalidValue | ErrorKind::NoEquals if invalid_arg.starts_with("--output") => {
            ArgsError::OutputPathMissing
        }
        ErrorKind::UnknownArgument if !invalid_arg.is_empty() => {
            ArgsError::Unrecognized(invalid_arg)
        }
        kind => ArgsError::Invalid(kind.to_string()),
    }
}
