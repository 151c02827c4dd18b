//! excel2txt コマンドラインツール
//!
//! Excelワークブック全体、または指定した1枚のシートをテキストファイルに変換します。

use std::io;
use std::path::Path;
use std::process;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use excel2txt::{parse_args, usage, Arguments, ConverterBuilder, Invocation};

/// ログレベルを指定する環境変数
const LOG_ENV: &str = "EXCEL2TXT_LOG";

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = match parse_args(std::env::args_os()) {
        Ok(Invocation::Help) => {
            println!("{}", usage());
            return Ok(());
        }
        Ok(Invocation::Convert(args)) => args,
        Err(err) => {
            println!("Error: {}", err);
            println!("{}", usage());
            process::exit(1);
        }
    };

    tracing::debug!(?args, "parsed arguments");
    run(&args)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// 変換を実行する
///
/// 読み込み・シート検索・出力のエラーはここでは処理せず、そのまま呼び出し元へ返す。
fn run(args: &Arguments) -> anyhow::Result<()> {
    let converter = ConverterBuilder::new().build();
    let mut workbook = converter
        .open(&args.input_path)
        .with_context(|| format!("failed to open {}", args.input_path.display()))?;

    let output = args.output_path.as_deref();
    let to_stdout = output == Some(Path::new("-"));

    match (&args.sheet_name, to_stdout) {
        (Some(sheet), true) => converter.write_sheet(&mut workbook, sheet, io::stdout().lock())?,
        (Some(sheet), false) => {
            converter.convert_sheet(&mut workbook, sheet, output)?;
        }
        (None, true) => converter.write_workbook(&mut workbook, io::stdout().lock())?,
        (None, false) => {
            converter.convert_workbook(&mut workbook, output)?;
        }
    }

    Ok(())
}
