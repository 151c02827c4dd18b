//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use std::path::PathBuf;

use thiserror::Error;

/// excel2txtクレート全体で使用するエラー型
///
/// ワークブックの読み込み、シートの検索、テキスト出力の各段階で発生する
/// エラーを統一的に扱います。
///
/// # エラーの種類
///
/// - `Io`: 出力ファイルの作成・書き込み中に発生したエラー
/// - `Load`: 入力ファイルがスプレッドシートとして解析できないエラー（calamine由来）
/// - `SheetNotFound`: 指定されたシートがワークブックに存在しないエラー
///
/// コマンドライン引数のエラーは別の型`ArgsError`で表します。
///
/// いずれもリトライされず、呼び出し元へそのまま伝播します。
#[derive(Error, Debug)]
pub enum Excel2TxtError {
    /// I/O操作中に発生したエラー
    ///
    /// 出力先の作成失敗、ディスクフル、権限不足など。
    /// 途中で失敗した場合、出力ファイルは書きかけのまま残ることがあります。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ワークブックの読み込みに失敗したエラー
    ///
    /// 破損したファイル、未対応の形式など、calamineが解析できなかった場合に発生します。
    #[error("Failed to load workbook: {0}")]
    Load(#[from] calamine::Error),

    /// 指定されたシートがワークブックに存在しない
    ///
    /// 単一シート変換でのみ発生し、出力ファイルは作成されません。
    #[error("Worksheet '{0}' does not exist in the workbook")]
    SheetNotFound(String),
}

/// コマンドライン引数のエラー
///
/// CLIのエントリーポイントで捕捉され、メッセージと使用方法を表示して
/// 終了コード1で終了します。それ以上は伝播しません。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    /// 入力ファイルのパスが指定されていない
    #[error("The input file was not specified.")]
    InputNotSpecified,

    /// 入力ファイルが存在しない
    #[error("The file \"{}\" does not exist.", .0.display())]
    FileNotFound(PathBuf),

    /// `-s`/`--sheet`の後にシート名がない
    #[error("Sheet name was not specified.")]
    SheetNameMissing,

    /// `-o`/`--output`の後に出力パスがない
    #[error("Output path was not specified.")]
    OutputPathMissing,

    /// 認識できない引数
    #[error("The argument \"{0}\" is unrecognized.")]
    Unrecognized(String),

    /// 上記以外の引数エラー
    #[error("Invalid arguments: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied");
        let error: Excel2TxtError = io_err.into();

        match error {
            Excel2TxtError::Io(ref e) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            _ => panic!("Expected Io error"),
        }
        assert!(error.to_string().starts_with("IO error"));
        assert!(error.to_string().contains("Permission denied"));
    }

    #[test]
    fn test_load_error() {
        let error: Excel2TxtError = calamine::Error::Msg("Corrupted file").into();

        match error {
            Excel2TxtError::Load(calamine::Error::Msg(msg)) => {
                assert_eq!(msg, "Corrupted file");
            }
            _ => panic!("Expected Load error"),
        }
    }

    #[test]
    fn test_load_error_display() {
        let error: Excel2TxtError = calamine::Error::Msg("Corrupted file").into();
        let error_msg = error.to_string();

        assert!(error_msg.starts_with("Failed to load workbook"));
        assert!(error_msg.contains("Corrupted file"));
    }

    #[test]
    fn test_sheet_not_found_display() {
        let error = Excel2TxtError::SheetNotFound("Summary".to_string());
        assert_eq!(
            error.to_string(),
            "Worksheet 'Summary' does not exist in the workbook"
        );
    }

    #[test]
    fn test_args_error_messages() {
        assert_eq!(
            ArgsError::InputNotSpecified.to_string(),
            "The input file was not specified."
        );
        assert_eq!(
            ArgsError::FileNotFound(PathBuf::from("missing.xlsx")).to_string(),
            "The file \"missing.xlsx\" does not exist."
        );
        assert_eq!(
            ArgsError::SheetNameMissing.to_string(),
            "Sheet name was not specified."
        );
        assert_eq!(
            ArgsError::OutputPathMissing.to_string(),
            "Output path was not specified."
        );
        assert_eq!(
            ArgsError::Unrecognized("--verbose".to_string()).to_string(),
            "The argument \"--verbose\" is unrecognized."
        );
    }

    #[test]
    fn test_error_conversion_with_question_mark() {
        fn io_operation() -> Result<(), Excel2TxtError> {
            let _file = std::fs::File::open("nonexistent_file.xlsx")?;
            Ok(())
        }

        match io_operation() {
            Err(Excel2TxtError::Io(_)) => {}
            _ => panic!("Expected Io error from ? operator"),
        }
    }
}
