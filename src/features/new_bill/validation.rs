use crate::shared::errors::{AppError, AppResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// 拡張子が不正な場合にファイル入力へ表示するメッセージ
pub const INVALID_FILE_MESSAGE: &str = "Uniquement des fichiers jpg, jpeg et png";

static ALLOWED_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.(jpg|jpeg|png)$").expect("拡張子の正規表現が不正です"));

/// 入力パスからファイル名（最後の区切り以降）を取り出す
///
/// ブラウザの `C:\fakepath\receipt.jpg` 形式と `/` 区切りの両方に対応
pub fn file_name_from_path(path: &str) -> &str {
    path.rsplit(|c| c == '\\' || c == '/').next().unwrap_or(path)
}

/// 受け付ける拡張子（jpg, jpeg, png。大文字小文字は区別しない）かどうか
pub fn is_accepted_file_name(file_name: &str) -> bool {
    ALLOWED_EXTENSION.is_match(file_name)
}

/// ファイル名を検証し、不正な場合は固定メッセージのバリデーションエラーを返す
pub fn validate_file_name(file_name: &str) -> AppResult<()> {
    if is_accepted_file_name(file_name) {
        Ok(())
    } else {
        Err(AppError::validation(INVALID_FILE_MESSAGE))
    }
}
