/// セッション機能モジュール
///
/// ログイン中のユーザー情報と認証トークンを保持する
pub mod models;

pub use models::{LoginCredentials, LoginResponse, Session, User, UserType, USER_STORAGE_KEY};
