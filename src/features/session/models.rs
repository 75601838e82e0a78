use crate::shared::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// セッションストア内でユーザー情報を保持するキー
pub const USER_STORAGE_KEY: &str = "user";

/// ユーザー種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}

/// ログイン中のユーザー情報（`{ type, email }`）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// ビュー構築時に明示的に渡されるセッション
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    user: User,
    jwt: Option<String>,
}

impl Session {
    /// ユーザー情報からセッションを作成
    pub fn new(user: User) -> Self {
        Self { user, jwt: None }
    }

    /// 従業員セッションを作成
    pub fn employee<S: Into<String>>(email: S) -> Self {
        Self::new(User {
            user_type: UserType::Employee,
            email: Some(email.into()),
        })
    }

    /// シリアライズされたユーザー情報からセッションを復元
    ///
    /// # 引数
    /// * `json` - `{"type": "Employee", "email": "..."}` 形式の文字列
    pub fn from_user_json(json: &str) -> AppResult<Self> {
        let user: User = serde_json::from_str(json)?;
        log::debug!("セッションを復元しました: type={:?}", user.user_type);
        Ok(Self::new(user))
    }

    /// キーバリューストアからセッションを復元
    ///
    /// `user` キーが無い場合はNone
    pub fn from_storage<F>(get_item: F) -> AppResult<Option<Self>>
    where
        F: Fn(&str) -> Option<String>,
    {
        match get_item(USER_STORAGE_KEY) {
            Some(json) => Self::from_user_json(&json).map(Some),
            None => Ok(None),
        }
    }

    /// 認証トークンを設定したセッションを返す
    pub fn with_jwt<S: Into<String>>(mut self, jwt: S) -> Self {
        self.jwt = Some(jwt.into());
        self
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn email(&self) -> Option<&str> {
        self.user.email.as_deref()
    }

    pub fn jwt(&self) -> Option<&str> {
        self.jwt.as_deref()
    }

    /// 従業員としてログインしているか
    pub fn is_employee(&self) -> bool {
        self.user.user_type == UserType::Employee
    }
}

/// ログインリクエスト
#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    /// 入力値を検証する
    pub fn validate(&self) -> AppResult<()> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(AppError::validation(
                "メールアドレスとパスワードは必須項目です",
            ));
        }
        Ok(())
    }
}

/// ログインレスポンス
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub jwt: String,
}
