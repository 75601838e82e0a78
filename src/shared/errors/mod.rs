use thiserror::Error;

/// アプリケーション全体で使用される統一エラー型
#[derive(Debug, Error)]
pub enum AppError {
    /// APIサーバーが非2xxステータスを返した場合のエラー
    ///
    /// 表示文字列はサーバーのメッセージそのまま（例: "Erreur 404"）
    #[error("{message}")]
    Api {
        status: Option<u16>,
        message: String,
    },

    /// 通信そのものに失敗した場合のエラー
    #[error("通信エラー: {0}")]
    Transport(String),

    /// バリデーション関連のエラー
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// 設定関連のエラー
    #[error("設定エラー: {0}")]
    Configuration(String),

    /// JSON解析エラー
    #[error("JSON解析エラー: {0}")]
    Json(#[from] serde_json::Error),
}

/// エラーの重要度を表す列挙型
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ErrorSeverity {
    /// 低重要度（ユーザー入力エラーなど）
    Low,
    /// 中重要度（APIサーバーの一時的エラーなど）
    Medium,
    /// 高重要度（設定不備など）
    High,
}

impl AppError {
    /// ユーザーに表示するためのメッセージを取得
    ///
    /// # 戻り値
    /// 画面に表示可能なエラーメッセージ（フランス語）
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api { message, .. } => message.clone(),
            AppError::Transport(detail) => format!("Erreur réseau : {detail}"),
            AppError::Validation(msg) => msg.clone(),
            AppError::Configuration(_) => "Erreur de configuration".to_string(),
            AppError::Json(_) => "Réponse du serveur illisible".to_string(),
        }
    }

    /// HTTPステータスコードを取得（APIエラーの場合のみ）
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => *status,
            _ => None,
        }
    }

    /// エラーの重要度を取得
    ///
    /// # 戻り値
    /// エラーの重要度レベル
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Validation(_) => ErrorSeverity::Low,
            AppError::Api { status, .. } => match status {
                Some(code) if *code < 500 => ErrorSeverity::Low,
                _ => ErrorSeverity::Medium,
            },
            AppError::Transport(_) => ErrorSeverity::Medium,
            AppError::Json(_) => ErrorSeverity::Medium,
            AppError::Configuration(_) => ErrorSeverity::High,
        }
    }

    /// 重要度に応じたログレベルでエラーを記録する
    ///
    /// # 引数
    /// * `context` - どの処理で発生したかを示す文字列
    pub fn log(&self, context: &str) {
        match self.severity() {
            ErrorSeverity::Low => log::warn!("{context}: {self}"),
            ErrorSeverity::Medium | ErrorSeverity::High => log::error!("{context}: {self}"),
        }
    }

    /// APIエラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `status` - HTTPステータスコード
    /// * `message` - サーバーからのメッセージ
    pub fn api<S: Into<String>>(status: Option<u16>, message: S) -> Self {
        AppError::Api {
            status,
            message: message.into(),
        }
    }

    /// バリデーションエラーを作成するヘルパー関数
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    /// 通信エラーを作成するヘルパー関数
    pub fn transport<S: Into<String>>(message: S) -> Self {
        AppError::Transport(message.into())
    }

    /// 設定エラーを作成するヘルパー関数
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}

/// Result型のエイリアス（アプリケーション全体で使用）
pub type AppResult<T> = Result<T, AppError>;
