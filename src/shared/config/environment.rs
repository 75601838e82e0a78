use crate::shared::errors::{AppError, AppResult};
use url::Url;

/// APIサーバーのデフォルトURL
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5678";

/// APIリクエストのデフォルトタイムアウト（秒）
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// アプリケーションの実行環境を表す列挙型
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 開発環境
    Development,
    /// プロダクション環境
    Production,
}

/// 環境変数取得エラー
#[derive(Debug, Clone)]
pub struct EnvVarError {
    /// 変数名
    pub var_name: String,
    /// エラーメッセージ
    pub message: String,
}

impl std::fmt::Display for EnvVarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "環境変数 {} が見つかりません: {}",
            self.var_name, self.message
        )
    }
}

impl std::error::Error for EnvVarError {}

/// 環境変数を取得する（優先順位: 起動時 > コンパイル時 > エラー）
///
/// `var_name` には文字列リテラルを渡すこと（`option_env!` で展開されるため）
#[macro_export]
macro_rules! get_env_var {
    ($var_name:expr) => {{
        if let Ok(value) = std::env::var($var_name) {
            log::debug!("環境変数 {} を起動時の環境変数から取得しました", $var_name);
            Ok(value)
        } else if let Some(value) = option_env!($var_name) {
            log::debug!("環境変数 {} をコンパイル時の環境変数から取得しました", $var_name);
            Ok(value.to_string())
        } else {
            Err($crate::shared::config::environment::EnvVarError {
                var_name: $var_name.to_string(),
                message: format!(
                    "起動時の環境変数 {} もコンパイル時の環境変数も見つかりませんでした",
                    $var_name
                ),
            })
        }
    }};
}

/// 環境変数を取得する（デフォルト値付き）
#[macro_export]
macro_rules! get_env_var_or_default {
    ($var_name:expr, $default_value:expr) => {{
        $crate::get_env_var!($var_name).unwrap_or_else(|_| {
            log::debug!(
                "環境変数 {} が見つからないため、デフォルト値を使用します: {}",
                $var_name,
                $default_value
            );
            $default_value.to_string()
        })
    }};
}

/// 環境設定を管理する構造体
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    /// 実行環境
    pub environment: String,
    /// デバッグモードの有効/無効
    pub debug_mode: bool,
    /// ログレベル
    pub log_level: String,
}

impl EnvironmentConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Self {
        let environment = get_environment();
        let debug_mode = environment == Environment::Development;
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| {
            if debug_mode {
                "debug".to_string()
            } else {
                "info".to_string()
            }
        });

        Self {
            environment: format!("{environment:?}").to_lowercase(),
            debug_mode,
            log_level,
        }
    }

    /// 設定されたログレベル文字列をフィルタに変換する
    ///
    /// 未知の値は Info として扱う
    pub fn level_filter(&self) -> log::LevelFilter {
        match self.log_level.to_lowercase().as_str() {
            "error" => log::LevelFilter::Error,
            "warn" => log::LevelFilter::Warn,
            "info" => log::LevelFilter::Info,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => log::LevelFilter::Info,
        }
    }
}

/// 現在の実行環境を判定する
///
/// # 判定ロジック
/// 1. 実行時環境変数 ENVIRONMENT を確認
/// 2. デバッグビルドの場合は Development
/// 3. リリースビルドの場合は Production
pub fn get_environment() -> Environment {
    if let Ok(env_var) = std::env::var("ENVIRONMENT") {
        let env = match env_var.as_str() {
            "production" => Environment::Production,
            _ => Environment::Development,
        };
        log::debug!("環境判定: 実行時環境変数を使用 -> {env_var} -> {env:?}");
        return env;
    }

    let env = if cfg!(debug_assertions) {
        Environment::Development
    } else {
        Environment::Production
    };
    log::debug!(
        "環境判定: ビルド設定を使用 -> debug_assertions={} -> {env:?}",
        cfg!(debug_assertions)
    );
    env
}

/// 開発環境でのみ .env ファイルを読み込む
///
/// 本番ビルドでは環境変数は実行時に設定されることを前提とする。
/// ログシステム初期化前に呼ばれるため標準エラー出力に書く
pub fn load_environment_variables() {
    if cfg!(debug_assertions) {
        match dotenv::dotenv() {
            Ok(path) => eprintln!("環境ファイルを読み込みました: {}", path.display()),
            Err(e) => eprintln!("環境ファイルの読み込みに失敗: {e}"),
        }
    } else {
        eprintln!("本番環境: 環境変数は実行時に設定されます");
    }
}

/// ログシステムを初期化する
///
/// 二度目以降の呼び出しは何もしない
pub fn initialize_logging_system() {
    let env_config = EnvironmentConfig::from_env();

    let result = env_logger::Builder::from_default_env()
        .filter_level(env_config.level_filter())
        .format_timestamp_secs()
        .format_module_path(false)
        .format_target(false)
        .try_init();

    match result {
        Ok(()) => log::info!(
            "ログシステムを初期化しました: level={}, environment={}",
            env_config.log_level,
            env_config.environment
        ),
        Err(e) => log::debug!("ログシステムは初期化済みです: {e}"),
    }
}

/// API設定を管理する構造体
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// APIサーバーのベースURL
    pub base_url: String,
    /// APIリクエストのタイムアウト（秒）
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ApiConfig {
    /// 環境変数からAPI設定を読み込む
    ///
    /// `API_BASE_URL` と `API_TIMEOUT_SECONDS` を参照し、無ければデフォルト値を使う
    pub fn from_env() -> Self {
        let base_url = crate::get_env_var_or_default!("API_BASE_URL", DEFAULT_API_BASE_URL);

        let timeout_seconds = crate::get_env_var_or_default!("API_TIMEOUT_SECONDS", "30")
            .parse()
            .unwrap_or_else(|_| {
                log::warn!(
                    "API_TIMEOUT_SECONDSのパースに失敗しました。デフォルト値30秒を使用します"
                );
                DEFAULT_TIMEOUT_SECONDS
            });

        log::info!("API設定: base_url={base_url}, timeout={timeout_seconds}s");

        Self {
            base_url,
            timeout_seconds,
        }
    }

    /// 設定を検証し、解析済みのベースURLを返す
    pub fn validate(&self) -> AppResult<Url> {
        if self.timeout_seconds == 0 {
            return Err(AppError::configuration(
                "APIタイムアウトは0より大きい値である必要があります",
            ));
        }

        let url = Url::parse(&self.base_url).map_err(|e| {
            AppError::configuration(format!("APIサーバーのベースURLが不正です: {e}"))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(AppError::configuration(format!(
                "未対応のURLスキームです: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_environment() {
        let env = get_environment();
        assert!(matches!(
            env,
            Environment::Development | Environment::Production
        ));
    }

    #[test]
    fn test_level_filter() {
        let dev_config = EnvironmentConfig {
            environment: "development".to_string(),
            debug_mode: true,
            log_level: "debug".to_string(),
        };
        let prod_config = EnvironmentConfig {
            environment: "production".to_string(),
            debug_mode: false,
            log_level: "verbose".to_string(),
        };

        assert_eq!(dev_config.level_filter(), log::LevelFilter::Debug);

        // 未知のレベルはInfo扱い
        assert_eq!(prod_config.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_api_config_default() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:5678");
        assert_eq!(config.timeout_seconds, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_api_config_validate_rejects_bad_values() {
        let zero_timeout = ApiConfig {
            timeout_seconds: 0,
            ..ApiConfig::default()
        };
        assert!(matches!(
            zero_timeout.validate(),
            Err(AppError::Configuration(_))
        ));

        let bad_url = ApiConfig {
            base_url: "not a url".to_string(),
            ..ApiConfig::default()
        };
        assert!(matches!(bad_url.validate(), Err(AppError::Configuration(_))));

        let ftp = ApiConfig {
            base_url: "ftp://localhost".to_string(),
            ..ApiConfig::default()
        };
        assert!(ftp.validate().is_err());
    }

    #[test]
    fn test_initialize_logging_twice() {
        initialize_logging_system();
        initialize_logging_system();
    }
}
