/// 汎用APIクライアント
///
/// ストアAPIサーバーとの通信を行う。リトライは行わず、失敗はそのまま呼び出し元へ返す
use crate::shared::config::environment::ApiConfig;
use crate::shared::errors::{AppError, AppResult};
use log::{debug, info, warn};
use reqwest::{multipart, Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;

/// APIサーバーからのエラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// 汎用APIクライアント
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// 設定を指定してAPIクライアントを作成
    pub fn new_with_config(config: &ApiConfig) -> AppResult<Self> {
        let url = config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::configuration(format!("HTTPクライアント初期化失敗: {e}")))?;

        Ok(Self {
            client,
            base_url: url.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// ベースURLを取得
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    /// GETリクエストを送信
    pub async fn get<T>(&self, endpoint: &str, auth_token: Option<&str>) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        info!("GETリクエスト送信: endpoint={endpoint}");

        let request = with_auth(self.client.get(self.url(endpoint)), auth_token);
        self.send_request(request, "GET", endpoint).await
    }

    /// JSONボディ付きPOSTリクエストを送信
    pub async fn post<B, T>(
        &self,
        endpoint: &str,
        body: &B,
        auth_token: Option<&str>,
    ) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        info!("POSTリクエスト送信: endpoint={endpoint}");

        let request = with_auth(self.client.post(self.url(endpoint)).json(body), auth_token);
        self.send_request(request, "POST", endpoint).await
    }

    /// マルチパートフォームのPOSTリクエストを送信
    ///
    /// Content-Typeはreqwestがboundary付きで設定する
    pub async fn post_multipart<T>(
        &self,
        endpoint: &str,
        form: multipart::Form,
        auth_token: Option<&str>,
    ) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        info!("マルチパートPOSTリクエスト送信: endpoint={endpoint}");

        let request = with_auth(
            self.client.post(self.url(endpoint)).multipart(form),
            auth_token,
        );
        self.send_request(request, "POST", endpoint).await
    }

    /// シリアライズ済みJSON文字列をボディにPATCHリクエストを送信
    pub async fn patch_raw<T>(
        &self,
        endpoint: &str,
        json_body: String,
        auth_token: Option<&str>,
    ) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        info!("PATCHリクエスト送信: endpoint={endpoint}");

        let request = with_auth(
            self.client
                .patch(self.url(endpoint))
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(json_body),
            auth_token,
        );
        self.send_request(request, "PATCH", endpoint).await
    }

    /// リクエストを送信し、レスポンスをデシリアライズする
    async fn send_request<T>(
        &self,
        request: RequestBuilder,
        method: &str,
        endpoint: &str,
    ) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await.map_err(|e| {
            warn!("{method}リクエスト送信失敗: endpoint={endpoint}, error={e}");
            AppError::transport(format!("APIサーバーへの接続に失敗しました: {e}"))
        })?;

        if !response.status().is_success() {
            return Err(self.handle_error_response(response).await);
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::transport(format!("レスポンス受信エラー: {e}")))?;
        let result: T = serde_json::from_str(&body).map_err(|e| {
            warn!("{method}レスポンス解析失敗: endpoint={endpoint}, error={e}");
            AppError::Json(e)
        })?;

        info!("{method}リクエスト成功: endpoint={endpoint}");
        Ok(result)
    }

    /// エラーレスポンスをAppErrorへ変換する
    ///
    /// `{"message": ...}` 形式ならそのメッセージ、それ以外は "Erreur {status}"
    async fn handle_error_response(&self, response: Response) -> AppError {
        let status_code = response.status().as_u16();
        let response_text = response.text().await.unwrap_or_default();

        match serde_json::from_str::<ErrorResponse>(&response_text) {
            Ok(error_response) => {
                debug!(
                    "APIサーバーから構造化エラーレスポンスを受信: status={status_code}, message={}",
                    error_response.message
                );
                AppError::api(Some(status_code), error_response.message)
            }
            Err(_) => {
                warn!(
                    "APIサーバーから非構造化エラーレスポンス: status={status_code}, body={response_text}"
                );
                AppError::api(Some(status_code), format!("Erreur {status_code}"))
            }
        }
    }
}

/// 認証トークンがある場合はBearerヘッダーを追加
fn with_auth(request: RequestBuilder, auth_token: Option<&str>) -> RequestBuilder {
    match auth_token {
        Some(token) => request.header("Authorization", format!("Bearer {token}")),
        None => request,
    }
}

/// ファイル名からContent-Typeを取得
pub fn content_type_for(filename: &str) -> &'static str {
    let extension = std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        _ => "application/octet-stream",
    }
}
