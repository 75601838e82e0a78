// ストアAPIサーバー経由のゲートウェイ実装

use super::gateway::{BillsGateway, CreateBillPayload, CreatedBill, UpdateBillPayload};
use crate::features::bills::models::Bill;
use crate::features::session::{LoginCredentials, LoginResponse, Session};
use crate::shared::api_client::{content_type_for, ApiClient};
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use log::{info, warn};
use reqwest::multipart;
use std::sync::Arc;

/// ストアAPIサーバーへの入口
#[derive(Debug, Clone)]
pub struct ApiStore {
    api: Arc<ApiClient>,
    jwt: Option<String>,
}

impl ApiStore {
    /// 認証トークンなしのストアを作成
    pub fn new(api: ApiClient) -> Self {
        Self {
            api: Arc::new(api),
            jwt: None,
        }
    }

    /// 経費コレクション
    pub fn bills(&self) -> ApiEntity {
        ApiEntity {
            key: "bills",
            api: Arc::clone(&self.api),
            jwt: self.jwt.clone(),
        }
    }

    /// ログインして認証トークンを取得する
    ///
    /// Authorizationヘッダーは付けない
    pub async fn login(&self, credentials: &LoginCredentials) -> AppResult<LoginResponse> {
        credentials.validate()?;
        info!("ログインリクエスト: email={}", credentials.email);
        self.api.post("/auth/login", credentials, None).await
    }

    /// セッションの認証トークンを使うストアを返す
    pub fn with_session(&self, session: &Session) -> Self {
        Self {
            api: Arc::clone(&self.api),
            jwt: session.jwt().map(str::to_string),
        }
    }
}

/// REST風コレクション（`/{key}` 配下）
#[derive(Debug, Clone)]
pub struct ApiEntity {
    key: &'static str,
    api: Arc<ApiClient>,
    jwt: Option<String>,
}

impl ApiEntity {
    fn collection_path(&self) -> String {
        format!("/{}", self.key)
    }

    fn item_path(&self, selector: &str) -> AppResult<String> {
        if selector.trim().is_empty() || selector.contains('/') {
            return Err(AppError::validation(format!(
                "不正なセレクターです: {selector:?}"
            )));
        }
        Ok(format!("/{}/{selector}", self.key))
    }
}

/// 一覧のレコードを1件ずつ変換する
///
/// 変換できないレコードは記録して読み飛ばし、一覧全体は失敗させない
pub fn bills_from_records(records: Vec<serde_json::Value>) -> Vec<Bill> {
    let total = records.len();
    let bills: Vec<Bill> = records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<Bill>(record.clone()) {
            Ok(bill) => Some(bill),
            Err(e) => {
                warn!("経費レコードを読み飛ばします: {e} for {record}");
                None
            }
        })
        .collect();

    if bills.len() < total {
        warn!(
            "変換できない経費レコードがありました: skipped={}",
            total - bills.len()
        );
    }
    bills
}

#[async_trait]
impl BillsGateway for ApiEntity {
    async fn list(&self) -> AppResult<Vec<Bill>> {
        let records: Vec<serde_json::Value> = self
            .api
            .get(&self.collection_path(), self.jwt.as_deref())
            .await?;
        let bills = bills_from_records(records);
        info!("経費一覧取得成功: count={}", bills.len());
        Ok(bills)
    }

    async fn create(&self, payload: CreateBillPayload) -> AppResult<CreatedBill> {
        let CreateBillPayload { file, email } = payload;
        info!(
            "領収書アップロード開始: filename={}, size={} bytes",
            file.name,
            file.bytes.len()
        );

        let content_type = content_type_for(&file.name);
        let part = multipart::Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str(content_type)
            .map_err(|e| AppError::validation(format!("MIMEタイプ設定エラー: {e}")))?;

        let mut form = multipart::Form::new().part("file", part);
        if let Some(email) = email {
            form = form.text("email", email);
        }

        let created: CreatedBill = self
            .api
            .post_multipart(&self.collection_path(), form, self.jwt.as_deref())
            .await?;
        info!("領収書アップロード成功: key={}", created.key);
        Ok(created)
    }

    async fn update(&self, payload: UpdateBillPayload) -> AppResult<Bill> {
        let endpoint = self.item_path(&payload.selector)?;
        let bill: Bill = self
            .api
            .patch_raw(&endpoint, payload.data, self.jwt.as_deref())
            .await?;
        info!("経費更新成功: id={}", payload.selector);
        Ok(bill)
    }
}
