use crate::features::bills::models::Bill;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// アップロードするファイル
#[derive(Debug, Clone, PartialEq)]
pub struct BillFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// `create` に渡す内容（ファイルとセッションのメールアドレス）
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBillPayload {
    pub file: BillFile,
    pub email: Option<String>,
}

/// `create` の結果。`key` はストアが採番した経費ID
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedBill {
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    pub key: String,
}

/// `update` に渡す内容
///
/// `data` はJSONシリアライズ済みの経費、`selector` は対象の経費ID
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateBillPayload {
    pub data: String,
    pub selector: String,
}

/// 経費コレクションへのアクセス窓口
///
/// 失敗はリトライせず、そのまま呼び出し元に返す
#[async_trait]
pub trait BillsGateway: Send + Sync {
    /// 経費一覧を取得
    async fn list(&self) -> AppResult<Vec<Bill>>;

    /// 領収書ファイルをアップロードし、経費レコードを作成
    async fn create(&self, payload: CreateBillPayload) -> AppResult<CreatedBill>;

    /// 既存の経費レコードを更新
    async fn update(&self, payload: UpdateBillPayload) -> AppResult<Bill>;
}
