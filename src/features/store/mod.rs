/// リモートストア機能モジュール
///
/// - 経費コレクションへのゲートウェイ（一覧・作成・更新）
/// - ログイン
pub mod api_store;
pub mod gateway;

pub use api_store::{ApiEntity, ApiStore};
pub use gateway::{BillFile, BillsGateway, CreateBillPayload, CreatedBill, UpdateBillPayload};
