pub mod features;
pub mod shared;

use features::router::Router;
use features::session::Session;
use features::store::ApiStore;
use log::info;
use shared::{AppResult, ApiClient};
use std::sync::Arc;

pub use features::bills::{Bill, BillRow, BillStatus, BillType, BillsContainer, BillsView};
pub use features::new_bill::{NewBillContainer, NewBillForm, SelectedFile};
pub use features::router::{OnNavigate, Page, Route};
pub use features::store::{BillsGateway, CreatedBill, UpdateBillPayload};
pub use shared::{AppError, ApiConfig};

/// アプリケーションを初期化し、ストアAPIサーバーに接続するルーターを返す
///
/// # 処理内容
/// 1. 環境変数（開発時は.env）の読み込み
/// 2. ログシステムの初期化
/// 3. API設定の読み込みとHTTPクライアントの作成
pub fn initialize(session: Option<Session>) -> AppResult<Router> {
    shared::load_environment_variables();
    shared::initialize_logging_system();

    let config = ApiConfig::from_env();
    let api = ApiClient::new_with_config(&config)?;
    info!("ストアAPIサーバーに接続します: {}", api.base_url());

    let mut store = ApiStore::new(api);
    if let Some(session) = &session {
        store = store.with_session(session);
    }

    Ok(Router::new(Arc::new(store.bills()), session))
}
