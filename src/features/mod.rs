/// 機能別モジュール
///
/// 各機能モジュールは、その機能に関連するモデル・コンテナ・通信処理を含む
pub mod bills;
pub mod new_bill;
pub mod router;
pub mod session;
pub mod store;
