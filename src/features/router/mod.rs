/// 画面遷移機能モジュール
///
/// ルート識別子、HTMLテンプレート、ルート画面の描画
pub mod router;
pub mod routes;
pub mod views;

pub use router::{Page, Router};
pub use routes::{OnNavigate, Route};
pub use views::LayoutIcon;
