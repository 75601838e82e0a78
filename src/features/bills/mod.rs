/// 経費一覧機能モジュール
///
/// - 経費データモデルとカテゴリ・ステータス
/// - 一覧の取得、日付降順の並べ替え、表示用整形
/// - 新規作成画面への遷移と領収書プレビュー
pub mod container;
pub mod models;

pub use container::{sort_by_date_desc, BillRow, BillsContainer, BillsView, FilePreview};
pub use models::{Bill, BillStatus, BillType};
