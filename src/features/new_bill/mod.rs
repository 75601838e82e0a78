/// 新規経費機能モジュール
///
/// - 領収書ファイルの拡張子検証（jpg, jpeg, png）
/// - 選択時のアップロード（create）と送信時の更新（update）
pub mod container;
pub mod models;
pub mod validation;

pub use container::NewBillContainer;
pub use models::{
    Attachment, BillSubmission, FileInputState, NewBillForm, NewBillState, SelectedFile,
};
pub use validation::{is_accepted_file_name, validate_file_name, INVALID_FILE_MESSAGE};
