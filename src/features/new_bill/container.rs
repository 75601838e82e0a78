// 新規経費フォームのコントローラー

use super::models::{
    Attachment, BillSubmission, FileInputState, NewBillForm, NewBillState, SelectedFile,
};
use super::validation::validate_file_name;
use crate::features::bills::models::Bill;
use crate::features::router::routes::{OnNavigate, Route};
use crate::features::session::Session;
use crate::features::store::{BillFile, BillsGateway, CreateBillPayload, UpdateBillPayload};
use crate::shared::errors::{AppError, AppResult};
use log::{error, info, warn};
use std::sync::Arc;

/// 新規経費画面のコンテナ
///
/// 領収書の選択時にレコードを作成し（create）、送信時に同じIDで更新する（update）
pub struct NewBillContainer {
    store: Arc<dyn BillsGateway>,
    on_navigate: OnNavigate,
    session: Session,
    state: NewBillState,
    file_input: FileInputState,
}

impl NewBillContainer {
    pub fn new(store: Arc<dyn BillsGateway>, on_navigate: OnNavigate, session: Session) -> Self {
        Self {
            store,
            on_navigate,
            session,
            state: NewBillState::NoFile,
            file_input: FileInputState::Valid,
        }
    }

    pub fn state(&self) -> &NewBillState {
        &self.state
    }

    fn attachment(&self) -> Option<&Attachment> {
        match &self.state {
            NewBillState::Attached(attachment) => Some(attachment),
            _ => None,
        }
    }

    pub fn bill_id(&self) -> Option<&str> {
        self.attachment().map(|a| a.bill_id.as_str())
    }

    pub fn file_url(&self) -> Option<&str> {
        self.attachment().map(|a| a.file_url.as_str())
    }

    pub fn file_name(&self) -> Option<&str> {
        self.attachment().map(|a| a.file_name.as_str())
    }

    /// ファイル入力欄のバリデーションメッセージ
    pub fn file_validation_message(&self) -> &str {
        self.file_input.validation_message()
    }

    /// 送信ボタンを有効にできるか（アップロード済みであること）
    pub fn can_submit(&self) -> bool {
        self.attachment().is_some()
    }

    /// 領収書ファイルの選択
    ///
    /// 拡張子が不正な場合は入力欄を無効状態にし、アップロードしない。
    /// アップロードに失敗した場合はログに残し、状態は変更しない
    pub async fn handle_change_file(&mut self, file: SelectedFile) -> AppResult<()> {
        if matches!(self.state, NewBillState::Submitted(_)) {
            return Err(AppError::validation("この経費は送信済みです"));
        }

        let file_name = file.file_name().to_string();
        if let Err(e) = validate_file_name(&file_name) {
            warn!("受け付けない拡張子のファイルが選択されました: {file_name}");
            self.file_input = FileInputState::Invalid {
                message: e.user_message(),
            };
            return Err(e);
        }
        self.file_input = FileInputState::Valid;

        let payload = CreateBillPayload {
            file: BillFile {
                name: file_name.clone(),
                bytes: file.bytes,
            },
            email: self.session.email().map(str::to_string),
        };

        match self.store.create(payload).await {
            Ok(created) => {
                info!(
                    "領収書を登録しました: bill_id={}, file_name={file_name}",
                    created.key
                );
                self.state = NewBillState::Attached(Attachment {
                    bill_id: created.key,
                    file_url: created.file_url,
                    file_name,
                });
                Ok(())
            }
            Err(e) => {
                error!("領収書のアップロードに失敗しました: {e}");
                Err(e)
            }
        }
    }

    /// フォームの送信
    ///
    /// 必須項目が空、または領収書が未登録の場合は通信せずに拒否する。
    /// 更新後は成否にかかわらず一覧画面へ遷移する
    pub async fn handle_submit(&mut self, form: NewBillForm) -> AppResult<Bill> {
        form.validate_required()?;

        let attachment = self.attachment().cloned().ok_or_else(|| {
            AppError::validation("領収書のアップロードが完了していないため送信できません")
        })?;

        let submission =
            BillSubmission::assemble(&form, &attachment, self.session.email())?;
        let payload = UpdateBillPayload {
            data: serde_json::to_string(&submission)?,
            selector: attachment.bill_id.clone(),
        };

        let result = self.store.update(payload).await;
        match &result {
            Ok(bill) => {
                info!("経費を送信しました: bill_id={}", attachment.bill_id);
                self.state = NewBillState::Submitted(bill.clone());
            }
            Err(e) => e.log("経費の送信に失敗しました"),
        }

        (self.on_navigate)(Route::Bills);
        result
    }
}
