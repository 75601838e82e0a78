use super::validation::file_name_from_path;
use crate::features::bills::models::{Bill, BillStatus, BillType};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{parse_integer_field, parse_iso_date, validate_required_field};
use serde::Serialize;

/// 税率が整数として読めない場合の既定値
pub const DEFAULT_PCT: i64 = 20;

/// ファイル入力で選択されたファイル
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    /// 入力欄の値（例: `C:\fakepath\chucknorris.jpg`）
    pub path: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new<S: Into<String>>(path: S, bytes: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            bytes,
        }
    }

    pub fn file_name(&self) -> &str {
        file_name_from_path(&self.path)
    }
}

/// 新規経費フォームの入力値（すべて入力欄の文字列のまま）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewBillForm {
    pub bill_type: BillType,
    pub name: String,
    pub date: String,
    pub amount: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

impl NewBillForm {
    /// 必須項目（日付・金額・税率）が埋まっているか検証する
    pub fn validate_required(&self) -> AppResult<()> {
        validate_required_field(&self.date, "date")?;
        validate_required_field(&self.amount, "amount")?;
        validate_required_field(&self.pct, "pct")?;
        Ok(())
    }
}

/// アップロード済みの領収書
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub bill_id: String,
    pub file_url: String,
    pub file_name: String,
}

/// 新規経費の状態
///
/// 領収書のアップロードが成功するまで送信できない
#[derive(Debug, Clone, Default, PartialEq)]
pub enum NewBillState {
    #[default]
    NoFile,
    Attached(Attachment),
    Submitted(Bill),
}

/// ファイル入力欄の状態
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FileInputState {
    #[default]
    Valid,
    Invalid { message: String },
}

impl FileInputState {
    /// 入力欄のバリデーションメッセージ（正常時は空文字）
    pub fn validation_message(&self) -> &str {
        match self {
            FileInputState::Valid => "",
            FileInputState::Invalid { message } => message,
        }
    }
}

/// `update` で送る経費の内容
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillSubmission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub bill_type: BillType,
    pub name: String,
    pub amount: i64,
    pub date: String,
    pub vat: String,
    pub pct: i64,
    pub commentary: String,
    pub file_url: String,
    pub file_name: String,
    pub status: BillStatus,
}

impl BillSubmission {
    /// フォーム入力と添付ファイルから送信内容を組み立てる
    ///
    /// ステータスは常に pending
    pub fn assemble(
        form: &NewBillForm,
        attachment: &Attachment,
        email: Option<&str>,
    ) -> AppResult<Self> {
        form.validate_required()?;
        parse_iso_date(&form.date)?;

        let amount = parse_integer_field(&form.amount, "amount")?;
        let pct = parse_integer_field(&form.pct, "pct").unwrap_or(DEFAULT_PCT);
        if amount < 0 {
            return Err(AppError::validation("amountは0以上で入力してください"));
        }

        Ok(Self {
            email: email.map(str::to_string),
            bill_type: form.bill_type.clone(),
            name: form.name.clone(),
            amount,
            date: form.date.trim().to_string(),
            vat: form.vat.clone(),
            pct,
            commentary: form.commentary.clone(),
            file_url: attachment.file_url.clone(),
            file_name: attachment.file_name.clone(),
            status: BillStatus::Pending,
        })
    }
}
