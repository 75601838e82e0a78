// 経費一覧画面のビューモデル

use super::models::Bill;
use crate::features::router::routes::{OnNavigate, Route};
use crate::features::store::BillsGateway;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::format_date;
use log::{info, warn};
use std::sync::Arc;

/// 一覧テーブルの1行
#[derive(Debug, Clone, PartialEq)]
pub struct BillRow {
    pub id: String,
    pub bill_type: String,
    pub name: String,
    /// 表示用の日付（整形に失敗した場合は元の文字列）
    pub date: String,
    /// ソートに使う元のISO日付
    pub raw_date: String,
    pub amount: i64,
    pub status: String,
    pub file_url: Option<String>,
}

impl From<Bill> for BillRow {
    fn from(bill: Bill) -> Self {
        let date = match format_date(&bill.date) {
            Ok(formatted) => formatted,
            Err(e) => {
                warn!("日付の整形に失敗したため元の値を表示します: {e} for {bill:?}");
                bill.date.clone()
            }
        };

        Self {
            status: bill.status.label().to_string(),
            bill_type: bill.bill_type.label().to_string(),
            id: bill.id,
            name: bill.name,
            date,
            raw_date: bill.date,
            amount: bill.amount,
            file_url: bill.file_url,
        }
    }
}

/// 一覧画面の表示状態
#[derive(Debug, Clone, PartialEq)]
pub enum BillsView {
    Loading,
    Loaded(Vec<BillRow>),
    Error(String),
}

/// 領収書プレビューモーダルの内容
#[derive(Debug, Clone, PartialEq)]
pub struct FilePreview {
    pub url: String,
    pub width: u32,
}

/// 経費を日付の新しい順に並べる
///
/// ISO日付文字列の辞書順で比較し、同じ日付は元の順序を保つ
pub fn sort_by_date_desc(bills: &mut [Bill]) {
    bills.sort_by(|a, b| b.date.cmp(&a.date));
}

/// 経費一覧画面のコンテナ
pub struct BillsContainer {
    store: Arc<dyn BillsGateway>,
    on_navigate: OnNavigate,
}

impl BillsContainer {
    pub fn new(store: Arc<dyn BillsGateway>, on_navigate: OnNavigate) -> Self {
        Self { store, on_navigate }
    }

    /// 経費一覧を取得し、並べ替えて表示用に整形する
    pub async fn get_bills(&self) -> AppResult<Vec<BillRow>> {
        let mut bills = self.store.list().await?;
        sort_by_date_desc(&mut bills);
        info!("経費一覧を表示用に整形します: count={}", bills.len());
        Ok(bills.into_iter().map(BillRow::from).collect())
    }

    /// 画面を有効化する
    ///
    /// 取得に失敗した場合はテーブルを出さずエラーメッセージのみを返す
    pub async fn activate(&self) -> BillsView {
        match self.get_bills().await {
            Ok(rows) => BillsView::Loaded(rows),
            Err(e) => {
                e.log("経費一覧の取得に失敗しました");
                BillsView::Error(e.user_message())
            }
        }
    }

    /// 「新しいノート」ボタン
    pub fn handle_click_new_bill(&self) {
        (self.on_navigate)(Route::NewBill);
    }

    /// 目のアイコン。行の領収書URLでプレビューを作る
    ///
    /// 画像幅はモーダル幅の半分（切り捨て）
    pub fn handle_click_icon_eye(&self, row: &BillRow, modal_width: f64) -> AppResult<FilePreview> {
        let url = row
            .file_url
            .clone()
            .filter(|url| !url.is_empty())
            .ok_or_else(|| AppError::validation(format!("領収書がありません: id={}", row.id)))?;

        let width = (modal_width.max(0.0) * 0.5).floor() as u32;
        Ok(FilePreview { url, width })
    }
}
