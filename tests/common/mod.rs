//! 結合テスト用の共通ヘルパー
//!
//! 固定データを返すモックストアと、遷移要求を記録するコールバックを提供する
#![allow(dead_code)]

use async_trait::async_trait;
use billed_lib::features::store::{CreateBillPayload, CreatedBill};
use billed_lib::shared::{AppError, AppResult};
use billed_lib::{Bill, BillsGateway, OnNavigate, Route, UpdateBillPayload};
use std::sync::{Arc, Mutex};

pub const FIXTURE_FILE_URL: &str = "https://localhost:3456/images/test.jpg";
pub const FIXTURE_BILL_ID: &str = "1234";

/// 一覧用の固定データ（4件、日付はばらばら）
pub fn fixture_bills() -> Vec<Bill> {
    serde_json::from_value(serde_json::json!([
        {
            "id": "47qAXb6fIm2zOKkLzMro",
            "vat": "80",
            "fileUrl": "https://test.storage.tld/v0/b/billable-677b6.a…f-1.jpg?alt=media&token=c1640e12-a24b-4b11-ae52-529112e9602a",
            "status": "pending",
            "type": "Hôtel et logement",
            "commentary": "séminaire billed",
            "name": "encore",
            "fileName": "preview-facture-free-201801-pdf-1.jpg",
            "date": "2004-04-04",
            "amount": 400,
            "commentAdmin": "ok",
            "email": "a@a",
            "pct": 20
        },
        {
            "id": "BeKy5Mo4jkmdfPGYpTxZ",
            "vat": "",
            "amount": 100,
            "name": "test1",
            "fileName": "1592770761.jpeg",
            "commentary": "plop",
            "pct": 20,
            "type": "Transports",
            "email": "a@a",
            "fileUrl": "https://test.storage.tld/v0/b/billable-677b6.a…61.jpeg?alt=media&token=7685cd61-c112-42bc-9929-8a799bb82d8b",
            "date": "2001-01-01",
            "status": "refused",
            "commentAdmin": "en fait non"
        },
        {
            "id": "UIUZtnPQvnbFnB0ozvJh",
            "name": "test3",
            "email": "a@a",
            "type": "Services en ligne",
            "vat": "60",
            "pct": 20,
            "commentAdmin": "bon bah d'accord",
            "amount": 300,
            "status": "accepted",
            "date": "2003-03-03",
            "commentary": "",
            "fileName": "facture-client-php-exportee-dans-document-pdf-enregistre-sur-disque-dur.png",
            "fileUrl": "https://test.storage.tld/v0/b/billable-677b6.a…dur.png?alt=media&token=571d34cb-9c8f-430a-af52-66221cae1da3"
        },
        {
            "id": "qcCK3SzECmaZAGRrHjaC",
            "status": "refused",
            "pct": 20,
            "amount": 200,
            "email": "a@a",
            "name": "test2",
            "vat": "40",
            "fileName": "preview-facture-free-201801-pdf-1.jpg",
            "date": "2002-02-02",
            "commentAdmin": "pas la bonne facture",
            "commentary": "test2",
            "type": "Restaurants et bars",
            "fileUrl": "https://test.storage.tld/v0/b/billable-677b6.a…f-1.jpg?alt=media&token=4df6ed2c-12c8-42a2-b013-346c1346f732"
        }
    ]))
    .expect("固定データが不正です")
}

/// モックストアへの呼び出し記録
#[derive(Debug, Default)]
pub struct Calls {
    pub list: usize,
    pub create: Vec<CreateBillPayload>,
    pub update: Vec<UpdateBillPayload>,
}

/// テスト用ストア
pub struct MockStore {
    bills: Vec<Bill>,
    list_error: Option<u16>,
    create_error: Option<u16>,
    update_error: Option<u16>,
    pub calls: Mutex<Calls>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::with_bills(fixture_bills())
    }

    pub fn with_bills(bills: Vec<Bill>) -> Self {
        Self {
            bills,
            list_error: None,
            create_error: None,
            update_error: None,
            calls: Mutex::new(Calls::default()),
        }
    }

    /// 一覧取得を "Erreur {status}" で失敗させる
    pub fn failing_list(mut self, status: u16) -> Self {
        self.list_error = Some(status);
        self
    }

    pub fn failing_create(mut self, status: u16) -> Self {
        self.create_error = Some(status);
        self
    }

    pub fn failing_update(mut self, status: u16) -> Self {
        self.update_error = Some(status);
        self
    }

    pub fn list_calls(&self) -> usize {
        self.calls.lock().unwrap().list
    }

    pub fn create_calls(&self) -> Vec<CreateBillPayload> {
        self.calls.lock().unwrap().create.clone()
    }

    pub fn update_calls(&self) -> Vec<UpdateBillPayload> {
        self.calls.lock().unwrap().update.clone()
    }
}

fn error_for(status: u16) -> AppError {
    AppError::api(Some(status), format!("Erreur {status}"))
}

#[async_trait]
impl BillsGateway for MockStore {
    async fn list(&self) -> AppResult<Vec<Bill>> {
        self.calls.lock().unwrap().list += 1;
        match self.list_error {
            Some(status) => Err(error_for(status)),
            None => Ok(self.bills.clone()),
        }
    }

    async fn create(&self, payload: CreateBillPayload) -> AppResult<CreatedBill> {
        self.calls.lock().unwrap().create.push(payload);
        match self.create_error {
            Some(status) => Err(error_for(status)),
            None => Ok(CreatedBill {
                file_url: FIXTURE_FILE_URL.to_string(),
                key: FIXTURE_BILL_ID.to_string(),
            }),
        }
    }

    async fn update(&self, payload: UpdateBillPayload) -> AppResult<Bill> {
        self.calls.lock().unwrap().update.push(payload);
        match self.update_error {
            Some(status) => Err(error_for(status)),
            None => Ok(self.bills[0].clone()),
        }
    }
}

/// 遷移要求を記録するコールバック
pub fn recording_navigator() -> (OnNavigate, Arc<Mutex<Vec<Route>>>) {
    let routes = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&routes);
    let on_navigate: OnNavigate = Arc::new(move |route| recorded.lock().unwrap().push(route));
    (on_navigate, routes)
}
