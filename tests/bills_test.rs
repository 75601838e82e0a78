//! 経費一覧画面の結合テスト

mod common;

use billed_lib::features::router::views;
use billed_lib::{BillsContainer, BillsView, Route};
use common::{recording_navigator, MockStore};
use std::sync::Arc;

#[tokio::test]
async fn test_four_fixture_bills_render_four_rows_newest_first() {
    let store = Arc::new(MockStore::new());
    let (on_navigate, _) = recording_navigator();
    let container = BillsContainer::new(store.clone(), on_navigate);

    let rows = match container.activate().await {
        BillsView::Loaded(rows) => rows,
        other => panic!("一覧が表示されませんでした: {other:?}"),
    };

    assert_eq!(store.list_calls(), 1);
    assert_eq!(rows.len(), 4);
    let raw_dates: Vec<&str> = rows.iter().map(|r| r.raw_date.as_str()).collect();
    assert_eq!(
        raw_dates,
        vec!["2004-04-04", "2003-03-03", "2002-02-02", "2001-01-01"]
    );

    let displayed: Vec<&str> = rows.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(
        displayed,
        vec!["4 Avr. 04", "3 Mar. 03", "2 Fév. 02", "1 Jan. 01"]
    );
    assert_eq!(rows[0].status, "En attente");
    assert_eq!(rows[1].status, "Accepté");
    assert_eq!(rows[3].status, "Refusé");

    let html = views::bills_page(&BillsView::Loaded(rows));
    assert_eq!(html.matches(r#"data-testid="icon-eye""#).count(), 4);
}

#[tokio::test]
async fn test_list_failure_404_shows_error_message() {
    let store = Arc::new(MockStore::new().failing_list(404));
    let (on_navigate, _) = recording_navigator();
    let container = BillsContainer::new(store, on_navigate);

    let view = container.activate().await;
    assert_eq!(view, BillsView::Error("Erreur 404".to_string()));

    let html = views::bills_page(&view);
    assert!(html.contains(r#"<div data-testid="error-message">Erreur 404</div>"#));
    assert!(!html.contains("<tbody"));
}

#[tokio::test]
async fn test_list_failure_500_shows_error_message() {
    let store = Arc::new(MockStore::new().failing_list(500));
    let (on_navigate, _) = recording_navigator();
    let container = BillsContainer::new(store, on_navigate);

    assert_eq!(
        container.activate().await,
        BillsView::Error("Erreur 500".to_string())
    );
}

#[tokio::test]
async fn test_malformed_date_does_not_abort_the_list() {
    let mut bills = common::fixture_bills();
    bills[2].date = "2003-02-31".to_string();
    let store = Arc::new(MockStore::with_bills(bills));
    let (on_navigate, _) = recording_navigator();
    let container = BillsContainer::new(store, on_navigate);

    let rows = container.get_bills().await.unwrap();
    assert_eq!(rows.len(), 4);
    let broken = rows.iter().find(|r| r.raw_date == "2003-02-31").unwrap();
    assert_eq!(broken.date, "2003-02-31");
}

#[tokio::test]
async fn test_draft_without_date_is_listed_last() {
    let mut bills = common::fixture_bills();
    bills.insert(
        0,
        serde_json::from_value(serde_json::json!({
            "id": "1234",
            "email": "a@a",
            "fileUrl": common::FIXTURE_FILE_URL,
            "fileName": "chucknorris.jpg",
            "status": "pending"
        }))
        .unwrap(),
    );
    let (on_navigate, _) = recording_navigator();
    let container = BillsContainer::new(Arc::new(MockStore::with_bills(bills)), on_navigate);

    let rows = match container.activate().await {
        BillsView::Loaded(rows) => rows,
        other => panic!("一覧が表示されませんでした: {other:?}"),
    };
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].raw_date, "2004-04-04");
    assert_eq!(rows[4].id, "1234");
    assert_eq!(rows[4].date, "");
}

#[tokio::test]
async fn test_empty_list_renders_empty_table() {
    let store = Arc::new(MockStore::with_bills(Vec::new()));
    let (on_navigate, _) = recording_navigator();
    let container = BillsContainer::new(store, on_navigate);

    assert_eq!(container.activate().await, BillsView::Loaded(Vec::new()));
}

#[test]
fn test_new_bill_button_navigates_to_form() {
    let (on_navigate, routes) = recording_navigator();
    let container = BillsContainer::new(Arc::new(MockStore::new()), on_navigate);

    container.handle_click_new_bill();
    assert_eq!(*routes.lock().unwrap(), vec![Route::NewBill]);
}

#[tokio::test]
async fn test_eye_icon_opens_preview_of_row_file() {
    let (on_navigate, _) = recording_navigator();
    let container = BillsContainer::new(Arc::new(MockStore::new()), on_navigate);
    let rows = container.get_bills().await.unwrap();

    let preview = container.handle_click_icon_eye(&rows[1], 501.0).unwrap();
    assert_eq!(preview.url, rows[1].file_url.clone().unwrap());
    assert_eq!(preview.width, 250);

    let html = views::preview_modal(&preview);
    assert!(html.contains(r#"alt="Bill""#));
}

#[tokio::test]
async fn test_eye_icon_without_file_is_an_error() {
    let mut bills = common::fixture_bills();
    bills.truncate(1);
    bills[0].file_url = None;
    let (on_navigate, _) = recording_navigator();
    let container = BillsContainer::new(Arc::new(MockStore::with_bills(bills)), on_navigate);
    let rows = container.get_bills().await.unwrap();

    assert!(container.handle_click_icon_eye(&rows[0], 500.0).is_err());
}
