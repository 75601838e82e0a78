use super::routes::{OnNavigate, Route};
use super::views::{self, LayoutIcon};
use crate::features::bills::container::{BillsContainer, BillsView};
use crate::features::new_bill::container::NewBillContainer;
use crate::features::session::Session;
use crate::features::store::BillsGateway;
use log::{debug, info, warn};
use std::sync::{Arc, Mutex};

/// 描画済みの画面
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub route: Route,
    pub html: String,
    pub active_icon: Option<LayoutIcon>,
}

/// ルート画面の切り替えを担当する
///
/// コンテナからの遷移要求は記録しておき、`follow_pending` で描画する。
/// 経費一覧は読み込み中の画面を先に返し、`complete` で取得結果を描画する
pub struct Router {
    store: Arc<dyn BillsGateway>,
    session: Option<Session>,
    pending: Arc<Mutex<Option<Route>>>,
    current: Option<Route>,
    loading: bool,
}

impl Router {
    pub fn new(store: Arc<dyn BillsGateway>, session: Option<Session>) -> Self {
        Self {
            store,
            session,
            pending: Arc::new(Mutex::new(None)),
            current: None,
            loading: false,
        }
    }

    pub fn current_route(&self) -> Option<Route> {
        self.current
    }

    /// 経費一覧の取得待ちかどうか
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// コンテナに渡す遷移コールバック
    pub fn on_navigate(&self) -> OnNavigate {
        let pending = Arc::clone(&self.pending);
        Arc::new(move |route| {
            debug!("遷移要求を受け付けました: {}", route.path());
            match pending.lock() {
                Ok(mut guard) => *guard = Some(route),
                Err(e) => warn!("遷移要求の記録に失敗しました: {e}"),
            }
        })
    }

    fn employee_session(&self) -> Option<&Session> {
        self.session.as_ref().filter(|session| session.is_employee())
    }

    /// 経費一覧画面のコンテナを作成
    pub fn bills_container(&self) -> BillsContainer {
        BillsContainer::new(Arc::clone(&self.store), self.on_navigate())
    }

    /// 新規経費画面のコンテナを作成（従業員としてログイン中のみ）
    pub fn new_bill_container(&self) -> Option<NewBillContainer> {
        self.employee_session().cloned().map(|session| {
            NewBillContainer::new(Arc::clone(&self.store), self.on_navigate(), session)
        })
    }

    /// 従業員向けの画面は従業員セッションが無ければログイン画面にする
    fn authorize(&self, route: Route) -> Route {
        if route == Route::Login || self.employee_session().is_some() {
            return route;
        }
        match &self.session {
            None => warn!("未ログインのためログイン画面を表示します: requested={}", route.path()),
            Some(session) => warn!(
                "従業員以外のセッションです。ログイン画面を表示します: type={:?}, requested={}",
                session.user().user_type,
                route.path()
            ),
        }
        Route::Login
    }

    /// 遷移を開始し、最初に表示する画面を返す
    ///
    /// 経費一覧は読み込み中の画面になる
    pub fn begin(&mut self, route: Route) -> Page {
        let route = self.authorize(route);
        info!("画面遷移: {}", route.path());

        self.current = Some(route);
        self.loading = route == Route::Bills;

        match route {
            Route::Login => Page {
                route,
                html: views::login_page(),
                active_icon: None,
            },
            Route::Bills => Page {
                route,
                html: views::bills_page(&BillsView::Loading),
                active_icon: Some(LayoutIcon::Window),
            },
            Route::NewBill => Page {
                route,
                html: views::new_bill_page(),
                active_icon: Some(LayoutIcon::Mail),
            },
        }
    }

    /// 読み込み中の経費一覧を取得結果で描画する
    ///
    /// 取得待ちでなければNone
    pub async fn complete(&mut self) -> Option<Page> {
        if !self.loading || self.current != Some(Route::Bills) {
            return None;
        }

        let view = self.bills_container().activate().await;
        self.loading = false;
        Some(Page {
            route: Route::Bills,
            html: views::bills_page(&view),
            active_icon: Some(LayoutIcon::Window),
        })
    }

    /// 指定ルートの画面を最後まで描画する
    ///
    /// 未ログインの場合はログイン画面になる
    pub async fn navigate(&mut self, route: Route) -> Page {
        let page = self.begin(route);
        match self.complete().await {
            Some(loaded) => loaded,
            None => page,
        }
    }

    /// ハッシュパスで遷移する。未知のパスはログイン画面
    pub async fn navigate_to_path(&mut self, path: &str) -> Page {
        let route = Route::from_path(path).unwrap_or_else(|| {
            warn!("未知のパスです: {path}");
            Route::Login
        });
        self.navigate(route).await
    }

    /// 記録済みの遷移要求があれば描画する
    pub async fn follow_pending(&mut self) -> Option<Page> {
        let requested = match self.pending.lock() {
            Ok(mut guard) => guard.take(),
            Err(e) => {
                warn!("遷移要求の取得に失敗しました: {e}");
                None
            }
        };

        match requested {
            Some(route) => Some(self.navigate(route).await),
            None => None,
        }
    }
}
