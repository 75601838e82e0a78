use std::sync::Arc;

/// 画面のルート識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Bills,
    NewBill,
}

impl Route {
    /// ルートのハッシュパス
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
        }
    }

    /// パスからルートを解決する。未知のパスはNone
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "" | "/" => Some(Route::Login),
            "#employee/bills" => Some(Route::Bills),
            "#employee/bill/new" => Some(Route::NewBill),
            _ => None,
        }
    }
}

/// 画面遷移のコールバック
pub type OnNavigate = Arc<dyn Fn(Route) + Send + Sync>;
