// 画面のHTMLテンプレート

use crate::features::bills::container::{BillRow, BillsView, FilePreview};
use crate::features::bills::models::BillType;

/// 縦メニューのアイコン
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutIcon {
    /// 経費一覧
    Window,
    /// 新規経費
    Mail,
}

/// HTML特殊文字をエスケープする
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// 縦メニュー。アクティブなアイコンに `active-icon` クラスを付ける
pub fn vertical_layout(active: Option<LayoutIcon>) -> String {
    let class_for = |icon: LayoutIcon| {
        if active == Some(icon) {
            "layout-icon active-icon"
        } else {
            "layout-icon"
        }
    };
    format!(
        r#"<div class="vertical-navbar"><div data-testid="icon-window" class="{}"></div><div data-testid="icon-mail" class="{}"></div><div id="layout-disconnect"></div></div>"#,
        class_for(LayoutIcon::Window),
        class_for(LayoutIcon::Mail)
    )
}

/// 読み込み中の画面
pub fn loading_page() -> String {
    r#"<div id="loading">Loading...</div>"#.to_string()
}

/// エラー画面。メッセージのみを表示する
pub fn error_page(message: &str) -> String {
    format!(
        r#"<div class="layout"><div class="content"><div data-testid="error-message">{}</div></div></div>"#,
        escape_html(message)
    )
}

fn bill_row(row: &BillRow) -> String {
    let url = row.file_url.as_deref().unwrap_or_default();
    format!(
        r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{} €</td><td>{}</td><td><div class="icon-actions"><div data-testid="icon-eye" data-bill-url="{}"></div></div></td></tr>"#,
        escape_html(&row.bill_type),
        escape_html(&row.name),
        escape_html(&row.date),
        row.amount,
        escape_html(&row.status),
        escape_html(url)
    )
}

/// 経費一覧画面
pub fn bills_page(view: &BillsView) -> String {
    let rows = match view {
        BillsView::Loading => return loading_page(),
        BillsView::Error(message) => return error_page(message),
        BillsView::Loaded(rows) => rows,
    };

    let mut body = String::new();
    for row in rows {
        body.push_str(&bill_row(row));
    }

    format!(
        r#"<div class="layout">{}<div class="content"><div class="content-header"><div class="content-title">Mes notes de frais</div><button type="button" data-testid="btn-new-bill" class="btn btn-primary">Nouvelle note de frais</button></div><div id="data-table"><table id="example" class="table table-striped"><thead><tr><th>Type</th><th>Nom</th><th>Date</th><th>Montant</th><th>Statut</th><th>Actions</th></tr></thead><tbody data-testid="tbody">{body}</tbody></table></div></div></div>"#,
        vertical_layout(Some(LayoutIcon::Window))
    )
}

/// 新規経費フォーム画面
pub fn new_bill_page() -> String {
    let options: String = BillType::ALL
        .iter()
        .map(|bill_type| format!("<option>{}</option>", escape_html(bill_type.label())))
        .collect();

    format!(
        r#"<div class="layout">{}<div class="content"><div class="content-header"><div class="content-title" data-testid="title-new-bill">Envoyer une note de frais</div></div><div class="form-newbill-container content-inner"><form data-testid="form-new-bill"><select required data-testid="expense-type">{options}</select><input type="text" data-testid="expense-name" placeholder="Vol Paris Londres" /><input required type="date" data-testid="datepicker" /><input required type="number" data-testid="amount" placeholder="348" /><input type="number" data-testid="vat" placeholder="70" /><input required type="number" data-testid="pct" placeholder="20" /><textarea data-testid="commentary"></textarea><input required type="file" accept=".jpg,.jpeg,.png" data-testid="file" /><button type="submit" id="btn-send-bill">Envoyer</button></form></div></div></div>"#,
        vertical_layout(Some(LayoutIcon::Mail))
    )
}

/// ログイン画面
pub fn login_page() -> String {
    r#"<div class="login-page"><form data-testid="form-employee"><input type="email" data-testid="employee-email-input" required /><input type="password" data-testid="employee-password-input" required /><button type="submit" data-testid="employee-login-button">Se connecter</button></form></div>"#.to_string()
}

/// 領収書プレビューモーダルの中身
pub fn preview_modal(preview: &FilePreview) -> String {
    format!(
        r#"<div class="bill-proof-container"><img width={} src="{}" alt="Bill" /></div>"#,
        preview.width,
        escape_html(&preview.url)
    )
}
