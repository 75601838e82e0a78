use serde::{Deserialize, Deserializer, Serialize};

/// 経費カテゴリ
///
/// サーバーから未知のラベルが届いた場合は `Other` にそのまま保持する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BillType {
    Transports,
    RestaurantsAndBars,
    HotelAndLodging,
    OnlineServices,
    ItAndElectronics,
    EquipmentAndMaterial,
    OfficeSupplies,
    Other(String),
}

impl BillType {
    /// フォームの選択肢（表示順）。先頭がデフォルト
    pub const ALL: [BillType; 7] = [
        BillType::Transports,
        BillType::RestaurantsAndBars,
        BillType::HotelAndLodging,
        BillType::OnlineServices,
        BillType::ItAndElectronics,
        BillType::EquipmentAndMaterial,
        BillType::OfficeSupplies,
    ];

    pub fn label(&self) -> &str {
        match self {
            BillType::Transports => "Transports",
            BillType::RestaurantsAndBars => "Restaurants et bars",
            BillType::HotelAndLodging => "Hôtel et logement",
            BillType::OnlineServices => "Services en ligne",
            BillType::ItAndElectronics => "IT et électronique",
            BillType::EquipmentAndMaterial => "Equipement et matériel",
            BillType::OfficeSupplies => "Fournitures de bureau",
            BillType::Other(label) => label,
        }
    }
}

impl Default for BillType {
    fn default() -> Self {
        BillType::Transports
    }
}

impl From<String> for BillType {
    fn from(label: String) -> Self {
        BillType::ALL
            .iter()
            .find(|known| known.label() == label)
            .cloned()
            .unwrap_or(BillType::Other(label))
    }
}

impl From<BillType> for String {
    fn from(bill_type: BillType) -> Self {
        match bill_type {
            BillType::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

/// 経費の承認ステータス
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    #[default]
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    /// 一覧表示用のラベル
    pub fn label(&self) -> &'static str {
        match self {
            BillStatus::Pending => "En attente",
            BillStatus::Accepted => "Accepté",
            BillStatus::Refused => "Refusé",
        }
    }
}

/// 経費データモデル（ストアのJSON表現に対応）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub bill_type: BillType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub name: String,
    /// 作成直後の下書きには日付が無い
    #[serde(default)]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub amount: i64,
    #[serde(default, deserialize_with = "string_or_number")]
    pub vat: String,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub pct: i64,
    #[serde(default)]
    pub commentary: String,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub status: BillStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_admin: Option<String>,
}

/// 文字列・数値のどちらでも受け付けて文字列にする（VAT用）
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "文字列または数値を期待しました: {other}"
        ))),
    }
}

/// 整数・小数・数値文字列を受け付けて整数にする
///
/// 空文字や数値として読めない値は0として扱う
fn lenient_integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match &value {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        serde_json::Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    Ok(parsed.unwrap_or_default())
}
