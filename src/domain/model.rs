use serde::{Deserialize, Serialize};

pub const ESTIMATED_DELIVERY: &str = "2-3 days";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub address: Address,
}

/// Stock of one variant at one warehouse location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLevel {
    #[serde(default)]
    pub available: Option<i64>,
    pub location: Location,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantInventory {
    pub levels: Vec<InventoryLevel>,
}

/// 上游回傳的商品庫存。只解碼第一個 variant，其餘只計數
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductInventory {
    pub title: String,
    pub first_variant: Option<VariantInventory>,
    pub variant_count: usize,
}

/// A validated check request. Both fields are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
    pub pincode: String,
    pub product_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    #[serde(rename = "warehouse")]
    pub warehouse_name: String,
    pub available: Option<i64>,
    pub city: Option<String>,
    pub estimated_delivery: &'static str,
}

impl From<&InventoryLevel> for MatchResult {
    fn from(level: &InventoryLevel) -> Self {
        Self {
            warehouse_name: level.location.name.clone(),
            available: level.available,
            city: level.location.address.city.clone(),
            estimated_delivery: ESTIMATED_DELIVERY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Matched(MatchResult),
    NoMatch,
}
