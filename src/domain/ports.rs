use crate::domain::model::ProductInventory;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_url(&self) -> &str;
    fn access_token(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
}

/// Source of per-location inventory for a product.
#[async_trait]
pub trait InventoryProvider: Send + Sync {
    async fn fetch_inventory(&self, product_id: &str) -> Result<ProductInventory>;
}
