pub mod gateway;
pub mod matcher;
pub mod resolver;
pub mod response;

pub use crate::domain::model::{Availability, CheckRequest, InventoryLevel, MatchResult, ProductInventory};
pub use crate::domain::ports::{ConfigProvider, InventoryProvider};
pub use crate::utils::error::Result;
