pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::shopify::ShopifyClient;
pub use config::{lambda::LambdaConfig, toml_config::TomlConfig};
pub use core::{
    gateway::{handle_gateway_request, GatewayRequest, GatewayResponse},
    resolver::{check_availability, AvailabilityResolver},
    response::CheckResponse,
};
pub use utils::error::{CheckError, Result};
