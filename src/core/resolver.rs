use crate::adapters::shopify::ShopifyClient;
use crate::core::matcher::match_inventory;
use crate::core::response::CheckResponse;
use crate::domain::model::{Availability, CheckRequest};
use crate::domain::ports::{ConfigProvider, InventoryProvider};
use crate::utils::error::{CheckError, ErrorKind, Result};
use crate::utils::validation::{validate_required_param, Validate};

/// 驗證兩個必要參數；任一缺少或為空字串即回傳 400
pub fn validate_request(pincode: Option<&str>, product_id: Option<&str>) -> Result<CheckRequest> {
    match (
        validate_required_param(pincode),
        validate_required_param(product_id),
    ) {
        (Some(pincode), Some(product_id)) => Ok(CheckRequest {
            pincode: pincode.to_string(),
            product_id: product_id.to_string(),
        }),
        _ => Err(CheckError::missing_params()),
    }
}

/// Turns the outcome of a check into a response. Unexpected errors are
/// logged here and replaced by the generic message.
pub fn shape_response(outcome: Result<Availability>) -> CheckResponse {
    match outcome {
        Ok(availability) => CheckResponse::from_availability(availability),
        Err(e) => {
            match e.kind() {
                ErrorKind::Validation => tracing::warn!("Rejected request: {}", e),
                ErrorKind::Upstream => tracing::error!("❌ Upstream inventory query failed: {}", e),
                ErrorKind::Unexpected => {
                    tracing::error!("❌ Availability check failed: {}", e);
                    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
                }
            }
            CheckResponse::from_error(&e)
        }
    }
}

pub struct AvailabilityResolver<P: InventoryProvider> {
    provider: P,
}

impl<P: InventoryProvider> AvailabilityResolver<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Query, then match. Exactly one upstream call.
    pub async fn resolve(&self, request: &CheckRequest) -> Result<Availability> {
        tracing::info!(
            "Checking availability of {} near pincode {}",
            request.product_id,
            request.pincode
        );

        let inventory = self.provider.fetch_inventory(&request.product_id).await?;
        let availability = match_inventory(&inventory, &request.pincode)?;

        match &availability {
            Availability::Matched(result) => tracing::info!(
                "✅ Matched warehouse '{}' ({:?}) with {:?} available",
                result.warehouse_name,
                result.city,
                result.available
            ),
            Availability::NoMatch => tracing::info!("No warehouse matches pincode {}", request.pincode),
        }

        Ok(availability)
    }

    pub async fn respond(&self, request: &CheckRequest) -> CheckResponse {
        shape_response(self.resolve(request).await)
    }

    /// validate → query → match → shape
    pub async fn check(&self, pincode: Option<&str>, product_id: Option<&str>) -> CheckResponse {
        match validate_request(pincode, product_id) {
            Ok(request) => self.respond(&request).await,
            Err(e) => shape_response(Err(e)),
        }
    }
}

/// One full invocation. Configuration is loaded only after the request
/// parameters validate, so a 400 never depends on configuration.
pub async fn check_availability<C, F>(
    pincode: Option<&str>,
    product_id: Option<&str>,
    load_config: F,
) -> CheckResponse
where
    C: ConfigProvider + Validate,
    F: FnOnce() -> Result<C>,
{
    let request = match validate_request(pincode, product_id) {
        Ok(request) => request,
        Err(e) => return shape_response(Err(e)),
    };

    let config = match load_config().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => return shape_response(Err(e)),
    };

    let resolver = AvailabilityResolver::new(ShopifyClient::new(&config));
    resolver.respond(&request).await
}
