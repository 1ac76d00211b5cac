use crate::core::resolver::check_availability;
use crate::core::response::CheckResponse;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// HTTP event as delivered by the function runtime. Only the query string
/// is read; every other field is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest {
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl GatewayRequest {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get(name))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl From<CheckResponse> for GatewayResponse {
    fn from(response: CheckResponse) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Self {
            status_code: response.status_code,
            headers,
            body: response.body_json(),
        }
    }
}

pub async fn handle_gateway_request<C, F>(request: &GatewayRequest, load_config: F) -> GatewayResponse
where
    C: ConfigProvider + Validate,
    F: FnOnce() -> Result<C>,
{
    check_availability(request.param("pincode"), request.param("productId"), load_config)
        .await
        .into()
}
