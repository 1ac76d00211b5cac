use crate::core::{ConfigProvider, InventoryLevel, InventoryProvider, ProductInventory};
use crate::domain::model::VariantInventory;
use crate::utils::error::{CheckError, Result, UPSTREAM_FALLBACK_MESSAGE};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_API_URL: &str =
    "https://blue-city-store.myshopify.com/admin/api/2023-01/graphql.json";
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// 最多 10 個 variant，每個 variant 最多 10 個庫存地點（只取第一頁）
pub const PRODUCT_INVENTORY_QUERY: &str = r#"
query GetProductInventory($productId: ID!) {
  product(id: $productId) {
    title
    variants(first: 10) {
      edges {
        node {
          inventoryItem {
            inventoryLevels(first: 10) {
              edges {
                node {
                  available
                  location {
                    name
                    address {
                      city
                      postalCode
                    }
                  }
                }
              }
            }
          }
        }
      }
    }
  }
}
"#;

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Variables<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Variables<'a> {
    product_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ProductData {
    product: Option<ProductNode>,
}

/// Variants stay undecoded; only `edges[0]` is ever read.
#[derive(Debug, Deserialize)]
struct ProductNode {
    title: String,
    variants: Connection<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct Connection<T> {
    edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
struct Edge<T> {
    node: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VariantNode {
    inventory_item: InventoryItemNode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InventoryItemNode {
    inventory_levels: Connection<InventoryLevel>,
}

impl TryFrom<ProductNode> for ProductInventory {
    type Error = CheckError;

    fn try_from(product: ProductNode) -> Result<Self> {
        let variant_count = product.variants.edges.len();

        let first_variant = match product.variants.edges.into_iter().next() {
            Some(edge) => {
                let variant: VariantNode = serde_json::from_value(edge.node)?;
                Some(VariantInventory {
                    levels: variant
                        .inventory_item
                        .inventory_levels
                        .edges
                        .into_iter()
                        .map(|level| level.node)
                        .collect(),
                })
            }
            None => None,
        };

        Ok(Self {
            title: product.title,
            first_variant,
            variant_count,
        })
    }
}

/// Shopify Admin GraphQL client for product inventory by location.
#[derive(Debug, Clone)]
pub struct ShopifyClient {
    client: Client,
    api_url: String,
    access_token: String,
    timeout: Option<Duration>,
}

impl ShopifyClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Self {
        Self {
            client: Client::new(),
            api_url: config.api_url().to_string(),
            access_token: config.access_token().to_string(),
            timeout: config.timeout_seconds().map(Duration::from_secs),
        }
    }
}

/// null, false, 0 and "" carry no error detail
fn is_blank(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::Bool(b) => !b,
        serde_json::Value::Number(n) => n.as_f64() == Some(0.0),
        serde_json::Value::String(s) => s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => false,
    }
}

/// Error detail for a non-2xx reply: the `errors` payload when the JSON body
/// has one, otherwise the fallback message. A body that is not JSON is a
/// decode failure, not an upstream detail.
fn upstream_error_detail(body: &[u8]) -> Result<serde_json::Value> {
    let value: serde_json::Value = serde_json::from_slice(body)?;

    Ok(value
        .get("errors")
        .filter(|errors| !is_blank(errors))
        .cloned()
        .unwrap_or_else(|| serde_json::Value::String(UPSTREAM_FALLBACK_MESSAGE.to_string())))
}

fn decode_inventory(status: u16, body: &[u8]) -> Result<ProductInventory> {
    let envelope: GraphQlResponse<ProductData> = serde_json::from_slice(body)?;

    match (envelope.data.and_then(|data| data.product), envelope.errors) {
        (Some(product), errors) => {
            if let Some(errors) = errors {
                tracing::warn!("Upstream returned partial data with errors: {}", errors);
            }
            product.try_into()
        }
        (None, Some(errors)) => Err(CheckError::UpstreamError {
            status,
            detail: errors,
        }),
        (None, None) => Err(CheckError::missing_field("data.product")),
    }
}

#[async_trait]
impl InventoryProvider for ShopifyClient {
    async fn fetch_inventory(&self, product_id: &str) -> Result<ProductInventory> {
        let payload = GraphQlRequest {
            query: PRODUCT_INVENTORY_QUERY,
            variables: Variables { product_id },
        };

        let mut request = self
            .client
            .post(&self.api_url)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .json(&payload);

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!("Making GraphQL request to: {}", self.api_url);
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("GraphQL response status: {}", status);

        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(CheckError::UpstreamError {
                status: status.as_u16(),
                detail: upstream_error_detail(&body)?,
            });
        }

        decode_inventory(status.as_u16(), &body)
    }
}
