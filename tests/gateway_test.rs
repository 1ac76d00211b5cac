use anyhow::Result;
use httpmock::prelude::*;
use pincode_check::config::lambda::{ACCESS_TOKEN_VAR, API_URL_VAR};
use pincode_check::{handle_gateway_request, GatewayRequest, LambdaConfig};
use serde_json::json;
use std::collections::HashMap;

fn event(params: serde_json::Value) -> Result<GatewayRequest> {
    Ok(serde_json::from_value(json!({
        "httpMethod": "GET",
        "path": "/.netlify/functions/checkPincode",
        "queryStringParameters": params
    }))?)
}

#[tokio::test]
async fn test_gateway_round_trip_through_env_style_config() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/graphql.json")
            .header("x-shopify-access-token", "shpat_env");
        then.status(200).json_body(json!({
            "data": {"product": {"title": "Indigo Kurta", "variants": {"edges": [
                {"node": {"inventoryItem": {"inventoryLevels": {"edges": [
                    {"node": {"available": 11, "location": {"name": "Salt Lake", "address": {"city": "Kolkata", "postalCode": "700091"}}}}
                ]}}}}
            ]}}}
        }));
    });

    let vars: HashMap<&str, String> = HashMap::from([
        (ACCESS_TOKEN_VAR, "shpat_env".to_string()),
        (API_URL_VAR, server.url("/graphql.json")),
    ]);

    let request = event(json!({"pincode": "700001", "productId": "gid://shopify/Product/9"}))?;
    let response = handle_gateway_request(&request, || {
        LambdaConfig::from_lookup(|name| vars.get(name).cloned())
    })
    .await;

    api_mock.assert();
    assert_eq!(response.status_code, 200);
    assert_eq!(
        response.headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
    assert_eq!(
        response.body,
        r#"{"warehouse":"Salt Lake","available":11,"city":"Kolkata","estimatedDelivery":"2-3 days"}"#
    );
    Ok(())
}

#[tokio::test]
async fn test_gateway_validates_before_loading_config() -> Result<()> {
    let request = event(json!({"pincode": "700001"}))?;
    let response = handle_gateway_request(&request, || {
        LambdaConfig::from_lookup(|_| None)
    })
    .await;

    assert_eq!(response.status_code, 400);
    assert_eq!(response.body, r#"{"error":"Missing pincode or productId"}"#);
    Ok(())
}

#[tokio::test]
async fn test_gateway_empty_values_count_as_missing() -> Result<()> {
    let request = event(json!({"pincode": "", "productId": "gid://shopify/Product/9"}))?;
    let response = handle_gateway_request(&request, || {
        LambdaConfig::from_lookup(|_| None)
    })
    .await;

    assert_eq!(response.status_code, 400);
    Ok(())
}

#[tokio::test]
async fn test_gateway_null_query_string() -> Result<()> {
    let request = event(serde_json::Value::Null)?;
    let response = handle_gateway_request(&request, || {
        LambdaConfig::from_lookup(|_| None)
    })
    .await;

    assert_eq!(response.status_code, 400);
    Ok(())
}

#[tokio::test]
async fn test_gateway_missing_token_is_server_error() -> Result<()> {
    let request = event(json!({"pincode": "700001", "productId": "gid://shopify/Product/9"}))?;
    let response = handle_gateway_request(&request, || {
        LambdaConfig::from_lookup(|_| None)
    })
    .await;

    assert_eq!(response.status_code, 500);
    assert_eq!(response.body, r#"{"error":"Server error"}"#);
    Ok(())
}
