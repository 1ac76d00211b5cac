#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use pincode_check::utils::logger;
#[cfg(feature = "lambda")]
use pincode_check::{handle_gateway_request, GatewayRequest, GatewayResponse, LambdaConfig};
#[cfg(feature = "lambda")]
use tracing::Instrument;

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<GatewayRequest>) -> Result<GatewayResponse, Error> {
    let (request, context) = event.into_parts();
    let span = tracing::info_span!("check_pincode", request_id = %context.request_id);

    async move {
        tracing::info!("Starting pincode availability check");

        // 每次呼叫時重新讀取環境變數中的 access token
        let response = handle_gateway_request(&request, LambdaConfig::from_env).await;

        tracing::info!(status = response.status_code, "Pincode availability check finished");
        Ok(response)
    }
    .instrument(span)
    .await
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
