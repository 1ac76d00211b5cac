use clap::Parser;
use pincode_check::utils::{error::ErrorKind, logger};
use pincode_check::{check_availability, CheckResponse, CliConfig, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting pincode-check CLI");
    tracing::debug!(
        "CLI config: api_url={}, config={:?}, timeout_seconds={:?}",
        config.api_url,
        config.config,
        config.timeout_seconds
    );

    let pincode = Some(config.pincode.as_str());
    let product_id = Some(config.product_id.as_str());

    let response = match &config.config {
        Some(path) => {
            tracing::info!("📄 Loading upstream settings from {}", path.display());
            check_availability(pincode, product_id, || TomlConfig::from_file(path)).await
        }
        None => check_availability(pincode, product_id, || Ok(config.clone())).await,
    };

    println!("{}", response.status_code);
    println!("{}", response.body_json());

    // 根據錯誤種類決定退出碼
    let code = exit_code(&response);
    if code > 0 {
        std::process::exit(code);
    }

    Ok(())
}

fn exit_code(response: &CheckResponse) -> i32 {
    match response.error_kind {
        None => 0,
        Some(ErrorKind::Validation) => 1,
        Some(ErrorKind::Upstream) => 2,
        Some(ErrorKind::Unexpected) => 3,
    }
}
