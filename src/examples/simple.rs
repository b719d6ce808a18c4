//! Simple example of using reqwest-proxy-rotator.

use reqwest_middleware::ClientBuilder;
use reqwest_proxy_rotator::{
    ListSourceKind, ProxyRotatorMiddleware, RotatorConfig, SelectionMode,
};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Initializing proxy pool...");

    let config = RotatorConfig::builder(SelectionMode::RotatePerRequest)
        // one `scheme://[user:password@]host[:port]` entry per line
        .list_source(ListSourceKind::File)
        .proxy_list("proxies.txt")
        .request_timeout(Duration::from_secs(10))
        .retry_count(2)
        .build();

    let rotator = ProxyRotatorMiddleware::new(config)?;

    let client = ClientBuilder::new(reqwest::Client::new())
        .with(rotator)
        .build();

    println!("Sending request...");
    let response = client.get("https://httpbin.org/ip").send().await?;

    println!("Status: {}", response.status());
    println!("Response: {}", response.text().await?);

    Ok(())
}
