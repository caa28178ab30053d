use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use reqwest::{header, Client};

use crate::{config::SETTINGS, logging};

pub mod element;

/// Performs an HTTP GET request and returns the response as text.
///
/// 每次呼叫建立自己的 Client，請求之間不共用連線，
/// 不重試，逾時或非 2xx 的狀態碼一律視為失敗。
///
/// # Arguments
///
/// * `url`: The URL to send the GET request to.
/// * `headers`: An optional set of headers to include with the request.
///
/// # Returns
///
/// * `Result<String>`: The response text, or an error if the request fails
///   or the response status is not a success.
pub async fn get(url: &str, headers: Option<header::HeaderMap>) -> Result<String> {
    let client = Client::builder()
        .user_agent(SETTINGS.system.user_agent.as_str())
        .timeout(Duration::from_secs(SETTINGS.system.request_timeout_secs))
        .gzip(true)
        .build()
        .map_err(|why| anyhow!("Failed to create reqwest client: {:?}", why))?;

    let mut rb = client.get(url);
    if let Some(h) = headers {
        rb = rb.headers(h);
    }

    let start = Instant::now();
    let response = rb
        .send()
        .await
        .map_err(|why| anyhow!("Failed to send request to {} because {:?}", url, why))?;
    let elapsed = start.elapsed().as_millis();
    let status = response.status();

    let text = response
        .text()
        .await
        .map_err(|why| anyhow!("Error parsing response text: {:?}", why))?;

    logging::debug_file_async(format!("GET:{} {} {} ms", url, status, elapsed));
    logging::debug_file_async(format!("response text: {}", text));

    if !status.is_success() {
        return Err(anyhow!(
            "Failed to GET {} because HTTP status is {}",
            url,
            status
        ));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging;

    #[tokio::test]
    #[ignore]
    async fn test_get() {
        dotenv::dotenv().ok();

        match get("https://httpbin.org/html", None).await {
            Ok(text) => {
                assert!(!text.is_empty());
            }
            Err(why) => {
                logging::error_file_async(format!("Failed to get because {:?}", why));
            }
        }
    }

    #[tokio::test]
    #[ignore]
    async fn test_get_http_error_status() {
        dotenv::dotenv().ok();

        let result = get("https://httpbin.org/status/404", None).await;
        assert!(result.is_err());
    }
}
