use std::{env, path::PathBuf, str::FromStr};

use anyhow::Result;
use config::{Config as config_config, File as config_file};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

const CONFIG_PATH: &str = "app.json";

const SYSTEM_REQUEST_TIMEOUT_SECS: &str = "SYSTEM_REQUEST_TIMEOUT_SECS";
const SYSTEM_USER_AGENT: &str = "SYSTEM_USER_AGENT";

/// kabutan 要求使用瀏覽器的 User-Agent 才回應完整頁面
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// 每個 HTTP 請求的逾時秒數
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

pub static SETTINGS: Lazy<App> = Lazy::new(|| App::get().expect("Config error"));

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct App {
    #[serde(default)]
    pub system: System,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct System {
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for App {
    fn default() -> Self {
        App {
            system: System::default(),
        }
    }
}

impl Default for System {
    fn default() -> Self {
        System {
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl App {
    fn get() -> Result<Self> {
        let config_path = config_path();
        if config_path.exists() {
            let config: App = config_config::builder()
                .add_source(config_file::from(config_path))
                .build()?
                .try_deserialize()?;
            return Ok(config.override_with_env());
        }

        Ok(App::default().override_with_env())
    }

    /// 將來至於 env 的設定值覆蓋掉 json 上的設定值
    fn override_with_env(mut self) -> Self {
        if let Ok(timeout) = env::var(SYSTEM_REQUEST_TIMEOUT_SECS) {
            self.system.request_timeout_secs =
                u64::from_str(&timeout).unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        }

        if let Ok(user_agent) = env::var(SYSTEM_USER_AGENT) {
            self.system.user_agent = user_agent;
        }

        self
    }
}

/// 回傳設定檔的路徑
fn config_path() -> PathBuf {
    PathBuf::from(CONFIG_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let app = App::default();

        assert_eq!(app.system.request_timeout_secs, 10);
        assert!(app.system.user_agent.starts_with("Mozilla/5.0"));
    }

    #[tokio::test]
    async fn test_init() {
        dotenv::dotenv().ok();

        crate::logging::debug_file_async(format!("SETTINGS.system: {:#?}\r\n", SETTINGS.system));

        assert!(SETTINGS.system.request_timeout_secs > 0);
        assert!(!SETTINGS.system.user_agent.is_empty());
    }
}
