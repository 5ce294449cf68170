use gloo::storage::{LocalStorage, Storage};
use gloo::{console::error, net::http::Request};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FrontendConfig {
    pub api_url: String,
}

const API_URL: &str = "api_url";

pub async fn load_config() {
    let response = match Request::get("/config/config.json").send().await {
        Ok(response) => response,
        Err(e) => {
            error!(format!("Failed to fetch config: {e:?}"));
            return;
        }
    };

    match response.json::<FrontendConfig>().await {
        Ok(config) => {
            LocalStorage::set(API_URL, config.api_url)
                .expect("failed to write API_URL to localStorage");
        }
        Err(e) => error!(format!("Failed to parse config.json: {e:?}")),
    }
}

pub fn get_env_var(key: &str) -> String {
    let value = match key {
        "API_URL" => LocalStorage::get(API_URL).ok().unwrap_or("".to_owned()),
        _ => "".to_owned(),
    };

    if value.is_empty() {
        error!("Failed to get env var: {key}");
    }

    value
}
