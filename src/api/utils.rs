// src/api/utils.rs
use crate::api::auth::handle_auth_error;
use gloo::console::error;
use gloo::net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

/// The backend uses cookie sessions, so every request carries credentials.
pub fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.credentials(RequestCredentials::Include)
}

/// Generic API response handler that checks auth and parses JSON
pub async fn handle_api_response<T, F>(
    response_result: Result<Response, gloo::net::Error>,
    callback: Option<F>,
    operation_name: &str,
) -> Option<T>
where
    T: DeserializeOwned + Clone,
    F: FnOnce(Result<T, String>),
{
    match response_result {
        Ok(response) => {
            // Check for authentication errors first
            if handle_auth_error(response.status()) {
                if let Some(cb) = callback {
                    cb(Err("Authentication failed".to_string()));
                }
                return None;
            }

            if !response.ok() {
                let error_msg =
                    format!("{} failed with status: {}", operation_name, response.status());
                error!(&error_msg);
                if let Some(cb) = callback {
                    cb(Err(error_msg));
                }
                return None;
            }

            // Parse JSON response
            match response.json::<T>().await {
                Ok(data) => {
                    if let Some(cb) = callback {
                        cb(Ok(data.clone()));
                    }
                    Some(data)
                }
                Err(e) => {
                    let error_msg = format!("Failed to parse {} response: {:?}", operation_name, e);
                    error!(&error_msg);
                    if let Some(cb) = callback {
                        cb(Err("Failed to parse response".to_string()));
                    }
                    None
                }
            }
        }
        Err(e) => {
            let error_msg = format!("{} request failed: {:?}", operation_name, e);
            error!(&error_msg);
            if let Some(cb) = callback {
                cb(Err("Request failed".to_string()));
            }
            None
        }
    }
}

/// Helper for API calls whose response body does not matter, only success
pub async fn handle_api_action_response<F>(
    response_result: Result<Response, gloo::net::Error>,
    callback: Option<F>,
    operation_name: &str,
) where
    F: FnOnce(Result<(), String>),
{
    match response_result {
        Ok(response) => {
            // Check for authentication errors first
            if handle_auth_error(response.status()) {
                if let Some(cb) = callback {
                    cb(Err("Authentication failed".to_string()));
                }
                return;
            }

            if response.ok() {
                if let Some(cb) = callback {
                    cb(Ok(()));
                }
            } else {
                let error_msg =
                    format!("{} failed with status: {}", operation_name, response.status());
                error!(&error_msg);
                if let Some(cb) = callback {
                    cb(Err(error_msg));
                }
            }
        }
        Err(e) => {
            let error_msg = format!("{} request failed: {:?}", operation_name, e);
            error!(&error_msg);
            if let Some(cb) = callback {
                cb(Err("Request failed".to_string()));
            }
        }
    }
}
