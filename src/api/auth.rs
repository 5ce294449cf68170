// src/api/auth.rs
use gloo::net::http::Request;
use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::RequestCredentials;

use crate::config_file::get_env_var;

const SESSION_KEY: &str = "tapfeed_logged_in";

#[derive(Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Record that a session cookie was established
pub fn set_logged_in() {
    LocalStorage::set(SESSION_KEY, true).expect("failed to write session marker to localStorage");
}

/// Clear the local session marker (the cookie itself is the backend's business)
pub fn clear_session() {
    LocalStorage::delete(SESSION_KEY);
}

/// Check if user is currently authenticated
pub fn is_authenticated() -> bool {
    LocalStorage::get::<bool>(SESSION_KEY).unwrap_or(false)
}

/// Handle API response and check for authentication errors
pub fn handle_auth_error(status: u16) -> bool {
    if status == 401 || status == 403 {
        // Session expired or invalid - clear the marker and go back to login
        clear_session();

        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
        true // Indicates auth error was handled
    } else {
        false // Not an auth error
    }
}

/// Logout by telling the backend to drop the session, then clearing local state
pub fn logout() {
    let api_url = get_env_var("API_URL");
    spawn_local(async move {
        let _ = Request::post(&format!("{api_url}/api/logout"))
            .credentials(RequestCredentials::Include)
            .send()
            .await;
    });

    clear_session();

    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

/// Login with username and password, establishing a session cookie
pub async fn login(username: &str, password: &str) -> Result<(), String> {
    let api_url = get_env_var("API_URL");
    let login_request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };

    let response = Request::post(&format!("{api_url}/api/login"))
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
        .json(&login_request)
        .map_err(|e| format!("Failed to create request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.ok() {
        set_logged_in();
        Ok(())
    } else {
        clear_session(); // Clear any stale marker on failed login
        Err(format!("Login failed: {}", response.status()))
    }
}
