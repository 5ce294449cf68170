// src/api/password.rs
use gloo::net::http::Request;
use serde::{Deserialize, Serialize};
use urlencoding::encode;
use web_sys::RequestCredentials;

use crate::config_file::get_env_var;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

#[derive(Deserialize)]
pub struct ResetPasswordResponse {
    pub message: Option<String>,
}

/// Local gate before any reset request goes out
pub fn validate_new_password(password: &str, confirm: &str) -> Result<(), String> {
    if password != confirm {
        return Err("The passwords do not match".to_string());
    }
    Ok(())
}

/// Any non-success verification status means the link is dead; the exact
/// code carries no extra meaning for the user
pub fn verification_outcome(status: u16) -> Result<(), String> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err("This link is invalid or has expired".to_string())
    }
}

/// Ask the backend whether the reset token from the URL is still usable.
/// Validity is decided entirely server-side.
pub async fn verify_reset_token(token: &str) -> Result<(), String> {
    let api_url = get_env_var("API_URL");

    let response = Request::get(&format!(
        "{api_url}/api/verify-reset-token/{}",
        encode(token)
    ))
    .header("Content-Type", "application/json")
    .credentials(RequestCredentials::Include)
    .send()
    .await
    .map_err(|e| format!("Request failed: {}", e))?;

    verification_outcome(response.status())
}

/// Submit the new password together with the token that authorizes the change
pub async fn reset_password(token: &str, new_password: &str) -> Result<(), String> {
    let api_url = get_env_var("API_URL");
    let body = ResetPasswordRequest {
        token: token.to_string(),
        new_password: new_password.to_string(),
    };

    let response = Request::post(&format!("{api_url}/api/reset-password"))
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
        .json(&body)
        .map_err(|e| format!("Failed to create request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.ok() {
        Ok(())
    } else {
        // Surface the backend's message when it sends one
        let message = response
            .json::<ResetPasswordResponse>()
            .await
            .ok()
            .and_then(|r| r.message)
            .unwrap_or_else(|| "Failed to reset the password".to_string());
        Err(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_passwords_pass_validation() {
        assert!(validate_new_password("hunter2", "hunter2").is_ok());
    }

    #[test]
    fn mismatched_passwords_are_rejected_locally() {
        let err = validate_new_password("hunter2", "hunter3").unwrap_err();
        assert_eq!(err, "The passwords do not match");
    }

    #[test]
    fn successful_verification_statuses_pass() {
        assert!(verification_outcome(200).is_ok());
        assert!(verification_outcome(204).is_ok());
    }

    #[test]
    fn failed_verification_maps_to_the_dead_link_message() {
        for status in [400_u16, 401, 404, 410, 500] {
            assert_eq!(
                verification_outcome(status).unwrap_err(),
                "This link is invalid or has expired",
                "status {status} should flip the view into the error state"
            );
        }
    }

    #[test]
    fn reset_request_serializes_with_camel_case_field() {
        let body = ResetPasswordRequest {
            token: "abc123".to_string(),
            new_password: "hunter2".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"token":"abc123","newPassword":"hunter2"}"#);
    }
}
