// src/api/landing_pages.rs
use gloo::console::error;
use gloo::net::http::Request;
use serde::{Deserialize, Serialize};
use urlencoding::encode;
use wasm_bindgen_futures::spawn_local;
use web_sys::FormData;

use crate::api::utils::{handle_api_action_response, handle_api_response, with_credentials};
use crate::config_file::get_env_var;

pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";
pub const DEFAULT_TITLE_COLOR: &str = "#000000";
pub const DEFAULT_DESCRIPTION_COLOR: &str = "#000000";
pub const DEFAULT_BUTTON_COLOR: &str = "#000000";
pub const DEFAULT_BUTTON_TEXT_COLOR: &str = "#ffffff";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct PageButton {
    pub text: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct SocialLinks {
    pub instagram: String,
    pub facebook: String,
    pub youtube: String,
    pub twitter: String,
}

impl SocialLinks {
    /// The platforms that actually have a URL, in display order.
    /// Empty strings count as absent.
    pub fn present(&self) -> Vec<(&'static str, &str)> {
        [
            ("instagram", self.instagram.as_str()),
            ("facebook", self.facebook.as_str()),
            ("youtube", self.youtube.as_str()),
            ("twitter", self.twitter.as_str()),
        ]
        .into_iter()
        .filter(|(_, url)| !url.is_empty())
        .collect()
    }
}

fn default_show_title() -> bool {
    true
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub title_color: Option<String>,
    #[serde(default)]
    pub description_color: Option<String>,
    #[serde(default)]
    pub button_color: Option<String>,
    #[serde(default)]
    pub button_text_color: Option<String>,
    #[serde(default = "default_show_title")]
    pub show_title: bool,
    #[serde(default)]
    pub buttons: Vec<PageButton>,
    #[serde(default)]
    pub social_links: SocialLinks,
}

fn or_default<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => fallback,
    }
}

impl LandingPage {
    pub fn background_color_or_default(&self) -> &str {
        or_default(&self.background_color, DEFAULT_BACKGROUND_COLOR)
    }

    pub fn title_color_or_default(&self) -> &str {
        or_default(&self.title_color, DEFAULT_TITLE_COLOR)
    }

    pub fn description_color_or_default(&self) -> &str {
        or_default(&self.description_color, DEFAULT_DESCRIPTION_COLOR)
    }

    pub fn button_color_or_default(&self) -> &str {
        or_default(&self.button_color, DEFAULT_BUTTON_COLOR)
    }

    pub fn button_text_color_or_default(&self) -> &str {
        or_default(&self.button_text_color, DEFAULT_BUTTON_TEXT_COLOR)
    }

    pub fn background_image_url(&self) -> Option<&str> {
        self.background_image.as_deref().filter(|url| !url.is_empty())
    }

    pub fn logo_url(&self) -> Option<&str> {
        self.logo.as_deref().filter(|url| !url.is_empty())
    }
}

/// Get all landing pages for the logged-in account
pub fn api_list_pages<F>(callback: Option<F>)
where
    F: FnOnce(Result<Vec<LandingPage>, String>) + 'static,
{
    let api_url = get_env_var("API_URL");

    spawn_local(async move {
        let url = format!("{api_url}/landing-pages");
        let result = with_credentials(Request::get(&url)).send().await;
        handle_api_response::<Vec<LandingPage>, F>(result, callback, "list landing pages").await;
    });
}

/// Create a landing page from a multipart payload (images as binary,
/// structured fields serialized as text by the editor)
pub fn api_create_page<F>(form: FormData, callback: Option<F>)
where
    F: FnOnce(Result<(), String>) + 'static,
{
    let api_url = get_env_var("API_URL");

    spawn_local(async move {
        let url = format!("{api_url}/landing-pages");

        let request = match with_credentials(Request::post(&url)).body(form) {
            Ok(request) => request,
            Err(e) => {
                error!(format!("Failed to build create request: {:?}", e));
                if let Some(cb) = callback {
                    cb(Err("Request failed".to_string()));
                }
                return;
            }
        };

        let result = request.send().await;
        handle_api_action_response(result, callback, "create landing page").await;
    });
}

/// Delete a landing page by id
pub fn api_delete_page<F>(id: String, callback: Option<F>)
where
    F: FnOnce(Result<(), String>) + 'static,
{
    let api_url = get_env_var("API_URL");

    spawn_local(async move {
        let url = format!("{api_url}/landing-pages/{}", encode(&id));
        let result = with_credentials(Request::delete(&url)).send().await;
        handle_api_action_response(result, callback, "delete landing page").await;
    });
}

/// Fetch a single landing page for the public renderer. This path is
/// reachable without a session, so auth statuses are not intercepted here.
pub async fn get_landing_page(id: &str) -> Result<LandingPage, String> {
    let api_url = get_env_var("API_URL");

    let response = Request::get(&format!("{api_url}/landing-pages/{}", encode(id)))
        .credentials(web_sys::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error! status: {}", response.status()));
    }

    response
        .json::<LandingPage>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_record_falls_back_to_default_colors() {
        let page: LandingPage =
            serde_json::from_str(r#"{"_id":"abc","title":"My page"}"#).unwrap();

        assert_eq!(page.background_color_or_default(), DEFAULT_BACKGROUND_COLOR);
        assert_eq!(page.title_color_or_default(), DEFAULT_TITLE_COLOR);
        assert_eq!(page.description_color_or_default(), DEFAULT_DESCRIPTION_COLOR);
        assert_eq!(page.button_color_or_default(), DEFAULT_BUTTON_COLOR);
        assert_eq!(page.button_text_color_or_default(), DEFAULT_BUTTON_TEXT_COLOR);
        assert!(page.buttons.is_empty());
        assert!(page.social_links.present().is_empty());
        assert_eq!(page.description, "");
    }

    #[test]
    fn empty_string_colors_also_fall_back() {
        let page: LandingPage = serde_json::from_str(
            r#"{"_id":"abc","title":"t","backgroundColor":"","buttonColor":""}"#,
        )
        .unwrap();

        assert_eq!(page.background_color_or_default(), DEFAULT_BACKGROUND_COLOR);
        assert_eq!(page.button_color_or_default(), DEFAULT_BUTTON_COLOR);
    }

    #[test]
    fn explicit_colors_win_over_defaults() {
        let page: LandingPage = serde_json::from_str(
            r##"{"_id":"abc","title":"t","backgroundColor":"#001f3f","buttonTextColor":"#ff0000"}"##,
        )
        .unwrap();

        assert_eq!(page.background_color_or_default(), "#001f3f");
        assert_eq!(page.button_text_color_or_default(), "#ff0000");
    }

    #[test]
    fn show_title_defaults_to_true_when_missing() {
        let page: LandingPage =
            serde_json::from_str(r#"{"_id":"abc","title":"t"}"#).unwrap();
        assert!(page.show_title);

        let hidden: LandingPage =
            serde_json::from_str(r#"{"_id":"abc","title":"t","showTitle":false}"#).unwrap();
        assert!(!hidden.show_title);
    }

    #[test]
    fn full_record_deserializes_with_camel_case_names() {
        let page: LandingPage = serde_json::from_str(
            r#"{
                "_id": "64fe",
                "title": "Band page",
                "description": "Tour dates and merch",
                "logo": "https://cdn.example/logo.png",
                "backgroundImage": "https://cdn.example/bg.jpg",
                "showTitle": true,
                "buttons": [{"text": "Tickets", "url": "https://tix.example"}],
                "socialLinks": {"instagram": "https://instagram.com/band"}
            }"#,
        )
        .unwrap();

        assert_eq!(page.id, "64fe");
        assert_eq!(page.logo_url(), Some("https://cdn.example/logo.png"));
        assert_eq!(page.background_image_url(), Some("https://cdn.example/bg.jpg"));
        assert_eq!(page.buttons.len(), 1);
        assert_eq!(page.buttons[0].text, "Tickets");
        assert_eq!(
            page.social_links.present(),
            vec![("instagram", "https://instagram.com/band")]
        );
    }

    #[test]
    fn social_links_keep_display_order_and_skip_empty() {
        let links = SocialLinks {
            instagram: String::new(),
            facebook: "https://facebook.com/p".to_string(),
            youtube: String::new(),
            twitter: "https://twitter.com/p".to_string(),
        };

        assert_eq!(
            links.present(),
            vec![
                ("facebook", "https://facebook.com/p"),
                ("twitter", "https://twitter.com/p"),
            ]
        );
    }
}
