// src/pages/landing_view.rs
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::landing_pages::{get_landing_page, LandingPage};
use crate::components::social_icons::SocialIcons;
use crate::components::spinner::Spinner;
use crate::config_file::load_config;

#[derive(Properties, PartialEq)]
pub struct LandingViewProps {
    pub id: String,
}

/// The public, unauthenticated rendering of a landing page. Nothing is
/// shown until the fetch settles.
#[function_component(LandingView)]
pub fn landing_view(props: &LandingViewProps) -> Html {
    let page = use_state(|| None::<LandingPage>);
    let is_loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let page = page.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            spawn_local(async move {
                // Visitors land here directly, so the config may not be
                // cached yet
                load_config().await;

                match get_landing_page(&id).await {
                    Ok(record) => page.set(Some(record)),
                    Err(message) => error.set(Some(message)),
                }
                is_loading.set(false);
            });
            || ()
        });
    }

    if *is_loading {
        return html! {
            <div class="centered-screen">
                <Spinner />
            </div>
        };
    }

    if let Some(message) = (*error).as_ref() {
        return html! {
            <div class="centered-screen">
                <p style="color: red;">{ message }</p>
            </div>
        };
    }

    let Some(page) = (*page).clone() else {
        return html! {};
    };

    let background = page
        .background_image_url()
        .map(|url| format!(" background-image: url({url});"))
        .unwrap_or_default();
    let style = format!(
        "background-color: {};{}",
        page.background_color_or_default(),
        background
    );

    html! {
        <div class="public-page" {style}>
            { if let Some(url) = page.logo_url() {
                html! { <img class="public-logo" src={url.to_string()} alt="Logo" /> }
            } else {
                html! {}
            }}

            { if page.show_title {
                html! {
                    <h1 style={format!(
                        "color: {}; text-align: center;",
                        page.title_color_or_default()
                    )}>
                        { &page.title }
                    </h1>
                }
            } else {
                html! {}
            }}

            { if !page.description.is_empty() {
                html! {
                    <p style={format!(
                        "color: {}; text-align: center; max-width: 600px;",
                        page.description_color_or_default()
                    )}>
                        { &page.description }
                    </p>
                }
            } else {
                html! {}
            }}

            <div class="public-buttons">
                { for page.buttons.iter().map(|button| html! {
                    <a
                        class="public-button"
                        href={button.url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        style={format!(
                            "background-color: {}; color: {};",
                            page.button_color_or_default(),
                            page.button_text_color_or_default()
                        )}
                    >
                        { &button.text }
                    </a>
                }) }
            </div>

            <SocialIcons
                links={page.social_links.clone()}
                color={page.button_color_or_default().to_string()}
            />
        </div>
    }
}
