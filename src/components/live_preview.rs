// src/components/live_preview.rs
use web_sys::{File, Url};
use yew::prelude::*;

use crate::components::page_editor::NewPageForm;
use crate::components::social_icons::SocialIcons;

#[derive(Properties, PartialEq)]
pub struct LivePreviewProps {
    pub form: NewPageForm,
}

/// Object URL for a picked file, created once per file and revoked when the
/// file changes or the preview unmounts
#[hook]
fn use_object_url(file: Option<File>) -> Option<String> {
    let url = use_memo(file, |file| {
        file.as_ref()
            .and_then(|f| Url::create_object_url_with_blob(f).ok())
    });

    {
        let url = (*url).clone();
        use_effect_with(url.clone(), move |_| {
            move || {
                if let Some(url) = url {
                    let _ = Url::revoke_object_url(&url);
                }
            }
        });
    }

    (*url).clone()
}

/// Styled mock of the public page, mirroring the editor's form state.
/// Picked-but-unsent images are shown through object URLs.
#[function_component(LivePreview)]
pub fn live_preview(props: &LivePreviewProps) -> Html {
    let form = &props.form;

    let logo_url = use_object_url(form.logo.clone());
    let background_url = use_object_url(form.background_image.clone());

    let background = background_url
        .map(|url| format!(" background-image: url({url});"))
        .unwrap_or_default();
    let style = format!(
        "background-color: {};{} min-height: 600px;",
        form.background_color, background
    );

    let title = if form.title.is_empty() {
        "Your title here"
    } else {
        &form.title
    };
    let description = if form.description.is_empty() {
        "Your description here"
    } else {
        &form.description
    };

    html! {
        <div class="public-page" {style}>
            { if let Some(url) = logo_url {
                html! { <img class="public-logo" src={url} alt="Logo" /> }
            } else {
                html! {}
            }}

            <h2 style={format!("color: {}; text-align: center;", form.title_color)}>
                { title }
            </h2>
            <p style={format!("color: {}; text-align: center; max-width: 600px;", form.description_color)}>
                { description }
            </p>

            <div class="public-buttons">
                { for form.buttons.iter().map(|button| html! {
                    <span
                        class="public-button"
                        style={format!(
                            "background-color: {}; color: {};",
                            form.button_color, form.button_text_color
                        )}
                    >
                        { &button.text }
                    </span>
                }) }
            </div>

            <SocialIcons links={form.social_links.clone()} color={form.button_color.clone()} />
        </div>
    }
}
