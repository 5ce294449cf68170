// src/components/social_icons.rs
use yew::prelude::*;

use crate::api::landing_pages::SocialLinks;

#[derive(Properties, PartialEq)]
pub struct SocialIconsProps {
    pub links: SocialLinks,
    /// Icon color, normally the page's button color
    pub color: String,
}

/// Row of social network icons, one per link that actually has a URL
#[function_component(SocialIcons)]
pub fn social_icons(props: &SocialIconsProps) -> Html {
    let present = props.links.present();
    if present.is_empty() {
        return html! {};
    }

    html! {
        <div class="social-row">
            { for present.into_iter().map(|(platform, url)| html! {
                <a
                    href={url.to_string()}
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label={platform.to_string()}
                    style={format!("color: {};", props.color)}
                >
                    { icon(platform) }
                </a>
            }) }
        </div>
    }
}

fn icon(platform: &str) -> Html {
    match platform {
        "instagram" => html! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <rect x="3" y="3" width="18" height="18" rx="5" />
                <circle cx="12" cy="12" r="4.5" />
                <circle cx="17.2" cy="6.8" r="1.2" fill="currentColor" stroke="none" />
            </svg>
        },
        "facebook" => html! {
            <svg viewBox="0 0 24 24" fill="currentColor">
                <path d="M14 8h3V4.5h-3c-2.5 0-4 1.7-4 4.2V11H7v3.5h3V22h3.5v-7.5h3l.5-3.5h-3.5V9c0-.7.3-1 1.5-1z" />
            </svg>
        },
        "youtube" => html! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <rect x="2.5" y="6" width="19" height="12" rx="3.5" />
                <path d="M10 9.5l5 2.5-5 2.5z" fill="currentColor" stroke="none" />
            </svg>
        },
        "twitter" => html! {
            <svg viewBox="0 0 24 24" fill="currentColor">
                <path d="M21 6.3c-.7.3-1.4.5-2.1.6.8-.5 1.3-1.2 1.6-2.1-.7.4-1.5.8-2.4.9A3.7 3.7 0 0 0 11.8 9c0 .3 0 .6.1.8-3-.1-5.7-1.6-7.5-3.9-.3.6-.5 1.2-.5 1.9 0 1.3.7 2.4 1.6 3.1-.6 0-1.2-.2-1.7-.5v.1c0 1.8 1.3 3.3 3 3.6-.3.1-.6.1-1 .1-.2 0-.5 0-.7-.1.5 1.5 1.8 2.5 3.5 2.6a7.5 7.5 0 0 1-4.6 1.6H3a10.5 10.5 0 0 0 5.7 1.7c6.8 0 10.5-5.6 10.5-10.5v-.5c.7-.5 1.3-1.2 1.8-1.9z" />
            </svg>
        },
        _ => html! {},
    }
}
