// src/pages/landing_pages.rs
use yew::prelude::*;

use crate::api::landing_pages::{api_delete_page, api_list_pages, LandingPage};
use crate::components::layout::Layout;
use crate::components::page_editor::PageEditor;
use crate::components::spinner::Spinner;
use crate::components::status_banner::{StatusBanner, StatusMessage};

fn confirm(msg: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(msg).unwrap_or(false))
        .unwrap_or(false)
}

#[function_component(LandingPages)]
pub fn landing_pages() -> Html {
    let pages = use_state(Vec::<LandingPage>::new);
    let is_loading = use_state(|| true);
    let status = use_state(|| None::<StatusMessage>);
    let show_editor = use_state(|| false);

    let fetch_pages = {
        let pages = pages.clone();
        let is_loading = is_loading.clone();
        let status = status.clone();
        Callback::from(move |_: ()| {
            is_loading.set(true);

            let pages = pages.clone();
            let is_loading = is_loading.clone();
            let status = status.clone();
            api_list_pages(Some(move |result: Result<Vec<LandingPage>, String>| {
                is_loading.set(false);
                match result {
                    Ok(list) => pages.set(list),
                    Err(_) => status.set(Some(StatusMessage::error(
                        "Failed to load the landing pages",
                    ))),
                }
            }));
        })
    };

    // Load the collection once on mount
    {
        let fetch_pages = fetch_pages.clone();
        use_effect_with((), move |_| {
            fetch_pages.emit(());
            || ()
        });
    }

    let on_open_editor = {
        let show_editor = show_editor.clone();
        Callback::from(move |_| show_editor.set(true))
    };

    let on_close_editor = {
        let show_editor = show_editor.clone();
        Callback::from(move |_| show_editor.set(false))
    };

    // Outcome of the create request: success closes the modal and reloads
    // the list exactly once, failure keeps the modal open
    let on_saved = {
        let show_editor = show_editor.clone();
        let status = status.clone();
        let fetch_pages = fetch_pages.clone();
        Callback::from(move |result: Result<(), String>| match result {
            Ok(()) => {
                status.set(Some(StatusMessage::success(
                    "Landing page created successfully",
                )));
                show_editor.set(false);
                fetch_pages.emit(());
            }
            Err(message) => {
                status.set(Some(StatusMessage::error(message)));
            }
        })
    };

    let delete_page = {
        let status = status.clone();
        let fetch_pages = fetch_pages.clone();
        move |id: String| {
            let status = status.clone();
            let fetch_pages = fetch_pages.clone();
            Callback::from(move |_| {
                if !confirm("Are you sure you want to delete this landing page?") {
                    return;
                }

                let status = status.clone();
                let fetch_pages = fetch_pages.clone();
                api_delete_page(
                    id.clone(),
                    Some(move |result: Result<(), String>| match result {
                        Ok(()) => {
                            status.set(Some(StatusMessage::success(
                                "Landing page deleted successfully",
                            )));
                            fetch_pages.emit(());
                        }
                        Err(_) => {
                            status.set(Some(StatusMessage::error(
                                "Failed to delete the landing page",
                            )));
                        }
                    }),
                );
            })
        }
    };

    let on_dismiss_status = {
        let status = status.clone();
        Callback::from(move |_| status.set(None))
    };

    html! {
        <Layout title="Landing Pages">
            { if let Some(message) = (*status).clone() {
                html! { <StatusBanner {message} on_dismiss={on_dismiss_status} /> }
            } else {
                html! {}
            }}

            <div class="flex items-center justify-between mb-4">
                <h2 class="font-bold text-xl">{ "Your pages" }</h2>
                <button class="btn btn-primary" onclick={on_open_editor}>
                    { "➕ Create new landing page" }
                </button>
            </div>

            { if *is_loading {
                html! { <Spinner /> }
            } else if pages.is_empty() {
                html! {
                    <div class="bg-card border rounded p-4" style="text-align: center;">
                        <p>{ "No landing pages created yet" }</p>
                    </div>
                }
            } else {
                html! {
                    <div class="page-grid">
                        { for pages.iter().map(|page| {
                            let media_style = page
                                .background_image_url()
                                .map(|url| format!("background-image: url({url});"))
                                .unwrap_or_default();
                            html! {
                                <div class="page-card" key={page.id.clone()}>
                                    <div class="page-card-media" style={media_style}></div>
                                    <div class="p-4">
                                        <h3 class="font-bold mb-1">{ &page.title }</h3>
                                        <p class="text-sm">{ &page.description }</p>
                                    </div>
                                    <div class="page-card-actions">
                                        <a
                                            class="btn btn-secondary text-sm"
                                            href={format!("/landing/{}", page.id)}
                                            target="_blank"
                                        >
                                            { "👁️ View" }
                                        </a>
                                        <button
                                            class="btn btn-danger text-sm"
                                            onclick={delete_page(page.id.clone())}
                                        >
                                            { "🗑️ Delete" }
                                        </button>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                }
            }}

            { if *show_editor {
                html! { <PageEditor on_close={on_close_editor} {on_saved} /> }
            } else {
                html! {}
            }}
        </Layout>
    }
}
