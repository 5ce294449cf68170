// src/components/page_editor.rs
use wasm_bindgen::JsValue;
use web_sys::{File, FormData, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api::landing_pages::{
    api_create_page, PageButton, SocialLinks, DEFAULT_BACKGROUND_COLOR, DEFAULT_BUTTON_COLOR,
    DEFAULT_BUTTON_TEXT_COLOR, DEFAULT_DESCRIPTION_COLOR, DEFAULT_TITLE_COLOR,
};
use crate::components::live_preview::LivePreview;

/// Everything the create form accumulates before submission. Image fields
/// hold the picked `File`s until they go out as multipart binary parts.
#[derive(Clone, Debug, PartialEq)]
pub struct NewPageForm {
    pub title: String,
    pub description: String,
    pub logo: Option<File>,
    pub background_image: Option<File>,
    pub background_color: String,
    pub title_color: String,
    pub description_color: String,
    pub button_color: String,
    pub button_text_color: String,
    pub buttons: Vec<PageButton>,
    pub social_links: SocialLinks,
}

impl Default for NewPageForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            logo: None,
            background_image: None,
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            title_color: DEFAULT_TITLE_COLOR.to_string(),
            description_color: DEFAULT_DESCRIPTION_COLOR.to_string(),
            button_color: DEFAULT_BUTTON_COLOR.to_string(),
            button_text_color: DEFAULT_BUTTON_TEXT_COLOR.to_string(),
            buttons: Vec::new(),
            social_links: SocialLinks::default(),
        }
    }
}

impl NewPageForm {
    /// The create action stays disabled until both required fields are filled
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }

    pub fn add_button(&mut self, text: String, url: String) {
        self.buttons.push(PageButton { text, url });
    }

    pub fn remove_button(&mut self, index: usize) {
        if index < self.buttons.len() {
            self.buttons.remove(index);
        }
    }

    /// Non-file parts of the multipart payload. Structured fields go out
    /// JSON-serialized as text, everything else as plain text.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("description", self.description.clone()),
            ("backgroundColor", self.background_color.clone()),
            ("titleColor", self.title_color.clone()),
            ("descriptionColor", self.description_color.clone()),
            ("buttonColor", self.button_color.clone()),
            ("buttonTextColor", self.button_text_color.clone()),
            (
                "buttons",
                serde_json::to_string(&self.buttons).unwrap_or_else(|_| "[]".to_string()),
            ),
            (
                "socialLinks",
                serde_json::to_string(&self.social_links).unwrap_or_else(|_| "{}".to_string()),
            ),
        ]
    }

    /// Assemble the full multipart payload: text fields plus the image files
    /// appended as binary
    pub fn to_form_data(&self) -> Result<FormData, String> {
        let form = FormData::new().map_err(fmt_js_err)?;

        for (name, value) in self.text_fields() {
            form.append_with_str(name, &value).map_err(fmt_js_err)?;
        }
        if let Some(logo) = &self.logo {
            form.append_with_blob("logo", logo).map_err(fmt_js_err)?;
        }
        if let Some(background) = &self.background_image {
            form.append_with_blob("backgroundImage", background)
                .map_err(fmt_js_err)?;
        }

        Ok(form)
    }
}

fn fmt_js_err(e: JsValue) -> String {
    format!("Failed to build form payload: {:?}", e)
}

#[derive(Properties, PartialEq)]
pub struct PageEditorProps {
    pub on_close: Callback<()>,
    /// Outcome of the create request; the parent owns the banner and the
    /// list reload
    pub on_saved: Callback<Result<(), String>>,
}

#[function_component(PageEditor)]
pub fn page_editor(props: &PageEditorProps) -> Html {
    let form = use_state(NewPageForm::default);
    let new_button_text = use_state(String::new);
    let new_button_url = use_state(String::new);
    let is_saving = use_state(|| false);

    let update_field = {
        let form = form.clone();
        move |apply: fn(&mut NewPageForm, String)| {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                    let mut next = (*form).clone();
                    apply(&mut next, input.value());
                    form.set(next);
                }
            })
        }
    };

    let on_title = update_field(|f, v| f.title = v);
    let on_background_color = update_field(|f, v| f.background_color = v);
    let on_title_color = update_field(|f, v| f.title_color = v);
    let on_description_color = update_field(|f, v| f.description_color = v);
    let on_button_color = update_field(|f, v| f.button_color = v);
    let on_button_text_color = update_field(|f, v| f.button_text_color = v);
    let on_instagram = update_field(|f, v| f.social_links.instagram = v);
    let on_facebook = update_field(|f, v| f.social_links.facebook = v);
    let on_youtube = update_field(|f, v| f.social_links.youtube = v);
    let on_twitter = update_field(|f, v| f.social_links.twitter = v);

    let on_description = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlTextAreaElement>() {
                let mut next = (*form).clone();
                next.description = input.value();
                form.set(next);
            }
        })
    };

    let pick_file = {
        let form = form.clone();
        move |apply: fn(&mut NewPageForm, Option<File>)| {
            let form = form.clone();
            Callback::from(move |e: Event| {
                if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                    let file = input.files().and_then(|files| files.get(0));
                    let mut next = (*form).clone();
                    apply(&mut next, file);
                    form.set(next);
                }
            })
        }
    };

    let on_logo_change = pick_file(|f, file| f.logo = file);
    let on_background_change = pick_file(|f, file| f.background_image = file);

    let on_button_text_input = {
        let new_button_text = new_button_text.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                new_button_text.set(input.value());
            }
        })
    };

    let on_button_url_input = {
        let new_button_url = new_button_url.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                new_button_url.set(input.value());
            }
        })
    };

    let on_add_button = {
        let form = form.clone();
        let new_button_text = new_button_text.clone();
        let new_button_url = new_button_url.clone();
        Callback::from(move |_| {
            if new_button_text.is_empty() || new_button_url.is_empty() {
                return;
            }
            let mut next = (*form).clone();
            next.add_button((*new_button_text).clone(), (*new_button_url).clone());
            form.set(next);
            new_button_text.set(String::new());
            new_button_url.set(String::new());
        })
    };

    let remove_button = {
        let form = form.clone();
        move |index: usize| {
            let form = form.clone();
            Callback::from(move |_| {
                let mut next = (*form).clone();
                next.remove_button(index);
                form.set(next);
            })
        }
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let on_create = {
        let form = form.clone();
        let is_saving = is_saving.clone();
        let on_saved = props.on_saved.clone();
        Callback::from(move |_| {
            if !form.is_submittable() || *is_saving {
                return;
            }

            let payload = match form.to_form_data() {
                Ok(payload) => payload,
                Err(e) => {
                    gloo::console::error!(&e);
                    on_saved.emit(Err("Failed to create the landing page".to_string()));
                    return;
                }
            };

            is_saving.set(true);

            let is_saving = is_saving.clone();
            let on_saved = on_saved.clone();
            api_create_page(
                payload,
                Some(move |result: Result<(), String>| {
                    is_saving.set(false);
                    on_saved
                        .emit(result.map_err(|_| "Failed to create the landing page".to_string()));
                }),
            );
        })
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="p-4 border" style="border-width: 0 0 1px 0;">
                    <h2 class="font-bold">{ "Create new landing page" }</h2>
                </div>
                <div class="modal-body">
                    <div class="editor-grid">
                        // Left side - settings
                        <div>
                            <div class="mb-3">
                                <label class="block text-sm font-bold mb-1">{ "Title *" }</label>
                                <input
                                    class="input w-full"
                                    type="text"
                                    value={form.title.clone()}
                                    oninput={on_title}
                                />
                            </div>
                            <div class="mb-3">
                                <label class="block text-sm font-bold mb-1">{ "Description *" }</label>
                                <textarea
                                    class="input w-full"
                                    rows="4"
                                    value={form.description.clone()}
                                    oninput={on_description}
                                />
                            </div>

                            <div class="flex gap-3 mb-3">
                                <div class="w-full">
                                    <label class="block text-sm font-bold mb-1">{ "Logo" }</label>
                                    <input type="file" accept="image/*" onchange={on_logo_change} />
                                    { if let Some(file) = &form.logo {
                                        html! { <p class="text-sm mt-1">{ format!("Selected file: {}", file.name()) }</p> }
                                    } else {
                                        html! {}
                                    }}
                                </div>
                                <div class="w-full">
                                    <label class="block text-sm font-bold mb-1">{ "Background image" }</label>
                                    <input type="file" accept="image/*" onchange={on_background_change} />
                                    { if let Some(file) = &form.background_image {
                                        html! { <p class="text-sm mt-1">{ format!("Selected file: {}", file.name()) }</p> }
                                    } else {
                                        html! {}
                                    }}
                                </div>
                            </div>

                            <div class="flex gap-3 mb-3">
                                <div>
                                    <label class="block text-sm font-bold mb-1">{ "Background" }</label>
                                    <input type="color" value={form.background_color.clone()} oninput={on_background_color} />
                                </div>
                                <div>
                                    <label class="block text-sm font-bold mb-1">{ "Title" }</label>
                                    <input type="color" value={form.title_color.clone()} oninput={on_title_color} />
                                </div>
                                <div>
                                    <label class="block text-sm font-bold mb-1">{ "Description" }</label>
                                    <input type="color" value={form.description_color.clone()} oninput={on_description_color} />
                                </div>
                                <div>
                                    <label class="block text-sm font-bold mb-1">{ "Button" }</label>
                                    <input type="color" value={form.button_color.clone()} oninput={on_button_color} />
                                </div>
                                <div>
                                    <label class="block text-sm font-bold mb-1">{ "Button text" }</label>
                                    <input type="color" value={form.button_text_color.clone()} oninput={on_button_text_color} />
                                </div>
                            </div>

                            // Links section
                            <h3 class="font-bold mb-2">{ "Add links" }</h3>
                            <div class="flex gap-2 mb-2">
                                <input
                                    class="input w-full"
                                    type="text"
                                    placeholder="Link text"
                                    value={(*new_button_text).clone()}
                                    oninput={on_button_text_input}
                                />
                                <input
                                    class="input w-full"
                                    type="text"
                                    placeholder="URL"
                                    value={(*new_button_url).clone()}
                                    oninput={on_button_url_input}
                                />
                            </div>
                            <button
                                class="btn btn-secondary mb-3"
                                onclick={on_add_button}
                                disabled={new_button_text.is_empty() || new_button_url.is_empty()}
                            >
                                { "➕ Add link" }
                            </button>

                            <ul style="list-style: none; padding: 0;">
                                { for form.buttons.iter().enumerate().map(|(index, button)| html! {
                                    <li class="flex items-center justify-between border rounded p-2 mb-1">
                                        <div>
                                            <div class="text-sm font-bold">{ &button.text }</div>
                                            <div class="text-sm">{ &button.url }</div>
                                        </div>
                                        <button class="btn btn-danger text-sm" onclick={remove_button(index)}>
                                            { "🗑️" }
                                        </button>
                                    </li>
                                }) }
                            </ul>

                            // Social media section
                            <h3 class="font-bold mb-2">{ "Social media" }</h3>
                            <div class="mb-2">
                                <input class="input w-full" type="text" placeholder="Instagram URL"
                                    value={form.social_links.instagram.clone()} oninput={on_instagram} />
                            </div>
                            <div class="mb-2">
                                <input class="input w-full" type="text" placeholder="Facebook URL"
                                    value={form.social_links.facebook.clone()} oninput={on_facebook} />
                            </div>
                            <div class="mb-2">
                                <input class="input w-full" type="text" placeholder="YouTube URL"
                                    value={form.social_links.youtube.clone()} oninput={on_youtube} />
                            </div>
                            <div class="mb-2">
                                <input class="input w-full" type="text" placeholder="Twitter URL"
                                    value={form.social_links.twitter.clone()} oninput={on_twitter} />
                            </div>
                        </div>

                        // Right side - live preview
                        <div>
                            <h3 class="font-bold mb-2">{ "Live preview" }</h3>
                            <div class="preview-pane">
                                <LivePreview form={(*form).clone()} />
                            </div>
                        </div>
                    </div>
                </div>
                <div class="modal-footer">
                    <button class="btn btn-secondary" onclick={on_cancel}>{ "Cancel" }</button>
                    <button
                        class="btn btn-primary"
                        onclick={on_create}
                        disabled={!form.is_submittable() || *is_saving}
                    >
                        { if *is_saving { "⏳ Creating..." } else { "Create" } }
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_defaults_match_the_public_fallback_colors() {
        let form = NewPageForm::default();
        assert_eq!(form.background_color, "#ffffff");
        assert_eq!(form.title_color, "#000000");
        assert_eq!(form.description_color, "#000000");
        assert_eq!(form.button_color, "#000000");
        assert_eq!(form.button_text_color, "#ffffff");
        assert!(form.buttons.is_empty());
    }

    #[test]
    fn create_is_gated_on_title_and_description() {
        let mut form = NewPageForm::default();
        assert!(!form.is_submittable());

        form.title = "My page".to_string();
        assert!(!form.is_submittable());

        form.description = "   ".to_string();
        assert!(!form.is_submittable(), "whitespace does not count as filled");

        form.description = "Hello".to_string();
        assert!(form.is_submittable());
    }

    #[test]
    fn buttons_keep_insertion_order_and_remove_by_index() {
        let mut form = NewPageForm::default();
        form.add_button("First".to_string(), "https://a.example".to_string());
        form.add_button("Second".to_string(), "https://b.example".to_string());
        form.add_button("Third".to_string(), "https://c.example".to_string());

        form.remove_button(1);
        let texts: Vec<&str> = form.buttons.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(texts, vec!["First", "Third"]);

        // Out-of-range removal is a no-op
        form.remove_button(10);
        assert_eq!(form.buttons.len(), 2);
    }

    #[test]
    fn text_fields_serialize_structured_parts_as_json() {
        let mut form = NewPageForm::default();
        form.title = "Band".to_string();
        form.description = "Merch and dates".to_string();
        form.add_button("Tickets".to_string(), "https://tix.example".to_string());
        form.social_links.instagram = "https://instagram.com/band".to_string();

        let fields = form.text_fields();
        let lookup = |name: &str| {
            fields
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v.clone())
                .unwrap()
        };

        assert_eq!(lookup("title"), "Band");
        assert_eq!(
            lookup("buttons"),
            r#"[{"text":"Tickets","url":"https://tix.example"}]"#
        );
        let socials: serde_json::Value = serde_json::from_str(&lookup("socialLinks")).unwrap();
        assert_eq!(socials["instagram"], "https://instagram.com/band");
        assert_eq!(socials["twitter"], "");
    }

    #[test]
    fn text_fields_never_contain_file_parts() {
        let form = NewPageForm::default();
        let names: Vec<&str> = form.text_fields().iter().map(|(n, _)| *n).collect();
        assert!(!names.contains(&"logo"));
        assert!(!names.contains(&"backgroundImage"));
    }
}
