// src/pages/reset_password.rs
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::password::{reset_password, validate_new_password, verify_reset_token};
use crate::config_file::load_config;
use crate::router::Route;

const REDIRECT_DELAY_MS: u32 = 3_000;

#[derive(Properties, PartialEq)]
pub struct ResetPasswordProps {
    /// Opaque token from the emailed link; only the backend can judge it
    pub token: String,
}

#[function_component(ResetPassword)]
pub fn reset_password_page(props: &ResetPasswordProps) -> Html {
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let error_message = use_state(|| None::<String>);
    let success = use_state(|| false);
    let token_valid = use_state(|| true);
    let is_submitting = use_state(|| false);
    let redirect_timer = use_state(|| None::<Timeout>);
    let navigator = use_navigator().unwrap();

    // Verify the token as soon as the page loads
    {
        let token = props.token.clone();
        let token_valid = token_valid.clone();
        let error_message = error_message.clone();
        use_effect_with(token.clone(), move |_| {
            spawn_local(async move {
                load_config().await;

                if let Err(message) = verify_reset_token(&token).await {
                    token_valid.set(false);
                    error_message.set(Some(message));
                }
            });
            || ()
        });
    }

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            password.set(value);
        })
    };

    let on_confirm_input = {
        let confirm_password = confirm_password.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            confirm_password.set(value);
        })
    };

    let onsubmit = {
        let token = props.token.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let error_message = error_message.clone();
        let success = success.clone();
        let is_submitting = is_submitting.clone();
        let redirect_timer = redirect_timer.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Mismatches never leave the browser
            if let Err(message) = validate_new_password(&password, &confirm_password) {
                error_message.set(Some(message));
                return;
            }

            let token = token.clone();
            let new_password = (*password).clone();
            let error_message = error_message.clone();
            let success = success.clone();
            let is_submitting = is_submitting.clone();
            let redirect_timer = redirect_timer.clone();
            let navigator = navigator.clone();

            spawn_local(async move {
                is_submitting.set(true);

                match reset_password(&token, &new_password).await {
                    Ok(()) => {
                        success.set(true);
                        error_message.set(None);

                        let timer = Timeout::new(REDIRECT_DELAY_MS, move || {
                            navigator.push(&Route::Login);
                        });
                        redirect_timer.set(Some(timer));
                    }
                    Err(message) => {
                        error_message.set(Some(message));
                    }
                }

                is_submitting.set(false);
            });
        })
    };

    if !*token_valid {
        return html! {
            <div class="centered-screen">
                <div class="banner banner-error">
                    { (*error_message).clone().unwrap_or_else(|| "This link is invalid or has expired".to_string()) }
                </div>
                <Link<Route> to={Route::Login} classes="btn btn-primary">
                    { "Request a new reset link" }
                </Link<Route>>
            </div>
        };
    }

    html! {
        <div class="login-container flex justify-center">
            <section class="login-card">
                <h1 class="mb-2">{ "Enter a new password" }</h1>

                { if let Some(error) = (*error_message).as_ref() {
                    html! { <div class="banner banner-error mb-2">{ error }</div> }
                } else {
                    html! {}
                }}

                { if *success {
                    html! {
                        <div class="banner banner-success mb-2">
                            { "Your password has been changed. You will be redirected to login..." }
                        </div>
                    }
                } else {
                    html! {
                        <form {onsubmit} class="flex" style="flex-direction: column; gap: 0.75rem;">
                            <input
                                class="input"
                                type="password"
                                placeholder="New password"
                                autocomplete="new-password"
                                value={(*password).clone()}
                                oninput={on_password_input}
                                disabled={*is_submitting}
                            />
                            <input
                                class="input"
                                type="password"
                                placeholder="Confirm new password"
                                autocomplete="new-password"
                                value={(*confirm_password).clone()}
                                oninput={on_confirm_input}
                                disabled={*is_submitting}
                            />
                            <button class="btn btn-primary" type="submit" disabled={*is_submitting}>
                                { if *is_submitting { "Updating..." } else { "Update password" } }
                            </button>
                        </form>
                    }
                }}

                <Link<Route> to={Route::Login} classes="text-sm">
                    { "Back to login" }
                </Link<Route>>
            </section>
        </div>
    }
}
