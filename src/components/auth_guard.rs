// src/components/auth_guard.rs
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{api::auth, router::Route};

#[derive(Properties, PartialEq)]
pub struct AuthGuardProps {
    pub children: Children,
}

#[function_component(AuthGuard)]
pub fn auth_guard(props: &AuthGuardProps) -> Html {
    let is_authenticated = use_state(|| false);

    // Check authentication status on component mount
    {
        let is_authenticated = is_authenticated.clone();
        use_effect_with((), move |_| {
            is_authenticated.set(auth::is_authenticated());
            || ()
        });
    }

    if *is_authenticated {
        html! {
            <div class="authenticated-content">
                { for props.children.iter() }
            </div>
        }
    } else {
        html! {
            <div class="auth-notice">
                <div class="auth-notice-card">
                    <h2>{ "🔒 Sign in required" }</h2>
                    <p>{ "Log in to manage your landing pages." }</p>
                    <Link<Route> to={Route::Login} classes="btn btn-primary">
                        { "Go to login" }
                    </Link<Route>>
                </div>
            </div>
        }
    }
}
