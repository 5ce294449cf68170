// src/components/layout.rs
use yew::prelude::*;

use crate::api::auth;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub title: String,
    pub children: Children,
}

/// Shared chrome around admin pages: header with the page title and logout.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let on_logout = Callback::from(|_| auth::logout());

    html! {
        <div>
            <header class="admin-header">
                <h1 class="font-bold text-xl">{ &props.title }</h1>
                <button class="btn btn-danger text-sm" onclick={on_logout}>
                    { "Log out" }
                </button>
            </header>
            <main class="p-4">
                { for props.children.iter() }
            </main>
        </div>
    }
}
