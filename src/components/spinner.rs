// src/components/spinner.rs
use yew::prelude::*;

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <div class="flex justify-center p-4">
            <div class="spinner"></div>
        </div>
    }
}
