// src/router.rs
use crate::components::auth_guard::AuthGuard;
use crate::pages::landing_pages::LandingPages;
use crate::pages::landing_view::LandingView;
use crate::pages::login::Login;
use crate::pages::reset_password::ResetPassword;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Routable, PartialEq, Clone, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/landing-pages")]
    LandingPages,
    #[at("/landing/:id")]
    LandingView { id: String },
    #[at("/reset-password/:token")]
    ResetPassword { token: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::Login => html! { <Login /> },
        Route::LandingPages => html! {
            <AuthGuard>
                <LandingPages />
            </AuthGuard>
        },
        Route::LandingView { id } => html! { <LandingView {id} /> },
        Route::ResetPassword { token } => html! { <ResetPassword {token} /> },
        Route::NotFound => html! { <h1>{ "404 - Page not found" }</h1> },
    }
}
