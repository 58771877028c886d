pub mod components;
pub mod config;
pub mod data;
pub mod hooks;
pub mod pages;
pub mod viewport;

use yew::prelude::*;
use yew_router::prelude::*;

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! {
            <div style="padding: 8rem 2rem; text-align: center; color: #bbb;">
                <h1>{"404"}</h1>
                <p>{"This page does not exist."}</p>
                <a href="/" style="color: #7EB2FF;">{"Back to the start"}</a>
            </div>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
