mod components;
mod load;
mod model;
mod notify;
mod pages;
mod store;
mod viewport;

use yew::prelude::*;
use yew_router::prelude::*;

use pages::{AccountPage, RecipePage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/recipe/:user_id/:recipe_id")]
    Recipe { user_id: String, recipe_id: String },
    #[at("/account/:user_id")]
    Account { user_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Recipe { user_id, recipe_id } => html! {
            <RecipePage {recipe_id} {user_id} />
        },
        Route::Account { user_id } => html! {
            <AccountPage {user_id} />
        },
        Route::NotFound => html! {
            <div class="card">
                <h1>{ "404 - Page Not Found" }</h1>
                <p>{ "The page you're looking for doesn't exist." }</p>
            </div>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <main class="page">
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
