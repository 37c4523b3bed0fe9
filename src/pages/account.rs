//! Placeholder target for the author-account link. The real account page
//! belongs to the surrounding app shell.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AccountPageProps {
    pub user_id: String,
}

#[function_component(AccountPage)]
pub fn account_page(props: &AccountPageProps) -> Html {
    html! {
        <div class="card">
            <h1>{ "Account" }</h1>
            <p>{ format!("Recipes by {} will appear here.", props.user_id) }</p>
        </div>
    }
}
