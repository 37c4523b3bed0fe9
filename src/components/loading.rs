//! Centered spinner shown while the document lookups are in flight.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub caption: Option<String>,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="loading" role="status">
            <div class="spinner" aria-hidden="true"></div>
            if let Some(caption) = &props.caption {
                <div class="loading-caption">{ caption }</div>
            }
        </div>
    }
}
