//! Notification stack, click to dismiss.

use yew::prelude::*;

use crate::notify::Toast;

#[derive(Properties, PartialEq)]
pub struct ToastsProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(Toasts)]
pub fn toasts(props: &ToastsProps) -> Html {
    if props.toasts.is_empty() {
        return html! {};
    }
    html! {
        <div class="toasts">
            { for props.toasts.iter().map(|toast| {
                let id = toast.id;
                let onclick = props.on_dismiss.reform(move |_: MouseEvent| id);
                html! {
                    <div class="toast" {onclick}>
                        { &toast.message }
                    </div>
                }
            }) }
        </div>
    }
}
