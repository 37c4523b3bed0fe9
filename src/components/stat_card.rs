//! Small label/value stat card (prep time, cook time).

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: String,
    pub value: String,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stat">
            <div class="stat-title">{ &props.label }</div>
            <div class="stat-value">{ &props.value }</div>
        </div>
    }
}
