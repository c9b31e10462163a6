use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
}

/// One figure of a dashboard, rendered as a DaisyUI stat block.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stat bg-base-200 rounded-lg shadow">
            <div class="stat-title">{props.title.clone()}</div>
            <div class="stat-value text-primary">{props.value.clone()}</div>
            if let Some(hint) = &props.hint {
                <div class="stat-desc">{hint.clone()}</div>
            }
        </div>
    }
}
