use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabProps {
    #[prop_or_default]
    pub label: AttrValue,
    #[prop_or_default]
    pub active: bool,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Id of the panel the tab controls.
    #[prop_or_default]
    pub controls: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Tab)]
pub fn tab(props: &TabProps) -> Html {
    let classes = classes!(
        "tab",
        props.active.then_some("tab-active"),
        props.class.clone()
    );
    html! {
        <button
            type="button"
            role="tab"
            class={classes}
            id={props.id.clone()}
            aria-selected={if props.active { "true" } else { "false" }}
            aria-controls={props.controls.clone()}
            tabindex={if props.active { "0" } else { "-1" }}
            onclick={props.onclick.clone()}
        >
            {props.label.clone()}
        </button>
    }
}
