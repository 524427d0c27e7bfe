use crate::components::daisy::foundations::{DaisyColor, DaisySize, DaisyVariant, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub tone: Option<DaisyColor>,
    #[prop_or_default]
    pub size: DaisySize,
    #[prop_or_default]
    pub variant: DaisyVariant,
    #[prop_or_default]
    pub circle: bool,
    /// Rendered as `aria-pressed` for toggle buttons.
    #[prop_or_default]
    pub pressed: Option<bool>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    /// Defaults to `button` so buttons inside forms never submit by accident.
    #[prop_or(AttrValue::Static("button"))]
    pub r#type: AttrValue,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let classes = classes!(
        "btn",
        props.variant.as_class(),
        props.size.with_prefix("btn"),
        props.circle.then_some("btn-circle"),
        tone_class("btn", props.tone),
        props.class.clone()
    );
    let pressed = props
        .pressed
        .map(|pressed| if pressed { "true" } else { "false" });

    html! {
        <button
            class={classes}
            type={props.r#type.clone()}
            aria-label={props.aria_label.clone()}
            aria-pressed={pressed}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}
