use yew::prelude::*;

/// Message slot for a single form control. Renders empty when there is nothing to say.
#[derive(Properties, PartialEq)]
pub struct ValidatorProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub message: AttrValue,
    /// Success slots use the success tone instead of the error tone.
    #[prop_or_default]
    pub success: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Validator)]
pub fn validator(props: &ValidatorProps) -> Html {
    let tone = if props.success {
        "text-success"
    } else {
        "text-error"
    };
    let classes = classes!("validator-hint", "min-h-5", "text-sm", tone, props.class.clone());
    html! {
        <p id={props.id.clone()} class={classes} aria-live="polite">
            {props.message.clone()}
        </p>
    }
}
