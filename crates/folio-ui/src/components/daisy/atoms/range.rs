use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RangeProps {
    #[prop_or(0u32)]
    pub value: u32,
    #[prop_or(0u32)]
    pub min: u32,
    #[prop_or(100u32)]
    pub max: u32,
    #[prop_or(1u32)]
    pub step: u32,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    /// Raw string value of the control on every `input` event.
    #[prop_or_default]
    pub oninput: Callback<String>,
}

#[function_component(Range)]
pub fn range(props: &RangeProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                oninput.emit(input.value());
            }
        })
    };

    html! {
        <input
            type="range"
            class={classes!("range", props.class.clone())}
            id={props.id.clone()}
            aria-label={props.aria_label.clone()}
            min={props.min.to_string()}
            max={props.max.to_string()}
            step={props.step.to_string()}
            value={props.value.to_string()}
            oninput={oninput}
        />
    }
}
