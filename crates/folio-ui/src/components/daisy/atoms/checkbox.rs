use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CheckboxProps {
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub name: Option<AttrValue>,
    #[prop_or_default]
    pub described_by: Option<AttrValue>,
    #[prop_or_default]
    pub invalid: bool,
    #[prop_or_default]
    pub input_ref: NodeRef,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onchange: Callback<bool>,
}

#[function_component(Checkbox)]
pub fn checkbox(props: &CheckboxProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                onchange.emit(input.checked());
            }
        })
    };

    html! {
        <label class="label cursor-pointer justify-start gap-2">
            <input
                type="checkbox"
                class={classes!("checkbox", props.invalid.then_some("checkbox-error"), props.class.clone())}
                id={props.id.clone()}
                name={props.name.clone()}
                aria-invalid={props.invalid.then_some("true")}
                aria-describedby={props.described_by.clone()}
                onchange={onchange}
                ref={props.input_ref.clone()}
            />
            {props.label.clone().map(|text| html! { <span class="label-text">{text}</span> }).unwrap_or_default()}
        </label>
    }
}
