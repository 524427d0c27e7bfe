use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    #[prop_or_default]
    pub open: bool,
    #[prop_or_default]
    pub title: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub on_close: Callback<()>,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let classes = classes!(
        "modal",
        props.open.then_some("modal-open"),
        props.class.clone()
    );

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let title_id = props.id.as_ref().map(|id| format!("{id}-title"));

    html! {
        <div
            class={classes}
            id={props.id.clone()}
            role="dialog"
            aria-modal="true"
            aria-hidden={(!props.open).then_some("true")}
            aria-labelledby={title_id.clone()}
        >
            <div class="modal-box">
                <button
                    type="button"
                    class="btn btn-sm btn-circle btn-ghost absolute right-2 top-2"
                    aria-label="Close"
                    onclick={on_close.clone()}
                >
                    {"✕"}
                </button>
                <h3 id={title_id} class="text-lg font-bold">{props.title.clone()}</h3>
                { for props.children.iter() }
            </div>
            <button type="button" class="modal-backdrop" aria-label="Close" onclick={on_close}></button>
        </div>
    }
}
