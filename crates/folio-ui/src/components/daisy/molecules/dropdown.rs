use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DropdownProps {
    #[prop_or_default]
    pub label: AttrValue,
    #[prop_or_default]
    pub open: bool,
    #[prop_or_default]
    pub menu_id: Option<AttrValue>,
    /// Root element, used by callers to detect clicks outside the menu.
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub content_class: Classes,
    #[prop_or_default]
    pub on_toggle: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Dropdown)]
pub fn dropdown(props: &DropdownProps) -> Html {
    let classes = classes!(
        "dropdown",
        props.open.then_some("dropdown-open"),
        props.class.clone()
    );
    let on_toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    html! {
        <div class={classes} ref={props.node_ref.clone()}>
            <button
                type="button"
                class="btn btn-ghost m-1"
                aria-haspopup="true"
                aria-expanded={if props.open { "true" } else { "false" }}
                aria-controls={props.menu_id.clone()}
                onclick={on_toggle}
            >
                {props.label.clone()}
            </button>
            <ul
                id={props.menu_id.clone()}
                hidden={!props.open}
                class={classes!(
                    "dropdown-content",
                    "menu",
                    "p-2",
                    "shadow",
                    "bg-base-200",
                    "rounded-box",
                    "z-10",
                    props.content_class.clone()
                )}
            >
                { for props.children.iter() }
            </ul>
        </div>
    }
}
