use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct AccordionItem {
    pub title: AttrValue,
    pub content: Html,
    pub open: bool,
}

#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    #[prop_or_default]
    pub items: Vec<AccordionItem>,
    #[prop_or_default]
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Emits the index of the header that was clicked.
    #[prop_or_default]
    pub on_toggle: Callback<usize>,
}

#[function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> Html {
    html! {
        <div class={classes!("join", "join-vertical", "w-full", props.class.clone())}>
            {for props.items.iter().enumerate().map(|(index, item)| {
                let panel_id = format!("{}-panel-{index}", props.id);
                let onclick = {
                    let on_toggle = props.on_toggle.clone();
                    Callback::from(move |_: MouseEvent| on_toggle.emit(index))
                };
                html! {
                    <div class={classes!(
                        "collapse",
                        "collapse-arrow",
                        "join-item",
                        "border",
                        "border-base-300",
                        if item.open { "collapse-open" } else { "collapse-close" }
                    )}>
                        <button
                            type="button"
                            class="collapse-title text-left text-lg font-medium"
                            aria-expanded={if item.open { "true" } else { "false" }}
                            aria-controls={panel_id.clone()}
                            onclick={onclick}
                        >
                            {item.title.clone()}
                        </button>
                        <div id={panel_id} class="collapse-content" hidden={!item.open}>{item.content.clone()}</div>
                    </div>
                }
            })}
        </div>
    }
}
