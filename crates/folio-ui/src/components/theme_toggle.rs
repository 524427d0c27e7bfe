use crate::components::daisy::{Button, DaisySize, DaisyVariant};
use crate::core::theme::ThemeMode;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ThemeToggleProps {
    pub theme: ThemeMode,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub(crate) fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    let dark = props.theme == ThemeMode::Dark;

    html! {
        <Button
            variant={DaisyVariant::Ghost}
            size={DaisySize::Sm}
            circle=true
            pressed={Some(dark)}
            aria_label={props.theme.toggle_label()}
            onclick={onclick}
        >
            <span class={classes!("swap", "swap-rotate", dark.then_some("swap-active"))} aria-hidden="true">
                <span class="swap-on">{"🌙"}</span>
                <span class="swap-off">{"☀️"}</span>
            </span>
        </Button>
    }
}
