use crate::components::daisy::Dropdown;
use crate::components::dismiss::use_dismiss;
use crate::core::widgets::Disclosure;
use yew::prelude::*;

/// Page sections linked from the navigation menu.
const SECTIONS: [(&str, &str); 4] = [
    ("About", "#about"),
    ("Counter", "#counter"),
    ("Skills", "#skills"),
    ("Contact", "#contact"),
];

#[function_component(NavMenu)]
pub(crate) fn nav_menu() -> Html {
    let menu = use_state(Disclosure::default);
    let root = use_node_ref();

    let close = {
        let menu = menu.clone();
        Callback::from(move |()| menu.set(Disclosure::closed()))
    };
    use_dismiss(menu.is_open(), close.clone(), Some(root.clone()));

    let on_toggle = {
        let menu = menu.clone();
        Callback::from(move |()| menu.set(menu.toggle()))
    };

    html! {
        <Dropdown
            label="Menu"
            open={menu.is_open()}
            menu_id="nav-menu"
            node_ref={root}
            class="dropdown-end"
            content_class="w-44"
            on_toggle={on_toggle}
        >
            {for SECTIONS.iter().map(|(label, href)| {
                let close = close.clone();
                html! {
                    <li>
                        <a href={*href} onclick={Callback::from(move |_: MouseEvent| close.emit(()))}>{*label}</a>
                    </li>
                }
            })}
        </Dropdown>
    }
}
