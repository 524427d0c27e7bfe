use crate::components::daisy::Tab;
use crate::core::widgets::TabSet;
use yew::prelude::*;

/// Tab labels and panel copy for the about section.
const PANELS: [(&str, &str); 3] = [
    (
        "Bio",
        "Software engineer focused on fast, accessible web front-ends and the tooling behind them.",
    ),
    (
        "Projects",
        "A WebAssembly portfolio, a terminal music player and a handful of open-source parsers.",
    ),
    (
        "Experience",
        "Eight years across product teams, from early-stage startups to platform groups.",
    ),
];

fn tab_id(index: usize) -> String {
    format!("about-tab-{index}")
}

fn panel_id(index: usize) -> String {
    format!("about-panel-{index}")
}

#[function_component(ProjectTabs)]
pub(crate) fn project_tabs() -> Html {
    let tabs = use_state(|| TabSet::new(PANELS.len()));

    let onkeydown = {
        let tabs = tabs.clone();
        Callback::from(move |event: KeyboardEvent| {
            let next = tabs.handle_key(&event.key());
            if next != *tabs {
                event.prevent_default();
                tabs.set(next);
            }
        })
    };

    html! {
        <section id="about" class="card bg-base-100 shadow p-6 gap-4">
            <h2 class="card-title">{"About"}</h2>
            <div role="tablist" class="tabs tabs-bordered" onkeydown={onkeydown}>
                {for PANELS.iter().enumerate().map(|(index, (label, _))| {
                    let onclick = {
                        let tabs = tabs.clone();
                        Callback::from(move |_: MouseEvent| tabs.set(tabs.select(index)))
                    };
                    html! {
                        <Tab
                            label={*label}
                            active={tabs.is_active(index)}
                            id={Some(AttrValue::from(tab_id(index)))}
                            controls={Some(AttrValue::from(panel_id(index)))}
                            onclick={onclick}
                        />
                    }
                })}
            </div>
            {for PANELS.iter().enumerate().map(|(index, (_, body))| html! {
                <div
                    id={panel_id(index)}
                    role="tabpanel"
                    aria-labelledby={tab_id(index)}
                    hidden={!tabs.is_active(index)}
                >
                    <p>{*body}</p>
                </div>
            })}
        </section>
    }
}
