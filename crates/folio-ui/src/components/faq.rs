use crate::components::daisy::{Accordion, AccordionItem};
use crate::core::widgets::AccordionState;
use yew::prelude::*;

const QUESTIONS: [(&str, &str); 3] = [
    (
        "Are you available for freelance work?",
        "Yes, for short engagements. Use the contact form below.",
    ),
    (
        "Which stack do you prefer?",
        "Rust and TypeScript, with whatever the team already ships.",
    ),
    (
        "Do you mentor?",
        "Occasionally. Mention it in your message.",
    ),
];

#[function_component(Faq)]
pub(crate) fn faq() -> Html {
    let panels = use_state(|| AccordionState::new(QUESTIONS.len()));

    let on_toggle = {
        let panels = panels.clone();
        Callback::from(move |index: usize| {
            let mut next = (*panels).clone();
            next.toggle(index);
            panels.set(next);
        })
    };

    let items = QUESTIONS
        .iter()
        .enumerate()
        .map(|(index, (title, answer))| AccordionItem {
            title: AttrValue::from(*title),
            content: html! { <p>{*answer}</p> },
            open: panels.is_open(index),
        })
        .collect::<Vec<_>>();

    html! {
        <section id="faq" class="card bg-base-100 shadow p-6 gap-4">
            <h2 class="card-title">{"FAQ"}</h2>
            <Accordion id="faq" items={items} on_toggle={on_toggle} />
        </section>
    }
}
