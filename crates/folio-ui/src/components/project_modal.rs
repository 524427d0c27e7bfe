use crate::components::daisy::{Button, DaisyColor, Modal};
use crate::components::dismiss::use_dismiss;
use crate::core::widgets::Disclosure;
use yew::prelude::*;

#[function_component(ProjectModal)]
pub(crate) fn project_modal() -> Html {
    let dialog = use_state(Disclosure::default);

    let close = {
        let dialog = dialog.clone();
        Callback::from(move |()| dialog.set(Disclosure::closed()))
    };
    use_dismiss(dialog.is_open(), close.clone(), None);

    let open = {
        let dialog = dialog.clone();
        Callback::from(move |_: MouseEvent| dialog.set(Disclosure::opened()))
    };

    html! {
        <section id="highlight" class="card bg-base-100 shadow p-6 gap-3">
            <h2 class="card-title">{"Featured project"}</h2>
            <p>{"A WebAssembly front-end with no JavaScript of its own."}</p>
            <div class="card-actions">
                <Button tone={DaisyColor::Secondary} onclick={open}>{"Read more"}</Button>
            </div>
            <Modal id="project-modal" open={dialog.is_open()} title="Folio" on_close={close}>
                <p class="py-4">
                    {"Built with Yew and compiled to wasm32. Theme, widgets and the contact form all run client-side."}
                </p>
            </Modal>
        </section>
    }
}
