use crate::components::daisy::{Button, DaisyColor, DaisyVariant};
use crate::core::store::AppStore;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(CounterGame)]
pub(crate) fn counter_game() -> Html {
    let counter = use_selector(|store: &AppStore| store.counter);
    let dispatch = Dispatch::<AppStore>::new();

    let increment = dispatch.reduce_mut_callback(|store| store.counter.increment());
    let decrement = dispatch.reduce_mut_callback(|store| store.counter.decrement());
    let reset = dispatch.reduce_mut_callback(|store| store.counter.reset());

    html! {
        <section id="counter" class="card bg-base-100 shadow p-6 gap-3 items-center">
            <h2 class="card-title">{"Click counter"}</h2>
            <p class="text-5xl font-bold tabular-nums" aria-live="polite">{counter.value}</p>
            <div class="join">
                <Button class="join-item" aria_label="Decrease" onclick={decrement}>{"−"}</Button>
                <Button class="join-item" tone={DaisyColor::Primary} aria_label="Increase" onclick={increment}>{"+"}</Button>
                <Button class="join-item" variant={DaisyVariant::Outline} onclick={reset}>{"Reset"}</Button>
            </div>
            <p class="text-sm opacity-70">{format!("Best: {}", counter.best)}</p>
            {counter.milestone_text().map(|text| html! {
                <p class="badge badge-accent" role="status">{text}</p>
            }).unwrap_or_default()}
        </section>
    }
}
