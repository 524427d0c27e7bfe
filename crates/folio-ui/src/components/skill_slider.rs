use crate::components::daisy::Range;
use crate::core::widgets::{RANGE_MAX, RANGE_MIN, RANGE_STEP, RangeReadout};
use yew::prelude::*;

#[function_component(SkillSlider)]
pub(crate) fn skill_slider() -> Html {
    let readout = use_state(RangeReadout::default);

    let oninput = {
        let readout = readout.clone();
        Callback::from(move |raw: String| readout.set(RangeReadout::from_value(&raw)))
    };

    html! {
        <section id="skills" class="card bg-base-100 shadow p-6 gap-3">
            <h2 class="card-title">{"How much Rust?"}</h2>
            <Range
                id="skill-range"
                aria_label="Rust share of my week"
                value={readout.value()}
                min={RANGE_MIN}
                max={RANGE_MAX}
                step={RANGE_STEP}
                class="range-primary"
                oninput={oninput}
            />
            <output for="skill-range" class="text-lg font-semibold" aria-live="polite">{readout.text()}</output>
        </section>
    }
}
