//! Contact form view.
//!
//! # Design
//! - Controls are uncontrolled; values are read through `NodeRef`s at every check.
//! - Message slots and status live in the store so the delayed completion sees current state.
//! - Timers are forgotten: once scheduled they always fire.

use crate::components::daisy::{Button, Checkbox, DaisyColor, Input, Validator};
use crate::core::store::AppStore;
use crate::features::contact::state::{
    Completion, ContactFields, ContactForm, Field, SUBMIT_DELAY_MS, SubmitOutcome,
};
use gloo::console;
use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

/// Handles to the five live controls.
#[derive(Clone, Default, PartialEq)]
struct FieldRefs {
    name: NodeRef,
    email: NodeRef,
    password: NodeRef,
    confirm: NodeRef,
    terms: NodeRef,
}

impl FieldRefs {
    fn node(&self, field: Field) -> NodeRef {
        match field {
            Field::Name => self.name.clone(),
            Field::Email => self.email.clone(),
            Field::Password => self.password.clone(),
            Field::Confirm => self.confirm.clone(),
            Field::Terms => self.terms.clone(),
        }
    }

    /// Snapshot of the controls as they are right now.
    fn read(&self) -> ContactFields {
        ContactFields {
            name: text_value(&self.name),
            email: text_value(&self.email),
            password: text_value(&self.password),
            confirm: text_value(&self.confirm),
            terms: self
                .terms
                .cast::<HtmlInputElement>()
                .is_some_and(|input| input.checked()),
        }
    }

    /// Put every control back to empty/unchecked without dispatching a `reset` event.
    fn restore(&self) {
        for node in [&self.name, &self.email, &self.password, &self.confirm] {
            if let Some(input) = node.cast::<HtmlInputElement>() {
                input.set_value("");
            }
        }
        if let Some(input) = self.terms.cast::<HtmlInputElement>() {
            input.set_checked(false);
        }
    }
}

fn text_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

fn slot_id(field: Field) -> String {
    format!("{}-error", field.input_id())
}

const SUCCESS_SLOT_ID: &str = "contact-success";

fn check(refs: &FieldRefs, field: Field) {
    let fields = refs.read();
    Dispatch::<AppStore>::new().reduce_mut(move |store| {
        store.contact.check_field(field, &fields);
    });
}

fn complete_submission(refs: &FieldRefs) {
    let mut completion = Completion::Noop;
    Dispatch::<AppStore>::new().reduce_mut(|store| {
        completion = store.contact.finish_submission();
    });
    if completion == Completion::Restore {
        refs.restore();
        console::debug!("contact form: simulated submission complete");
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ContactFormViewProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ContactFormView)]
pub(crate) fn contact_form_view(props: &ContactFormViewProps) -> Html {
    let refs = use_memo(|_| FieldRefs::default(), ());
    let form = use_selector(|store: &AppStore| store.contact.clone());

    let on_submit = {
        let refs = refs.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let fields = refs.read();
            let mut outcome = SubmitOutcome::Rejected;
            Dispatch::<AppStore>::new().reduce_mut(|store| {
                outcome = store.contact.submit(&fields);
            });
            match outcome {
                SubmitOutcome::Accepted => {
                    console::debug!("contact form: accepted, simulating submission");
                    let refs = refs.clone();
                    Timeout::new(SUBMIT_DELAY_MS, move || complete_submission(&refs)).forget();
                }
                SubmitOutcome::Rejected => {}
            }
        })
    };

    let on_reset = Callback::from(|_: Event| {
        // Runs after the browser has cleared the controls.
        Timeout::new(0, || {
            Dispatch::<AppStore>::new().reduce_mut(|store| store.contact.clear());
        })
        .forget();
    });

    let text_field = |field: Field, input_type: &'static str, autocomplete: &'static str| {
        let oninput = {
            let refs = refs.clone();
            Callback::from(move |_: String| check(&refs, field))
        };
        let message = form.message(field);
        html! {
            <div class="form-control w-full">
                <label class="label" for={field.input_id()}>
                    <span class="label-text">{field.label()}</span>
                </label>
                <Input
                    id={field.input_id()}
                    name={field.input_id()}
                    input_type={input_type}
                    autocomplete={autocomplete}
                    invalid={!message.is_empty()}
                    described_by={Some(AttrValue::from(slot_id(field)))}
                    input_ref={refs.node(field)}
                    oninput={oninput}
                />
                <Validator id={Some(AttrValue::from(slot_id(field)))} message={message} />
            </div>
        }
    };

    let terms = {
        let onchange = {
            let refs = refs.clone();
            Callback::from(move |_: bool| check(&refs, Field::Terms))
        };
        let message = form.message(Field::Terms);
        html! {
            <div class="form-control">
                <Checkbox
                    id={Field::Terms.input_id()}
                    name={Field::Terms.input_id()}
                    label={Field::Terms.label()}
                    invalid={!message.is_empty()}
                    described_by={Some(AttrValue::from(slot_id(Field::Terms)))}
                    input_ref={refs.node(Field::Terms)}
                    onchange={onchange}
                />
                <Validator id={Some(AttrValue::from(slot_id(Field::Terms)))} message={message} />
            </div>
        }
    };

    html! {
        <form
            id="contact-form"
            class={classes!("card", "bg-base-100", "shadow", "p-6", "gap-2", props.class.clone())}
            novalidate=true
            onsubmit={on_submit}
            onreset={on_reset}
        >
            {text_field(Field::Name, "text", "name")}
            {text_field(Field::Email, "email", "email")}
            {text_field(Field::Password, "password", "new-password")}
            {text_field(Field::Confirm, "password", "new-password")}
            {terms}
            <div class="card-actions justify-end">
                <Button r#type="reset">{"Clear"}</Button>
                <Button r#type="submit" tone={DaisyColor::Primary}>{"Send"}</Button>
            </div>
            <Validator id={SUCCESS_SLOT_ID} success=true message={status_text(&form)} />
        </form>
    }
}

fn status_text(form: &ContactForm) -> AttrValue {
    AttrValue::from(form.status().text())
}
