#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Folio portfolio page front-end.
//! DOM-free widget state and contact-form validation, plus the Yew app that wires them to the page.

pub mod core;
pub mod features;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::core::theme::ThemeMode;
    use crate::core::widgets::{RangeReadout, TabSet};
    use crate::features::contact::state::{ContactFields, ContactForm, Field, SubmitOutcome};

    #[test]
    fn contact_submit_with_bad_email_is_rejected() {
        let mut form = ContactForm::default();
        let fields = ContactFields {
            name: "Linus".to_string(),
            email: "a@b".to_string(),
            password: "abcdefg1".to_string(),
            confirm: "abcdefg1".to_string(),
            terms: true,
        };
        assert_eq!(form.submit(&fields), SubmitOutcome::Rejected);
        assert_eq!(form.message(Field::Email), "Enter a valid email address.");
        assert!(form.status().text().is_empty());
    }

    #[test]
    fn widget_defaults_are_stable() {
        assert_eq!(ThemeMode::default().as_str(), "light");
        assert_eq!(TabSet::new(3).active(), 0);
        assert_eq!(RangeReadout::default().value(), 50);
    }
}
