//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep state that deferred callbacks mutate in the store so timers never act on stale copies.
//! - Use small, focused slices so reducers stay predictable.

use crate::core::counter::CounterState;
use crate::features::contact::state::ContactForm;
use yewdux::prelude::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Contact form message slots and submission status.
    pub contact: ContactForm,
    /// Counter game state.
    pub counter: CounterState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::contact::state::{ContactFields, Field, SubmitStatus};

    #[test]
    fn default_store_is_empty() {
        let store = AppStore::default();
        assert_eq!(store.counter.value, 0);
        assert_eq!(store.contact.status(), SubmitStatus::Idle);
        assert!(!store.contact.has_errors());
    }

    #[test]
    fn slices_change_independently() {
        let mut store = AppStore::default();
        store.counter.increment();
        store
            .contact
            .check_field(Field::Terms, &ContactFields::default());
        assert_eq!(store.counter.value, 1);
        assert!(store.contact.error(Field::Terms).is_some());
        store.contact.clear();
        assert_eq!(store.counter.value, 1);
    }
}
