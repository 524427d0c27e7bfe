pub mod accordion;

pub use accordion::{Accordion, AccordionItem};
