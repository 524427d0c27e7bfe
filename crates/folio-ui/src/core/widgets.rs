//! Small DOM-free state for the page widgets: dropdown, modal, tabs, accordion and range.

/// Open/closed state shared by the dropdown menu and the modal dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    /// Whether the element is open.
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Flip between open and closed.
    #[must_use]
    pub const fn toggle(self) -> Self {
        Self { open: !self.open }
    }

    /// Open state.
    #[must_use]
    pub const fn opened() -> Self {
        Self { open: true }
    }

    /// Closed state.
    #[must_use]
    pub const fn closed() -> Self {
        Self { open: false }
    }

    /// Value for `aria-expanded`.
    #[must_use]
    pub const fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

/// Whether a key press should dismiss an open dropdown or modal.
#[must_use]
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Fixed list of tabs with one active entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabSet {
    len: usize,
    active: usize,
}

impl TabSet {
    /// Tab set of `len` entries with the first one active.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    /// Index of the active tab.
    #[must_use]
    pub const fn active(self) -> usize {
        self.active
    }

    /// Whether `index` is the active tab.
    #[must_use]
    pub const fn is_active(self, index: usize) -> bool {
        self.active == index
    }

    /// Activate `index`; out-of-range indices leave the set unchanged.
    #[must_use]
    pub const fn select(self, index: usize) -> Self {
        if index < self.len {
            Self {
                active: index,
                ..self
            }
        } else {
            self
        }
    }

    /// Activate the following tab, wrapping to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        self.select((self.active + 1) % self.len)
    }

    /// Activate the preceding tab, wrapping to the last.
    #[must_use]
    pub const fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        self.select((self.active + self.len - 1) % self.len)
    }

    /// Apply an arrow-key press.
    #[must_use]
    pub fn handle_key(self, key: &str) -> Self {
        match key {
            "ArrowRight" => self.next(),
            "ArrowLeft" => self.prev(),
            "Home" => self.select(0),
            "End" => self.select(self.len.saturating_sub(1)),
            _ => self,
        }
    }
}

/// Accordion panels that open and close independently.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Vec<bool>,
}

impl AccordionState {
    /// All `len` panels closed.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            open: vec![false; len],
        }
    }

    /// Whether panel `index` is open. Unknown panels are closed.
    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    /// Flip panel `index`; other panels are untouched.
    pub fn toggle(&mut self, index: usize) {
        if let Some(slot) = self.open.get_mut(index) {
            *slot = !*slot;
        }
    }
}

/// Lower bound of the skill slider.
pub const RANGE_MIN: u32 = 0;
/// Upper bound of the skill slider.
pub const RANGE_MAX: u32 = 100;
/// Step of the skill slider.
pub const RANGE_STEP: u32 = 1;

/// Slider value with its text readout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeReadout {
    value: u32,
}

impl Default for RangeReadout {
    fn default() -> Self {
        Self::new(50)
    }
}

impl RangeReadout {
    /// Readout clamped to the slider bounds.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self {
            value: value.clamp(RANGE_MIN, RANGE_MAX),
        }
    }

    /// Readout from the input's string value; unparsable text falls back to the minimum.
    #[must_use]
    pub fn from_value(raw: &str) -> Self {
        Self::new(raw.trim().parse::<u32>().unwrap_or(RANGE_MIN))
    }

    /// Current value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.value
    }

    /// Text shown next to the slider.
    #[must_use]
    pub fn text(self) -> String {
        format!("{}%", self.value)
    }
}

/// Footer copyright line for the given year.
#[must_use]
pub fn footer_text(year: u32, owner: &str) -> String {
    format!("© {year} {owner}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disclosure_toggles() {
        let closed = Disclosure::default();
        assert!(!closed.is_open());
        assert!(closed.toggle().is_open());
        assert_eq!(closed.toggle().aria_expanded(), "true");
        assert_eq!(Disclosure::opened().toggle(), Disclosure::closed());
        assert!(is_dismiss_key("Escape"));
        assert!(!is_dismiss_key("Enter"));
    }

    #[test]
    fn tabs_ignore_out_of_range() {
        let tabs = TabSet::new(3).select(2);
        assert_eq!(tabs.active(), 2);
        assert_eq!(tabs.select(7).active(), 2);
        assert!(tabs.is_active(2));
    }

    #[test]
    fn tabs_wrap_with_arrow_keys() {
        let tabs = TabSet::new(3);
        assert_eq!(tabs.prev().active(), 2);
        assert_eq!(tabs.next().next().next().active(), 0);
        assert_eq!(tabs.handle_key("End").active(), 2);
        assert_eq!(tabs.handle_key("ArrowRight").handle_key("Home").active(), 0);
        assert_eq!(tabs.handle_key("x"), tabs);
        assert_eq!(TabSet::new(0).next().active(), 0);
    }

    #[test]
    fn accordion_panels_are_independent() {
        let mut panels = AccordionState::new(3);
        panels.toggle(0);
        panels.toggle(2);
        assert!(panels.is_open(0));
        assert!(!panels.is_open(1));
        assert!(panels.is_open(2));
        panels.toggle(0);
        assert!(!panels.is_open(0));
        panels.toggle(9);
        assert!(!panels.is_open(9));
    }

    #[test]
    fn range_clamps_and_formats() {
        assert_eq!(RangeReadout::default().text(), "50%");
        assert_eq!(RangeReadout::new(250).value(), RANGE_MAX);
        assert_eq!(RangeReadout::from_value("").value(), RANGE_MIN);
        assert_eq!(RangeReadout::from_value("-4").value(), 0);
        assert_eq!(RangeReadout::from_value("42").text(), "42%");
        assert_eq!(RangeReadout::from_value("120").value(), 100);
    }

    #[test]
    fn footer_mentions_year() {
        assert_eq!(footer_text(2026, "Ada"), "© 2026 Ada");
    }
}
