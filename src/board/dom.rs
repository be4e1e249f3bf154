//! Seams between the drag handlers and the browser DOM.
//!
//! Handlers are written against these traits so they can be driven by
//! in-memory fakes in tests; the `web_sys` impls below are what the page uses.

use web_sys::{DragEvent, HtmlElement};

/// The parts of a drag event the handlers read or mutate.
pub trait DragSignal {
    fn prevent_default(&self);

    /// Text stored in the drag transfer under `format`, or `""` when the
    /// event carries no transfer or no such entry.
    fn transfer_text(&self, format: &str) -> String;
}

/// A board element (card or column) as seen by the handlers.
pub trait BoardElement {
    /// Full `class` attribute.
    fn class_name(&self) -> String;
    fn set_style(&self, property: &str, value: &str);
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    /// Value of the `data-<key>` attribute; `key` is the attribute suffix,
    /// not a camel-cased dataset name.
    fn data(&self, key: &str) -> Option<String>;
    fn set_data(&self, key: &str, value: &str);
}

/// Prefix of the `data-` attribute that marks an element as already wired.
pub const WIRED_MARKER: &str = "dnd-wired";

/// Marks `element` as wired for `feature`. Returns `false` when it already
/// was, so listeners are attached at most once per element.
pub fn claim_once(element: &impl BoardElement, feature: &str) -> bool {
    let key = format!("{}-{}", WIRED_MARKER, feature);
    if element.data(&key).is_some() {
        return false;
    }
    element.set_data(&key, "");
    true
}

impl DragSignal for DragEvent {
    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }

    fn transfer_text(&self, format: &str) -> String {
        self.data_transfer()
            .and_then(|transfer| transfer.get_data(format).ok())
            .unwrap_or_default()
    }
}

impl BoardElement for HtmlElement {
    fn class_name(&self) -> String {
        web_sys::Element::class_name(self)
    }

    fn set_style(&self, property: &str, value: &str) {
        if self.style().set_property(property, value).is_err() {
            log::warn!("could not set {} on #{}", property, self.id());
        }
    }

    fn add_class(&self, class: &str) {
        if self.class_list().add_1(class).is_err() {
            log::warn!("could not add class {:?} to #{}", class, self.id());
        }
    }

    fn remove_class(&self, class: &str) {
        if self.class_list().remove_1(class).is_err() {
            log::warn!("could not remove class {:?} from #{}", class, self.id());
        }
    }

    fn data(&self, key: &str) -> Option<String> {
        self.get_attribute(&format!("data-{}", key))
    }

    fn set_data(&self, key: &str, value: &str) {
        if self.set_attribute(&format!("data-{}", key), value).is_err() {
            log::warn!("could not set data-{} on #{}", key, self.id());
        }
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct FakeDragEvent {
        pub prevented: Cell<bool>,
        pub transfer: HashMap<String, String>,
    }

    impl FakeDragEvent {
        pub fn carrying(format: &str, text: &str) -> Self {
            let mut transfer = HashMap::new();
            transfer.insert(format.to_string(), text.to_string());
            Self {
                prevented: Cell::new(false),
                transfer,
            }
        }
    }

    impl DragSignal for FakeDragEvent {
        fn prevent_default(&self) {
            self.prevented.set(true);
        }

        fn transfer_text(&self, format: &str) -> String {
            self.transfer.get(format).cloned().unwrap_or_default()
        }
    }

    #[derive(Default)]
    pub struct FakeElement {
        pub classes: RefCell<Vec<String>>,
        pub styles: RefCell<HashMap<String, String>>,
        pub data: RefCell<HashMap<String, String>>,
    }

    impl FakeElement {
        pub fn with_class(class: &str) -> Self {
            let element = Self::default();
            element.classes.borrow_mut().push(class.to_string());
            element
        }

        pub fn with_data(self, key: &str, value: &str) -> Self {
            self.set_data(key, value);
            self
        }

        pub fn style(&self, property: &str) -> Option<String> {
            self.styles.borrow().get(property).cloned()
        }

        pub fn has_class(&self, class: &str) -> bool {
            self.classes.borrow().iter().any(|c| c == class)
        }
    }

    impl BoardElement for FakeElement {
        fn class_name(&self) -> String {
            self.classes.borrow().join(" ")
        }

        fn set_style(&self, property: &str, value: &str) {
            self.styles
                .borrow_mut()
                .insert(property.to_string(), value.to_string());
        }

        fn add_class(&self, class: &str) {
            if !self.has_class(class) {
                self.classes.borrow_mut().push(class.to_string());
            }
        }

        fn remove_class(&self, class: &str) {
            self.classes.borrow_mut().retain(|c| c != class);
        }

        fn data(&self, key: &str) -> Option<String> {
            self.data.borrow().get(key).cloned()
        }

        fn set_data(&self, key: &str, value: &str) {
            self.data
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fakes::FakeElement;
    use super::*;

    #[test]
    fn claim_once_succeeds_only_on_first_call() {
        let column = FakeElement::with_class("column").with_data("column-id", "7");

        assert!(claim_once(&column, "column"));
        assert!(!claim_once(&column, "column"));
        assert_eq!(column.data("dnd-wired-column").as_deref(), Some(""));
    }

    #[test]
    fn claims_are_tracked_per_feature() {
        let element = FakeElement::with_class("job-block");

        assert!(claim_once(&element, "card"));
        assert!(claim_once(&element, "column"));
        assert!(!claim_once(&element, "card"));
    }
}
