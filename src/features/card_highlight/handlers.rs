use crate::board::config::BoardConfig;
use crate::board::dom::{BoardElement, DragSignal};

pub const BOX_SHADOW: &str = "box-shadow";

/// Shadow feedback for the single tracked card.
///
/// Drag-over only highlights a target whose class is exactly the card class,
/// while drag-leave and drag-end clear whatever target they get.
#[derive(Debug, Clone)]
pub struct CardHighlighter {
    card_class: String,
    highlight_shadow: String,
    cleared_shadow: String,
}

impl CardHighlighter {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            card_class: config.card_class.clone(),
            highlight_shadow: config.highlight_shadow.clone(),
            cleared_shadow: config.cleared_shadow.clone(),
        }
    }

    pub fn drag_over<E: BoardElement>(&self, event: &impl DragSignal, target: Option<&E>) {
        event.prevent_default();
        if let Some(target) = target {
            if target.class_name() == self.card_class {
                target.set_style(BOX_SHADOW, &self.highlight_shadow);
            }
        }
    }

    pub fn drag_leave<E: BoardElement>(&self, target: Option<&E>) {
        self.clear(target);
    }

    pub fn drag_start(&self) {}

    pub fn drag_end<E: BoardElement>(&self, target: Option<&E>) {
        self.clear(target);
    }

    pub fn on_drop(&self, event: &impl DragSignal) {
        event.prevent_default();
    }

    fn clear<E: BoardElement>(&self, target: Option<&E>) {
        if let Some(target) = target {
            target.set_style(BOX_SHADOW, &self.cleared_shadow);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::dom::fakes::{FakeDragEvent, FakeElement};

    fn highlighter() -> CardHighlighter {
        CardHighlighter::new(&BoardConfig::default())
    }

    #[test]
    fn drag_over_highlights_job_block_card() {
        let card = FakeElement::with_class("job-block");
        let event = FakeDragEvent::default();

        highlighter().drag_over(&event, Some(&card));

        assert!(event.prevented.get());
        assert_eq!(card.style(BOX_SHADOW).as_deref(), Some("0 2px 3px gray"));
    }

    #[test]
    fn drag_over_ignores_other_classes_but_still_prevents_default() {
        let child = FakeElement::with_class("job-title");
        let event = FakeDragEvent::default();

        highlighter().drag_over(&event, Some(&child));

        assert!(event.prevented.get());
        assert_eq!(child.style(BOX_SHADOW), None);
    }

    #[test]
    fn class_match_is_exact() {
        let card = FakeElement::with_class("job-block");
        card.add_class("selected");

        highlighter().drag_over(&FakeDragEvent::default(), Some(&card));

        assert_eq!(card.style(BOX_SHADOW), None);
    }

    #[test]
    fn drag_over_without_target_only_prevents_default() {
        let event = FakeDragEvent::default();
        highlighter().drag_over(&event, None::<&FakeElement>);
        assert!(event.prevented.get());
    }

    #[test]
    fn drag_leave_and_drag_end_clear_highlight() {
        let h = highlighter();
        let card = FakeElement::with_class("job-block");

        h.drag_over(&FakeDragEvent::default(), Some(&card));
        h.drag_leave(Some(&card));
        assert_eq!(card.style(BOX_SHADOW).as_deref(), Some("none"));

        h.drag_over(&FakeDragEvent::default(), Some(&card));
        h.drag_end(Some(&card));
        assert_eq!(card.style(BOX_SHADOW).as_deref(), Some("none"));
    }

    #[test]
    fn drag_leave_twice_stays_cleared() {
        let h = highlighter();
        let card = FakeElement::with_class("job-block");

        h.drag_leave(Some(&card));
        assert_eq!(card.style(BOX_SHADOW).as_deref(), Some("none"));
        h.drag_leave(Some(&card));
        assert_eq!(card.style(BOX_SHADOW).as_deref(), Some("none"));
    }

    #[test]
    fn drag_leave_clears_regardless_of_class() {
        let other = FakeElement::with_class("job-title");
        highlighter().drag_leave(Some(&other));
        assert_eq!(other.style(BOX_SHADOW).as_deref(), Some("none"));
    }

    #[test]
    fn drop_prevents_default_and_leaves_style_alone() {
        let h = highlighter();
        let card = FakeElement::with_class("job-block");
        let event = FakeDragEvent::carrying("Text", "42");

        h.drag_over(&FakeDragEvent::default(), Some(&card));
        h.on_drop(&event);

        assert!(event.prevented.get());
        assert_eq!(card.style(BOX_SHADOW).as_deref(), Some("0 2px 3px gray"));
    }
}
