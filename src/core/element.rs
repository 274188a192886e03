use crate::core::fallback;
use crate::core::tables::STEM_ELEMENTS;
use crate::domain::model::Element;

/// Table lookup only; `None` for anything outside the ten stems.
pub fn lookup(stem: &str) -> Option<Element> {
    STEM_ELEMENTS
        .iter()
        .find(|(symbol, _)| *symbol == stem)
        .map(|(_, element)| *element)
}

/// Day master → element. Never fails: unknown stems resolve to wood.
pub fn classify(day_stem: &str) -> Element {
    fallback::resolve_element(day_stem)
}
