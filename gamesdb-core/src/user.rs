//! Account documents: favorites and per-game ratings.

use crate::util::parse_int_or;
use crate::xml::XmlElement;

/// `<Favorites><Game>2</Game>...</Favorites>`: one game id per child, in
/// order. Non-numeric entries come back as 0.
pub fn favorites_from_document(root: &XmlElement) -> Vec<i32> {
    root.elements()
        .map(|entry| parse_int_or(&entry.inner_text(), 0))
        .collect()
}

/// `<Data><Game><Rating>7</Rating></Game></Data>`: the user's rating, or 0
/// when the game is unrated or the document has no rating node.
pub fn rating_from_document(root: &XmlElement) -> i32 {
    root.first_element()
        .and_then(XmlElement::first_element)
        .map_or(0, |rating| parse_int_or(&rating.inner_text(), 0))
}

#[cfg(test)]
#[path = "tests/user_tests.rs"]
mod tests;
