use super::*;
use crate::xml::parse_document;

#[test]
fn test_favorites_from_document() {
    let root = parse_document(
        "<Favorites><Game>2</Game><Game>15246</Game><Game>oops</Game></Favorites>",
    )
    .unwrap();
    assert_eq!(favorites_from_document(&root), vec![2, 15246, 0]);
}

#[test]
fn test_favorites_empty() {
    let root = parse_document("<Favorites/>").unwrap();
    assert!(favorites_from_document(&root).is_empty());
}

#[test]
fn test_rating_from_document() {
    let root = parse_document("<Data><Game><Rating>7</Rating></Game></Data>").unwrap();
    assert_eq!(rating_from_document(&root), 7);
}

#[test]
fn test_rating_missing_or_invalid_is_zero() {
    for xml in [
        "<Data/>",
        "<Data><Game/></Data>",
        "<Data><Game><Rating></Rating></Game></Data>",
        "<Data><Game><Rating>ten</Rating></Game></Data>",
    ] {
        let root = parse_document(xml).unwrap();
        assert_eq!(rating_from_document(&root), 0, "{xml}");
    }
}
