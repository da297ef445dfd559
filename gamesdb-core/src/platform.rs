use crate::image::collect_platform_images;
use crate::types::{Platform, PlatformSearchResult};
use crate::util::{parse_float_or, parse_int_or};
use crate::xml::XmlElement;

/// Map the field list of a single `<Platform>` element.
///
/// Unlike games, platform fields are mostly lowercase on the wire. Numeric
/// fields that fail to parse keep their previous value.
pub fn map_platform(element: &XmlElement) -> Platform {
    let mut platform = Platform::default();

    for child in element.elements() {
        match child.name() {
            "id" => platform.id = parse_int_or(&child.inner_text(), platform.id),
            "Platform" => platform.name = child.inner_text(),
            "overview" => platform.overview = child.inner_text(),
            "developer" => platform.developer = child.inner_text(),
            "manufacturer" => platform.manufacturer = child.inner_text(),
            "cpu" => platform.cpu = child.inner_text(),
            "memory" => platform.memory = child.inner_text(),
            "graphics" => platform.graphics = child.inner_text(),
            "sound" => platform.sound = child.inner_text(),
            "display" => platform.display = child.inner_text(),
            "media" => platform.media = child.inner_text(),
            "maxcontrollers" => {
                platform.max_controllers =
                    parse_int_or(&child.inner_text(), platform.max_controllers)
            }
            "Rating" => platform.rating = parse_float_or(&child.inner_text(), platform.rating),
            "Images" => collect_platform_images(&mut platform.images, child),
            _ => {}
        }
    }

    platform
}

/// Map one `<Platform>` entry of the platform list.
pub fn map_platform_search_result(element: &XmlElement) -> PlatformSearchResult {
    let mut result = PlatformSearchResult::default();

    for child in element.elements() {
        match child.name() {
            "id" => result.id = parse_int_or(&child.inner_text(), result.id),
            "name" => result.name = child.inner_text(),
            "alias" => result.alias = child.inner_text(),
            _ => {}
        }
    }

    result
}

/// Platform list response: `<Data><basePlatformUrl/><Platforms>...</Platforms></Data>`.
///
/// An absent `<Platforms>` block yields an empty list.
pub fn platform_list_from_document(root: &XmlElement) -> Vec<PlatformSearchResult> {
    root.elements()
        .nth(1)
        .map(|platforms| {
            platforms
                .elements()
                .map(map_platform_search_result)
                .collect()
        })
        .unwrap_or_default()
}

/// Single-platform response. The platform is the root's second child.
pub fn platform_from_document(root: &XmlElement) -> Option<Platform> {
    root.elements().nth(1).map(map_platform)
}

#[cfg(test)]
#[path = "tests/platform_tests.rs"]
mod tests;
