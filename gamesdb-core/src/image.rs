use crate::types::{BoxartSide, GameImages, Image, PlatformImages};
use crate::util::attr_int_or_zero;
use crate::xml::XmlElement;

/// Map one image element: `<banner width="760" height="140">graphical/2-1.jpg</banner>`.
///
/// The path is the element text, verbatim. Missing or non-numeric dimensions are 0.
pub fn map_image(element: &XmlElement) -> Image {
    Image {
        path: element.inner_text(),
        width: attr_int_or_zero(element, "width"),
        height: attr_int_or_zero(element, "height"),
    }
}

/// Map a game's `<Images>` block.
///
/// `fanart` and `screenshot` wrap the actual image in a sub-element
/// (`<original>`), the other tags are the image themselves.
pub fn map_game_images(element: &XmlElement) -> GameImages {
    let mut images = GameImages::default();
    collect_game_images(&mut images, element);
    images
}

/// Add the contents of an `<Images>` block to `images`. Lists are appended
/// to, single slots are overwritten.
pub(crate) fn collect_game_images(images: &mut GameImages, element: &XmlElement) {
    for child in element.elements() {
        match child.name() {
            "fanart" => images.fanart.extend(child.first_element().map(map_image)),
            "banner" => images.banners.push(map_image(child)),
            "clearlogo" => images.clear_logo = Some(map_image(child)),
            "screenshot" => images
                .screenshots
                .extend(child.first_element().map(map_image)),
            "boxart" => match BoxartSide::from_attribute(child.attribute("side")) {
                BoxartSide::Front => images.boxart_front = Some(map_image(child)),
                BoxartSide::Back => images.boxart_back = Some(map_image(child)),
            },
            _ => {}
        }
    }
}

/// Map a platform's `<Images>` block.
pub fn map_platform_images(element: &XmlElement) -> PlatformImages {
    let mut images = PlatformImages::default();
    collect_platform_images(&mut images, element);
    images
}

pub(crate) fn collect_platform_images(images: &mut PlatformImages, element: &XmlElement) {
    for child in element.elements() {
        match child.name() {
            "fanart" => images.fanart.extend(child.first_element().map(map_image)),
            "banner" => images.banners.push(map_image(child)),
            "boxart" => images.boxart = Some(map_image(child)),
            "consoleart" => images.console_art = Some(child.inner_text()),
            "controllerart" => images.controller_art = Some(child.inner_text()),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "tests/image_tests.rs"]
mod tests;
