use super::*;
use crate::xml::parse_document;

fn element(xml: &str) -> XmlElement {
    parse_document(xml).unwrap()
}

#[test]
fn test_map_image() {
    let img = map_image(&element(
        r#"<banner width="760" height="140">graphical/2-g2.jpg</banner>"#,
    ));
    assert_eq!(img.path, "graphical/2-g2.jpg");
    assert_eq!(img.width, 760);
    assert_eq!(img.height, 140);
}

#[test]
fn test_map_image_missing_dimensions_are_zero() {
    let img = map_image(&element("<clearlogo>clearlogo/2.png</clearlogo>"));
    assert_eq!(img.path, "clearlogo/2.png");
    assert_eq!(img.width, 0);
    assert_eq!(img.height, 0);

    let img = map_image(&element(r#"<banner height="50">b.jpg</banner>"#));
    assert_eq!(img.width, 0);
    assert_eq!(img.height, 50);
}

#[test]
fn test_map_image_non_numeric_dimensions_are_zero() {
    let img = map_image(&element(r#"<banner width="abc" height="">b.jpg</banner>"#));
    assert_eq!(img.width, 0);
    assert_eq!(img.height, 0);
}

#[test]
fn test_map_image_empty_path() {
    let img = map_image(&element(r#"<banner width="1" height="2"/>"#));
    assert_eq!(img.path, "");
    assert_eq!(img.width, 1);
}

const GAME_IMAGES: &str = r#"<Images>
    <fanart>
        <original width="1920" height="1080">fanart/original/2-1.jpg</original>
        <thumb>fanart/thumb/2-1.jpg</thumb>
    </fanart>
    <fanart>
        <original width="1280" height="720">fanart/original/2-2.jpg</original>
    </fanart>
    <boxart side="back" width="1525" height="2162">boxart/original/back/2-1.jpg</boxart>
    <boxart side="front" width="1525" height="2160">boxart/original/front/2-1.jpg</boxart>
    <banner width="760" height="140">graphical/2-g2.jpg</banner>
    <banner width="760" height="140">graphical/2-g3.jpg</banner>
    <screenshot>
        <original width="1920" height="1080">screenshots/2-1.jpg</original>
        <thumb>screenshots/thumb/2-1.jpg</thumb>
    </screenshot>
    <clearlogo width="400" height="95">clearlogo/2.png</clearlogo>
</Images>"#;

#[test]
fn test_map_game_images() {
    let images = map_game_images(&element(GAME_IMAGES));

    assert_eq!(images.fanart.len(), 2);
    assert_eq!(images.fanart[0].path, "fanart/original/2-1.jpg");
    assert_eq!(images.fanart[0].width, 1920);
    assert_eq!(images.fanart[1].path, "fanart/original/2-2.jpg");

    let front = images.boxart_front.as_ref().unwrap();
    assert_eq!(front.path, "boxart/original/front/2-1.jpg");
    assert_eq!(front.height, 2160);
    let back = images.boxart_back.as_ref().unwrap();
    assert_eq!(back.path, "boxart/original/back/2-1.jpg");

    let banners: Vec<&str> = images.banners.iter().map(|b| b.path.as_str()).collect();
    assert_eq!(banners, vec!["graphical/2-g2.jpg", "graphical/2-g3.jpg"]);

    assert_eq!(images.screenshots.len(), 1);
    assert_eq!(images.screenshots[0].path, "screenshots/2-1.jpg");

    assert_eq!(images.clear_logo.unwrap().width, 400);
}

#[test]
fn test_boxart_front_only_sets_front() {
    let images = map_game_images(&element(
        r#"<Images><boxart side="front" width="1" height="2">f.jpg</boxart></Images>"#,
    ));
    assert!(images.boxart_front.is_some());
    assert!(images.boxart_back.is_none());
}

#[test]
fn test_boxart_other_or_missing_side_is_back() {
    for xml in [
        r#"<Images><boxart side="Front">b.jpg</boxart></Images>"#,
        r#"<Images><boxart side="top">b.jpg</boxart></Images>"#,
        r#"<Images><boxart>b.jpg</boxart></Images>"#,
    ] {
        let images = map_game_images(&element(xml));
        assert!(images.boxart_front.is_none(), "{xml}");
        assert_eq!(images.boxart_back.unwrap().path, "b.jpg");
    }
}

#[test]
fn test_singleton_last_write_wins() {
    let images = map_game_images(&element(
        r#"<Images>
            <clearlogo>first.png</clearlogo>
            <clearlogo>second.png</clearlogo>
        </Images>"#,
    ));
    assert_eq!(images.clear_logo.unwrap().path, "second.png");
}

#[test]
fn test_wrapper_without_image_is_skipped() {
    let images = map_game_images(&element(
        "<Images><fanart/><screenshot>loose text</screenshot></Images>",
    ));
    assert!(images.fanart.is_empty());
    assert!(images.screenshots.is_empty());
}

#[test]
fn test_unknown_game_image_tags_are_ignored() {
    let with_extra = map_game_images(&element(
        r#"<Images>
            <hologram width="5" height="5">h.jpg</hologram>
            <banner width="760" height="140">graphical/2-g2.jpg</banner>
            <Banner width="1" height="1">wrong-case.jpg</Banner>
        </Images>"#,
    ));
    let plain = map_game_images(&element(
        r#"<Images><banner width="760" height="140">graphical/2-g2.jpg</banner></Images>"#,
    ));
    assert_eq!(with_extra, plain);
}

const PLATFORM_IMAGES: &str = r#"<Images>
    <fanart>
        <original width="1920" height="1080">platform/fanart/15-1.jpg</original>
        <thumb>platform/fanart/thumb/15-1.jpg</thumb>
    </fanart>
    <boxart side="back" width="500" height="750">platform/boxart/15-2.jpg</boxart>
    <banner width="760" height="140">platform/banners/15-1.jpg</banner>
    <consoleart>platform/consoleart/15.png</consoleart>
    <controllerart>platform/controllerart/15.png</controllerart>
    <clearlogo width="400" height="95">ignored-for-platforms.png</clearlogo>
</Images>"#;

#[test]
fn test_map_platform_images() {
    let images = map_platform_images(&element(PLATFORM_IMAGES));

    assert_eq!(images.fanart.len(), 1);
    assert_eq!(images.fanart[0].path, "platform/fanart/15-1.jpg");
    assert_eq!(images.fanart[0].height, 1080);

    // Platform boxart has a single slot regardless of side.
    let boxart = images.boxart.unwrap();
    assert_eq!(boxart.path, "platform/boxart/15-2.jpg");
    assert_eq!(boxart.width, 500);

    assert_eq!(images.banners.len(), 1);
    assert_eq!(
        images.console_art.as_deref(),
        Some("platform/consoleart/15.png")
    );
    assert_eq!(
        images.controller_art.as_deref(),
        Some("platform/controllerart/15.png")
    );
}

#[test]
fn test_empty_images_block() {
    assert_eq!(
        map_game_images(&element("<Images/>")),
        GameImages::default()
    );
    assert_eq!(
        map_platform_images(&element("<Images/>")),
        PlatformImages::default()
    );
}

#[test]
fn test_image_url() {
    let img = Image {
        path: "boxart/original/front/2-1.jpg".to_string(),
        ..Image::default()
    };
    assert_eq!(
        img.url("http://thegamesdb.net/banners/"),
        "http://thegamesdb.net/banners/boxart/original/front/2-1.jpg"
    );
    assert_eq!(
        img.url("http://thegamesdb.net/banners"),
        "http://thegamesdb.net/banners/boxart/original/front/2-1.jpg"
    );
}
