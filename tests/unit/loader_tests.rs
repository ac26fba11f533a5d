// End-to-end URL construction tests

use rstest::rstest;
use url_loader::config::CloudConfig;
use url_loader::types::ImageOptions;
use url_loader::{construct_url, LoaderError};

fn config() -> CloudConfig {
    CloudConfig::new("test-cloud-name")
}

#[test]
fn test_construct_url_with_overlay_effects() {
    let options = ImageOptions::from_json(
        r#"{
            "src": "test-public-id",
            "overlays": [{
                "publicId": "images/my-cool-image",
                "effects": [{ "width": 100, "height": 200 }, { "shear": "40:0", "opacity": "50" }]
            }]
        }"#,
    )
    .unwrap();

    assert_eq!(
        construct_url(&options, &config()).unwrap(),
        "https://res.cloudinary.com/test-cloud-name/image/upload/l_images:my-cool-image,w_100,h_200,e_shear:40:0,o_50/fl_layer_apply,fl_no_overflow/test-public-id"
    );
}

#[test]
fn test_construct_url_with_text_shorthand_and_underlay() {
    let options = ImageOptions::from_json(
        r#"{ "src": "test-public-id", "text": "Next Cloudinary", "underlay": "textures/paper" }"#,
    )
    .unwrap();

    assert_eq!(
        construct_url(&options, &config()).unwrap(),
        "https://res.cloudinary.com/test-cloud-name/image/upload/l_text:Times%20New%20Roman_200_bold:Next%20Cloudinary/fl_layer_apply,fl_no_overflow/u_textures:paper,c_fill,w_1.0,h_1.0,fl_relative/fl_layer_apply,fl_no_overflow/test-public-id"
    );
}

#[test]
fn test_construct_url_ignores_unknown_keys_everywhere() {
    let options = ImageOptions::from_json(
        r#"{
            "src": "test-public-id",
            "sizes": "100vw",
            "overlays": [{
                "publicId": "logo",
                "colby": "fayock",
                "position": { "gravity": "south", "nope": 1 },
                "effects": [{ "space": "jelly" }]
            }]
        }"#,
    )
    .unwrap();

    assert_eq!(
        construct_url(&options, &config()).unwrap(),
        "https://res.cloudinary.com/test-cloud-name/image/upload/l_logo,g_south/fl_layer_apply,fl_no_overflow/test-public-id"
    );
}

#[test]
fn test_sourceless_overlay_is_skipped_not_an_error() {
    let options = ImageOptions::from_json(
        r#"{ "src": "test-public-id", "overlays": [{ "effects": [{ "width": 10 }] }] }"#,
    )
    .unwrap();

    assert_eq!(
        construct_url(&options, &config()).unwrap(),
        "https://res.cloudinary.com/test-cloud-name/image/upload/test-public-id"
    );
}

#[rstest]
#[case("")]
#[case("   ")]
fn test_blank_src_is_rejected(#[case] src: &str) {
    let result = construct_url(&ImageOptions::new(src), &config());
    assert!(matches!(result, Err(LoaderError::MissingSource)));
}

#[test]
fn test_construct_url_is_deterministic() {
    let options = ImageOptions::from_json(
        r##"{ "src": "a", "text": { "text": "Hi", "color": "#abc" } }"##,
    )
    .unwrap();
    let first = construct_url(&options, &config()).unwrap();
    let second = construct_url(&options, &config()).unwrap();
    assert_eq!(first, second);
    assert!(first.contains(",co_rgb:abc/"));
}

#[test]
fn test_loosely_typed_input_degrades_per_field() {
    let options = ImageOptions::from_json(
        r#"{
            "src": "test-public-id",
            "overlays": [{ "publicId": "logo", "width": 1.0, "flags": ["relative", 3] }],
            "text": { "text": "ignored", "fontSize": 40.5 }
        }"#,
    )
    .unwrap();

    assert_eq!(
        construct_url(&options, &config()).unwrap(),
        "https://res.cloudinary.com/test-cloud-name/image/upload/l_logo,w_1,fl_relative/fl_layer_apply,fl_no_overflow/test-public-id"
    );
}

#[test]
fn test_text_shorthand_with_string_font_size() {
    let options = ImageOptions::from_json(
        r#"{ "src": "test-public-id", "text": { "text": "Hi", "fontSize": "40" } }"#,
    )
    .unwrap();

    assert_eq!(
        construct_url(&options, &config()).unwrap(),
        "https://res.cloudinary.com/test-cloud-name/image/upload/l_text:Times%20New%20Roman_40:Hi/fl_layer_apply,fl_no_overflow/test-public-id"
    );
}
