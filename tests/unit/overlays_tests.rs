// Overlay plugin tests against rendered delivery URLs

use serde_json::json;
use url_loader::asset::{ImageAsset, Transformable};
use url_loader::config::CloudConfig;
use url_loader::plugins::overlays::{self, Effect, Layer, OverlayOptions, TextOptions};

const TEST_PUBLIC_ID: &str = "test-public-id";

fn image() -> ImageAsset {
    ImageAsset::new(TEST_PUBLIC_ID, &CloudConfig::new("test-cloud-name"))
}

fn apply_json(value: serde_json::Value) -> String {
    let options: OverlayOptions = serde_json::from_value(value).expect("valid overlay options");
    let mut image = image();
    overlays::apply(&mut image, &options);
    image.to_url()
}

// =============================================================================
// Image overlays
// =============================================================================

#[test]
fn test_remote_image_overlay_by_url() {
    let url = apply_json(json!({
        "overlays": [{
            "url": "https://user-images.githubusercontent.com/1045274/199872380-ced2b84d-fce4-4fc9-9e76-48cb4a7fb35f.png"
        }]
    }));

    assert!(url.contains(
        "l_fetch:aHR0cHM6Ly91c2VyLWltYWdlcy5naXRodWJ1c2VyY29udGVudC5jb20vMTA0NTI3NC8xOTk4NzIzODAtY2VkMmI4NGQtZmNlNC00ZmM5LTllNzYtNDhjYjRhN2ZiMzVmLnBuZw%3D%3D"
    ));
}

#[test]
fn test_overlay_by_public_id() {
    let url = apply_json(json!({ "overlays": [{ "publicId": "images/my-cool-image" }] }));
    assert!(url.contains("l_images:my-cool-image/fl_layer_apply,fl_no_overflow"));
}

#[test]
fn test_effects_on_overlay() {
    let url = apply_json(json!({
        "overlays": [{
            "publicId": "images/my-cool-image",
            "effects": [
                { "width": 100, "height": 200 },
                { "shear": "40:0", "opacity": "50" }
            ]
        }]
    }));
    assert!(url.contains(
        "l_images:my-cool-image,w_100,h_200,e_shear:40:0,o_50/fl_layer_apply,fl_no_overflow"
    ));
}

#[test]
fn test_applied_effects_follow_commit() {
    let url = apply_json(json!({
        "overlays": [{
            "publicId": "images/my-cool-image",
            "effects": [{ "width": 100, "height": 200 }],
            "appliedEffects": [{ "screen": true }]
        }]
    }));
    assert!(url.contains(
        "l_images:my-cool-image,w_100,h_200/fl_layer_apply,fl_no_overflow,e_screen"
    ));
}

#[test]
fn test_flags_on_overlay() {
    let url = apply_json(json!({
        "overlays": [{ "publicId": "images/my-cool-image", "width": "1.0", "flags": ["relative"] }]
    }));
    assert!(url.contains("l_images:my-cool-image,w_1.0,fl_relative/fl_layer_apply,fl_no_overflow"));
}

#[test]
fn test_applied_flags_on_overlay() {
    let url = apply_json(json!({
        "overlays": [{ "publicId": "images/my-cool-image", "width": "1.0", "appliedFlags": ["sanitize"] }]
    }));
    assert!(url.contains("l_images:my-cool-image,w_1.0/fl_layer_apply,fl_no_overflow,fl_sanitize"));
}

#[test]
fn test_unknown_effect_keys_are_not_applied() {
    let url = apply_json(json!({
        "overlays": [{
            "publicId": "images/my-cool-image",
            "effects": [{ "colby": "fayock", "space": "jelly" }],
            "appliedEffects": [{ "colby": "fayock", "space": "jelly" }]
        }]
    }));
    assert!(url.contains("/l_images:my-cool-image/fl_layer_apply,fl_no_overflow/"));
}

#[test]
fn test_multiple_overlays_keep_order() {
    let mut image = image();
    let options = OverlayOptions {
        overlays: Some(vec![
            Layer::from_public_id("first"),
            Layer::default(),
            Layer::from_public_id("second").with_effect(Effect::new().with("width", 50)),
        ]),
        text: None,
    };
    overlays::apply(&mut image, &options);

    assert_eq!(
        image.transformations(),
        [
            "l_first/fl_layer_apply,fl_no_overflow",
            "l_second,w_50/fl_layer_apply,fl_no_overflow"
        ]
    );
}

#[test]
fn test_no_overlays_leaves_asset_untouched() {
    let url = apply_json(json!({ "src": TEST_PUBLIC_ID }));
    assert_eq!(
        url,
        "https://res.cloudinary.com/test-cloud-name/image/upload/test-public-id"
    );
}

// =============================================================================
// Text overlays
// =============================================================================

#[test]
fn test_text_overlay_basic_settings() {
    let url = apply_json(json!({
        "overlays": [{
            "text": { "fontFamily": "Source Sans Pro", "fontSize": 200, "text": "Next Cloudinary" }
        }]
    }));
    assert!(url.contains(
        "l_text:Source%20Sans%20Pro_200:Next%20Cloudinary/fl_layer_apply,fl_no_overflow/test-public-id"
    ));
}

#[test]
fn test_text_overlay_configured_by_overlay_object() {
    let url = apply_json(json!({
        "overlays": [{
            "text": {
                "color": "white",
                "fontFamily": "Source Sans Pro",
                "fontSize": 200,
                "fontWeight": "bold",
                "text": "Next Cloudinary"
            }
        }]
    }));
    assert!(url.contains(
        "l_text:Source%20Sans%20Pro_200_bold:Next%20Cloudinary,co_white/fl_layer_apply,fl_no_overflow/test-public-id"
    ));
}

#[test]
fn test_text_overlay_by_overlay_text_string() {
    let url = apply_json(json!({ "overlays": [{ "text": "Next Cloudinary" }] }));
    assert!(url.contains(
        "l_text:Times%20New%20Roman_200_bold:Next%20Cloudinary/fl_layer_apply,fl_no_overflow/test-public-id"
    ));
}

#[test]
fn test_text_overlay_by_top_level_string() {
    let url = apply_json(json!({ "src": TEST_PUBLIC_ID, "text": "Next Cloudinary" }));
    assert!(url.contains(
        "l_text:Times%20New%20Roman_200_bold:Next%20Cloudinary/fl_layer_apply,fl_no_overflow/test-public-id"
    ));
}

#[test]
fn test_text_overlay_by_top_level_object_with_spacing() {
    let url = apply_json(json!({
        "text": {
            "color": "white",
            "fontFamily": "Source Sans Pro",
            "fontSize": 200,
            "fontWeight": "bold",
            "text": "Next Cloudinary",
            "letterSpacing": 10,
            "lineSpacing": 20
        }
    }));
    assert!(url.contains(
        "l_text:Source%20Sans%20Pro_200_bold_letter_spacing_10_line_spacing_20:Next%20Cloudinary,co_white/fl_layer_apply,fl_no_overflow/test-public-id"
    ));
}

#[test]
fn test_text_stroke_with_all_modifiers() {
    let url = apply_json(json!({
        "text": {
            "alignment": "right",
            "antialias": "best",
            "color": "white",
            "fontFamily": "Source Sans Pro",
            "fontSize": 200,
            "fontStyle": "italic",
            "fontWeight": "bold",
            "hinting": "slight",
            "letterSpacing": 12,
            "lineSpacing": -12,
            "text": "Next Cloudinary",
            "border": "20px_solid_blue",
            "stroke": true
        }
    }));
    assert!(url.contains(
        "l_text:Source%20Sans%20Pro_200_bold_italic_right_stroke_antialias_best_hinting_slight_letter_spacing_12_line_spacing_-12:Next%20Cloudinary,co_white,bo_20px_solid_blue/fl_layer_apply,fl_no_overflow/test-public-id"
    ));
}

#[test]
fn test_text_stroke_after_weight() {
    let url = apply_json(json!({
        "text": {
            "color": "white",
            "fontFamily": "Source Sans Pro",
            "fontSize": 200,
            "fontWeight": "bold",
            "text": "Next Cloudinary",
            "border": "20px_solid_blue",
            "stroke": true
        }
    }));
    assert!(url.contains(
        "l_text:Source%20Sans%20Pro_200_bold_stroke:Next%20Cloudinary,co_white,bo_20px_solid_blue/fl_layer_apply,fl_no_overflow/test-public-id"
    ));
}

#[test]
fn test_text_with_special_characters() {
    let url = apply_json(json!({
        "text": { "color": "white", "fontFamily": "Source Sans Pro", "text": "Ne xt/Cloud.in,ary" }
    }));
    assert!(url.contains(
        "l_text:Source%20Sans%20Pro_200_bold:Ne%20xt%252FCloud%252Ein%252Cary,co_white/fl_layer_apply,fl_no_overflow/test-public-id"
    ));
}

#[test]
fn test_text_with_punctuation_stays_readable() {
    let url = apply_json(json!({ "text": "Sale! (50%) *Don't*" }));
    assert!(url.contains(
        "l_text:Times%20New%20Roman_200_bold:Sale!%20(50%25)%20*Don't*/fl_layer_apply,fl_no_overflow/test-public-id"
    ));
}

#[test]
fn test_text_with_loosely_typed_sizes() {
    let url = apply_json(json!({
        "text": { "text": "Hi", "fontSize": "40", "letterSpacing": 2.0 },
        "overlays": null
    }));
    assert!(url.contains(
        "l_text:Times%20New%20Roman_40_letter_spacing_2:Hi/fl_layer_apply,fl_no_overflow/test-public-id"
    ));
}

#[test]
fn test_hex_color_becomes_rgb() {
    let url = apply_json(json!({
        "text": { "color": "#ff00ff", "fontFamily": "Source Sans Pro", "text": "Next Cloudinary" }
    }));
    assert!(url.contains(
        "l_text:Source%20Sans%20Pro_200_bold:Next%20Cloudinary,co_rgb:ff00ff/fl_layer_apply,fl_no_overflow/test-public-id"
    ));
}

#[test]
fn test_text_overlay_built_in_rust() {
    let mut image = image();
    let options = OverlayOptions {
        overlays: Some(vec![Layer::from_text(TextOptions {
            text: Some("Sale".to_string()),
            font_family: Some("Arial".to_string()),
            font_size: Some(80.into()),
            color: Some("red".to_string()),
            ..Default::default()
        })
        .with_applied_flag("no_efqn")]),
        text: None,
    };
    overlays::apply(&mut image, &options);

    assert_eq!(
        image.transformations(),
        ["l_text:Arial_80:Sale,co_red/fl_layer_apply,fl_no_overflow,fl_no_efqn"]
    );
}
