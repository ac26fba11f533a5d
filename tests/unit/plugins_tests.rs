// Generative and delivery plugins through the full URL pipeline

use rstest::rstest;
use url_loader::config::CloudConfig;
use url_loader::types::ImageOptions;
use url_loader::{construct_url, LoaderError};

const BASE: &str = "https://res.cloudinary.com/test-cloud-name/image/upload";

fn url_for(json: &str) -> String {
    let options = ImageOptions::from_json(json).expect("valid image options");
    construct_url(&options, &CloudConfig::new("test-cloud-name")).expect("url")
}

#[rstest]
#[case(r#"{ "src": "sample", "enhance": true }"#, "e_enhance")]
#[case(r#"{ "src": "sample", "restore": true }"#, "e_gen_restore")]
#[case(r#"{ "src": "sample", "extract": "jellyfish" }"#, "e_extract:prompt_jellyfish")]
#[case(
    r#"{ "src": "sample", "extract": { "prompt": ["jellyfish", "octopus"], "mode": "mask" } }"#,
    "e_extract:prompt_(jellyfish;octopus);mode_mask"
)]
#[case(r#"{ "src": "sample", "recolor": ["duck", "blue"] }"#, "e_gen_recolor:prompt_duck;to-color_blue")]
#[case(r#"{ "src": "sample", "remove": "apple" }"#, "e_gen_remove:prompt_apple")]
#[case(
    r#"{ "src": "sample", "remove": { "region": [300, 200, 1900, 3500] } }"#,
    "e_gen_remove:region_(x_300;y_200;w_1900;h_3500)"
)]
#[case(r#"{ "src": "sample", "replace": ["apple", "banana"] }"#, "e_gen_replace:from_apple;to_banana")]
#[case(r#"{ "src": "sample", "replaceBackground": true }"#, "e_gen_background_replace")]
#[case(
    r#"{ "src": "sample", "replaceBackground": { "prompt": "aquarium", "seed": 7 } }"#,
    "e_gen_background_replace:prompt_aquarium;seed_7"
)]
#[case(r#"{ "src": "sample", "defaultImage": "images/fallback.png" }"#, "d_images:fallback.png")]
#[case(
    r#"{ "src": "sample", "fillBackground": true, "width": 1600, "height": "900" }"#,
    "b_gen_fill,ar_1600:900,c_pad"
)]
fn test_single_plugin_component(#[case] json: &str, #[case] component: &str) {
    assert_eq!(url_for(json), format!("{}/{}/sample", BASE, component));
}

#[test]
fn test_zoompan_forces_animated_format() {
    assert_eq!(
        url_for(r#"{ "src": "sample", "zoompan": "loop" }"#),
        format!("{}/e_zoompan/e_loop/f_auto:animated/sample", BASE)
    );
}

#[test]
fn test_fill_background_with_aspect_ratio_and_prompt() {
    assert_eq!(
        url_for(
            r#"{ "src": "sample", "aspectRatio": "16:9", "fillBackground": { "prompt": "meadow", "gravity": "east" } }"#
        ),
        format!("{}/b_gen_fill:prompt_meadow,ar_16:9,c_pad,g_east/sample", BASE)
    );
}

#[test]
fn test_fill_background_without_dimensions_is_skipped() {
    assert_eq!(
        url_for(r#"{ "src": "sample", "fillBackground": true }"#),
        format!("{}/sample", BASE)
    );
}

#[test]
fn test_full_plugin_order() {
    let url = url_for(
        r#"{
            "src": "sample",
            "zoompan": true,
            "underlay": "paper",
            "overlays": [{ "publicId": "logo" }],
            "defaultImage": "fallback.png",
            "restore": true,
            "remove": "apple",
            "enhance": true
        }"#,
    );
    assert_eq!(
        url,
        format!(
            "{}/e_enhance/e_gen_remove:prompt_apple/e_gen_restore/d_fallback.png/l_logo/fl_layer_apply,fl_no_overflow/u_paper,c_fill,w_1.0,h_1.0,fl_relative/fl_layer_apply,fl_no_overflow/e_zoompan/f_auto:animated/sample",
            BASE
        )
    );
}

#[test]
fn test_mistyped_plugin_values_are_ignored() {
    assert_eq!(
        url_for(
            r#"{ "src": "sample", "enhance": "yes", "recolor": 5, "replace": "apple", "zoompan": 0 }"#
        ),
        format!("{}/sample", BASE)
    );
}

#[test]
fn test_remove_prompt_with_region_is_rejected() {
    let options = ImageOptions::from_json(
        r#"{ "src": "sample", "remove": { "prompt": ["apple"], "region": [[1, 2, 3, 4]] } }"#,
    )
    .unwrap();
    let result = construct_url(&options, &CloudConfig::new("test-cloud-name"));
    assert!(matches!(
        result,
        Err(LoaderError::InvalidPluginOptions { plugin: "remove", .. })
    ));
}
