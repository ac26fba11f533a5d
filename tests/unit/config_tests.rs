// Configuration unit tests

use std::io::Write;

use rstest::rstest;
use url_loader::config::CloudConfig;
use url_loader::LoaderError;

#[test]
fn test_can_deserialize_full_yaml_config() {
    let yaml = r#"
cloud_name: "demo"
secure: false
private_cdn: true
asset_type: "video"
delivery_type: "fetch"
"#;
    let config = CloudConfig::from_yaml_with_env(yaml).expect("Failed to load config");
    assert_eq!(config.cloud_name, "demo");
    assert!(!config.secure);
    assert!(config.private_cdn);
    assert_eq!(config.base_url(), "http://demo-res.cloudinary.com/video/fetch");
}

#[test]
fn test_config_fails_with_empty_file() {
    let result = CloudConfig::from_yaml_with_env("");
    assert!(matches!(result, Err(LoaderError::Config(_))));
}

#[test]
fn test_config_unknown_keys_are_ignored() {
    let yaml = r#"
cloud_name: "demo"
api_secret: "not used for delivery URLs"
"#;
    let config = CloudConfig::from_yaml_with_env(yaml).unwrap();
    assert_eq!(config, CloudConfig::new("demo"));
}

#[rstest]
#[case("")]
#[case("has space")]
#[case("slash/name")]
#[case("dot.name")]
fn test_invalid_cloud_names_are_rejected(#[case] cloud_name: &str) {
    let config = CloudConfig::new(cloud_name);
    assert!(config.validate().is_err(), "accepted '{}'", cloud_name);
}

#[rstest]
#[case("demo")]
#[case("my-cloud")]
#[case("cloud_42")]
fn test_valid_cloud_names_are_accepted(#[case] cloud_name: &str) {
    assert!(CloudConfig::new(cloud_name).validate().is_ok());
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "cloud_name: from-file").unwrap();

    let config = CloudConfig::from_file(file.path()).unwrap();
    assert_eq!(config.cloud_name, "from-file");
}

#[test]
fn test_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = CloudConfig::from_file(dir.path().join("missing.yaml"));
    assert!(matches!(result, Err(LoaderError::Io(_))));
}
