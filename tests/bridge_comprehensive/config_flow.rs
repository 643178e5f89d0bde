//! Building wrappers from configuration files

use layerdesc::{BridgeConfig, LayerError, WrapperLayer, CONFIG_FILE_NAME};
use tempfile::TempDir;

#[test]
fn default_config_file_builds_default_wrapper() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    BridgeConfig::write_default_if_missing(&path).unwrap();

    let config = BridgeConfig::from_file(&path).unwrap();
    let wrapper = WrapperLayer::from_config(&config);

    assert_eq!(
        wrapper.describe().unwrap(),
        WrapperLayer::new().describe().unwrap()
    );
}

#[test]
fn custom_config_changes_texts_and_layout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(
        &path,
        r#"
self_description = "This is SPM package ObjC code"
inner_description = "This is SPM package Swift code"

[format]
label = "ObjC: "
separator = " | Swift: "
terminator = ""
"#,
    )
    .unwrap();

    let wrapper = WrapperLayer::from_config(&BridgeConfig::from_file(&path).unwrap());
    assert_eq!(
        wrapper.describe().unwrap(),
        "ObjC: This is SPM package ObjC code | Swift: This is SPM package Swift code"
    );
}

#[test]
fn unknown_types_are_rejected() {
    let err = BridgeConfig::from_toml_str("self_description = 7").unwrap_err();
    assert!(matches!(err, LayerError::Config(_)));
}
