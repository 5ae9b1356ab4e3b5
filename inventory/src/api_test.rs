use super::*;

#[test]
fn empty_base_url_is_same_origin() {
    let config = ApiConfig::from_value(Some(""));
    assert!(config.is_same_origin());
    assert_eq!(config.url(ASSETS_PATH), "/api/assets");
    assert_eq!(ApiConfig::from_value(None), ApiConfig::same_origin());
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let config = ApiConfig::new("http://localhost:8000/ ");
    assert_eq!(config.base_url(), "http://localhost:8000");
    assert_eq!(config.url(&asset_path(4)), "http://localhost:8000/api/assets/4");
}

#[test]
fn resource_paths() {
    assert_eq!(asset_path(12), "/api/assets/12");
    assert_eq!(asset_history_path(12), "/api/assets/12/history");
    assert_eq!(category_path(3), "/api/categories/3");
    assert_eq!(DASHBOARD_SUMMARY_PATH, "/api/dashboard/summary");
    assert_eq!(FILE_UPLOAD_PATH, "/api/files/upload");
}

#[test]
fn assets_url_includes_only_set_filters() {
    let config = ApiConfig::same_origin();
    assert_eq!(config.assets_url(&AssetQuery::default()), "/api/assets");

    let query = AssetQuery { status: Some("Active".to_owned()), category_id: Some(2) };
    assert_eq!(config.assets_url(&query), "/api/assets?status=Active&category_id=2");

    let blank = AssetQuery { status: Some(String::new()), category_id: None };
    assert!(blank.pairs().is_empty());
}

#[test]
fn file_url_encodes_whole_blob_path() {
    let config = ApiConfig::new("https://api.example.test");
    assert_eq!(
        config.file_url("default_user/default_app/images/a b.png"),
        "https://api.example.test/api/files/default_user%2Fdefault_app%2Fimages%2Fa%20b.png"
    );
}

#[test]
fn encode_uri_component_keeps_unreserved_set() {
    assert_eq!(encode_uri_component("AZaz09-_.!~*'()"), "AZaz09-_.!~*'()");
    assert_eq!(encode_uri_component("é&="), "%C3%A9%26%3D");
}

#[test]
fn upload_file_image_check() {
    let mut file = UploadFile { file_name: "a.png".to_owned(), content_type: "image/png".to_owned(), bytes: vec![] };
    assert!(file.is_image());
    file.content_type = "application/pdf".to_owned();
    assert!(!file.is_image());
}

#[test]
fn api_error_messages() {
    let err = ApiError::Status { status: 404, body: "Asset not found".to_owned() };
    assert_eq!(err.to_string(), "server responded with 404: Asset not found");
    assert_eq!(ApiError::Transport("dns".to_owned()).to_string(), "request failed: dns");
}
