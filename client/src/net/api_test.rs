use futures::executor::block_on;

use super::*;

#[test]
fn image_src_uses_configured_base_and_encodes_path() {
    let api = HttpApi::new(ApiConfig::new("https://api.example.com/"));
    assert_eq!(
        api.image_src("default_user/default_app/images/a b.png"),
        "https://api.example.com/api/files/default_user%2Fdefault_app%2Fimages%2Fa%20b.png"
    );
}

#[test]
fn image_src_is_relative_when_same_origin() {
    let api = HttpApi::new(ApiConfig::same_origin());
    assert_eq!(api.image_src("x.png"), "/api/files/x.png");
}

#[test]
fn status_error_keeps_status_and_body() {
    assert_eq!(
        status_error(404, "Asset not found".to_owned()),
        ApiError::Status { status: 404, body: "Asset not found".to_owned() }
    );
}

#[test]
fn transport_and_decode_errors_carry_message() {
    assert_eq!(transport_error("offline"), ApiError::Transport("offline".to_owned()));
    assert_eq!(decode_error("expected value"), ApiError::Decode("expected value".to_owned()));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_outside_the_browser_are_unavailable() {
    let api = HttpApi::default();
    assert_eq!(block_on(api.list_assets(&AssetQuery::default())), Err(ApiError::Unavailable));
    assert_eq!(block_on(api.delete_category(3)), Err(ApiError::Unavailable));
}
