use super::*;

#[test]
fn image_extensions_map_to_image_types() {
    assert_eq!(content_type_for("photo.PNG"), "image/png");
    assert_eq!(content_type_for("scan.jpeg"), "image/jpeg");
    assert_eq!(content_type_for("a.b.webp"), "image/webp");
}

#[test]
fn less_common_image_formats_are_images() {
    for name in ["scan.tiff", "scan.tif", "photo.avif", "icon.ico"] {
        let file = UploadFile { file_name: name.to_owned(), content_type: content_type_for(name), bytes: vec![0] };
        assert!(file.is_image(), "{name} guessed as {}", file.content_type);
    }
}

#[test]
fn unknown_or_missing_extension_is_octet_stream() {
    assert_eq!(content_type_for("README"), "application/octet-stream");
    assert_eq!(content_type_for("blob.zzzunknown"), "application/octet-stream");
}

#[test]
fn text_file_is_not_accepted_as_image() {
    let file = UploadFile { file_name: "notes.txt".to_owned(), content_type: content_type_for("notes.txt"), bytes: vec![0] };
    assert!(!file.is_image());
}

#[test]
fn ping_targets_api_root_not_host_healthz() {
    let config = ApiConfig::new("http://127.0.0.1:8000/");
    assert_eq!(config.url(PING_PATH), "http://127.0.0.1:8000/");
    assert!(!config.url(PING_PATH).ends_with("/healthz"));
}
