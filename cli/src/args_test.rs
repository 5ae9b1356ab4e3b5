use super::*;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["asset-cli"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).expect("arguments should parse")
}

#[test]
fn api_url_flag_overrides_default() {
    let cli = parse(&["--api-url", "http://assets.local/", "ping"]);
    assert_eq!(cli.api_url, "http://assets.local/");
    assert!(matches!(cli.command, Command::Ping));
}

#[test]
fn list_collects_filters() {
    let cli = parse(&["assets", "list", "--search", "laptop", "--status", "Retired", "--category-id", "4", "--json"]);
    let Command::Assets(AssetsCommand::List(list)) = cli.command else {
        panic!("expected assets list");
    };
    assert_eq!(list.search, "laptop");
    assert_eq!(list.status.as_deref(), Some("Retired"));
    assert_eq!(list.category_id, Some(4));
    assert!(list.json);
}

#[test]
fn update_takes_id_and_flattened_fields() {
    let cli = parse(&["assets", "update", "12", "--location", "HQ", "--current-value", "900"]);
    let Command::Assets(AssetsCommand::Update { id, fields }) = cli.command else {
        panic!("expected assets update");
    };
    assert_eq!(id, 12);
    assert_eq!(fields.location.as_deref(), Some("HQ"));
    assert_eq!(fields.current_value.as_deref(), Some("900"));
    assert!(fields.name.is_none());
}

#[test]
fn upload_image_requires_file_argument() {
    let result = Cli::try_parse_from(["asset-cli", "assets", "upload-image", "3"]);
    assert!(result.is_err());
}

#[test]
fn apply_to_only_touches_provided_flags() {
    let mut form = AssetForm::new();
    form.name = "Old".to_owned();
    form.location = "Lab".to_owned();
    let fields = AssetFields {
        name: Some("New".to_owned()),
        category_id: Some("3".to_owned()),
        purchase_price: Some("12.5".to_owned()),
        ..AssetFields::default()
    };

    fields.apply_to(&mut form);

    assert_eq!(form.name, "New");
    assert_eq!(form.location, "Lab");
    let payload = form.submit().expect("form should normalize");
    assert_eq!(payload.category_id, 3);
    assert_eq!(payload.purchase_price, Some(12.5));
    assert_eq!(payload.current_value, None);
}
