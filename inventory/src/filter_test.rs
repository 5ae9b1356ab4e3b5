use super::*;
use crate::model::AssetStatus;
use crate::testing::asset;

fn laptops() -> Vec<Asset> {
    vec![
        asset(1, "Laptop A", Some("SN1"), AssetStatus::Active),
        asset(2, "Laptop B", None, AssetStatus::Retired),
    ]
}

fn inventory() -> Vec<Asset> {
    vec![
        asset(1, "Laptop A", Some("SN1"), AssetStatus::Active),
        asset(2, "Laptop B", None, AssetStatus::Retired),
        asset(3, "Forklift", Some("FL-ABC-01"), AssetStatus::Maintenance),
        asset(4, "Monitor abc", Some("MN-7"), AssetStatus::Active),
        asset(5, "Drill", Some("dr-abc"), AssetStatus::Other("On Loan".to_owned())),
    ]
}

fn ids(assets: &[Asset]) -> Vec<i64> {
    assets.iter().map(|a| a.id).collect()
}

#[test]
fn empty_filter_returns_input_unchanged() {
    let all = inventory();
    assert_eq!(filter_assets(&all, "", ""), all);
    assert!(AssetFilter::default().is_empty());
}

#[test]
fn search_matches_name_case_insensitively() {
    assert_eq!(ids(&filter_assets(&laptops(), "laptop", "")), vec![1, 2]);
    assert_eq!(ids(&filter_assets(&laptops(), "LAPTOP b", "")), vec![2]);
}

#[test]
fn search_matches_serial_number() {
    assert_eq!(ids(&filter_assets(&inventory(), "sn1", "")), vec![1]);
    assert_eq!(ids(&filter_assets(&inventory(), "fl-abc", "")), vec![3]);
}

#[test]
fn missing_serial_only_excludes_serial_branch() {
    // Laptop B has no serial but still matches on name.
    assert_eq!(ids(&filter_assets(&laptops(), "b", "")), vec![2]);
    assert!(filter_assets(&laptops(), "SN", "Retired").is_empty());
}

#[test]
fn status_filter_is_exact_and_case_sensitive() {
    assert_eq!(ids(&filter_assets(&laptops(), "laptop", "Retired")), vec![2]);
    assert!(filter_assets(&laptops(), "laptop", "retired").is_empty());
    assert_eq!(ids(&filter_assets(&inventory(), "", "On Loan")), vec![5]);
}

#[test]
fn search_case_does_not_change_result() {
    let all = inventory();
    for status in ["", "Active", "Maintenance"] {
        assert_eq!(filter_assets(&all, "ABC", status), filter_assets(&all, "abc", status));
    }
}

#[test]
fn filtering_narrows_and_preserves_order() {
    let all = inventory();
    for (search, status) in [("abc", ""), ("abc", "Active"), ("l", "Retired"), ("zzz", "")] {
        let narrow = filter_assets(&all, search, status);
        let status_only = filter_assets(&all, "", status);
        assert!(narrow.iter().all(|a| status_only.contains(a)));
        assert!(status_only.iter().all(|a| all.contains(a)));

        let positions: Vec<usize> = narrow
            .iter()
            .map(|a| all.iter().position(|b| b.id == a.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn applying_twice_is_idempotent() {
    let filter = AssetFilter::new("abc", "Active");
    let once = filter.apply(&inventory());
    assert_eq!(filter.apply(&once), once);
}

#[test]
fn matches_agrees_with_apply() {
    let filter = AssetFilter::new("a", "Active");
    let all = inventory();
    let expected: Vec<i64> = all.iter().filter(|a| filter.matches(a)).map(|a| a.id).collect();
    assert_eq!(ids(&filter.apply(&all)), expected);
}
