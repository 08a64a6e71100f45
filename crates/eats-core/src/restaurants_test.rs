use std::path::Path;

use super::*;

fn make_restaurant(id: &str, cuisine_type: &str) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        name: format!("餐廳 {id}"),
        address: "台北市大安區".to_string(),
        latitude: Some(25.033),
        longitude: Some(121.5654),
        rating: 4.2,
        price_level: PriceLevel::new(2).unwrap(),
        cuisine_type: cuisine_type.to_string(),
        distance: Some(800.0),
        image_url: None,
    }
}

#[test]
fn price_level_accepts_one_through_four() {
    for level in 1..=4 {
        assert_eq!(PriceLevel::new(level).map(PriceLevel::get), Some(level));
    }
}

#[test]
fn price_level_rejects_out_of_range() {
    assert!(PriceLevel::new(0).is_none());
    assert!(PriceLevel::new(5).is_none());
}

#[test]
fn price_level_display_repeats_dollar_sign() {
    assert_eq!(PriceLevel::CHEAPEST.to_string(), "$");
    assert_eq!(PriceLevel::PRICIEST.to_string(), "$$$$");
}

#[test]
fn price_level_deserialization_rejects_invalid_value() {
    let err = serde_json::from_str::<PriceLevel>("7").unwrap_err();
    assert!(err.to_string().contains("invalid price level 7"));
}

#[test]
fn coordinates_present_when_both_valid() {
    let r = make_restaurant("1", "日式料理");
    assert_eq!(r.coordinates(), Some((25.033, 121.5654)));
}

#[test]
fn coordinates_none_when_missing_or_invalid() {
    let mut missing = make_restaurant("1", "日式料理");
    missing.longitude = None;
    assert!(missing.coordinates().is_none());

    let mut out_of_range = make_restaurant("2", "日式料理");
    out_of_range.latitude = Some(123.0);
    assert!(out_of_range.coordinates().is_none());

    let mut nan = make_restaurant("3", "日式料理");
    nan.longitude = Some(f64::NAN);
    assert!(nan.coordinates().is_none());
}

#[test]
fn catalog_rejects_duplicate_ids() {
    let err = Catalog::new(vec![
        make_restaurant("1", "日式料理"),
        make_restaurant("1", "台式料理"),
    ])
    .unwrap_err();
    assert!(err.to_string().contains("duplicate restaurant id"));
}

#[test]
fn catalog_rejects_empty_id() {
    let err = Catalog::new(vec![make_restaurant(" ", "日式料理")]).unwrap_err();
    assert!(err.to_string().contains("id must be non-empty"));
}

#[test]
fn catalog_rejects_blank_name() {
    let mut r = make_restaurant("1", "日式料理");
    r.name = "   ".to_string();
    let err = Catalog::new(vec![r]).unwrap_err();
    assert!(err.to_string().contains("non-empty name"));
}

#[test]
fn catalog_rejects_rating_out_of_range() {
    let mut r = make_restaurant("1", "日式料理");
    r.rating = 5.5;
    let err = Catalog::new(vec![r]).unwrap_err();
    assert!(err.to_string().contains("invalid rating"));
}

#[test]
fn catalog_rejects_negative_distance() {
    let mut r = make_restaurant("1", "日式料理");
    r.distance = Some(-10.0);
    let err = Catalog::new(vec![r]).unwrap_err();
    assert!(err.to_string().contains("invalid distance"));
}

#[test]
fn catalog_accepts_missing_distance_and_coordinates() {
    let mut r = make_restaurant("1", "日式料理");
    r.distance = None;
    r.latitude = None;
    r.longitude = None;
    let catalog = Catalog::new(vec![r]).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.mappable().count(), 0);
}

#[test]
fn catalog_lookup_by_id() {
    let catalog = Catalog::new(vec![
        make_restaurant("1", "日式料理"),
        make_restaurant("2", "台式料理"),
    ])
    .unwrap();
    assert_eq!(catalog.get("2").map(|r| r.cuisine_type.as_str()), Some("台式料理"));
    assert!(catalog.contains("1"));
    assert!(!catalog.contains("3"));
}

#[test]
fn cuisine_types_are_distinct_in_catalog_order() {
    let catalog = Catalog::new(vec![
        make_restaurant("1", "日式料理"),
        make_restaurant("2", "台式料理"),
        make_restaurant("3", "日式料理"),
        make_restaurant("4", "小吃"),
    ])
    .unwrap();
    assert_eq!(catalog.cuisine_types(), vec!["日式料理", "台式料理", "小吃"]);
}

#[test]
fn restaurant_yaml_optional_fields_default_to_none() {
    let yaml = r"
restaurants:
  - id: '9'
    name: 巷口麵店
    address: 台北市中正區
    rating: 3.9
    price_level: 1
    cuisine_type: 小吃
";
    let file: RestaurantsFile = serde_yaml::from_str(yaml).unwrap();
    let r = &file.restaurants[0];
    assert!(r.distance.is_none());
    assert!(r.latitude.is_none());
    assert!(r.image_url.is_none());
    assert_eq!(r.price_level, PriceLevel::CHEAPEST);
}

#[test]
fn load_catalog_from_real_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("restaurants.yaml");
    assert!(
        path.exists(),
        "restaurants.yaml missing at {path:?}; required for this test"
    );
    let result = load_catalog(&path);
    assert!(result.is_ok(), "failed to load restaurants.yaml: {result:?}");
    let catalog = result.unwrap();
    assert!(!catalog.is_empty());
}

#[test]
fn load_catalog_reports_missing_file() {
    let err = load_catalog(Path::new("/definitely/not/here.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::CatalogFileIo { .. }));
}

#[test]
fn price_level_display_honours_width() {
    let level = PriceLevel::new(2).unwrap();
    assert_eq!(level.to_string(), "$$");
    assert_eq!(format!("[{level:<4}]"), "[$$  ]");
    assert_eq!(format!("[{level:>4}]"), "[  $$]");
}
