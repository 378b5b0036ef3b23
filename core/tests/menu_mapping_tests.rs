// tests/menu_mapping_tests.rs
mod common;

use chrono::NaiveDate;
use common::*;
use menuboard::menu::mapping::{decode_menu_data, is_available, map_menu, parse_valid_until};
use menuboard::MenuError;
use rust_decimal::Decimal;
use serde_json::json;

#[test]
fn test_maps_flat_list_and_grouping() {
  setup_tracing();
  let snapshot = map_menu(decode_menu_data(sample_menu_body()).unwrap());

  let names: Vec<&str> = snapshot.menu.iter().map(|i| i.name.as_str()).collect();
  assert_eq!(names, vec!["Lemonade", "Iced Tea", "Burger"]);

  let burger = snapshot.find_item(21).unwrap();
  assert_eq!(burger.price, Decimal::new(125, 1));
  assert_eq!(burger.category, "Food");
  assert_eq!(burger.description, "Burger description");
  assert_eq!(burger.image, None);

  assert_eq!(snapshot.categories.len(), 2);
  assert_eq!(snapshot.categories[0].name, "Drinks");
  assert_eq!(snapshot.categories[0].description, "Drinks section");
  assert_eq!(snapshot.categories[0].items.len(), 2);
}

#[test]
fn test_hidden_categories_contribute_nothing() {
  setup_tracing();
  let snapshot = map_menu(decode_menu_data(sample_menu_body()).unwrap());

  assert!(snapshot.find_item(31).is_none());
  assert!(snapshot.categories.iter().all(|c| c.name != "Staff Only"));
  assert!(snapshot.menu.iter().all(|i| i.category != "Staff Only"));
}

#[test]
fn test_availability_precedence() {
  assert!(is_available(3.0, None));
  assert!(is_available(3.0, Some(false)));
  assert!(is_available(0.0, None));
  assert!(is_available(0.0, Some(true)));
  assert!(!is_available(0.0, Some(false)));
  assert!(!is_available(-1.0, Some(false)));
}

#[test]
fn test_product_fields_are_defaulted_and_normalized() {
  let body = envelope(json!({
    "categories": [{
      "id": 5,
      "name": "Sides",
      "section": null,
      "hide_on_menu": 0,
      "products": [
        { "id": 1, "name": "Fries", "selling_price": 4.5, "description": null, "quantity": 0, "available": false,
          "image": { "type": "Buffer", "data": [72, 101, 108, 108, 111] } },
        { "id": 2, "name": "Slaw", "selling_price": null, "quantity": null, "image": "SGVsbG8=" }
      ]
    }]
  }));

  let snapshot = map_menu(decode_menu_data(body).unwrap());
  let fries = snapshot.find_item(1).unwrap();
  assert_eq!(fries.description, "");
  assert!(!fries.available);
  assert_eq!(fries.price, Decimal::new(45, 1));
  assert_eq!(fries.image.as_ref().unwrap().as_str(), "data:image/jpeg;base64,SGVsbG8=");

  let slaw = snapshot.find_item(2).unwrap();
  assert_eq!(slaw.price, Decimal::ZERO);
  assert!(slaw.available);
  assert_eq!(slaw.image.as_ref().unwrap().as_str(), "data:image/jpeg;base64,SGVsbG8=");
  assert_eq!(snapshot.categories[0].description, "");
}

#[test]
fn test_loosely_typed_product_fields_do_not_fail_the_menu() {
  let body = envelope(json!({
    "categories": [{
      "id": 1,
      "name": "Drinks",
      "products": [
        { "id": 1, "name": null, "selling_price": "4.50", "quantity": "5" },
        { "id": 2, "name": "Soda", "selling_price": "free", "quantity": "none", "available": false },
        { "id": 3, "name": "Tea", "selling_price": 2, "quantity": [] }
      ]
    }]
  }));

  let snapshot = map_menu(decode_menu_data(body).unwrap());
  let [unnamed, soda, tea] = snapshot.menu.as_slice() else {
    panic!("expected three items, got {:?}", snapshot.menu);
  };

  assert_eq!(unnamed.name, "");
  assert_eq!(unnamed.price, cents(450));
  assert!(unnamed.available);

  assert_eq!(soda.price, Decimal::ZERO);
  assert!(!soda.available);

  assert_eq!(tea.price, Decimal::from(2));
  assert!(tea.available);
}

#[test]
fn test_category_without_products_is_empty_not_fatal() {
  let body = envelope(json!({ "categories": [{ "id": 1, "name": "Soon", "hide_on_menu": 0 }] }));
  let snapshot = map_menu(decode_menu_data(body).unwrap());
  assert!(snapshot.menu.is_empty());
  assert_eq!(snapshot.categories.len(), 1);
  assert!(snapshot.categories[0].items.is_empty());
}

#[test]
fn test_missing_categories_is_fatal() {
  let err = decode_menu_data(envelope(json!({ "offers": [] }))).unwrap_err();
  assert!(matches!(err, MenuError::MalformedEnvelope(_)), "got {:?}", err);

  let err = decode_menu_data(envelope(json!({ "categories": "nope" }))).unwrap_err();
  assert!(matches!(err, MenuError::MalformedEnvelope(_)), "got {:?}", err);

  let err = decode_menu_data(envelope(json!(null))).unwrap_err();
  assert!(matches!(err, MenuError::MalformedEnvelope(_)), "got {:?}", err);
}

#[test]
fn test_missing_data_or_bad_category_is_a_decode_error() {
  let err = decode_menu_data(json!({ "code": 500, "state": "error" })).unwrap_err();
  assert!(matches!(err, MenuError::Decode(_)), "got {:?}", err);

  let err = decode_menu_data(envelope(json!({ "categories": [{ "id": "x" }] }))).unwrap_err();
  assert!(matches!(err, MenuError::Decode(_)), "got {:?}", err);
}

#[test]
fn test_offers_and_store_info() {
  let body = envelope(json!({
    "categories": [],
    "offers": [
      { "id": 1, "title": "Happy Hour", "description": "Half price", "discount": "50%", "valid_until": "2026-12-31",
        "image": [72, 101, 108, 108, 111] },
      { "id": 2, "title": "Lunch", "discount": 15, "valid_until": "2026-11-01T10:00:00Z" },
      { "id": 3, "title": "Mystery", "valid_until": "soon" },
      { "title": "No id, skipped" }
    ],
    "store_info": { "restaurantName": "Quiver Bistro", "theme": "orange", "logo": "data:image/png;base64,AAAA", "currency": "USD" }
  }));

  let snapshot = map_menu(decode_menu_data(body).unwrap());
  assert_eq!(snapshot.offers.len(), 3);

  let happy = &snapshot.offers[0];
  assert_eq!(happy.discount.as_deref(), Some("50%"));
  assert_eq!(happy.valid_until, NaiveDate::from_ymd_opt(2026, 12, 31));
  assert!(happy.image.is_some());

  assert_eq!(snapshot.offers[1].discount.as_deref(), Some("15"));
  assert_eq!(snapshot.offers[1].valid_until, NaiveDate::from_ymd_opt(2026, 11, 1));
  assert_eq!(snapshot.offers[1].description, "");
  assert_eq!(snapshot.offers[2].valid_until, None);

  let settings = snapshot.settings.as_ref().unwrap();
  assert_eq!(settings.restaurant_name.as_deref(), Some("Quiver Bistro"));
  assert_eq!(settings.logo.as_ref().unwrap().as_str(), "data:image/png;base64,AAAA");
  assert_eq!(settings.extra.get("currency"), Some(&json!("USD")));
  assert_eq!(snapshot.display_name(), "Quiver Bistro");
}

#[test]
fn test_display_name_falls_back() {
  let snapshot = map_menu(decode_menu_data(envelope(json!({ "categories": [] }))).unwrap());
  assert!(snapshot.settings.is_none());
  assert_eq!(snapshot.display_name(), "Our Menu");
}

#[test]
fn test_parse_valid_until_formats() {
  assert_eq!(parse_valid_until("2026-01-02"), NaiveDate::from_ymd_opt(2026, 1, 2));
  assert_eq!(parse_valid_until(" 2026-01-02 "), NaiveDate::from_ymd_opt(2026, 1, 2));
  assert_eq!(parse_valid_until("2026-01-02T23:00:00+02:00"), NaiveDate::from_ymd_opt(2026, 1, 2));
  assert_eq!(parse_valid_until("next week"), None);
}
