// menuboard/src/menu/wire.rs

//! Serde shapes of the `/menu/with-settings` response.
//!
//! Only `data.categories` is load-bearing. Offers and store info are decoded
//! leniently from raw JSON so a malformed promo cannot take the menu down.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// The outer `{code, state, data, message}` wrapper.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
  #[serde(default)]
  pub code: Option<i64>,
  #[serde(default)]
  pub state: Option<String>,
  pub data: T,
  #[serde(default)]
  pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiCategory {
  pub id: i64,
  pub name: String,
  #[serde(default)]
  pub color: Option<String>,
  #[serde(default)]
  pub section: Option<String>,
  #[serde(default)]
  pub sort: Option<i64>,
  #[serde(default)]
  pub active: Option<i64>,
  #[serde(default)]
  pub hide_on_menu: Option<i64>,
  #[serde(default)]
  pub products: Option<Vec<ApiProduct>>,
}

impl ApiCategory {
  pub fn is_hidden(&self) -> bool {
    self.hide_on_menu == Some(1)
  }

  pub fn products(&self) -> &[ApiProduct] {
    self.products.as_deref().unwrap_or_default()
  }
}

/// A product inside a category. Everything but `id` is optional, and the
/// numeric fields accept numbers or numeric strings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiProduct {
  pub id: i64,
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default, deserialize_with = "lenient_decimal")]
  pub selling_price: Option<Decimal>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub image: Value,
  #[serde(default, deserialize_with = "lenient_number")]
  pub quantity: Option<f64>,
  #[serde(default)]
  pub category_id: Option<i64>,
  #[serde(default)]
  pub available: Option<bool>,
}

/// An item as served by `/menu/category/{name}` and `/menu/{id}`: already in
/// the storefront's shape, with the image still raw.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMenuItem {
  pub id: i64,
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default, deserialize_with = "lenient_decimal")]
  pub price: Option<Decimal>,
  #[serde(default)]
  pub category: Option<String>,
  #[serde(default)]
  pub image: Value,
  #[serde(default)]
  pub available: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiOffer {
  pub id: i64,
  #[serde(default)]
  pub title: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  /// Seen both as `"20%"` and as a bare number.
  #[serde(default)]
  pub discount: Value,
  #[serde(default)]
  pub image: Value,
  #[serde(default)]
  pub valid_until: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiStoreInfo {
  #[serde(default, rename = "restaurantName")]
  pub restaurant_name: Option<String>,
  #[serde(default)]
  pub theme: Option<String>,
  #[serde(default)]
  pub logo: Value,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

/// `data` after the envelope has been checked: categories are typed, the
/// optional sections are still raw.
#[derive(Debug, Clone)]
pub struct ApiMenuData {
  pub categories: Vec<ApiCategory>,
  pub offers: Vec<Value>,
  pub store_info: Option<Value>,
}

/// A number, or a string holding one. Anything else reads as absent.
fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
  Ok(match Value::deserialize(deserializer)? {
    Value::Number(n) => n.as_f64(),
    Value::String(s) => s.trim().parse().ok(),
    _ => None,
  })
}

fn lenient_decimal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Decimal>, D::Error> {
  Ok(match Value::deserialize(deserializer)? {
    Value::Null => None,
    Value::String(s) => s.trim().parse().ok(),
    other => serde_json::from_value(other).ok(),
  })
}
