// menuboard/src/menu/model.rs

//! Domain types produced by one menu fetch. Replaced wholesale on re-fetch.

use crate::image::InlineImage;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Unique within one menu snapshot; also the cart line item key.
pub type ItemId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
  pub id: ItemId,
  pub name: String,
  pub description: String,
  pub price: Decimal,
  pub category: String,
  pub image: Option<InlineImage>,
  pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
  pub id: i64,
  pub name: String,
  pub description: String,
  pub items: Vec<MenuItem>,
}

/// Promotional content. Read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
  pub id: i64,
  pub title: String,
  pub description: String,
  pub discount: Option<String>,
  pub image: Option<InlineImage>,
  pub valid_until: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreInfo {
  pub restaurant_name: Option<String>,
  pub theme: Option<String>,
  pub logo: Option<InlineImage>,
  /// Any store settings the storefront does not interpret.
  pub extra: Map<String, Value>,
}

/// Everything one successful fetch of `/menu/with-settings` yields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuSnapshot {
  /// Flat list of every visible item, in server order.
  pub menu: Vec<MenuItem>,
  /// Server-side grouping, hidden categories excluded.
  pub categories: Vec<Category>,
  pub offers: Vec<Offer>,
  pub settings: Option<StoreInfo>,
}

pub const DEFAULT_MENU_TITLE: &str = "Our Menu";

impl MenuSnapshot {
  pub fn display_name(&self) -> &str {
    self
      .settings
      .as_ref()
      .and_then(|s| s.restaurant_name.as_deref())
      .filter(|name| !name.is_empty())
      .unwrap_or(DEFAULT_MENU_TITLE)
  }

  pub fn find_item(&self, id: ItemId) -> Option<&MenuItem> {
    self.menu.iter().find(|item| item.id == id)
  }
}
