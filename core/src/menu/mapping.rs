// menuboard/src/menu/mapping.rs

//! Maps the server's category/product schema onto the domain model.

use super::model::{Category, MenuItem, MenuSnapshot, Offer, StoreInfo};
use super::wire::{ApiCategory, ApiEnvelope, ApiMenuData, ApiMenuItem, ApiOffer, ApiProduct, ApiStoreInfo};
use crate::error::{MenuError, MenuResult};
use crate::image;
use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Checks the envelope and types its `data.categories`.
///
/// A missing or non-array `categories` is fatal, as is a category or product
/// that does not match the schema. `offers` and `store_info` stay raw.
pub fn decode_menu_data(body: Value) -> MenuResult<ApiMenuData> {
  let envelope: ApiEnvelope<Value> = serde_json::from_value(body)?;
  debug!(code = ?envelope.code, state = ?envelope.state, "Decoded menu envelope.");

  let Value::Object(mut data) = envelope.data else {
    return Err(MenuError::MalformedEnvelope("`data` is not an object".to_string()));
  };

  let categories = match data.remove("categories") {
    Some(raw @ Value::Array(_)) => serde_json::from_value::<Vec<ApiCategory>>(raw)?,
    Some(_) => {
      return Err(MenuError::MalformedEnvelope("`data.categories` is not an array".to_string()));
    }
    None => return Err(MenuError::MalformedEnvelope("No categories found in response".to_string())),
  };

  let offers = match data.remove("offers") {
    Some(Value::Array(offers)) => offers,
    Some(Value::Null) | None => Vec::new(),
    Some(other) => {
      warn!(offers = %other, "Ignoring non-array `offers` section.");
      Vec::new()
    }
  };

  let store_info = data.remove("store_info").filter(|v| !v.is_null());

  Ok(ApiMenuData {
    categories,
    offers,
    store_info,
  })
}

/// Builds the snapshot. Categories with `hide_on_menu == 1` contribute
/// nothing to either the flat list or the grouping.
pub fn map_menu(data: ApiMenuData) -> MenuSnapshot {
  let categories: Vec<Category> = data
    .categories
    .iter()
    .filter(|category| !category.is_hidden())
    .map(map_category)
    .collect();

  let menu: Vec<MenuItem> = categories.iter().flat_map(|c| c.items.iter().cloned()).collect();
  info!(
    items = menu.len(),
    categories = categories.len(),
    "Processed menu items."
  );

  let offers = data.offers.into_iter().filter_map(map_offer).collect();
  let settings = data.store_info.and_then(map_store_info);

  MenuSnapshot {
    menu,
    categories,
    offers,
    settings,
  }
}

fn map_category(category: &ApiCategory) -> Category {
  Category {
    id: category.id,
    name: category.name.clone(),
    description: category.section.clone().unwrap_or_default(),
    items: category
      .products()
      .iter()
      .map(|product| map_product(product, &category.name))
      .collect(),
  }
}

fn price_or_zero(item_id: i64, price: Option<Decimal>) -> Decimal {
  match price {
    Some(price) if price.is_sign_negative() => {
      warn!(item_id, %price, "Negative price, showing as zero.");
      Decimal::ZERO
    }
    Some(price) => price,
    None => {
      debug!(item_id, "Item has no price.");
      Decimal::ZERO
    }
  }
}

pub fn map_product(product: &ApiProduct, category_name: &str) -> MenuItem {
  MenuItem {
    id: product.id,
    name: product.name.clone().unwrap_or_default(),
    description: product.description.clone().unwrap_or_default(),
    price: price_or_zero(product.id, product.selling_price),
    category: category_name.to_string(),
    image: image::normalize(&product.image),
    available: is_available(product.quantity.unwrap_or(0.0), product.available),
  }
}

/// Items from the per-category and per-id endpoints carry no stock count;
/// they are available unless marked otherwise.
pub fn map_menu_item(item: ApiMenuItem) -> MenuItem {
  MenuItem {
    id: item.id,
    price: price_or_zero(item.id, item.price),
    name: item.name.unwrap_or_default(),
    description: item.description.unwrap_or_default(),
    category: item.category.unwrap_or_default(),
    image: image::normalize(&item.image),
    available: item.available != Some(false),
  }
}

/// `data` of a `/menu/category/{name}` response: a list of items.
pub fn decode_item_list(body: Value) -> MenuResult<Vec<MenuItem>> {
  let envelope: ApiEnvelope<Vec<ApiMenuItem>> = serde_json::from_value(body)?;
  Ok(envelope.data.into_iter().map(map_menu_item).collect())
}

/// `data` of a `/menu/{id}` response: a single item.
pub fn decode_item(body: Value) -> MenuResult<MenuItem> {
  let envelope: ApiEnvelope<ApiMenuItem> = serde_json::from_value(body)?;
  Ok(map_menu_item(envelope.data))
}

/// In stock, or not explicitly marked unavailable.
///
/// Note the precedence: with zero stock an item is still available unless
/// the server sent `available: false`.
pub fn is_available(quantity: f64, available: Option<bool>) -> bool {
  quantity > 0.0 || available != Some(false)
}

fn map_offer(raw: Value) -> Option<Offer> {
  let offer: ApiOffer = match serde_json::from_value(raw) {
    Ok(offer) => offer,
    Err(e) => {
      warn!(error = %e, "Skipping malformed offer.");
      return None;
    }
  };

  let discount = match &offer.discount {
    Value::String(s) if !s.is_empty() => Some(s.clone()),
    Value::Number(n) => Some(n.to_string()),
    _ => None,
  };

  Some(Offer {
    id: offer.id,
    title: offer.title.unwrap_or_default(),
    description: offer.description.unwrap_or_default(),
    discount,
    image: image::normalize(&offer.image),
    valid_until: offer.valid_until.as_deref().and_then(parse_valid_until),
  })
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp.
pub fn parse_valid_until(raw: &str) -> Option<NaiveDate> {
  let raw = raw.trim();
  NaiveDate::parse_from_str(raw, "%Y-%m-%d")
    .ok()
    .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
    .or_else(|| {
      debug!(valid_until = raw, "Unparseable offer expiry, ignoring.");
      None
    })
}

fn map_store_info(raw: Value) -> Option<StoreInfo> {
  match serde_json::from_value::<ApiStoreInfo>(raw) {
    Ok(info) => Some(StoreInfo {
      restaurant_name: info.restaurant_name,
      theme: info.theme,
      logo: image::normalize(&info.logo),
      extra: info.extra,
    }),
    Err(e) => {
      warn!(error = %e, "Ignoring malformed store_info.");
      None
    }
  }
}
