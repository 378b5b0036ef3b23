// menuboard/src/cart/line_item.rs

use crate::image::InlineImage;
use crate::menu::{ItemId, MenuItem};
use rust_decimal::Decimal;
use serde::Serialize;

/// One distinct product in the cart with its aggregated quantity.
///
/// Name, price, category and image are a snapshot taken when the product was
/// first added; later adds of the same id only bump `quantity`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLineItem {
  pub id: ItemId,
  pub name: String,
  pub price: Decimal,
  pub category: String,
  pub image: Option<InlineImage>,
  /// Always at least 1 while the line item is in a cart.
  pub quantity: u32,
}

impl CartLineItem {
  pub fn from_menu_item(item: &MenuItem) -> Self {
    Self {
      id: item.id,
      name: item.name.clone(),
      price: item.price,
      category: item.category.clone(),
      image: item.image.clone(),
      quantity: 1,
    }
  }

  /// `price x quantity`, saturating at the `Decimal` bounds instead of
  /// overflowing.
  pub fn line_total(&self) -> Decimal {
    self
      .price
      .checked_mul(Decimal::from(self.quantity))
      .unwrap_or_else(|| saturated(self.price))
  }
}

/// The bound an overflowing sum or product heads towards.
pub(crate) fn saturated(direction: Decimal) -> Decimal {
  if direction.is_sign_negative() {
    Decimal::MIN
  } else {
    Decimal::MAX
  }
}
