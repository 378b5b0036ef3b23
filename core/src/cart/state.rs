// menuboard/src/cart/state.rs

use super::line_item::{saturated, CartLineItem};
use crate::menu::{ItemId, MenuItem};
use rust_decimal::Decimal;
use serde::Serialize;

/// What a cart operation did. `Unchanged` means it was a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
  Added { id: ItemId },
  Incremented { id: ItemId, quantity: u32 },
  QuantitySet { id: ItemId, quantity: u32 },
  Removed { id: ItemId },
  Cleared,
  Unchanged,
}

impl CartChange {
  pub fn is_change(&self) -> bool {
    !matches!(self, CartChange::Unchanged)
  }
}

/// Line items in insertion order.
///
/// Invariants: at most one line item per id, and every quantity is >= 1.
/// Every operation is total; unknown ids are no-ops, never errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cart {
  items: Vec<CartLineItem>,
}

impl Cart {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn items(&self) -> &[CartLineItem] {
    &self.items
  }

  pub fn line_item(&self, id: ItemId) -> Option<&CartLineItem> {
    self.items.iter().find(|line| line.id == id)
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Increments an existing line item or appends a new one with quantity 1.
  ///
  /// Availability is not checked here; callers only offer available items.
  pub fn add_item(&mut self, item: &MenuItem) -> CartChange {
    match self.items.iter_mut().find(|line| line.id == item.id) {
      Some(line) => {
        line.quantity = line.quantity.saturating_add(1);
        CartChange::Incremented {
          id: line.id,
          quantity: line.quantity,
        }
      }
      None => {
        self.items.push(CartLineItem::from_menu_item(item));
        CartChange::Added { id: item.id }
      }
    }
  }

  /// Sets an absolute quantity. Zero or below removes the line item.
  pub fn update_quantity(&mut self, id: ItemId, new_quantity: i64) -> CartChange {
    if new_quantity <= 0 {
      return self.remove_item(id);
    }
    let quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
    match self.items.iter_mut().find(|line| line.id == id) {
      Some(line) if line.quantity == quantity => CartChange::Unchanged,
      Some(line) => {
        line.quantity = quantity;
        CartChange::QuantitySet { id, quantity }
      }
      None => CartChange::Unchanged,
    }
  }

  pub fn remove_item(&mut self, id: ItemId) -> CartChange {
    match self.items.iter().position(|line| line.id == id) {
      Some(idx) => {
        self.items.remove(idx);
        CartChange::Removed { id }
      }
      None => CartChange::Unchanged,
    }
  }

  pub fn clear(&mut self) -> CartChange {
    if self.items.is_empty() {
      return CartChange::Unchanged;
    }
    self.items.clear();
    CartChange::Cleared
  }

  /// Sum of quantities, recomputed on every call.
  pub fn total_items(&self) -> u64 {
    self.items.iter().map(|line| u64::from(line.quantity)).sum()
  }

  /// Sum of price x quantity, recomputed on every call. Saturates at the
  /// `Decimal` bounds rather than overflowing.
  pub fn total_price(&self) -> Decimal {
    self.items.iter().map(CartLineItem::line_total).fold(Decimal::ZERO, |total, line| {
      total.checked_add(line).unwrap_or_else(|| saturated(line))
    })
  }
}
