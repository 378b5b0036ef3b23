// menuboard/src/cart/store.rs

use super::line_item::CartLineItem;
use super::state::{Cart, CartChange};
use crate::error::{MenuError, MenuResult};
use crate::menu::{ItemId, MenuItem};
use parking_lot::{Mutex, RwLock};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, warn};

type Subscriber = Box<dyn Fn(&CartChange, &Cart) + Send + Sync>;

/// Handle returned by [`CartStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Subscribers {
  next_id: u64,
  entries: Vec<(SubscriptionId, Subscriber)>,
}

/// The session's cart, shared by handle.
///
/// Cloning a `CartStore` gives another handle onto the same cart; there is
/// no global instance, so every consumer receives the store explicitly.
/// Each mutation is applied under the write lock, and subscribers are then
/// called synchronously, before the mutating call returns, with the change
/// and a post-mutation snapshot. Subscribers must not subscribe or
/// unsubscribe from inside their callback.
#[derive(Clone, Default)]
pub struct CartStore {
  cart: Arc<RwLock<Cart>>,
  subscribers: Arc<Mutex<Subscribers>>,
}

impl std::fmt::Debug for CartStore {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CartStore")
      .field("cart", &*self.cart.read())
      .field("subscribers", &self.subscribers.lock().entries.len())
      .finish()
  }
}

impl CartStore {
  /// An empty cart, as at session start.
  pub fn new() -> Self {
    Self::default()
  }

  pub fn subscribe(&self, callback: impl Fn(&CartChange, &Cart) + Send + Sync + 'static) -> SubscriptionId {
    let mut subscribers = self.subscribers.lock();
    let id = SubscriptionId(subscribers.next_id);
    subscribers.next_id += 1;
    subscribers.entries.push((id, Box::new(callback)));
    id
  }

  /// Returns whether the subscription existed.
  pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
    let mut subscribers = self.subscribers.lock();
    let before = subscribers.entries.len();
    subscribers.entries.retain(|(entry_id, _)| *entry_id != id);
    subscribers.entries.len() != before
  }

  fn apply(&self, op: impl FnOnce(&mut Cart) -> CartChange) -> CartChange {
    let (change, snapshot) = {
      let mut cart = self.cart.write();
      let change = op(&mut cart);
      let snapshot = change.is_change().then(|| cart.clone());
      (change, snapshot)
    };

    if let Some(snapshot) = snapshot {
      debug!(?change, total_items = snapshot.total_items(), "Cart changed.");
      for (_, callback) in self.subscribers.lock().entries.iter() {
        callback(&change, &snapshot);
      }
    }
    change
  }

  pub fn add_item(&self, item: &MenuItem) -> CartChange {
    self.apply(|cart| cart.add_item(item))
  }

  pub fn update_quantity(&self, id: ItemId, new_quantity: i64) -> CartChange {
    self.apply(|cart| cart.update_quantity(id, new_quantity))
  }

  pub fn remove_item(&self, id: ItemId) -> CartChange {
    self.apply(|cart| cart.remove_item(id))
  }

  pub fn clear_cart(&self) -> CartChange {
    self.apply(Cart::clear)
  }

  pub fn total_items(&self) -> u64 {
    self.cart.read().total_items()
  }

  pub fn total_price(&self) -> Decimal {
    self.cart.read().total_price()
  }

  pub fn is_empty(&self) -> bool {
    self.cart.read().is_empty()
  }

  pub fn line_item(&self, id: ItemId) -> Option<CartLineItem> {
    self.cart.read().line_item(id).cloned()
  }

  pub fn snapshot(&self) -> Cart {
    self.cart.read().clone()
  }

  /// Checkout is not implemented. Always reports it as unavailable instead
  /// of failing silently.
  pub fn checkout(&self) -> MenuResult<()> {
    warn!(
      total_items = self.total_items(),
      total_price = %self.total_price(),
      "Checkout requested but not available."
    );
    Err(MenuError::CheckoutUnavailable)
  }
}
