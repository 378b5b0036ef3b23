// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use async_trait::async_trait;
use menuboard::{MenuError, MenuItem, MenuRequest, MenuResult, MenuSource};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::collections::VecDeque;
use tracing::Level;

// --- Tracing (once per test binary) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Menu items ---
pub fn item(id: i64, name: &str, category: &str, price: Decimal) -> MenuItem {
  MenuItem {
    id,
    name: name.to_string(),
    description: String::new(),
    price,
    category: category.to_string(),
    image: None,
    available: true,
  }
}

/// `units` hundredths, e.g. `cents(999)` is 9.99.
pub fn cents(units: i64) -> Decimal {
  Decimal::new(units, 2)
}

// --- Canned API bodies ---
pub fn product(id: i64, name: &str, price: f64, quantity: i64) -> Value {
  json!({
    "id": id,
    "name": name,
    "selling_price": price,
    "description": format!("{} description", name),
    "image": null,
    "quantity": quantity,
    "category_id": 1
  })
}

pub fn category(id: i64, name: &str, hide_on_menu: i64, products: Vec<Value>) -> Value {
  json!({
    "id": id,
    "name": name,
    "color": "#ffffff",
    "section": format!("{} section", name),
    "sort": id,
    "active": 1,
    "hide_on_menu": hide_on_menu,
    "products": products
  })
}

pub fn envelope(data: Value) -> Value {
  json!({ "code": 200, "state": "success", "data": data, "message": "ok" })
}

/// Two visible categories and one hidden one.
pub fn sample_menu_body() -> Value {
  envelope(json!({
    "categories": [
      category(1, "Drinks", 0, vec![product(11, "Lemonade", 2.5, 10), product(12, "Iced Tea", 3.25, 0)]),
      category(2, "Food", 0, vec![product(21, "Burger", 12.5, 4)]),
      category(3, "Staff Only", 1, vec![product(31, "Staff Meal", 1.0, 99)]),
    ],
    "offers": [
      { "id": 1, "title": "Happy Hour", "description": "Half price drinks", "discount": "50%", "image": null, "valid_until": "2026-12-31" }
    ],
    "store_info": { "restaurantName": "Quiver Bistro", "theme": "orange", "currency": "USD" }
  }))
}

// --- Stub source ---
pub enum StubResponse {
  Body(Value),
  Status(u16),
}

/// Serves queued responses in order, whatever the request; repeats the last
/// body once the queue runs dry. Every request is recorded.
pub struct StubMenuSource {
  responses: Mutex<VecDeque<StubResponse>>,
  last: Mutex<Option<Value>>,
  requests: Mutex<Vec<MenuRequest>>,
}

impl StubMenuSource {
  pub fn new(responses: Vec<StubResponse>) -> Self {
    Self {
      responses: Mutex::new(responses.into()),
      last: Mutex::new(None),
      requests: Mutex::new(Vec::new()),
    }
  }

  pub fn serving(body: Value) -> Self {
    Self::new(vec![StubResponse::Body(body)])
  }

  pub fn calls(&self) -> usize {
    self.requests.lock().len()
  }

  pub fn requests(&self) -> Vec<MenuRequest> {
    self.requests.lock().clone()
  }
}

#[async_trait]
impl MenuSource for StubMenuSource {
  async fn fetch_json(&self, request: &MenuRequest) -> MenuResult<Value> {
    self.requests.lock().push(request.clone());
    let next = self.responses.lock().pop_front();
    match next {
      Some(StubResponse::Body(body)) => {
        *self.last.lock() = Some(body.clone());
        Ok(body)
      }
      Some(StubResponse::Status(status)) => Err(MenuError::Status { status }),
      None => self
        .last
        .lock()
        .clone()
        .ok_or(MenuError::Status { status: 503 }),
    }
  }
}
