// menuboard/src/cart/mod.rs

//! The in-memory shopping cart.
//!
//! [`Cart`] is the plain state machine; [`CartStore`] wraps it in shared,
//! observable state handed to every consumer explicitly.

pub mod line_item;
pub mod state;
pub mod store;

pub use line_item::CartLineItem;
pub use state::{Cart, CartChange};
pub use store::{CartStore, SubscriptionId};
