// src/lib.rs

//! Menuboard: the logic behind a restaurant menu storefront.
//!
//! Menuboard covers:
//!  - Fetching the menu (categories, items, offers, store settings) from the
//!    remote `/menu/with-settings` endpoint and mapping it onto a flat item
//!    list plus category grouping.
//!  - Normalizing the inconsistent image payloads the API sends into inline
//!    `data:image/...` references.
//!  - Category filtering, the filter bar, and the offers carousel position.
//!  - An in-memory, observable shopping cart with quantity merging and
//!    always-fresh totals.
//!
//! Rendering, routing and persistence are left to the application.

pub mod cart;
pub mod config;
pub mod error;
pub mod fetch;
pub mod flow;
pub mod image;
pub mod menu;
pub mod source;

// --- Re-exports for the Public API ---

pub use crate::cart::{Cart, CartChange, CartLineItem, CartStore, SubscriptionId};
pub use crate::config::ClientConfig;
pub use crate::error::{FlowError, FlowResult, MenuError, MenuResult};
pub use crate::fetch::MenuFetcher;
pub use crate::flow::{Flow, FlowContext, FlowOutcome, StepControl};
pub use crate::image::{normalize, ImagePayload, InlineImage};
pub use crate::menu::{
  Category, CategoryFilter, ItemId, MenuItem, MenuPage, MenuSnapshot, MenuState, Offer, OfferCarousel, StoreInfo,
};
pub use crate::source::{HttpMenuSource, MenuRequest, MenuSource};

/*
    Typical session:
    1. Build a `ClientConfig` (`ClientConfig::from_env()` or `default()`).
    2. Create a `MenuFetcher::from_config(&config)` and a `MenuPage`.
    3. `page.load(&fetcher).await`; on `MenuState::Failed` offer `page.retry`.
    4. Create one `CartStore` for the session and pass clones of it to every
       consumer; `subscribe` to re-render on change.
*/
