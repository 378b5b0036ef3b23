// menuboard/src/menu/mod.rs

//! Menu data model, wire schema, mapping and the views derived from it.

pub mod mapping;
pub mod model;
pub mod offers;
pub mod page;
pub mod view;
pub mod wire;

pub use model::{Category, ItemId, MenuItem, MenuSnapshot, Offer, StoreInfo};
pub use offers::OfferCarousel;
pub use page::{MenuPage, MenuState};
pub use view::{CategoryFilter, CategoryGroup, FilterChip};
