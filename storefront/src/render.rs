// storefront/src/render.rs

//! Plain-text rendering of the storefront screens.

use crate::state::AppState;
use menuboard::menu::view::FilterChip;
use menuboard::{Cart, CartLineItem, CategoryFilter, InlineImage, MenuItem, MenuSnapshot, MenuState, Offer, OfferCarousel};
use std::fmt::Write;

pub const LOADING_MESSAGE: &str = "Loading menu...";
pub const TAGLINE: &str = "Discover our delicious offerings";
pub const EMPTY_CATEGORY_MESSAGE: &str = "No items found in this category.";
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";
pub const EMPTY_CART_HINT: &str = "Add some delicious items to get started!";
pub const UNAVAILABLE_LABEL: &str = "Unavailable";
pub const POWERED_BY_FALLBACK: &str = "QuiverSoftware";

const NO_IMAGE: &str = "[no image]";

fn image_label(image: Option<&InlineImage>) -> String {
  match image {
    Some(image) => {
      let media = image.as_str().split(';').next().unwrap_or_default();
      format!("[{} image, {} chars]", media.trim_start_matches("data:"), image.as_str().len())
    }
    None => NO_IMAGE.to_string(),
  }
}

pub fn header(snapshot: &MenuSnapshot) -> String {
  format!("== {} ==\n{}", snapshot.display_name(), TAGLINE)
}

pub fn footer(snapshot: &MenuSnapshot) -> String {
  let name = snapshot
    .settings
    .as_ref()
    .and_then(|s| s.restaurant_name.as_deref())
    .filter(|name| !name.is_empty())
    .unwrap_or(POWERED_BY_FALLBACK);
  format!("Powered by {}", name)
}

/// The selected chip is bracketed.
pub fn filter_bar(chips: &[FilterChip], selected: &CategoryFilter) -> String {
  chips
    .iter()
    .map(|chip| {
      if &chip.filter == selected {
        format!("[{}]", chip)
      } else {
        chip.to_string()
      }
    })
    .collect::<Vec<_>>()
    .join("  ")
}

pub fn item_card(item: &MenuItem) -> String {
  let mut card = format!("#{} {}  ${:.2}  <{}>", item.id, item.name, item.price, item.category);
  if !item.available {
    let _ = write!(card, "  ** {} **", UNAVAILABLE_LABEL);
  }
  if !item.description.is_empty() {
    let _ = write!(card, "\n    {}", item.description);
  }
  let _ = write!(card, "\n    {}", image_label(item.image.as_ref()));
  card
}

pub fn offer_slide(offers: &[Offer], carousel: &OfferCarousel) -> Option<String> {
  let offer = carousel.current_offer(offers)?;
  let position = carousel.current().unwrap_or_default() + 1;

  let mut slide = format!("Offer {}/{}: ", position, offers.len());
  if let Some(discount) = &offer.discount {
    let _ = write!(slide, "[{}] ", discount);
  }
  slide.push_str(&offer.title);
  if !offer.description.is_empty() {
    let _ = write!(slide, " - {}", offer.description);
  }
  if let Some(valid_until) = offer.valid_until {
    let _ = write!(slide, " (Valid until: {})", valid_until);
  }
  Some(slide)
}

/// The floating cart button: item count badge (only when non-empty) and total.
pub fn cart_button(cart: &Cart) -> String {
  let total_items = cart.total_items();
  if total_items > 0 {
    format!("Cart ({})  ${:.2}", total_items, cart.total_price())
  } else {
    format!("Cart  ${:.2}", cart.total_price())
  }
}

fn cart_line(line: &CartLineItem) -> String {
  format!(
    "#{} {} <{}>  ${:.2} x {} = ${:.2}",
    line.id,
    line.name,
    line.category,
    line.price,
    line.quantity,
    line.line_total()
  )
}

pub fn cart_panel(cart: &Cart) -> String {
  let mut panel = String::from("== Your Cart ==");
  if cart.is_empty() {
    let _ = write!(panel, "\n{}\n{}", EMPTY_CART_MESSAGE, EMPTY_CART_HINT);
    return panel;
  }
  for line in cart.items() {
    let _ = write!(panel, "\n{}", cart_line(line));
  }
  let _ = write!(panel, "\nTotal: ${:.2}", cart.total_price());
  panel.push_str("\n(qty/inc/dec/remove <id>, clear, checkout)");
  panel
}

pub fn menu_page(state: &AppState) -> String {
  match state.page.state() {
    MenuState::Loading => LOADING_MESSAGE.to_string(),
    MenuState::Failed { message } => format!("{}\nType 'retry' to try again.", message),
    MenuState::Ready(snapshot) => {
      let mut out = header(snapshot);
      if let Some(slide) = offer_slide(&snapshot.offers, &state.carousel) {
        let _ = write!(out, "\n\n{}", slide);
      }
      let _ = write!(
        out,
        "\n\n{}\n",
        filter_bar(&state.page.filter_bar(), state.page.selected())
      );

      let items = state.page.visible_items();
      if items.is_empty() {
        let _ = write!(out, "\n{}", EMPTY_CATEGORY_MESSAGE);
      }
      for item in items {
        let _ = write!(out, "\n{}", item_card(item));
      }
      let _ = write!(out, "\n\n{}\n{}", cart_button(&state.cart.snapshot()), footer(snapshot));
      out
    }
  }
}

pub fn help() -> &'static str {
  "Commands:
  menu                 show the menu
  filter <category>    show one category ('filter All' to reset)
  add <id>             add an item to the cart
  remove <id>          remove an item from the cart
  qty <id> <n>         set a quantity (0 or less removes)
  inc <id> / dec <id>  change a quantity by one
  cart                 show the cart
  clear                empty the cart
  checkout             proceed to checkout
  offers [next|prev|goto <n>]
  retry                fetch the menu again
  help                 this text
  quit"
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal::Decimal;

  fn sample_item(available: bool) -> MenuItem {
    MenuItem {
      id: 7,
      name: "Lemonade".to_string(),
      description: "Fresh".to_string(),
      price: Decimal::new(25, 1),
      category: "Drinks".to_string(),
      image: menuboard::image::normalize_bytes(b"png"),
      available,
    }
  }

  #[test]
  fn test_item_card_formats_price_and_flags() {
    let card = item_card(&sample_item(false));
    assert!(card.starts_with("#7 Lemonade  $2.50  <Drinks>"));
    assert!(card.contains(UNAVAILABLE_LABEL));
    assert!(card.contains("image/jpeg"));

    let mut plain = sample_item(true);
    plain.image = None;
    let card = item_card(&plain);
    assert!(!card.contains(UNAVAILABLE_LABEL));
    assert!(card.contains(NO_IMAGE));
  }

  #[test]
  fn test_cart_button_badge_only_when_non_empty() {
    let mut cart = Cart::new();
    assert_eq!(cart_button(&cart), "Cart  $0.00");
    cart.add_item(&sample_item(true));
    cart.add_item(&sample_item(true));
    assert_eq!(cart_button(&cart), "Cart (2)  $5.00");
  }

  #[test]
  fn test_cart_panel() {
    let mut cart = Cart::new();
    let empty = cart_panel(&cart);
    assert!(empty.contains(EMPTY_CART_MESSAGE));

    cart.add_item(&sample_item(true));
    cart.update_quantity(7, 3);
    let panel = cart_panel(&cart);
    assert!(panel.contains("#7 Lemonade <Drinks>  $2.50 x 3 = $7.50"));
    assert!(panel.contains("Total: $7.50"));
  }

  #[test]
  fn test_filter_bar_marks_selection() {
    let items = vec![sample_item(true)];
    let chips = menuboard::menu::view::filter_bar(&items);
    assert_eq!(filter_bar(&chips, &CategoryFilter::All), "[All (1)]  Drinks (1)");
    assert_eq!(
      filter_bar(&chips, &CategoryFilter::from_label("Drinks")),
      "All (1)  [Drinks (1)]"
    );
  }

  #[test]
  fn test_offer_slide() {
    let offers = vec![Offer {
      id: 1,
      title: "Happy Hour".to_string(),
      description: "Half price drinks".to_string(),
      discount: Some("50%".to_string()),
      image: None,
      valid_until: menuboard::menu::mapping::parse_valid_until("2026-12-31"),
    }];
    let carousel = OfferCarousel::new(1);
    assert_eq!(
      offer_slide(&offers, &carousel).unwrap(),
      "Offer 1/1: [50%] Happy Hour - Half price drinks (Valid until: 2026-12-31)"
    );
    assert!(offer_slide(&[], &OfferCarousel::new(0)).is_none());
  }
}
