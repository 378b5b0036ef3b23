// storefront/src/commands.rs

//! Terminal commands: parsing a typed line and applying it to the session.

use crate::errors::{Result, StorefrontError};
use crate::render;
use crate::state::AppState;
use menuboard::{CategoryFilter, ItemId, MenuError};
use std::str::FromStr;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfferNav {
  Show,
  Next,
  Previous,
  /// Zero-based; the user types one-based positions.
  GoTo(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  Menu,
  Filter(CategoryFilter),
  Add(ItemId),
  Remove(ItemId),
  SetQuantity(ItemId, i64),
  Increment(ItemId),
  Decrement(ItemId),
  Cart,
  Clear,
  Checkout,
  Offers(OfferNav),
  Retry,
  Help,
  Quit,
}

/// What the loop should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
  Print(String),
  Quit,
}

fn invalid(command: &'static str, detail: impl Into<String>) -> StorefrontError {
  StorefrontError::InvalidArgs {
    command,
    detail: detail.into(),
  }
}

fn item_id(command: &'static str, arg: Option<&str>) -> Result<ItemId> {
  let raw = arg.ok_or_else(|| invalid(command, "expected an item id"))?;
  raw
    .parse::<ItemId>()
    .map_err(|_| invalid(command, format!("'{}' is not an item id", raw)))
}

impl FromStr for Command {
  type Err = StorefrontError;

  fn from_str(line: &str) -> Result<Self> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
      return Err(StorefrontError::UnknownCommand(String::new()));
    };

    let command = match verb.to_ascii_lowercase().as_str() {
      "menu" | "m" => Command::Menu,
      "filter" | "f" => {
        // Category names may contain spaces and are matched verbatim.
        let label = words.by_ref().collect::<Vec<_>>().join(" ");
        if label.is_empty() {
          return Err(invalid("filter", "expected a category name or 'All'"));
        }
        return Ok(Command::Filter(CategoryFilter::from_label(&label)));
      }
      "add" | "a" => Command::Add(item_id("add", words.next())?),
      "remove" | "rm" => Command::Remove(item_id("remove", words.next())?),
      "qty" => {
        let id = item_id("qty", words.next())?;
        let raw = words.next().ok_or_else(|| invalid("qty", "expected a quantity"))?;
        let quantity = raw
          .parse::<i64>()
          .map_err(|_| invalid("qty", format!("'{}' is not a quantity", raw)))?;
        Command::SetQuantity(id, quantity)
      }
      "inc" | "+" => Command::Increment(item_id("inc", words.next())?),
      "dec" | "-" => Command::Decrement(item_id("dec", words.next())?),
      "cart" | "c" => Command::Cart,
      "clear" => Command::Clear,
      "checkout" => Command::Checkout,
      "offers" | "o" => match words.next() {
        None => Command::Offers(OfferNav::Show),
        Some("next") | Some(">") => Command::Offers(OfferNav::Next),
        Some("prev") | Some("<") => Command::Offers(OfferNav::Previous),
        Some("goto") => {
          let raw = words.next().ok_or_else(|| invalid("offers", "expected a slide number"))?;
          match raw.parse::<usize>() {
            Ok(position) if position >= 1 => Command::Offers(OfferNav::GoTo(position - 1)),
            _ => return Err(invalid("offers", format!("'{}' is not a slide number", raw))),
          }
        }
        Some(other) => return Err(invalid("offers", format!("unknown action '{}'", other))),
      },
      "retry" | "reload" => Command::Retry,
      "help" | "h" | "?" => Command::Help,
      "quit" | "exit" | "q" => Command::Quit,
      _ => return Err(StorefrontError::UnknownCommand(verb.to_string())),
    };

    match words.next() {
      Some(extra) => Err(invalid("command", format!("unexpected '{}'", extra))),
      None => Ok(command),
    }
  }
}

fn current_quantity(state: &AppState, id: ItemId) -> Result<i64> {
  state
    .cart
    .line_item(id)
    .map(|line| i64::from(line.quantity))
    .ok_or(StorefrontError::NotInCart(id))
}

fn show_offer(state: &AppState) -> Reply {
  Reply::Print(render::offer_slide(state.offers(), &state.carousel).unwrap_or_else(|| "No offers right now.".to_string()))
}

/// Applies `command`. Never waits on the network: `retry` only starts a
/// background fetch, whose result arrives through the session's load channel.
#[instrument(name = "command::execute", skip(state), level = "debug")]
pub fn execute(state: &mut AppState, command: Command) -> Result<Reply> {
  let reply = match command {
    Command::Menu => Reply::Print(render::menu_page(state)),
    Command::Filter(filter) => {
      if state.page.snapshot().is_none() {
        return Err(StorefrontError::MenuNotLoaded);
      }
      state.page.select_category(filter);
      Reply::Print(render::menu_page(state))
    }
    Command::Add(id) => {
      if state.page.snapshot().is_none() {
        return Err(StorefrontError::MenuNotLoaded);
      }
      let item = state.page.find_item(id).ok_or(StorefrontError::UnknownItem(id))?;
      if !item.available {
        return Err(StorefrontError::ItemUnavailable(item.name.clone()));
      }
      state.cart.add_item(item);
      info!(item_id = id, "Item added to cart.");
      Reply::Print(format!("Added {}.", item.name))
    }
    Command::Remove(id) => {
      if !state.cart.remove_item(id).is_change() {
        return Err(StorefrontError::NotInCart(id));
      }
      Reply::Print(render::cart_panel(&state.cart.snapshot()))
    }
    Command::SetQuantity(id, quantity) => {
      current_quantity(state, id)?;
      state.cart.update_quantity(id, quantity);
      Reply::Print(render::cart_panel(&state.cart.snapshot()))
    }
    Command::Increment(id) => {
      let quantity = current_quantity(state, id)?;
      state.cart.update_quantity(id, quantity.saturating_add(1));
      Reply::Print(render::cart_panel(&state.cart.snapshot()))
    }
    Command::Decrement(id) => {
      let quantity = current_quantity(state, id)?;
      state.cart.update_quantity(id, quantity - 1);
      Reply::Print(render::cart_panel(&state.cart.snapshot()))
    }
    Command::Cart => Reply::Print(render::cart_panel(&state.cart.snapshot())),
    Command::Clear => {
      state.cart.clear_cart();
      Reply::Print(render::cart_panel(&state.cart.snapshot()))
    }
    Command::Checkout => {
      if state.cart.is_empty() {
        return Ok(Reply::Print(render::EMPTY_CART_MESSAGE.to_string()));
      }
      match state.cart.checkout() {
        Err(e @ MenuError::CheckoutUnavailable) => Reply::Print(e.to_string()),
        Err(e) => return Err(e.into()),
        Ok(()) => Reply::Print(render::cart_panel(&state.cart.snapshot())),
      }
    }
    Command::Offers(nav) => {
      match nav {
        OfferNav::Show => {}
        OfferNav::Next => state.carousel.next(),
        OfferNav::Previous => state.carousel.previous(),
        OfferNav::GoTo(index) => {
          if !state.carousel.go_to(index) {
            return Err(invalid("offers", format!("there is no slide {}", index + 1)));
          }
        }
      }
      show_offer(state)
    }
    Command::Retry if state.is_fetching() => Reply::Print("The menu is already loading.".to_string()),
    Command::Retry => {
      state.start_load();
      Reply::Print(render::LOADING_MESSAGE.to_string())
    }
    Command::Help => Reply::Print(render::help().to_string()),
    Command::Quit => Reply::Quit,
  };
  Ok(reply)
}
