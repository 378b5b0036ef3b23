// storefront/src/errors.rs

use menuboard::{ItemId, MenuError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorefrontError {
  #[error("Unknown command: '{0}'. Type 'help' for the list of commands.")]
  UnknownCommand(String),

  #[error("Invalid arguments for '{command}': {detail}")]
  InvalidArgs { command: &'static str, detail: String },

  #[error("No menu item with id {0}")]
  UnknownItem(ItemId),

  #[error("'{0}' is unavailable right now")]
  ItemUnavailable(String),

  #[error("Item {0} is not in your cart")]
  NotInCart(ItemId),

  #[error("The menu has not loaded yet. Type 'retry' to try again.")]
  MenuNotLoaded,

  #[error(transparent)]
  Menu(#[from] MenuError),

  #[error("Terminal I/O failed: {0}")]
  Io(#[from] std::io::Error),
}

impl StorefrontError {
  /// Errors the user can fix by typing something else; the rest are logged.
  pub fn is_user_error(&self) -> bool {
    !matches!(self, StorefrontError::Menu(_) | StorefrontError::Io(_))
  }
}

pub type Result<T, E = StorefrontError> = std::result::Result<T, E>;
