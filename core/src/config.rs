// menuboard/src/config.rs

use crate::error::{MenuError, MenuResult};
use dotenvy::dotenv;
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://quiversoftware.net/api";
pub const DEFAULT_USER_ID: &str = "user99999";

/// Header that identifies the caller to the menu API.
pub const USER_ID_HEADER: &str = "x-user-id";

pub const MENU_WITH_SETTINGS_PATH: &str = "/menu/with-settings";

/// Where the menu comes from and who is asking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
  pub base_url: String,
  pub user_id: String,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_BASE_URL.to_string(),
      user_id: DEFAULT_USER_ID.to_string(),
    }
  }
}

impl ClientConfig {
  /// Reads `MENU_API_BASE_URL` and `MENU_API_USER_ID`, falling back to the
  /// built-in constants. A `.env` file is loaded first if present.
  pub fn from_env() -> MenuResult<Self> {
    dotenv().ok();

    let get_env = |var_name: &str, default: &str| env::var(var_name).unwrap_or_else(|_| default.to_string());

    let config = Self {
      base_url: get_env("MENU_API_BASE_URL", DEFAULT_BASE_URL),
      user_id: get_env("MENU_API_USER_ID", DEFAULT_USER_ID),
    };
    config.validate()?;

    tracing::info!(base_url = %config.base_url, "Menu client configuration loaded.");
    Ok(config)
  }

  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
    self.user_id = user_id.into();
    self
  }

  pub fn validate(&self) -> MenuResult<()> {
    let base_url = self.base_url.trim();
    if base_url.is_empty() {
      return Err(MenuError::Config("menu API base URL is empty".to_string()));
    }
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
      return Err(MenuError::Config(format!(
        "menu API base URL must be http(s), got '{}'",
        base_url
      )));
    }
    if self.user_id.trim().is_empty() {
      return Err(MenuError::Config("menu API user id is empty".to_string()));
    }
    Ok(())
  }

  pub fn menu_endpoint(&self) -> String {
    format!("{}{}", self.base_url.trim().trim_end_matches('/'), MENU_WITH_SETTINGS_PATH)
  }
}
