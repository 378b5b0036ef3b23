// storefront/src/cli.rs

use clap::Parser;
use menuboard::{ClientConfig, MenuResult};

/// Browse the restaurant menu and fill a cart from the terminal.
#[derive(Debug, Parser)]
#[command(name = "storefront", version, about)]
pub struct Args {
  /// Menu API base URL. Overrides MENU_API_BASE_URL.
  #[arg(long)]
  pub base_url: Option<String>,

  /// Caller identity sent as the x-user-id header. Overrides MENU_API_USER_ID.
  #[arg(long)]
  pub user_id: Option<String>,

  /// Keep the offers banner on its first slide.
  #[arg(long)]
  pub no_autoplay: bool,
}

impl Args {
  /// Environment first, then command-line overrides.
  pub fn client_config(&self) -> MenuResult<ClientConfig> {
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = &self.base_url {
      config = config.with_base_url(base_url.clone());
    }
    if let Some(user_id) = &self.user_id {
      config = config.with_user_id(user_id.clone());
    }
    config.validate()?;
    Ok(config)
  }
}
