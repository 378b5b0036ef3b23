// storefront/src/main.rs

mod cli;
mod commands;
mod errors;
mod render;
mod state;

use crate::cli::Args;
use crate::commands::{Command, Reply};
use crate::state::AppState;

use anyhow::Context;
use clap::Parser;
use menuboard::menu::offers::AUTOPLAY_INTERVAL;
use menuboard::MenuFetcher;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{interval_at, Instant};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

const PROMPT_HINT: &str = "Type 'help' for commands.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Logs go to stderr so they do not interleave with the rendered screens.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::CLOSE)
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();
  let config = args
    .client_config()
    .context("Failed to load menu client configuration")?;
  let fetcher = MenuFetcher::from_config(&config).context("Failed to build the menu client")?;
  tracing::info!(endpoint = %config.menu_endpoint(), "Starting storefront.");

  let (mut state, mut loads) = AppState::new(fetcher, !args.no_autoplay);

  // Cart button badge, refreshed on every cart change.
  let badge = state.cart.subscribe(|_change, cart| println!("{}", render::cart_button(cart)));

  println!("{}\n{}", render::LOADING_MESSAGE, PROMPT_HINT);
  state.start_load();

  let mut lines = BufReader::new(tokio::io::stdin()).lines();
  let mut autoplay = interval_at(Instant::now() + AUTOPLAY_INTERVAL, AUTOPLAY_INTERVAL);

  loop {
    tokio::select! {
      line = lines.next_line() => {
        let Some(line) = line.context("Failed to read from stdin")? else {
          break;
        };
        let line = line.trim();
        if line.is_empty() {
          continue;
        }

        match line.parse::<Command>().and_then(|command| commands::execute(&mut state, command)) {
          Ok(Reply::Print(text)) => println!("{}", text),
          Ok(Reply::Quit) => break,
          Err(e) => {
            if !e.is_user_error() {
              tracing::error!(error = %e, "Command failed.");
            }
            println!("{}", e);
          }
        }
      }
      Some(result) = loads.recv() => {
        state.finish_load(result);
        println!("{}", render::menu_page(&state));
      }
      _ = autoplay.tick() => {
        if state.carousel.tick() {
          if let Some(slide) = render::offer_slide(state.offers(), &state.carousel) {
            println!("{}", slide);
          }
        }
      }
    }
  }

  state.cart.unsubscribe(badge);
  tracing::info!(items_in_cart = state.cart.total_items(), "Storefront closed.");
  Ok(())
}
