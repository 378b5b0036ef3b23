// storefront/src/state.rs

use menuboard::{CartStore, MenuFetcher, MenuPage, MenuResult, MenuSnapshot, Offer, OfferCarousel};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

pub type LoadResult = MenuResult<MenuSnapshot>;

/// Everything one terminal session works on.
///
/// Menu fetches run on their own task and report back through the channel
/// returned by [`AppState::new`], so the cart stays usable while one is
/// pending.
pub struct AppState {
  pub fetcher: Arc<MenuFetcher>,
  pub page: MenuPage,
  pub carousel: OfferCarousel,
  pub cart: CartStore,
  loads: mpsc::UnboundedSender<LoadResult>,
  fetch_in_flight: bool,
}

impl AppState {
  pub fn new(fetcher: MenuFetcher, autoplay: bool) -> (Self, mpsc::UnboundedReceiver<LoadResult>) {
    let carousel = if autoplay {
      OfferCarousel::new(0)
    } else {
      OfferCarousel::without_autoplay(0)
    };
    let (loads, results) = mpsc::unbounded_channel();
    let state = Self {
      fetcher: Arc::new(fetcher),
      page: MenuPage::new(),
      carousel,
      cart: CartStore::new(),
      loads,
      fetch_in_flight: false,
    };
    (state, results)
  }

  pub fn is_fetching(&self) -> bool {
    self.fetch_in_flight
  }

  /// Puts the page in its loading state and fetches in the background.
  /// Returns `false` if a fetch is already pending. Must be called inside a
  /// tokio runtime.
  pub fn start_load(&mut self) -> bool {
    if self.fetch_in_flight {
      return false;
    }
    self.fetch_in_flight = true;
    self.page.begin_load();

    let fetcher = Arc::clone(&self.fetcher);
    let loads = self.loads.clone();
    tokio::spawn(async move {
      let result = fetcher.fetch().await;
      if loads.send(result).is_err() {
        debug!("Menu fetch finished after the session ended.");
      }
    });
    true
  }

  /// Applies a fetch result received from the channel and resizes the
  /// offers carousel to match. The cart is left alone; its lines keep the
  /// values they were added with.
  pub fn finish_load(&mut self, result: LoadResult) {
    self.fetch_in_flight = false;
    self.page.finish_load(result);
    let offers = self.offers().len();
    self.carousel.set_len(offers);
  }

  pub fn offers(&self) -> &[Offer] {
    self.page.snapshot().map(|s| s.offers.as_slice()).unwrap_or_default()
  }
}
