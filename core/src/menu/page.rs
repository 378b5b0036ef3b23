// menuboard/src/menu/page.rs

//! Display state of the menu screen: loading, failed (with retry), or ready.

use super::model::{ItemId, MenuItem, MenuSnapshot};
use super::view::{self, CategoryFilter, CategoryGroup, FilterChip};
use crate::error::MenuResult;
use crate::fetch::MenuFetcher;
use tracing::{error, info, instrument};

/// Shown to the user whenever a fetch fails, whatever the cause.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load menu. Please check your connection.";

#[derive(Debug, Clone, PartialEq)]
pub enum MenuState {
  Loading,
  Failed { message: String },
  Ready(MenuSnapshot),
}

/// Owns the latest fetch result and the selected category.
///
/// `load` switches the page to [`MenuState::Loading`] before awaiting the
/// fetch. Dropping a pending `load` future leaves the page in `Loading`
/// until the next load. Callers that run the fetch elsewhere use
/// [`MenuPage::begin_load`] and [`MenuPage::finish_load`] instead.
#[derive(Debug, Clone)]
pub struct MenuPage {
  state: MenuState,
  selected: CategoryFilter,
}

impl Default for MenuPage {
  fn default() -> Self {
    Self::new()
  }
}

impl MenuPage {
  pub fn new() -> Self {
    Self {
      state: MenuState::Loading,
      selected: CategoryFilter::All,
    }
  }

  /// Fetches the menu and swaps the result in. Errors never escape: they are
  /// logged and turned into [`MenuState::Failed`].
  #[instrument(name = "MenuPage::load", skip_all)]
  pub async fn load(&mut self, fetcher: &MenuFetcher) {
    self.begin_load();
    let result = fetcher.fetch().await;
    self.finish_load(result);
  }

  /// Shows the loading state. The previous snapshot is dropped.
  pub fn begin_load(&mut self) {
    self.state = MenuState::Loading;
  }

  /// Applies the outcome of a fetch started after [`MenuPage::begin_load`].
  pub fn finish_load(&mut self, result: MenuResult<MenuSnapshot>) {
    self.state = match result {
      Ok(snapshot) => {
        info!(items = snapshot.menu.len(), "Menu loaded.");
        MenuState::Ready(snapshot)
      }
      Err(e) => {
        error!(error = %e, "Error fetching menu with settings.");
        MenuState::Failed {
          message: LOAD_FAILED_MESSAGE.to_string(),
        }
      }
    };
  }

  /// Same operation as [`MenuPage::load`], triggered by the user.
  pub async fn retry(&mut self, fetcher: &MenuFetcher) {
    self.load(fetcher).await
  }

  pub fn state(&self) -> &MenuState {
    &self.state
  }

  pub fn is_loading(&self) -> bool {
    matches!(self.state, MenuState::Loading)
  }

  pub fn snapshot(&self) -> Option<&MenuSnapshot> {
    match &self.state {
      MenuState::Ready(snapshot) => Some(snapshot),
      _ => None,
    }
  }

  fn items(&self) -> &[MenuItem] {
    self.snapshot().map(|s| s.menu.as_slice()).unwrap_or_default()
  }

  pub fn selected(&self) -> &CategoryFilter {
    &self.selected
  }

  pub fn select_category(&mut self, filter: CategoryFilter) {
    self.selected = filter;
  }

  pub fn visible_items(&self) -> Vec<&MenuItem> {
    view::filter_items(self.items(), &self.selected)
  }

  pub fn groups(&self) -> Vec<CategoryGroup<'_>> {
    view::group_by_category(self.items())
  }

  pub fn filter_bar(&self) -> Vec<FilterChip> {
    view::filter_bar(self.items())
  }

  pub fn find_item(&self, id: ItemId) -> Option<&MenuItem> {
    self.snapshot().and_then(|s| s.find_item(id))
  }
}
