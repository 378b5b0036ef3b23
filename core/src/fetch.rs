// menuboard/src/fetch.rs

//! The menu fetch adapter: request, decode and map, as a three-step flow.

use crate::config::ClientConfig;
use crate::error::{FlowError, MenuError, MenuResult};
use crate::flow::{Flow, FlowContext, FlowOutcome, StepControl};
use crate::menu::mapping;
use crate::menu::wire::ApiMenuData;
use crate::menu::{ItemId, MenuItem, MenuSnapshot};
use crate::source::{HttpMenuSource, MenuRequest, MenuSource};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

pub const FETCH_FLOW: &str = "menu_fetch";
pub const REQUEST_STEP: &str = "request_menu";
pub const DECODE_STEP: &str = "decode_envelope";
pub const MAP_STEP: &str = "map_menu";

/// Data handed from step to step during one fetch.
#[derive(Debug, Default)]
pub struct FetchCtxData {
  pub raw: Option<Value>,
  pub decoded: Option<ApiMenuData>,
  pub snapshot: Option<MenuSnapshot>,
}

fn missing(what: &str, step: &str) -> FlowError {
  FlowError::Internal(format!("{} missing when '{}' ran", what, step))
}

/// Fetches one [`MenuSnapshot`] per call. No retries, no timeouts: a failed
/// attempt is returned to the caller, who decides whether to try again.
pub struct MenuFetcher {
  source: Arc<dyn MenuSource>,
  flow: Flow<FetchCtxData, MenuError>,
}

impl MenuFetcher {
  pub fn new(source: Arc<dyn MenuSource>) -> MenuResult<Self> {
    let mut flow = Flow::<FetchCtxData, MenuError>::new(
      FETCH_FLOW,
      &[(REQUEST_STEP, false), (DECODE_STEP, false), (MAP_STEP, false)],
    );

    let request_source = Arc::clone(&source);
    flow.on_step(REQUEST_STEP, move |ctx: FlowContext<FetchCtxData>| {
      let source = Arc::clone(&request_source);
      async move {
        let body = source.fetch_json(&MenuRequest::WithSettings).await?;
        ctx.write().raw = Some(body);
        Ok::<_, MenuError>(StepControl::Continue)
      }
    })?;

    flow.on_step(DECODE_STEP, |ctx: FlowContext<FetchCtxData>| async move {
      let raw = ctx.write().raw.take().ok_or_else(|| missing("response body", DECODE_STEP))?;
      let decoded = mapping::decode_menu_data(raw)?;
      ctx.write().decoded = Some(decoded);
      Ok::<_, MenuError>(StepControl::Continue)
    })?;

    flow.on_step(MAP_STEP, |ctx: FlowContext<FetchCtxData>| async move {
      let decoded = ctx
        .write()
        .decoded
        .take()
        .ok_or_else(|| missing("decoded menu data", MAP_STEP))?;
      let snapshot = mapping::map_menu(decoded);
      ctx.write().snapshot = Some(snapshot);
      Ok::<_, MenuError>(StepControl::Continue)
    })?;

    Ok(Self { source, flow })
  }

  /// A fetcher backed by the real HTTP endpoint.
  pub fn from_config(config: &ClientConfig) -> MenuResult<Self> {
    Self::new(Arc::new(HttpMenuSource::new(config)?))
  }

  #[instrument(name = "MenuFetcher::fetch", skip(self), err(Display))]
  pub async fn fetch(&self) -> MenuResult<MenuSnapshot> {
    let ctx = FlowContext::new(FetchCtxData::default());

    match self.flow.run(ctx.clone()).await? {
      FlowOutcome::Completed => {}
      FlowOutcome::Stopped => {
        return Err(
          FlowError::Halted {
            flow: self.flow.label().to_string(),
          }
          .into(),
        )
      }
    }

    let snapshot = ctx
      .write()
      .snapshot
      .take()
      .ok_or_else(|| missing("menu snapshot", FETCH_FLOW))?;
    info!(
      items = snapshot.menu.len(),
      offers = snapshot.offers.len(),
      "Menu fetched."
    );
    Ok(snapshot)
  }

  /// Just the flat item list.
  pub async fn all_items(&self) -> MenuResult<Vec<MenuItem>> {
    Ok(self.fetch().await?.menu)
  }

  /// Items of one category, straight from `/menu/category/{name}`.
  #[instrument(name = "MenuFetcher::items_in_category", skip(self), err(Display))]
  pub async fn items_in_category(&self, category: &str) -> MenuResult<Vec<MenuItem>> {
    let body = self
      .source
      .fetch_json(&MenuRequest::Category(category.to_string()))
      .await?;
    mapping::decode_item_list(body)
  }

  /// A single item, straight from `/menu/{id}`.
  #[instrument(name = "MenuFetcher::item", skip(self), err(Display))]
  pub async fn item(&self, id: ItemId) -> MenuResult<MenuItem> {
    let body = self.source.fetch_json(&MenuRequest::Item(id)).await?;
    mapping::decode_item(body)
  }
}
