// menuboard/src/source.rs

//! Where the raw menu JSON comes from.

use crate::config::{ClientConfig, USER_ID_HEADER};
use crate::error::{MenuError, MenuResult};
use crate::menu::ItemId;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Url;
use serde_json::Value;
use std::fmt;
use tracing::{debug, instrument};

/// The menu API calls the storefront makes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuRequest {
  /// `GET /menu/with-settings`: categories, offers and store info.
  WithSettings,
  /// `GET /menu/category/{name}`
  Category(String),
  /// `GET /menu/{id}`
  Item(ItemId),
}

impl MenuRequest {
  /// Path segments below the API base URL, not yet percent-encoded.
  pub fn segments(&self) -> Vec<String> {
    match self {
      MenuRequest::WithSettings => vec!["menu".to_string(), "with-settings".to_string()],
      MenuRequest::Category(name) => vec!["menu".to_string(), "category".to_string(), name.clone()],
      MenuRequest::Item(id) => vec!["menu".to_string(), id.to_string()],
    }
  }
}

impl fmt::Display for MenuRequest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "/{}", self.segments().join("/"))
  }
}

/// Produces raw response bodies for [`MenuRequest`]s.
///
/// The HTTP implementation is [`HttpMenuSource`]; tests plug in canned JSON.
#[async_trait]
pub trait MenuSource: Send + Sync {
  async fn fetch_json(&self, request: &MenuRequest) -> MenuResult<Value>;
}

pub struct HttpMenuSource {
  client: reqwest::Client,
  base_url: Url,
}

impl HttpMenuSource {
  pub fn new(config: &ClientConfig) -> MenuResult<Self> {
    config.validate()?;

    let base_url = Url::parse(config.base_url.trim())
      .map_err(|e| MenuError::Config(format!("Invalid menu API base URL '{}': {}", config.base_url, e)))?;

    let mut headers = HeaderMap::new();
    let user_id = HeaderValue::from_str(&config.user_id)
      .map_err(|e| MenuError::Config(format!("Invalid {} header value: {}", USER_ID_HEADER, e)))?;
    headers.insert(USER_ID_HEADER, user_id);

    let client = reqwest::Client::builder().default_headers(headers).build()?;

    Ok(Self { client, base_url })
  }

  /// Full URL for `request`, with path segments percent-encoded.
  pub fn endpoint(&self, request: &MenuRequest) -> MenuResult<Url> {
    let mut url = self.base_url.clone();
    url
      .path_segments_mut()
      .map_err(|_| MenuError::Config(format!("Menu API base URL '{}' cannot take a path", self.base_url)))?
      .pop_if_empty()
      .extend(request.segments());
    Ok(url)
  }
}

#[async_trait]
impl MenuSource for HttpMenuSource {
  #[instrument(name = "HttpMenuSource::fetch_json", skip_all, fields(request = %request), err(Display))]
  async fn fetch_json(&self, request: &MenuRequest) -> MenuResult<Value> {
    let url = self.endpoint(request)?;
    let response = self.client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
      return Err(MenuError::Status {
        status: status.as_u16(),
      });
    }

    let body = response.json::<Value>().await?;
    debug!("Menu response received.");
    Ok(body)
  }
}
