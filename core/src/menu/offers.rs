// menuboard/src/menu/offers.rs

//! Slide position for the promotional offers banner.

use super::model::Offer;
use std::time::Duration;

/// How often an autoplaying carousel advances.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_secs(5);

/// Tracks which offer is showing. Any manual navigation turns autoplay off
/// for good; an empty carousel ignores every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferCarousel {
  len: usize,
  current: usize,
  autoplay: bool,
}

impl OfferCarousel {
  pub fn new(len: usize) -> Self {
    Self {
      len,
      current: 0,
      autoplay: true,
    }
  }

  pub fn without_autoplay(len: usize) -> Self {
    Self {
      autoplay: false,
      ..Self::new(len)
    }
  }

  /// Called when the offer list is replaced by a re-fetch.
  pub fn set_len(&mut self, len: usize) {
    self.len = len;
    if self.current >= len {
      self.current = 0;
    }
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  pub fn current(&self) -> Option<usize> {
    (!self.is_empty()).then_some(self.current)
  }

  pub fn current_offer<'a>(&self, offers: &'a [Offer]) -> Option<&'a Offer> {
    self.current().and_then(|idx| offers.get(idx))
  }

  pub fn is_autoplaying(&self) -> bool {
    self.autoplay
  }

  /// Autoplay step. Returns whether the slide changed.
  pub fn tick(&mut self) -> bool {
    if !self.autoplay || self.len <= 1 {
      return false;
    }
    self.current = (self.current + 1) % self.len;
    true
  }

  pub fn next(&mut self) {
    if self.is_empty() {
      return;
    }
    self.current = (self.current + 1) % self.len;
    self.autoplay = false;
  }

  pub fn previous(&mut self) {
    if self.is_empty() {
      return;
    }
    self.current = (self.current + self.len - 1) % self.len;
    self.autoplay = false;
  }

  /// Jumps to `index`. Out-of-range indices are ignored and leave autoplay
  /// untouched.
  pub fn go_to(&mut self, index: usize) -> bool {
    if index >= self.len {
      return false;
    }
    self.current = index;
    self.autoplay = false;
    true
  }
}
