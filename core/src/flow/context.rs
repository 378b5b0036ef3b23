// menuboard/src/flow/context.rs

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Shared state threaded through every step of a [`Flow`](super::Flow).
///
/// Cloning hands out another handle onto the same data. Guards returned by
/// `read`/`write` are blocking and MUST be dropped before any `.await`.
#[derive(Debug)]
pub struct FlowContext<T: Send + Sync + 'static>(Arc<RwLock<T>>);

impl<T: Send + Sync + 'static> FlowContext<T> {
  pub fn new(data: T) -> Self {
    FlowContext(Arc::new(RwLock::new(data)))
  }

  pub fn read(&self) -> RwLockReadGuard<'_, T> {
    self.0.read()
  }

  pub fn write(&self) -> RwLockWriteGuard<'_, T> {
    self.0.write()
  }

  /// Number of live handles onto this context.
  pub fn handle_count(&self) -> usize {
    Arc::strong_count(&self.0)
  }

  /// Recovers the data once every other handle has been dropped.
  pub fn try_into_inner(self) -> Result<T, Self> {
    Arc::try_unwrap(self.0).map(RwLock::into_inner).map_err(FlowContext)
  }
}

impl<T: Send + Sync + 'static> Clone for FlowContext<T> {
  fn clone(&self) -> Self {
    FlowContext(Arc::clone(&self.0))
  }
}

impl<T: Send + Sync + 'static + Default> Default for FlowContext<T> {
  fn default() -> Self {
    Self::new(Default::default())
  }
}
