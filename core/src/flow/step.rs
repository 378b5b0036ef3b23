// menuboard/src/flow/step.rs

use super::{FlowContext, StepControl};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Evaluated against the flow data before a step runs; `true` skips it.
pub type SkipCondition<TData> = Arc<dyn Fn(&TData) -> bool + Send + Sync + 'static>;

/// A boxed asynchronous step handler.
///
/// Handlers receive their own clone of the flow context and must drop any
/// lock guard before awaiting.
pub type StepHandler<TData, Err> = Box<
  dyn Fn(FlowContext<TData>) -> Pin<Box<dyn Future<Output = Result<StepControl, Err>> + Send>>
    + Send
    + Sync,
>;

#[derive(Clone)]
pub struct StepDef<TData: 'static + Send + Sync> {
  pub name: String,
  pub optional: bool,
  pub skip_if: Option<SkipCondition<TData>>,
}

impl<TData: 'static + Send + Sync> std::fmt::Debug for StepDef<TData> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("StepDef")
      .field("name", &self.name)
      .field("optional", &self.optional)
      .field("skip_if_present", &self.skip_if.is_some())
      .finish()
  }
}
