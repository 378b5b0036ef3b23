// menuboard/src/flow/definition.rs

//! The `Flow<TData, Err>` struct and the methods that build it up.

use super::step::{SkipCondition, StepDef, StepHandler};
use super::{FlowContext, StepControl};
use crate::error::{FlowError, FlowResult};
use std::collections::HashMap;
use std::future::Future;

/// An ordered list of named steps, each with zero or more async handlers.
///
/// `Err` is the error type handlers return. It must be constructible from
/// `FlowError` so engine failures (a non-optional step without handlers)
/// surface through the same channel.
pub struct Flow<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  pub(crate) label: String,
  pub(crate) steps: Vec<StepDef<TData>>,
  pub(crate) handlers: HashMap<String, Vec<StepHandler<TData, Err>>>,
}

impl<TData, Err> Flow<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Creates a flow from `(step name, optional)` pairs, run in the given order.
  pub fn new(label: impl Into<String>, step_defs: &[(&str, bool)]) -> Self {
    let steps = step_defs
      .iter()
      .map(|(name, optional)| StepDef {
        name: (*name).to_string(),
        optional: *optional,
        skip_if: None,
      })
      .collect();

    Self {
      label: label.into(),
      steps,
      handlers: HashMap::new(),
    }
  }

  pub fn label(&self) -> &str {
    &self.label
  }

  pub fn step_names(&self) -> impl Iterator<Item = &str> {
    self.steps.iter().map(|s| s.name.as_str())
  }

  fn step_mut(&mut self, step_name: &str) -> FlowResult<&mut StepDef<TData>> {
    let label = &self.label;
    self
      .steps
      .iter_mut()
      .find(|s| s.name == step_name)
      .ok_or_else(|| FlowError::StepNotFound {
        flow: label.clone(),
        step_name: step_name.to_string(),
      })
  }

  /// Registers a handler for `step_name`. Handlers of one step run in
  /// registration order.
  pub fn on_step<F, UserErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(FlowContext<TData>) -> F + Send + Sync + 'static,
  ) -> FlowResult<()>
  where
    F: Future<Output = Result<StepControl, UserErr>> + Send + 'static,
    UserErr: Into<Err> + Send + Sync + 'static,
  {
    self.step_mut(step_name)?;
    let handler: StepHandler<TData, Err> = Box::new(move |ctx| {
      let user_fut = handler_fn(ctx);
      Box::pin(async move { user_fut.await.map_err(Into::into) })
    });
    self.handlers.entry(step_name.to_string()).or_default().push(handler);
    Ok(())
  }

  pub fn set_skip_condition(&mut self, step_name: &str, skip_if: Option<SkipCondition<TData>>) -> FlowResult<()> {
    self.step_mut(step_name)?.skip_if = skip_if;
    Ok(())
  }

  pub fn set_optional(&mut self, step_name: &str, optional: bool) -> FlowResult<()> {
    self.step_mut(step_name)?.optional = optional;
    Ok(())
  }
}
