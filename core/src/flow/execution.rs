// menuboard/src/flow/execution.rs

//! `Flow::run`: walks the steps in order and drives their handlers.

use super::{Flow, FlowContext, FlowOutcome, StepControl};
use crate::error::FlowError;
use tracing::{event, instrument, span, Instrument, Level};

impl<TData, Err> Flow<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Runs every step against `ctx`.
  ///
  /// Skipped steps and optional steps without handlers are passed over. A
  /// non-optional step without handlers fails the run with
  /// `FlowError::HandlerMissing`, converted into `Err`.
  #[instrument(
    name = "Flow::run",
    skip_all,
    fields(flow = %self.label, num_steps = self.steps.len()),
    err(Display)
  )]
  pub async fn run(&self, ctx: FlowContext<TData>) -> Result<FlowOutcome, Err> {
    event!(Level::DEBUG, "Flow execution starting.");

    for (step_idx, step_def) in self.steps.iter().enumerate() {
      let step_name = step_def.name.as_str();

      if let Some(skip_if) = &step_def.skip_if {
        let skip = skip_if(&*ctx.read());
        if skip {
          event!(Level::DEBUG, step_name, "Step skipped by its skip condition.");
          continue;
        }
      }

      let handlers = match self.handlers.get(step_name) {
        Some(handlers) if !handlers.is_empty() => handlers,
        _ if step_def.optional => {
          event!(Level::DEBUG, step_name, "Optional step has no handlers, skipping.");
          continue;
        }
        _ => {
          event!(Level::ERROR, step_name, "Non-optional step has no handlers.");
          return Err(Err::from(FlowError::HandlerMissing {
            step_name: step_def.name.clone(),
          }));
        }
      };

      let step_span = span!(Level::DEBUG, "flow_step", step_name, step_index = step_idx);
      for handler in handlers {
        match handler(ctx.clone()).instrument(step_span.clone()).await {
          Ok(StepControl::Continue) => {}
          Ok(StepControl::Stop) => {
            event!(Level::INFO, step_name, "Flow stopped by a step handler.");
            return Ok(FlowOutcome::Stopped);
          }
          Err(e) => {
            event!(Level::ERROR, step_name, error = %e, "Step handler failed.");
            return Err(e);
          }
        }
      }
    }

    event!(Level::DEBUG, "Flow execution completed.");
    Ok(FlowOutcome::Completed)
  }
}
