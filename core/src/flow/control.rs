// menuboard/src/flow/control.rs

/// Returned by a step handler to say whether the flow should go on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepControl {
  Continue,
  /// Halt immediately. Remaining handlers and steps are not run.
  Stop,
}

/// How a full run of a flow ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
  Completed,
  Stopped,
}
