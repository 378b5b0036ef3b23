// menuboard/src/flow/mod.rs

//! A small named-step engine. A `Flow<TData, Err>` runs an ordered list of
//! steps against a shared `FlowContext<TData>`; each step's handlers may
//! continue, stop the flow early, or fail it.

pub mod context;
pub mod control;
pub mod definition;
pub mod execution;
pub mod step;

pub use context::FlowContext;
pub use control::{FlowOutcome, StepControl};
pub use definition::Flow;
pub use step::{SkipCondition, StepDef, StepHandler};
