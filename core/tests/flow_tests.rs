// tests/flow_tests.rs
mod common;

use common::*;
use menuboard::flow::SkipCondition;
use menuboard::{Flow, FlowContext, FlowError, FlowOutcome, MenuError, StepControl};
use serial_test::serial;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Trace {
  visited: Vec<String>,
  skip_middle: bool,
}

fn recording_flow(steps: &[(&str, bool)]) -> Flow<Trace, MenuError> {
  let mut flow = Flow::<Trace, MenuError>::new("test_flow", steps);
  for (name, _) in steps {
    let step = name.to_string();
    flow
      .on_step(name, move |ctx: FlowContext<Trace>| {
        let step = step.clone();
        async move {
          ctx.write().visited.push(step);
          Ok::<_, MenuError>(StepControl::Continue)
        }
      })
      .unwrap();
  }
  flow
}

#[tokio::test]
#[serial]
async fn test_steps_run_in_declared_order() {
  setup_tracing();
  let flow = recording_flow(&[("first", false), ("second", false), ("third", false)]);
  assert_eq!(flow.step_names().collect::<Vec<_>>(), vec!["first", "second", "third"]);

  let ctx = FlowContext::new(Trace::default());
  let outcome = flow.run(ctx.clone()).await.unwrap();

  assert_eq!(outcome, FlowOutcome::Completed);
  assert_eq!(ctx.read().visited, vec!["first", "second", "third"]);
}

#[tokio::test]
#[serial]
async fn test_stop_halts_remaining_steps() {
  setup_tracing();
  let mut flow = recording_flow(&[("first", false), ("second", false)]);
  flow
    .on_step("first", |_ctx: FlowContext<Trace>| async {
      Ok::<_, MenuError>(StepControl::Stop)
    })
    .unwrap();

  let ctx = FlowContext::new(Trace::default());
  let outcome = flow.run(ctx.clone()).await.unwrap();

  assert_eq!(outcome, FlowOutcome::Stopped);
  // The recording handler for "first" was registered before the stopping one.
  assert_eq!(ctx.read().visited, vec!["first"]);
}

#[tokio::test]
#[serial]
async fn test_handler_error_propagates() {
  setup_tracing();
  let mut flow = recording_flow(&[("first", false), ("second", false)]);
  flow
    .on_step("first", |_ctx: FlowContext<Trace>| async {
      Err::<StepControl, _>(MenuError::Status { status: 502 })
    })
    .unwrap();

  let ctx = FlowContext::new(Trace::default());
  let err = flow.run(ctx.clone()).await.unwrap_err();

  assert!(matches!(err, MenuError::Status { status: 502 }));
  assert_eq!(ctx.read().visited, vec!["first"]);
}

#[tokio::test]
#[serial]
async fn test_missing_handler_on_required_step_fails() {
  setup_tracing();
  let flow = Flow::<Trace, MenuError>::new("bare", &[("required", false)]);

  let err = flow.run(FlowContext::default()).await.unwrap_err();
  match err {
    MenuError::Flow {
      source: FlowError::HandlerMissing { step_name },
    } => assert_eq!(step_name, "required"),
    other => panic!("unexpected error: {:?}", other),
  }
}

#[tokio::test]
#[serial]
async fn test_optional_step_without_handler_is_skipped() {
  setup_tracing();
  let mut flow = Flow::<Trace, MenuError>::new("partial", &[("maybe", true), ("always", false)]);
  flow
    .on_step("always", |ctx: FlowContext<Trace>| async move {
      ctx.write().visited.push("always".to_string());
      Ok::<_, MenuError>(StepControl::Continue)
    })
    .unwrap();

  let ctx = FlowContext::new(Trace::default());
  assert_eq!(flow.run(ctx.clone()).await.unwrap(), FlowOutcome::Completed);
  assert_eq!(ctx.read().visited, vec!["always"]);

  flow.set_optional("always", true).unwrap();
  flow.set_optional("maybe", false).unwrap();
  assert!(flow.run(FlowContext::default()).await.is_err());
}

#[tokio::test]
#[serial]
async fn test_skip_condition_reads_flow_data() {
  setup_tracing();
  let mut flow = recording_flow(&[("first", false), ("middle", false), ("last", false)]);
  let skip: SkipCondition<Trace> = Arc::new(|data: &Trace| data.skip_middle);
  flow.set_skip_condition("middle", Some(skip)).unwrap();

  let ctx = FlowContext::new(Trace {
    skip_middle: true,
    ..Default::default()
  });
  flow.run(ctx.clone()).await.unwrap();
  assert_eq!(ctx.read().visited, vec!["first", "last"]);

  let ctx = FlowContext::new(Trace::default());
  flow.run(ctx.clone()).await.unwrap();
  assert_eq!(ctx.read().visited, vec!["first", "middle", "last"]);
}

#[test]
fn test_registering_unknown_step_is_rejected() {
  let mut flow = Flow::<Trace, MenuError>::new("named", &[("only", false)]);
  let err = flow
    .on_step("ghost", |_ctx: FlowContext<Trace>| async {
      Ok::<_, MenuError>(StepControl::Continue)
    })
    .unwrap_err();

  assert!(matches!(err, FlowError::StepNotFound { ref flow, ref step_name } if flow == "named" && step_name == "ghost"));
  assert!(flow.set_optional("ghost", true).is_err());
  assert!(flow.set_skip_condition("ghost", None).is_err());
}

#[test]
fn test_context_handles_share_data() {
  let ctx = FlowContext::new(Trace::default());
  let other = ctx.clone();
  assert_eq!(ctx.handle_count(), 2);

  other.write().visited.push("shared".to_string());
  assert_eq!(ctx.read().visited, vec!["shared"]);

  let ctx = ctx.try_into_inner().unwrap_err();
  drop(other);
  let data = ctx.try_into_inner().unwrap();
  assert_eq!(data.visited, vec!["shared"]);
}
