#![cfg(feature = "deferred")]
//! Tests for try_classify on immediate and deferred computations.
//!
//! Every scenario is run with the positional (tuple) form and the sequence
//! (array) form of the failure kind list.

mod common;

use common::{
    EvalError, NarrowTypeError, RangeError, SyntaxError, TypeError, failing, failing_later,
    succeeding, succeeding_later,
};
use futures::task::noop_waker;
use itry::prelude::*;
use rstest::rstest;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

type Outcome = Result<Classified<&'static str, BoxError>, BoxError>;

fn three_kinds() -> [Kind<'static, BoxError>; 3] {
    kinds![is::<TypeError>(), is::<RangeError>(), is::<SyntaxError>()]
}

fn failure_for(position: usize) -> BoxError {
    match position {
        1 => TypeError.into(),
        2 => RangeError.into(),
        _ => SyntaxError.into(),
    }
}

fn failure_type_at(classified: &Classified<&'static str, BoxError>, position: usize) -> bool {
    match classified.get(position) {
        Some(Slot::Failure(failure)) => {
            failure.is::<TypeError>()
                || failure.is::<RangeError>()
                || failure.is::<SyntaxError>()
                || failure.is::<NarrowTypeError>()
        }
        _ => false,
    }
}

// =============================================================================
// Immediate: success
// =============================================================================

#[rstest]
fn test_success_without_kinds() {
    let classified = try_classify(immediate(succeeding()), ()).unwrap();

    assert_eq!(classified.len(), 1);
    assert_eq!(classified.value(), Some(&"foo"));
}

#[rstest]
fn test_success_with_one_kind() {
    let positional = try_classify(immediate(succeeding()), (is::<TypeError>(),)).unwrap();
    let sequence = try_classify(immediate(succeeding()), kinds![is::<TypeError>()]).unwrap();

    assert_eq!(positional.len(), 1);
    assert_eq!(sequence.len(), 1);
    assert_eq!(positional.into_value(), Some("foo"));
    assert_eq!(sequence.into_value(), Some("foo"));
}

#[rstest]
fn test_success_with_three_kinds() {
    let positional = try_classify(
        immediate(succeeding()),
        (is::<TypeError>(), is::<RangeError>(), is::<SyntaxError>()),
    )
    .unwrap();
    let sequence = try_classify(immediate(succeeding()), three_kinds()).unwrap();

    assert!(matches!(positional.as_slice(), [Slot::Value("foo")]));
    assert!(matches!(sequence.as_slice(), [Slot::Value("foo")]));
}

// =============================================================================
// Immediate: unrecognized failures propagate
// =============================================================================

#[rstest]
fn test_one_kind_listed_but_not_it() {
    let positional = try_classify(immediate(failing(TypeError)), (is::<SyntaxError>(),));
    let sequence = try_classify(immediate(failing(TypeError)), kinds![is::<SyntaxError>()]);

    assert!(positional.unwrap_err().is::<TypeError>());
    assert!(sequence.unwrap_err().is::<TypeError>());
}

#[rstest]
fn test_three_kinds_listed_but_not_it() {
    let positional = try_classify(
        immediate(failing(TypeError)),
        (is::<SyntaxError>(), is::<RangeError>(), is::<EvalError>()),
    );
    let kinds: [Kind<'_, BoxError>; 3] =
        kinds![is::<SyntaxError>(), is::<RangeError>(), is::<EvalError>()];
    let sequence = try_classify(immediate(failing(TypeError)), kinds);

    assert!(positional.unwrap_err().is::<TypeError>());
    assert!(sequence.unwrap_err().is::<TypeError>());
}

// =============================================================================
// Immediate: classified failures
// =============================================================================

#[rstest]
fn test_no_kinds_listed_catches_everything() {
    let classified = try_classify(immediate(failing(TypeError)), ()).unwrap();

    assert_eq!(classified.len(), 2);
    assert!(classified[0].is_empty());
    assert!(classified.failure().unwrap().is::<TypeError>());
}

#[rstest]
fn test_empty_sequence_catches_everything() {
    let kinds: Vec<Kind<'_, BoxError>> = Vec::new();
    let classified = try_classify(immediate(failing(EvalError)), kinds).unwrap();

    assert_eq!(classified.len(), 2);
    assert!(classified.failure().unwrap().is::<EvalError>());
}

#[rstest]
fn test_one_kind_listed_and_it_matches() {
    let positional = try_classify(immediate(failing(TypeError)), (is::<TypeError>(),)).unwrap();
    let sequence = try_classify(immediate(failing(TypeError)), kinds![is::<TypeError>()]).unwrap();

    for classified in [positional, sequence] {
        assert_eq!(classified.len(), 2);
        assert!(classified[0].is_empty());
        assert!(failure_type_at(&classified, 1));
    }
}

#[rstest]
fn test_one_kind_listed_and_it_is_a_narrower_kind() {
    let narrow = NarrowTypeError { base: TypeError };

    let positional = try_classify(immediate(failing(narrow)), (in_chain::<TypeError>(),)).unwrap();
    let sequence =
        try_classify(immediate(failing(narrow)), kinds![in_chain::<TypeError>()]).unwrap();

    for classified in [positional, sequence] {
        assert_eq!(classified.len(), 2);
        assert!(classified.failure().unwrap().is::<NarrowTypeError>());
    }
}

#[rstest]
#[case::first(1)]
#[case::second(2)]
#[case::last(3)]
fn test_three_kinds_listed_positional(#[case] position: usize) {
    let classified = try_classify(
        immediate(|| Err(failure_for(position))),
        (is::<TypeError>(), is::<RangeError>(), is::<SyntaxError>()),
    )
    .unwrap();

    assert_eq!(classified.len(), position + 1);
    assert_eq!(classified.failure_position(), Some(position));
    assert!(failure_type_at(&classified, position));
    assert!(classified.iter().take(position).all(Slot::is_empty));
}

#[rstest]
#[case::first(1)]
#[case::second(2)]
#[case::last(3)]
fn test_three_kinds_listed_sequence(#[case] position: usize) {
    let classified = try_classify(immediate(|| Err(failure_for(position))), three_kinds()).unwrap();

    assert_eq!(classified.len(), position + 1);
    assert_eq!(classified.failure_position(), Some(position));
    assert!(failure_type_at(&classified, position));
    assert!(classified.iter().take(position).all(Slot::is_empty));
}

#[rstest]
fn test_earlier_kind_wins_over_later_match() {
    let narrow = NarrowTypeError { base: TypeError };

    let classified = try_classify(
        immediate(failing(narrow)),
        (in_chain::<TypeError>(), is::<NarrowTypeError>()),
    )
    .unwrap();

    assert_eq!(classified.failure_position(), Some(1));
}

#[rstest]
fn test_duplicate_kinds_report_earliest() {
    let classified = try_classify(
        immediate(failing(RangeError)),
        (is::<TypeError>(), is::<RangeError>(), is::<RangeError>()),
    )
    .unwrap();

    assert_eq!(classified.len(), 3);
    assert_eq!(classified.failure_position(), Some(2));
}

#[rstest]
fn test_anything_catches_the_rest() {
    let classified = try_classify(
        immediate(failing(EvalError)),
        (is::<TypeError>(), anything()),
    )
    .unwrap();

    assert_eq!(classified.failure_position(), Some(2));
}

#[rstest]
fn test_predicate_kinds_on_concrete_error_enum() {
    #[derive(Debug, PartialEq)]
    enum Fault {
        NotFound,
        Denied { user: u32 },
    }

    let outcome = try_classify(
        immediate(|| Err::<(), _>(Fault::Denied { user: 7 })),
        (
            |fault: &Fault| matches!(fault, Fault::NotFound),
            |fault: &Fault| matches!(fault, Fault::Denied { .. }),
        ),
    )
    .unwrap();

    assert!(matches!(
        outcome.as_slice(),
        [Slot::Empty, Slot::Empty, Slot::Failure(Fault::Denied { user: 7 })]
    ));
}

// =============================================================================
// Deferred: success
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_deferred_success_without_kinds() {
    let classified = try_classify(deferred(async { Ok::<_, BoxError>("foo") }), ())
        .await
        .unwrap();

    assert!(matches!(classified.as_slice(), [Slot::Value("foo")]));
}

#[rstest]
#[tokio::test]
async fn test_deferred_success_with_kinds() {
    let positional = try_classify(
        deferred(succeeding_later()),
        (is::<TypeError>(), is::<RangeError>(), is::<SyntaxError>()),
    )
    .await
    .unwrap();
    let sequence = try_classify(deferred(succeeding_later()), three_kinds())
        .await
        .unwrap();

    assert_eq!(positional.len(), 1);
    assert_eq!(sequence.len(), 1);
}

// =============================================================================
// Deferred: failures
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_deferred_unrecognized_failure_rejects() {
    let positional: Outcome = try_classify(
        deferred(failing_later(TypeError)),
        (is::<SyntaxError>(), is::<RangeError>(), is::<EvalError>()),
    )
    .await;
    let kinds: [Kind<'_, BoxError>; 1] = kinds![is::<SyntaxError>()];
    let sequence: Outcome = try_classify(deferred(failing_later(TypeError)), kinds).await;

    assert!(positional.unwrap_err().is::<TypeError>());
    assert!(sequence.unwrap_err().is::<TypeError>());
}

#[rstest]
#[tokio::test]
async fn test_deferred_no_kinds_catches_everything() {
    let classified = try_classify(deferred(failing_later(TypeError)), ())
        .await
        .unwrap();

    assert_eq!(classified.len(), 2);
    assert!(classified.failure().unwrap().is::<TypeError>());
}

#[rstest]
#[tokio::test]
async fn test_deferred_narrower_kind_matches() {
    let narrow = NarrowTypeError { base: TypeError };

    let classified = try_classify(deferred(failing_later(narrow)), (in_chain::<TypeError>(),))
        .await
        .unwrap();

    assert_eq!(classified.len(), 2);
    assert!(classified.failure().unwrap().is::<NarrowTypeError>());
}

#[rstest]
#[case::first(1)]
#[case::second(2)]
#[case::last(3)]
#[tokio::test]
async fn test_deferred_three_kinds_listed(#[case] position: usize) {
    let positional = try_classify(
        deferred(failing_nth(position)),
        (is::<TypeError>(), is::<RangeError>(), is::<SyntaxError>()),
    )
    .await
    .unwrap();
    let sequence = try_classify(deferred(failing_nth(position)), three_kinds())
        .await
        .unwrap();

    for classified in [positional, sequence] {
        assert_eq!(classified.len(), position + 1);
        assert_eq!(classified.failure_position(), Some(position));
        assert!(failure_type_at(&classified, position));
    }
}

async fn failing_nth(position: usize) -> Result<&'static str, BoxError> {
    tokio::task::yield_now().await;
    Err(failure_for(position))
}

// =============================================================================
// Parity
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_immediate_and_deferred_agree_on_shape() {
    let immediate_shape: Vec<bool> = try_classify(immediate(failing(RangeError)), three_kinds())
        .unwrap()
        .iter()
        .map(Slot::is_failure)
        .collect();
    let deferred_shape: Vec<bool> =
        try_classify(deferred(failing_later(RangeError)), three_kinds())
            .await
            .unwrap()
            .iter()
            .map(Slot::is_failure)
            .collect();

    assert_eq!(immediate_shape, deferred_shape);
    assert_eq!(immediate_shape, vec![false, false, true]);
}

// =============================================================================
// Poll after completion
// =============================================================================

/// A future that is ready with the same failure on every poll.
struct AlwaysFailing;

impl Future for AlwaysFailing {
    type Output = Result<&'static str, u8>;

    fn poll(self: Pin<&mut Self>, _context: &mut Context<'_>) -> Poll<Self::Output> {
        Poll::Ready(Err(1))
    }
}

#[rstest]
#[should_panic(expected = "TryClassifyFuture internal error")]
fn test_deferred_failure_is_not_classified_twice() {
    let waker = noop_waker();
    let mut context = Context::from_waker(&waker);
    let mut future = Box::pin(try_classify(deferred(AlwaysFailing), ()));

    match future.as_mut().poll(&mut context) {
        Poll::Ready(Ok(classified)) => assert_eq!(classified.failure(), Some(&1)),
        other => panic!("expected a classified failure, got {other:?}"),
    }
    let _ = future.as_mut().poll(&mut context);
}

#[rstest]
#[should_panic(expected = "TryClassifyFuture internal error")]
fn test_deferred_poll_after_success_panics() {
    let waker = noop_waker();
    let mut context = Context::from_waker(&waker);
    let mut future = Box::pin(try_classify(
        deferred(async { Ok::<_, BoxError>("foo") }),
        three_kinds(),
    ));

    assert!(matches!(future.as_mut().poll(&mut context), Poll::Ready(Ok(_))));
    let _ = future.as_mut().poll(&mut context);
}
