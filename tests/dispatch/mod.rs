use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};

use error_switch::{
    handle, handle_or, handle_or_suppress, must_handle, on_sentinel, on_type, BoxedError, Handled,
    Matchers,
};

use crate::fixtures::{
    replace, wrap, CustomError, ErrSentinel1, ErrSentinel2, Lookalike, StoreError, ValidationError,
};

fn message(result: Option<BoxedError>) -> String {
    result.expect("expected an error").to_string()
}

#[test]
fn absent_error_is_trivially_handled() {
    let (matched, result) = handle(None::<BoxedError>, &[]).into_parts();
    assert!(matched);
    assert!(result.is_none());

    let calls = AtomicUsize::new(0);
    let matchers = [on_sentinel(ErrSentinel1, |_| {
        calls.fetch_add(1, Ordering::SeqCst);
        replace("never")
    })];
    let (matched, result) = handle(None::<CustomError>, &matchers).into_parts();
    assert!(matched);
    assert!(result.is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn sentinel_matches_outermost_error() {
    let (matched, result) =
        handle(Some(ErrSentinel1), &[on_sentinel(ErrSentinel1, |_| replace("handled sentinel"))])
            .into_parts();

    assert!(matched);
    assert_eq!(message(result), "handled sentinel");
}

#[test]
fn sentinel_matches_through_nested_wrappers() {
    let err = wrap("outer", wrap("inner", ErrSentinel1));
    let (matched, result) =
        handle(Some(err), &[on_sentinel(ErrSentinel1, |_| replace("R"))]).into_parts();

    assert!(matched);
    assert_eq!(message(result), "R");
}

#[test]
fn sentinel_handler_receives_original_outer_error() {
    let err = wrap("loading profile", ErrSentinel1);
    let result = must_handle(Some(err), &[on_sentinel(ErrSentinel1, Some)]);

    assert_eq!(message(result), "loading profile: sentinel error 1");
}

#[test]
fn sentinel_does_not_match_on_message_alone() {
    let outcome = handle(Some(Lookalike), &[on_sentinel(ErrSentinel1, |_| replace("wrong"))]);

    assert!(outcome.is_unmatched());
}

#[test]
fn sentinel_compares_values_not_just_types() {
    let matchers = [on_sentinel(StoreError::NotFound, |_| replace("missing"))];

    assert!(handle(Some(wrap("get", StoreError::NotFound)), &matchers).is_matched());
    assert!(handle(Some(wrap("put", StoreError::Conflict)), &matchers).is_unmatched());
}

#[test]
fn typed_matcher_formats_from_fields() {
    let err = wrap("fetch", CustomError { code: 404, message: "not found" });
    let matchers = [on_type(|e: &CustomError| {
        Some(format!("handled custom error with code {}", e.code).into())
    })];
    let (matched, result) = handle(Some(err), &matchers).into_parts();

    assert!(matched);
    let text = message(result);
    assert!(text.contains("404"));
    assert_eq!(text, "handled custom error with code 404");
}

#[test]
fn typed_matcher_walks_deep_chains() {
    let base = CustomError { code: 500, message: "base" };
    let err = wrap("layer3", wrap("layer2", wrap("layer1", base)));

    let matchers = [on_type(|e: &CustomError| {
        Some(format!("found custom error at code {}", e.code).into())
    })];
    let result = must_handle(Some(err), &matchers);

    assert_eq!(message(result), "found custom error at code 500");
}

#[test]
fn typed_matcher_ignores_unrelated_types() {
    let err = wrap("submit", ValidationError { field: "email", value: "invalid" });
    let outcome = handle(Some(err), &[on_type(|_: &CustomError| replace("custom"))]);

    assert!(outcome.is_unmatched());
}

#[test]
fn typed_handler_sees_original_fields() {
    let original = CustomError { code: 403, message: "forbidden" };
    let seen = std::sync::Mutex::new(None);

    let (matched, _) = handle(
        Some(original.clone()),
        &[on_type(|e: &CustomError| {
            *seen.lock().unwrap() = Some(e.clone());
            None
        })],
    )
    .into_parts();

    assert!(matched);
    assert_eq!(seen.into_inner().unwrap(), Some(original));
}

#[test]
fn unmatched_error_is_returned_unchanged() {
    let original = CustomError { code: 418, message: "teapot" };
    let outcome = handle(
        Some(original.clone()),
        &[on_sentinel(ErrSentinel1, |_| None), on_type(|_: &ValidationError| None)],
    );

    match outcome {
        Handled::Unmatched(err) => {
            assert_eq!(err.downcast_ref::<CustomError>(), Some(&original));
        },
        Handled::Matched(_) => panic!("expected no match"),
    }
}

#[test]
fn first_matching_matcher_wins() {
    let second_calls = AtomicUsize::new(0);
    let matchers = [
        on_sentinel(ErrSentinel1, |_| replace("first handler")),
        on_sentinel(ErrSentinel1, |_| {
            second_calls.fetch_add(1, Ordering::SeqCst);
            replace("second handler")
        }),
    ];

    let result = must_handle(Some(ErrSentinel1), &matchers);

    assert_eq!(message(result), "first handler");
    assert_eq!(second_calls.load(Ordering::SeqCst), 0);
}

/// Typed error whose source is a sentinel.
#[derive(Debug)]
struct Timeout {
    cause: ErrSentinel2,
}

impl std::fmt::Display for Timeout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "timed out: {}", self.cause)
    }
}

impl std::error::Error for Timeout {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

#[test]
fn list_order_decides_between_typed_and_sentinel_matches() {
    let typed_first = [
        on_type(|_: &Timeout| replace("typed")),
        on_sentinel(ErrSentinel2, |_| replace("sentinel")),
    ];
    let sentinel_first = [
        on_sentinel(ErrSentinel2, |_| replace("sentinel")),
        on_type(|_: &Timeout| replace("typed")),
    ];

    let err = || wrap("polling", Timeout { cause: ErrSentinel2 });
    assert_eq!(message(must_handle(Some(err()), &typed_first)), "typed");
    assert_eq!(message(must_handle(Some(err()), &sentinel_first)), "sentinel");
}

#[test]
fn handler_may_suppress_error() {
    let (matched, result) =
        handle(Some(ErrSentinel1), &[on_sentinel(ErrSentinel1, |_| None)]).into_parts();

    assert!(matched);
    assert!(result.is_none());
}

#[test]
fn matchers_select_by_error_type() {
    let matchers = [
        on_type(|e: &CustomError| Some(format!("custom: {}", e.code).into())),
        on_type(|e: &ValidationError| Some(format!("validation: {}", e.field).into())),
    ];

    let custom = must_handle(Some(CustomError { code: 400, message: "bad request" }), &matchers);
    assert_eq!(message(custom), "custom: 400");

    let validation =
        must_handle(Some(ValidationError { field: "email", value: "invalid" }), &matchers);
    assert_eq!(message(validation), "validation: email");
}

#[test]
#[should_panic(expected = "handler panic")]
fn handler_panics_propagate() {
    let _ = handle(Some(ErrSentinel1), &[on_sentinel(ErrSentinel1, |_| panic!("handler panic"))]);
}

#[test]
fn repeated_dispatch_is_deterministic() {
    let matchers = Matchers::new()
        .on_sentinel(ErrSentinel2, |_| replace("two"))
        .on_type(|e: &CustomError| Some(format!("code {}", e.code).into()))
        .on_sentinel(ErrSentinel1, |_| replace("one"));

    for _ in 0..3 {
        let err = wrap("ctx", CustomError { code: 7, message: "seven" });
        assert_eq!(matchers.position(&err), Some(1));

        let copy = wrap("ctx", CustomError { code: 7, message: "seven" });
        let expected = matchers[1].invoke(Box::new(copy));
        let actual = matchers.must_handle(Some(err));
        assert_eq!(message(actual), message(expected));
    }
}

#[test]
fn matchers_are_shared_across_threads() {
    let hits = AtomicUsize::new(0);
    let matchers = Matchers::new()
        .on_sentinel(ErrSentinel1, |_| {
            hits.fetch_add(1, Ordering::SeqCst);
            None
        })
        .on_type(|e: &CustomError| Some(format!("code {}", e.code).into()));

    std::thread::scope(|scope| {
        for worker in 0..4u16 {
            let matchers = &matchers;
            scope.spawn(move || {
                assert!(matchers.must_handle(Some(wrap("worker", ErrSentinel1))).is_none());
                let result = matchers.must_handle(Some(CustomError { code: worker, message: "w" }));
                assert_eq!(message(result), format!("code {worker}"));
            });
        }
    });

    assert_eq!(hits.load(Ordering::SeqCst), 4);
}

#[test]
fn must_handle_passes_absent_error_through() {
    assert!(must_handle(None::<BoxedError>, &[]).is_none());
}

#[test]
#[should_panic(expected = "unhandled error of type")]
fn must_handle_panics_on_unmatched_error() {
    let _ = must_handle(Some("unmatched error"), &[on_sentinel(ErrSentinel1, |_| None)]);
}

#[test]
fn must_handle_panic_names_type_and_message() {
    let payload = catch_unwind(AssertUnwindSafe(|| {
        must_handle(
            Some(CustomError { code: 500, message: "server error" }),
            &[on_type(|_: &ValidationError| None)],
        )
    }))
    .expect_err("must_handle should panic");

    let text = payload.downcast_ref::<String>().expect("formatted panic message");
    assert!(text.contains("CustomError"));
    assert!(text.contains("custom error 500: server error"));
}

#[test]
fn must_handle_runs_the_matching_handler() {
    let result = must_handle(
        Some(ValidationError { field: "username", value: "" }),
        &[
            on_sentinel(ErrSentinel1, |_| replace("sentinel handler")),
            on_type(|_: &CustomError| replace("custom handler")),
            on_type(|e: &ValidationError| {
                Some(format!("validation handler: field={}", e.field).into())
            }),
        ],
    );

    assert_eq!(message(result), "validation handler: field=username");
}

#[test]
fn handle_or_applies_default_to_unmatched_error() {
    let result = handle_or(
        Some(wrap("db", ErrSentinel2)),
        Some(|e: BoxedError| Some(format!("unexpected error: {e}").into())),
        &[on_sentinel(ErrSentinel1, |_| replace("one"))],
    );

    assert_eq!(message(result), "unexpected error: db: sentinel error 2");
}

#[test]
fn handle_or_without_default_suppresses() {
    let result = handle_or(
        Some(ErrSentinel2),
        None::<fn(BoxedError) -> Option<BoxedError>>,
        &[on_sentinel(ErrSentinel1, |_| replace("one"))],
    );
    assert!(result.is_none());

    let result = handle_or_suppress(Some(ErrSentinel2), &[]);
    assert!(result.is_none());
}

#[test]
fn handle_or_prefers_matching_handler_over_default() {
    let default_calls = AtomicUsize::new(0);
    let result = handle_or(
        Some(ErrSentinel1),
        Some(|e: BoxedError| {
            default_calls.fetch_add(1, Ordering::SeqCst);
            Some(e)
        }),
        &[on_sentinel(ErrSentinel1, |_| replace("matched"))],
    );

    assert_eq!(message(result), "matched");
    assert_eq!(default_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn handle_or_passes_absent_error_through() {
    let result = handle_or(None::<BoxedError>, Some(|e: BoxedError| Some(e)), &[]);
    assert!(result.is_none());
}

#[test]
fn io_kind_matcher_sees_wrapped_io_errors() {
    use std::io::{Error, ErrorKind};

    let err = wrap("reading frame", Error::new(ErrorKind::UnexpectedEof, "short read"));
    let matchers = [
        error_switch::on_io_kind(ErrorKind::NotFound, |_| replace("missing")),
        error_switch::on_io_kind(ErrorKind::UnexpectedEof, |_| None),
    ];

    let (matched, result) = handle(Some(err), &matchers).into_parts();
    assert!(matched);
    assert!(result.is_none());
}

#[test]
fn handled_conversions() {
    let matched = Handled::Matched(replace("done"));
    assert!(matched.is_matched());
    assert_eq!(message(matched.into_result().expect("matched")), "done");

    let unmatched = Handled::Unmatched("left over".into());
    assert!(unmatched.is_unmatched());
    assert_eq!(unmatched.into_result().expect_err("unmatched").to_string(), "left over");

    let unmatched = Handled::Unmatched("left over".into());
    assert_eq!(message(unmatched.into_option()), "left over");
}

#[cfg(feature = "tracing")]
#[test]
fn dispatch_inside_span_behaves_the_same() {
    let span = tracing::info_span!("classify");
    let result = span.in_scope(|| {
        let matchers = [on_sentinel(ErrSentinel1, |_| replace("ok"))];
        must_handle(Some(wrap("ctx", ErrSentinel1)), &matchers)
    });

    assert_eq!(message(result), "ok");
}
