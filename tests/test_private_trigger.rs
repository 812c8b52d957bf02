extern crate symbiont;

mod symbiont_util;

use symbiont::ds::member::MemberFn;
use symbiont::ds::member::Visibility::{Private, Public};
use symbiont::ds::object::{new_ordinary, set_prototype, write_object};
use symbiont::ds::value::Value;
use symbiont::{Closure, Direction, Error, Executor, Trigger};
use symbiont_util::{basic_with, calling, kernel_with, object_with};

// ── Restricted members ───────────────────────────────────────────────

#[test]
fn test_restricted_member_visible_only_to_private_trigger() {
    let a = object_with("A", &[("info", Private, "A-priv")]);
    let outer = new_ordinary("O");
    let executor = Executor::with_kernel(kernel_with(&[]));

    let public = executor.evaluate(&[a.clone()], Direction::KOI, calling(&outer, "info"));
    assert_eq!(public.unwrap_err(), Error::unresolved("info"));

    let private = executor
        .evaluate_private(&[a], Direction::KOI, calling(&outer, "info"))
        .unwrap();
    assert_eq!(private, Value::from("A-priv"));
}

#[test]
fn test_direction_still_decides_between_private_members() {
    let a = object_with("A", &[("helper", Private, "A")]);
    let outer = object_with("O", &[("helper", Private, "O")]);
    let kernel = kernel_with(&[("helper", Private, "K")]);
    let executor = Executor::with_kernel(kernel);

    let cases = [
        (Direction::IOK, "A"),
        (Direction::OIK, "O"),
        (Direction::KIO, "K"),
    ];
    for (direction, expected) in cases.iter() {
        let result = executor
            .evaluate_private(&[a.clone()], *direction, calling(&outer, "helper"))
            .unwrap();
        assert_eq!(result, Value::from(*expected), "direction {}", direction);
    }
}

#[test]
fn test_private_trigger_answers_everything_public_trigger_does() {
    let a = object_with(
        "A",
        &[("shown", Public, "a-shown"), ("hidden", Private, "a-hidden")],
    );
    let outer = object_with("O", &[("outer_only", Public, "o")]);
    let kernel = kernel_with(&[("kernel_secret", Private, "k")]);
    let executor = Executor::with_kernel(kernel);
    let closure = calling(&outer, "shown");

    let public = executor
        .public_trigger(&[a.clone()], Direction::IOK, closure.clone())
        .unwrap();
    let private = executor
        .private_trigger(&[a], Direction::IOK, closure)
        .unwrap();

    for name in &["shown", "hidden", "outer_only", "kernel_secret", "missing"] {
        if public.responds_to(name) {
            assert!(private.responds_to(name), "{} lost under private lookup", name);
        }
    }
    assert!(!public.responds_to("hidden"));
    assert!(private.responds_to("hidden"));
    assert!(!public.responds_to("kernel_secret"));
    assert!(private.responds_to("kernel_secret"));
    assert!(!private.responds_to("missing"));
}

#[test]
fn test_unresolved_under_private_lookup() {
    let outer = new_ordinary("O");
    let err = Executor::with_kernel(kernel_with(&[]))
        .evaluate_private(&[], Direction::IOK, calling(&outer, "nothing"))
        .unwrap_err();
    assert!(err.is_unresolved_member());
    assert_eq!(err.to_string(), "no one is able to respond to `nothing`");
}

// ── Minimal-capability contexts ──────────────────────────────────────

#[test]
fn test_basic_object_contexts_are_inspected_through_tables() {
    let bare = basic_with("Bare", &[("info", Private, "bare-priv"), ("data", Public, "d")]);
    let outer = new_ordinary("O");
    let executor = Executor::with_kernel(kernel_with(&[]));

    assert_eq!(
        executor
            .evaluate_private(&[bare.clone()], Direction::IOK, calling(&outer, "info"))
            .unwrap(),
        Value::from("bare-priv")
    );
    assert_eq!(
        executor
            .evaluate(&[bare.clone()], Direction::IOK, calling(&outer, "data"))
            .unwrap(),
        Value::from("d")
    );
    assert!(executor
        .evaluate(&[bare], Direction::IOK, calling(&outer, "info"))
        .unwrap_err()
        .is_unresolved_member());
}

#[test]
fn test_basic_object_inherits_through_prototype() {
    let parent = object_with("Parent", &[("secret", Private, "from-parent")]);
    let child = basic_with("Child", &[]);
    assert!(set_prototype(&child, Some(parent)));

    let result = Executor::with_kernel(kernel_with(&[]))
        .evaluate_private(&[child], Direction::IOK, calling(&new_ordinary("O"), "secret"))
        .unwrap();
    assert_eq!(result, Value::from("from-parent"));
}

#[test]
fn test_mixed_contexts_keep_order() {
    let bare = basic_with("Bare", &[]);
    let full = object_with("Full", &[("x", Private, "full")]);
    let result = Executor::with_kernel(kernel_with(&[]))
        .evaluate_private(&[bare.clone(), full], Direction::IOK, calling(&new_ordinary("O"), "x"))
        .unwrap();
    assert_eq!(result, Value::from("full"));

    write_object(&bare).define_member("x", Private, MemberFn::constant("bare"));
    let closure = Closure::new(new_ordinary("O"), |scope| scope.call("x", vec![]));
    let result = Executor::with_kernel(kernel_with(&[]))
        .evaluate_private(&[bare], Direction::IOK, closure)
        .unwrap();
    assert_eq!(result, Value::from("bare"));
}
