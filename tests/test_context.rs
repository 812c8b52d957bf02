extern crate symbiont;

mod symbiont_util;

use symbiont::config::KernelConfig;
use symbiont::ds::member::Visibility::{Private, Public};
use symbiont::ds::object::new_ordinary;
use symbiont::ds::value::Value;
use symbiont::{Closure, Context, ContextBundle, Direction, Error, Executor, SymbiontConfig};
use symbiont_util::{calling, kernel_with, object_with};

// ── Plain objects ────────────────────────────────────────────────────

#[test]
fn test_object_evaluates_with_itself_as_inner_context() {
    let widget = object_with("Widget", &[("color", Public, "red")]);
    let outer = object_with("Caller", &[("color", Public, "blue")]);

    assert_eq!(widget.default_direction(), Direction::IOK);
    assert_eq!(
        widget.evaluate(None, calling(&outer, "color")).unwrap(),
        Value::from("red")
    );
    assert_eq!(
        widget
            .evaluate(Some(Direction::OIK), calling(&outer, "color"))
            .unwrap(),
        Value::from("blue")
    );
}

#[test]
fn test_object_private_evaluation() {
    let widget = object_with("Widget", &[("secret", Private, "s")]);
    let outer = new_ordinary("Caller");

    assert!(widget
        .evaluate(None, calling(&outer, "secret"))
        .unwrap_err()
        .is_unresolved_member());
    assert_eq!(
        widget
            .evaluate_private(None, calling(&outer, "secret"))
            .unwrap(),
        Value::from("s")
    );
    let handle = widget
        .private_method("secret", None, calling(&outer, "secret"))
        .unwrap();
    assert_eq!(handle.call(vec![]).unwrap(), Value::from("s"));
}

#[test]
fn test_object_requires_closure() {
    let widget = new_ordinary("Widget");
    let none: Option<Closure> = None;
    assert_eq!(
        widget.public_method("x", None, none).unwrap_err(),
        Error::MissingClosure
    );
}

// ── Bundles ──────────────────────────────────────────────────────────

#[test]
fn test_bundle_default_direction_applies() {
    let widget = object_with("Widget", &[("greet", Public, "W")]);
    let outer = new_ordinary("Caller");
    let bundle = ContextBundle::new(widget, Direction::KOI)
        .with_executor(Executor::with_kernel(kernel_with(&[("greet", Public, "K")])));

    assert_eq!(bundle.default_direction(), Direction::KOI);
    assert_eq!(
        bundle.evaluate(None, calling(&outer, "greet")).unwrap(),
        Value::from("K")
    );
    assert_eq!(
        bundle
            .evaluate(Some(Direction::IOK), calling(&outer, "greet"))
            .unwrap(),
        Value::from("W")
    );
    let handle = bundle
        .public_method("greet", None, calling(&outer, "greet"))
        .unwrap();
    assert_eq!(handle.call(vec![]).unwrap(), Value::from("K"));
}

#[test]
fn test_bundle_from_config() {
    let config = SymbiontConfig {
        default_direction: Direction::OKI,
        kernel: KernelConfig { builtins: false },
    };
    let widget = object_with("Widget", &[("greet", Public, "W")]);
    let outer = object_with("Caller", &[("greet", Public, "C")]);
    let bundle = ContextBundle::from_config(widget, &config);

    assert_eq!(bundle.default_direction(), Direction::OKI);
    assert!(!bundle.executor().kernel().is_global());
    assert_eq!(
        bundle.evaluate(None, calling(&outer, "greet")).unwrap(),
        Value::from("C")
    );
    assert!(bundle
        .evaluate_private(None, calling(&outer, "puts"))
        .unwrap_err()
        .is_unresolved_member());
}

// ── Custom implementors ──────────────────────────────────────────────

struct Account {
    record: symbiont::ds::object::ObjectRef,
}

impl Context for Account {
    fn context_object(&self) -> symbiont::ds::object::ObjectRef {
        self.record.clone()
    }

    fn default_direction(&self) -> Direction {
        Direction::OIK
    }

    fn executor(&self) -> Executor {
        Executor::with_kernel(kernel_with(&[]))
    }
}

#[test]
fn test_custom_context_overrides_defaults() {
    let account = Account {
        record: object_with("Record", &[("balance", Public, "10")]),
    };
    let outer = object_with("Caller", &[("balance", Public, "0")]);

    assert_eq!(
        account.evaluate(None, calling(&outer, "balance")).unwrap(),
        Value::from("0")
    );
    assert_eq!(
        account
            .evaluate(Some(Direction::IKO), calling(&outer, "balance"))
            .unwrap(),
        Value::from("10")
    );
}
