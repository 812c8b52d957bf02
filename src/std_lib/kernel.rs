//! Kernel built-ins.
//!
//! Provides puts, inspect, format and raise on the kernel context.

use crate::ds::error::{Error, Result};
use crate::ds::kernel::Kernel;
use crate::ds::member::{MemberFn, Visibility};
use crate::ds::object::ObjectRef;
use crate::ds::value::Value;

/// Register the kernel built-ins.
pub fn register(kernel: &Kernel) {
    kernel.define("puts", Visibility::Public, MemberFn::Native(kernel_puts));
    kernel.define("inspect", Visibility::Public, MemberFn::Native(kernel_inspect));
    kernel.define("format", Visibility::Public, MemberFn::Native(kernel_format));
    kernel.define("raise", Visibility::Public, MemberFn::Native(kernel_raise));
}

/// puts - Write each argument on its own line to stdout.
fn kernel_puts(_receiver: &ObjectRef, args: Vec<Value>) -> Result<Value> {
    for arg in &args {
        println!("{}", arg);
    }
    Ok(Value::Nil)
}

/// inspect - Debug form of the first argument.
fn kernel_inspect(_receiver: &ObjectRef, args: Vec<Value>) -> Result<Value> {
    let value = args.into_iter().next().unwrap_or(Value::Nil);
    Ok(Value::Str(format!("{:?}", value)))
}

/// format - Replace each `{}` in the template with the next argument.
fn kernel_format(_receiver: &ObjectRef, args: Vec<Value>) -> Result<Value> {
    let mut args = args.into_iter();
    let template = match args.next() {
        Some(Value::Str(s)) => s,
        Some(other) => {
            return Err(Error::ArgumentError(format!(
                "format template must be a string, got {}",
                other.type_name()
            )))
        }
        None => return Err(Error::ArgumentError("format needs a template".to_string())),
    };

    let mut out = String::with_capacity(template.len());
    let mut pieces = template.split("{}").peekable();
    while let Some(piece) = pieces.next() {
        out.push_str(piece);
        if pieces.peek().is_some() {
            match args.next() {
                Some(arg) => out.push_str(&arg.to_string()),
                None => {
                    return Err(Error::ArgumentError(
                        "too few arguments for format template".to_string(),
                    ))
                }
            }
        }
    }
    Ok(Value::Str(out))
}

/// raise - Fail with the given message.
fn kernel_raise(_receiver: &ObjectRef, args: Vec<Value>) -> Result<Value> {
    let message = args
        .first()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "unhandled exception".to_string());
    Err(Error::Raised(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ds::reflection::send;

    fn kernel_object() -> ObjectRef {
        Kernel::with_builtins().object().clone()
    }

    #[test]
    fn test_format_substitutes_in_order() {
        let k = kernel_object();
        let result = send(
            &k,
            "format",
            vec![Value::from("{} and {}"), Value::Int(1), Value::from("two")],
        )
        .unwrap();
        assert_eq!(result, Value::from("1 and two"));
    }

    #[test]
    fn test_format_rejects_missing_arguments() {
        let k = kernel_object();
        let err = send(&k, "format", vec![Value::from("{} {}"), Value::Int(1)]).unwrap_err();
        assert!(matches!(err, Error::ArgumentError(_)));
        let err = send(&k, "format", vec![Value::Int(1)]).unwrap_err();
        assert!(matches!(err, Error::ArgumentError(_)));
    }

    #[test]
    fn test_inspect_and_puts() {
        let k = kernel_object();
        assert_eq!(
            send(&k, "inspect", vec![Value::from("x")]).unwrap(),
            Value::from("Value::Str(\"x\")")
        );
        assert_eq!(send(&k, "puts", vec![Value::from("hello")]).unwrap(), Value::Nil);
    }

    #[test]
    fn test_raise_fails_with_message() {
        let k = kernel_object();
        let err = send(&k, "raise", vec![Value::from("boom")]).unwrap_err();
        assert_eq!(err, Error::Raised("boom".to_string()));
    }
}
