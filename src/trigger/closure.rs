//! Deferred computations paired with their defining scope.

use std::fmt;
use std::sync::Arc;

use crate::ds::error::Result;
use crate::ds::object::{read_object, ObjectRef};
use crate::ds::value::Value;
use crate::trigger::Trigger;

pub type ClosureBody = dyn Fn(&dyn Trigger) -> Result<Value> + Send + Sync;

/// A closure body plus the object it was written against.
///
/// The body receives the running trigger and addresses every name it does not
/// define itself through it, e.g. `scope.call("greet", vec![])`. The outer
/// object is fixed when the closure is created.
#[derive(Clone)]
pub struct Closure {
    outer: ObjectRef,
    body: Arc<ClosureBody>,
}

impl Closure {
    pub fn new<F>(outer: ObjectRef, body: F) -> Self
    where
        F: Fn(&dyn Trigger) -> Result<Value> + Send + Sync + 'static,
    {
        Closure {
            outer,
            body: Arc::new(body),
        }
    }

    pub fn outer(&self) -> &ObjectRef {
        &self.outer
    }

    pub fn invoke(&self, scope: &dyn Trigger) -> Result<Value> {
        (self.body)(scope)
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Closure(outer: {})", read_object(&self.outer).name())
    }
}
