//! Per-object evaluation capability.
//!
//! Anything that implements [`Context`] can evaluate closures with itself as
//! the sole inner context. [`ContextBundle`] pairs an object with a default
//! direction; plain [`ObjectRef`]s use `IOK`.

use std::fmt;

use crate::config::SymbiontConfig;
use crate::ds::error::Result;
use crate::ds::member::BoundMethod;
use crate::ds::object::{read_object, ObjectRef};
use crate::ds::value::Value;
use crate::executor::Executor;
use crate::trigger::{Closure, Direction};

pub trait Context {
    fn context_object(&self) -> ObjectRef;

    fn default_direction(&self) -> Direction {
        Direction::IOK
    }

    fn executor(&self) -> Executor {
        Executor::new()
    }

    fn evaluate(
        &self,
        direction: Option<Direction>,
        closure: impl Into<Option<Closure>>,
    ) -> Result<Value> {
        self.executor().evaluate(
            &[self.context_object()],
            direction.unwrap_or_else(|| self.default_direction()),
            closure,
        )
    }

    fn evaluate_private(
        &self,
        direction: Option<Direction>,
        closure: impl Into<Option<Closure>>,
    ) -> Result<Value> {
        self.executor().evaluate_private(
            &[self.context_object()],
            direction.unwrap_or_else(|| self.default_direction()),
            closure,
        )
    }

    fn public_method(
        &self,
        name: &str,
        direction: Option<Direction>,
        closure: impl Into<Option<Closure>>,
    ) -> Result<BoundMethod> {
        self.executor().public_method(
            name,
            &[self.context_object()],
            direction.unwrap_or_else(|| self.default_direction()),
            closure,
        )
    }

    fn private_method(
        &self,
        name: &str,
        direction: Option<Direction>,
        closure: impl Into<Option<Closure>>,
    ) -> Result<BoundMethod> {
        self.executor().private_method(
            name,
            &[self.context_object()],
            direction.unwrap_or_else(|| self.default_direction()),
            closure,
        )
    }
}

impl Context for ObjectRef {
    fn context_object(&self) -> ObjectRef {
        self.clone()
    }
}

/// An object together with the direction and executor its evaluations use.
#[derive(Clone)]
pub struct ContextBundle {
    object: ObjectRef,
    default_direction: Direction,
    executor: Executor,
}

impl ContextBundle {
    pub fn new(object: ObjectRef, default_direction: Direction) -> Self {
        ContextBundle {
            object,
            default_direction,
            executor: Executor::new(),
        }
    }

    pub fn from_config(object: ObjectRef, config: &SymbiontConfig) -> Self {
        ContextBundle {
            object,
            default_direction: config.default_direction,
            executor: Executor::from_config(config),
        }
    }

    pub fn with_executor(mut self, executor: Executor) -> Self {
        self.executor = executor;
        self
    }

    pub fn object(&self) -> &ObjectRef {
        &self.object
    }
}

impl fmt::Debug for ContextBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ContextBundle({}, {})",
            read_object(&self.object).name(),
            self.default_direction
        )
    }
}

impl Context for ContextBundle {
    fn context_object(&self) -> ObjectRef {
        self.object.clone()
    }

    fn default_direction(&self) -> Direction {
        self.default_direction
    }

    fn executor(&self) -> Executor {
        self.executor.clone()
    }
}
