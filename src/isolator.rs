//! Reusable closure wrapper.
//!
//! An [`Isolator`] keeps one closure and a default direction so the same
//! deferred computation can be evaluated against many context sets. Every call
//! builds a fresh trigger; the direction may be overridden per call.

use crate::ds::error::{Error, Result};
use crate::ds::kernel::Kernel;
use crate::ds::member::BoundMethod;
use crate::ds::object::ObjectRef;
use crate::ds::value::Value;
use crate::executor::Executor;
use crate::trigger::{Closure, Direction, PrivateTrigger, PublicTrigger};

#[derive(Clone, Debug)]
pub struct Isolator {
    default_direction: Direction,
    closure: Closure,
    executor: Executor,
}

impl Isolator {
    /// Fails with `MissingClosure` when no closure is given and with
    /// `InvalidDirection` when the default direction is malformed.
    pub fn new(default_direction: Direction, closure: impl Into<Option<Closure>>) -> Result<Self> {
        let closure = closure.into().ok_or(Error::MissingClosure)?;
        if !default_direction.is_valid() {
            return Err(Error::InvalidDirection(default_direction.to_string()));
        }
        Ok(Isolator {
            default_direction,
            closure,
            executor: Executor::new(),
        })
    }

    pub fn with_kernel(mut self, kernel: Kernel) -> Self {
        self.executor = Executor::with_kernel(kernel);
        self
    }

    pub fn default_direction(&self) -> Direction {
        self.default_direction
    }

    pub fn closure(&self) -> &Closure {
        &self.closure
    }

    fn direction_or_default(&self, direction: Option<Direction>) -> Direction {
        direction.unwrap_or(self.default_direction)
    }

    pub fn evaluate(&self, contexts: &[ObjectRef], direction: Option<Direction>) -> Result<Value> {
        self.executor.evaluate(
            contexts,
            self.direction_or_default(direction),
            self.closure.clone(),
        )
    }

    pub fn evaluate_private(
        &self,
        contexts: &[ObjectRef],
        direction: Option<Direction>,
    ) -> Result<Value> {
        self.executor.evaluate_private(
            contexts,
            self.direction_or_default(direction),
            self.closure.clone(),
        )
    }

    pub fn public_method(
        &self,
        name: &str,
        contexts: &[ObjectRef],
        direction: Option<Direction>,
    ) -> Result<BoundMethod> {
        self.executor.public_method(
            name,
            contexts,
            self.direction_or_default(direction),
            self.closure.clone(),
        )
    }

    pub fn private_method(
        &self,
        name: &str,
        contexts: &[ObjectRef],
        direction: Option<Direction>,
    ) -> Result<BoundMethod> {
        self.executor.private_method(
            name,
            contexts,
            self.direction_or_default(direction),
            self.closure.clone(),
        )
    }

    pub fn public_trigger(
        &self,
        contexts: &[ObjectRef],
        direction: Option<Direction>,
    ) -> Result<PublicTrigger> {
        self.executor.public_trigger(
            contexts,
            self.direction_or_default(direction),
            self.closure.clone(),
        )
    }

    pub fn private_trigger(
        &self,
        contexts: &[ObjectRef],
        direction: Option<Direction>,
    ) -> Result<PrivateTrigger> {
        self.executor.private_trigger(
            contexts,
            self.direction_or_default(direction),
            self.closure.clone(),
        )
    }
}
