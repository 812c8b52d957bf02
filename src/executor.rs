//! Entry point for evaluating closures against a set of contexts.
//!
//! An [`Executor`] builds a fresh trigger for every call and either runs the
//! closure straight away or hands back a bound method for one name. It keeps
//! nothing between calls except the kernel it was given.

use crate::config::SymbiontConfig;
use crate::ds::error::Result;
use crate::ds::kernel::Kernel;
use crate::ds::member::BoundMethod;
use crate::ds::object::ObjectRef;
use crate::ds::value::Value;
use crate::trigger::{Closure, Direction, PrivateTrigger, PublicTrigger, Trigger};

#[derive(Clone, Debug)]
pub struct Executor {
    kernel: Kernel,
}

impl Executor {
    /// An executor falling back to the process-wide kernel.
    pub fn new() -> Self {
        Executor {
            kernel: Kernel::global(),
        }
    }

    pub fn with_kernel(kernel: Kernel) -> Self {
        Executor { kernel }
    }

    /// Uses the global kernel when built-ins are enabled, an empty one otherwise.
    pub fn from_config(config: &SymbiontConfig) -> Self {
        if config.kernel.builtins {
            Self::new()
        } else {
            Self::with_kernel(Kernel::new())
        }
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Run the closure, resolving names against public members only.
    pub fn evaluate(
        &self,
        contexts: &[ObjectRef],
        direction: Direction,
        closure: impl Into<Option<Closure>>,
    ) -> Result<Value> {
        self.public_trigger(contexts, direction, closure)?.run()
    }

    /// Run the closure, resolving names against public and private members.
    pub fn evaluate_private(
        &self,
        contexts: &[ObjectRef],
        direction: Direction,
        closure: impl Into<Option<Closure>>,
    ) -> Result<Value> {
        self.private_trigger(contexts, direction, closure)?.run()
    }

    /// Bind `name` on the first context exposing it publicly, without invoking it.
    pub fn public_method(
        &self,
        name: &str,
        contexts: &[ObjectRef],
        direction: Direction,
        closure: impl Into<Option<Closure>>,
    ) -> Result<BoundMethod> {
        self.public_trigger(contexts, direction, closure)?
            .method_handle(name)
    }

    /// Bind `name` on the first context defining it at any visibility, without invoking it.
    pub fn private_method(
        &self,
        name: &str,
        contexts: &[ObjectRef],
        direction: Direction,
        closure: impl Into<Option<Closure>>,
    ) -> Result<BoundMethod> {
        self.private_trigger(contexts, direction, closure)?
            .method_handle(name)
    }

    pub fn public_trigger(
        &self,
        contexts: &[ObjectRef],
        direction: Direction,
        closure: impl Into<Option<Closure>>,
    ) -> Result<PublicTrigger> {
        PublicTrigger::new(contexts.to_vec(), direction, closure.into(), &self.kernel)
    }

    pub fn private_trigger(
        &self,
        contexts: &[ObjectRef],
        direction: Direction,
        closure: impl Into<Option<Closure>>,
    ) -> Result<PrivateTrigger> {
        PrivateTrigger::new(contexts.to_vec(), direction, closure.into(), &self.kernel)
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}
