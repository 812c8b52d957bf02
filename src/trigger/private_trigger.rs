//! A trigger that considers both public and private members of each context.
//!
//! Contexts without standard introspection are matched against their own and
//! inherited member tables, and bound by extracting the body straight from
//! those tables.

use tracing::debug;

use crate::ds::error::Result;
use crate::ds::kernel::Kernel;
use crate::ds::member::MemberFn;
use crate::ds::object::ObjectRef;
use crate::ds::reflection::Reflection;
use crate::trigger::{
    extract_with, first_answering, Closure, Direction, Trigger, TriggerBase,
};

#[derive(Debug)]
pub struct PrivateTrigger {
    base: TriggerBase,
}

impl PrivateTrigger {
    pub fn new(
        inner_contexts: Vec<ObjectRef>,
        direction: Direction,
        closure: Option<Closure>,
        kernel: &Kernel,
    ) -> Result<Self> {
        let base = TriggerBase::new(inner_contexts, direction, closure, kernel)?;
        debug!(
            direction = %direction,
            inner = base.inner_contexts.len(),
            "private trigger built"
        );
        Ok(PrivateTrigger { base })
    }
}

impl Trigger for PrivateTrigger {
    fn get_trigger_base(&self) -> &TriggerBase {
        &self.base
    }

    fn as_super_trait(&self) -> &dyn Trigger {
        self
    }

    fn resolve(&self, name: &str) -> Result<ObjectRef> {
        first_answering(self, name, Reflection::PRIVATE)
    }

    fn extract_method(&self, context: &ObjectRef, name: &str) -> Result<MemberFn> {
        extract_with(context, name, Reflection::PRIVATE)
    }
}
