//! A trigger that considers only the public members of each context.

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
pub struct PublicTrigger {
    base: TriggerBase,
}

impl PublicTrigger {
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
            "public trigger built"
        );
        Ok(PublicTrigger { base })
    }
}

impl Trigger for PublicTrigger {
    fn get_trigger_base(&self) -> &TriggerBase {
        &self.base
    }

    fn as_super_trait(&self) -> &dyn Trigger {
        self
    }

    fn resolve(&self, name: &str) -> Result<ObjectRef> {
        first_answering(self, name, Reflection::PUBLIC)
    }

    fn extract_method(&self, context: &ObjectRef, name: &str) -> Result<MemberFn> {
        extract_with(context, name, Reflection::PUBLIC)
    }
}
