//! Triggers: ordered-context dispatch for deferred computations.
//!
//! A trigger binds one [`Closure`] to one set of contexts and one
//! [`Direction`], and answers every name the closure asks for by scanning
//! those contexts in order.
//!
//! ## Context Groups
//!
//! ```text
//! inner   - caller-supplied objects, scanned in the order supplied
//! outer   - the object the closure was written against
//! kernel  - the process-wide fallback (or an injected one)
//! ```
//!
//! ## Resolution Flow
//!
//! When the closure calls `scope.call("greet", args)`:
//!
//! 1. **Flatten**: lay the three groups out in direction order
//!    (`IOK` => `[inner.., outer, kernel]`)
//! 2. **Scan**: ask each context, left to right, whether it answers `greet`
//!    under the trigger's visibility rule
//! 3. **Dispatch**: bind `greet` on the first context that answers and invoke it
//! 4. **Fail**: if nobody answers, return [`Error::UnresolvedMember`]
//!
//! Nothing is cached between calls. Removing a member from the winning context
//! makes the next resolution fall through to the next context in order.
//!
//! ### Visibility
//!
//! - **[`PublicTrigger`]**: only the externally visible surface of each context
//! - **[`PrivateTrigger`]**: public and implementation-restricted members
//!
//! Contexts that do not support [`Introspect`](crate::ds::object::Introspect)
//! are matched by walking their member tables
//! (see [`Reflection`](crate::ds::reflection::Reflection)).
//!
//! ### Calling Now vs. Later
//!
//! [`Trigger::call`] and [`Trigger::method_handle`] share one search:
//! `call` is `method_handle` followed by an immediate invocation, so the two can
//! never disagree about which context wins.
//!
//! ## Example
//!
//! ```
//! use symbiont::ds::kernel::Kernel;
//! use symbiont::ds::member::{MemberFn, Visibility};
//! use symbiont::ds::object::{new_ordinary, write_object};
//! use symbiont::ds::value::Value;
//! use symbiont::trigger::{Closure, Direction, PublicTrigger, Trigger};
//!
//! let widget = new_ordinary("Widget");
//! write_object(&widget).define_member("greet", Visibility::Public, MemberFn::constant("hi"));
//!
//! let closure = Closure::new(new_ordinary("Caller"), |scope| scope.call("greet", vec![]));
//! let trigger = PublicTrigger::new(vec![widget], Direction::IOK, Some(closure), &Kernel::new()).unwrap();
//! assert_eq!(trigger.run().unwrap(), Value::from("hi"));
//! ```

pub mod closure;
pub mod direction;
pub mod private_trigger;
pub mod public_trigger;

pub use closure::Closure;
pub use direction::{ContextGroup, Direction};
pub use private_trigger::PrivateTrigger;
pub use public_trigger::PublicTrigger;

use std::fmt;

use tracing::{debug, trace};

use crate::ds::error::{Error, Result};
use crate::ds::kernel::Kernel;
use crate::ds::member::{BoundMethod, MemberFn};
use crate::ds::object::{read_object, ObjectRef};
use crate::ds::reflection::Reflection;
use crate::ds::value::Value;

/// State shared by every trigger variant. Fixed at construction.
pub struct TriggerBase {
    closure: Closure,
    direction: Direction,
    inner_contexts: Vec<ObjectRef>,
    outer_context: ObjectRef,
    kernel_context: ObjectRef,
}

impl TriggerBase {
    /// Fails with `MissingClosure` when no closure is given and with
    /// `InvalidDirection` for a direction outside the six permutations.
    pub fn new(
        inner_contexts: Vec<ObjectRef>,
        direction: Direction,
        closure: Option<Closure>,
        kernel: &Kernel,
    ) -> Result<Self> {
        let closure = closure.ok_or(Error::MissingClosure)?;
        if !direction.is_valid() {
            return Err(Error::InvalidDirection(direction.to_string()));
        }
        let outer_context = closure.outer().clone();
        Ok(TriggerBase {
            closure,
            direction,
            inner_contexts,
            outer_context,
            kernel_context: kernel.object().clone(),
        })
    }
}

impl fmt::Debug for TriggerBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self
            .inner_contexts
            .iter()
            .map(|c| read_object(c).name().to_string())
            .collect();
        write!(
            f,
            "TriggerBase({}, inner: [{}], outer: {})",
            self.direction,
            names.join(", "),
            read_object(&self.outer_context).name()
        )
    }
}

pub trait Trigger {
    fn get_trigger_base(&self) -> &TriggerBase;

    fn as_super_trait(&self) -> &dyn Trigger;

    /// The first context, in direction order, able to answer `name`.
    fn resolve(&self, name: &str) -> Result<ObjectRef>;

    /// The body of `name` on an already resolved context.
    fn extract_method(&self, context: &ObjectRef, name: &str) -> Result<MemberFn>;

    fn direction(&self) -> Direction {
        self.get_trigger_base().direction
    }

    fn closure(&self) -> &Closure {
        &self.get_trigger_base().closure
    }

    fn inner_contexts(&self) -> &[ObjectRef] {
        &self.get_trigger_base().inner_contexts
    }

    fn outer_context(&self) -> &ObjectRef {
        &self.get_trigger_base().outer_context
    }

    fn kernel_context(&self) -> &ObjectRef {
        &self.get_trigger_base().kernel_context
    }

    fn flattened_contexts(&self) -> Vec<ObjectRef> {
        let base = self.get_trigger_base();
        base.direction
            .flatten(&base.inner_contexts, &base.outer_context, &base.kernel_context)
    }

    /// Run the closure with this trigger as its scope.
    fn run(&self) -> Result<Value> {
        self.closure().invoke(self.as_super_trait())
    }

    fn method_handle(&self, name: &str) -> Result<BoundMethod> {
        let context = self.resolve(name)?;
        let body = self.extract_method(&context, name)?;
        Ok(BoundMethod::new(context, name, body))
    }

    fn call(&self, name: &str, args: Vec<Value>) -> Result<Value> {
        self.method_handle(name)?.call(args)
    }

    fn responds_to(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }
}

fn visibility_label(reflection: Reflection) -> &'static str {
    if reflection.include_private() {
        "private"
    } else {
        "public"
    }
}

/// Scan the directed contexts left to right; the first one that answers wins.
pub(crate) fn first_answering(
    trigger: &dyn Trigger,
    name: &str,
    reflection: Reflection,
) -> Result<ObjectRef> {
    for (position, context) in trigger.flattened_contexts().into_iter().enumerate() {
        let answers = {
            let object = read_object(&context);
            let answers = reflection.answers(&**object, name);
            if answers {
                trace!(
                    member = name,
                    context = object.name(),
                    position,
                    visibility = visibility_label(reflection),
                    "resolved member"
                );
            }
            answers
        };
        if answers {
            return Ok(context);
        }
    }
    debug!(
        member = name,
        direction = %trigger.direction(),
        visibility = visibility_label(reflection),
        "no context answers member"
    );
    Err(Error::unresolved(name))
}

pub(crate) fn extract_with(
    context: &ObjectRef,
    name: &str,
    reflection: Reflection,
) -> Result<MemberFn> {
    let object = read_object(context);
    reflection
        .method(&**object, name)
        .ok_or_else(|| Error::no_method(name, format!("#<{}>", object.name())))
}
