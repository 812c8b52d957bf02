//! Members: the named, callable entries in an object's member table.

use std::fmt;
use std::sync::Arc;

use crate::ds::error::Result;
use crate::ds::object::{read_object, ObjectRef};
use crate::ds::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Part of the object's externally visible surface.
    Public,
    /// Implementation-restricted; only reachable by unrestricted lookup.
    Private,
}
impl Visibility {
    pub fn is_visible(self, include_private: bool) -> bool {
        include_private || self == Visibility::Public
    }
}

/// Function signature for members backed by a plain function.
/// Receives the receiving object and the call arguments.
pub type NativeFn = fn(receiver: &ObjectRef, args: Vec<Value>) -> Result<Value>;

pub type DynamicFn = dyn Fn(&ObjectRef, Vec<Value>) -> Result<Value> + Send + Sync;

/// Body of a member - either a function pointer or a shared closure.
#[derive(Clone)]
pub enum MemberFn {
    /// Direct function pointer.
    Native(NativeFn),

    /// Closure-backed body, shared between every handle bound to it.
    Dynamic(Arc<DynamicFn>),
}
impl MemberFn {
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn(&ObjectRef, Vec<Value>) -> Result<Value> + Send + Sync + 'static,
    {
        MemberFn::Dynamic(Arc::new(f))
    }

    /// A body that ignores its arguments and returns `value`.
    pub fn constant(value: impl Into<Value>) -> Self {
        let value = value.into();
        MemberFn::dynamic(move |_, _| Ok(value.clone()))
    }

    pub fn call(&self, receiver: &ObjectRef, args: Vec<Value>) -> Result<Value> {
        match self {
            MemberFn::Native(f) => f(receiver, args),
            MemberFn::Dynamic(f) => f(receiver, args),
        }
    }
}
impl fmt::Debug for MemberFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberFn::Native(_) => write!(f, "MemberFn::Native"),
            MemberFn::Dynamic(_) => write!(f, "MemberFn::Dynamic"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Member {
    pub visibility: Visibility,
    pub body: MemberFn,
}
impl Member {
    pub fn new(visibility: Visibility, body: MemberFn) -> Self {
        Member { visibility, body }
    }
}

/// A callable bound to the context that won resolution.
///
/// The body is captured when the handle is created, so later changes to the
/// receiver's member table do not affect it.
#[derive(Clone)]
pub struct BoundMethod {
    receiver: ObjectRef,
    name: String,
    body: MemberFn,
}
impl BoundMethod {
    pub fn new(receiver: ObjectRef, name: impl Into<String>, body: MemberFn) -> Self {
        BoundMethod {
            receiver,
            name: name.into(),
            body,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn receiver(&self) -> &ObjectRef {
        &self.receiver
    }

    pub fn call(&self, args: Vec<Value>) -> Result<Value> {
        self.body.call(&self.receiver, args)
    }
}
impl fmt::Debug for BoundMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BoundMethod({}#{})",
            read_object(&self.receiver).name(),
            self.name
        )
    }
}
