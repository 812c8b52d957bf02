//! Member lookup strategy.
//!
//! Objects that implement [`Introspect`](crate::ds::object::Introspect) are asked
//! directly. Minimal-capability objects are inspected by walking their own and
//! inherited member tables instead.

use crate::ds::error::{Error, Result};
use crate::ds::member::{Member, MemberFn};
use crate::ds::object::{read_object, Object, ObjectRef};
use crate::ds::value::Value;

/// First definition of `name` on the object or its prototype chain,
/// regardless of visibility.
pub fn find_member(object: &dyn Object, name: &str) -> Option<Member> {
    if let Some(member) = object.get_own_member(name) {
        return Some(member.clone());
    }
    let mut next = object.get_prototype_of();
    while let Some(proto) = next {
        let guard = read_object(&proto);
        if let Some(member) = guard.get_own_member(name) {
            return Some(member.clone());
        }
        next = guard.get_prototype_of();
    }
    None
}

/// Decides whether a context can answer a name under one visibility rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reflection {
    include_private: bool,
}
impl Reflection {
    /// Externally visible surface only.
    pub const PUBLIC: Reflection = Reflection {
        include_private: false,
    };

    /// Public and implementation-restricted members.
    pub const PRIVATE: Reflection = Reflection {
        include_private: true,
    };

    pub fn include_private(&self) -> bool {
        self.include_private
    }

    /// Table walk only; never consults `Introspect`.
    pub fn member_defined(&self, object: &dyn Object, name: &str) -> bool {
        self.extract_member(object, name).is_some()
    }

    /// Table walk only; never consults `Introspect`.
    pub fn extract_member(&self, object: &dyn Object, name: &str) -> Option<MemberFn> {
        find_member(object, name)
            .filter(|member| member.visibility.is_visible(self.include_private))
            .map(|member| member.body)
    }

    pub fn answers(&self, object: &dyn Object, name: &str) -> bool {
        match object.introspect() {
            Some(introspect) => introspect.respond_to(name, self.include_private),
            None => self.member_defined(object, name),
        }
    }

    pub fn method(&self, object: &dyn Object, name: &str) -> Option<MemberFn> {
        match object.introspect() {
            Some(introspect) => introspect.method(name, self.include_private),
            None => self.extract_member(object, name),
        }
    }
}

/// Invoke `name` on `object` ignoring visibility.
///
/// Fails with `Error::NoMethod` when the object has no such member.
pub fn send(object: &ObjectRef, name: &str, args: Vec<Value>) -> Result<Value> {
    let body = {
        let guard = read_object(object);
        Reflection::PRIVATE
            .method(&**guard, name)
            .ok_or_else(|| Error::no_method(name, format!("#<{}>", guard.name())))?
    };
    body.call(object, args)
}
