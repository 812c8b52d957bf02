use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::ds::member::{Member, MemberFn, Visibility};
use crate::ds::reflection::find_member;

/// Shared handle to a context object.
pub type ObjectRef = Arc<RwLock<Box<dyn Object>>>;

pub fn read_object(object: &ObjectRef) -> RwLockReadGuard<'_, Box<dyn Object>> {
    object.read().unwrap_or_else(PoisonError::into_inner)
}

pub fn write_object(object: &ObjectRef) -> RwLockWriteGuard<'_, Box<dyn Object>> {
    object.write().unwrap_or_else(PoisonError::into_inner)
}

pub fn new_object_ref(object: impl Object + 'static) -> ObjectRef {
    let object: Box<dyn Object> = Box::new(object);
    Arc::new(RwLock::new(object))
}

pub fn new_ordinary(name: &str) -> ObjectRef {
    new_object_ref(OrdinaryObject::new(name))
}

pub fn new_basic(name: &str) -> ObjectRef {
    new_object_ref(BasicObject::new(name))
}

pub struct ObjectBase {
    id: Uuid,
    name: String,
    members: HashMap<String, Member>,
    prototype: Option<ObjectRef>,
}
impl ObjectBase {
    pub fn new(name: impl Into<String>) -> Self {
        ObjectBase {
            id: Uuid::new_v4(),
            name: name.into(),
            members: HashMap::new(),
            prototype: None,
        }
    }
}

/// The standard "can you answer this name / hand me a callable" capability.
pub trait Introspect {
    fn respond_to(&self, name: &str, include_private: bool) -> bool;

    fn method(&self, name: &str, include_private: bool) -> Option<MemberFn>;
}

pub trait Object: Send + Sync {
    fn get_object_base_mut(&mut self) -> &mut ObjectBase;

    fn get_object_base(&self) -> &ObjectBase;

    /// `None` marks a minimal-capability object that can only be inspected
    /// through its member tables.
    fn introspect(&self) -> Option<&dyn Introspect>;

    fn id(&self) -> Uuid {
        self.get_object_base().id
    }

    fn name(&self) -> &str {
        &self.get_object_base().name
    }

    fn get_prototype_of(&self) -> Option<ObjectRef> {
        self.get_object_base().prototype.clone()
    }

    fn get_own_member(&self, name: &str) -> Option<&Member> {
        self.get_object_base().members.get(name)
    }

    fn own_member_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.get_object_base().members.keys().cloned().collect();
        names.sort();
        names
    }

    fn define_member(&mut self, name: &str, visibility: Visibility, body: MemberFn) {
        self.get_object_base_mut()
            .members
            .insert(name.to_string(), Member::new(visibility, body));
    }

    fn remove_member(&mut self, name: &str) -> Option<Member> {
        self.get_object_base_mut().members.remove(name)
    }

    fn set_member_visibility(&mut self, name: &str, visibility: Visibility) -> bool {
        match self.get_object_base_mut().members.get_mut(name) {
            Some(member) => {
                member.visibility = visibility;
                true
            }
            None => false,
        }
    }
}

/// Link `object` to `prototype` for member inheritance.
/// Returns `false` (and leaves the chain untouched) if the link would form a cycle.
pub fn set_prototype(object: &ObjectRef, prototype: Option<ObjectRef>) -> bool {
    let mut next = prototype.clone();
    while let Some(p) = next {
        if Arc::ptr_eq(&p, object) {
            return false;
        }
        next = read_object(&p).get_prototype_of();
    }
    write_object(object).get_object_base_mut().prototype = prototype;
    true
}

pub type Responder = dyn Fn(&str, bool) -> Option<MemberFn> + Send + Sync;

/// Full-capability object: answers from its member tables, then from an
/// optional responder for names it synthesizes on demand.
pub struct OrdinaryObject {
    base: ObjectBase,
    responder: Option<Arc<Responder>>,
}
impl OrdinaryObject {
    pub fn new(name: &str) -> Self {
        OrdinaryObject {
            base: ObjectBase::new(name),
            responder: None,
        }
    }

    pub fn with_responder<F>(mut self, responder: F) -> Self
    where
        F: Fn(&str, bool) -> Option<MemberFn> + Send + Sync + 'static,
    {
        self.responder = Some(Arc::new(responder));
        self
    }
}
impl Object for OrdinaryObject {
    fn get_object_base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }

    fn get_object_base(&self) -> &ObjectBase {
        &self.base
    }

    fn introspect(&self) -> Option<&dyn Introspect> {
        Some(self)
    }
}
impl Introspect for OrdinaryObject {
    fn respond_to(&self, name: &str, include_private: bool) -> bool {
        self.method(name, include_private).is_some()
    }

    fn method(&self, name: &str, include_private: bool) -> Option<MemberFn> {
        match find_member(self, name) {
            Some(member) if member.visibility.is_visible(include_private) => Some(member.body),
            Some(_) => None,
            None => self
                .responder
                .as_ref()
                .and_then(|responder| responder(name, include_private)),
        }
    }
}
impl fmt::Debug for OrdinaryObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrdinaryObject({}#{})", self.base.name, self.base.id)
    }
}

/// Minimal-capability object without the standard introspection calls.
pub struct BasicObject {
    base: ObjectBase,
}
impl BasicObject {
    pub fn new(name: &str) -> Self {
        BasicObject {
            base: ObjectBase::new(name),
        }
    }
}
impl Object for BasicObject {
    fn get_object_base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }

    fn get_object_base(&self) -> &ObjectBase {
        &self.base
    }

    fn introspect(&self) -> Option<&dyn Introspect> {
        None
    }
}
