extern crate symbiont;

use symbiont::ds::kernel::Kernel;
use symbiont::ds::member::{MemberFn, Visibility};
use symbiont::ds::object::{new_basic, new_ordinary, write_object, ObjectRef};
use symbiont::Closure;

/// Build an ordinary object whose members return constant strings.
pub fn object_with(name: &str, members: &[(&str, Visibility, &str)]) -> ObjectRef {
    let object = new_ordinary(name);
    define_all(&object, members);
    object
}

/// Same as `object_with`, but the object has no introspection support.
pub fn basic_with(name: &str, members: &[(&str, Visibility, &str)]) -> ObjectRef {
    let object = new_basic(name);
    define_all(&object, members);
    object
}

/// An isolated kernel carrying only the given members.
pub fn kernel_with(members: &[(&str, Visibility, &str)]) -> Kernel {
    let kernel = Kernel::new();
    for (name, visibility, value) in members {
        kernel.define(name, *visibility, MemberFn::constant(*value));
    }
    kernel
}

/// A closure written against `outer` that calls `name` with no arguments.
pub fn calling(outer: &ObjectRef, name: &'static str) -> Closure {
    Closure::new(outer.clone(), move |scope| scope.call(name, vec![]))
}

fn define_all(object: &ObjectRef, members: &[(&str, Visibility, &str)]) {
    let mut o = write_object(object);
    for (name, visibility, value) in members {
        o.define_member(name, *visibility, MemberFn::constant(*value));
    }
}
