//! Kernel context - the bottom of every directed context list.
//!
//! The kernel is the one context every trigger can fall back to. A single
//! process-wide instance is created lazily on first use and pre-loaded with the
//! built-ins from [`std_lib`](crate::std_lib). Host code may add or remove
//! kernel members at any time; triggers only ever read it.
//!
//! Isolated kernels can be created with [`Kernel::new`] or
//! [`Kernel::with_builtins`] and injected wherever a kernel is accepted.

use std::fmt;
use std::sync::Arc;

use crate::ds::member::{MemberFn, Visibility};
use crate::ds::object::{new_ordinary, read_object, write_object, ObjectRef};
use crate::ds::reflection::Reflection;
use crate::std_lib::register_kernel_builtins;

lazy_static! {
    static ref GLOBAL_KERNEL: Kernel = Kernel::with_builtins();
}

#[derive(Clone)]
pub struct Kernel {
    object: ObjectRef,
}

impl Kernel {
    /// An empty, isolated kernel.
    pub fn new() -> Self {
        Kernel {
            object: new_ordinary("Kernel"),
        }
    }

    /// An isolated kernel carrying the standard built-ins.
    pub fn with_builtins() -> Self {
        let kernel = Self::new();
        register_kernel_builtins(&kernel);
        kernel
    }

    /// The process-wide kernel shared by every trigger that is not given one.
    pub fn global() -> Self {
        GLOBAL_KERNEL.clone()
    }

    pub fn is_global(&self) -> bool {
        Arc::ptr_eq(&self.object, &GLOBAL_KERNEL.object)
    }

    pub fn object(&self) -> &ObjectRef {
        &self.object
    }

    pub fn define(&self, name: &str, visibility: Visibility, body: MemberFn) {
        write_object(&self.object).define_member(name, visibility, body);
    }

    /// Remove a kernel member. Returns `false` if it was not defined.
    pub fn undefine(&self, name: &str) -> bool {
        write_object(&self.object).remove_member(name).is_some()
    }

    pub fn responds_to(&self, name: &str, include_private: bool) -> bool {
        let reflection = if include_private {
            Reflection::PRIVATE
        } else {
            Reflection::PUBLIC
        };
        reflection.answers(&**read_object(&self.object), name)
    }
}

impl fmt::Debug for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_global() {
            write!(f, "Kernel(global)")
        } else {
            write!(f, "Kernel({})", read_object(&self.object).id())
        }
    }
}

impl Default for Kernel {
    fn default() -> Self {
        Self::global()
    }
}
