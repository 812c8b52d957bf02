//! Built-in kernel members.
//!
//! This module provides the function to register every built-in member on a
//! kernel context.

pub mod kernel;

use crate::ds::kernel::Kernel;

/// Register all built-ins on the given kernel.
pub fn register_kernel_builtins(kernel: &Kernel) {
    kernel::register(kernel);
}
