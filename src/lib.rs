//! # symbiont - ordered-context evaluation for deferred computations
//!
//! Run a closure against several objects at once. Every name the closure does
//! not define itself is looked up across three groups of contexts:
//! - **inner** - the objects you pass in, in the order you pass them
//! - **outer** - the object the closure was written against
//! - **kernel** - a process-wide fallback holding the built-ins
//!
//! A [`Direction`] such as `IOK` or `KOI` fixes the order of those groups, and
//! the first context that answers a name wins.
//!
//! ## Quick Start
//!
//! ```
//! use symbiont::ds::kernel::Kernel;
//! use symbiont::ds::member::{MemberFn, Visibility};
//! use symbiont::ds::object::{new_ordinary, write_object};
//! use symbiont::{Closure, Executor, Value, IOK, KOI};
//!
//! let kernel = Kernel::new();
//! kernel.define("greet", Visibility::Public, MemberFn::constant("kernel"));
//!
//! let widget = new_ordinary("Widget");
//! write_object(&widget).define_member("greet", Visibility::Public, MemberFn::constant("widget"));
//!
//! let closure = Closure::new(new_ordinary("Caller"), |scope| scope.call("greet", vec![]));
//! let executor = Executor::with_kernel(kernel);
//!
//! assert_eq!(
//!     executor.evaluate(&[widget.clone()], IOK, closure.clone()).unwrap(),
//!     Value::from("widget")
//! );
//! assert_eq!(
//!     executor.evaluate(&[widget], KOI, closure).unwrap(),
//!     Value::from("kernel")
//! );
//! ```
//!
//! ## Public and Private Evaluation
//!
//! [`Executor::evaluate`] sees only the public members of each context.
//! [`Executor::evaluate_private`] also sees private ones. Both have a
//! `*_method` counterpart that returns a [`BoundMethod`](ds::member::BoundMethod)
//! instead of running the closure.
//!
//! ## Reuse
//!
//! - **[`Isolator`]** - keeps one closure and a default direction, evaluates it
//!   against any number of context sets
//! - **[`Context`]** - lets an object evaluate closures with itself as the only
//!   inner context
//!
//! ## Architecture
//!
//! - **[`ds`]** - Objects, members, values, errors and the kernel
//! - **[`trigger`]** - Directions, closures and the two trigger variants
//! - **[`std_lib`]** - Kernel built-ins
//! - **[`executor`]**, **[`isolator`]**, **[`context`]** - Entry points
//! - **[`config`]** - TOML configuration

#[macro_use]
extern crate lazy_static;

pub mod config;
pub mod context;
pub mod ds;
pub mod executor;
pub mod isolator;
pub mod std_lib;
pub mod trigger;

pub use crate::config::SymbiontConfig;
pub use crate::context::{Context, ContextBundle};
pub use crate::ds::error::{Error, Result};
pub use crate::ds::kernel::Kernel;
pub use crate::ds::value::Value;
pub use crate::executor::Executor;
pub use crate::isolator::Isolator;
pub use crate::trigger::{Closure, Direction, PrivateTrigger, PublicTrigger, Trigger};

pub const OIK: Direction = Direction::OIK;
pub const OKI: Direction = Direction::OKI;
pub const IOK: Direction = Direction::IOK;
pub const IKO: Direction = Direction::IKO;
pub const KOI: Direction = Direction::KOI;
pub const KIO: Direction = Direction::KIO;
