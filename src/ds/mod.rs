pub mod error;
pub mod kernel;
pub mod member;
pub mod object;
pub mod reflection;
pub mod value;
