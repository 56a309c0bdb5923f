//! Seams between the engine and the code around it.
//!
//! - [`Resource`]: how the engine reads a host object's attributes
//! - [`Validator`]: one rule check, open for external rule kinds
//! - [`Validatable`]: validation entry points mixed into a resource type

pub mod resource;
pub mod validatable;
pub mod validator;

pub use resource::Resource;
pub use validatable::Validatable;
pub use validator::Validator;
