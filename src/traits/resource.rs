use crate::types::alloc_type::{BTreeMap, String};
use crate::types::Value;

/// Host object contract: attribute values by name.
///
/// The engine never mutates a resource; it only reads attributes through
/// this accessor, fresh on every evaluation.
///
/// # Examples
///
/// ```
/// use validation_rail::{Resource, Value};
///
/// struct Person {
///     age: Option<i64>,
/// }
///
/// impl Resource for Person {
///     fn attribute(&self, name: &str) -> Value {
///         match name {
///             "age" => self.age.into(),
///             _ => Value::Nil,
///         }
///     }
/// }
///
/// let person = Person { age: Some(30) };
/// assert_eq!(person.attribute("age"), Value::Integer(30));
/// assert_eq!(person.attribute("missing"), Value::Nil);
/// ```
pub trait Resource {
    /// Current value of `name`; [`Value::Nil`] when the resource has no such attribute.
    fn attribute(&self, name: &str) -> Value;
}

impl Resource for BTreeMap<String, Value> {
    fn attribute(&self, name: &str) -> Value {
        self.get(name).cloned().unwrap_or_default()
    }
}

#[cfg(feature = "std")]
impl<S: std::hash::BuildHasher> Resource for std::collections::HashMap<String, Value, S> {
    fn attribute(&self, name: &str) -> Value {
        self.get(name).cloned().unwrap_or_default()
    }
}

impl<R: Resource + ?Sized> Resource for &R {
    #[inline]
    fn attribute(&self, name: &str) -> Value {
        (**self).attribute(name)
    }
}
