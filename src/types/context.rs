//! Validation context names and the scopes rules are declared for.

use crate::types::alloc_type::{Cow, String};
use core::fmt;
use smallvec::{smallvec, SmallVec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Name of a validation scenario such as `default`, `create` or `update`.
///
/// # Examples
///
/// ```
/// use validation_rail::Context;
///
/// let create = Context::new("create");
/// assert_eq!(create.name(), "create");
/// assert!(Context::default().is_default());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Context(Cow<'static, str>);

impl Context {
    /// The context every rule lands in unless told otherwise.
    pub const DEFAULT: Context = Context(Cow::Borrowed("default"));

    #[inline]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    #[inline]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_default(&self) -> bool {
        self.0 == "default"
    }
}

impl Default for Context {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<&'static str> for Context {
    #[inline]
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for Context {
    #[inline]
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl From<&Context> for Context {
    #[inline]
    fn from(context: &Context) -> Self {
        context.clone()
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a single rule registration lands inside a rule set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContextScope {
    /// Applies under every context.
    All,
    Named(Context),
}

impl From<Context> for ContextScope {
    #[inline]
    fn from(context: Context) -> Self {
        Self::Named(context)
    }
}

impl From<&'static str> for ContextScope {
    #[inline]
    fn from(name: &'static str) -> Self {
        Self::Named(Context::from_static(name))
    }
}

impl From<String> for ContextScope {
    #[inline]
    fn from(name: String) -> Self {
        Self::Named(Context::from(name))
    }
}

/// The set of contexts a validator declares itself for.
///
/// Defaults to `default` only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Contexts {
    All,
    Only(SmallVec<[Context; 1]>),
}

impl Contexts {
    /// Returns `true` if a rule declared with these contexts applies under `context`.
    pub fn includes(&self, context: &Context) -> bool {
        match self {
            Self::All => true,
            Self::Only(names) => names.contains(context),
        }
    }

    /// Expands into the scopes a rule set stores the rule under.
    pub fn scopes(&self) -> SmallVec<[ContextScope; 1]> {
        match self {
            Self::All => smallvec![ContextScope::All],
            Self::Only(names) => names.iter().cloned().map(ContextScope::Named).collect(),
        }
    }
}

impl Default for Contexts {
    #[inline]
    fn default() -> Self {
        Self::Only(smallvec![Context::DEFAULT])
    }
}
