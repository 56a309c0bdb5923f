//! Per-thread override stack for what `default` resolves to.
//!
//! Each rule set is keyed by its [`RuleSetId`], so overriding one type's
//! default leaves every other type alone. Threads never see each other's
//! overrides.

use crate::rules::contextual::RuleSetId;
use crate::types::Context;
use core::marker::PhantomData;
use std::cell::RefCell;
use std::vec::Vec;

thread_local! {
    static OVERRIDES: RefCell<Vec<(RuleSetId, Context)>> = const { RefCell::new(Vec::new()) };
}

/// Innermost active override for `owner` on this thread.
pub(crate) fn current(owner: RuleSetId) -> Option<Context> {
    OVERRIDES.with(|stack| {
        stack.borrow().iter().rev().find(|(id, _)| *id == owner).map(|(_, context)| context.clone())
    })
}

pub(crate) fn push(owner: RuleSetId, context: Context) -> DefaultContextGuard {
    #[cfg(feature = "tracing")]
    tracing::trace!(rule_set = ?owner, context = %context, "pushed default validation context");

    OVERRIDES.with(|stack| stack.borrow_mut().push((owner, context)));
    DefaultContextGuard { owner, _thread_bound: PhantomData }
}

fn pop(owner: RuleSetId) {
    // The stack may already be gone when a guard outlives thread-local teardown.
    let _ = OVERRIDES.try_with(|stack| {
        let mut stack = stack.borrow_mut();
        if let Some(index) = stack.iter().rposition(|(id, _)| *id == owner) {
            let (_, _context) = stack.remove(index);

            #[cfg(feature = "tracing")]
            tracing::trace!(rule_set = ?owner, context = %_context, "popped default validation context");
        }
    });
}

/// Keeps a default-context override active until dropped.
///
/// Dropping restores the previous default on every exit path, unwinding
/// included. The guard is tied to the thread that created it.
#[must_use = "the override ends as soon as the guard is dropped"]
#[derive(Debug)]
pub struct DefaultContextGuard {
    owner: RuleSetId,
    _thread_bound: PhantomData<*const ()>,
}

impl Drop for DefaultContextGuard {
    fn drop(&mut self) {
        pop(self.owner);
    }
}
