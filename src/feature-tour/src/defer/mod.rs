//! Scope-bound deferred execution.
//!
//! A [`DeferStack`] collects actions while a scope runs and releases them
//! last-in-first-out when the scope ends.

mod stack;


pub use stack::{DeferStack, DeferredAction, scoped};
