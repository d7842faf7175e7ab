//! The context chain that carries tags between call-chain participants.
//!
//! A [`Context`] is an immutable chain of key-value nodes. Attaching a tag
//! produces a new child context and leaves the original untouched, so a
//! callee can extend its own context freely without the additions ever
//! becoming visible to its caller. Lookups walk from the newest node back
//! to the root, so the most recently attached value for a key shadows
//! older ones.
//!
//! Contexts are cheap to clone (one `Arc` bump) and safe to share across
//! threads; the intended pattern is one context shared down a call tree,
//! with each participant reconstructing its own [`Logger`] from it.
//!
//! [`Logger`]: crate::Logger

use crate::value::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// An immutable link in a chain of tag bindings.
///
/// # Examples
///
/// ```
/// use ctxlog::Context;
///
/// let root = Context::new();
/// let ctx = root.with_tag("user_id", "123");
/// let ctx = ctx.with_tag("function", "stuff");
///
/// assert_eq!(ctx.get("user_id").unwrap().to_string(), "123");
/// assert!(root.get("user_id").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Context {
    head: Option<Arc<Node>>,
}

#[derive(Debug)]
struct Node {
    key: String,
    value: Value,
    parent: Option<Arc<Node>>,
}

impl Context {
    /// Returns an empty root context.
    pub fn new() -> Self {
        Context { head: None }
    }

    /// Returns a child context carrying `key` bound to `value`, shadowing
    /// any older binding for the same key.
    pub fn with_tag(&self, key: impl Into<String>, value: impl Into<Value>) -> Context {
        Context {
            head: Some(Arc::new(Node {
                key: key.into(),
                value: value.into(),
                parent: self.head.clone(),
            })),
        }
    }

    /// Returns the most recently attached value for `key`, or `None` if
    /// no ancestor bound it.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let mut node = self.head.as_deref();
        while let Some(current) = node {
            if current.key == key {
                return Some(&current.value);
            }
            node = current.parent.as_deref();
        }
        None
    }

    /// Returns the union of all bindings in the chain, with the most
    /// recently attached value winning key collisions.
    pub fn tags(&self) -> BTreeMap<&str, &Value> {
        let mut tags = BTreeMap::new();
        let mut node = self.head.as_deref();
        while let Some(current) = node {
            // First hit walking newest-to-oldest is the shadowing value.
            tags.entry(current.key.as_str()).or_insert(&current.value);
            node = current.parent.as_deref();
        }
        tags
    }

    /// Returns `true` if no tags have been attached anywhere in the chain.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}
