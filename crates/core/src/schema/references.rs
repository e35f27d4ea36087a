//! Reference cycle tracking
//!
//! A [`ManagedReference`] stands for "this type is currently being expanded".
//! The [`ExpansionContext`] holds the references of every type on the
//! current expansion stack and is threaded through every recursive build,
//! so one context serves exactly one document build.
//!
//! Pull and push must balance per recursive descent:
//!
//! ```text
//! pull(B) -> true      expand B ... push(B)
//!   pull(A) -> false   emit {"$ref": <where A is being expanded>}
//! ```
//!
//! A missing push leaves the type blocked for the rest of the build; a
//! missing pull lets a cyclic model recurse forever.

use std::collections::HashMap;

use tracing::trace;
use typeschema_model::TypeInfo;

/// Identity of a type that is being expanded
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ManagedReference(String);

impl ManagedReference {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self(type_name.into())
    }

    /// Reference for a type descriptor
    pub fn for_type(ty: &TypeInfo) -> Self {
        Self::new(ty.name.clone())
    }

    pub fn type_name(&self) -> &str {
        &self.0
    }
}

/// References currently on the expansion stack
///
/// Each reference remembers the relative id at which its expansion began,
/// which is where a re-encounter points back to.
#[derive(Debug, Default)]
pub struct ExpansionContext {
    in_progress: HashMap<ManagedReference, String>,
}

impl ExpansionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a reference for expansion at `relative_id`
    ///
    /// Returns `false`, leaving the context untouched, if the reference is
    /// already being expanded.
    pub fn pull(&mut self, reference: &ManagedReference, relative_id: &str) -> bool {
        if self.in_progress.contains_key(reference) {
            trace!("Reference {} already expanding", reference.type_name());
            return false;
        }
        self.in_progress
            .insert(reference.clone(), relative_id.to_string());
        trace!("Pulled {} at {}", reference.type_name(), relative_id);
        true
    }

    /// Release a reference, returning whether it was held
    pub fn push(&mut self, reference: &ManagedReference) -> bool {
        let released = self.in_progress.remove(reference).is_some();
        trace!("Pushed {} (held: {})", reference.type_name(), released);
        released
    }

    /// Check if a reference is being expanded
    pub fn contains(&self, reference: &ManagedReference) -> bool {
        self.in_progress.contains_key(reference)
    }

    /// Relative id at which a held reference is being expanded
    pub fn anchor(&self, reference: &ManagedReference) -> Option<&str> {
        self.in_progress.get(reference).map(String::as_str)
    }

    /// Number of references currently held
    pub fn depth(&self) -> usize {
        self.in_progress.len()
    }
}
