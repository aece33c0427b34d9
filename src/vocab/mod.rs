// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Vocabulary module: the allowed type and scope enumerations.
//!
//! Vocabularies come from a remote tag catalog when one is configured,
//! with the built-in lists as the fallback for anything that goes wrong.
//! Nothing in here ever surfaces a fetch problem to the caller; a failed
//! retrieval is logged and recovered. Vocabularies are not cached across
//! runs, so every validation sees the current catalog.

mod defaults;
mod remote;

pub use defaults::{DEFAULT_SCOPES, DEFAULT_TYPES};

use std::time::Duration;

use crate::config::VocabConfig;

/// The allowed type and scope enumerations for one validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    /// Allowed commit types, in catalog order.
    pub types: Vec<String>,
    /// Allowed commit scopes, in catalog order.
    pub scopes: Vec<String>,
}

impl Vocabulary {
    /// The built-in vocabulary.
    pub fn defaults() -> Self {
        Self {
            types: defaults::default_types(),
            scopes: defaults::default_scopes(),
        }
    }

    /// Build a vocabulary from explicit lists.
    pub fn new(types: Vec<String>, scopes: Vec<String>) -> Self {
        Self { types, scopes }
    }

    /// Load the vocabulary for one validation run. Never fails: any
    /// retrieval or shape problem falls back to the built-in lists,
    /// independently per half.
    pub fn load(config: &VocabConfig) -> Self {
        let url = match &config.url {
            Some(url) => url,
            None => {
                tracing::debug!("No vocabulary URL configured, using built-in lists");
                return Self::defaults();
            }
        };

        let timeout = config.timeout_secs.map(Duration::from_secs);
        match remote::fetch_tags(url, timeout) {
            Ok(doc) => Self::from_document(doc),
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch vocabulary from {}: {}; using built-in lists",
                    url,
                    e
                );
                Self::defaults()
            }
        }
    }

    /// Convert a fetched tag document, substituting the built-in list for
    /// any half that is missing or empty.
    fn from_document(doc: remote::TagDocument) -> Self {
        let types = doc
            .section_tags
            .map(remote::TagGroup::ids)
            .filter(|ids| !ids.is_empty())
            .unwrap_or_else(|| {
                tracing::warn!("Tag document has no usable section_tags, using built-in types");
                defaults::default_types()
            });

        let scopes = doc
            .component_tags
            .map(remote::TagGroup::ids)
            .filter(|ids| !ids.is_empty())
            .unwrap_or_else(|| {
                tracing::warn!("Tag document has no usable component_tags, using built-in scopes");
                defaults::default_scopes()
            });

        Self { types, scopes }
    }

    /// Check type membership (case-sensitive).
    pub fn allows_type(&self, commit_type: &str) -> bool {
        self.types.iter().any(|t| t == commit_type)
    }

    /// Check scope membership (case-sensitive).
    pub fn allows_scope(&self, scope: &str) -> bool {
        self.scopes.iter().any(|s| s == scope)
    }
}
