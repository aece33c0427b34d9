// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Remote tag document retrieval.
//!
//! The document is the changelog tag catalog: `section_tags` carries the
//! commit types and `component_tags` the scopes. A single request is made
//! per call, with no retry.

use serde::Deserialize;
use std::time::Duration;

use crate::error::FetchError;

/// The remote tag catalog.
#[derive(Debug, Deserialize)]
pub(crate) struct TagDocument {
    pub(crate) section_tags: Option<TagGroup>,
    pub(crate) component_tags: Option<TagGroup>,
}

/// One group of tags.
#[derive(Debug, Deserialize)]
pub(crate) struct TagGroup {
    pub(crate) tags: Vec<TagEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TagEntry {
    pub(crate) id: String,
}

impl TagGroup {
    /// Extract the declared tag identifiers in their given order.
    pub(crate) fn ids(self) -> Vec<String> {
        self.tags.into_iter().map(|t| t.id).collect()
    }
}

/// Fetch the tag document from a URL. `timeout` of `None` leaves the
/// timeout policy entirely to the transport.
pub(crate) fn fetch_tags(
    url: &str,
    timeout: Option<Duration>,
) -> std::result::Result<TagDocument, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;

    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }

    let body = response.text()?;
    Ok(serde_json::from_str(&body)?)
}
