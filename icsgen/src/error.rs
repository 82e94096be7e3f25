// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Error type shared by every builder and the formatter.

use std::io;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while mutating or rendering calendar data.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A field required for rendering has no value.
    #[error("no value for `{field}` in {entity} given")]
    MissingField {
        /// The entity that owns the field (`event`, `attendee`, ...)
        entity: &'static str,
        /// The missing field
        field: &'static str,
    },

    /// A value is not a member of the closed set accepted by the field.
    #[error("`{field}` must be one of {}, got `{value}`", .accepted.join(", "))]
    NotInSet {
        /// The field being set
        field: &'static str,
        /// The rejected value
        value: String,
        /// Every token the field accepts
        accepted: &'static [&'static str],
    },

    /// A value has the wrong shape or is out of range.
    #[error("invalid `{field}`: {reason}")]
    InvalidValue {
        /// The field being set
        field: &'static str,
        /// What is wrong with the value
        reason: String,
    },

    /// The structured representation could not be encoded or decoded.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Writing the rendered text failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn missing(entity: &'static str, field: &'static str) -> Self {
        Self::MissingField { entity, field }
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}
