// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::value::escape;

/// Category of an event, one entry of the `CATEGORIES` property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    name: Option<String>,
}

impl Category {
    /// Create a category with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Name of the category.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the name of the category.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    /// Render the escaped name as it appears in `CATEGORIES`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is unset or empty.
    pub fn to_ical_string(&self) -> Result<String> {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => Ok(escape(name, false).into_owned()),
            _ => Err(Error::missing("category", "name")),
        }
    }

    /// Build a category from its structured representation.
    ///
    /// # Errors
    ///
    /// Currently infallible.
    pub fn from_data(data: CategoryData) -> Result<Self> {
        Ok(Self { name: data.name })
    }

    /// Convert to the structured representation.
    #[must_use]
    pub fn to_data(&self) -> CategoryData {
        CategoryData {
            name: self.name.clone(),
        }
    }
}

/// Structured representation of a [`Category`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryData {
    /// Name of the category
    #[serde(default)]
    pub name: Option<String>,
}

impl From<&str> for CategoryData {
    fn from(name: &str) -> Self {
        Self {
            name: Some(name.to_owned()),
        }
    }
}
