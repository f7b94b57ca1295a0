// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use smol_str::SmolStr;

use crate::{prelude::*, util::string::clear_non_printable};

use super::TagType;

/// A single typed metadata value.
///
/// Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TagItem {
    tag_type: TagType,
    value: SmolStr,
}

impl TagItem {
    #[must_use]
    pub fn new(tag_type: TagType, value: impl Into<SmolStr>) -> Self {
        Self {
            tag_type,
            value: value.into(),
        }
    }

    #[must_use]
    pub const fn tag_type(&self) -> TagType {
        self.tag_type
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for TagItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { tag_type, value } = self;
        write!(f, "{tag_type}: {value}")
    }
}

#[derive(Copy, Clone, Debug)]
pub enum TagItemInvalidity {
    /// Control characters or leading/trailing whitespace
    Format,
}

impl Validate for TagItem {
    type Invalidity = TagItemInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let value = self.value();
        ValidationContext::new()
            .invalidate_if(
                value.trim() != value || clear_non_printable(value) != value,
                Self::Invalidity::Format,
            )
            .into()
    }
}
