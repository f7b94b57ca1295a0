// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::prelude::*;

use super::{Tag, TagMask, TagType};

/// Controls which items are accepted when building tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagConfig {
    /// Items of other types are silently dropped.
    pub enabled_types: TagMask,

    /// The maximum number of items per tag.
    ///
    /// Values above [`Tag::MAX_ITEMS`] are clamped.
    pub max_items: usize,
}

impl TagConfig {
    /// Comments are disabled by default.
    pub const DEFAULT_ENABLED_TYPES: TagMask = TagMask::ALL_TYPES.without_type(TagType::Comment);

    #[must_use]
    pub const fn new() -> Self {
        Self {
            enabled_types: Self::DEFAULT_ENABLED_TYPES,
            max_items: Tag::MAX_ITEMS,
        }
    }

    #[must_use]
    pub const fn is_enabled(&self, tag_type: TagType) -> bool {
        self.enabled_types.contains_type(tag_type)
    }

    #[must_use]
    pub fn item_limit(&self) -> usize {
        self.max_items.min(Tag::MAX_ITEMS)
    }

    /// Parse the value of the `metadata_to_use` setting.
    ///
    /// Either `none` or a comma-separated list of tag type names. If the
    /// list starts with `+` or `-` the default types are modified,
    /// otherwise only the listed types are enabled. A name prefixed with
    /// `-` is disabled. Names without prefix inherit the last prefix.
    ///
    /// Examples: `"artist,album,title"`, `"+comment,-genre"`, `"none"`
    pub fn parse_metadata_to_use(value: &str) -> Result<TagMask> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("none") {
            return Ok(TagMask::empty());
        }
        let mut enabled_types = if value.starts_with(['+', '-']) {
            Self::DEFAULT_ENABLED_TYPES
        } else {
            TagMask::empty()
        };
        let mut enable = true;
        for entry in value.split(',').map(str::trim) {
            if entry.is_empty() {
                continue;
            }
            let name = if let Some(name) = entry.strip_prefix('+') {
                enable = true;
                name
            } else if let Some(name) = entry.strip_prefix('-') {
                enable = false;
                name
            } else {
                entry
            };
            // A sign without a name is rejected
            let tag_type = TagType::parse_ignore_case(name.trim())
                .ok_or_else(|| Error::UnknownTagType(entry.to_owned()))?;
            if enable {
                enabled_types.insert_type(tag_type);
            } else {
                enabled_types.remove_type(tag_type);
            }
        }
        log::debug!("Enabled tag types: {enabled_types:?}");
        Ok(enabled_types)
    }

    pub fn with_metadata_to_use(self, value: &str) -> Result<Self> {
        let enabled_types = Self::parse_metadata_to_use(value)?;
        Ok(Self {
            enabled_types,
            ..self
        })
    }
}

impl Default for TagConfig {
    fn default() -> Self {
        Self::new()
    }
}
