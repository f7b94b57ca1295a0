// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::mem;

use crate::{audio::SignedSongTime, prelude::*, util::string::sanitized_tag_value};

use super::{Tag, TagConfig, TagItem, TagMask, TagType};

fn missing_items(other: &Tag, present_types: TagMask) -> impl Iterator<Item = &TagItem> {
    other
        .iter()
        .filter(move |item| !present_types.contains_type(item.tag_type()))
}

/// Collects items for a new [`Tag`].
#[derive(Debug, Clone, Default)]
pub struct TagBuilder {
    config: TagConfig,
    duration: SignedSongTime,
    has_playlist: bool,
    items: Vec<TagItem>,
}

impl TagBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: TagConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Start from a copy of an existing tag.
    #[must_use]
    pub fn from_tag(tag: &Tag) -> Self {
        tag.clone().into()
    }

    #[must_use]
    pub const fn config(&self) -> &TagConfig {
        &self.config
    }

    #[must_use]
    pub const fn duration(&self) -> SignedSongTime {
        self.duration
    }

    pub fn set_duration(&mut self, duration: SignedSongTime) {
        self.duration = duration;
    }

    #[must_use]
    pub const fn has_playlist(&self) -> bool {
        self.has_playlist
    }

    pub fn set_has_playlist(&mut self, has_playlist: bool) {
        self.has_playlist = has_playlist;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_defined(&self) -> bool {
        !self.is_empty() || self.duration.is_known()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn has_type(&self, tag_type: TagType) -> bool {
        self.items.iter().any(|item| item.tag_type() == tag_type)
    }

    fn push_item(&mut self, item: TagItem) -> Result<bool> {
        Tag::check_capacity(self.items.len() + 1, self.config.item_limit())?;
        self.items.push(item);
        Ok(true)
    }

    /// Append a new item.
    ///
    /// Control characters in `value` are replaced with spaces and
    /// surrounding whitespace is trimmed.
    ///
    /// Returns `Ok(false)` if the item has been skipped, either because
    /// the type is disabled or because the value is empty. Fails without
    /// modifying the builder if the maximum number of items is exceeded.
    pub fn add_item(&mut self, tag_type: TagType, value: &str) -> Result<bool> {
        if !self.config.is_enabled(tag_type) {
            log::trace!("Skipping disabled {tag_type}: {value:?}");
            return Ok(false);
        }
        let Some(value) = sanitized_tag_value(value) else {
            log::trace!("Skipping empty {tag_type}");
            return Ok(false);
        };
        self.push_item(TagItem::new(tag_type, value))
    }

    /// Append an item with an empty value.
    pub fn add_empty_item(&mut self, tag_type: TagType) -> Result<bool> {
        if !self.config.is_enabled(tag_type) {
            log::trace!("Skipping disabled {tag_type}");
            return Ok(false);
        }
        self.push_item(TagItem::new(tag_type, ""))
    }

    /// Remove all items of the given type.
    pub fn remove_type(&mut self, tag_type: TagType) {
        self.items.retain(|item| item.tag_type() != tag_type);
    }

    /// Remove all items, but keep the duration and the playlist flag.
    pub fn remove_all(&mut self) {
        self.items.clear();
    }

    /// Reset everything except the configuration.
    pub fn clear(&mut self) {
        self.duration = SignedSongTime::negative();
        self.has_playlist = false;
        self.items.clear();
    }

    /// Fill in missing data from another tag.
    ///
    /// Existing data is never replaced: the duration is only copied
    /// if it is unknown and items are only copied for types that are
    /// not yet present. The playlist flag is set if any of both has it.
    ///
    /// Either all missing items are copied or none, if this would
    /// exceed the maximum number of items.
    pub fn complement(&mut self, other: &Tag) -> Result<()> {
        let present_types = TagMask::from_items(&self.items);
        Tag::check_capacity(
            self.items.len() + missing_items(other, present_types).count(),
            self.config.item_limit(),
        )?;
        self.items
            .extend(missing_items(other, present_types).cloned());
        if self.duration.is_negative() {
            self.duration = other.duration;
        }
        self.has_playlist |= other.has_playlist;
        Ok(())
    }

    /// Create a tag from the collected data and reset the builder.
    #[must_use]
    pub fn commit(&mut self) -> Tag {
        let tag = Tag::from_items_unchecked(
            mem::take(&mut self.duration),
            mem::take(&mut self.has_playlist),
            mem::take(&mut self.items),
        );
        log::debug!("Committed tag with {num_items} item(s)", num_items = tag.len());
        tag
    }

    #[must_use]
    pub fn commit_boxed(&mut self) -> Box<Tag> {
        Box::new(self.commit())
    }
}

impl From<Tag> for TagBuilder {
    fn from(from: Tag) -> Self {
        let duration = from.duration;
        let has_playlist = from.has_playlist;
        Self {
            config: Default::default(),
            duration,
            has_playlist,
            items: from.into_items(),
        }
    }
}
