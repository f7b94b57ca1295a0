// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{mem, slice};

use crate::{audio::SignedSongTime, prelude::*};

mod builder;
pub use self::builder::TagBuilder;

mod config;
pub use self::config::TagConfig;

mod item;
pub use self::item::{TagItem, TagItemInvalidity};

mod kind;
pub use self::kind::TagType;

mod mask;
pub use self::mask::{TagMask, TagMaskBits};

mod merge;

///////////////////////////////////////////////////////////////////////
// Tag
///////////////////////////////////////////////////////////////////////

/// The metadata of a song.
///
/// An ordered sequence of typed items, e.g. from ID3 frames or Vorbis
/// comments, together with the duration and a flag for embedded playlists.
///
/// Tags are created empty and populated by a [`TagBuilder`]. Afterwards
/// they are only replaced as a whole, never modified item by item.
///
/// Two tags are equal if their scalar fields are equal and if they
/// contain the same items in the same order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tag {
    /// The duration of the song. A negative value means that the
    /// length is unknown.
    pub duration: SignedSongTime,

    /// Does the file have an embedded playlist, e.g. an embedded CUE sheet?
    pub has_playlist: bool,

    items: Vec<TagItem>,
}

impl Tag {
    /// The maximum number of items per tag.
    pub const MAX_ITEMS: usize = u16::MAX as usize;

    #[must_use]
    pub const fn new() -> Self {
        Self {
            duration: SignedSongTime::negative(),
            has_playlist: false,
            items: Vec::new(),
        }
    }

    pub(crate) fn check_capacity(num_items: usize, limit: usize) -> Result<()> {
        debug_assert!(limit <= Self::MAX_ITEMS);
        if num_items > limit {
            log::warn!("Rejecting {num_items} tag item(s): at most {limit} allowed");
            return Err(Error::CapacityExceeded { limit });
        }
        Ok(())
    }

    /// Creates a tag from items without any sanitizing.
    pub(crate) fn from_items_unchecked(
        duration: SignedSongTime,
        has_playlist: bool,
        items: Vec<TagItem>,
    ) -> Self {
        debug_assert!(items.len() <= Self::MAX_ITEMS);
        Self {
            duration,
            has_playlist,
            items,
        }
    }

    pub(crate) fn into_items(self) -> Vec<TagItem> {
        let Self { items, .. } = self;
        items
    }

    /// Returns `true` if the tag contains no items.
    ///
    /// The duration is ignored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if the tag contains any information.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        !self.is_empty() || self.duration.is_known()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn items(&self) -> &[TagItem] {
        &self.items
    }

    pub fn iter(&self) -> slice::Iter<'_, TagItem> {
        self.items.iter()
    }

    /// The set of all types that occur in this tag.
    #[must_use]
    pub fn types(&self) -> TagMask {
        TagMask::from_items(self)
    }

    /// Clear everything, as if this was a new tag.
    pub fn clear(&mut self) {
        self.duration = SignedSongTime::negative();
        self.has_playlist = false;
        self.items.clear();
    }

    /// Swap only the items with `other`.
    ///
    /// The duration and the playlist flag of both tags are untouched.
    pub fn move_items_from(&mut self, other: &mut Self) {
        mem::swap(&mut self.items, &mut other.items);
    }

    /// Move all data out of this tag and leave it empty.
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Returns the first value of the given type.
    #[must_use]
    pub fn get_value(&self, tag_type: TagType) -> Option<&str> {
        self.values(tag_type).next()
    }

    /// Iterates over all values of the given type in order.
    pub fn values(&self, tag_type: TagType) -> impl Iterator<Item = &str> + '_ {
        self.items
            .iter()
            .filter(move |item| item.tag_type() == tag_type)
            .map(TagItem::value)
    }

    /// Checks whether the tag contains one or more items of the given type.
    #[must_use]
    pub fn has_type(&self, tag_type: TagType) -> bool {
        self.items.iter().any(|item| item.tag_type() == tag_type)
    }

    /// Returns a value for sorting on the given type.
    ///
    /// Falls back to the next best tag types if no value is available,
    /// e.g. [`TagType::AlbumArtist`] falls back to [`TagType::Artist`].
    /// Returns an empty string if none of them is present.
    #[must_use]
    pub fn get_sort_value(&self, tag_type: TagType) -> &str {
        std::iter::once(&tag_type)
            .chain(tag_type.sort_fallbacks())
            .find_map(|tag_type| self.get_value(*tag_type))
            .unwrap_or_default()
    }
}

impl TryFrom<Vec<TagItem>> for Tag {
    type Error = Error;

    fn try_from(items: Vec<TagItem>) -> Result<Self> {
        Self::check_capacity(items.len(), Self::MAX_ITEMS)?;
        Ok(Self::from_items_unchecked(
            SignedSongTime::negative(),
            false,
            items,
        ))
    }
}

impl<'a> IntoIterator for &'a Tag {
    type Item = &'a TagItem;
    type IntoIter = slice::Iter<'a, TagItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Copy, Clone, Debug)]
pub enum TagInvalidity {
    Item(TagItemInvalidity),
}

impl Validate for Tag {
    type Invalidity = TagInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        self.items
            .iter()
            .fold(ValidationContext::new(), |context, item| {
                context.validate_with(item, Self::Invalidity::Item)
            })
            .into()
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
