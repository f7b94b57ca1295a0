// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bitflags::bitflags;

use super::{TagItem, TagType};

pub type TagMaskBits = u64;

bitflags! {
    /// A set of tag types
    ///
    /// One bit for each [`TagType`], indexed by its ordinal.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[repr(transparent)]
    pub struct TagMask: TagMaskBits {
        const _ = !0;
    }
}

impl Default for TagMask {
    fn default() -> Self {
        Self::empty()
    }
}

impl TagMask {
    pub const ALL_TYPES: Self =
        Self::from_bits_retain(TagMaskBits::MAX >> (TagMaskBits::BITS - TagType::COUNT as u32));

    #[must_use]
    pub const fn of(tag_type: TagType) -> Self {
        Self::from_bits_retain(1 << tag_type.ordinal())
    }

    #[must_use]
    pub const fn contains_type(self, tag_type: TagType) -> bool {
        self.contains(Self::of(tag_type))
    }

    pub fn insert_type(&mut self, tag_type: TagType) {
        self.insert(Self::of(tag_type));
    }

    pub fn remove_type(&mut self, tag_type: TagType) {
        self.remove(Self::of(tag_type));
    }

    #[must_use]
    pub const fn with_type(self, tag_type: TagType) -> Self {
        self.union(Self::of(tag_type))
    }

    #[must_use]
    pub const fn without_type(self, tag_type: TagType) -> Self {
        self.difference(Self::of(tag_type))
    }

    pub fn from_types(tag_types: impl IntoIterator<Item = TagType>) -> Self {
        tag_types
            .into_iter()
            .fold(Self::empty(), Self::with_type)
    }

    /// The types of all given items.
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a TagItem>) -> Self {
        Self::from_types(items.into_iter().map(TagItem::tag_type))
    }

    /// Iterate over all contained types in ascending order.
    pub fn types(self) -> impl Iterator<Item = TagType> {
        TagType::ALL
            .into_iter()
            .filter(move |tag_type| self.contains_type(*tag_type))
    }
}

impl From<TagType> for TagMask {
    fn from(from: TagType) -> Self {
        Self::of(from)
    }
}

impl FromIterator<TagType> for TagMask {
    fn from_iter<T: IntoIterator<Item = TagType>>(iter: T) -> Self {
        Self::from_types(iter)
    }
}
