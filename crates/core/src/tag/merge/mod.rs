// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::prelude::*;

use super::{Tag, TagItem, TagMask};

/// Items of `base` that are not overridden by any of the given types.
fn retained_items(base: &Tag, overridden_types: TagMask) -> impl Iterator<Item = &TagItem> {
    base.iter()
        .filter(move |item| !overridden_types.contains_type(item.tag_type()))
}

impl Tag {
    /// Merges the data from two tags.
    ///
    /// If both tags share data for the same [`TagType`](super::TagType)
    /// only the data from `add` is used, i.e. a single item of some type
    /// in `add` replaces all items of this type in `base`.
    ///
    /// The retained items of `base` precede all items of `add`, both
    /// in their original order.
    ///
    /// The duration is taken from `add` unless it is unknown. The playlist
    /// flag is taken from `add` if `add` [is defined](Tag::is_defined)
    /// and from `base` otherwise.
    pub fn merge(base: &Tag, add: &Tag) -> Result<Tag> {
        let overridden_types = add.types();
        let num_retained = retained_items(base, overridden_types).count();
        let num_items = num_retained + add.len();
        Self::check_capacity(num_items, Self::MAX_ITEMS)?;
        let mut items = Vec::with_capacity(num_items);
        items.extend(retained_items(base, overridden_types).cloned());
        items.extend(add.iter().cloned());
        debug_assert_eq!(num_items, items.len());
        log::debug!(
            "Merged {num_retained} of {num_base} base item(s) with {num_add} item(s)",
            num_base = base.len(),
            num_add = add.len(),
        );
        let duration = if add.duration.is_known() {
            add.duration
        } else {
            base.duration
        };
        let has_playlist = if add.is_defined() {
            add.has_playlist
        } else {
            base.has_playlist
        };
        Ok(Self::from_items_unchecked(duration, has_playlist, items))
    }

    pub fn merge_boxed(base: &Tag, add: &Tag) -> Result<Box<Tag>> {
        Self::merge(base, add).map(Box::new)
    }

    /// Merges the data from two owned tags, any of which may be missing.
    ///
    /// Both tags are consumed. If only one of them is present it
    /// is returned as is.
    pub fn merge_owned(base: Option<Box<Tag>>, add: Option<Box<Tag>>) -> Result<Option<Box<Tag>>> {
        match (base, add) {
            (None, None) => Ok(None),
            (Some(tag), None) | (None, Some(tag)) => Ok(Some(tag)),
            (Some(base), Some(add)) => Self::merge_boxed(&base, &add).map(Some),
        }
    }

    /// Merges the data from two borrowed tags, any of which may be missing.
    ///
    /// Returns a copy if only one of them is present and `None`
    /// if both are missing.
    pub fn merge_optional(base: Option<&Tag>, add: Option<&Tag>) -> Result<Option<Box<Tag>>> {
        match (base, add) {
            (None, None) => Ok(None),
            (Some(tag), None) | (None, Some(tag)) => Ok(Some(Box::new(tag.clone()))),
            (Some(base), Some(add)) => Self::merge_boxed(base, add).map(Some),
        }
    }
}

#[cfg(test)]
mod tests;
