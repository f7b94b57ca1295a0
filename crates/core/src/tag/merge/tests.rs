// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

use crate::{audio::SignedSongTime, tag::TagType};

fn new_tag(items: &[(TagType, &str)]) -> Tag {
    items
        .iter()
        .map(|(tag_type, value)| TagItem::new(*tag_type, *value))
        .collect::<Vec<_>>()
        .try_into()
        .unwrap()
}

fn item_pairs(tag: &Tag) -> Vec<(TagType, &str)> {
    tag.iter()
        .map(|item| (item.tag_type(), item.value()))
        .collect()
}

#[test]
fn add_overrides_same_type() {
    let base = new_tag(&[(TagType::Artist, "X")]);
    let add = new_tag(&[(TagType::Artist, "Y")]);
    let merged = Tag::merge(&base, &add).unwrap();
    assert_eq!(Some("Y"), merged.get_value(TagType::Artist));
    assert_eq!(vec![(TagType::Artist, "Y")], item_pairs(&merged));
}

#[test]
fn base_carries_over_other_types() {
    let base = new_tag(&[(TagType::Album, "A")]);
    let add = new_tag(&[(TagType::Artist, "Y")]);
    let merged = Tag::merge(&base, &add).unwrap();
    assert_eq!(
        vec![(TagType::Album, "A"), (TagType::Artist, "Y")],
        item_pairs(&merged)
    );
}

#[test]
fn single_add_item_replaces_all_base_items_of_type() {
    let base = new_tag(&[
        (TagType::Artist, "A1"),
        (TagType::Genre, "Jazz"),
        (TagType::Artist, "A2"),
        (TagType::Title, "T"),
        (TagType::Artist, "A3"),
    ]);
    let add = new_tag(&[(TagType::Artist, "B")]);
    let merged = Tag::merge(&base, &add).unwrap();
    assert_eq!(
        vec![
            (TagType::Genre, "Jazz"),
            (TagType::Title, "T"),
            (TagType::Artist, "B"),
        ],
        item_pairs(&merged)
    );
}

#[test]
fn all_add_items_of_type_are_included_in_order() {
    let base = new_tag(&[(TagType::Title, "T"), (TagType::Genre, "Rock")]);
    let add = new_tag(&[
        (TagType::Genre, "Pop"),
        (TagType::Artist, "B"),
        (TagType::Genre, "Dance"),
    ]);
    let merged = Tag::merge(&base, &add).unwrap();
    assert_eq!(
        vec![
            (TagType::Title, "T"),
            (TagType::Genre, "Pop"),
            (TagType::Artist, "B"),
            (TagType::Genre, "Dance"),
        ],
        item_pairs(&merged)
    );
    assert_eq!(
        vec!["Pop", "Dance"],
        merged.values(TagType::Genre).collect::<Vec<_>>()
    );
}

#[test]
fn merge_leaves_inputs_untouched() {
    let base = new_tag(&[(TagType::Artist, "X"), (TagType::Album, "A")]);
    let add = new_tag(&[(TagType::Artist, "Y")]);
    let base_before = base.clone();
    let add_before = add.clone();
    let _merged = Tag::merge(&base, &add).unwrap();
    assert_eq!(base_before, base);
    assert_eq!(add_before, add);
}

#[test]
fn merge_empty_tags() {
    let merged = Tag::merge(&Tag::new(), &Tag::new()).unwrap();
    assert_eq!(Tag::new(), merged);
}

#[test]
fn duration_from_add_if_known() {
    let mut base = Tag::new();
    base.duration = SignedSongTime::from_ms(1_000);
    let mut add = Tag::new();
    add.duration = SignedSongTime::from_ms(2_000);
    assert_eq!(
        SignedSongTime::from_ms(2_000),
        Tag::merge(&base, &add).unwrap().duration
    );
    add.duration = SignedSongTime::ZERO;
    assert_eq!(
        SignedSongTime::ZERO,
        Tag::merge(&base, &add).unwrap().duration
    );
}

#[test]
fn duration_from_base_if_unknown_in_add() {
    let mut base = Tag::new();
    base.duration = SignedSongTime::from_ms(1_000);
    let add = new_tag(&[(TagType::Title, "T")]);
    assert_eq!(
        SignedSongTime::from_ms(1_000),
        Tag::merge(&base, &add).unwrap().duration
    );
}

#[test]
fn has_playlist_from_add_if_defined() {
    let mut base = Tag::new();
    base.has_playlist = true;
    let add = new_tag(&[(TagType::Title, "T")]);
    assert!(add.is_defined());
    assert!(!Tag::merge(&base, &add).unwrap().has_playlist);

    let mut base = Tag::new();
    base.has_playlist = false;
    let mut add = Tag::new();
    add.duration = SignedSongTime::from_ms(1_000);
    add.has_playlist = true;
    assert!(Tag::merge(&base, &add).unwrap().has_playlist);
}

#[test]
fn has_playlist_from_base_if_add_undefined() {
    let mut base = new_tag(&[(TagType::Title, "T")]);
    base.has_playlist = true;
    let add = Tag::new();
    assert!(!add.is_defined());
    assert!(Tag::merge(&base, &add).unwrap().has_playlist);
}

#[test]
fn merge_exceeding_capacity_fails() {
    let half = Tag::MAX_ITEMS / 2 + 1;
    let base: Tag = vec![TagItem::new(TagType::Album, "A"); half]
        .try_into()
        .unwrap();
    let add: Tag = vec![TagItem::new(TagType::Artist, "B"); half]
        .try_into()
        .unwrap();
    assert_eq!(
        Err(Error::CapacityExceeded {
            limit: Tag::MAX_ITEMS
        }),
        Tag::merge(&base, &add)
    );
    // Overridden items do not count
    let add: Tag = vec![TagItem::new(TagType::Album, "B"); half]
        .try_into()
        .unwrap();
    assert_eq!(half, Tag::merge(&base, &add).unwrap().len());
}

#[test]
fn merge_owned_missing_tags() {
    assert_eq!(Ok(None), Tag::merge_owned(None, None));
    let tag = Box::new(new_tag(&[(TagType::Artist, "X")]));
    assert_eq!(
        Ok(Some(tag.clone())),
        Tag::merge_owned(Some(tag.clone()), None)
    );
    assert_eq!(
        Ok(Some(tag.clone())),
        Tag::merge_owned(None, Some(tag.clone()))
    );
}

#[test]
fn merge_owned_both_present() {
    let base = Box::new(new_tag(&[(TagType::Artist, "X"), (TagType::Album, "A")]));
    let add = Box::new(new_tag(&[(TagType::Artist, "Y")]));
    let merged = Tag::merge_owned(Some(base), Some(add)).unwrap().unwrap();
    assert_eq!(
        vec![(TagType::Album, "A"), (TagType::Artist, "Y")],
        item_pairs(&merged)
    );
}

#[test]
fn merge_optional_missing_tags() {
    assert_eq!(Ok(None), Tag::merge_optional(None, None));
    let tag = new_tag(&[(TagType::Artist, "X")]);
    assert_eq!(
        Some(&tag),
        Tag::merge_optional(None, Some(&tag)).unwrap().as_deref()
    );
    assert_eq!(
        Some(&tag),
        Tag::merge_optional(Some(&tag), None).unwrap().as_deref()
    );
}

#[test]
fn merge_optional_both_present() {
    let base = new_tag(&[(TagType::Artist, "X")]);
    let add = new_tag(&[(TagType::Album, "A")]);
    assert_eq!(
        Tag::merge(&base, &add).unwrap(),
        *Tag::merge_optional(Some(&base), Some(&add)).unwrap().unwrap()
    );
}

#[test]
fn non_finite_duration_in_add_keeps_base_duration() {
    let mut base = Tag::new();
    base.duration = SignedSongTime::from_ms(1_000);
    let mut add = Tag::new();
    add.duration = SignedSongTime::from_s(f64::NAN);
    assert_eq!(
        SignedSongTime::from_ms(1_000),
        Tag::merge(&base, &add).unwrap().duration
    );
}
