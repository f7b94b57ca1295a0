// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Song metadata containers for audio servers.
//!
//! A [`Tag`] holds the ordered, typed metadata items of a song. Tags are
//! populated by a [`TagBuilder`] and combined with [`Tag::merge`].

pub use songtag_core::{
    Error, Result,
    audio::{
        SignedSongTime,
        sample::{SampleFormat, SampleFormatInvalidity},
    },
    prelude,
    tag::{Tag, TagBuilder, TagConfig, TagInvalidity, TagItem, TagItemInvalidity, TagMask, TagType},
};
