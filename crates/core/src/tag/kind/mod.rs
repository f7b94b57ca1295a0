// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, str::FromStr};

use crate::prelude::*;

/// The kind of a metadata field.
///
/// The ordinal of each variant is stable. It defines the total order
/// and is used as the bit index in [`TagMask`](super::TagMask).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TagType {
    Artist = 0,
    ArtistSort = 1,
    Album = 2,
    AlbumSort = 3,
    AlbumArtist = 4,
    AlbumArtistSort = 5,
    Title = 6,
    TitleSort = 7,
    Track = 8,
    Name = 9,
    Genre = 10,
    Mood = 11,
    Date = 12,
    OriginalDate = 13,
    Composer = 14,
    ComposerSort = 15,
    Performer = 16,
    Conductor = 17,
    Work = 18,
    Ensemble = 19,
    Movement = 20,
    MovementNumber = 21,
    ShowMovement = 22,
    Location = 23,
    Grouping = 24,
    Comment = 25,
    Disc = 26,
    Label = 27,
    MusicBrainzArtistId = 28,
    MusicBrainzAlbumId = 29,
    MusicBrainzAlbumArtistId = 30,
    MusicBrainzTrackId = 31,
    MusicBrainzReleaseTrackId = 32,
    MusicBrainzWorkId = 33,
    MusicBrainzReleaseGroupId = 34,
}

impl TagType {
    /// All tag types, ordered by their ordinal.
    pub const ALL: [Self; 35] = {
        use TagType::*;
        [
            Artist,
            ArtistSort,
            Album,
            AlbumSort,
            AlbumArtist,
            AlbumArtistSort,
            Title,
            TitleSort,
            Track,
            Name,
            Genre,
            Mood,
            Date,
            OriginalDate,
            Composer,
            ComposerSort,
            Performer,
            Conductor,
            Work,
            Ensemble,
            Movement,
            MovementNumber,
            ShowMovement,
            Location,
            Grouping,
            Comment,
            Disc,
            Label,
            MusicBrainzArtistId,
            MusicBrainzAlbumId,
            MusicBrainzAlbumArtistId,
            MusicBrainzTrackId,
            MusicBrainzReleaseTrackId,
            MusicBrainzWorkId,
            MusicBrainzReleaseGroupId,
        ]
    };

    pub const COUNT: usize = Self::ALL.len();

    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        use TagType::*;
        match self {
            Artist => "Artist",
            ArtistSort => "ArtistSort",
            Album => "Album",
            AlbumSort => "AlbumSort",
            AlbumArtist => "AlbumArtist",
            AlbumArtistSort => "AlbumArtistSort",
            Title => "Title",
            TitleSort => "TitleSort",
            Track => "Track",
            Name => "Name",
            Genre => "Genre",
            Mood => "Mood",
            Date => "Date",
            OriginalDate => "OriginalDate",
            Composer => "Composer",
            ComposerSort => "ComposerSort",
            Performer => "Performer",
            Conductor => "Conductor",
            Work => "Work",
            Ensemble => "Ensemble",
            Movement => "Movement",
            MovementNumber => "MovementNumber",
            ShowMovement => "ShowMovement",
            Location => "Location",
            Grouping => "Grouping",
            Comment => "Comment",
            Disc => "Disc",
            Label => "Label",
            MusicBrainzArtistId => "MUSICBRAINZ_ARTISTID",
            MusicBrainzAlbumId => "MUSICBRAINZ_ALBUMID",
            MusicBrainzAlbumArtistId => "MUSICBRAINZ_ALBUMARTISTID",
            MusicBrainzTrackId => "MUSICBRAINZ_TRACKID",
            MusicBrainzReleaseTrackId => "MUSICBRAINZ_RELEASETRACKID",
            MusicBrainzWorkId => "MUSICBRAINZ_WORKID",
            MusicBrainzReleaseGroupId => "MUSICBRAINZ_RELEASEGROUPID",
        }
    }

    /// Look up a tag type by its name, ignoring ASCII case.
    #[must_use]
    pub fn parse_ignore_case(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tag_type| tag_type.name().eq_ignore_ascii_case(name))
    }

    /// The tag types that are consulted in order when no value
    /// of this type is available for sorting.
    ///
    /// A `*Sort` type decays to its plain type and the album artist
    /// falls back to the artist.
    #[must_use]
    pub const fn sort_fallbacks(self) -> &'static [Self] {
        use TagType::*;
        match self {
            ArtistSort => &[Artist],
            AlbumSort => &[Album],
            AlbumArtist => &[Artist],
            AlbumArtistSort => &[AlbumArtist, ArtistSort, Artist],
            TitleSort => &[Title],
            ComposerSort => &[Composer],
            _ => &[],
        }
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TagType {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|tag_type| tag_type.name() == name)
            .ok_or_else(|| Error::UnknownTagType(name.to_owned()))
    }
}
