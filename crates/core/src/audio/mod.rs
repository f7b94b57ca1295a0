// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, time::Duration};

pub mod sample;

///////////////////////////////////////////////////////////////////////
// SignedSongTime
///////////////////////////////////////////////////////////////////////

pub type SongTimeInMilliseconds = i32;

/// The duration of (or a position within) a song.
///
/// Negative values mean that the duration is unknown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct SignedSongTime(SongTimeInMilliseconds);

impl SignedSongTime {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn unit_of_measure() -> &'static str {
        "ms"
    }

    /// The canonical "unknown" value.
    #[must_use]
    pub const fn negative() -> Self {
        Self(-1)
    }

    #[must_use]
    pub const fn from_ms(ms: SongTimeInMilliseconds) -> Self {
        Self(ms)
    }

    /// Rounds to whole milliseconds, saturating at the bounds.
    ///
    /// Non-finite values are unknown.
    #[must_use]
    pub fn from_s(s: f64) -> Self {
        if !s.is_finite() {
            return Self::negative();
        }
        Self((s * 1_000.0).round() as SongTimeInMilliseconds)
    }

    #[must_use]
    pub fn from_duration(duration: Duration) -> Self {
        Self(
            SongTimeInMilliseconds::try_from(duration.as_millis())
                .unwrap_or(SongTimeInMilliseconds::MAX),
        )
    }

    #[must_use]
    pub const fn to_ms(self) -> SongTimeInMilliseconds {
        let Self(ms) = self;
        ms
    }

    #[must_use]
    pub fn to_s(self) -> f64 {
        f64::from(self.to_ms()) / 1_000.0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.to_ms() < 0
    }

    #[must_use]
    pub const fn is_known(self) -> bool {
        !self.is_negative()
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.to_ms() == 0
    }

    #[must_use]
    pub fn to_duration(self) -> Option<Duration> {
        u64::try_from(self.to_ms()).ok().map(Duration::from_millis)
    }
}

impl Default for SignedSongTime {
    fn default() -> Self {
        Self::negative()
    }
}

impl From<Duration> for SignedSongTime {
    fn from(from: Duration) -> Self {
        Self::from_duration(from)
    }
}

impl fmt::Display for SignedSongTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            return f.write_str("unknown");
        }
        write!(f, "{} {}", self.to_ms(), Self::unit_of_measure())
    }
}
