// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, str::FromStr};

use crate::prelude::*;

///////////////////////////////////////////////////////////////////////
// SampleFormat
///////////////////////////////////////////////////////////////////////

pub type BytesPerSample = usize;

/// The format of a single PCM sample.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SampleFormat {
    #[default]
    Undefined = 0,

    S8,

    S16,

    /// Signed 24 bit integer samples, packed in 32 bit integers
    /// (the most significant byte is filled with the sign bit).
    S24P32,

    S32,

    /// 32 bit floating point samples in the host's format.
    ///
    /// The range is -1.0 to +1.0.
    Float,

    /// Direct Stream Digital.
    ///
    /// 1-bit samples, each frame has one byte (8 samples) per channel.
    Dsd,
}

impl SampleFormat {
    /// All valid formats, i.e. excluding [`SampleFormat::Undefined`].
    pub const VALID: [Self; 6] = [
        Self::S8,
        Self::S16,
        Self::S24P32,
        Self::S32,
        Self::Float,
        Self::Dsd,
    ];

    #[must_use]
    pub const fn is_valid(self) -> bool {
        !matches!(self, Self::Undefined)
    }

    /// The number of bytes occupied by a single sample.
    ///
    /// DSD packs 8 samples into a single byte.
    #[must_use]
    pub const fn size_in_bytes(self) -> BytesPerSample {
        match self {
            Self::Undefined => 0,
            Self::S8 | Self::Dsd => 1,
            Self::S16 => 2,
            Self::S24P32 | Self::S32 | Self::Float => 4,
        }
    }

    /// Short display name, e.g. for log messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "?",
            Self::S8 => "8",
            Self::S16 => "16",
            Self::S24P32 => "24",
            Self::S32 => "32",
            Self::Float => "f",
            Self::Dsd => "dsd",
        }
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SampleFormat {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        Self::VALID
            .into_iter()
            .find(|format| format.as_str() == input)
            .ok_or_else(|| Error::UnknownSampleFormat(input.to_owned()))
    }
}

#[derive(Copy, Clone, Debug)]
pub enum SampleFormatInvalidity {
    Undefined,
}

impl Validate for SampleFormat {
    type Invalidity = SampleFormatInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(!Self::is_valid(*self), Self::Invalidity::Undefined)
            .into()
    }
}

#[cfg(test)]
mod tests;
