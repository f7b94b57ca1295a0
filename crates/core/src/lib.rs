// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

pub mod audio;
pub mod tag;
pub mod util;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The number of tag items would exceed the limit.
    #[error("capacity exceeded: at most {limit} tag item(s) allowed")]
    CapacityExceeded { limit: usize },

    #[error("unknown tag type \"{0}\"")]
    UnknownTagType(String),

    #[error("unknown sample format \"{0}\"")]
    UnknownSampleFormat(String),
}

pub type Result<T> = StdResult<T, Error>;

pub mod prelude {
    pub(crate) use semval::prelude::*;
    // Re-export trait methods from semval
    pub use semval::{IsValid as _, Validate as _};

    pub use crate::{Error, Result};
}
