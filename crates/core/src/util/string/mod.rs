// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::borrow::Cow;

use smol_str::SmolStr;

/// Replace all control characters with a single space each.
#[must_use]
pub fn clear_non_printable(s: &str) -> Cow<'_, str> {
    if !s.contains(char::is_control) {
        return Cow::Borrowed(s);
    }
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect::<String>()
        .into()
}

#[must_use]
pub fn non_empty_from(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

/// Sanitize a raw tag value before storing it.
///
/// Control characters are replaced by spaces and leading/trailing
/// whitespace is removed. Returns `None` if nothing remains.
#[must_use]
pub fn sanitized_tag_value(raw: &str) -> Option<SmolStr> {
    let cleared = clear_non_printable(raw);
    non_empty_from(cleared.trim()).map(SmolStr::new)
}
