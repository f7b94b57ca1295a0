// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn default_is_undefined_and_invalid() {
    assert_eq!(SampleFormat::Undefined, SampleFormat::default());
    assert!(!SampleFormat::default().is_valid());
    assert!(SampleFormat::default().validate().is_err());
    assert_eq!(0, SampleFormat::default().size_in_bytes());
    assert_eq!("?", SampleFormat::default().to_string());
}

#[test]
fn valid_formats() {
    for format in SampleFormat::VALID {
        assert!(format.is_valid());
        assert!(format.validate().is_ok());
        assert!(format.size_in_bytes() > 0);
    }
}

#[test]
fn size_in_bytes() {
    assert_eq!(1, SampleFormat::S8.size_in_bytes());
    assert_eq!(2, SampleFormat::S16.size_in_bytes());
    assert_eq!(4, SampleFormat::S24P32.size_in_bytes());
    assert_eq!(4, SampleFormat::S32.size_in_bytes());
    assert_eq!(4, SampleFormat::Float.size_in_bytes());
    assert_eq!(1, SampleFormat::Dsd.size_in_bytes());
}

#[test]
fn display_names() {
    assert_eq!("8", SampleFormat::S8.to_string());
    assert_eq!("16", SampleFormat::S16.to_string());
    assert_eq!("24", SampleFormat::S24P32.to_string());
    assert_eq!("32", SampleFormat::S32.to_string());
    assert_eq!("f", SampleFormat::Float.to_string());
    assert_eq!("dsd", SampleFormat::Dsd.to_string());
}

#[test]
fn parse_display_names() {
    for format in SampleFormat::VALID {
        assert_eq!(Ok(format), format.as_str().parse());
    }
}

#[test]
fn parse_rejects_unknown_and_undefined() {
    assert_eq!(
        Err(Error::UnknownSampleFormat("?".to_owned())),
        "?".parse::<SampleFormat>()
    );
    assert!("".parse::<SampleFormat>().is_err());
    assert!("F".parse::<SampleFormat>().is_err());
    assert!("64".parse::<SampleFormat>().is_err());
}

#[test]
fn validate_agrees_with_is_valid() {
    for format in std::iter::once(SampleFormat::Undefined).chain(SampleFormat::VALID) {
        assert_eq!(format.is_valid(), format.validate().is_ok());
    }
}
