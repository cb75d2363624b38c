//! Champs validés d'un contact.
//!
//! La validation a lieu à la construction ; une valeur construite ne change plus.

use crate::error::{ContactError, Result};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Format d'affichage et de saisie des anniversaires.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

const PHONE_LEN: usize = 10;

/// Numéro de téléphone : exactement 10 chiffres ASCII.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse<S: AsRef<str>>(s: S) -> Result<Self> {
        let s = s.as_ref();
        if s.len() != PHONE_LEN || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ContactError::InvalidPhone(s.to_owned()));
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ContactError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

/// Date d'anniversaire saisie au format `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct BirthdayDate(NaiveDate);

impl BirthdayDate {
    /// Exige la forme exacte `DD.MM.YYYY` puis une date calendaire valide.
    pub fn parse<S: AsRef<str>>(s: S) -> Result<Self> {
        let s = s.as_ref();
        let invalid = || ContactError::InvalidDateFormat(s.to_owned());
        if !has_birthday_shape(s) {
            return Err(invalid());
        }
        NaiveDate::parse_from_str(s, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn format(&self) -> String {
        self.0.format(BIRTHDAY_FORMAT).to_string()
    }
}

fn has_birthday_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

impl From<NaiveDate> for BirthdayDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for BirthdayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl FromStr for BirthdayDate {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BirthdayDate {
    type Error = ContactError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<BirthdayDate> for String {
    fn from(birthday: BirthdayDate) -> Self {
        birthday.format()
    }
}

/// Nom d'un contact, clé unique du carnet (comparaison exacte).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct ContactName(String);

impl ContactName {
    pub fn new<S: AsRef<str>>(s: S) -> Result<Self> {
        let s = s.as_ref();
        if s.is_empty() {
            return Err(ContactError::InvalidName);
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ContactName {
    type Error = ContactError;

    fn try_from(s: String) -> Result<Self> {
        Self::new(s)
    }
}

impl From<ContactName> for String {
    fn from(name: ContactName) -> Self {
        name.0
    }
}
