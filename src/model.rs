use crate::error::Result;
use crate::fields::{BirthdayDate, ContactName, PhoneNumber};
use std::collections::BTreeMap;
use std::fmt;

/// Fiche d'un contact : nom, téléphones (ordre de saisie, doublons permis), anniversaire.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    name: ContactName,
    #[cfg_attr(feature = "serde", serde(default))]
    phones: Vec<PhoneNumber>,
    #[cfg_attr(feature = "serde", serde(default))]
    birthday: Option<BirthdayDate>,
}

impl Record {
    /// Crée une fiche en validant chaque champ fourni.
    pub fn new<N: AsRef<str>>(
        name: N,
        phone: Option<&str>,
        birthday: Option<&str>,
    ) -> Result<Self> {
        let mut record = Self::with_name(ContactName::new(name)?);
        if let Some(phone) = phone {
            record.add_phone(phone)?;
        }
        if let Some(birthday) = birthday {
            record.set_birthday(birthday)?;
        }
        Ok(record)
    }

    pub fn with_name(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }
    pub fn birthday(&self) -> Option<BirthdayDate> {
        self.birthday
    }

    pub fn add_phone(&mut self, phone: &str) -> Result<()> {
        self.push_phone(PhoneNumber::parse(phone)?);
        Ok(())
    }

    /// Ajoute un numéro déjà validé.
    pub fn push_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Retire toutes les occurrences de `value` ; aucun effet si absent.
    pub fn remove_phone(&mut self, value: &str) {
        self.phones.retain(|p| p.as_str() != value);
    }

    /// Remplace la première occurrence de `old` en conservant sa position.
    ///
    /// `new` est validé avant toute modification. Renvoie `false` si `old` est absent.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool> {
        let replacement = PhoneNumber::parse(new)?;
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                *slot = replacement;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    pub fn set_birthday(&mut self, birthday: &str) -> Result<()> {
        self.set_birthday_date(BirthdayDate::parse(birthday)?);
        Ok(())
    }

    pub fn set_birthday_date(&mut self, birthday: BirthdayDate) {
        self.birthday = Some(birthday);
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(f, "Name: {}, phone: {}, birthday: ", self.name, phones.join("; "))?;
        match &self.birthday {
            Some(b) => write!(f, "{b}"),
            None => f.write_str("not set"),
        }
    }
}

/// Carnet de contacts : une fiche par nom, ordonné par nom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<Record>", into = "Vec<Record>")
)]
pub struct ContactBook {
    records: BTreeMap<String, Record>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insère la fiche, en écrasant celle qui porterait déjà ce nom.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_owned();
        tracing::info!(name = %key, "contact stored");
        if self.records.insert(key, record).is_some() {
            tracing::debug!("previous record overwritten");
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn delete(&mut self, name: &str) -> bool {
        let removed = self.records.remove(name).is_some();
        if removed {
            tracing::info!(name, "contact deleted");
        }
        removed
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn render_all(&self) -> String {
        self.records()
            .map(Record::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromIterator<Record> for ContactBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl From<Vec<Record>> for ContactBook {
    fn from(records: Vec<Record>) -> Self {
        records.into_iter().collect()
    }
}

impl From<ContactBook> for Vec<Record> {
    fn from(book: ContactBook) -> Self {
        book.records.into_values().collect()
    }
}
