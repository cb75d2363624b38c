//! Plan des vœux d'anniversaire sur une fenêtre de 7 jours.
//!
//! - Fenêtre inclusive `[today, today + 6]`, calculée sur l'année de `today`.
//! - Un anniversaire tombant le week-end est souhaité le lundi suivant.
//! - Un 29 février hors année bissextile est ramené au 28 février.

use crate::model::{ContactBook, Record};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeMap;
use std::fmt;

/// Nombre de jours couverts par le plan, aujourd'hui compris.
pub const WINDOW_DAYS: i64 = 7;

pub const NO_BIRTHDAYS: &str = "No birthdays in the next 7 days.";
pub const PLAN_HEADER: &str = "Greeting plan for the week:";

/// Noms à saluer, regroupés par date de vœux croissante.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreetingPlan {
    days: BTreeMap<NaiveDate, Vec<String>>,
}

impl GreetingPlan {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn names_on(&self, date: NaiveDate) -> &[String] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[String])> {
        self.days.iter().map(|(d, names)| (*d, names.as_slice()))
    }

    fn push(&mut self, date: NaiveDate, name: &str) {
        self.days.entry(date).or_default().push(name.to_owned());
    }
}

impl fmt::Display for GreetingPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str(NO_BIRTHDAYS);
        }
        f.write_str(PLAN_HEADER)?;
        for (date, names) in self.iter() {
            write!(f, "\n{}: {}", date.format("%Y-%m-%d"), names.join(", "))?;
        }
        Ok(())
    }
}

/// Construit le plan des vœux pour la semaine commençant à `today`.
pub fn plan_greetings(book: &ContactBook, today: NaiveDate) -> GreetingPlan {
    let last_day = today
        .checked_add_signed(Duration::days(WINDOW_DAYS - 1))
        .unwrap_or(NaiveDate::MAX);
    let mut plan = GreetingPlan::default();

    for record in book.records() {
        let Some(this_year) = birthday_in_year(record, today.year()) else {
            continue;
        };
        if this_year < today || this_year > last_day {
            continue;
        }
        plan.push(greeting_date(this_year), record.name().as_str());
    }
    plan
}

/// Version texte de [`plan_greetings`], telle qu'affichée par la commande `birthdays`.
pub fn upcoming_birthdays(book: &ContactBook, today: NaiveDate) -> String {
    plan_greetings(book, today).to_string()
}

/// Date de vœux : samedi et dimanche sont reportés au lundi.
///
/// En bout de calendrier (`NaiveDate::MAX`), la date reste inchangée.
pub fn greeting_date(birthday: NaiveDate) -> NaiveDate {
    let shift = match birthday.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => return birthday,
    };
    birthday
        .checked_add_signed(Duration::days(shift))
        .unwrap_or(birthday)
}

fn birthday_in_year(record: &Record, year: i32) -> Option<NaiveDate> {
    let birthday = record.birthday()?.date();
    birthday.with_year(year).or_else(|| {
        tracing::warn!(name = %record.name(), year, "leap-day birthday moved to Feb 28");
        NaiveDate::from_ymd_opt(year, 2, 28)
    })
}
