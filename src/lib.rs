#![forbid(unsafe_code)]
//! Repertoire — carnet de contacts en mémoire (sans persistance).
//!
//! - Champs validés à la construction (téléphone à 10 chiffres, date `DD.MM.YYYY`).
//! - Fiches indexées par nom.
//! - Plan des vœux d'anniversaire sur 7 jours, week-ends reportés au lundi.
//! - La date du jour est toujours passée en paramètre ; l'horloge reste hors du calcul.

pub mod birthdays;
pub mod command;
pub mod error;
pub mod fields;
pub mod model;
pub mod session;

pub use birthdays::{greeting_date, plan_greetings, upcoming_birthdays, GreetingPlan};
pub use command::{execute, handle_line, Command, Outcome};
pub use error::ContactError;
pub use fields::{BirthdayDate, ContactName, PhoneNumber};
pub use model::{ContactBook, Record};
pub use session::{Clock, FixedClock, Session, SystemClock};
