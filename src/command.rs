use crate::birthdays::upcoming_birthdays;
use crate::error::{ContactError, Result};
use crate::fields::{BirthdayDate, PhoneNumber};
use crate::model::{ContactBook, Record};
use chrono::NaiveDate;

pub const HELP: &str = "Available commands:
add <name> <phone> [birthday DD.MM.YYYY]
change <name> <old_phone> <new_phone>
delete <name>
phone <name>
find <name>
add-birthday <name> <DD.MM.YYYY>
show-birthday <name>
birthdays
all
hello
help
exit / close";

pub const UNKNOWN: &str = "Unknown command. Type 'help' to see the list of available commands.";
pub const FAREWELL: &str = "Good bye!";

/// Commande interactive déjà découpée et typée.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add {
        name: String,
        phone: String,
        birthday: Option<String>,
    },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    Phone {
        name: String,
    },
    All,
    Delete {
        name: String,
    },
    Find {
        name: String,
    },
    AddBirthday {
        name: String,
        date: String,
    },
    ShowBirthday {
        name: String,
    },
    Birthdays,
    Help,
    Exit,
    Unknown(String),
}

/// Résultat d'une commande pour la boucle interactive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Exit(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Self::Continue(msg) | Self::Exit(msg) => msg,
        }
    }
}

impl Command {
    /// Découpe une ligne : premier mot (insensible à la casse) puis arguments.
    pub fn parse(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            return Ok(Self::Unknown(String::new()));
        };
        let keyword = keyword.to_lowercase();
        let args: Vec<&str> = words.collect();

        let cmd = match keyword.as_str() {
            "hello" | "hi" => Self::Hello,
            "add" => {
                let [name, phone] = require::<2>(&args, "add", "add <name> <phone> [birthday]")?;
                Self::Add {
                    name,
                    phone,
                    birthday: args.get(2).map(|s| (*s).to_owned()),
                }
            }
            "change" => {
                let [name, old_phone, new_phone] =
                    require::<3>(&args, "change", "change <name> <old_phone> <new_phone>")?;
                Self::Change {
                    name,
                    old_phone,
                    new_phone,
                }
            }
            "phone" => {
                let [name] = require::<1>(&args, "phone", "phone <name>")?;
                Self::Phone { name }
            }
            "all" => Self::All,
            "delete" | "del" => {
                let [name] = require::<1>(&args, "delete", "delete <name>")?;
                Self::Delete { name }
            }
            "find" => {
                let [name] = require::<1>(&args, "find", "find <name>")?;
                Self::Find { name }
            }
            "add-birthday" => {
                let [name, date] =
                    require::<2>(&args, "add-birthday", "add-birthday <name> <DD.MM.YYYY>")?;
                Self::AddBirthday { name, date }
            }
            "show-birthday" => {
                let [name] = require::<1>(&args, "show-birthday", "show-birthday <name>")?;
                Self::ShowBirthday { name }
            }
            "birthdays" => Self::Birthdays,
            "help" => Self::Help,
            "exit" | "close" => Self::Exit,
            _ => Self::Unknown(keyword),
        };
        Ok(cmd)
    }
}

/// Prend les `N` premiers arguments ; les suivants sont ignorés.
fn require<const N: usize>(
    args: &[&str],
    command: &'static str,
    usage: &'static str,
) -> Result<[String; N]> {
    let missing = || ContactError::MissingArguments { command, usage };
    let head = args.get(..N).ok_or_else(missing)?;
    let mut out: [String; N] = std::array::from_fn(|_| String::new());
    for (slot, arg) in out.iter_mut().zip(head) {
        *slot = (*arg).to_owned();
    }
    Ok(out)
}

/// Analyse puis exécute une ligne ; toute erreur devient un message d'une ligne.
pub fn handle_line(book: &mut ContactBook, line: &str, today: NaiveDate) -> Outcome {
    match Command::parse(line) {
        Ok(cmd) => execute(book, cmd, today),
        Err(err) => Outcome::Continue(err.user_message()),
    }
}

/// Exécute une commande sur le carnet.
pub fn execute(book: &mut ContactBook, command: Command, today: NaiveDate) -> Outcome {
    tracing::debug!(?command, "dispatching");
    if command == Command::Exit {
        return Outcome::Exit(FAREWELL.to_owned());
    }
    match run(book, command, today) {
        Ok(reply) => Outcome::Continue(reply),
        Err(err) => {
            tracing::debug!(error = %err, "command failed");
            Outcome::Continue(err.user_message())
        }
    }
}

fn run(book: &mut ContactBook, command: Command, today: NaiveDate) -> Result<String> {
    match command {
        Command::Hello => Ok("How can I help you?".to_owned()),
        Command::Add {
            name,
            phone,
            birthday,
        } => add_contact(book, &name, &phone, birthday.as_deref()),
        Command::Change {
            name,
            old_phone,
            new_phone,
        } => {
            let record = find_mut(book, &name)?;
            if record.edit_phone(&old_phone, &new_phone)? {
                Ok("Phone number updated.".to_owned())
            } else {
                Ok("Old phone number not found.".to_owned())
            }
        }
        Command::Phone { name } => Ok(find(book, &name)?.render()),
        Command::All => {
            if book.is_empty() {
                Ok("No contacts found.".to_owned())
            } else {
                Ok(book.render_all())
            }
        }
        Command::Delete { name } => {
            if book.delete(&name) {
                Ok(format!("Contact '{name}' deleted."))
            } else {
                Ok(format!("Contact '{name}' not found."))
            }
        }
        Command::Find { name } => match book.find(&name) {
            Some(record) => Ok(format!("Found: {record}")),
            None => Ok(format!("No contact named '{name}'.")),
        },
        Command::AddBirthday { name, date } => {
            find_mut(book, &name)?.set_birthday(&date)?;
            Ok(format!("Birthday for '{name}' added/updated."))
        }
        Command::ShowBirthday { name } => match find(book, &name)?.birthday() {
            Some(birthday) => Ok(format!("Birthday of '{name}': {birthday}")),
            None => Ok(format!("Contact '{name}' has no birthday saved.")),
        },
        Command::Birthdays => Ok(upcoming_birthdays(book, today)),
        Command::Help => Ok(HELP.to_owned()),
        Command::Exit => Ok(FAREWELL.to_owned()),
        Command::Unknown(_) => Ok(UNKNOWN.to_owned()),
    }
}

/// Ajoute un téléphone à une fiche existante ou crée la fiche.
///
/// Les deux valeurs sont validées avant toute modification du carnet.
fn add_contact(
    book: &mut ContactBook,
    name: &str,
    phone: &str,
    birthday: Option<&str>,
) -> Result<String> {
    let phone = PhoneNumber::parse(phone)?;
    let birthday = birthday.map(BirthdayDate::parse).transpose()?;

    if let Some(record) = book.find_mut(name) {
        record.push_phone(phone);
        if let Some(b) = birthday {
            record.set_birthday_date(b);
        }
        return Ok(format!("Contact '{name}' updated."));
    }

    let mut record = Record::new(name, None, None)?;
    record.push_phone(phone);
    if let Some(b) = birthday {
        record.set_birthday_date(b);
    }
    book.add_record(record);
    Ok(format!("Contact '{name}' added."))
}

fn find<'a>(book: &'a ContactBook, name: &str) -> Result<&'a Record> {
    book.find(name)
        .ok_or_else(|| ContactError::ContactNotFound(name.to_owned()))
}

fn find_mut<'a>(book: &'a mut ContactBook, name: &str) -> Result<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| ContactError::ContactNotFound(name.to_owned()))
}
