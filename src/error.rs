use thiserror::Error;

/// Erreurs du carnet de contacts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("phone number must be exactly 10 digits, got '{0}'")]
    InvalidPhone(String),
    #[error("invalid date '{0}', use DD.MM.YYYY")]
    InvalidDateFormat(String),
    #[error("contact name cannot be empty")]
    InvalidName,
    #[error("contact '{0}' not found")]
    ContactNotFound(String),
    #[error("not enough arguments for '{command}', usage: {usage}")]
    MissingArguments {
        command: &'static str,
        usage: &'static str,
    },
}

impl ContactError {
    /// Message d'une ligne affiché à l'utilisateur par la boucle interactive.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidPhone(_) | Self::InvalidDateFormat(_) | Self::InvalidName => {
                format!("Value error: {self}.")
            }
            Self::ContactNotFound(name) => format!("Contact '{name}' not found."),
            Self::MissingArguments { usage, .. } => {
                format!("Not enough arguments. Usage: {usage}")
            }
        }
    }
}

pub type Result<T, E = ContactError> = std::result::Result<T, E>;
