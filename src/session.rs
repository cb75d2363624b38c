use crate::command::{handle_line, Outcome};
use crate::model::ContactBook;
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const DEFAULT_PROMPT: &str = "Enter a command: ";
pub const INVALID_UTF8: &str = "Invalid input: not valid UTF-8.";

/// Source de la date du jour pour le plan des anniversaires.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Date locale du système.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Date figée (tests, option `--today`).
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Boucle interactive : une commande par ligne jusqu'à `exit` ou la fin de l'entrée.
pub struct Session<'a> {
    book: ContactBook,
    clock: &'a dyn Clock,
    prompt: String,
}

impl<'a> Session<'a> {
    pub fn new(clock: &'a dyn Clock) -> Self {
        Self {
            book: ContactBook::new(),
            clock,
            prompt: DEFAULT_PROMPT.to_owned(),
        }
    }

    pub fn with_prompt<S: Into<String>>(mut self, prompt: S) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn book(&self) -> &ContactBook {
        &self.book
    }

    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{WELCOME}")?;
        let mut buf = Vec::new();
        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                tracing::debug!("end of input");
                writeln!(output)?;
                return Ok(());
            }
            let Ok(line) = std::str::from_utf8(&buf) else {
                tracing::debug!(len = buf.len(), "skipping non UTF-8 line");
                writeln!(output, "{INVALID_UTF8}")?;
                continue;
            };

            let outcome = handle_line(&mut self.book, line, self.clock.today());
            writeln!(output, "{}", outcome.message())?;
            if let Outcome::Exit(_) = outcome {
                return Ok(());
            }
        }
    }
}
