//! Person record produced by the name parser.
//!
//! A `Person` holds the pieces of one homeowner's name. The initial is
//! derived once, at construction, from the forename as it was supplied.

use serde::Serialize;
use std::fmt;

/// One homeowner parsed from a name fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    title: Option<String>,
    forename: Option<String>,
    surname: Option<String>,
    initial: Option<char>,
}

impl Person {
    /// Create a person from raw name parts.
    ///
    /// A single-character forename is treated as an initial only: `forename`
    /// becomes `None` and `initial` keeps the character. An empty forename
    /// leaves both unset.
    pub fn new(title: Option<String>, forename: Option<String>, surname: Option<String>) -> Self {
        let initial = forename.as_deref().and_then(|name| name.chars().next());

        // One letter is an initial, not a name
        let forename = forename.filter(|name| name.chars().count() > 1);

        Self { title, forename, surname, initial }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn forename(&self) -> Option<&str> {
        self.forename.as_deref()
    }

    pub fn surname(&self) -> Option<&str> {
        self.surname.as_deref()
    }

    pub fn initial(&self) -> Option<char> {
        self.initial
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub fn set_forename(&mut self, forename: Option<String>) {
        self.forename = forename;
    }

    pub fn set_surname(&mut self, surname: Option<String>) {
        self.surname = surname;
    }

    /// Forename if present, otherwise the initial, otherwise empty
    pub fn forename_or_initial(&self) -> String {
        match (&self.forename, self.initial) {
            (Some(forename), _) => forename.clone(),
            (None, Some(initial)) => initial.to_string(),
            (None, None) => String::new(),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.title.as_deref().unwrap_or(""),
            self.forename_or_initial(),
            self.surname.as_deref().unwrap_or("")
        )
    }
}
