//! Homeowner name parser
//!
//! Turns raw homeowner entries such as `"Mr & Mrs Smith"` into one
//! [`Person`] per homeowner, filling in surnames that partners share
//! implicitly.

pub mod utils;

use crate::person::Person;
use log::debug;

/// Column header of the source file; never a data row
pub const HEADER_TOKEN: &str = "homeowner";

/// Parser for free-text homeowner entries
#[derive(Debug, Default, Clone, Copy)]
pub struct NameParser;

impl NameParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse every entry in order, skipping the header row
    pub fn parse_all<I, S>(&self, entries: I) -> Vec<Person>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut people = Vec::new();

        for entry in entries {
            let entry = entry.as_ref();
            if entry == HEADER_TOKEN {
                debug!("Skipping header row");
                continue;
            }
            people.extend(self.parse_entry(entry));
        }

        debug!("Parsed {} homeowners", people.len());
        people
    }

    /// Parse one entry into its group of people.
    ///
    /// The entry is split on conjunctions, every fragment becomes a person and
    /// missing surnames are back-filled within the group.
    pub fn parse_entry(&self, entry: &str) -> Vec<Person> {
        let mut group: Vec<Person> = utils::split_fragments(entry)
            .into_iter()
            .map(|fragment| self.parse_fragment(fragment))
            .collect();

        infer_surnames(&mut group);
        debug!("Entry {:?} produced {} homeowner(s)", entry, group.len());
        group
    }

    /// Parse a single-person fragment.
    ///
    /// The first token is the title, the last token the surname (when there
    /// are at least two) and anything in between the forename.
    pub fn parse_fragment(&self, fragment: &str) -> Person {
        let tokens = utils::split_tokens(fragment);
        let count = tokens.len();

        let title = tokens[0].to_string();
        let surname = (count > 1).then(|| tokens[count - 1].to_string());
        let forename = (count > 2)
            .then(|| utils::trim_forename(&tokens[1..count - 1].join(" ")).to_string());

        Person::new(Some(title), forename, surname)
    }
}

/// Give a surname-less person the surname of the person after them.
///
/// Runs a single left-to-right pass over adjacent pairs, so in
/// `"Mr & Mrs & Ms Smith"` only Mrs receives the surname.
pub fn infer_surnames(group: &mut [Person]) {
    for i in 1..group.len() {
        if group[i - 1].surname().is_none() {
            if let Some(surname) = group[i].surname().map(str::to_string) {
                group[i - 1].set_surname(Some(surname));
            }
        }
    }
}

/// Parse entries with a default parser
pub fn parse_all<I, S>(entries: I) -> Vec<Person>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    NameParser::new().parse_all(entries)
}
