//! Inbox entry and its closed taxonomy fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a taxonomy value is not one of the known options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field} '{value}': expected one of {}", .expected.join(", "))]
pub struct ParseSelectError {
    field: &'static str,
    value: String,
    expected: &'static [&'static str],
}

/// Defines a closed enum whose wire form is the name of a select option.
macro_rules! select_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($field:literal), default = $default:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $value)] $variant, )+
        }

        impl $name {
            /// Option names in declaration order.
            pub const NAMES: &'static [&'static str] = &[$($value),+];

            /// Returns the select option name.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $value, )+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseSelectError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $value => Ok(Self::$variant), )+
                    _ => Err(ParseSelectError {
                        field: $field,
                        value: s.to_string(),
                        expected: Self::NAMES,
                    }),
                }
            }
        }
    };
}

select_enum! {
    /// What kind of item an entry is.
    EntryType("type"), default = Note {
        Idea => "idea",
        Note => "note",
        Meeting => "meeting",
        Research => "research",
        Task => "task",
    }
}

select_enum! {
    /// Project an entry is filed under.
    Project("project"), default = Personal {
        Steward => "Steward",
        Tutoring => "Tutoring",
        Quant => "Quant",
        Personal => "Personal",
        Work => "Work",
    }
}

select_enum! {
    /// Triage state of an entry.
    Status("status"), default = Inbox {
        Inbox => "inbox",
        Triage => "triage",
        Next => "next",
        Done => "done",
    }
}

select_enum! {
    /// Where an entry came from.
    Source("source"), default = ChatGpt {
        ChatGpt => "ChatGPT",
        Manual => "manual",
        Voice => "voice",
        Web => "web",
    }
}

/// Error returned when constructing an invalid entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEntryError {
    #[error("invalid entry: title cannot be empty")]
    EmptyTitle,
}

/// One inbox item to file.
///
/// Entries are immutable once built. The title must contain something other
/// than whitespace but is stored as given. An empty content string is treated
/// the same as no content.
///
/// # Examples
///
/// ```
/// use notion_inbox::domain::{Entry, EntryType};
///
/// let entry = Entry::builder("Call the plumber")
///     .entry_type(EntryType::Task)
///     .tags(vec!["home".to_string()])
///     .build()
///     .unwrap();
/// assert_eq!(entry.title(), "Call the plumber");
/// assert_eq!(entry.content(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EntryFields", into = "EntryFields")]
pub struct Entry {
    title: String,
    content: Option<String>,
    entry_type: EntryType,
    project: Project,
    status: Status,
    tags: Vec<String>,
    source: Source,
    pinned: bool,
    also_add_to_daily_rollup: bool,
}

impl Entry {
    /// Creates an entry with default taxonomy and no content.
    ///
    /// # Errors
    ///
    /// Returns `ParseEntryError::EmptyTitle` if the title is empty or whitespace-only.
    pub fn new(title: impl Into<String>) -> Result<Self, ParseEntryError> {
        Self::builder(title).build()
    }

    /// Creates a builder for an entry with the given title.
    pub fn builder(title: impl Into<String>) -> EntryBuilder {
        EntryBuilder::new(title)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the free-form body, if any.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    pub fn project(&self) -> Project {
        self.project
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns tags in the order given. Duplicates are kept.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn pinned(&self) -> bool {
        self.pinned
    }

    /// Whether a link to the created page should also go into the daily rollup.
    pub fn also_add_to_daily_rollup(&self) -> bool {
        self.also_add_to_daily_rollup
    }
}

/// Builder for constructing an Entry with optional fields.
#[derive(Debug, Clone)]
pub struct EntryBuilder {
    fields: EntryFields,
}

impl EntryBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            fields: EntryFields {
                title: title.into(),
                ..EntryFields::default()
            },
        }
    }

    pub fn content(mut self, content: Option<String>) -> Self {
        self.fields.content = content;
        self
    }

    pub fn entry_type(mut self, entry_type: EntryType) -> Self {
        self.fields.entry_type = entry_type;
        self
    }

    pub fn project(mut self, project: Project) -> Self {
        self.fields.project = project;
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.fields.status = status;
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.fields.tags = tags;
        self
    }

    pub fn source(mut self, source: Source) -> Self {
        self.fields.source = source;
        self
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.fields.pinned = pinned;
        self
    }

    pub fn also_add_to_daily_rollup(mut self, enabled: bool) -> Self {
        self.fields.also_add_to_daily_rollup = enabled;
        self
    }

    /// Validates the fields and builds the entry.
    ///
    /// # Errors
    ///
    /// Returns `ParseEntryError::EmptyTitle` if the title is empty or whitespace-only.
    pub fn build(self) -> Result<Entry, ParseEntryError> {
        Entry::try_from(self.fields)
    }
}

/// Wire shape of an entry, with the defaults applied to omitted fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct EntryFields {
    title: String,
    content: Option<String>,
    #[serde(rename = "type")]
    entry_type: EntryType,
    project: Project,
    status: Status,
    tags: Vec<String>,
    source: Source,
    pinned: bool,
    also_add_to_daily_rollup: bool,
}

impl TryFrom<EntryFields> for Entry {
    type Error = ParseEntryError;

    fn try_from(fields: EntryFields) -> Result<Self, Self::Error> {
        if fields.title.trim().is_empty() {
            return Err(ParseEntryError::EmptyTitle);
        }

        Ok(Self {
            title: fields.title,
            content: fields.content.filter(|c| !c.is_empty()),
            entry_type: fields.entry_type,
            project: fields.project,
            status: fields.status,
            tags: fields.tags,
            source: fields.source,
            pinned: fields.pinned,
            also_add_to_daily_rollup: fields.also_add_to_daily_rollup,
        })
    }
}

impl From<Entry> for EntryFields {
    fn from(entry: Entry) -> Self {
        Self {
            title: entry.title,
            content: entry.content,
            entry_type: entry.entry_type,
            project: entry.project,
            status: entry.status,
            tags: entry.tags,
            source: entry.source,
            pinned: entry.pinned,
            also_add_to_daily_rollup: entry.also_add_to_daily_rollup,
        }
    }
}
