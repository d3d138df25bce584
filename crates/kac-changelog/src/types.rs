//! Changelog types

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::spec::grammar::{DATE_FORMAT, NOT_RELEASED, UNKNOWN_DATE, UNRELEASED};

/// A parsed changelog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changelog {
    /// Free text lines before the first release
    pub preamble: Vec<String>,
    /// Releases, ordered per the parser's configured release order
    pub releases: Vec<Release>,
}

impl Changelog {
    /// Find a release by its version label
    pub fn release(&self, version: &str) -> Option<&Release> {
        self.releases.iter().find(|r| r.version == version)
    }

    /// The pending release, if the changelog has one
    pub fn unreleased(&self) -> Option<&Release> {
        self.releases.iter().find(|r| r.is_unreleased())
    }

    /// Check if the changelog has no releases
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}

/// The date-or-status token attached to a release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseDate {
    /// A calendar release date
    Date(NaiveDate),
    /// Released, but the date is not recorded
    Unknown,
    /// Not released yet
    NotReleased,
}

impl ReleaseDate {
    /// Get the calendar date, if there is one
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Unknown | Self::NotReleased => None,
        }
    }
}

impl fmt::Display for ReleaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            Self::Unknown => f.write_str(UNKNOWN_DATE),
            Self::NotReleased => f.write_str(NOT_RELEASED),
        }
    }
}

impl FromStr for ReleaseDate {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UNKNOWN_DATE => Ok(Self::Unknown),
            NOT_RELEASED => Ok(Self::NotReleased),
            _ => NaiveDate::parse_from_str(s, DATE_FORMAT).map(Self::Date),
        }
    }
}

impl Serialize for ReleaseDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReleaseDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}

/// A release in a changelog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Version label, or `Unreleased`
    pub version: String,
    /// Release date or status
    pub date: ReleaseDate,
    /// Free text lines attached to the release
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    /// Groups in this release
    pub groups: Vec<Group>,
}

impl Release {
    /// Create a new release without groups
    pub fn new(version: impl Into<String>, date: ReleaseDate) -> Self {
        Self {
            version: version.into(),
            date,
            notes: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Check if this is the pending `Unreleased` release
    pub fn is_unreleased(&self) -> bool {
        self.version == UNRELEASED
    }

    /// Find a group by name
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups
            .iter()
            .find(|g| g.name.as_deref() == Some(name))
    }

    /// Total number of entries, nested ones included
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(Group::entry_count).sum()
    }

    /// Check if the release has no entries
    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }
}

/// A named group of entries (Added, Fixed, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Group name; `None` for entries listed before any group heading
    pub name: Option<String>,
    /// Top-level entries
    pub entries: Vec<Entry>,
}

impl Group {
    /// Create a new named group
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            entries: Vec::new(),
        }
    }

    /// Create the group holding entries without a heading
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// Find an entry by text, searching depth-first
    pub fn find_entry(&self, text: &str) -> Option<&Entry> {
        self.entries.iter().find_map(|e| e.find(text))
    }

    /// Total number of entries, nested ones included
    pub fn entry_count(&self) -> usize {
        self.entries.iter().map(Entry::count).sum()
    }
}

/// A single changelog entry, possibly with nested entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Entry text
    pub text: String,
    /// Nested entries
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Entry>,
}

impl Entry {
    /// Create a new entry without children
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            children: Vec::new(),
        }
    }

    fn find(&self, text: &str) -> Option<&Entry> {
        if self.text == text {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(text))
    }

    fn count(&self) -> usize {
        1 + self.children.iter().map(Entry::count).sum::<usize>()
    }
}
