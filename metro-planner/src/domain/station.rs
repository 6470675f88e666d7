//! Station and line identity types.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a station within a network.
///
/// Stations that share a physical location but sit on different lines
/// have different identifiers (e.g. `K1` on the Red Line and `M2` on the
/// Blue Line are both "Kizilay").
///
/// # Examples
///
/// ```
/// use metro_planner::domain::StationId;
///
/// let id = StationId::new("K1");
/// assert_eq!(id.as_str(), "K1");
/// assert_eq!(id, StationId::from("K1"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    /// Create a station identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StationId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for StationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// Lets maps keyed by `StationId` be queried with a plain `&str`.
impl Borrow<str> for StationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of a transit line, e.g. "Red Line".
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Line(String);

impl Line {
    /// Create a line name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the line name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Line {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for Line {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({})", self.0)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stop on one specific line.
///
/// The same physical stop served by two lines is two `Station`s joined by
/// a transfer connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Station {
    id: StationId,
    name: String,
    line: Line,
}

impl Station {
    /// Create a station.
    pub fn new(id: impl Into<StationId>, name: impl Into<String>, line: impl Into<Line>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            line: line.into(),
        }
    }

    pub fn id(&self) -> &StationId {
        &self.id
    }

    /// Display name, shared by stations at the same location.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn line(&self) -> &Line {
        &self.line
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
