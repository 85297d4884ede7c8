use std::fmt;

/// Destination position of an entry. Negative values are sentinels that
/// never navigate anywhere.
pub type TargetIndex = i64;

/// "Nothing is active" marker for callers that have no current position.
pub const NO_TARGET: TargetIndex = -1;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct EntryId(pub String);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One navigable item of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    pub target_index: TargetIndex,
    /// Page number shown next to the title.
    pub display_number: Option<u32>,
    /// Poem number, searchable as plain decimal text.
    pub sequence_number: Option<u32>,
}

impl Entry {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, target_index: TargetIndex) -> Self {
        Self {
            id: EntryId(id.into()),
            title: title.into(),
            target_index,
            display_number: None,
            sequence_number: None,
        }
    }

    #[must_use]
    pub fn with_display_number(mut self, n: u32) -> Self {
        self.display_number = Some(n);
        self
    }

    #[must_use]
    pub fn with_sequence_number(mut self, n: u32) -> Self {
        self.sequence_number = Some(n);
        self
    }

    #[must_use]
    pub fn is_navigable(&self) -> bool {
        self.target_index >= 0
    }

    #[must_use]
    pub fn is_active(&self, active: Option<TargetIndex>) -> bool {
        active == Some(self.target_index)
    }

    /// `007.` style label, or `None` when the entry carries no number.
    #[must_use]
    pub fn formatted_sequence(&self) -> Option<String> {
        self.sequence_number.map(|n| format!("{n:03}."))
    }
}
