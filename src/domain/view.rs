//! Presentation values handed to a [`Presenter`](crate::domain::ports::Presenter).
//!
//! Nothing here knows how it is drawn; a terminal, a test recorder or a DOM binding all
//! receive the same data.

use crate::domain::state::Level;
use std::fmt;
use std::time::Duration;

pub const STAFF_PLACEHOLDER: &str = "Select staff";
pub const SCHEDULE_PLACEHOLDER: &str = "Select date & time";
pub const SUMMARY_PROMPT: &str = "Select a service to see details";
pub const MISSING_FIELDS_ALERT: &str = "Please fill in all required fields";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionItem {
    pub value: String,
    pub label: String,
}

/// Contents of a dependent dropdown: the leading placeholder entry, the real options, and
/// whether the user may interact with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlView {
    pub placeholder: String,
    pub options: Vec<OptionItem>,
    pub enabled: bool,
}

impl ControlView {
    pub fn disabled(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            options: Vec::new(),
            enabled: false,
        }
    }

    pub fn populated(placeholder: impl Into<String>, options: Vec<OptionItem>) -> Self {
        Self {
            placeholder: placeholder.into(),
            options,
            enabled: true,
        }
    }

    /// Placeholder plus options, as a `<select>` would count them.
    pub fn entry_count(&self) -> usize {
        self.options.len() + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Disabled,
    Enabled,
    Processing,
}

impl SubmitState {
    pub fn label(self) -> &'static str {
        match self {
            SubmitState::Disabled | SubmitState::Enabled => "Book Appointment",
            SubmitState::Processing => "Processing...",
        }
    }

    pub fn is_clickable(self) -> bool {
        self == SubmitState::Enabled
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoticeId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The lookup worked but had nothing to offer.
    Advisory,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub level: Level,
    pub kind: NoticeKind,
    pub message: String,
    pub dismiss_after: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryBlock {
    pub heading: String,
    pub rows: Vec<SummaryRow>,
}

impl SummaryBlock {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.rows.push(SummaryRow {
            label,
            value: value.into(),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    Prompt(&'static str),
    Booking(Vec<SummaryBlock>),
}

impl Summary {
    pub fn blocks(&self) -> &[SummaryBlock] {
        match self {
            Summary::Prompt(_) => &[],
            Summary::Booking(blocks) => blocks,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Summary::Prompt(prompt) => f.write_str(prompt),
            Summary::Booking(blocks) => {
                for (i, block) in blocks.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    writeln!(f, "{}", block.heading)?;
                    for row in &block.rows {
                        writeln!(f, "  {}: {}", row.label, row.value)?;
                    }
                }
                Ok(())
            }
        }
    }
}
