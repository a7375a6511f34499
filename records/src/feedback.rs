//! Feedback records submitted by end users and triaged by admins.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::RecordError;
use crate::wire::{opt_string_or_number, string_or_number};

/// Kind of feedback a user is leaving.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackType {
    #[default]
    Suggestion,
    Complaint,
    Compliment,
}

/// Admin workflow state of a feedback item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Closed,
}

/// Admin-assigned urgency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl FeedbackType {
    pub const ALL: [Self; 3] = [Self::Suggestion, Self::Complaint, Self::Compliment];

    /// Wire name, also used as the `<select>` option value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Suggestion => "suggestion",
            Self::Complaint => "complaint",
            Self::Compliment => "compliment",
        }
    }

    /// Human label for buttons and badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Suggestion => "Suggestion",
            Self::Complaint => "Complaint",
            Self::Compliment => "Compliment",
        }
    }
}

impl FeedbackStatus {
    pub const ALL: [Self; 4] = [Self::Open, Self::InProgress, Self::Resolved, Self::Closed];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
        }
    }

    /// Resolved and closed items no longer need admin attention.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Resolved | Self::Closed)
    }
}

impl FeedbackPriority {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

macro_rules! wire_enum_traits {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = RecordError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| RecordError::UnknownVariant { kind: $kind, value: s.to_owned() })
            }
        }
    };
}

wire_enum_traits!(FeedbackType, "feedback type");
wire_enum_traits!(FeedbackStatus, "feedback status");
wire_enum_traits!(FeedbackPriority, "feedback priority");

/// A feedback item as returned by `GET /api/v1/feedback/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FeedbackType,
    pub message: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: FeedbackStatus,
    #[serde(default)]
    pub priority: FeedbackPriority,
    pub created_at: String,
    #[serde(default)]
    pub admin_response: Option<String>,
    #[serde(default)]
    pub resolved_at: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub resolved_by_user_id: Option<String>,
}

/// Body of `POST /api/v1/feedback/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackCreate {
    #[serde(rename = "type")]
    pub kind: FeedbackType,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl FeedbackCreate {
    /// Build a create payload from raw form input.
    ///
    /// The message is trimmed; blank name/email become `None`. Returns `None`
    /// when the trimmed message is empty.
    #[must_use]
    pub fn from_form(kind: FeedbackType, message: &str, name: &str, email: &str) -> Option<Self> {
        let message = message.trim();
        if message.is_empty() {
            return None;
        }
        Some(Self { kind, message: message.to_owned(), name: non_blank(name), email: non_blank(email) })
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Body of `PUT /api/v1/feedback/{id}`. Only set fields are sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<FeedbackStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<FeedbackPriority>,
}

impl FeedbackUpdate {
    #[must_use]
    pub fn status(status: FeedbackStatus) -> Self {
        Self { status: Some(status), ..Self::default() }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.admin_response.is_none() && self.priority.is_none()
    }
}

/// Aggregates from `GET /api/v1/feedback/admin/stats`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackStats {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub open: u32,
    #[serde(default)]
    pub in_progress: u32,
    #[serde(default)]
    pub resolved: u32,
    #[serde(default)]
    pub closed: u32,
    #[serde(default)]
    pub by_type: BTreeMap<String, u32>,
}

impl FeedbackStats {
    /// Count for one feedback type, zero when the server omitted it.
    #[must_use]
    pub fn count_for(&self, kind: FeedbackType) -> u32 {
        self.by_type.get(kind.as_str()).copied().unwrap_or(0)
    }
}
