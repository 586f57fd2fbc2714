//! Community moderation vocabulary: report reasons, report statuses, and
//! moderation actions.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Why a post was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportReason {
    Inappropriate,
    Spam,
    Dangerous,
    Misleading,
    Other,
}

impl ReportReason {
    /// Validate a client-supplied reason string.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value.to_ascii_lowercase().as_str() {
            "inappropriate" => Ok(Self::Inappropriate),
            "spam" => Ok(Self::Spam),
            "dangerous" => Ok(Self::Dangerous),
            "misleading" => Ok(Self::Misleading),
            "other" => Ok(Self::Other),
            other => Err(CoreError::Validation(format!(
                "Unknown report reason '{other}'. Use: inappropriate, spam, dangerous, misleading, or other"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inappropriate => "inappropriate",
            Self::Spam => "spam",
            Self::Dangerous => "dangerous",
            Self::Misleading => "misleading",
            Self::Other => "other",
        }
    }
}

/// Lifecycle state of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    Reviewed,
    Resolved,
}

impl ReportStatus {
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value.to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "reviewed" => Ok(Self::Reviewed),
            "resolved" => Ok(Self::Resolved),
            other => Err(CoreError::Validation(format!(
                "Unknown report status '{other}'. Use: pending, reviewed, or resolved"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewed => "reviewed",
            Self::Resolved => "resolved",
        }
    }
}

/// What an admin decided to do about a reported post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    /// Remove the post and resolve its reports.
    Delete,
    /// Keep the post; mark reports reviewed.
    Approve,
    /// Take no action on the post; mark reports reviewed.
    Ignore,
}

impl ModerationAction {
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value.to_ascii_lowercase().as_str() {
            "delete" => Ok(Self::Delete),
            "approve" => Ok(Self::Approve),
            "ignore" => Ok(Self::Ignore),
            other => Err(CoreError::Validation(format!(
                "Invalid action '{other}'. Use: delete, approve, or ignore"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Approve => "approve",
            Self::Ignore => "ignore",
        }
    }

    /// The status reports for the post move to under this action.
    pub fn resulting_report_status(self) -> ReportStatus {
        match self {
            Self::Delete => ReportStatus::Resolved,
            Self::Approve | Self::Ignore => ReportStatus::Reviewed,
        }
    }
}
