//! The warrant record handed to the document renderer.
//!
//! Records are produced and validated upstream. The renderer reads them as
//! immutable values and tolerates missing optional fields.

use crate::ids::WarrantId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarrantKind {
    #[serde(alias = "perquisition")]
    Search,
    #[serde(alias = "arrestation")]
    Arrest,
    #[serde(alias = "requisition")]
    Subpoena,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarrantStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl WarrantStatus {
    /// Only `Pending` can still transition; the others are final decisions.
    pub fn is_terminal(self) -> bool {
        !matches!(self, WarrantStatus::Pending)
    }
}

/// One row of criminal-history data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrestEntry {
    pub date: String,
    pub charges: String,
}

impl ArrestEntry {
    pub fn new(date: impl Into<String>, charges: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            charges: charges.into(),
        }
    }
}

/// Criminal history attached to a warrant. Entry order is render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriminalRecord {
    #[serde(alias = "name")]
    pub subject_name: String,
    #[serde(alias = "reference")]
    pub reference_id: String,
    #[serde(alias = "arrests", default)]
    pub entries: Vec<ArrestEntry>,
}

impl CriminalRecord {
    pub fn new(subject_name: impl Into<String>, reference_id: impl Into<String>) -> Self {
        Self {
            subject_name: subject_name.into(),
            reference_id: reference_id.into(),
            entries: Vec::new(),
        }
    }

    pub fn with_entries(mut self, entries: Vec<ArrestEntry>) -> Self {
        self.entries = entries;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarrantRecord {
    pub id: WarrantId,
    #[serde(rename = "type", alias = "kind")]
    pub kind: WarrantKind,
    #[serde(default)]
    pub status: WarrantStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub officer_name: String,
    pub target_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub reason: String,
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judge_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criminal_record: Option<CriminalRecord>,
}

/// The decision block variant, resolved once from the record's status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision<'a> {
    Pending,
    Approved {
        judge_name: Option<&'a str>,
        approved_at: DateTime<Utc>,
    },
    Rejected {
        judge_name: Option<&'a str>,
        reason: Option<&'a str>,
    },
    Cancelled {
        judge_name: Option<&'a str>,
    },
}

impl WarrantRecord {
    /// A freshly filed, pending warrant.
    pub fn new(
        id: impl Into<WarrantId>,
        kind: WarrantKind,
        created_at: DateTime<Utc>,
        officer_name: impl Into<String>,
        target_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            status: WarrantStatus::Pending,
            created_at,
            updated_at: created_at,
            officer_name: officer_name.into(),
            target_name: target_name.into(),
            location: None,
            reason: String::new(),
            details: String::new(),
            judge_name: None,
            rejection_reason: None,
            criminal_record: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_narrative(mut self, reason: impl Into<String>, details: impl Into<String>) -> Self {
        self.reason = reason.into();
        self.details = details.into();
        self
    }

    pub fn with_status(mut self, status: WarrantStatus, decided_at: DateTime<Utc>) -> Self {
        self.status = status;
        self.updated_at = decided_at;
        self
    }

    pub fn with_judge(mut self, judge_name: impl Into<String>) -> Self {
        self.judge_name = Some(judge_name.into());
        self
    }

    pub fn with_rejection_reason(mut self, reason: impl Into<String>) -> Self {
        self.rejection_reason = Some(reason.into());
        self
    }

    pub fn with_criminal_record(mut self, record: CriminalRecord) -> Self {
        self.criminal_record = Some(record);
        self
    }

    /// Location is only meaningful for searches, and only when it says something.
    pub fn shows_location(&self) -> bool {
        self.kind == WarrantKind::Search
            && self
                .location
                .as_deref()
                .is_some_and(|l| !l.trim().is_empty())
    }

    /// The location to print, if any.
    pub fn displayed_location(&self) -> Option<&str> {
        if self.shows_location() {
            self.location.as_deref()
        } else {
            None
        }
    }

    pub fn decision(&self) -> Decision<'_> {
        let judge_name = self.judge_name.as_deref();
        match self.status {
            WarrantStatus::Pending => Decision::Pending,
            WarrantStatus::Approved => Decision::Approved {
                judge_name,
                approved_at: self.updated_at,
            },
            WarrantStatus::Rejected => Decision::Rejected {
                judge_name,
                reason: self.rejection_reason.as_deref(),
            },
            WarrantStatus::Cancelled => Decision::Cancelled { judge_name },
        }
    }

    /// History rows to paginate; `None` when there is nothing to print.
    pub fn ledger(&self) -> Option<&CriminalRecord> {
        self.criminal_record
            .as_ref()
            .filter(|record| !record.entries.is_empty())
    }
}

/// Strips the `#discriminator` suffix carried by account handles.
pub fn display_name(raw: &str) -> &str {
    raw.split('#').next().unwrap_or(raw).trim()
}
