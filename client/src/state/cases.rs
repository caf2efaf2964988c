//! Legal cases and the filters applied to them.
//!
//! DESIGN
//! ======
//! Filtering and counting are plain functions over slices so pages stay thin
//! and the rules are testable without a reactive runtime.

#[cfg(test)]
#[path = "cases_test.rs"]
mod cases_test;

use serde::{Deserialize, Serialize};
use time::{Date, PrimitiveDateTime};

/// Workflow status of a case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    New,
    InProgress,
    Pending,
    Resolved,
    Closed,
}

impl CaseStatus {
    pub const ALL: [Self; 5] = [Self::New, Self::InProgress, Self::Pending, Self::Resolved, Self::Closed];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in_progress",
            Self::Pending => "pending",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in progress",
            Self::Pending => "pending",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }

    /// Parse the storage spelling used by `<select>` values.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }

    /// Resolved and closed cases no longer count as active.
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Resolved | Self::Closed)
    }

    /// CSS modifier for the status badge.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::New => "badge badge--blue",
            Self::InProgress => "badge badge--yellow",
            Self::Pending => "badge badge--purple",
            Self::Resolved => "badge badge--green",
            Self::Closed => "badge badge--gray",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalCase {
    pub id: String,
    pub client_id: String,
    pub client_name: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: CaseStatus,
    pub priority: Priority,
    pub due_date: Option<Date>,
    pub documents: Vec<String>,
    pub created_at: Date,
    pub updated_at: Date,
}

/// Filter selections on the cases page. `None` means "all".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaseFilter {
    pub search: String,
    pub category: Option<String>,
    pub status: Option<CaseStatus>,
}

impl CaseFilter {
    /// Does `case` pass every active filter?
    ///
    /// Search is case-insensitive over title, description and category.
    #[must_use]
    pub fn matches(&self, case: &LegalCase) -> bool {
        let query = self.search.trim().to_lowercase();
        if !query.is_empty() {
            let hit = case.title.to_lowercase().contains(&query)
                || case.description.to_lowercase().contains(&query)
                || case.category.to_lowercase().contains(&query);
            if !hit {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &case.category != category {
                return false;
            }
        }
        if let Some(status) = self.status {
            if case.status != status {
                return false;
            }
        }
        true
    }

    #[must_use]
    pub fn apply(&self, cases: &[LegalCase]) -> Vec<LegalCase> {
        cases.iter().filter(|c| self.matches(c)).cloned().collect()
    }
}

/// Case browser tab. Tabs narrow the already-filtered list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaseTab {
    #[default]
    Active,
    Closed,
    All,
}

impl CaseTab {
    pub const ALL: [Self; 3] = [Self::Active, Self::Closed, Self::All];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active Cases",
            Self::Closed => "Closed Cases",
            Self::All => "All Cases",
        }
    }

    /// Active means neither resolved nor closed; closed is the complement.
    #[must_use]
    pub fn includes(self, case: &LegalCase) -> bool {
        match self {
            Self::Active => case.status.is_active(),
            Self::Closed => !case.status.is_active(),
            Self::All => true,
        }
    }

    #[must_use]
    pub fn select(self, cases: &[LegalCase]) -> Vec<LegalCase> {
        cases.iter().filter(|c| self.includes(c)).cloned().collect()
    }
}

/// Distinct categories in first-seen order.
#[must_use]
pub fn categories(cases: &[LegalCase]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for case in cases {
        if !out.contains(&case.category) {
            out.push(case.category.clone());
        }
    }
    out
}

#[must_use]
pub fn active_count(cases: &[LegalCase]) -> usize {
    cases.iter().filter(|c| c.status.is_active()).count()
}

/// High-priority cases that are still active.
#[must_use]
pub fn urgent_cases(cases: &[LegalCase]) -> Vec<LegalCase> {
    cases
        .iter()
        .filter(|c| c.priority == Priority::High && c.status.is_active())
        .cloned()
        .collect()
}

/// Move a case to `status`, stamping `updated_at`. Returns `false` if the id is unknown.
pub fn set_status(cases: &mut [LegalCase], case_id: &str, status: CaseStatus, now: PrimitiveDateTime) -> bool {
    let Some(case) = cases.iter_mut().find(|c| c.id == case_id) else {
        return false;
    };
    case.status = status;
    case.updated_at = now.date();
    true
}
