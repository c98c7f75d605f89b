use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::entities::enquiries;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enquiry {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
    pub created_at: String,
    pub status: String,
}

impl From<enquiries::Model> for Enquiry {
    fn from(model: enquiries::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            service: model.service,
            message: model.message,
            created_at: model.created_at,
            status: model.status,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Missing required fields")]
pub struct MissingFields;

/// Raw submission as received from a client. Every field is optional so that
/// absence can be reported as a single validation failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnquiryFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
}

/// A validated enquiry ready for insertion. All fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEnquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl NewEnquiry {
    pub fn parse(fields: EnquiryFields) -> Result<Self, MissingFields> {
        fn required(value: Option<String>) -> Result<String, MissingFields> {
            match value.as_deref().map(str::trim) {
                Some(v) if !v.is_empty() => Ok(v.to_string()),
                _ => Err(MissingFields),
            }
        }

        Ok(Self {
            name: required(fields.name)?,
            email: required(fields.email)?,
            phone: required(fields.phone)?,
            service: required(fields.service)?,
            message: required(fields.message)?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnquiryStatus {
    #[default]
    New,
    InProgress,
    Resolved,
    Closed,
}

impl EnquiryStatus {
    pub const ALL: [Self; 4] = [Self::New, Self::InProgress, Self::Resolved, Self::Closed];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProgress => "In progress",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for EnquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown enquiry status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for EnquiryStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Status predicate for listings. The store does not constrain status values,
/// so `Only` matches any string exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(String),
}

impl StatusFilter {
    pub const ALL_KEYWORD: &'static str = "all";

    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some(Self::ALL_KEYWORD) => Self::All,
            Some(status) => Self::Only(status.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => Self::ALL_KEYWORD,
            Self::Only(status) => status,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnquiryFilter {
    pub status: StatusFilter,
    pub search: Option<String>,
}

impl EnquiryFilter {
    #[must_use]
    pub fn from_params(status: Option<&str>, search: Option<&str>) -> Self {
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Self {
            status: StatusFilter::parse(status),
            search,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnquiryListing {
    pub enquiries: Vec<Enquiry>,
    pub status_counts: Vec<StatusCount>,
}

impl EnquiryListing {
    #[must_use]
    pub fn total(&self) -> i64 {
        self.status_counts.iter().map(|c| c.count).sum()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_enquiries: i64,
    pub status_counts: Vec<StatusCount>,
    pub active_subscribers: u64,
    pub total_subscribers: u64,
}
