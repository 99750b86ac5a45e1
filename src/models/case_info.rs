//! Client and case details shown beside the budget cards

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BrieflyError;

/// Flat client-info record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaseInfo {
    pub client_name: String,
    pub role: String,
    pub attorneys: String,
    pub case_id: String,
}

impl Default for CaseInfo {
    fn default() -> Self {
        Self {
            client_name: "Client Name".to_string(),
            role: "Plaintiff".to_string(),
            attorneys: "Attorney(s)".to_string(),
            case_id: "CASE-0000".to_string(),
        }
    }
}

/// One field of [`CaseInfo`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseInfoField {
    ClientName,
    Role,
    Attorneys,
    CaseId,
}

impl CaseInfoField {
    pub const ALL: [CaseInfoField; 4] = [
        Self::ClientName,
        Self::Role,
        Self::Attorneys,
        Self::CaseId,
    ];

    /// Label used in forms
    pub fn label(&self) -> &'static str {
        match self {
            Self::ClientName => "Name",
            Self::Role => "Role",
            Self::Attorneys => "Attorney(s)",
            Self::CaseId => "Case ID",
        }
    }

    /// Stored key name
    pub fn key(&self) -> &'static str {
        match self {
            Self::ClientName => "clientName",
            Self::Role => "role",
            Self::Attorneys => "attorneys",
            Self::CaseId => "caseId",
        }
    }
}

impl fmt::Display for CaseInfoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CaseInfoField {
    type Err = BrieflyError;

    /// Accepts `clientName`, `client-name`, `client_name` and friends
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "clientname" | "client" | "name" => Ok(Self::ClientName),
            "role" => Ok(Self::Role),
            "attorneys" | "attorney" => Ok(Self::Attorneys),
            "caseid" | "case" => Ok(Self::CaseId),
            _ => Err(BrieflyError::InvalidArgument(format!(
                "unknown case info field '{}'",
                s
            ))),
        }
    }
}

/// Partial update for [`CaseInfo`]; `None` fields are left alone
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaseInfoPatch {
    pub client_name: Option<String>,
    pub role: Option<String>,
    pub attorneys: Option<String>,
    pub case_id: Option<String>,
}

impl CaseInfo {
    /// Read one field
    pub fn get(&self, field: CaseInfoField) -> &str {
        match field {
            CaseInfoField::ClientName => &self.client_name,
            CaseInfoField::Role => &self.role,
            CaseInfoField::Attorneys => &self.attorneys,
            CaseInfoField::CaseId => &self.case_id,
        }
    }

    /// A copy with one field replaced
    pub fn set_field(&self, field: CaseInfoField, value: impl Into<String>) -> CaseInfo {
        let mut next = self.clone();
        let value = value.into();
        match field {
            CaseInfoField::ClientName => next.client_name = value,
            CaseInfoField::Role => next.role = value,
            CaseInfoField::Attorneys => next.attorneys = value,
            CaseInfoField::CaseId => next.case_id = value,
        }
        next
    }

    /// A copy with every `Some` field of the patch applied
    pub fn merge(&self, patch: CaseInfoPatch) -> CaseInfo {
        CaseInfo {
            client_name: patch.client_name.unwrap_or_else(|| self.client_name.clone()),
            role: patch.role.unwrap_or_else(|| self.role.clone()),
            attorneys: patch.attorneys.unwrap_or_else(|| self.attorneys.clone()),
            case_id: patch.case_id.unwrap_or_else(|| self.case_id.clone()),
        }
    }
}
