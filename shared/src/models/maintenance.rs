//! Maintenance Ticket Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Maintenance ticket status
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MaintenanceStatus {
    #[default]
    Open,
    InProgress,
    Closed,
    /// Unrecognized status string, kept verbatim for investigation
    Unknown(String),
}

impl MaintenanceStatus {
    /// Parse a loosely-cased wire string (`InProgress` / `IN_PROGRESS`)
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.to_ascii_uppercase().replace('_', "").as_str() {
            "OPEN" => Self::Open,
            "INPROGRESS" => Self::InProgress,
            "CLOSED" => Self::Closed,
            _ => {
                tracing::warn!(status = trimmed, "Unrecognized maintenance status");
                Self::Unknown(trimmed.to_string())
            }
        }
    }

    /// Canonical wire representation
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "OPEN",
            Self::InProgress => "IN_PROGRESS",
            Self::Closed => "CLOSED",
            Self::Unknown(raw) => raw,
        }
    }
}

impl Serialize for MaintenanceStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MaintenanceStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Maintenance ticket entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceTicket {
    pub maintenance_id: i64,
    pub vehicle_id: i64,
    pub issue_description: String,
    #[serde(default)]
    pub status: MaintenanceStatus,
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub remarks: Option<String>,
}

/// Create maintenance ticket payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceCreate {
    pub vehicle_id: i64,
    pub issue_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_both_spellings() {
        assert_eq!(
            MaintenanceStatus::parse("IN_PROGRESS"),
            MaintenanceStatus::InProgress
        );
        assert_eq!(
            MaintenanceStatus::parse("InProgress"),
            MaintenanceStatus::InProgress
        );
        assert_eq!(MaintenanceStatus::parse("open"), MaintenanceStatus::Open);
    }

    #[test]
    fn test_status_parse_unknown_preserved() {
        let status = MaintenanceStatus::parse("Escalated");
        assert_eq!(status, MaintenanceStatus::Unknown("Escalated".to_string()));
    }
}
