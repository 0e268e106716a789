use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum IntakeStatus {
    New,
    Reviewed,
    Contacted,
    Scheduled,
    Completed,
    Archived,
}

impl IntakeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            IntakeStatus::New => "new",
            IntakeStatus::Reviewed => "reviewed",
            IntakeStatus::Contacted => "contacted",
            IntakeStatus::Scheduled => "scheduled",
            IntakeStatus::Completed => "completed",
            IntakeStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for IntakeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntakeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(IntakeStatus::New),
            "reviewed" => Ok(IntakeStatus::Reviewed),
            "contacted" => Ok(IntakeStatus::Contacted),
            "scheduled" => Ok(IntakeStatus::Scheduled),
            "completed" => Ok(IntakeStatus::Completed),
            "archived" => Ok(IntakeStatus::Archived),
            _ => Err(format!(
                "Invalid status. Must be one of: new, reviewed, contacted, scheduled, completed, archived (got {s})"
            )),
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct IntakeForm {
    pub id: i64,
    pub client_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub client_type: String,
    pub service_location: String,
    pub address: Option<String>,
    pub service_requested: Option<String>,
    pub hair_length: Option<String>,
    pub desired_style: Option<String>,
    pub desired_style_other: Option<String>,
    pub hair_type: Option<String>,
    pub sensitive_to_noise: bool,
    pub sensitive_to_touch: bool,
    pub does_not_like_water: bool,
    pub nervous_anxious: bool,
    pub enjoys_fidget_toys: bool,
    pub needs_weighted_cape: bool,
    pub requires_quiet_environment: bool,
    pub other_sensory_needs: Option<String>,
    pub uses_wheelchair: bool,
    pub limited_mobility: bool,
    pub has_behaviours: bool,
    pub behaviour_notes: Option<String>,
    pub additional_notes: Option<String>,
    pub status: IntakeStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

fn default_client_type() -> String {
    "adult".to_string()
}

fn default_service_location() -> String {
    "in-salon".to_string()
}

/// Intake submission payload. Everything past name and email is optional;
/// the checkbox groups default to unchecked when omitted. The one
/// conditional rule (mobile appointments need an address) is enforced by
/// the handler since it spans two fields.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewIntakeForm {
    #[validate(length(min = 1, message = "Missing required field: client_name"))]
    pub client_name: String,
    #[validate(length(min = 1, message = "Missing required field: email"))]
    pub email: String,
    pub phone: Option<String>,
    #[serde(default = "default_client_type")]
    pub client_type: String,
    #[serde(default = "default_service_location")]
    pub service_location: String,
    pub address: Option<String>,
    pub service_requested: Option<String>,
    pub hair_length: Option<String>,
    pub desired_style: Option<String>,
    pub desired_style_other: Option<String>,
    pub hair_type: Option<String>,
    #[serde(default)]
    pub sensitive_to_noise: bool,
    #[serde(default)]
    pub sensitive_to_touch: bool,
    #[serde(default)]
    pub does_not_like_water: bool,
    #[serde(default)]
    pub nervous_anxious: bool,
    #[serde(default)]
    pub enjoys_fidget_toys: bool,
    #[serde(default)]
    pub needs_weighted_cape: bool,
    #[serde(default)]
    pub requires_quiet_environment: bool,
    pub other_sensory_needs: Option<String>,
    #[serde(default)]
    pub uses_wheelchair: bool,
    #[serde(default)]
    pub limited_mobility: bool,
    #[serde(default)]
    pub has_behaviours: bool,
    pub behaviour_notes: Option<String>,
    pub additional_notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateIntakeStatus {
    pub status: String,
}
