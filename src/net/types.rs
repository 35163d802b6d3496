//! Wire types for the backend REST API.
//!
//! Field names follow the backend's JSON exactly (`_id`, camelCase keys,
//! kebab-case status values), mapped onto Rust naming with serde renames.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated user record as the backend returns it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

/// Body for `POST /auth/login` and `POST /auth/register`.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful `POST /auth/login` payload.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Lifecycle state of a repair request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepairStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl RepairStatus {
    pub const ALL: [Self; 4] = [Self::Pending, Self::InProgress, Self::Completed, Self::Cancelled];

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Modifier class for the status badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Pending => "status-badge status-badge--pending",
            Self::InProgress => "status-badge status-badge--in-progress",
            Self::Completed => "status-badge status-badge--completed",
            Self::Cancelled => "status-badge status-badge--cancelled",
        }
    }

    /// Wire value, as sent in `PUT /repairs/{id}/status`.
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Repair request as seen by its owner.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub service_id: String,
    pub status: RepairStatus,
    pub description: String,
    pub estimated_cost: f64,
    pub created_at: String,
}

/// Repair request with customer and service records joined in, as returned
/// by the admin listing and the detail endpoint.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedRepairRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: RepairCustomer,
    pub service_id: RepairServiceRef,
    pub status: RepairStatus,
    pub description: String,
    pub estimated_cost: f64,
    pub created_at: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RepairCustomer {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RepairServiceRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Body for `POST /repairs`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRepairData {
    pub service_id: String,
    pub description: String,
    pub estimated_cost: f64,
}

/// Body for `PUT /repairs/{id}/status`.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct StatusUpdate {
    pub status: RepairStatus,
}

/// Catalog entry for a repair service.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Service {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration: u32,
    pub active: bool,
}

/// Body for `POST /services`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CreateServiceData {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration: u32,
}

/// Body for `PUT /services/{id}`; only present fields are sent.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ServiceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

/// Reply shape for `DELETE /services/{id}`.
#[derive(Clone, Debug, Deserialize)]
pub struct DeleteServiceResponse {
    pub message: String,
}

/// Date portion of a backend ISO-8601 timestamp.
pub fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}
