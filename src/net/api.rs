//! Typed wrappers for the backend REST endpoints.
//!
//! Pass-through calls only; all transport and failure policy lives in
//! [`crate::net::http`]. Every wrapper goes through it, which is what
//! guarantees uniform session-expiry handling across the application.

use super::error::ApiError;
use super::http;
use super::types::{
    CreateRepairData, CreateServiceData, Credentials, DeleteServiceResponse, LoginResponse,
    PopulatedRepairRequest, RepairRequest, RepairStatus, Service, ServiceUpdate, StatusUpdate,
};

/// Create an account via `POST /auth/register`.
///
/// Registration never establishes a session; the reply body is
/// backend-defined and discarded.
pub async fn register(email: &str, password: &str) -> Result<(), ApiError> {
    let body = Credentials {
        email: email.to_owned(),
        password: password.to_owned(),
    };
    http::post_json::<serde_json::Value, _>("/auth/register", &body).await?;
    Ok(())
}

/// Exchange credentials for a token and user record via `POST /auth/login`.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let body = Credentials {
        email: email.to_owned(),
        password: password.to_owned(),
    };
    http::post_json("/auth/login", &body).await
}

/// List the current user's repair requests.
pub async fn fetch_user_repairs() -> Result<Vec<RepairRequest>, ApiError> {
    http::get_json("/repairs/user").await
}

/// List every repair request, with customer and service joined in (admin).
pub async fn fetch_all_repairs() -> Result<Vec<PopulatedRepairRequest>, ApiError> {
    http::get_json("/repairs").await
}

/// Fetch one repair request by id.
pub async fn fetch_repair(id: &str) -> Result<PopulatedRepairRequest, ApiError> {
    http::get_json(&format!("/repairs/{id}")).await
}

/// Submit a new repair request.
pub async fn create_repair(data: &CreateRepairData) -> Result<RepairRequest, ApiError> {
    http::post_json("/repairs", data).await
}

/// Move a repair request to a new status (admin).
pub async fn update_repair_status(id: &str, status: RepairStatus) -> Result<RepairRequest, ApiError> {
    http::put_json(&format!("/repairs/{id}/status"), &StatusUpdate { status }).await
}

/// List the service catalog (public).
pub async fn fetch_services() -> Result<Vec<Service>, ApiError> {
    http::get_json("/services").await
}

/// Add a service to the catalog (admin).
pub async fn create_service(data: &CreateServiceData) -> Result<Service, ApiError> {
    http::post_json("/services", data).await
}

/// Update catalog fields of a service (admin); only present fields change.
pub async fn update_service(id: &str, data: &ServiceUpdate) -> Result<Service, ApiError> {
    http::put_json(&format!("/services/{id}"), data).await
}

/// Remove a service from the catalog (admin).
pub async fn delete_service(id: &str) -> Result<DeleteServiceResponse, ApiError> {
    http::delete_json(&format!("/services/{id}")).await
}
