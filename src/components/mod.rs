//! Reusable UI components.

pub mod login_form;
pub mod navbar;
pub mod register_form;
pub mod repair_card;
pub mod repair_form;
pub mod repair_list;
pub mod repair_status_update;
pub mod route_guard;
pub mod service_card;
pub mod service_form;
pub mod service_list;
pub mod toast_host;
