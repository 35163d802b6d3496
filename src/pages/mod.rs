//! Page components, one per route.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod new_repair;
pub mod register;
pub mod repair_detail;
pub mod repairs;
pub mod services;
