//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod auth;
pub mod catalog_service;
pub mod manual_service;
pub mod printable_service;
pub mod report_service;
pub mod task_service;
pub mod admin_service;
#[cfg(test)]
pub mod test_support;
