//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Centralizes credential verification and token issuance for admin login.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::AuthService;
