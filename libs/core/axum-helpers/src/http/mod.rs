//! HTTP middleware helpers.

pub mod security;

pub use security::security_headers;
