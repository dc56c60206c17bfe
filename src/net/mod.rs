//! Network layer: wire DTOs and HTTP helpers for the remote chat/theme
//! service.

pub mod api;
pub mod types;
