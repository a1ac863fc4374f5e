//! Shared types and pure rules of the payments dashboard client.

pub mod dashboards;
pub mod domain;
pub mod shared;
