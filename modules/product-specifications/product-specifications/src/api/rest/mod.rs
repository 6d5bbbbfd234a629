//! REST surface: DTOs, handlers, routes and Problem Details mapping.

pub mod authz;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod problem;
pub mod routes;
