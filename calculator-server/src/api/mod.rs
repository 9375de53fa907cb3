//! HTTP surface of the calculator: routes, handlers and their JSON envelopes.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
