//! UI layer - page routes and HTML presentation

pub mod presentation;
pub mod routes;
