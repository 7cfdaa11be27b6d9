#![doc = "The `foliohub` library crate."]
#![doc = ""]
#![doc = "Holds the domain models (users, projects, contact messages), the"]
#![doc = "authentication layer, routing configuration, and error handling for the"]
#![doc = "portfolio backend. The binary in `main.rs` assembles these into the"]
#![doc = "running actix-web application."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod security;
