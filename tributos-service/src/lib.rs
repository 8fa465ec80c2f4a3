//! tributos-service: on-demand fetch → transform → persist pipeline that
//! derives ISS tax line items from the remote notas collection.
pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

pub use startup::{AppState, Application};
