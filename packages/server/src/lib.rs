// Pinboard - bulletin board API core
//
// A single-entity bulletin board backend: posts are created, listed with
// cursor-based pagination, read, partially updated, and deleted over an
// HTTP JSON API backed by Postgres.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
