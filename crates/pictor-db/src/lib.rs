//! Pictor Database Library
//!
//! This crate provides the media metadata repository: the `MediaRepository`
//! trait plus its Postgres implementation.

mod postgres;
mod repository;

pub use postgres::PgMediaRepository;
pub use repository::MediaRepository;
