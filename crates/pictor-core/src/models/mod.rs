//! Data models for the application

mod medium;

pub use medium::{Medium, MediumResponse, NewMedium, ThumbnailInfo};
