pub mod health;
pub mod media_create;
pub mod media_get;
pub mod media_update;
