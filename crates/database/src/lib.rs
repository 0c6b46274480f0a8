//! Entity model, persistence gateway and domain operations for the
//! university API.

pub mod db;
pub mod entities;
pub mod error;
pub mod gateway;
pub mod services;

pub use error::ServiceError;
pub use gateway::{Gateway, Record, Session};
