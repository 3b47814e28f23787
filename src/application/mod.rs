pub mod dto;
pub mod error;
pub mod ports;
pub mod queries;
pub mod resolver;
pub mod services;

pub use error::ApplicationResult;
