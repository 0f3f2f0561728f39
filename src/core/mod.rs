pub mod services;

pub use services::{ServiceError, ServiceResult};
