pub mod chat;
pub mod direct;
pub mod services;
pub mod staging;
pub mod traits;
