pub mod error;
pub mod health;
pub mod home;
pub mod receipt;
pub mod tags;
