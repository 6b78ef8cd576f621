pub mod appointments;
pub mod auth;
pub mod barbers;
pub mod clients;
pub mod services;
pub mod tenancy;
