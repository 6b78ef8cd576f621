pub mod auth;
pub use auth::AuthService;
pub mod client_service;
pub use client_service::ClientService;
pub mod catalog_service;
pub use catalog_service::CatalogService;
pub mod scheduling_service;
pub use scheduling_service::SchedulingService;
pub mod tenancy_service;
pub use tenancy_service::TenantService;
