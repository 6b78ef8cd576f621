pub mod user_repo;
pub use user_repo::UserRepository;
pub mod tenant_repo;
pub use tenant_repo::TenantRepository;
pub mod client_repo;
pub use client_repo::ClientRepository;
pub mod catalog_repo;
pub use catalog_repo::CatalogRepository;
pub mod appointment_repo;
pub use appointment_repo::AppointmentRepository;
