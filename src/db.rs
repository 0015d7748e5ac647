// src/db.rs

pub mod application_repo;
pub mod catalog_repo;
pub mod commission_repo;
pub mod dashboard_repo;
pub mod enquiry_repo;
pub mod lead_repo;
pub mod location_repo;
pub mod metadata_repo;
pub mod student_repo;
pub mod user_repo;

pub use application_repo::ApplicationRepository;
pub use catalog_repo::CatalogRepository;
pub use commission_repo::CommissionRepository;
pub use dashboard_repo::DashboardRepository;
pub use enquiry_repo::EnquiryRepository;
pub use lead_repo::LeadRepository;
pub use location_repo::LocationRepository;
pub use metadata_repo::MetadataRepository;
pub use student_repo::StudentRepository;
pub use user_repo::UserRepository;
