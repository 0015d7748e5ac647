// src/services.rs

pub mod application_service;
pub mod auth;
pub mod catalog_service;
pub mod commission_service;
pub mod lead_service;
pub mod student_service;
