pub mod enrollment;
pub mod error;
pub mod extractors;
pub mod identity_dto;
pub mod login;
pub mod points;
pub mod profile;
pub mod session;
