pub mod models;
pub mod repo;
pub mod validation;

// implementation modules
pub mod mem_repo;
