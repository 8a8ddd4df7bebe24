mod json_file_repository;
mod traits;

pub use json_file_repository::{JsonFileRepository, SCHEMA_VERSION};
pub use traits::ContactRepository;
