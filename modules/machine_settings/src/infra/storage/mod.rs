//! Storage layer - persisted records and file-backed stores

pub mod entity;
pub mod json_file;
pub mod mapper;

pub use json_file::JsonFileStore;
