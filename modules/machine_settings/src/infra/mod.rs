//! Infrastructure layer - file-backed storage and registry loading

pub mod loader;
pub mod storage;
