pub mod definitions;
pub mod export;
pub mod import;
