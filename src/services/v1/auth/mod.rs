pub mod authenticated;
pub mod request_loader;
