pub mod http_backend;
pub mod memory_backend;
