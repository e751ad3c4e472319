pub mod fetcher;
pub mod footer;
