pub mod icontentbackend;
pub mod lib;
