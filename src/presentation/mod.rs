pub mod http;
pub mod render;
