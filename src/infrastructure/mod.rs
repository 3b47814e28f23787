pub mod content;
pub mod database;
pub mod repositories;
pub mod webspace;
