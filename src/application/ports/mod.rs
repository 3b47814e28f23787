// src/application/ports/mod.rs
pub mod content;
pub mod webspace;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ContentResolverPort = dyn content::ContentResolver;
pub type WebspaceResolverPort = dyn webspace::WebspaceResolver;
