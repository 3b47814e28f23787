pub mod entity;
pub mod filter;
pub mod repository;
pub mod revision;
pub mod value_objects;

pub use entity::Article;
pub use filter::ArticleFilter;
pub use repository::{ArticleFilterRepository, ArticleReadRepository};
pub use revision::ContentRevision;
pub use value_objects::{ArticleId, Locale, Stage, WebspaceKey};
