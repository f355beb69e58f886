//! Node domain services.

pub mod lifecycle;
pub mod query;
pub mod tree;
pub mod upload;

pub use lifecycle::LifecycleService;
pub use query::QueryService;
pub use upload::UploadService;
