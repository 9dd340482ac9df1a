pub mod config;
pub mod error;

// Dashboard domain
pub mod dashboard;
pub mod intake;
pub mod summarizer;
pub mod workspace;

pub use config::*;
pub use error::*;

pub use dashboard::*;
pub use intake::*;
pub use summarizer::*;
pub use workspace::*;
