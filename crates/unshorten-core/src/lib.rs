pub mod config;
pub mod error;
pub mod interrupt;
pub mod logging;
pub mod probe;
pub mod resolver;

pub use error::ResolveError;
pub use resolver::resolve;
