//! CLI command handlers.

mod about;
mod resolve;

pub use about::{print_copyright, print_version};
pub use resolve::{read_url, run_resolve};
