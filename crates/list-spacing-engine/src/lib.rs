pub mod host;
pub mod io;
pub mod spacing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use host::*;
pub use io::*;
pub use spacing::*;
