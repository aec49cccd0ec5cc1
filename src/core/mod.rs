/*!
 * Core Module
 * Synchronization primitives, error types and shared constants
 */

pub mod errors;
pub mod limits;
pub mod sync;

// Re-export for convenience
pub use errors::*;
