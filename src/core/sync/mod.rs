/*!
 * Synchronization Primitives
 *
 * Blocking binary monitor (mutex + condition variable) used to serialize
 * access to one shared resource.
 */

mod monitor;
mod traits;

pub use monitor::{Monitor, MonitorGuard};
pub use traits::{MonitorState, MonitorStats, WakeResult};
