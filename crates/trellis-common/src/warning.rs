//! Conversion warnings routed through the `log` facade.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the style parsers and the tree builder to report values that were
//! replaced by a default instead of failing the conversion.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about an unsupported or malformed value (emitted once per unique message).
///
/// The warning is logged at `warn` level with the target `trellis::<component>`,
/// so a host application can filter per component.
///
/// # Example
/// ```
/// use trellis_common::warning::warn_once;
///
/// warn_once("style", "unsupported display value 'inline'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_emit = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_emit {
        let target = format!("trellis::{component}");
        log::warn!(target: &target, "{message}");
    }
}

/// Clear all recorded warnings (call between independent conversions to
/// see their warnings again).
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
