//! Pattern id sources.
//!
//! Several grid rectangles on one page must not share a `<pattern>` id, or the
//! last definition silently wins for all of them. Renderers take an
//! [`IdSource`] so callers choose between a counter and caller-supplied keys.

use std::sync::atomic::{AtomicU64, Ordering};

/// Produces ids that are unique among concurrently live renders.
///
/// Object-safe; renderers accept `&dyn IdSource`.
pub trait IdSource {
    /// Returns a fresh id. Valid as an XML `id` and a URL fragment.
    fn fresh_id(&self) -> String;
}

/// Monotonic counter with a fixed prefix: `{prefix}-0`, `{prefix}-1`, ...
///
/// Safe to share across threads.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: &'static str,
    next: AtomicU64,
}

impl SequentialIds {
    pub const fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            next: AtomicU64::new(0),
        }
    }
}

impl IdSource for SequentialIds {
    fn fresh_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{n}", self.prefix)
    }
}

static PROCESS_IDS: SequentialIds = SequentialIds::new("backdrop-grid");

/// The process-wide id counter used by default grid renderers.
pub fn process_ids() -> &'static SequentialIds {
    &PROCESS_IDS
}

/// Derives the id from a caller-supplied key: `{prefix}-{key}`.
///
/// Deterministic across runs; the caller is responsible for key uniqueness.
/// ASCII letters, digits and `-` are kept; every other character, `_`
/// included, is written as `_{hex code point}_`. The encoding is injective,
/// so distinct keys always give distinct ids.
#[derive(Debug, Clone)]
pub struct KeyedIds {
    id: String,
}

impl KeyedIds {
    pub fn new(prefix: &str, key: &str) -> Self {
        let mut id = format!("{prefix}-");
        for c in key.chars() {
            if c.is_ascii_alphanumeric() || c == '-' {
                id.push(c);
            } else {
                id.push_str(&format!("_{:x}_", u32::from(c)));
            }
        }
        Self { id }
    }
}

impl IdSource for KeyedIds {
    fn fresh_id(&self) -> String {
        self.id.clone()
    }
}
