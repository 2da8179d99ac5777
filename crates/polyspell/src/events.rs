// Notifications emitted by the dictionary set

use polyspell_core::LanguageCode;
use serde::Serialize;

/// Emitted after a reload that changed the loaded set.
///
/// `Updated` always comes first, then `VerdictsInvalidated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum DictionaryEvent {
    /// The loaded set after the reload, in iteration order.
    Updated { loaded: Vec<LanguageCode> },
    /// Cached `check` verdicts are stale and must be discarded.
    VerdictsInvalidated,
}
