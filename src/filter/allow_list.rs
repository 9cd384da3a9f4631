use std::collections::HashSet;

/// Event types delivered even when the bot itself triggered them.
///
/// Membership transitions reflect real channel state no matter which
/// identity caused them, so downstream handlers still need to see them.
pub const KEPT_EVENT_TYPES: &[&str] = &["member_joined_channel", "member_left_channel"];

/// Immutable set of event-type names exempted from self-event suppression.
///
/// Fixed at process start; never mutates afterwards.
#[derive(Debug, Clone)]
pub struct AllowList {
    kept: HashSet<String>,
}

impl Default for AllowList {
    /// The channel-membership transition events ([`KEPT_EVENT_TYPES`]).
    fn default() -> Self {
        Self::new(KEPT_EVENT_TYPES.iter().copied())
    }
}

impl AllowList {
    /// Build an allow-list from the given event-type names.
    pub fn new<I, S>(event_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kept: event_types.into_iter().map(Into::into).collect(),
        }
    }

    /// An allow-list keeping nothing: every self-generated event is
    /// suppressed.
    pub fn empty() -> Self {
        Self {
            kept: HashSet::new(),
        }
    }

    pub fn contains(&self, event_type: &str) -> bool {
        self.kept.contains(event_type)
    }
}
