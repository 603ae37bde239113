//! Transient "copied" badge shown after an annotation is copied.
//!
//! Each trigger hands out a fresh token. The caller schedules `expire(token)`
//! after [`COPIED_RESET_DELAY`]; only the most recent token clears the badge,
//! so re-copying before expiry restarts the delay instead of cutting it short.

use std::time::Duration;

use uuid::Uuid;

pub const COPIED_RESET_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndicatorToken(Uuid);

#[derive(Debug, Default)]
pub struct CopiedIndicator {
    active: Option<(String, IndicatorToken)>,
}

impl CopiedIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the badge for `id`, cancelling any pending reset.
    pub fn trigger(&mut self, id: &str) -> IndicatorToken {
        let token = IndicatorToken(Uuid::new_v4());
        self.active = Some((id.to_string(), token));
        token
    }

    /// Clear the badge if `token` is still current. Returns whether it cleared.
    pub fn expire(&mut self, token: IndicatorToken) -> bool {
        match &self.active {
            Some((_, current)) if *current == token => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    pub fn copied_id(&self) -> Option<&str> {
        self.active.as_ref().map(|(id, _)| id.as_str())
    }

    pub fn is_copied(&self, id: &str) -> bool {
        self.copied_id() == Some(id)
    }
}
