use log::{warn, Level};
use thiserror::Error;

use crate::tracker::ClampPolicy;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Anchor id of the tracker section, the target of the hero call to action.
pub const TRACKER_ANCHOR: &str = "tracker";

/// Fraction of a section that must be on screen before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const CONFETTI_PIECES: usize = 50;

/// Query parameter that selects how the tracker clamps its running total.
pub const CLAMP_PARAM: &str = "clamp";

pub const AUTHOR_GITHUB: &str = "https://github.com/Noman-Patel";
pub const AUTHOR_PORTFOLIO: &str = "https://nomanpatel.com";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown clamp policy `{0}` (expected `bounded` or `floor`)")]
    UnknownClampPolicy(String),
}

/// Resolves the clamp policy from the raw `?clamp=` value.
/// Falls back to the default and logs when the value is not recognised.
pub fn clamp_policy(param: Option<&str>) -> ClampPolicy {
    match param {
        None => ClampPolicy::default(),
        Some(raw) => raw.parse().unwrap_or_else(|e: ConfigError| {
            warn!("{}, using {:?}", e, ClampPolicy::default());
            ClampPolicy::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_param_uses_bounded() {
        assert_eq!(clamp_policy(None), ClampPolicy::Bounded);
    }

    #[test]
    fn floor_param_selects_legacy_policy() {
        assert_eq!(clamp_policy(Some("floor")), ClampPolicy::Floor);
        assert_eq!(clamp_policy(Some(" Floor ")), ClampPolicy::Floor);
    }

    #[test]
    fn unknown_param_falls_back() {
        assert_eq!(clamp_policy(Some("sideways")), ClampPolicy::Bounded);
    }
}
