//! Modifier-key checks for pointer events.
//!
//! Plugins commonly gate an action ("copy raw message", "skip confirmation")
//! behind a user-configured modifier key. [`check_for_modifier`] answers whether
//! that gate is open for a given event.

use crate::domain::{PlugkitError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Modifier state carried by a pointer event.
///
/// Deserializes from both snake_case and DOM-style camelCase field names, so
/// host event payloads such as `{"shiftKey": true}` can be passed straight in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseEvent {
    #[serde(default, alias = "shiftKey")]
    pub shift_key: bool,
    #[serde(default, alias = "ctrlKey")]
    pub ctrl_key: bool,
    #[serde(default, alias = "altKey")]
    pub alt_key: bool,
}

/// Modifier a plugin action can be bound to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Shift,
    Ctrl,
    Alt,
    /// No modifier required; always held.
    #[default]
    None,
}

impl Modifier {
    /// Returns `true` when `event` satisfies this modifier.
    #[must_use]
    pub const fn is_held(self, event: &MouseEvent) -> bool {
        match self {
            Self::Shift => event.shift_key,
            Self::Ctrl => event.ctrl_key,
            Self::Alt => event.alt_key,
            Self::None => true,
        }
    }

    /// Configuration name of this modifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shift => "shift",
            Self::Ctrl => "ctrl",
            Self::Alt => "alt",
            Self::None => "none",
        }
    }
}

impl FromStr for Modifier {
    type Err = PlugkitError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "shift" => Ok(Self::Shift),
            "ctrl" => Ok(Self::Ctrl),
            "alt" => Ok(Self::Alt),
            "none" => Ok(Self::None),
            other => Err(PlugkitError::Config(format!("unknown modifier: {other}"))),
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks whether the configured modifier is held for `event`.
///
/// Returns `Some(false)` when the check is disabled, `Some(held)` for
/// `"shift"`, `"ctrl"`, `"alt"` and `"none"` (always held), and `None` for any
/// other modifier name. Callers decide what an unknown name means.
///
/// # Examples
///
/// ```rust
/// use plugkit::input::{check_for_modifier, MouseEvent};
///
/// let event = MouseEvent { shift_key: true, ..Default::default() };
///
/// assert_eq!(check_for_modifier(false, "shift", &event), Some(false));
/// assert_eq!(check_for_modifier(true, "shift", &event), Some(true));
/// assert_eq!(check_for_modifier(true, "none", &MouseEvent::default()), Some(true));
/// assert_eq!(check_for_modifier(true, "meta", &event), None);
/// ```
#[must_use]
pub fn check_for_modifier(enabled: bool, modifier: &str, event: &MouseEvent) -> Option<bool> {
    if !enabled {
        return Some(false);
    }

    match modifier.parse::<Modifier>() {
        Ok(modifier) => Some(modifier.is_held(event)),
        Err(_) => {
            tracing::debug!(modifier = %modifier, "unrecognized modifier kind");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_events() -> Vec<MouseEvent> {
        let mut events = Vec::new();
        for bits in 0..8_u8 {
            events.push(MouseEvent {
                shift_key: bits & 1 != 0,
                ctrl_key: bits & 2 != 0,
                alt_key: bits & 4 != 0,
            });
        }
        events
    }

    #[test]
    fn disabled_is_always_false() {
        for event in all_events() {
            for kind in ["shift", "ctrl", "alt", "none", "bogus"] {
                assert_eq!(check_for_modifier(false, kind, &event), Some(false));
            }
        }
    }

    #[test]
    fn none_is_always_held() {
        for event in all_events() {
            assert_eq!(check_for_modifier(true, "none", &event), Some(true));
        }
    }

    #[test]
    fn each_kind_reads_its_own_flag() {
        let ctrl_only = MouseEvent {
            ctrl_key: true,
            ..MouseEvent::default()
        };
        assert_eq!(check_for_modifier(true, "shift", &ctrl_only), Some(false));
        assert_eq!(check_for_modifier(true, "ctrl", &ctrl_only), Some(true));
        assert_eq!(check_for_modifier(true, "alt", &ctrl_only), Some(false));
    }

    #[test]
    fn unknown_kind_is_unmatched() {
        let event = MouseEvent::default();
        assert_eq!(check_for_modifier(true, "Shift", &event), None);
        assert_eq!(check_for_modifier(true, "", &event), None);
    }

    #[test]
    fn modifier_parses_and_displays() {
        for name in ["shift", "ctrl", "alt", "none"] {
            let modifier: Modifier = name.parse().unwrap();
            assert_eq!(modifier.to_string(), name);
        }
        assert!(matches!(
            "meta".parse::<Modifier>(),
            Err(PlugkitError::Config(_))
        ));
    }

    #[test]
    fn event_accepts_dom_field_names() {
        let event: MouseEvent =
            serde_json::from_str(r#"{"shiftKey": true, "altKey": false}"#).unwrap();
        assert!(event.shift_key);
        assert!(!event.ctrl_key);
        assert!(!event.alt_key);
    }
}
