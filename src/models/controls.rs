//! Calendar controls
//!
//! Parsed from the `controls` and `suppress-controls` attributes.

use serde::{Deserialize, Serialize};

/// A user-facing control the calendar may offer
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Control {
    SelectDate,
    AddEvent,
    ChangeView,
    ChangeDisplay,
}

impl Control {
    pub const ALL: [Control; 4] = [
        Control::SelectDate,
        Control::AddEvent,
        Control::ChangeView,
        Control::ChangeDisplay,
    ];

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim() {
            "select-date" => Some(Control::SelectDate),
            "add-event" => Some(Control::AddEvent),
            "change-view" => Some(Control::ChangeView),
            "change-display" => Some(Control::ChangeDisplay),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Control::SelectDate => "select-date",
            Control::AddEvent => "add-event",
            Control::ChangeView => "change-view",
            Control::ChangeDisplay => "change-display",
        }
    }
}

/// The enabled control set
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Controls {
    enabled: Vec<Control>,
}

impl Controls {
    /// Build from the raw attribute values.
    ///
    /// A missing `controls` attribute enables every control; unknown names
    /// are ignored with a warning.
    pub fn from_attributes(controls: Option<&str>, suppress: Option<&str>) -> Self {
        let mut enabled: Vec<Control> = Vec::new();
        match controls {
            Some(list) => {
                for name in list.split(',').filter(|name| !name.trim().is_empty()) {
                    match Control::parse(name) {
                        Some(control) if !enabled.contains(&control) => enabled.push(control),
                        Some(_) => {}
                        None => log::warn!("Ignoring unknown calendar control '{}'", name.trim()),
                    }
                }
            }
            None => enabled.extend(Control::ALL),
        }

        if let Some(suppress) = suppress {
            let suppressed: Vec<Control> = suppress.split(',').filter_map(Control::parse).collect();
            enabled.retain(|c| !suppressed.contains(c));
        }

        Self { enabled }
    }

    pub fn contains(&self, control: Control) -> bool {
        self.enabled.contains(&control)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Control> {
        self.enabled.iter()
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            enabled: Control::ALL.to_vec(),
        }
    }
}
