//! Gesture scenario definition (JSON)

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use sheetkit::SheetConfig;
use sheetkit_core::{GestureOrigin, GesturePhase};

/// A host description plus the inputs to feed the sheet, in order
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Full height of the scrollable content
    #[serde(default)]
    pub content_height: f32,
    /// Height of the header and dragger bar
    #[serde(default)]
    pub chrome_height: f32,
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Invalid scenario {}", path.display()))
    }
}

/// One input to the sheet
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    Present,
    Dismiss,
    Pan {
        phase: GesturePhase,
        #[serde(default = "default_origin")]
        origin: GestureOrigin,
        #[serde(default)]
        translation: f32,
        #[serde(default)]
        velocity: f32,
    },
    /// The user scrolled the content to `offset`
    Scroll { offset: f32 },
    TapDragger,
    Tick { frames: u32 },
    SetConfig { config: SheetConfig },
}

fn default_origin() -> GestureOrigin {
    GestureOrigin::Header
}

impl ScenarioStep {
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioStep::Present => "present",
            ScenarioStep::Dismiss => "dismiss",
            ScenarioStep::Pan { .. } => "pan",
            ScenarioStep::Scroll { .. } => "scroll",
            ScenarioStep::TapDragger => "tap_dragger",
            ScenarioStep::Tick { .. } => "tick",
            ScenarioStep::SetConfig { .. } => "set_config",
        }
    }
}
