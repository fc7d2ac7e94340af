//! Sheet configuration (sheet.toml)
//!
//! Everything tunable about a sheet: where it can rest, how it looks, and the
//! timing constants the gesture handling uses. Every field has a default, so
//! an empty file is a valid configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use sheetkit_animation::Easing;
use sheetkit_core::Color;

use crate::error::{ConfigError, Result};

/// Top-level sheet configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Resting heights above the bottom edge, in configured order.
    ///
    /// Heights must be non-negative; this is not checked.
    #[serde(default = "default_snap_heights")]
    pub snap_heights: Vec<f32>,
    #[serde(default)]
    pub corner_radius: f32,
    #[serde(default = "default_true")]
    pub dragger_bar_visible: bool,
    /// Accepted but not acted on yet
    #[serde(default)]
    pub dismiss_interactions: DismissInteractions,
    #[serde(default)]
    pub interrupt: InterruptPolicy,
    #[serde(default)]
    pub shadow: ShadowConfig,
    #[serde(default)]
    pub timing: SnapTiming,
}

fn default_snap_heights() -> Vec<f32> {
    vec![452.0]
}

fn default_true() -> bool {
    true
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            snap_heights: default_snap_heights(),
            corner_radius: 0.0,
            dragger_bar_visible: true,
            dismiss_interactions: DismissInteractions::all(),
            interrupt: InterruptPolicy::default(),
            shadow: ShadowConfig::default(),
            timing: SnapTiming::default(),
        }
    }
}

impl SheetConfig {
    /// Config with the given snap heights and defaults elsewhere
    pub fn with_snap_heights(heights: impl IntoIterator<Item = f32>) -> Self {
        Self {
            snap_heights: heights.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Parse from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a file, or from `sheet.toml` inside a directory
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join("sheet.toml")
        } else {
            path.to_path_buf()
        };

        let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::Io {
            path: config_path.clone(),
            source,
        })?;

        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %config_path.display(),
            snap_heights = ?config.snap_heights,
            "loaded sheet config"
        );
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The visual subset a host applies to its views
    pub fn appearance(&self) -> Appearance {
        Appearance {
            corner_radius: self.corner_radius,
            shadow: self.shadow,
            dragger_bar_visible: self.dragger_bar_visible,
        }
    }
}

/// Drop shadow drawn above the sheet's top edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadowConfig {
    /// (x, y) offset in points
    #[serde(default = "default_shadow_offset")]
    pub offset: (f32, f32),
    #[serde(default = "default_shadow_opacity")]
    pub opacity: f32,
    /// Blur radius in points
    #[serde(default = "default_shadow_radius")]
    pub radius: f32,
    #[serde(default = "default_shadow_color")]
    pub color: Color,
}

fn default_shadow_color() -> Color {
    Color::BLACK
}

fn default_shadow_offset() -> (f32, f32) {
    (0.0, -1.0)
}

fn default_shadow_opacity() -> f32 {
    0.09
}

fn default_shadow_radius() -> f32 {
    2.0
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            offset: default_shadow_offset(),
            opacity: default_shadow_opacity(),
            radius: default_shadow_radius(),
            color: default_shadow_color(),
        }
    }
}

/// A way the user could dismiss the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissInteraction {
    /// Swiping the sheet down past its lowest height
    BottomSwipe,
    /// Tapping the dimmed area above the sheet
    DimmingTap,
}

/// Set of enabled [`DismissInteraction`]s
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DismissInteractions {
    tags: SmallVec<[DismissInteraction; 2]>,
}

impl DismissInteractions {
    /// Every interaction enabled
    pub fn all() -> Self {
        let mut set = Self::none();
        set.insert(DismissInteraction::BottomSwipe);
        set.insert(DismissInteraction::DimmingTap);
        set
    }

    /// No interaction enabled
    pub fn none() -> Self {
        Self {
            tags: SmallVec::new(),
        }
    }

    pub fn insert(&mut self, interaction: DismissInteraction) {
        if !self.contains(interaction) {
            self.tags.push(interaction);
        }
    }

    pub fn remove(&mut self, interaction: DismissInteraction) {
        self.tags.retain(|tag| *tag != interaction);
    }

    pub fn contains(&self, interaction: DismissInteraction) -> bool {
        self.tags.contains(&interaction)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = DismissInteraction> + '_ {
        self.tags.iter().copied()
    }
}

impl Default for DismissInteractions {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<DismissInteraction> for DismissInteractions {
    fn from_iter<I: IntoIterator<Item = DismissInteraction>>(iter: I) -> Self {
        let mut set = Self::none();
        for interaction in iter {
            set.insert(interaction);
        }
        set
    }
}

/// Durations (seconds) and velocity thresholds (points/second) for snapping
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapTiming {
    /// Snap after a drag is released
    pub snap_duration: f32,
    /// Show/hide through the presented flag
    pub presentation_duration: f32,
    /// Cycling heights by tapping the dragger bar
    pub dragger_tap_duration: f32,
    /// Release speed at which the sheet moves one height in the fling direction
    pub fling_velocity: f32,
    /// Release speed at which the snap uses a spring instead of an ease
    pub spring_velocity: f32,
    pub spring_damping_ratio: f32,
    /// Curve for snaps that do not use a spring
    pub easing: Easing,
}

impl Default for SnapTiming {
    fn default() -> Self {
        Self {
            snap_duration: 0.4,
            presentation_duration: 0.275,
            dragger_tap_duration: 0.3,
            fling_velocity: 1400.0,
            spring_velocity: 800.0,
            spring_damping_ratio: 0.78,
            easing: Easing::EaseInOut,
        }
    }
}

/// What a running snap animation leaves behind when it is interrupted
///
/// A drag or a new snap can interrupt a running snap.
/// [`Freeze`](Self::Freeze) leaves the sheet where the user last saw it.
/// [`Complete`](Self::Complete) finalizes the offset at the animation's end
/// value before the interruption takes over, which is how sheets that commit
/// the model value up front behave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterruptPolicy {
    /// Keep the last value the animation emitted
    #[default]
    Freeze,
    /// Jump to the animation's end value
    Complete,
}

/// Visual properties a host applies to its views
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub corner_radius: f32,
    pub shadow: ShadowConfig,
    pub dragger_bar_visible: bool,
}
