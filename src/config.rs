use anyhow::Result;
use eframe::egui::{Rect, pos2, vec2};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{BAR_HEIGHT, CHECKER_SIZE, MARKER_HEIGHT, MARKER_WIDTH, WIDGET_MARGIN};
use crate::paths;
use crate::render::GradientLayout;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UIConfig,
    pub editor: EditorConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UIConfig {
    pub theme: Theme,
    pub show_inspector: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Pixel metrics of the gradient widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub bar_height: f32,
    pub marker_width: f32,
    pub marker_height: f32,
    pub margin: f32,
    pub checker_size: f32,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            show_inspector: true,
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            bar_height: BAR_HEIGHT,
            marker_width: MARKER_WIDTH,
            marker_height: MARKER_HEIGHT,
            margin: WIDGET_MARGIN,
            checker_size: CHECKER_SIZE,
        }
    }
}

impl EditorConfig {
    pub fn height(&self) -> f32 {
        self.marker_height * 2.0 + self.bar_height
    }

    /// Layout inside an allocated widget rect; the margin leaves room for the
    /// half-width of handles at both ends.
    pub fn layout(&self, rect: Rect) -> GradientLayout {
        GradientLayout {
            origin: pos2(rect.left() + self.margin, rect.top()),
            width: (rect.width() - self.margin * 2.0).max(1.0),
            bar_height: self.bar_height,
            marker_size: vec2(self.marker_width, self.marker_height),
            checker_size: self.checker_size,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        if let Some(config_path) = paths::config_path()
            && config_path.exists()
        {
            return Self::load_from(&config_path);
        }
        Ok(Self::default())
    }

    pub fn save(&self) -> Result<()> {
        if let Some(config_path) = paths::config_path() {
            self.save_to(&config_path)?;
        }
        Ok(())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
