//! Configuration for the breath trend viewer.
//!
//! Apnea thresholds are fixed constants in [`crate::data::apnea`] and are
//! intentionally not part of this configuration.

use std::path::{Path, PathBuf};

use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::data::segment_look::{SegmentLook, SegmentLooks};
use crate::error::ConfigError;

// ─────────────────────────────────────────────────────────────────────────────
// Input columns
// ─────────────────────────────────────────────────────────────────────────────

/// Which fields of an input row hold the time and breath value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputColumns {
    /// Zero-based time column. Default: `0`.
    pub time: usize,
    /// Zero-based breath value column. Default: `5`.
    pub value: usize,
    /// Field delimiter. Default: `','`.
    pub delimiter: char,
}

impl Default for InputColumns {
    fn default() -> Self {
        Self {
            time: 0,
            value: 5,
            delimiter: ',',
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Window
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    /// Native window title.
    pub title: String,
    /// Initial inner size in logical pixels.
    pub inner_size: [f32; 2],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Breath Trend Viewer".to_string(),
            inner_size: [1200.0, 700.0],
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rendering
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Draw every n-th sample of each segment. Default: `20`.
    pub decimation_step: usize,
    /// Show the plot grid.
    pub grid: bool,
    /// Segment and legend colors.
    pub looks: SegmentLooks,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            decimation_step: 20,
            grid: true,
            looks: SegmentLooks::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ViewerConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// | Field     | Purpose |
/// |-----------|---------|
/// | `window`  | Native window chrome |
/// | `columns` | Input file layout |
/// | `render`  | Decimation and colors |
/// | `initial_path` | File loaded at startup, if any |
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub columns: InputColumns,
    pub render: RenderConfig,
    pub initial_path: Option<PathBuf>,
}

impl ViewerConfig {
    /// `~/.breathscope/config.yaml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".breathscope").join("config.yaml"))
    }

    /// Load from the default path, falling back to defaults when the file
    /// does not exist.
    pub fn load_or_default() -> Result<ViewerConfig, ConfigError> {
        let path = Self::default_path()?;
        if !path.exists() {
            return Ok(ViewerConfig::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<ViewerConfig, ConfigError> {
        let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&s).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a YAML document. Missing keys keep their defaults.
    pub fn from_yaml(s: &str) -> Result<ViewerConfig, serde_yaml::Error> {
        let file: ViewerConfigFile = serde_yaml::from_str(s)?;
        let mut cfg = ViewerConfig::default();
        file.apply_to(&mut cfg);
        Ok(cfg)
    }
}

// ---------- Serializable mirror types ----------

/// Serializable version of SegmentLook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentLookSerde {
    pub color_rgba: [u8; 4],
    pub width: f32,
}

impl From<&SegmentLook> for SegmentLookSerde {
    fn from(l: &SegmentLook) -> Self {
        let [r, g, b, a] = l.color.to_srgba_unmultiplied();
        Self {
            color_rgba: [r, g, b, a],
            width: l.width,
        }
    }
}

impl SegmentLookSerde {
    pub fn into_look(self) -> SegmentLook {
        let [r, g, b, a] = self.color_rgba;
        SegmentLook {
            color: egui::Color32::from_rgba_unmultiplied(r, g, b, a),
            width: self.width,
        }
    }
}

/// On-disk layout of the configuration file. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfigFile {
    pub title: Option<String>,
    pub window_size: Option<[f32; 2]>,
    pub columns: Option<InputColumns>,
    pub decimation_step: Option<usize>,
    pub grid: Option<bool>,
    pub normal: Option<SegmentLookSerde>,
    pub osa: Option<SegmentLookSerde>,
    pub csa: Option<SegmentLookSerde>,
    pub msa: Option<SegmentLookSerde>,
    pub initial_path: Option<PathBuf>,
}

impl ViewerConfigFile {
    pub fn apply_to(self, cfg: &mut ViewerConfig) {
        if let Some(t) = self.title {
            cfg.window.title = t;
        }
        if let Some(s) = self.window_size {
            cfg.window.inner_size = s;
        }
        if let Some(c) = self.columns {
            cfg.columns = c;
        }
        if let Some(step) = self.decimation_step {
            cfg.render.decimation_step = step.max(1);
        }
        if let Some(g) = self.grid {
            cfg.render.grid = g;
        }
        let looks = &mut cfg.render.looks;
        for (slot, look) in [
            (&mut looks.normal, self.normal),
            (&mut looks.osa, self.osa),
            (&mut looks.csa, self.csa),
            (&mut looks.msa, self.msa),
        ] {
            if let Some(l) = look {
                *slot = l.into_look();
            }
        }
        if self.initial_path.is_some() {
            cfg.initial_path = self.initial_path;
        }
    }
}
