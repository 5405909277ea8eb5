//! Layout configuration.
//!
//! Every field has a default, so an empty document is a valid config.
//! JSON and TOML are both accepted; on native targets a file is read and
//! parsed according to its extension.

use serde::{Deserialize, Serialize};

use crate::boundary::{
    BoundaryConfig, BoundaryEdge, DEFAULT_MAX_HEIGHT, DEFAULT_MIN_HEIGHT, ResetPolicy,
};
use crate::error::LayoutError;
use crate::page::{Orientation, PageLayout, PageMargins, PageSize};
use crate::ruler::{RulerConfig, RulerOrientation};
use crate::units::{Pixels, Zoom};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub size: PageSize,
    pub orientation: Orientation,
    pub margins: PageMargins,
}

/// Pixel range and reset behavior shared by the header and footer strips.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryRange {
    pub header_height: Pixels,
    pub footer_height: Pixels,
    pub min_height: Pixels,
    pub max_height: Pixels,
    pub reset_policy: ResetPolicy,
}

impl Default for BoundaryRange {
    fn default() -> Self {
        Self {
            header_height: Pixels(60.0),
            footer_height: Pixels(60.0),
            min_height: DEFAULT_MIN_HEIGHT,
            max_height: DEFAULT_MAX_HEIGHT,
            reset_policy: ResetPolicy::AlwaysOverride,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub page: PageConfig,
    pub zoom: Zoom,
    pub boundaries: BoundaryRange,
}

impl LayoutConfig {
    pub fn from_json_str(s: &str) -> Result<Self, LayoutError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, LayoutError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a `.json` or `.toml` file.
    #[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
        let config = match ext {
            "json" => Self::from_json_str(&std::fs::read_to_string(path)?)?,
            "toml" => Self::from_toml_str(&std::fs::read_to_string(path)?)?,
            other => return Err(LayoutError::UnsupportedFormat(other.to_string())),
        };
        tracing::debug!(path = %path.display(), "loaded layout config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        self.page.margins.validate()?;
        self.header().validate()?;
        self.footer().validate()?;
        Ok(())
    }

    pub fn page_layout(&self) -> PageLayout {
        let mut layout = PageLayout::new(self.page.size, self.page.orientation);
        layout.margins = self.page.margins;
        layout.zoom = self.zoom;
        layout.header_height = self.boundaries.header_height;
        layout.footer_height = self.boundaries.footer_height;
        layout
    }

    pub fn ruler(&self, orientation: RulerOrientation) -> RulerConfig {
        self.page_layout().ruler_config(orientation)
    }

    pub fn boundary(&self, edge: BoundaryEdge) -> BoundaryConfig {
        let initial_position = match edge {
            BoundaryEdge::Header => self.boundaries.header_height,
            BoundaryEdge::Footer => self.boundaries.footer_height,
        };
        BoundaryConfig {
            edge,
            initial_position,
            min_height: self.boundaries.min_height,
            max_height: self.boundaries.max_height,
            reset_policy: self.boundaries.reset_policy,
        }
    }

    pub fn header(&self) -> BoundaryConfig {
        self.boundary(BoundaryEdge::Header)
    }

    pub fn footer(&self) -> BoundaryConfig {
        self.boundary(BoundaryEdge::Footer)
    }
}
