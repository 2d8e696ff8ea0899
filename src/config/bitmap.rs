use crate::emit::DeclarationOptions;
use crate::pipeline::ConversionParams;
use crate::resample::{FilterKind, TargetSize};
use crate::threshold::Threshold;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BitmapToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub size: TargetSize,
    #[serde(default)]
    pub threshold: Threshold,
    /// Resampling filter; anything but bicubic changes the bitmap.
    #[serde(default)]
    pub filter: FilterKind,
    #[serde(default)]
    pub declaration: DeclarationOptions,
    #[serde(default)]
    pub output: BitmapOutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BitmapOutputConfig {
    /// PNG of the thresholded bitmap, ink black.
    pub preview_image: Option<PathBuf>,
    /// JSON conversion summary.
    pub report_json: Option<PathBuf>,
}

impl BitmapToolConfig {
    /// Defaults for everything but the input path.
    pub fn for_input(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            size: TargetSize::default(),
            threshold: Threshold::default(),
            filter: FilterKind::default(),
            declaration: DeclarationOptions::default(),
            output: BitmapOutputConfig::default(),
        }
    }

    pub fn conversion_params(&self) -> ConversionParams {
        ConversionParams {
            size: self.size,
            threshold: self.threshold,
            filter: self.filter,
            declaration: self.declaration.clone(),
        }
    }

    /// Resolve relative paths against `base` (the config file's directory).
    fn rebase(mut self, base: &Path) -> Self {
        let join = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        self.input = join(self.input);
        self.output.preview_image = self.output.preview_image.map(join);
        self.output.report_json = self.output.report_json.map(join);
        self
    }
}

pub fn parse_config(data: &str) -> Result<BitmapToolConfig, String> {
    let config: BitmapToolConfig =
        serde_json::from_str(data).map_err(|e| format!("Invalid config: {e}"))?;
    config.declaration.validate()?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<BitmapToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config = parse_config(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(config.rebase(base))
}
