use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use winit::dpi::LogicalSize;

use counter_engine::paint::Color;
use counter_engine::render::ShaderPaths;
use counter_engine::window::RuntimeConfig;

use crate::digits::DigitLayout;

/// Environment variable overriding the shader directory.
pub const SHADER_DIR_ENV: &str = "BINARY_COUNTER_SHADER_DIR";

/// Shader directory relative to the executable: `target/<profile>/../../shaders`
/// is the workspace's `shaders/` folder.
pub const DEFAULT_SHADER_DIR: &str = "../../shaders";

/// Where the two shader files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderLocation {
    /// Directory resolved against the running executable's directory.
    NextToExecutable(PathBuf),
    /// Directory used as given (absolute, or relative to the working directory).
    Dir(PathBuf),
}

impl ShaderLocation {
    pub fn resolve(&self) -> Result<ShaderPaths> {
        match self {
            ShaderLocation::NextToExecutable(rel) => ShaderPaths::next_to_executable(rel),
            ShaderLocation::Dir(dir) => Ok(ShaderPaths::in_dir(dir)),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct CounterConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub clear_color: Color,
    pub shaders: ShaderLocation,
    pub layout: DigitLayout,
    /// Wall-clock time between counter steps.
    pub tick_period: Duration,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            title: "INF01047 - Binary Counter".to_string(),
            width: 1200.0,
            height: 500.0,
            clear_color: Color::WHITE,
            shaders: ShaderLocation::NextToExecutable(PathBuf::from(DEFAULT_SHADER_DIR)),
            layout: DigitLayout::default(),
            tick_period: Duration::from_secs(1),
        }
    }
}

impl CounterConfig {
    /// Defaults, overlaid with `BINARY_COUNTER_SHADER_DIR` when set.
    pub fn from_env() -> Self {
        Self::default().with_shader_dir(std::env::var(SHADER_DIR_ENV).ok())
    }

    /// Replaces the shader location with `dir`; blank or absent values are ignored.
    pub fn with_shader_dir(mut self, dir: Option<String>) -> Self {
        if let Some(dir) = dir.filter(|d| !d.trim().is_empty()) {
            log::debug!("shader directory overridden: {dir}");
            self.shaders = ShaderLocation::Dir(PathBuf::from(dir));
        }
        self
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_lab() {
        let c = CounterConfig::default();
        assert_eq!((c.width, c.height), (1200.0, 500.0));
        assert_eq!(c.layout.bits, 4);
        assert_eq!(c.layout.spacing, 0.5);
        assert_eq!(c.tick_period, Duration::from_secs(1));
        assert_eq!(c.clear_color, Color::WHITE);
    }

    #[test]
    fn shader_dir_override() {
        let c = CounterConfig::default().with_shader_dir(Some("/opt/lab/shaders".into()));
        assert_eq!(c.shaders, ShaderLocation::Dir(PathBuf::from("/opt/lab/shaders")));

        let paths = c.shaders.resolve().unwrap();
        assert_eq!(paths.vertex, PathBuf::from("/opt/lab/shaders/shader_vertex.wgsl"));
    }

    #[test]
    fn blank_override_is_ignored() {
        let c = CounterConfig::default().with_shader_dir(Some("   ".into()));
        assert_eq!(c.shaders, ShaderLocation::NextToExecutable(PathBuf::from(DEFAULT_SHADER_DIR)));
        let c = CounterConfig::default().with_shader_dir(None);
        assert!(matches!(c.shaders, ShaderLocation::NextToExecutable(_)));
    }

    #[test]
    fn runtime_config_carries_window_settings() {
        let rc = CounterConfig::default().runtime_config();
        assert_eq!(rc.title, "INF01047 - Binary Counter");
        assert_eq!(rc.initial_size, LogicalSize::new(1200.0, 500.0));
    }
}
