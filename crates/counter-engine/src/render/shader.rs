//! Shader sources and compilation.
//!
//! The program is made of two WGSL files, one per stage, loaded from disk at
//! startup. Each stage is parsed and validated on the CPU before its GPU module
//! is created; failures come back as a `ShaderError` carrying the compiler log.
//! Cross-stage problems only surface when the pipelines are built, as a
//! `LinkError` (see `render::mesh`). Both are logged and never abort the frame loop.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const VERTEX_FILE: &str = "shader_vertex.wgsl";
pub const FRAGMENT_FILE: &str = "shader_fragment.wgsl";

pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// Pipeline stage a shader file feeds.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn entry_point(self) -> &'static str {
        match self {
            ShaderStage::Vertex => VERTEX_ENTRY,
            ShaderStage::Fragment => FRAGMENT_ENTRY,
        }
    }

    fn naga_stage(self) -> naga::ShaderStage {
        match self {
            ShaderStage::Vertex => naga::ShaderStage::Vertex,
            ShaderStage::Fragment => naga::ShaderStage::Fragment,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

// ── paths ─────────────────────────────────────────────────────────────────

/// Locations of the two shader files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderPaths {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

impl ShaderPaths {
    /// Standard file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            vertex: dir.join(VERTEX_FILE),
            fragment: dir.join(FRAGMENT_FILE),
        }
    }

    /// Standard file names inside `relative`, resolved against the directory of
    /// the running executable.
    pub fn next_to_executable(relative: impl AsRef<Path>) -> Result<Self> {
        let exe = std::env::current_exe().context("cannot locate the running executable")?;
        let exe_dir = exe
            .parent()
            .with_context(|| format!("executable path {} has no parent", exe.display()))?;
        Ok(Self::in_dir(exe_dir.join(relative)))
    }
}

// ── sources ───────────────────────────────────────────────────────────────

/// One stage's source text plus where it came from.
#[derive(Debug, Clone)]
pub struct StageSource {
    pub stage: ShaderStage,
    pub path: PathBuf,
    pub text: String,
}

impl StageSource {
    fn load(stage: ShaderStage, path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot open {stage} shader file \"{}\"", path.display()))?;
        Ok(Self {
            stage,
            path: path.to_path_buf(),
            text,
        })
    }
}

/// Vertex + fragment sources, read from disk.
#[derive(Debug, Clone)]
pub struct ShaderSources {
    pub vertex: StageSource,
    pub fragment: StageSource,
}

impl ShaderSources {
    /// Reads both files. A missing or unreadable file is an error carrying the path;
    /// callers treat it as fatal.
    pub fn load(paths: &ShaderPaths) -> Result<Self> {
        let vertex = StageSource::load(ShaderStage::Vertex, &paths.vertex)?;
        let fragment = StageSource::load(ShaderStage::Fragment, &paths.fragment)?;
        log::debug!(
            "loaded shaders: {} ({} bytes), {} ({} bytes)",
            vertex.path.display(),
            vertex.text.len(),
            fragment.path.display(),
            fragment.text.len(),
        );
        Ok(Self { vertex, fragment })
    }

    /// Builds sources from in-memory text (tests, embedded fallbacks).
    pub fn from_strings(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: StageSource {
                stage: ShaderStage::Vertex,
                path: PathBuf::from(VERTEX_FILE),
                text: vertex.into(),
            },
            fragment: StageSource {
                stage: ShaderStage::Fragment,
                path: PathBuf::from(FRAGMENT_FILE),
                text: fragment.into(),
            },
        }
    }
}

// ── errors ────────────────────────────────────────────────────────────────

/// A shader failed to compile or does not expose its stage's entry point.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderError {
    pub stage: ShaderStage,
    pub file: PathBuf,
    /// Full compiler output.
    pub log: String,
}

impl ShaderError {
    fn new(source: &StageSource, log: impl Into<String>) -> Self {
        Self {
            stage: source.stage,
            file: source.path.clone(),
            log: log.into(),
        }
    }
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "compilation of {} shader \"{}\" failed.", self.stage, self.file.display())?;
        writeln!(f, "== Start of compilation log")?;
        f.write_str(&self.log)?;
        if !self.log.ends_with('\n') {
            writeln!(f)?;
        }
        write!(f, "== End of compilation log")
    }
}

impl std::error::Error for ShaderError {}

/// Both stages compiled, but they do not form a valid pipeline (mismatched
/// stage interface, resources the pipeline layout does not provide, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct LinkError {
    pub log: String,
}

impl LinkError {
    pub fn new(log: impl Into<String>) -> Self {
        Self { log: log.into() }
    }
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "linking of shader program failed.")?;
        writeln!(f, "== Start of link log")?;
        f.write_str(&self.log)?;
        if !self.log.ends_with('\n') {
            writeln!(f)?;
        }
        write!(f, "== End of link log")
    }
}

impl std::error::Error for LinkError {}

// ── compilation ───────────────────────────────────────────────────────────

/// Parses and validates one stage; checks that its entry point exists.
pub fn check_stage(source: &StageSource) -> std::result::Result<(), ShaderError> {
    let module = naga::front::wgsl::parse_str(&source.text)
        .map_err(|e| ShaderError::new(source, e.emit_to_string(&source.text)))?;

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::empty(),
    );
    validator
        .validate(&module)
        .map_err(|e| ShaderError::new(source, e.emit_to_string(&source.text)))?;

    let entry = source.stage.entry_point();
    let stage = source.stage.naga_stage();
    if !module.entry_points.iter().any(|ep| ep.name == entry && ep.stage == stage) {
        return Err(ShaderError::new(
            source,
            format!("missing {} entry point `{entry}`", source.stage),
        ));
    }

    Ok(())
}

/// Compiled vertex + fragment modules (the GPU program).
pub struct ShaderProgram {
    pub vertex: wgpu::ShaderModule,
    pub fragment: wgpu::ShaderModule,
}

impl ShaderProgram {
    /// Checks both stages, then creates the GPU modules.
    ///
    /// Every failing stage is logged with its full log; the first failure is returned.
    pub fn compile(
        device: &wgpu::Device,
        sources: &ShaderSources,
    ) -> std::result::Result<Self, ShaderError> {
        let results = [check_stage(&sources.vertex), check_stage(&sources.fragment)];

        let mut first_error = None;
        for err in results.into_iter().filter_map(|r| r.err()) {
            log::error!("{err}");
            first_error.get_or_insert(err);
        }
        if let Some(err) = first_error {
            return Err(err);
        }

        let vertex = create_module(device, &sources.vertex).inspect_err(|e| log::error!("{e}"))?;
        let fragment = create_module(device, &sources.fragment).inspect_err(|e| log::error!("{e}"))?;

        Ok(Self { vertex, fragment })
    }
}

/// Device-side module creation; validation errors are captured instead of
/// reaching the device's uncaptured-error handler.
fn create_module(
    device: &wgpu::Device,
    source: &StageSource,
) -> std::result::Result<wgpu::ShaderModule, ShaderError> {
    let label = format!("counter {} shader", source.stage);

    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(&label),
        source: wgpu::ShaderSource::Wgsl(source.text.clone().into()),
    });

    match pollster::block_on(scope.pop()) {
        Some(err) => Err(ShaderError::new(source, err.to_string())),
        None => Ok(module),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERTEX_OK: &str = r#"
struct VertexOutput {
    @builtin(position) position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

@vertex
fn vs_main(@location(0) position: vec4<f32>, @location(1) color: vec4<f32>) -> VertexOutput {
    var out: VertexOutput;
    out.position = position;
    out.color = color;
    return out;
}
"#;

    const FRAGMENT_OK: &str = r#"
@fragment
fn fs_main(@location(0) color: vec4<f32>) -> @location(0) vec4<f32> {
    return color;
}
"#;

    #[test]
    fn valid_sources_pass() {
        let s = ShaderSources::from_strings(VERTEX_OK, FRAGMENT_OK);
        assert!(check_stage(&s.vertex).is_ok());
        assert!(check_stage(&s.fragment).is_ok());
    }

    #[test]
    fn syntax_error_reports_log() {
        let s = ShaderSources::from_strings("fn vs_main( {", FRAGMENT_OK);
        let err = check_stage(&s.vertex).unwrap_err();
        assert_eq!(err.stage, ShaderStage::Vertex);
        assert!(!err.log.is_empty());

        let shown = err.to_string();
        assert!(shown.contains("== Start of compilation log"));
        assert!(shown.ends_with("== End of compilation log"));
    }

    #[test]
    fn wrong_stage_entry_point_is_rejected() {
        // Fragment source checked as a vertex stage: `vs_main` is absent.
        let s = ShaderSources::from_strings(FRAGMENT_OK, FRAGMENT_OK);
        let err = check_stage(&s.vertex).unwrap_err();
        assert!(err.log.contains("vs_main"));
    }

    #[test]
    fn shipped_shaders_pass() {
        let s = ShaderSources::from_strings(
            include_str!("../../../../shaders/shader_vertex.wgsl"),
            include_str!("../../../../shaders/shader_fragment.wgsl"),
        );
        assert_eq!(check_stage(&s.vertex), Ok(()));
        assert_eq!(check_stage(&s.fragment), Ok(()));
    }

    #[test]
    fn compile_creates_modules_on_a_device() {
        let (device, _queue) = wgpu::Device::noop(&wgpu::DeviceDescriptor::default());
        let s = ShaderSources::from_strings(VERTEX_OK, FRAGMENT_OK);
        assert!(ShaderProgram::compile(&device, &s).is_ok());

        let broken = ShaderSources::from_strings(VERTEX_OK, "fn fs_main( {");
        let err = ShaderProgram::compile(&device, &broken).err().map(|e| e.stage);
        assert_eq!(err, Some(ShaderStage::Fragment));
    }

    #[test]
    fn link_error_is_framed() {
        let shown = LinkError::new("location(1) not provided by the vertex stage").to_string();
        assert!(shown.starts_with("linking of shader program failed."));
        assert!(shown.contains("== Start of link log\nlocation(1)"));
        assert!(shown.ends_with("== End of link log"));
    }

    #[test]
    fn in_dir_uses_standard_names() {
        let p = ShaderPaths::in_dir("/tmp/shaders");
        assert_eq!(p.vertex, PathBuf::from("/tmp/shaders/shader_vertex.wgsl"));
        assert_eq!(p.fragment, PathBuf::from("/tmp/shaders/shader_fragment.wgsl"));
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let paths = ShaderPaths::in_dir("/definitely/not/here");
        let err = ShaderSources::load(&paths).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("shader_vertex.wgsl"), "{msg}");
    }

    #[test]
    fn next_to_executable_is_absolute() {
        let p = ShaderPaths::next_to_executable("shaders").unwrap();
        assert!(p.vertex.is_absolute());
        assert!(p.vertex.ends_with("shaders/shader_vertex.wgsl"));
    }
}
