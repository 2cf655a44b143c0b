/// PNG front end for the wireframe renderer
use std::path::PathBuf;
use wire3d_core::{Color, CubeScene, DotsScene, DrawReport, Framebuffer, Scene};

pub mod export;

pub use export::{encode_png, save_png, ExportError};

/// Which built-in scene to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SceneKind {
    /// Rotated wireframe cube
    #[default]
    Cube,
    /// Flat colored markers around the centre
    Dots,
}

/// Everything needed for one render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub scene: SceneKind,
    pub cube: CubeScene,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("output.png"),
            width: 800,
            height: 600,
            background: Color::BLACK,
            scene: SceneKind::Cube,
            cube: CubeScene::default(),
        }
    }
}

impl RenderConfig {
    pub fn scene(&self) -> Box<dyn Scene> {
        match self.scene {
            SceneKind::Cube => Box::new(self.cube.clone()),
            SceneKind::Dots => Box::new(DotsScene),
        }
    }
}

/// Single-frame renderer: clear, draw, export
pub struct PngApp {
    config: RenderConfig,
    framebuffer: Framebuffer,
}

impl PngApp {
    pub fn new(config: RenderConfig) -> Result<Self, ExportError> {
        let framebuffer = Framebuffer::new(config.width, config.height)?;
        Ok(Self {
            config,
            framebuffer,
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Fill the background and draw the configured scene
    pub fn render(&mut self) -> DrawReport {
        let scene = self.config.scene();
        self.framebuffer.fill(self.config.background);
        let report = scene.render(&mut self.framebuffer);
        tracing::info!(
            scene = scene.name(),
            lines = report.lines,
            disks = report.disks,
            "scene rendered"
        );
        report
    }

    /// Render and write the PNG to the configured output path
    #[tracing::instrument(skip(self), fields(output = %self.config.output.display()))]
    pub fn run(&mut self) -> Result<DrawReport, ExportError> {
        let report = self.render();
        save_png(&self.framebuffer, &self.config.output)?;
        Ok(report)
    }
}
