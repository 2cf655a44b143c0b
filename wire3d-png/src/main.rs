/// Wire3D PNG Renderer
///
/// Renders a single wireframe frame and writes it to `output.png`.
/// Every flag is optional; with none, the reference cube is drawn.
use anyhow::Context as _;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wire3d_core::{Color, CubeScene, RotationOrder, RotationState, WireStyle};
use wire3d_png::{PngApp, RenderConfig, SceneKind};

#[derive(Parser, Debug)]
#[command(name = "wire3d-png", version, about = "Render a wireframe scene to a PNG file")]
struct Cli {
    /// Output PNG path.
    #[arg(long, short, default_value = "output.png")]
    output: PathBuf,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Scene to draw.
    #[arg(long, value_enum, default_value_t = SceneKind::Cube)]
    scene: SceneKind,

    /// Half the cube's side length.
    #[arg(long, default_value_t = 1.0)]
    size: f32,

    /// Rotation about the x axis, in radians.
    #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
    rot_x: f32,

    /// Rotation about the y axis, in radians.
    #[arg(long, default_value_t = 0.8, allow_negative_numbers = true)]
    rot_y: f32,

    /// Rotation about the z axis, in radians.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    rot_z: f32,

    /// Order the axis rotations are applied in, e.g. xyz or zyx.
    #[arg(long, default_value = "xyz")]
    order: RotationOrder,

    /// Perspective scale (larger = less perspective).
    #[arg(long, default_value_t = 500.0)]
    fov: f32,

    /// Distance from the viewer to the cube's centre.
    #[arg(long, default_value_t = 4.0)]
    distance: f32,

    /// Edge color: a palette name or #rrggbb.
    #[arg(long, default_value = "cyan")]
    edge_color: Color,

    /// Vertex marker color: a palette name or #rrggbb.
    #[arg(long, default_value = "yellow")]
    vertex_color: Color,

    /// Vertex marker radius in pixels.
    #[arg(long, default_value_t = 4)]
    vertex_radius: i32,

    /// Background color: a palette name or #rrggbb.
    #[arg(long, default_value = "black")]
    background: Color,
}

impl From<Cli> for RenderConfig {
    fn from(cli: Cli) -> Self {
        Self {
            output: cli.output,
            width: cli.width,
            height: cli.height,
            background: cli.background,
            scene: cli.scene,
            cube: CubeScene {
                size: cli.size,
                rotation: RotationState::new(cli.rot_x, cli.rot_y, cli.rot_z),
                order: cli.order,
                fov: cli.fov,
                distance: cli.distance,
                style: WireStyle {
                    edge_color: cli.edge_color,
                    vertex_color: cli.vertex_color,
                    vertex_radius: cli.vertex_radius,
                },
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    println!("3D Wireframe Renderer");
    println!("=====================\n");

    let config = RenderConfig::from(cli);
    let output = config.output.clone();

    let mut app = PngApp::new(config).context("failed to set up framebuffer")?;
    app.run()
        .with_context(|| format!("failed to save image to {}", output.display()))?;

    println!("Success! Image saved to: {}", output.display());
    println!("Open it with any image viewer.");
    Ok(())
}
