use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use winit::dpi::LogicalSize;

use depot_engine::core::{App, AppControl, FrameCtx};
use depot_engine::device::{FrameCapture, GpuInit};
use depot_engine::logging::{LoggingConfig, init_logging};
use depot_engine::render::BatchRenderer;
use depot_engine::window::{Runtime, RuntimeConfig};
use depot_layout::Layout;
use depot_map::{CellMetrics, FrameExporter, MapPalette, MapScene};

/// Warehouse map 12 from the MAP-Elites layout set.
const MAP_TEXT: &str = include_str!("../maps/map_elites_paper_12.map");

fn main() {
    init_logging(LoggingConfig::default());

    let layout = match Layout::parse(MAP_TEXT) {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("depot: {e}");
            std::process::exit(1);
        }
    };

    let scene = MapScene::new(layout, CellMetrics::default(), MapPalette::default());
    let (width, height) = scene.surface_size();
    log::info!(
        "layout parsed: {} x {} cells, {width} x {height} px",
        scene.layout().cols(),
        scene.layout().rows()
    );

    let export_failed = Rc::new(Cell::new(false));
    let app = StudioApp::new(scene, FrameExporter::default(), export_failed.clone());

    let config = RuntimeConfig {
        title: "Depot Warehouse Layout".to_string(),
        initial_size: LogicalSize::new(width as f64, height as f64),
    };

    if let Err(e) = Runtime::run(config, GpuInit::default(), app) {
        eprintln!("depot runtime error: {e:#}");
        std::process::exit(1);
    }

    if export_failed.get() {
        std::process::exit(1);
    }
}

/// Renders the map each frame and exports the first frame to disk.
struct StudioApp {
    scene: MapScene,
    exporter: FrameExporter,
    renderer: BatchRenderer,
    capture_renderer: BatchRenderer,
    exported: bool,
    export_failed: Rc<Cell<bool>>,
}

impl StudioApp {
    fn new(scene: MapScene, exporter: FrameExporter, export_failed: Rc<Cell<bool>>) -> Self {
        Self {
            scene,
            exporter,
            // Two renderers: pipelines are keyed to a target format, and the
            // window surface and the capture texture may disagree.
            renderer: BatchRenderer::new(),
            capture_renderer: BatchRenderer::new(),
            exported: false,
            export_failed,
        }
    }

    /// Renders the map into an offscreen target at its exact pixel size and
    /// writes the PNG.
    fn export(&mut self, ctx: &FrameCtx<'_, '_>) -> anyhow::Result<PathBuf> {
        let (width, height) = self.scene.surface_size();
        let capture = FrameCapture::new(ctx.gpu.device(), width, height);

        let batches = self.scene.frame_batches();
        let renderer = &mut self.capture_renderer;
        ctx.gpu
            .render_offscreen(&capture, self.scene.background(), |rctx, target| {
                renderer.render(rctx, target, &batches);
            });

        let pixels = capture.read_pixels(ctx.gpu.device(), ctx.gpu.queue())?;
        self.exporter.write_png(width, height, &pixels)
    }
}

impl App for StudioApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let batches = self.scene.frame_batches();
        let clear = self.scene.background();
        let renderer = &mut self.renderer;

        let control = ctx.render(clear, |rctx, target| {
            renderer.render(rctx, target, &batches);
        });

        // One-shot export. The redraw callback keeps firing for as long as
        // the window lives; the flag flips before the attempt so a failed
        // export is reported once, not retried.
        if !self.exported {
            self.exported = true;
            match self.export(ctx) {
                Ok(path) => log::info!("warehouse layout saved as {}", path.display()),
                Err(e) => {
                    log::error!("failed to export warehouse layout: {e:#}");
                    self.export_failed.set(true);
                    return AppControl::Exit;
                }
            }
        }

        control
    }
}
