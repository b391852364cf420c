use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use counter_engine::core::{App, AppControl, FrameCtx};
use counter_engine::paint::Color;
use counter_engine::render::{MeshRenderer, ShaderProgram, ShaderSources};
use counter_engine::time::Ticker;

use crate::config::CounterConfig;
use crate::counter::BinaryCounter;
use crate::digits::DigitLayout;
use crate::keys::{first_action, KeyAction};
use crate::scene::CounterScene;

/// Exit code requested by the app, read by `main` after the loop returns.
pub type ExitCodeSlot = Rc<Cell<Option<i32>>>;

/// The lab application: ticks the counter, rebuilds its glyphs, draws them.
pub struct CounterApp {
    sources: ShaderSources,
    layout: DigitLayout,
    clear: Color,

    counter: BinaryCounter,
    ticker: Ticker,

    /// Built on the first frame, once a device exists.
    renderer: Option<MeshRenderer>,
    scene: CounterScene,

    exit_code: ExitCodeSlot,
}

impl CounterApp {
    pub fn new(config: &CounterConfig, sources: ShaderSources, exit_code: ExitCodeSlot) -> Self {
        Self {
            sources,
            layout: config.layout,
            clear: config.clear_color,
            counter: BinaryCounter::for_layout(&config.layout),
            ticker: Ticker::starting_at(config.tick_period, Instant::now()),
            renderer: None,
            scene: CounterScene::new(),
            exit_code,
        }
    }

    pub fn counter(&self) -> &BinaryCounter {
        &self.counter
    }

    /// Steps the counter when a tick period has elapsed at `now`.
    fn tick(&mut self, now: Instant) -> bool {
        if !self.ticker.poll(now) {
            return false;
        }
        let value = self.counter.advance();
        log::trace!("tick {} -> {value}", self.ticker.ticks());
        true
    }

    /// Re-uploads the digit meshes if the counter moved. Returns `true` on rebuild.
    fn sync_scene(&mut self, device: &wgpu::Device) -> bool {
        let value = self.counter.value();
        if !self.scene.is_stale(value) {
            return false;
        }
        self.scene.rebuild(device, value, &self.layout);
        true
    }

    fn handle_keys(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Option<AppControl> {
        match first_action(ctx.input_frame)? {
            KeyAction::Exit(code) => {
                log::info!("grading key pressed; exiting with code {code}");
                self.exit_code.set(Some(code));
                Some(AppControl::Exit)
            }
            KeyAction::CloseWindow => {
                log::info!("escape pressed; closing window");
                ctx.runtime.close_window();
                Some(AppControl::Continue)
            }
        }
    }
}

fn build_renderer(device: &wgpu::Device, sources: &ShaderSources) -> MeshRenderer {
    match ShaderProgram::compile(device, sources) {
        Ok(program) => MeshRenderer::new(Some(program)),
        Err(_) => {
            // Details were already logged per stage.
            log::error!("shader program unusable; continuing without drawing geometry");
            MeshRenderer::new(None)
        }
    }
}

impl App for CounterApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if let Some(control) = self.handle_keys(ctx) {
            return control;
        }

        self.tick(ctx.time.now);
        self.sync_scene(ctx.gpu.device());

        let sources = &self.sources;
        let renderer = self
            .renderer
            .get_or_insert_with(|| build_renderer(ctx.gpu.device(), sources));
        let scene = &self.scene;

        ctx.render(self.clear, |rctx, target| {
            renderer.render(rctx, target, scene.meshes());
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const VERTEX: &str = include_str!("../../../shaders/shader_vertex.wgsl");
    const FRAGMENT: &str = include_str!("../../../shaders/shader_fragment.wgsl");

    fn app() -> CounterApp {
        let sources = ShaderSources::from_strings(VERTEX, FRAGMENT);
        CounterApp::new(&CounterConfig::default(), sources, Rc::new(Cell::new(None)))
    }

    fn device() -> wgpu::Device {
        wgpu::Device::noop(&wgpu::DeviceDescriptor::default()).0
    }

    #[test]
    fn tick_advances_and_marks_the_scene_stale() {
        let device = device();
        let mut app = app();

        assert!(app.sync_scene(&device));
        assert!(!app.sync_scene(&device));

        let later = Instant::now() + Duration::from_secs(2);
        assert!(app.tick(later));
        assert_eq!(app.counter().value(), 1);
        assert!(!app.tick(later));

        assert!(app.sync_scene(&device));
        assert_eq!(app.scene.value(), Some(1));
    }

    #[test]
    fn sixteen_ticks_show_zero_again() {
        let device = device();
        let mut app = app();
        let start = Instant::now();

        for i in 1..=16u64 {
            assert!(app.tick(start + Duration::from_secs(2 * i)));
        }
        assert_eq!(app.counter().value(), 0);

        app.sync_scene(&device);
        assert_eq!(app.scene.value(), Some(0));
        assert_eq!(app.scene.meshes().len(), 4);
    }

    #[test]
    fn broken_shader_leaves_a_renderer_without_program() {
        let device = device();

        let ok = build_renderer(&device, &ShaderSources::from_strings(VERTEX, FRAGMENT));
        assert!(ok.has_program());

        let broken = build_renderer(&device, &ShaderSources::from_strings(VERTEX, "fn fs_main( {"));
        assert!(!broken.has_program());
    }
}
