//! Tile Clash entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use rand_pcg::Pcg32;
    use tile_clash::SimConfig;
    use tile_clash::renderer::{QuadBatch, RenderState, draw_frame, score_html};
    use tile_clash::sim::{Score, SimState, tick};

    /// Log a score line every this many frames
    const SCORE_LOG_INTERVAL: u64 = 600;

    /// Animation instance holding all state
    struct App {
        state: SimState,
        rng: Pcg32,
        batch: QuadBatch,
        render_state: Option<RenderState>,
        last_score: Option<Score>,
    }

    impl App {
        fn new(config: &SimConfig, seed: u64) -> Self {
            let state = SimState::new(config, seed);
            let rng = state.rng_state.to_rng();
            Self {
                state,
                rng,
                batch: QuadBatch::new(),
                render_state: None,
                last_score: None,
            }
        }

        /// Paint the current state, then advance it one step
        fn frame(&mut self) {
            let score = draw_frame(&self.state, &mut self.batch);

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.batch) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }

            if self.last_score != Some(score) {
                update_hud(&score);
                self.last_score = Some(score);
            }

            tick(&mut self.state, &mut self.rng);

            if self.state.time_ticks % SCORE_LOG_INTERVAL == 0 {
                log::info!("Frame {}: score {}", self.state.time_ticks, score);
            }
        }
    }

    /// Write the score into the `.score` element
    fn update_hud(score: &Score) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(el) = document.query_selector(".score").ok().flatten() {
            el.set_inner_html(&score_html(score));
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Tile Clash starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element");
            return;
        };

        let config = SimConfig::load();
        canvas.set_width(config.canvas_width);
        canvas.set_height(config.canvas_height);

        let seed = config.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let app = Rc::new(RefCell::new(App::new(&config, seed)));
        log::info!("Simulation initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("Failed to get adapter: {}", e);
                return;
            }
        };

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let canvas_size = (config.canvas_width as f32, config.canvas_height as f32);
        match RenderState::new(
            surface,
            &adapter,
            config.canvas_width,
            config.canvas_height,
            canvas_size,
        )
        .await
        {
            Ok(render_state) => app.borrow_mut().render_state = Some(render_state),
            Err(e) => {
                log::error!("Failed to initialize renderer: {}", e);
                return;
            }
        }

        request_animation_frame(app);

        log::info!("Tile Clash running!");
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            frame_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Run one frame, then schedule the next once it has finished
    fn frame_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use tile_clash::SimConfig;
    use tile_clash::renderer::{PixelBuffer, draw_frame};
    use tile_clash::sim::{SimState, tick};

    env_logger::init();
    log::info!("Tile Clash (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the animated version");

    let config = SimConfig::load();
    let seed = config.seed.unwrap_or_else(clock_seed);
    let mut state = SimState::new(&config, seed);
    let mut rng = state.rng_state.to_rng();
    let mut surface = PixelBuffer::new(config.canvas_width, config.canvas_height);

    log::info!(
        "Running {} frames on a {}x{} grid (seed {})",
        config.headless_frames,
        state.grid.width(),
        state.grid.height(),
        seed
    );

    let mut captured = 0;
    let mut bounces = 0;
    for frame in 0..config.headless_frames {
        let score = draw_frame(&state, &mut surface);
        let report = tick(&mut state, &mut rng);
        captured += report.cells_captured();
        bounces += report.wall_bounces();

        if frame > 0 && frame % 600 == 0 {
            log::info!("Frame {}: score {}", frame, score);
        }
    }

    let score = state.score();
    let leader = score.leader().map(|t| t.as_str()).unwrap_or("nobody");
    log::info!(
        "Finished after {} frames: {} cells captured, {} wall bounces",
        state.time_ticks,
        captured,
        bounces
    );
    println!("{} (leader: {})", score, leader);
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
