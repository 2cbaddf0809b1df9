//! Twin Landmass Terrain Viewer
//!
//! Run with: `cargo run --bin terrain-viewer [scene.json]`
//!
//! Generates two diamond-square landmasses (Earth and Mars palettes) and
//! draws them side by side.
//!
//! Controls:
//! - Arrow keys: Rotate about X / Y
//! - Q/E: Rotate about Z
//! - WASD: Move terrain
//! - Space/Shift: Move up/down
//! - G: Regenerate terrain
//! - R: Reset view
//! - ESC: Exit

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode as WinitKey, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use twin_terrain_engine::SceneConfig;
use twin_terrain_engine::input::{KeyCode, ViewState};
use twin_terrain_engine::render::{GpuContext, TerrainRenderer, TerrainUniforms};
use twin_terrain_engine::terrain::{Scene, build_scene};

/// Map winit physical keys onto the view controls.
fn view_key(key: WinitKey) -> Option<KeyCode> {
    let key = match key {
        WinitKey::ArrowUp => KeyCode::ArrowUp,
        WinitKey::ArrowDown => KeyCode::ArrowDown,
        WinitKey::ArrowLeft => KeyCode::ArrowLeft,
        WinitKey::ArrowRight => KeyCode::ArrowRight,
        WinitKey::KeyW => KeyCode::W,
        WinitKey::KeyA => KeyCode::A,
        WinitKey::KeyS => KeyCode::S,
        WinitKey::KeyD => KeyCode::D,
        WinitKey::KeyQ => KeyCode::Q,
        WinitKey::KeyE => KeyCode::E,
        WinitKey::Space => KeyCode::Space,
        WinitKey::ShiftLeft | WinitKey::ShiftRight => KeyCode::Shift,
        WinitKey::KeyR => KeyCode::R,
        WinitKey::KeyG => KeyCode::G,
        _ => return None,
    };
    Some(key)
}

fn describe_scene(scene: &Scene) {
    for landmass in &scene.landmasses {
        info!(
            landmass = %landmass.name,
            min = landmass.extent.min,
            max = landmass.extent.max,
            "landmass ready"
        );
    }
}

// ============================================================================
// APP STATE
// ============================================================================

struct AppState {
    window: Arc<Window>,
    gpu: GpuContext,
    renderer: TerrainRenderer,
    config: SceneConfig,
    view: ViewState,
}

impl AppState {
    async fn new(window: Arc<Window>, config: SceneConfig) -> anyhow::Result<Self> {
        let gpu = GpuContext::new(window.clone()).await?;

        let scene = build_scene(&config)?;
        describe_scene(&scene);

        let renderer = TerrainRenderer::new(&gpu.device, gpu.format(), &scene.mesh);
        let view = ViewState::new(&config.view);

        Ok(Self {
            window,
            gpu,
            renderer,
            config,
            view,
        })
    }

    fn regenerate(&mut self) {
        match build_scene(&self.config.without_seeds()) {
            Ok(scene) => {
                describe_scene(&scene);
                self.renderer.set_mesh(&self.gpu.device, &scene.mesh);
            }
            Err(e) => error!("terrain regeneration failed: {e}"),
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.view.handle_key(key) {
            self.regenerate();
        }
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.gpu.resize(new_size.width, new_size.height);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.gpu.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let uniforms =
            TerrainUniforms::new(self.view.model_view_projection(self.gpu.aspect_ratio()));
        let [r, g, b] = self.config.view.clear_color;

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Terrain Encoder"),
            });

        self.renderer.render(
            &self.gpu.queue,
            &mut encoder,
            &view,
            &self.gpu.depth_view,
            wgpu::Color { r, g, b, a: 1.0 },
            &uniforms,
        );

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

// ============================================================================
// APPLICATION HANDLER
// ============================================================================

struct App {
    config: SceneConfig,
    state: Option<AppState>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let window_attrs = WindowAttributes::default()
            .with_title("Twin Terrain - arrows rotate, WASD move, G regenerate")
            .with_inner_size(PhysicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(AppState::new(window, self.config.clone())) {
            Ok(state) => {
                info!(indices = state.renderer.index_count(), "viewer ready");
                state.window.request_redraw();
                self.state = Some(state);
            }
            Err(e) => {
                error!("viewer setup failed: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                state.resize(new_size);
                state.window.request_redraw();
            }
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                if key == WinitKey::Escape {
                    event_loop.exit();
                    return;
                }
                if let Some(key) = view_key(key) {
                    state.handle_key(key);
                    state.window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => match state.render() {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    state.resize(state.window.inner_size());
                    state.window.request_redraw();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                Err(e) => warn!("render error: {e:?}"),
            },
            _ => {}
        }
    }
}

// ============================================================================
// MAIN
// ============================================================================

fn load_config() -> anyhow::Result<SceneConfig> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => SceneConfig::from_json_file(&path)
            .with_context(|| format!("loading scene config {}", path.display())),
        None => Ok(SceneConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config()?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App {
        config,
        state: None,
    };
    event_loop.run_app(&mut app)?;
    Ok(())
}
