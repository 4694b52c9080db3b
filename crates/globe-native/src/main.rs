use std::time::Instant;
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::*,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use globe_core::{
    build_globe, Camera, GlobeConfig, GlobeError, GlobeRenderer, GlobeScene, HeatmapConfig,
    HeatmapSampler, OrbitControls, RasterImage, SceneUniforms,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

struct GpuState<'w> {
    window: &'w Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: GlobeRenderer,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w Window, globe: &GlobeConfig, scene: &GlobeScene) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let renderer = GlobeRenderer::new(&device, format, globe, scene, width, height);
        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
        })
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.renderer
            .resize_if_needed(&self.device, new_size.width, new_size.height);
    }

    fn aspect(&self) -> f32 {
        self.config.width as f32 / self.config.height.max(1) as f32
    }

    fn render(&mut self, uniforms: &SceneUniforms) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.renderer
            .render(&self.device, &self.queue, &view, uniforms);
        frame.present();
        Ok(())
    }
}

/// Decode the heatmap from disk; the sampler blits it onto its canvas.
fn load_heatmap(config: &HeatmapConfig) -> Result<RasterImage, GlobeError> {
    let img = image::open(&config.source).map_err(|e| GlobeError::ImageLoad(e.to_string()))?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    RasterImage::new(w, h, rgba.into_raw())
}

#[derive(Default)]
struct Drag {
    active: bool,
    last: Option<PhysicalPosition<f64>>,
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut config = GlobeConfig::default();
    if let Some(path) = std::env::args().nth(1) {
        config.heatmap = config.heatmap.clone().with_source(path);
    }

    let mut sampler = HeatmapSampler::new(config.heatmap.clone());
    let loaded = load_heatmap(sampler.config());
    sampler.finish_load(loaded);
    let mut scene = build_globe(&config, &sampler, &mut StdRng::from_entropy());
    let mut controls = OrbitControls::new(
        config.camera.position,
        config.camera.target,
        config.orbit.clone(),
    );

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Dot Globe (native)")
        .with_transparent(true)
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window, &config, &scene))?;
    let mut drag = Drag::default();
    let mut last_frame = Instant::now();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => state.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => {
                drag.active = button_state == ElementState::Pressed;
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let (true, Some(prev)) = (drag.active, drag.last) {
                    let h = state.config.height.max(1) as f32;
                    controls.rotate(
                        (position.x - prev.x) as f32,
                        (position.y - prev.y) as f32,
                        h,
                    );
                }
                drag.last = Some(position);
            }
            WindowEvent::MouseWheel { delta, .. } => match delta {
                // winit reports scroll-up as positive; the browser as negative
                MouseScrollDelta::LineDelta(_, y) => controls.zoom(-y),
                MouseScrollDelta::PixelDelta(p) => controls.zoom(-p.y as f32),
            },
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            let dt_ms = (now - last_frame).as_secs_f64() * 1000.0;
            last_frame = now;

            let angle = scene.rotation.advance(dt_ms);
            let eye = controls.update();
            let camera = Camera::from_config(&config.camera, eye, state.aspect());
            let uniforms = SceneUniforms::new(&config, &camera, angle);
            match state.render(&uniforms) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    state.resize(state.window.inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("frame skipped: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
