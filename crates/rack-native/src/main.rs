use anyhow::Context;
use clap::{Parser, ValueEnum};
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use rack_core::gpu::{MarkerInstance, SceneRenderer};
use rack_core::{
    build_scene, LabelKind, MemberKind, OrbitCamera, RackAddressing, RackScene, SceneStyle,
    SceneVariant, Triangulation, WarehouseParams, AXIS_TITLES,
};

/// Desktop viewer for the generated warehouse rack scene
#[derive(Parser, Debug)]
#[command(name = "rack-native")]
#[command(about = "3D warehouse racking viewer", long_about = None)]
#[command(version)]
struct Cli {
    /// Which scene to show
    #[arg(long, value_enum, default_value_t = View::Labeled)]
    view: View,

    /// Box triangulation used for every member
    #[arg(long, value_enum, default_value_t = Tri::Closed)]
    triangulation: Tri,

    /// Log the generated layout and exit without opening a window
    #[arg(long)]
    print_layout: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum View {
    Labeled,
    Plain,
}

impl From<View> for SceneVariant {
    fn from(v: View) -> Self {
        match v {
            View::Labeled => SceneVariant::Labeled,
            View::Plain => SceneVariant::Plain,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Tri {
    Closed,
    Reference,
}

impl From<Tri> for Triangulation {
    fn from(t: Tri) -> Self {
        match t {
            Tri::Closed => Triangulation::Closed,
            Tri::Reference => Triangulation::Reference,
        }
    }
}

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: SceneRenderer,
    orbit: OrbitCamera,
    show_markers: bool,
    dragging: bool,
    last_cursor: Option<PhysicalPosition<f64>>,
}

impl<'w> GpuState<'w> {
    async fn new(
        window: &'w winit::window::Window,
        scene: &RackScene,
        triangulation: Triangulation,
    ) -> anyhow::Result<Self> {
        let size = window.inner_size();
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
            .first()
            .copied()
            .context("surface reports no texture formats")?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let mesh = scene.mesh(&SceneStyle::default(), triangulation);
        let markers = MarkerInstance::for_labels(&scene.labels);
        let renderer = SceneRenderer::new(&device, format, &mesh, &markers);
        let bounds = scene.bounds().context("scene has no members to frame")?;

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
            orbit: OrbitCamera::for_scene(&bounds),
            show_markers: !markers.is_empty(),
            dragging: false,
            last_cursor: None,
        })
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn cursor_moved(&mut self, pos: PhysicalPosition<f64>) {
        if let (true, Some(last)) = (self.dragging, self.last_cursor) {
            self.orbit
                .orbit((pos.x - last.x) as f32, (pos.y - last.y) as f32);
        }
        self.last_cursor = Some(pos);
    }

    fn wheel(&mut self, delta: MouseScrollDelta) {
        // winit reports positive y for scrolling away, which should zoom in
        let dy = match delta {
            MouseScrollDelta::LineDelta(_, y) => -y * 100.0,
            MouseScrollDelta::PixelDelta(p) => -p.y as f32,
        };
        self.orbit.zoom_by_wheel(dy);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let (w, h) = (self.config.width, self.config.height);
        let camera = self.orbit.camera(w as f32 / h as f32);
        self.renderer
            .update_view(&self.queue, camera.view_proj(), w, h);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        self.renderer.draw(&mut encoder, &view, self.show_markers);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn print_layout(scene: &RackScene) {
    log::info!("{}", scene.title());
    log::info!("axes: {}", AXIS_TITLES.join(" / "));
    for rack in &scene.racks {
        log::info!(
            "rack {:>2}: x {:>7.1} .. {:>7.1}  facing {:?}{}",
            rack.id,
            rack.x_start,
            rack.x_end,
            rack.facing,
            if rack.single_sided { " (single-sided)" } else { "" }
        );
    }
    log::info!(
        "{} uprights, {} beams",
        scene.members_of(MemberKind::Upright).count(),
        scene.members_of(MemberKind::Beam).count()
    );
    for label in &scene.labels {
        let kind = match label.kind {
            LabelKind::BayAddress => "bay",
            LabelKind::LevelName => "level",
        };
        log::info!(
            "{kind:>5} label {:<8} at ({:.1}, {:.1}, {:.1})",
            label.text,
            label.position.x,
            label.position.y,
            label.position.z
        );
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let scene = build_scene(
        &WarehouseParams::default(),
        &RackAddressing::default(),
        cli.view.into(),
    )
    .context("building rack scene")?;

    if cli.print_layout {
        print_layout(&scene);
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(scene.title())
        .with_inner_size(PhysicalSize::new(1280, 800))
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(
        &window,
        &scene,
        cli.triangulation.into(),
    ))?;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => state.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::MouseInput {
                state: press,
                button: MouseButton::Left,
                ..
            } => state.dragging = press == ElementState::Pressed,
            WindowEvent::CursorMoved { position, .. } => state.cursor_moved(position),
            WindowEvent::MouseWheel { delta, .. } => state.wheel(delta),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => match logical_key {
                Key::Named(NamedKey::Escape) => elwt.exit(),
                Key::Character(c) if c.eq_ignore_ascii_case("r") => state.orbit.reset(),
                _ => {}
            },
            _ => {}
        },
        Event::AboutToWait => match state.render() {
            Ok(_) => state.window.request_redraw(),
            Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
            Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
            Err(e) => log::debug!("skipping frame: {e:?}"),
        },
        _ => {}
    })?;
    Ok(())
}
