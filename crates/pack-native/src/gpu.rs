use pack_core::{FrameView, PackScene, RenderBackend};
use pack_render::{capture_frame, PackBuffers, SceneRenderer};
use winit::window::Window;

pub struct GpuState<'w> {
    pub window: &'w Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: SceneRenderer,
}

impl<'w> GpuState<'w> {
    pub async fn new(window: &'w Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));
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
        let config = wgpu::SurfaceConfiguration {
            // COPY_SRC is not needed: exports render offscreen
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        let renderer = SceneRenderer::new(&device, format, width, height);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.renderer
            .resize(&self.device, new_size.width, new_size.height);
    }
}

impl RenderBackend for GpuState<'_> {
    type Resources = PackBuffers;
    type Error = anyhow::Error;

    fn materialize(&mut self, scene: &PackScene) -> anyhow::Result<PackBuffers> {
        Ok(self.renderer.materialize(&self.device, scene))
    }

    fn release(&mut self, resources: PackBuffers) {
        resources.destroy();
    }

    /// Surface errors other than `Lost`/`Outdated` come back as a
    /// [`wgpu::SurfaceError`] inside the `anyhow::Error`.
    fn render_frame(
        &mut self,
        resources: Option<&PackBuffers>,
        view: &FrameView,
    ) -> anyhow::Result<()> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.resize(self.window.inner_size());
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        let target = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        self.renderer
            .encode(&self.queue, &mut encoder, &target, resources, view);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn export_still(
        &mut self,
        resources: Option<&PackBuffers>,
        view: &FrameView,
        file_name: &str,
    ) -> anyhow::Result<()> {
        let captured = capture_frame(&self.device, &self.queue, &self.renderer, resources, view)?;
        let image = image::RgbaImage::from_raw(captured.width, captured.height, captured.rgba)
            .ok_or_else(|| anyhow::anyhow!("captured frame has the wrong size"))?;
        image.save(file_name)?;
        Ok(())
    }
}
