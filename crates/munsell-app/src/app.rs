//! Core application state and lifecycle.

use std::sync::Arc;

use munsell_core::{
    ActivityError, FileSettings, IconError, IconTemplate, MunsellActivity, Response,
    SettingsError, SettingsStore,
};
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::config::AppConfig;
use crate::ui::{UiAction, UiState, render_ui};

#[cfg(feature = "native")]
mod clipboard {
    /// Copy text to the system clipboard.
    pub fn copy_text(text: &str) {
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
            Ok(()) => log::info!("Copied {} to clipboard", text),
            Err(e) => log::error!("Failed to copy to clipboard: {}", e),
        }
    }
}

#[cfg(not(feature = "native"))]
mod clipboard {
    pub fn copy_text(text: &str) {
        log::warn!("No clipboard available, {} not copied", text);
    }
}

/// Errors that stop the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("Failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("No suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("Failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("Surface reports no supported formats")]
    UnsupportedSurface,
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Icon(#[from] IconError),
    #[error(transparent)]
    Activity(#[from] ActivityError),
}

/// Surface, device and queue for the window.
struct Gpu {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
}

impl Gpu {
    async fn new(window: Arc<Window>, width: u32, height: u32) -> Result<Self, AppError> {
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                force_fallback_adapter: false,
                compatible_surface: Some(&surface),
            })
            .await?;
        log::info!("Using adapter {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("munsell device"),
                ..Default::default()
            })
            .await?;

        // egui-wgpu expects a linear framebuffer
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|format| !format.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or(AppError::UnsupportedSurface)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            desired_maximum_frame_latency: 2,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: Vec::new(),
        };
        surface.configure(&device, &config);

        Ok(Self {
            surface,
            device,
            queue,
            config,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    fn render(
        &self,
        renderer: &mut egui_wgpu::Renderer,
        primitives: &[egui::ClippedPrimitive],
        textures_delta: &egui::TexturesDelta,
        pixels_per_point: f32,
    ) -> Result<(), wgpu::SurfaceError> {
        let surface_texture = self.surface.get_current_texture()?;
        let surface_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Update egui textures
        for (id, image_delta) in &textures_delta.set {
            renderer.update_texture(&self.device, &self.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point,
        };

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("egui encoder"),
            });
        let callback_buffers = renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            primitives,
            &screen_descriptor,
        );

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui render pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::WHITE),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // egui-wgpu wants a 'static render pass
            let mut render_pass = render_pass.forget_lifetime();
            renderer.render(&mut render_pass, primitives, &screen_descriptor);
        }

        self.queue.submit(
            callback_buffers
                .into_iter()
                .chain(std::iter::once(encoder.finish())),
        );

        // Free egui textures
        for id in &textures_delta.free {
            renderer.free_texture(id);
        }
        surface_texture.present();
        Ok(())
    }
}

/// Runtime state that exists once the window is up.
struct AppState {
    window: Arc<Window>,
    gpu: Gpu,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    activity: MunsellActivity<FileSettings>,
    ui_state: UiState,
    state: Option<AppState>,
    /// Failure raised inside the event loop, returned from [`App::run`].
    error: Option<AppError>,
}

impl App {
    /// Open the settings store and icon template and start the activity.
    ///
    /// A missing icon template or a malformed saved pair stops startup.
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let store = match &config.settings_path {
            Some(path) => FileSettings::new(path),
            None => FileSettings::default_location()?,
        };
        log::info!("Settings file: {}", store.path().display());

        let template = IconTemplate::load(&config.icon_path)?;
        let activity = MunsellActivity::new(store, template)?;

        Ok(Self {
            config,
            activity,
            ui_state: UiState::default(),
            state: None,
            error: None,
        })
    }

    /// Run the application until the window closes.
    pub async fn run(config: AppConfig) -> Result<(), AppError> {
        let mut app = App::new(config)?;
        let event_loop = EventLoop::new()?;
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        log::info!("Creating window...");

        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };

        let gpu = pollster::block_on(Gpu::new(window.clone(), width, height))?;

        let egui_ctx = egui::Context::default();
        egui_ctx.set_visuals(egui::Visuals::light());
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &gpu.device,
            gpu.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        log::info!("Munsell picker initialized - {}x{}", width, height);

        window.request_redraw();
        self.state = Some(AppState {
            window,
            gpu,
            egui_ctx,
            egui_state,
            egui_renderer,
        });
        Ok(())
    }

    fn redraw(&mut self) {
        let Self {
            activity,
            ui_state,
            state,
            ..
        } = self;
        let Some(state) = state.as_mut() else {
            return;
        };

        let egui_input = state.egui_state.take_egui_input(&state.window);
        let mut action = None;
        let egui_output = state.egui_ctx.run(egui_input, |ctx| {
            action = render_ui(ctx, ui_state, activity);
        });
        state
            .egui_state
            .handle_platform_output(&state.window, egui_output.platform_output);

        if let Some(action) = action {
            if let Err(e) = apply_action(activity, action) {
                log::error!("{}", e);
            }
            state.window.request_redraw();
        }

        match activity.pump_selections() {
            Ok(0) => {}
            Ok(_) => state.window.request_redraw(),
            Err(e) => log::error!("{}", e),
        }

        let primitives = state
            .egui_ctx
            .tessellate(egui_output.shapes, egui_output.pixels_per_point);
        match state.gpu.render(
            &mut state.egui_renderer,
            &primitives,
            &egui_output.textures_delta,
            egui_output.pixels_per_point,
        ) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = state.window.inner_size();
                state.gpu.resize(size.width.max(1), size.height.max(1));
                state.window.request_redraw();
            }
            Err(e) => log::warn!("Failed to get surface texture: {:?}", e),
        }

        let repaint_now = egui_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|viewport| viewport.repaint_delay.is_zero());
        if repaint_now {
            state.window.request_redraw();
        }
    }
}

/// Apply a UI action to the activity.
fn apply_action<S: SettingsStore>(
    activity: &mut MunsellActivity<S>,
    action: UiAction,
) -> Result<(), ActivityError> {
    match action {
        UiAction::SaveColors => activity.request_save(),
        UiAction::ConfirmSave => activity.respond(Response::Ok)?,
        UiAction::CancelSave => activity.respond(Response::Cancel)?,
        UiAction::DismissNotice => activity.dismiss_notice(),
        UiAction::CopyColor(slot) => {
            if let Some(color) = activity.colors().get(slot) {
                clipboard::copy_text(color.as_str());
            }
        }
    }
    Ok(())
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            log::error!("Failed to initialize: {}", e);
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        // Let egui process the event first
        let egui_response = state.egui_state.on_window_event(&state.window, &event);
        if egui_response.repaint {
            state.window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                state.gpu.resize(size.width, size.height);
                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => self.redraw(),

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use munsell_core::{COLOR_KEY, MemorySettings, PendingAlert};

    fn activity() -> MunsellActivity<MemorySettings> {
        let template = IconTemplate::from_source(r##"<path stroke="#000000" fill="#FFFFFF"/>"##);
        MunsellActivity::new(MemorySettings::new(), template).unwrap()
    }

    #[test]
    fn test_save_flow_through_actions() {
        let mut activity = activity();

        apply_action(&mut activity, UiAction::SaveColors).unwrap();
        assert_eq!(activity.alert(), Some(PendingAlert::ConfirmSave));

        apply_action(&mut activity, UiAction::ConfirmSave).unwrap();
        assert_eq!(activity.alert(), Some(PendingAlert::RestartNotice));
        assert_eq!(
            activity.store().get(COLOR_KEY).unwrap().as_deref(),
            Some("#A0FFA0,#FF8080")
        );

        apply_action(&mut activity, UiAction::DismissNotice).unwrap();
        assert_eq!(activity.alert(), None);
    }

    #[test]
    fn test_cancel_does_not_persist() {
        let mut activity = activity();

        apply_action(&mut activity, UiAction::SaveColors).unwrap();
        apply_action(&mut activity, UiAction::CancelSave).unwrap();
        assert_eq!(activity.alert(), None);
        assert_eq!(activity.store().get(COLOR_KEY).unwrap(), None);
    }

    #[test]
    fn test_new_fails_without_icon() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            icon_path: dir.path().join("missing.svg"),
            settings_path: Some(dir.path().join("settings.json")),
            ..AppConfig::default()
        };
        assert!(matches!(App::new(config), Err(AppError::Icon(_))));
    }

    #[test]
    fn test_new_fails_on_malformed_saved_colors() {
        let dir = tempfile::tempdir().unwrap();
        let settings = dir.path().join("settings.json");
        FileSettings::new(&settings).set(COLOR_KEY, "#A0FFA0").unwrap();

        let config = AppConfig {
            settings_path: Some(settings),
            ..AppConfig::default()
        };
        assert!(matches!(App::new(config), Err(AppError::Activity(_))));
    }

    #[test]
    fn test_new_reads_saved_colors() {
        let dir = tempfile::tempdir().unwrap();
        let settings = dir.path().join("settings.json");
        FileSettings::new(&settings).set(COLOR_KEY, "#112233,#445566").unwrap();

        let config = AppConfig {
            settings_path: Some(settings),
            ..AppConfig::default()
        };
        let app = App::new(config).unwrap();
        assert_eq!(app.activity.colors().to_setting_string(), "#112233,#445566");
        assert!(app.activity.icon_preview().contains("#112233"));
    }
}
