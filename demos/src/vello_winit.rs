// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! winit + Vello host for the [`Viewer`].

use std::num::NonZeroUsize;
use std::sync::Arc;

use planar_interaction::EventQueue;
use planar_plot::{ControlFlow, Viewer};
use vello::util::{RenderContext, RenderSurface};
use vello::wgpu;
use vello::{AaConfig, Renderer, RendererOptions, Scene};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::StartError;
use crate::scene_surface::SceneSurface;
use crate::winit_input::{InputTranslator, logical_size};

/// Window title.
const TITLE: &str = "Planar";

/// Render state across winit suspend/resume.
pub enum RenderState<'s> {
    /// Winit is suspended; cache a window if we had one.
    Suspended(Option<Arc<Window>>),
    /// Active window + surface.
    Active {
        surface: Box<RenderSurface<'s>>,
        window: Arc<Window>,
    },
}

/// winit application driving a [`Viewer`] and presenting through Vello.
///
/// Window events are translated and queued as they arrive; each redraw
/// drains the queue into the viewer and renders one frame.
pub struct PlanarApp<'s> {
    context: RenderContext,
    renderer: Option<Renderer>,
    state: RenderState<'s>,
    scene: Scene,
    viewer: Viewer,
    queue: EventQueue,
    input: InputTranslator,
    use_cpu: bool,
    error: Option<StartError>,
}

impl<'s> PlanarApp<'s> {
    /// Creates the app around `viewer`.
    pub fn new(viewer: Viewer, use_cpu: bool) -> Self {
        Self {
            context: RenderContext::new(),
            renderer: None,
            state: RenderState::Suspended(None),
            scene: Scene::new(),
            viewer,
            queue: EventQueue::new(),
            input: InputTranslator::default(),
            use_cpu,
            error: None,
        }
    }

    /// The fatal start‑up error that stopped the event loop, if any.
    pub fn take_error(&mut self) -> Option<StartError> {
        self.error.take()
    }

    /// The viewer, for inspection after the loop ended.
    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    fn activate(&mut self, event_loop: &ActiveEventLoop) -> Result<(), StartError> {
        let RenderState::Suspended(cached_window) = &mut self.state else {
            return Ok(());
        };

        let window = match cached_window.take() {
            Some(window) => window,
            None => {
                let view = self.viewer.viewport();
                create_winit_window(event_loop, view.width(), view.height())?
            }
        };

        let size = window.inner_size();
        let surface_future = self.context.create_surface(
            window.clone(),
            size.width,
            size.height,
            wgpu::PresentMode::AutoVsync,
        );
        let surface = pollster::block_on(surface_future).map_err(StartError::Surface)?;

        if self.renderer.is_none() {
            self.renderer = Some(create_vello_renderer(
                &self.context,
                &surface,
                self.use_cpu,
            )?);
        }

        // The window may not have the requested size (tiling WMs, HiDPI).
        let (width, height) = logical_size(size, window.scale_factor());
        self.viewer.viewport_mut().set_viewport_size(width, height);
        self.viewer.start(&mut SceneSurface::new(
            &mut self.scene,
            width,
            height,
            window.scale_factor(),
        ));
        tracing::info!(width, height, cpu = self.use_cpu, "window ready");

        window.request_redraw();
        self.state = RenderState::Active {
            surface: Box::new(surface),
            window,
        };
        Ok(())
    }
}

impl ApplicationHandler for PlanarApp<'_> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Err(err) = self.activate(event_loop) {
            self.error = Some(err);
            event_loop.exit();
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        if let RenderState::Active { window, .. } = &self.state {
            self.state = RenderState::Suspended(Some(window.clone()));
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let (surface, window) = match &mut self.state {
            RenderState::Active { surface, window } if window.id() == window_id => {
                (surface, &**window)
            }
            _ => return,
        };

        if let Some(input) = self.input.translate(&event, window.scale_factor()) {
            self.queue.push(input);
            if self.queue.contains_exit() {
                // Nothing left to show once the window is going away.
                self.viewer.apply_events(self.queue.drain());
                event_loop.exit();
                return;
            }
            window.request_redraw();
        }

        match event {
            WindowEvent::Resized(size) => {
                self.context
                    .resize_surface(surface, size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                let view = self.viewer.viewport();
                let (width, height) = (view.width(), view.height());
                let mut target =
                    SceneSurface::new(&mut self.scene, width, height, window.scale_factor());
                let report = self.viewer.frame(self.queue.drain(), &mut target);
                tracing::trace!(
                    events = report.events,
                    drawn = target.drawn(),
                    culled = target.culled(),
                    "frame"
                );
                if report.control == ControlFlow::Exit {
                    event_loop.exit();
                    return;
                }

                let wgpu::SurfaceConfiguration { width, height, .. } = surface.config;
                let device_handle = &self.context.devices[surface.dev_id];

                let surface_texture = match surface.surface.get_current_texture() {
                    Ok(texture) => texture,
                    Err(err) => {
                        tracing::warn!(%err, "skipping frame: no surface texture");
                        window.request_redraw();
                        return;
                    }
                };

                let Some(renderer) = self.renderer.as_mut() else {
                    return;
                };
                if let Err(err) = renderer.render_to_texture(
                    &device_handle.device,
                    &device_handle.queue,
                    &self.scene,
                    &surface.target_view,
                    &vello::RenderParams {
                        base_color: self.viewer.background(),
                        width,
                        height,
                        antialiasing_method: AaConfig::Area,
                    },
                ) {
                    tracing::error!(%err, "render failed");
                    return;
                }

                let mut encoder =
                    device_handle
                        .device
                        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("Surface Blit"),
                        });
                surface.blitter.copy(
                    &device_handle.device,
                    &mut encoder,
                    &surface.target_view,
                    &surface_texture
                        .texture
                        .create_view(&wgpu::TextureViewDescriptor::default()),
                );
                device_handle.queue.submit([encoder.finish()]);
                surface_texture.present();

                let _ = device_handle.device.poll(wgpu::PollType::Poll);
            }
            _ => {}
        }
    }
}

fn create_winit_window(
    event_loop: &ActiveEventLoop,
    width: u32,
    height: u32,
) -> Result<Arc<Window>, StartError> {
    let attr = Window::default_attributes()
        .with_inner_size(LogicalSize::new(width, height))
        .with_resizable(true)
        .with_title(TITLE);
    Ok(Arc::new(event_loop.create_window(attr)?))
}

fn create_vello_renderer(
    render_cx: &RenderContext,
    surface: &RenderSurface<'_>,
    use_cpu: bool,
) -> Result<Renderer, StartError> {
    Renderer::new(
        &render_cx.devices[surface.dev_id].device,
        RendererOptions {
            use_cpu,
            antialiasing_support: vello::AaSupport::area_only(),
            num_init_threads: NonZeroUsize::new(1),
            pipeline_cache: None,
        },
    )
    .map_err(StartError::Renderer)
}
