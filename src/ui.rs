//! The egui layer: winit/wgpu plumbing plus the control panel.

use std::sync::Arc;

use winit::window::Window;

use lissa::controls::{Controls, AMPLITUDE_RANGE, DURATION_RANGE, FREQUENCY_RANGE};

/// Wraps the egui context, its winit state and its wgpu renderer.
pub struct EguiLayer {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

/// Tessellated output of one UI frame.
pub struct UiFrame {
    pub paint_jobs: Vec<egui::ClippedPrimitive>,
    pub textures_delta: egui::TexturesDelta,
    pub pixels_per_point: f32,
}

/// Numbers surfaced in the panel read-outs.
pub struct PanelStats {
    pub fps: f32,
    pub live_curves: usize,
}

/// Panel interactions the host must act on.
#[derive(Default)]
pub struct PanelResponse {
    pub clear: bool,
}

impl EguiLayer {
    pub fn new(
        device: &wgpu::Device,
        output_format: wgpu::TextureFormat,
        window: &Arc<Window>,
    ) -> Self {
        let ctx = egui::Context::default();

        // Dark theme without shadows reads best over the black canvas.
        let mut style = egui::Style::default();
        style.visuals = egui::Visuals::dark();
        style.visuals.window_shadow = egui::Shadow::NONE;
        style.visuals.popup_shadow = egui::Shadow::NONE;
        ctx.set_style(style);

        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window.as_ref(),
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let renderer = egui_wgpu::Renderer::new(device, output_format, None, 1, false);

        Self {
            ctx,
            state,
            renderer,
        }
    }

    /// Feed a winit event; true when egui consumed it.
    pub fn on_window_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Run one UI frame over the control panel.
    pub fn run(
        &mut self,
        window: &Window,
        controls: &mut Controls,
        stats: PanelStats,
    ) -> (UiFrame, PanelResponse) {
        let raw_input = self.state.take_egui_input(window);
        self.ctx.begin_pass(raw_input);

        let response = control_panel(&self.ctx, controls, stats);

        let full_output = self.ctx.end_pass();
        self.state
            .handle_platform_output(window, full_output.platform_output);
        let paint_jobs = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        (
            UiFrame {
                paint_jobs,
                textures_delta: full_output.textures_delta,
                pixels_per_point: full_output.pixels_per_point,
            },
            response,
        )
    }

    /// Upload texture and buffer changes ahead of the render pass.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        frame: &UiFrame,
        screen: &egui_wgpu::ScreenDescriptor,
    ) {
        for (id, delta) in &frame.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, delta);
        }
        self.renderer
            .update_buffers(device, queue, encoder, &frame.paint_jobs, screen);
    }

    /// Paint into an already-open render pass.
    pub fn render(
        &self,
        pass: &mut wgpu::RenderPass<'static>,
        frame: &UiFrame,
        screen: &egui_wgpu::ScreenDescriptor,
    ) {
        self.renderer.render(pass, &frame.paint_jobs, screen);
    }

    /// Drop textures freed this frame.
    pub fn cleanup(&mut self, frame: &UiFrame) {
        for id in &frame.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}

fn control_panel(ctx: &egui::Context, controls: &mut Controls, stats: PanelStats) -> PanelResponse {
    let mut response = PanelResponse::default();

    egui::Window::new("Controls")
        .default_pos([10.0, 10.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Amplitude:");
                ui.add(egui::Slider::new(&mut controls.amplitude, AMPLITUDE_RANGE));
            });
            ui.horizontal(|ui| {
                ui.label("Frequency:");
                ui.add(egui::Slider::new(&mut controls.frequency, FREQUENCY_RANGE));
            });
            ui.horizontal(|ui| {
                ui.label("Duration:");
                ui.add(egui::Slider::new(&mut controls.duration, DURATION_RANGE));
            });

            ui.separator();
            ui.label(format!("{} curves live", stats.live_curves));
            ui.label(format!("{:.0} fps", stats.fps));

            ui.separator();
            if ui.button("Clear canvas").clicked() {
                response.clear = true;
            }
        });

    response
}
