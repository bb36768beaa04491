//! Per-frame driver: colour cycle, frequency, uniforms, render, reschedule.
//!
//! The loop owns the only [`FrameHandle`] in the system. Every path that
//! schedules a frame first takes or cancels the previous one, so at most one
//! callback chain is alive no matter how `start`/`stop` calls interleave.

use crate::camera::Camera;
use crate::color::ColorCycle;
use crate::config::VisualizerConfig;
use crate::frequency::{sample_frequency, FrequencySource, Mode};
use crate::orbit::ViewControl;
use crate::schedule::{FrameHandle, FrameScheduler};
use crate::uniforms::UniformBundle;
use instant::Instant;

/// Draws the scene with the current uniforms and camera.
pub trait SceneRenderer {
    fn render(&mut self, uniforms: &UniformBundle, camera: &Camera);
    fn resize(&mut self, width: u32, height: u32);
}

pub struct AnimationLoop {
    scheduler: Box<dyn FrameScheduler>,
    renderer: Box<dyn SceneRenderer>,
    analyser: Box<dyn FrequencySource>,
    view: ViewControl,
    colors: ColorCycle,
    color_speed: f32,
    uniforms: UniformBundle,
    started_at: Instant,
    mode: Option<Mode>,
    pending: Option<FrameHandle>,
    frames: u64,
}

impl AnimationLoop {
    pub fn new(
        config: &VisualizerConfig,
        view: ViewControl,
        scheduler: Box<dyn FrameScheduler>,
        renderer: Box<dyn SceneRenderer>,
        analyser: Box<dyn FrequencySource>,
    ) -> Self {
        let colors = ColorCycle::default();
        let mut uniforms = UniformBundle::default();
        uniforms.set_color(colors.sample());
        Self {
            scheduler,
            renderer,
            analyser,
            view,
            colors,
            color_speed: config.color_speed,
            uniforms,
            started_at: Instant::now(),
            mode: None,
            pending: None,
            frames: 0,
        }
    }

    /// Cancel any live chain, then step once in `mode` and schedule the next frame.
    pub fn start(&mut self, mode: Mode) {
        self.stop();
        log::info!("[loop] start {:?}", mode);
        self.mode = Some(mode);
        self.step();
    }

    /// Cancel the pending frame. Uniforms and colours stay frozen as they are.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
            log::debug!("[loop] cancelled frame {:?}", handle);
        }
        self.mode = None;
    }

    /// Scheduled callback fired.
    pub fn on_frame(&mut self) {
        if self.pending.take().is_none() {
            log::warn!("[loop] frame fired with nothing scheduled");
            return;
        }
        self.step();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.view.set_viewport(width, height);
        self.renderer.resize(width, height);
    }

    fn step(&mut self) {
        let Some(mode) = self.mode else {
            return;
        };
        self.colors.advance(self.color_speed);
        self.uniforms.set_color(self.colors.sample());

        let elapsed = self.elapsed_secs();
        self.uniforms.time = elapsed;
        self.uniforms.frequency = sample_frequency(mode, elapsed, self.analyser.as_mut());
        if mode == Mode::Idle {
            self.view.update();
        }
        self.uniforms.color_mix = self.colors.progress();

        self.renderer.render(&self.uniforms, self.view.camera());
        self.frames += 1;

        match self.scheduler.schedule() {
            Ok(handle) => self.pending = Some(handle),
            Err(e) => {
                log::error!("[loop] {}; animation stopped", e);
                self.pending = None;
                self.mode = None;
            }
        }
    }

    fn elapsed_secs(&self) -> f32 {
        self.started_at.elapsed().as_secs_f32()
    }

    /// `None` while stopped.
    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_handle(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    pub fn uniforms(&self) -> &UniformBundle {
        &self.uniforms
    }

    pub fn colors(&self) -> &ColorCycle {
        &self.colors
    }

    pub fn view_control(&self) -> &ViewControl {
        &self.view
    }

    pub fn view_control_mut(&mut self) -> &mut ViewControl {
        &mut self.view
    }
}
