// Host-side stand-ins for the browser collaborators.
// Each mock shares its state through Rc<RefCell<..>> so tests can inspect it
// after handing a boxed copy to the loop.

#![allow(dead_code)]

use icopulse_core::*;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

/// Records scheduled handles; `fire` plays the role of the next repaint.
#[derive(Default)]
pub struct SchedulerProbe {
    pub next_id: i32,
    pub pending: BTreeSet<i32>,
    pub scheduled: usize,
    pub cancelled: usize,
    pub fail_next: bool,
}

#[derive(Clone, Default)]
pub struct MockScheduler(pub Rc<RefCell<SchedulerProbe>>);

impl FrameScheduler for MockScheduler {
    fn schedule(&mut self) -> Result<FrameHandle, VizError> {
        let mut p = self.0.borrow_mut();
        if p.fail_next {
            p.fail_next = false;
            return Err(VizError::Schedule("no window".into()));
        }
        p.next_id += 1;
        let id = p.next_id;
        p.pending.insert(id);
        p.scheduled += 1;
        Ok(FrameHandle(id))
    }

    fn cancel(&mut self, handle: FrameHandle) {
        let mut p = self.0.borrow_mut();
        if p.pending.remove(&handle.0) {
            p.cancelled += 1;
        }
    }
}

impl MockScheduler {
    pub fn pending_count(&self) -> usize {
        self.0.borrow().pending.len()
    }

    /// Fire every pending callback once, as a repaint would.
    /// Returns how many callbacks ran.
    pub fn fire(&self, animation: &mut AnimationLoop) -> usize {
        let due: Vec<i32> = std::mem::take(&mut self.0.borrow_mut().pending)
            .into_iter()
            .collect();
        for _ in &due {
            animation.on_frame();
        }
        due.len()
    }

    pub fn fire_session(&self, session: &mut Session) -> usize {
        let due: Vec<i32> = std::mem::take(&mut self.0.borrow_mut().pending)
            .into_iter()
            .collect();
        for _ in &due {
            session.on_frame();
        }
        due.len()
    }
}

#[derive(Default)]
pub struct RenderProbe {
    pub frames: Vec<UniformBundle>,
    pub aspects: Vec<f32>,
    pub size: Option<(u32, u32)>,
}

#[derive(Clone, Default)]
pub struct MockRenderer(pub Rc<RefCell<RenderProbe>>);

impl SceneRenderer for MockRenderer {
    fn render(&mut self, uniforms: &UniformBundle, camera: &Camera) {
        let mut p = self.0.borrow_mut();
        p.frames.push(*uniforms);
        p.aspects.push(camera.aspect);
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.0.borrow_mut().size = Some((width, height));
    }
}

#[derive(Clone)]
pub struct MockAnalyser(pub Rc<RefCell<f32>>);

impl FrequencySource for MockAnalyser {
    fn average_magnitude(&mut self) -> f32 {
        *self.0.borrow()
    }
}

#[derive(Default)]
pub struct TransportProbe {
    pub playing: bool,
    pub plays: usize,
    pub pauses: usize,
    pub fail_play: bool,
}

#[derive(Clone, Default)]
pub struct MockTransport(pub Rc<RefCell<TransportProbe>>);

impl PlaybackTransport for MockTransport {
    fn play(&mut self) -> Result<(), VizError> {
        let mut p = self.0.borrow_mut();
        if p.fail_play {
            return Err(VizError::Transport("context suspended".into()));
        }
        p.playing = true;
        p.plays += 1;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), VizError> {
        let mut p = self.0.borrow_mut();
        p.playing = false;
        p.pauses += 1;
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockLabel(pub Rc<RefCell<String>>);

impl ButtonLabel for MockLabel {
    fn set_label(&mut self, text: &str) {
        *self.0.borrow_mut() = text.to_string();
    }
}

pub struct Harness {
    pub scheduler: MockScheduler,
    pub renderer: MockRenderer,
    pub analyser: MockAnalyser,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            scheduler: MockScheduler::default(),
            renderer: MockRenderer::default(),
            analyser: MockAnalyser(Rc::new(RefCell::new(42.0))),
        }
    }

    pub fn animation(&self) -> AnimationLoop {
        let config = VisualizerConfig::default();
        let mut view = ViewControl::new(Camera::default(), config.orbit);
        view.set_viewport(800, 600);
        AnimationLoop::new(
            &config,
            view,
            Box::new(self.scheduler.clone()),
            Box::new(self.renderer.clone()),
            Box::new(self.analyser.clone()),
        )
    }

    pub fn frames_rendered(&self) -> usize {
        self.renderer.0.borrow().frames.len()
    }

    pub fn last_frame(&self) -> UniformBundle {
        *self
            .renderer
            .0
            .borrow()
            .frames
            .last()
            .expect("at least one frame rendered")
    }
}
