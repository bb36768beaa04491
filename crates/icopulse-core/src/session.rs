use crate::animation::AnimationLoop;
use crate::error::VizError;
use crate::frequency::Mode;
use crate::playback::{ButtonLabel, PlaybackController, PlaybackState, PlaybackTransport};

/// Lifetime of one visualization: idle while the asset loads, then either
/// interactive or permanently idle if loading failed.
pub enum Session {
    Loading(AnimationLoop),
    Unavailable {
        animation: AnimationLoop,
        reason: VizError,
    },
    Interactive(PlaybackController),
}

impl Session {
    /// Starts the idle loop if it is not already running.
    pub fn new(mut animation: AnimationLoop) -> Self {
        if animation.mode().is_none() {
            animation.start(Mode::Idle);
        }
        Session::Loading(animation)
    }

    /// Asset loaded: hand the running loop to a playback controller.
    pub fn attach(
        self,
        transport: Box<dyn PlaybackTransport>,
        label: Box<dyn ButtonLabel>,
    ) -> Self {
        match self {
            Session::Loading(animation) => {
                log::info!("[session] audio ready");
                Session::Interactive(PlaybackController::new(animation, transport, label))
            }
            other => {
                log::warn!("[session] attach ignored; session is not loading");
                other
            }
        }
    }

    /// Asset failed to load: keep idling, never offer playback.
    pub fn fail(self, reason: VizError) -> Self {
        match self {
            Session::Loading(animation) => {
                log::error!("[session] {}; staying idle", reason);
                Session::Unavailable { animation, reason }
            }
            other => other,
        }
    }

    /// `None` unless interactive.
    pub fn toggle(&mut self) -> Option<PlaybackState> {
        match self {
            Session::Interactive(c) => Some(c.toggle()),
            _ => {
                log::warn!("[session] toggle ignored; audio not loaded");
                None
            }
        }
    }

    pub fn on_playback_ended(&mut self) {
        if let Session::Interactive(c) = self {
            c.on_playback_ended();
        }
    }

    pub fn on_frame(&mut self) {
        self.animation_mut().on_frame();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.animation_mut().resize(width, height);
    }

    pub fn controller(&self) -> Option<&PlaybackController> {
        match self {
            Session::Interactive(c) => Some(c),
            _ => None,
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, Session::Interactive(_))
    }

    pub fn failure(&self) -> Option<&VizError> {
        match self {
            Session::Unavailable { reason, .. } => Some(reason),
            _ => None,
        }
    }

    pub fn animation(&self) -> &AnimationLoop {
        match self {
            Session::Loading(a) => a,
            Session::Unavailable { animation, .. } => animation,
            Session::Interactive(c) => c.animation(),
        }
    }

    pub fn animation_mut(&mut self) -> &mut AnimationLoop {
        match self {
            Session::Loading(a) => a,
            Session::Unavailable { animation, .. } => animation,
            Session::Interactive(c) => c.animation_mut(),
        }
    }
}
