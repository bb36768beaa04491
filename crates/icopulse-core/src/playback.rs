use crate::animation::AnimationLoop;
use crate::constants::{PAUSE_LABEL, PLAY_LABEL};
use crate::error::Result;
use crate::frequency::Mode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
}

/// Audio transport for the loaded asset.
pub trait PlaybackTransport {
    fn play(&mut self) -> Result<()>;
    fn pause(&mut self) -> Result<()>;
}

/// Visible text of the play/pause toggle.
pub trait ButtonLabel {
    fn set_label(&mut self, text: &str);
}

/// Play/pause state machine. Owns the animation loop and drives its mode.
///
/// Only constructible with a transport, i.e. once the audio asset exists.
pub struct PlaybackController {
    animation: AnimationLoop,
    transport: Box<dyn PlaybackTransport>,
    label: Box<dyn ButtonLabel>,
    label_text: &'static str,
    state: PlaybackState,
}

impl PlaybackController {
    pub fn new(
        mut animation: AnimationLoop,
        transport: Box<dyn PlaybackTransport>,
        mut label: Box<dyn ButtonLabel>,
    ) -> Self {
        if animation.mode() != Some(Mode::Idle) {
            animation.start(Mode::Idle);
        }
        animation.view_control_mut().set_enabled(true);
        label.set_label(PLAY_LABEL);
        Self {
            animation,
            transport,
            label,
            label_text: PLAY_LABEL,
            state: PlaybackState::Stopped,
        }
    }

    /// User pressed the button.
    pub fn toggle(&mut self) -> PlaybackState {
        match self.state {
            PlaybackState::Stopped => {
                if let Err(e) = self.transport.play() {
                    log::error!("[playback] {}", e);
                    return self.state;
                }
                self.enter(PlaybackState::Playing);
            }
            PlaybackState::Playing => {
                if let Err(e) = self.transport.pause() {
                    // The source is gone either way; fall back to idle visuals.
                    log::error!("[playback] {}", e);
                }
                self.enter(PlaybackState::Stopped);
            }
        }
        self.state
    }

    /// The asset reached its end without user action.
    pub fn on_playback_ended(&mut self) {
        if self.state != PlaybackState::Playing {
            log::debug!("[playback] ended while already stopped");
            return;
        }
        self.enter(PlaybackState::Stopped);
    }

    fn enter(&mut self, state: PlaybackState) {
        let (mode, text) = match state {
            PlaybackState::Playing => (Mode::Active, PAUSE_LABEL),
            PlaybackState::Stopped => (Mode::Idle, PLAY_LABEL),
        };
        self.animation.stop();
        self.animation
            .view_control_mut()
            .set_enabled(mode == Mode::Idle);
        self.animation.start(mode);
        self.label.set_label(text);
        self.label_text = text;
        self.state = state;
        log::info!("[playback] {:?}", state);
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn label(&self) -> &'static str {
        self.label_text
    }

    pub fn animation(&self) -> &AnimationLoop {
        &self.animation
    }

    pub fn animation_mut(&mut self) -> &mut AnimationLoop {
        &mut self.animation
    }
}
