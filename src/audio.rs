use icopulse_core::{average_magnitude, FrequencySource, PlaybackTransport, VizError};
use js_sys::ArrayBuffer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Master output plus the analyser tapping it.
pub struct AudioGraph {
    pub output: web::GainNode,
    pub analyser: web::AnalyserNode,
}

pub fn build_graph(audio_ctx: &web::AudioContext, fft_size: u32) -> anyhow::Result<AudioGraph> {
    let output = web::GainNode::new(audio_ctx).map_err(|e| anyhow::anyhow!("GainNode: {:?}", e))?;
    output.gain().set_value(1.0);
    let analyser =
        web::AnalyserNode::new(audio_ctx).map_err(|e| anyhow::anyhow!("AnalyserNode: {:?}", e))?;
    analyser.set_fft_size(fft_size);
    output
        .connect_with_audio_node(&audio_ctx.destination())
        .map_err(|e| anyhow::anyhow!("connect output: {:?}", e))?;
    output
        .connect_with_audio_node(&analyser)
        .map_err(|e| anyhow::anyhow!("connect analyser: {:?}", e))?;
    log::info!(
        "[audio] analyser fft={} bins={}",
        analyser.fft_size(),
        analyser.frequency_bin_count()
    );
    Ok(AudioGraph { output, analyser })
}

/// Byte-magnitude view of the analyser, averaged per read.
pub struct AnalyserSource {
    node: web::AnalyserNode,
    bins: Vec<u8>,
}

impl AnalyserSource {
    pub fn new(node: web::AnalyserNode) -> Self {
        let bins = vec![0u8; node.frequency_bin_count() as usize];
        Self { node, bins }
    }
}

impl FrequencySource for AnalyserSource {
    fn average_magnitude(&mut self) -> f32 {
        self.node.get_byte_frequency_data(&mut self.bins);
        average_magnitude(&self.bins)
    }
}

fn load_error(path: &str, reason: impl std::fmt::Debug) -> VizError {
    VizError::AssetLoad {
        path: path.to_string(),
        reason: format!("{:?}", reason),
    }
}

/// Fetch and decode the audio asset.
pub async fn load_buffer(
    audio_ctx: &web::AudioContext,
    path: &str,
) -> Result<web::AudioBuffer, VizError> {
    let window = web::window().ok_or_else(|| load_error(path, "no window"))?;
    let response: web::Response = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| load_error(path, e))?
        .dyn_into()
        .map_err(|e: JsValue| load_error(path, e))?;
    if !response.ok() {
        return Err(VizError::AssetLoad {
            path: path.to_string(),
            reason: format!("HTTP {}", response.status()),
        });
    }
    let bytes: ArrayBuffer = JsFuture::from(response.array_buffer().map_err(|e| load_error(path, e))?)
        .await
        .map_err(|e| load_error(path, e))?
        .dyn_into()
        .map_err(|e: JsValue| load_error(path, e))?;
    let decoded = JsFuture::from(
        audio_ctx
            .decode_audio_data(&bytes)
            .map_err(|e| load_error(path, e))?,
    )
    .await
    .map_err(|e| load_error(path, e))?;
    let buffer: web::AudioBuffer = decoded
        .dyn_into()
        .map_err(|e: JsValue| load_error(path, e))?;
    log::info!(
        "[audio] loaded {} ({:.1}s, {} ch)",
        path,
        buffer.duration(),
        buffer.number_of_channels()
    );
    Ok(buffer)
}

#[derive(Default)]
struct TrackState {
    source: Option<web::AudioBufferSourceNode>,
    started_at: f64,
    offset: f64,
}

/// One decoded asset played through buffer sources; pause keeps the offset.
///
/// A buffer source can only be started once, so every play creates a fresh
/// node that resumes from the stored offset.
pub struct WebAudioTrack {
    audio_ctx: web::AudioContext,
    buffer: web::AudioBuffer,
    output: web::GainNode,
    state: Rc<RefCell<TrackState>>,
    ended: Closure<dyn FnMut()>,
}

impl WebAudioTrack {
    /// `on_ended` runs after the asset plays through to its end.
    pub fn new(
        audio_ctx: web::AudioContext,
        buffer: web::AudioBuffer,
        output: web::GainNode,
        mut on_ended: impl FnMut() + 'static,
    ) -> Self {
        let state = Rc::new(RefCell::new(TrackState::default()));
        let state_end = state.clone();
        let ended = Closure::wrap(Box::new(move || {
            {
                let mut s = state_end.borrow_mut();
                s.source = None;
                s.offset = 0.0;
            }
            log::info!("[audio] playback finished");
            on_ended();
        }) as Box<dyn FnMut()>);
        Self {
            audio_ctx,
            buffer,
            output,
            state,
            ended,
        }
    }

    fn transport_error(what: &str, e: JsValue) -> VizError {
        VizError::Transport(format!("{}: {:?}", what, e))
    }
}

impl PlaybackTransport for WebAudioTrack {
    #[allow(deprecated)]
    fn play(&mut self) -> Result<(), VizError> {
        // Autoplay policy keeps the context suspended until a user gesture.
        if self.audio_ctx.state() == web::AudioContextState::Suspended {
            _ = self.audio_ctx.resume();
        }
        let mut state = self.state.borrow_mut();
        if state.source.is_some() {
            return Ok(());
        }
        let source = web::AudioBufferSourceNode::new(&self.audio_ctx)
            .map_err(|e| Self::transport_error("create source", e))?;
        source.set_buffer(Some(&self.buffer));
        source
            .connect_with_audio_node(&self.output)
            .map_err(|e| Self::transport_error("connect source", e))?;
        source.set_onended(Some(self.ended.as_ref().unchecked_ref()));
        source
            .start_with_when_and_grain_offset(0.0, state.offset)
            .map_err(|e| Self::transport_error("start", e))?;
        state.started_at = self.audio_ctx.current_time();
        state.source = Some(source);
        log::info!("[audio] play from {:.2}s", state.offset);
        Ok(())
    }

    #[allow(deprecated)]
    fn pause(&mut self) -> Result<(), VizError> {
        let mut state = self.state.borrow_mut();
        let Some(source) = state.source.take() else {
            return Ok(());
        };
        // Detach first so a manual stop is not reported as the track ending.
        source.set_onended(None);
        let played = self.audio_ctx.current_time() - state.started_at;
        let duration = self.buffer.duration();
        state.offset = if duration > 0.0 {
            (state.offset + played) % duration
        } else {
            0.0
        };
        source
            .stop()
            .map_err(|e| Self::transport_error("stop", e))?;
        _ = source.disconnect();
        log::info!("[audio] paused at {:.2}s", state.offset);
        Ok(())
    }
}
