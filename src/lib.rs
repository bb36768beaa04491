#![cfg(target_arch = "wasm32")]
use icopulse_core::{
    icosphere, AnimationLoop, Camera, Session, ViewControl, VisualizerConfig, VizError,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

use frame::SharedSession;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("icopulse starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn read_config(canvas: &web::HtmlCanvasElement) -> VisualizerConfig {
    let config = VisualizerConfig::default();
    match canvas.get_attribute(constants::AUDIO_SRC_ATTR) {
        Some(path) if !path.trim().is_empty() => config.with_audio_path(path.trim()),
        _ => config,
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let config = read_config(&canvas);
    let (width, height) = dom::sync_canvas_backing_size(&canvas);

    let mesh = icosphere(config.mesh_radius, config.mesh_detail);
    let gpu = render::GpuState::new(&canvas, &mesh).await?;

    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let graph = audio::build_graph(&audio_ctx, config.fft_size)?;

    let session: SharedSession = Rc::new(RefCell::new(None));
    let mut view = ViewControl::new(Camera::for_viewport(width, height), config.orbit);
    view.set_viewport(width, height);
    let animation = AnimationLoop::new(
        &config,
        view,
        Box::new(frame::RafScheduler::new(window.clone(), &session)),
        Box::new(gpu),
        Box::new(audio::AnalyserSource::new(graph.analyser.clone())),
    );
    *session.borrow_mut() = Some(Session::new(animation));

    events::wire_resize(&window, &canvas, &session);
    events::pointer::wire_input_handlers(&window, &canvas, &session);
    events::keyboard::wire_keydown(&window, &session);

    spawn_local(load_and_attach(
        document,
        audio_ctx,
        graph.output,
        config.audio_path,
        session,
    ));
    Ok(())
}

/// Fetch the asset, then either offer playback or settle into permanent idle.
async fn load_and_attach(
    document: web::Document,
    audio_ctx: web::AudioContext,
    output: web::GainNode,
    path: String,
    session: SharedSession,
) {
    let outcome = match audio::load_buffer(&audio_ctx, &path).await {
        Ok(buffer) => attach_playback(&document, audio_ctx, output, buffer, &session),
        Err(e) => Err(e),
    };
    if let Err(reason) = outcome {
        swap_session(&session, |s| s.fail(reason));
        if let Err(e) = dom::show_unavailable(&document) {
            log::warn!("status element: {:?}", e);
        }
    }
}

fn attach_playback(
    document: &web::Document,
    audio_ctx: web::AudioContext,
    output: web::GainNode,
    buffer: web::AudioBuffer,
    session: &SharedSession,
) -> Result<(), VizError> {
    let button = dom::create_play_button(document)
        .map_err(|e| VizError::Transport(format!("play button: {:?}", e)))?;

    let session_end = session.clone();
    let track = audio::WebAudioTrack::new(audio_ctx, buffer, output, move || {
        if let Some(s) = session_end.borrow_mut().as_mut() {
            s.on_playback_ended();
        }
    });
    let label = dom::DomButtonLabel::new(button.clone());
    swap_session(session, |s| s.attach(Box::new(track), Box::new(label)));

    let session_click = session.clone();
    dom::add_click_listener(&button, move || {
        if let Some(s) = session_click.borrow_mut().as_mut() {
            s.toggle();
        }
    });
    Ok(())
}

fn swap_session(session: &SharedSession, f: impl FnOnce(Session) -> Session) {
    let mut slot = session.borrow_mut();
    if let Some(current) = slot.take() {
        *slot = Some(f(current));
    }
}
