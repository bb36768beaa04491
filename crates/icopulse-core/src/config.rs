use crate::constants::*;

/// Tunables for one visualization session.
#[derive(Clone, Debug)]
pub struct VisualizerConfig {
    pub audio_path: String,
    pub color_speed: f32,
    pub fft_size: u32,
    pub mesh_radius: f32,
    pub mesh_detail: u32,
    pub orbit: OrbitConfig,
}

#[derive(Clone, Copy, Debug)]
pub struct OrbitConfig {
    pub damping: f32,
    pub rotate_speed: f32,
    pub zoom_step: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            audio_path: AUDIO_ASSET_PATH.to_string(),
            color_speed: COLOR_TRANSITION_SPEED,
            fft_size: ANALYSER_FFT_SIZE,
            mesh_radius: MESH_RADIUS,
            mesh_detail: MESH_DETAIL,
            orbit: OrbitConfig::default(),
        }
    }
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            damping: ORBIT_DAMPING,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_step: ORBIT_ZOOM_STEP,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
        }
    }
}

impl VisualizerConfig {
    /// Replace the audio asset path, keeping every other default.
    pub fn with_audio_path(mut self, path: impl Into<String>) -> Self {
        self.audio_path = path.into();
        self
    }
}
