// Shared visual/audio tuning constants used by the web frontend and tests.

// Colour cycle
pub const PALETTE: [[f32; 3]; 3] = [
    [0.376, 0.121, 0.922], // violet
    [0.922, 0.121, 0.376], // magenta
    [0.121, 0.922, 0.376], // green
];
pub const COLOR_TRANSITION_SPEED: f32 = 0.005; // progress added per frame

// Idle oscillation of the frequency uniform
pub const IDLE_FREQUENCY: f32 = 15.0; // base value
pub const IDLE_FREQUENCY_VARIATION: f32 = 9.0; // sine amplitude
pub const MIN_IDLE_FREQUENCY: f32 = 10.0; // floor, keeps the mesh moving at the trough

// Audio
pub const AUDIO_ASSET_PATH: &str = "./assets/call.mp3";
pub const ANALYSER_FFT_SIZE: u32 = 32;

// Mesh
pub const MESH_RADIUS: f32 = 2.5;
pub const MESH_DETAIL: u32 = 15;

// Camera
pub const CAMERA_EYE: [f32; 3] = [0.0, -2.0, 14.0];
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 0.5;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // distance ratio per wheel notch
pub const ORBIT_MIN_DISTANCE: f32 = 4.0;
pub const ORBIT_MAX_DISTANCE: f32 = 60.0;
pub const ORBIT_POLAR_EPSILON: f32 = 1e-3; // keeps the camera off the poles

// Play button labels
pub const PLAY_LABEL: &str = "▶️ Play";
pub const PAUSE_LABEL: &str = "⏸️ Pause";
