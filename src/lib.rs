//! Crate Stack - A 3D tower stacking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (placement, stability, gravity, camera, session)
//! - `renderer`: By-value transform data handed to a GPU renderer
//! - `audio`: Placement sound cues
//! - `settings`: Player preferences
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Oscillation speed of the first crate (units/s)
    pub const BASE_MOVE_SPEED: f32 = 5.0;
    /// Speed added after every supported placement
    pub const SPEED_INCREMENT: f32 = 0.3;
    /// The active crate bounces between -bound and +bound on X
    pub const HORIZONTAL_BOUND: f32 = 5.0;
    /// Vertical distance between stacked crates
    pub const STACK_STEP: f32 = 2.0;
    /// Maximum X offset from the support crate that still counts as supported (exclusive)
    pub const SUPPORT_THRESHOLD: f32 = 0.7;

    /// Downward fall rate of unsupported crates (units/s)
    pub const GRAVITY: f32 = 9.8;
    /// Sideways nudge applied to a falling crate every tick
    pub const FALL_DRIFT: f32 = 0.1;
    /// Spin of a falling crate around its random axis (radians/s)
    pub const FALL_SPIN_RATE: f32 = std::f32::consts::FRAC_PI_2;
    /// Falling crates freeze once they drop below this height
    pub const FLOOR_Y: f32 = -15.0;

    /// Lives at session start
    pub const STARTING_LIVES: u32 = 3;
    /// Tower length that wins the game
    pub const MAX_CRATES: u32 = 100;
    /// Tower length where the background reaches sky color
    pub const HALF_CRATES: u32 = 50;

    /// Camera follow defaults
    pub const CAMERA_VERTICAL_OFFSET: f32 = 10.0;
    pub const CAMERA_DISTANCE_BEHIND: f32 = 20.0;
    pub const CAMERA_SMOOTHING: f32 = 0.1;
    pub const CAMERA_FOV_Y: f32 = std::f32::consts::FRAC_PI_4;
    pub const CAMERA_NEAR: f32 = 1.0;
    pub const CAMERA_FAR: f32 = 1000.0;
}

/// Linear interpolation between two RGBA colors
#[inline]
pub fn lerp_color(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    let t = t.clamp(0.0, 1.0);
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ]
}

/// Convert 8-bit sRGB channels to a float RGBA color
#[inline]
pub const fn rgb8(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}
