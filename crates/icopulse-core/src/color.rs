//! Repeating three-colour palette with linear blending between neighbours.

use crate::constants::PALETTE;

/// Colour triple with channels in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Per-channel `self + (other - self) * t`.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        Rgb {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[f32; 3]> for Rgb {
    fn from(c: [f32; 3]) -> Self {
        Rgb::new(c[0], c[1], c[2])
    }
}

pub const PALETTE_LEN: usize = PALETTE.len();

/// Transition state over the fixed palette.
///
/// `progress` always stays in \[0, 1): when an advance would reach 1 it
/// resets to 0 and both indices rotate forward by one.
#[derive(Clone, Debug)]
pub struct ColorCycle {
    palette: [Rgb; PALETTE_LEN],
    current: usize,
    next: usize,
    progress: f32,
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self::new(PALETTE.map(Rgb::from))
    }
}

impl ColorCycle {
    pub fn new(palette: [Rgb; PALETTE_LEN]) -> Self {
        Self {
            palette,
            current: 0,
            next: 1,
            progress: 0.0,
        }
    }

    pub fn advance(&mut self, speed: f32) {
        self.progress += speed;
        if self.progress >= 1.0 {
            self.progress = 0.0;
            self.current = self.next;
            self.next = (self.next + 1) % PALETTE_LEN;
        }
    }

    pub fn sample(&self) -> Rgb {
        self.palette[self.current].lerp(self.palette[self.next], self.progress)
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// `(current, next)` palette indices.
    pub fn indices(&self) -> (usize, usize) {
        (self.current, self.next)
    }

    pub fn palette(&self) -> &[Rgb; PALETTE_LEN] {
        &self.palette
    }
}
