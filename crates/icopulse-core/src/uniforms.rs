use crate::color::Rgb;

/// Scalars pushed to the wireframe shader every frame.
///
/// Layout matches the tail of the WGSL `Uniforms` struct; the trailing
/// padding keeps the block a multiple of 16 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct UniformBundle {
    pub time: f32,
    pub frequency: f32,
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub color_mix: f32,
    pub _pad: [f32; 2],
}

impl UniformBundle {
    pub fn set_color(&mut self, c: Rgb) {
        self.red = c.r;
        self.green = c.g;
        self.blue = c.b;
    }

    pub fn color(&self) -> Rgb {
        Rgb::new(self.red, self.green, self.blue)
    }
}
