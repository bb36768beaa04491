use super::helpers;

/// Multisampled color target resolved into the swapchain each frame.
pub(crate) struct MsaaTarget {
    #[allow(dead_code)]
    pub(crate) tex: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
    format: wgpu::TextureFormat,
    sample_count: u32,
}

impl MsaaTarget {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let (tex, view) =
            helpers::create_color_texture(device, "msaa_color", width, height, format, sample_count);
        Self {
            tex,
            view,
            format,
            sample_count,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self.tex, self.view) = helpers::create_color_texture(
            device,
            "msaa_color",
            width,
            height,
            self.format,
            self.sample_count,
        );
    }
}
