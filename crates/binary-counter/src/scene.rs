use counter_engine::render::Mesh;

use crate::digits::{build_scene, DigitLayout};

/// GPU meshes for the value currently on screen, one per digit (LSB first).
///
/// Rebuilding replaces the previous meshes; dropping them releases their buffers.
#[derive(Default)]
pub struct CounterScene {
    value: Option<u32>,
    meshes: Vec<Mesh>,
}

impl CounterScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value the meshes were built for, if any.
    #[inline]
    pub fn value(&self) -> Option<u32> {
        self.value
    }

    #[inline]
    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    /// Returns `true` when the meshes do not show `value`.
    #[inline]
    pub fn is_stale(&self, value: u32) -> bool {
        self.value != Some(value)
    }

    /// Regenerates and uploads the geometry for `value`.
    pub fn rebuild(&mut self, device: &wgpu::Device, value: u32, layout: &DigitLayout) {
        let geometry = build_scene(value, layout);

        self.meshes = geometry
            .iter()
            .map(|g| Mesh::upload(device, &g.mesh))
            .collect();
        self.value = Some(value);

        let digits: String = geometry.iter().rev().map(|g| g.digit.to_string()).collect();
        log::debug!("scene rebuilt for {value} ({digits}b), {} meshes", self.meshes.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use counter_engine::scene::PrimitiveMode;

    fn device() -> wgpu::Device {
        wgpu::Device::noop(&wgpu::DeviceDescriptor::default()).0
    }

    #[test]
    fn empty_scene_is_stale_for_every_value() {
        let scene = CounterScene::new();
        assert_eq!(scene.value(), None);
        assert!(scene.meshes().is_empty());
        assert!(scene.is_stale(0));
    }

    #[test]
    fn rebuild_uploads_one_mesh_per_digit() {
        let device = device();
        let mut scene = CounterScene::new();

        scene.rebuild(&device, 5, &DigitLayout::default());
        assert_eq!(scene.value(), Some(5));
        assert!(!scene.is_stale(5));
        assert!(scene.is_stale(6));

        let modes: Vec<PrimitiveMode> = scene.meshes().iter().map(|m| m.mode()).collect();
        assert_eq!(
            modes,
            vec![
                PrimitiveMode::TriangleList,
                PrimitiveMode::TriangleStrip,
                PrimitiveMode::TriangleList,
                PrimitiveMode::TriangleStrip,
            ]
        );
        let counts: Vec<u32> = scene.meshes().iter().map(|m| m.index_count()).collect();
        assert_eq!(counts, vec![9, 34, 9, 34]);
    }

    #[test]
    fn rebuild_replaces_the_previous_meshes() {
        let device = device();
        let layout = DigitLayout::default();
        let mut scene = CounterScene::new();

        scene.rebuild(&device, 0, &layout);
        scene.rebuild(&device, 15, &layout);

        assert_eq!(scene.value(), Some(15));
        assert_eq!(scene.meshes().len(), 4);
        assert!(scene.meshes().iter().all(|m| m.mode() == PrimitiveMode::TriangleList));
    }
}
