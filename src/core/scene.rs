//! Szene der Zeichenfläche: hält höchstens eine Pixmap.

use super::Pixmap;

/// 2D-Szene mit null oder einer Pixmap.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pixmap: Option<Pixmap>,
}

impl Scene {
    /// Erstellt eine leere Szene
    pub fn new() -> Self {
        Self { pixmap: None }
    }

    /// Setzt die Pixmap als einzigen Inhalt (ersetzt eine vorhandene).
    pub fn add_pixmap(&mut self, pixmap: Pixmap) {
        self.pixmap = Some(pixmap);
    }

    /// Aktuelle Pixmap, falls vorhanden
    pub fn pixmap(&self) -> Option<&Pixmap> {
        self.pixmap.as_ref()
    }

    /// Anzahl der Elemente in der Szene (0 oder 1)
    pub fn item_count(&self) -> usize {
        usize::from(self.pixmap.is_some())
    }

    /// `true`, wenn die Szene keine Elemente enthält
    pub fn is_empty(&self) -> bool {
        self.pixmap.is_none()
    }

    /// Szenen-Ausdehnung in Pixeln (0×0 bei leerer Szene oder Null-Pixmap).
    pub fn size(&self) -> (u32, u32) {
        self.pixmap.as_ref().map_or((0, 0), Pixmap::dimensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbaImage};

    fn pixmap(width: u32, height: u32) -> Pixmap {
        Pixmap::from_image(DynamicImage::ImageRgba8(RgbaImage::new(width, height)))
    }

    #[test]
    fn new_scene_is_empty() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert_eq!(scene.item_count(), 0);
        assert_eq!(scene.size(), (0, 0));
    }

    #[test]
    fn add_pixmap_replaces_previous_content() {
        let mut scene = Scene::new();
        scene.add_pixmap(pixmap(2, 2));
        scene.add_pixmap(pixmap(8, 4));

        assert_eq!(scene.item_count(), 1);
        assert_eq!(scene.size(), (8, 4));
    }

    #[test]
    fn null_pixmap_counts_as_item_with_zero_size() {
        let mut scene = Scene::new();
        scene.add_pixmap(Pixmap::null());

        assert_eq!(scene.item_count(), 1);
        assert_eq!(scene.size(), (0, 0));
        assert!(!scene.is_empty());
    }
}
