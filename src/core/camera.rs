//! 2D-Kamera für Pan und Zoom der Zeichenfläche.

use glam::Vec2;

/// 2D-Kamera mit Pan und Zoom.
///
/// Szenen-Koordinaten entsprechen Bildpixeln (Ursprung oben links, Y nach unten).
/// `position` ist der Szenenpunkt in der Viewport-Mitte.
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Szenenpunkt in der Mitte des Viewports
    pub position: Vec2,
    /// Zoom-Level (1.0 = ein Bildpixel pro Bildschirmpixel)
    pub zoom: f32,
}

impl Camera2D {
    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Multipliziert den Zoom-Level mit `factor` (ohne Begrenzung).
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom *= factor;
    }

    /// Zoomt um `factor`, wobei `focus` an derselben Bildschirmposition bleibt.
    pub fn zoom_towards(&mut self, factor: f32, focus: Vec2) {
        let old_zoom = self.zoom;
        self.zoom_by(factor);
        let scale = old_zoom / self.zoom;
        self.position = focus + (self.position - focus) * scale;
    }

    /// Konvertiert Viewport-lokale Screen-Koordinaten zu Szenen-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
        (screen_pos - screen_size * 0.5) / self.zoom + self.position
    }

    /// Konvertiert Szenen-Koordinaten zu Viewport-lokalen Screen-Koordinaten.
    pub fn world_to_screen(&self, world_pos: Vec2, screen_size: Vec2) -> Vec2 {
        (world_pos - self.position) * self.zoom + screen_size * 0.5
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
