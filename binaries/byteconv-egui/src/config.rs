use eframe::egui;

/// Window and widget settings. Nothing here is read from disk.
#[derive(Clone, Debug, PartialEq)]
pub struct UiConfig {
    pub window_title: &'static str,
    pub window_size: [f32; 2],
    pub zoom_percent: u16,
    pub field_font_size: f32,
    /// Width of one text field in points.
    pub field_width: f32,
    pub item_spacing: f32,
    pub group_spacing: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_title: "單位轉換器 Unit Converter",
            window_size: [700.0, 250.0],
            zoom_percent: 100,
            field_font_size: 16.0,
            field_width: 150.0,
            item_spacing: 6.0,
            group_spacing: 12.0,
        }
    }
}

impl UiConfig {
    pub fn zoom_factor(&self) -> f32 {
        f32::from(self.zoom_percent) / 100.0
    }

    pub fn viewport(&self) -> egui::ViewportBuilder {
        egui::ViewportBuilder::default()
            .with_title(self.window_title)
            .with_inner_size(self.window_size)
            .with_min_inner_size(self.window_size)
    }

    pub fn field_font(&self) -> egui::FontId {
        egui::FontId::monospace(self.field_font_size)
    }
}
