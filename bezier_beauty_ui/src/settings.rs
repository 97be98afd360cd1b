use std::time::Duration;

use bezier_beauty::animation::{AnimatorOptions, DEFAULT_CANVAS_SIZE};

/// Fixed window parameters, the window is not resizable.
#[derive(Debug, Clone, Copy)]
pub struct WindowSettings {
    pub title: &'static str,
    pub width: f32,
    pub height: f32,
    /// Time between animation ticks.
    pub frame_interval: Duration,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Bezier Beauty",
            width: DEFAULT_CANVAS_SIZE as f32,
            height: DEFAULT_CANVAS_SIZE as f32,
            frame_interval: Duration::from_millis(50),
        }
    }
}

impl WindowSettings {
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title)
                .with_inner_size([self.width, self.height])
                .with_position([5.0, 5.0])
                .with_resizable(false),
            ..Default::default()
        }
    }

    /// Animator options laid out for this window's canvas.
    pub fn animator_options(&self) -> AnimatorOptions {
        AnimatorOptions::for_canvas(self.width as f64, self.height as f64)
    }
}
