use std::time::Instant;

use bezier_beauty::animation::Animator;
use eframe::egui::{self, CentralPanel, Sense, Vec2};
use log::debug;

use crate::{
    frame_clock::{FrameClock, FramePoll},
    plotting::{CanvasTransform, frame_shapes},
    settings::WindowSettings,
    theme::ThemeColors,
};

pub struct BezierBeautyApp {
    animator: Animator,
    clock: FrameClock,
    colors: ThemeColors,
    canvas_size: Vec2,
}

impl BezierBeautyApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: WindowSettings) -> Self {
        let options = settings.animator_options();
        debug!("animator options: {:?}", options);
        Self {
            animator: Animator::new(options),
            clock: FrameClock::new(settings.frame_interval),
            colors: ThemeColors::default(),
            canvas_size: Vec2::new(settings.width, settings.height),
        }
    }
}

impl eframe::App for BezierBeautyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let Self {
            animator,
            clock,
            colors,
            canvas_size,
        } = self;

        let now = Instant::now();
        if clock.poll(now) == FramePoll::Tick {
            animator.tick();
        }

        let frame = egui::Frame::NONE.fill(colors.background);
        CentralPanel::default().frame(frame).show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(*canvas_size, Sense::hover());
            let transform = CanvasTransform::new(response.rect);
            painter.extend(frame_shapes(&animator.frame(), &transform, colors));
        });

        ctx.request_repaint_after(clock.until_next(now));
    }
}
