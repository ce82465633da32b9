use eframe::{
    egui::{self, epaint},
    epi,
};
use game::prelude::*;
use logger::info;
use std::time::Instant;

/// Side length of one painted grid cell, in points.
const CELL: f32 = 20.0;

fn main() {
    logger::init_logger();

    info!("starting snake client");

    let app = GameApp::new();
    let native_options = eframe::NativeOptions::default();

    eframe::run_native(Box::new(app), native_options);
}

pub struct GameApp {
    /// The whole game model.
    state: GameState,

    /// Schedules the next simulation tick.
    ticker: Ticker,
}

impl GameApp {
    /// Return a new [`GameApp`] with a fresh game waiting for the start
    /// signal.
    fn new() -> Self {
        let state = GameState::new();
        let ticker = Ticker::new(state.interval(), Instant::now());
        Self { state, ticker }
    }

    /// Map the keys pressed this frame onto the game. Space starts an idle
    /// game, arrows and WASD steer, anything else is ignored.
    fn handle_input(&mut self, ctx: &egui::CtxRef, now: Instant) {
        if ctx.input().key_pressed(egui::Key::Space) && !self.state.running() {
            self.state.start();
            self.ticker.reschedule(self.state.interval(), now);
        }

        if ctx.input().key_pressed(egui::Key::ArrowUp) || ctx.input().key_pressed(egui::Key::W) {
            self.state.steer(Direction::Up);
        } else if ctx.input().key_pressed(egui::Key::ArrowDown)
            || ctx.input().key_pressed(egui::Key::S)
        {
            self.state.steer(Direction::Down);
        } else if ctx.input().key_pressed(egui::Key::ArrowLeft)
            || ctx.input().key_pressed(egui::Key::A)
        {
            self.state.steer(Direction::Left);
        } else if ctx.input().key_pressed(egui::Key::ArrowRight)
            || ctx.input().key_pressed(egui::Key::D)
        {
            self.state.steer(Direction::Right);
        }
    }

    /// Run at most one due tick and keep the ticker in step with the
    /// game's interval, which changes when the snake eats and when the
    /// game resets.
    fn advance(&mut self, now: Instant) {
        if !self.state.running() || !self.ticker.due(now) {
            return;
        }

        let outcome = self.state.tick();
        if outcome.ate || outcome.collision.is_some() {
            self.ticker.reschedule(self.state.interval(), now);
        }
    }
}

impl epi::App for GameApp {
    fn name(&self) -> &str {
        "Snake"
    }

    fn setup(
        &mut self,
        ctx: &egui::CtxRef,
        _frame: &mut epi::Frame<'_>,
        _storage: Option<&dyn epi::Storage>,
    ) {
        ctx.set_visuals(egui::Visuals::dark());
    }

    fn update(&mut self, ctx: &egui::CtxRef, _frame: &mut epi::Frame<'_>) {
        let now = Instant::now();

        self.handle_input(ctx, now);
        self.advance(now);

        let snapshot = self.state.snapshot();

        egui::SidePanel::new(egui::panel::Side::Right, "score_panel").show(ctx, |ui| {
            ui.heading("score");
            ui.monospace(format!("{:03}", snapshot.score));
            ui.heading("high score");
            ui.monospace(format!("{:03}", snapshot.high_score));
            ui.separator();

            if let Some(failure) = &snapshot.failure {
                ui.label(format!("Ah oh, {}!", failure));
            }
            if snapshot.state == RunState::Idle {
                ui.label("Press Space to start");
                ui.label("Arrows or WASD to steer");
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.painter().extend(paint(&snapshot));
        });

        ctx.request_repaint();
    }
}

/// Rasterize a snapshot into egui shapes: a stroked frame around the grid
/// and one filled rect per occupied cell. Cell (1, 1) paints at the top
/// left, matching the grid's orientation.
fn paint(snapshot: &Snapshot) -> Vec<egui::Shape> {
    let frame = CELL; // frame stroke size
    let offset = CELL * 2.0;
    let (w, h) = snapshot.grid_size;

    let mut shapes: Vec<egui::Shape> = Vec::new();

    shapes.push(egui::Shape::Rect(epaint::RectShape::stroke(
        epaint::Rect {
            min: egui::pos2(offset - frame, offset - frame),
            max: egui::pos2(
                (w as f32 * CELL) + frame + CELL * 2.0,
                (h as f32 * CELL) + frame + CELL * 2.0,
            ),
        },
        0.0,
        epaint::Stroke::new(frame, color32(Color::WHITE)),
    )));

    let offset = offset + frame / 2.0;

    for point in snapshot.points() {
        let (x, y) = (point.coordinates.x as f32, point.coordinates.y as f32);
        shapes.push(egui::Shape::Rect(epaint::RectShape::filled(
            epaint::Rect {
                min: egui::pos2(CELL * x + offset - CELL, CELL * y + offset - CELL),
                max: egui::pos2(CELL * x + offset, CELL * y + offset),
            },
            0.0,
            color32(point.color),
        )));
    }

    shapes
}

fn color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgba_premultiplied(color.r, color.g, color.b, color.a)
}
