use std::{process::ExitCode, sync::Arc};

use eframe::egui::{self, Color32, PointerButton, Pos2, Rect};
use parking_lot::Mutex;

mod config;
mod error;
mod geom;
mod gfx;
mod sim;

use error::AppError;
use geom::Pos;
use gfx::GraphicsState;
use sim::{DragState, FixedClock, Flow, Grid, InputEvent, SimParams};

const CANVAS: Pos = Pos::new(config::CANVAS_WIDTH, config::CANVAS_HEIGHT);

fn main() -> ExitCode {
    let _guard = match ftlog::Builder::new()
        .max_log_level(config::LOG_LEVEL)
        .try_init()
    {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", AppError::Logger(e.to_string()));
            return ExitCode::FAILURE;
        }
    };

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ftlog::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config::WINDOW_TITLE)
            .with_inner_size([config::CANVAS_WIDTH, config::CANVAS_HEIGHT])
            .with_resizable(false),
        follow_system_theme: false,
        ..Default::default()
    };

    // The creation callback cannot fail, so a missing renderer is parked here
    // and reported once the event loop has shut down.
    let failure = Arc::new(Mutex::new(None));
    let slot = Arc::clone(&failure);
    eframe::run_native(
        config::WINDOW_TITLE,
        native_options,
        Box::new(move |cc| -> Box<dyn eframe::App> {
            match cc.wgpu_render_state.as_ref() {
                Some(render_state) => Box::new(App::new(GraphicsState::new(render_state))),
                None => {
                    *slot.lock() = Some(AppError::NoRenderState);
                    Box::new(Aborted)
                }
            }
        }),
    )?;

    let failure = failure.lock().take();
    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct App {
    gfx: Arc<GraphicsState>,
    grid: Grid,
    params: SimParams,
    drag: DragState,
    clock: FixedClock,
}
impl App {
    fn new(gfx: GraphicsState) -> Self {
        let grid = Grid::centered(
            config::GRID_ROWS,
            config::GRID_COLS,
            config::SPRING_LENGTH,
            CANVAS,
        );
        let params = SimParams::default();
        ftlog::info!(
            "sheet of {}x{} points and {} springs, spacing {}, {params:?}",
            grid.rows(),
            grid.cols(),
            grid.edges().len(),
            config::SPRING_LENGTH,
        );
        Self {
            gfx: Arc::new(gfx),
            grid,
            params,
            drag: DragState::new(config::CLICK_RADIUS),
            clock: FixedClock::new(config::STEP_SECONDS, config::MAX_STEPS_PER_FRAME),
        }
    }
}
impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let [r, g, b] = config::BACKGROUND_COLOR;
        let panel = egui::Frame::none().fill(Color32::from_rgb(r, g, b));
        egui::CentralPanel::default().frame(panel).show(ctx, |ui| {
            let (rect, _) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

            let (events, close_requested, elapsed) = ctx.input(|i| {
                let events: Vec<InputEvent> = i
                    .events
                    .iter()
                    .filter_map(|event| translate_event(event, rect))
                    .collect();
                (events, i.viewport().close_requested(), i.unstable_dt)
            });
            let close = close_requested.then_some(InputEvent::Close);
            if drain_events(&mut self.drag, &mut self.grid, events.into_iter().chain(close))
                == Flow::Quit
            {
                ftlog::info!("closing window");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }

            for _ in 0..self.clock.advance(elapsed) {
                sim::step(&mut self.grid, &self.params);
            }

            let [r, g, b] = config::DOT_COLOR;
            let dots = gfx::dot_instances(
                &self.grid,
                CANVAS,
                config::DOT_RADIUS,
                Color32::from_rgb(r, g, b),
                self.gfx.linear_output,
            );
            ui.painter().add(eframe::egui_wgpu::Callback::new_paint_callback(
                rect,
                gfx::RenderResources {
                    gfx: Arc::clone(&self.gfx),
                    dots,
                },
            ));
        });
        ctx.request_repaint();
    }
}

/// Stand-in app that closes the window straight away after a startup failure.
struct Aborted;
impl eframe::App for Aborted {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

/// Feeds one frame's events to the controller, stopping at the first close.
fn drain_events(
    drag: &mut DragState,
    grid: &mut Grid,
    events: impl IntoIterator<Item = InputEvent>,
) -> Flow {
    for event in events {
        if drag.handle(grid, event) == Flow::Quit {
            return Flow::Quit;
        }
    }
    Flow::Continue
}

/// Maps an egui event on the canvas `rect` to a sheet input, if it is one.
fn translate_event(event: &egui::Event, rect: Rect) -> Option<InputEvent> {
    match *event {
        egui::Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            ..
        } => Some(if pressed {
            InputEvent::PointerDown(inv_transform(pos, rect))
        } else {
            InputEvent::PointerUp
        }),
        egui::Event::PointerMoved(pos) => Some(InputEvent::PointerMove(inv_transform(pos, rect))),
        _ => None,
    }
}

/// Screen position to canvas pixels, stretching `rect` over the whole canvas.
fn inv_transform(pos: Pos2, rect: Rect) -> Pos {
    let scale = egui::vec2(CANVAS.x, CANVAS.y) / rect.size();
    Pos::from(((pos - rect.min) * scale).to_pos2())
}
