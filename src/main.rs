#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use festive_board::{BoardConfig, DrawingBoardApp};

type DynError = Box<dyn std::error::Error + Send + Sync>;

fn create_app(cc: &eframe::CreationContext<'_>, config: BoardConfig) -> Result<Box<dyn eframe::App>, DynError> {
    let app = DrawingBoardApp::new(cc, config)?;
    Ok(Box::new(app))
}

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = match std::env::args_os().nth(1) {
        Some(path) => BoardConfig::load(path)?,
        None => BoardConfig::default(),
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Festive Drawing Board")
            .with_inner_size([config.canvas_width + 40.0, config.canvas_height + 100.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Festive Drawing Board",
        native_options,
        Box::new(move |cc| create_app(cc, config)),
    )?;
    Ok(())
}

// When compiling to web using trunk:
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            log::error!("No document to attach the board to");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("the_canvas_id")
            .and_then(|element| element.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("the_canvas_id is missing or is not a canvas");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| create_app(cc, BoardConfig::default())),
            )
            .await;

        if let Err(err) = start_result {
            log::error!("Failed to start the drawing board: {:?}", err);
        }
    });
}
