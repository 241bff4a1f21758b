mod config;
mod controller;
mod graphics;
mod input;
mod patterns;
mod world;

use std::time::Instant;

use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::config::Config;
use crate::controller::{ControlSignal, Controller};
use crate::graphics::GraphicsRenderer;
use crate::input::InputHandler;
use crate::world::World;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Optional path to a JSON config overriding the built-in defaults.
    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };

    log::info!("gridlife - Conway's Game of Life");
    log::info!(
        "Grid {}x{}, tile {} px, step every {} ms",
        config.grid_width(),
        config.grid_height(),
        config.tile_size,
        config.step_interval_ms
    );
    log::info!("Controls:");
    log::info!("  Left click       - Toggle cell");
    log::info!("  Space (hold) / S - Step");
    log::info!("  P (hold)         - Pause");
    log::info!("  G (hold)         - Randomize");
    log::info!("  R                - Clear board");
    log::info!("  L                - Gosper glider gun");
    log::info!("  1-3              - Load pattern");
    log::info!("  Escape / Q       - Quit");

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Game of Life")
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.screen_width,
            config.screen_height,
        ))
        .with_resizable(true)
        .build(&event_loop)?;

    let mut graphics = GraphicsRenderer::new(&window, config.screen_width, config.screen_height)?;
    let mut world = World::new(config.grid_width(), config.grid_height());
    let mut controller = Controller::new(&config);
    let mut input = InputHandler::new();

    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    graphics.resize(size.width, size.height);
                }
                WindowEvent::KeyboardInput { input: key, .. } => {
                    input.key_event(key.state, key.virtual_keycode);
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    input.mouse_event(state, button);
                }
                WindowEvent::CursorMoved { position, .. } => {
                    input.set_cursor(
                        graphics.window_pos_to_pixel((position.x as f32, position.y as f32)),
                    );
                }
                WindowEvent::CursorLeft { .. } => {
                    input.set_cursor(None);
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                let now = Instant::now();
                if controller.update(&mut world, &input, &config, now) == ControlSignal::Quit {
                    *control_flow = ControlFlow::Exit;
                    return;
                }

                let status = if world.is_running() { "running" } else { "paused" };
                window.set_title(&format!(
                    "Game of Life | {status} | gen {} | pop {}",
                    world.generation(),
                    world.population()
                ));

                graphics.render(&world, &config);
                if let Err(err) = graphics.present() {
                    log::error!("Render error: {err}");
                    *control_flow = ControlFlow::Exit;
                }
                input.end_frame();
            }
            _ => {}
        }
    });
}
