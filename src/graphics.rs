use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::config::Config;
use crate::world::World;

const BACKGROUND_COLOR: [u8; 4] = [128, 128, 128, 255];
const LINE_COLOR: [u8; 4] = [0, 0, 0, 255];
const CELL_COLOR: [u8; 4] = [255, 255, 0, 255];

/// Software rasterizer over the pixels framebuffer. The buffer keeps
/// the configured logical size; window resizes only rescale the
/// surface it is blitted to.
pub struct GraphicsRenderer {
    pixels: Pixels,
    width: u32,
    height: u32,
}

impl GraphicsRenderer {
    pub fn new(window: &Window, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::error!("Failed to resize surface: {err}");
        }
    }

    /// Map a window physical position to buffer pixels. `None` when
    /// the position falls outside the scaled buffer area.
    pub fn window_pos_to_pixel(&self, position: (f32, f32)) -> Option<(u32, u32)> {
        self.pixels
            .window_pos_to_pixel(position)
            .ok()
            .map(|(x, y)| (x as u32, y as u32))
    }

    /// Paint one frame: background, grid lines, then a filled square
    /// per live cell inside the declared grid. Live cells outside it
    /// are skipped.
    pub fn render(&mut self, world: &World, config: &Config) {
        let width = self.width;
        let height = self.height;
        let frame = self.pixels.frame_mut();

        for pixel in frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&BACKGROUND_COLOR);
        }

        Self::draw_grid_lines(frame, config, width, height);

        for cell in world.live_cells() {
            if cell.x < 0 || cell.y < 0 || cell.x >= world.width() || cell.y >= world.height() {
                continue;
            }
            let px = cell.x as u32 * config.tile_size;
            let py = config.grid_top + cell.y as u32 * config.tile_size;
            Self::fill_rect(frame, px, py, config.tile_size, CELL_COLOR, width, height);
        }
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }

    fn draw_grid_lines(frame: &mut [u8], config: &Config, width: u32, height: u32) {
        let tile = config.tile_size;
        let grid_bottom = config.grid_top + config.grid_height() * tile;
        let grid_right = config.grid_width() * tile;

        for i in 0..=config.grid_width() {
            Self::draw_vline(frame, i * tile, 0, grid_bottom, LINE_COLOR, width, height);
        }
        for i in 0..=config.grid_height() {
            let y = config.grid_top + i * tile;
            Self::draw_hline(frame, 0, grid_right, y, LINE_COLOR, width, height);
        }
    }

    fn draw_vline(
        frame: &mut [u8],
        x: u32,
        y0: u32,
        y1: u32,
        color: [u8; 4],
        width: u32,
        height: u32,
    ) {
        if x >= width {
            return;
        }
        for y in y0..y1.min(height) {
            let index = ((y * width + x) * 4) as usize;
            if index + 3 < frame.len() {
                frame[index..index + 4].copy_from_slice(&color);
            }
        }
    }

    fn draw_hline(
        frame: &mut [u8],
        x0: u32,
        x1: u32,
        y: u32,
        color: [u8; 4],
        width: u32,
        height: u32,
    ) {
        if y >= height {
            return;
        }
        for x in x0..x1.min(width) {
            let index = ((y * width + x) * 4) as usize;
            if index + 3 < frame.len() {
                frame[index..index + 4].copy_from_slice(&color);
            }
        }
    }

    fn fill_rect(
        frame: &mut [u8],
        x: u32,
        y: u32,
        size: u32,
        color: [u8; 4],
        width: u32,
        height: u32,
    ) {
        for dy in 0..size {
            let py = y + dy;
            if py >= height {
                break;
            }
            for dx in 0..size {
                let px = x + dx;
                if px >= width {
                    break;
                }
                let index = ((py * width + px) * 4) as usize;
                if index + 3 < frame.len() {
                    frame[index..index + 4].copy_from_slice(&color);
                }
            }
        }
    }
}
