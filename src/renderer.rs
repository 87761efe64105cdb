// src/renderer.rs
use eframe::egui::{self, Color32, Painter, Pos2, Rect, TextureId};
use image::{Pixel, Rgba, RgbaImage};

use crate::config::BoardConfig;
use crate::error::{BoardError, BoardResult};
use crate::point::Point;
use crate::texture_manager::BackgroundTextures;

/// Something points can be painted onto.
///
/// Positions passed to a surface are canvas-local.
pub trait Surface {
    /// Wipe everything painted so far
    fn clear(&mut self);

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);
}

/// Live canvas backed by an egui painter
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
    background: Option<TextureId>,
    fallback: Color32,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect, background: Option<TextureId>, fallback: Color32) -> Self {
        Self {
            painter,
            rect,
            background,
            fallback,
        }
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, self.fallback);
        if let Some(texture) = self.background {
            let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            self.painter.image(texture, self.rect, uv, Color32::WHITE);
        }
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter.circle_filled(self.rect.min + center.to_vec2(), radius, color);
    }
}

/// In-memory RGBA canvas. Covers every pixel whose center lies inside a
/// circle and blends source-over.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbaImage,
    clear_color: Rgba<u8>,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32, clear_color: Color32) -> Self {
        let clear_color = Rgba(clear_color.to_srgba_unmultiplied());
        Self {
            image: RgbaImage::from_pixel(width, height, clear_color),
            clear_color,
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Unmultiplied RGBA of one pixel
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = self.clear_color;
        }
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        if radius <= 0.0 {
            return;
        }
        let color = Rgba(color.to_srgba_unmultiplied());
        // float to int casts saturate, so off-canvas circles give empty ranges
        let min_x = (center.x - radius).floor().max(0.0) as u32;
        let min_y = (center.y - radius).floor().max(0.0) as u32;
        let max_x = ((center.x + radius).ceil() as u32).min(self.image.width());
        let max_y = ((center.y + radius).ceil() as u32).min(self.image.height());
        let radius_sq = radius * radius;
        let mut painted = false;

        for y in min_y..max_y {
            for x in min_x..max_x {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= radius_sq {
                    self.image.get_pixel_mut(x, y).blend(&color);
                    painted = true;
                }
            }
        }

        // A dot smaller than a pixel still marks the pixel under its center
        if !painted && center.x >= 0.0 && center.y >= 0.0 {
            let (x, y) = (center.x.floor() as u32, center.y.floor() as u32);
            if x < self.image.width() && y < self.image.height() {
                self.image.get_pixel_mut(x, y).blend(&color);
            }
        }
    }
}

fn ensure_render_context<T>(gl: Option<&T>) -> BoardResult<()> {
    if gl.is_none() {
        log::error!("Creation context carries no graphics context");
        return Err(BoardError::MissingRenderContext);
    }
    Ok(())
}

/// Draws the board: background first, then every point in order.
#[derive(Debug)]
pub struct Renderer {
    ctx: egui::Context,
    backgrounds: BackgroundTextures,
    fallback: Color32,
}

impl Renderer {
    /// Creates the renderer for a freshly started app.
    ///
    /// Fails with [`BoardError::MissingRenderContext`] if eframe did not
    /// provide a graphics context, since nothing could ever be drawn.
    pub fn new(cc: &eframe::CreationContext<'_>, config: &BoardConfig) -> BoardResult<Self> {
        ensure_render_context(cc.gl.as_ref())?;
        Self::with_context(cc.egui_ctx.clone(), config)
    }

    pub fn with_context(ctx: egui::Context, config: &BoardConfig) -> BoardResult<Self> {
        Ok(Self {
            ctx,
            backgrounds: BackgroundTextures::new(config.asset_dir.clone()),
            fallback: config.fallback_background()?,
        })
    }

    /// Clear `surface` and paint `points` onto it in order.
    ///
    /// Always starts from a full clear, so repeating it is harmless.
    pub fn draw_points<S: Surface + ?Sized>(surface: &mut S, points: &[Point]) {
        surface.clear();
        for point in points {
            surface.fill_circle(point.position(), point.radius(), point.color());
        }
    }

    /// Renders the canvas into `rect` with the named background behind it
    pub fn paint_canvas(&mut self, painter: &Painter, rect: Rect, background: &str, points: &[Point]) {
        let texture = self.backgrounds.texture_for(&self.ctx, background).map(|handle| handle.id());
        let painter = painter.with_clip_rect(rect);
        let mut surface = PainterSurface::new(&painter, rect, texture, self.fallback);
        Self::draw_points(&mut surface, points);
    }

    pub fn backgrounds(&self) -> &BackgroundTextures {
        &self.backgrounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(x: f32, y: f32, color: Color32, diameter: f32) -> Point {
        Point::new(Pos2::new(x, y), color, diameter)
    }

    #[test]
    fn test_raster_circle_covers_center_only() {
        let mut surface = RasterSurface::new(40, 40, Color32::WHITE);
        Renderer::draw_points(&mut surface, &[dot(10.0, 10.0, Color32::RED, 5.0)]);

        assert_eq!(surface.pixel(10, 10), [255, 0, 0, 255]);
        assert_eq!(surface.pixel(20, 20), [255, 255, 255, 255]);
        assert_eq!(surface.pixel(10, 14), [255, 255, 255, 255]);
    }

    #[test]
    fn test_later_points_paint_on_top() {
        let mut surface = RasterSurface::new(40, 40, Color32::WHITE);
        let points = [dot(10.0, 10.0, Color32::RED, 6.0), dot(10.0, 10.0, Color32::BLUE, 6.0)];
        Renderer::draw_points(&mut surface, &points);
        assert_eq!(surface.pixel(10, 10), [0, 0, 255, 255]);
    }

    #[test]
    fn test_off_canvas_circle_is_ignored() {
        let mut surface = RasterSurface::new(10, 10, Color32::WHITE);
        Renderer::draw_points(&mut surface, &[dot(-50.0, -50.0, Color32::RED, 20.0), dot(500.0, 5.0, Color32::RED, 20.0)]);
        assert!(surface.image().pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn test_smallest_dot_marks_its_pixel() {
        let mut surface = RasterSurface::new(20, 20, Color32::WHITE);
        Renderer::draw_points(&mut surface, &[dot(10.0, 10.0, Color32::RED, 1.0)]);

        let red: Vec<(u32, u32)> = surface
            .image()
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0 == [255, 0, 0, 255])
            .map(|(x, y, _)| (x, y))
            .collect();
        assert_eq!(red, [(10, 10)]);
    }

    #[test]
    fn test_missing_render_context_is_an_error() {
        assert!(matches!(
            ensure_render_context::<()>(None),
            Err(BoardError::MissingRenderContext)
        ));
        assert!(ensure_render_context(Some(&())).is_ok());
    }

    #[test]
    fn test_paint_canvas_without_background_file() {
        let config = BoardConfig {
            asset_dir: std::env::temp_dir().join("festive_board_no_assets"),
            ..BoardConfig::default()
        };
        let ctx = egui::Context::default();
        let mut renderer = Renderer::with_context(ctx.clone(), &config).unwrap();
        let rect = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let painter = Painter::new(ctx, egui::LayerId::background(), rect);

        renderer.paint_canvas(&painter, rect, "book", &[dot(5.0, 5.0, Color32::RED, 4.0)]);
        assert!(renderer.backgrounds().is_failed("book"));
    }
}
