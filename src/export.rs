//! Off-screen rendering of the committed drawing to a PNG.

use std::io::Cursor;

use egui::epaint::text::Fonts;
use egui::{Color32, FontDefinitions, FontId, Pos2, Vec2};
use image::{ImageFormat, Rgba, RgbaImage};

use crate::command::CommandHistory;
use crate::config::SketchConfig;
use crate::error::{SketchError, SketchResult};
use crate::renderer::{Surface, circle_outline};

/// Largest font atlas we ask epaint for when rasterising stickers
const MAX_FONT_TEXTURE_SIDE: usize = 8 * 1024;

/// A `Surface` backed by an RGBA buffer, `scale` pixels per canvas pixel
pub struct RasterSurface {
    image: RgbaImage,
    scale: f32,
    // Created on the first sticker; strokes never need it
    fonts: Option<Fonts>,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32, scale: f32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            scale,
            fonts: None,
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn blend(image: &mut RgbaImage, x: u32, y: u32, color: Color32, coverage: f32) {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        let alpha = coverage * a as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        let dst = image.get_pixel_mut(x, y);
        let mix = |src: u8, dst: u8| -> u8 {
            (src as f32 * alpha + dst as f32 * (1.0 - alpha)).round() as u8
        };
        let out_alpha = (alpha * 255.0 + dst[3] as f32 * (1.0 - alpha)).round() as u8;
        *dst = Rgba([mix(r, dst[0]), mix(g, dst[1]), mix(b, dst[2]), out_alpha]);
    }
}

/// Distance from `point` to the segment `start..end`
pub(crate) fn distance_to_segment(point: Pos2, start: Pos2, end: Pos2) -> f32 {
    let line = end - start;
    let to_point = point - start;

    let len_sq = line.length_sq();
    if len_sq == 0.0 {
        return to_point.length();
    }

    let t = (to_point.dot(line) / len_sq).clamp(0.0, 1.0);
    (point - (start + line * t)).length()
}

impl Surface for RasterSurface {
    fn fill(&mut self, color: Color32) {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba([r, g, b, a]);
        }
    }

    fn polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32) {
        let (width, height) = self.image.dimensions();
        if points.is_empty() || width == 0 || height == 0 {
            return;
        }

        let scale = self.scale;
        let scaled: Vec<Pos2> = points
            .iter()
            .map(|p| Pos2::new(p.x * scale, p.y * scale))
            .collect();
        let radius = thickness * scale / 2.0;
        let pad = radius + 1.0;

        let clamp_x = |v: f32| (v.max(0.0) as u32).min(width - 1);
        let clamp_y = |v: f32| (v.max(0.0) as u32).min(height - 1);

        let (mut min, mut max) = (scaled[0], scaled[0]);
        for p in &scaled {
            min = min.min(*p);
            max = max.max(*p);
        }
        let (x0, y0) = (clamp_x(min.x - pad), clamp_y(min.y - pad));
        let (x1, y1) = (clamp_x(max.x + pad), clamp_y(max.y + pad));
        if max.x + pad < 0.0 || max.y + pad < 0.0 {
            return;
        }

        // Coverage is accumulated with max() so overlapping segments of one
        // stroke don't darken the joins.
        let box_w = (x1 - x0 + 1) as usize;
        let box_h = (y1 - y0 + 1) as usize;
        let mut coverage = vec![0.0f32; box_w * box_h];

        let segments: Vec<(Pos2, Pos2)> = if scaled.len() == 1 {
            vec![(scaled[0], scaled[0])]
        } else {
            scaled.windows(2).map(|w| (w[0], w[1])).collect()
        };

        for (a, b) in segments {
            let sx0 = clamp_x(a.x.min(b.x) - pad);
            let sx1 = clamp_x(a.x.max(b.x) + pad);
            let sy0 = clamp_y(a.y.min(b.y) - pad);
            let sy1 = clamp_y(a.y.max(b.y) + pad);
            for y in sy0..=sy1 {
                for x in sx0..=sx1 {
                    let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                    let d = distance_to_segment(center, a, b);
                    let c = (radius - d + 0.5).clamp(0.0, 1.0);
                    let cell = &mut coverage[(y - y0) as usize * box_w + (x - x0) as usize];
                    *cell = cell.max(c);
                }
            }
        }

        for (i, c) in coverage.into_iter().enumerate() {
            if c > 0.0 {
                let x = x0 + (i % box_w) as u32;
                let y = y0 + (i / box_w) as u32;
                Self::blend(&mut self.image, x, y, color, c);
            }
        }
    }

    fn dashed_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        let outline = circle_outline(center, radius, 32);
        for dash in outline.windows(2).step_by(2) {
            self.polyline(dash, 1.0, color);
        }
    }

    fn glyph(&mut self, text: &str, center: Pos2, size: f32, color: Color32) {
        let scale = self.scale;
        let fonts = self.fonts.get_or_insert_with(|| {
            Fonts::new(scale, MAX_FONT_TEXTURE_SIDE, FontDefinitions::default())
        });

        // Layout is in points; with pixels_per_point == scale the atlas holds
        // glyphs already rasterised at export resolution.
        let galley = fonts.layout_no_wrap(text.to_owned(), FontId::proportional(size), color);
        let atlas = fonts.image();
        let origin = center.to_vec2() - galley.size() / 2.0;
        let (width, height) = self.image.dimensions();

        for row in &galley.rows {
            for glyph in &row.glyphs {
                let uv = glyph.uv_rect;
                if uv.is_nothing() {
                    continue;
                }
                let left_top: Vec2 = (origin + glyph.pos.to_vec2() + uv.offset) * scale;
                let (left, top) = (left_top.x.round() as i64, left_top.y.round() as i64);

                for ty in uv.min[1]..uv.max[1] {
                    for tx in uv.min[0]..uv.max[0] {
                        let texel = ty as usize * atlas.size[0] + tx as usize;
                        let Some(&c) = atlas.pixels.get(texel) else {
                            continue;
                        };
                        let x = left + (tx - uv.min[0]) as i64;
                        let y = top + (ty - uv.min[1]) as i64;
                        if c > 0.0 && x >= 0 && y >= 0 && x < width as i64 && y < height as i64 {
                            Self::blend(&mut self.image, x as u32, y as u32, color, c);
                        }
                    }
                }
            }
        }
    }
}

/// Render the committed history at the configured upscale factor.
///
/// Takes only the history, so an in-progress command can never leak in.
pub fn render_history(history: &CommandHistory, config: &SketchConfig) -> SketchResult<RgbaImage> {
    let (width, height) = config.export_size();
    if width == 0 || height == 0 {
        return Err(SketchError::EmptySurface { width, height });
    }

    let mut surface = RasterSurface::new(width, height, config.export_scale.max(1) as f32);
    surface.fill(config.background);
    for command in history.commands() {
        command.display(&mut surface);
    }
    Ok(surface.into_image())
}

/// Encode the committed drawing as PNG bytes
pub fn export_png(history: &CommandHistory, config: &SketchConfig) -> SketchResult<Vec<u8>> {
    let image = render_history(history, config)?;
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    log::info!(
        "Exported {} commands as {}x{} PNG ({} bytes)",
        history.len(),
        image.width(),
        image.height(),
        bytes.len()
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::stroke::Stroke;

    #[test]
    fn test_distance_to_segment() {
        let a = Pos2::new(0.0, 0.0);
        let b = Pos2::new(10.0, 0.0);
        assert!((distance_to_segment(Pos2::new(5.0, 3.0), a, b) - 3.0).abs() < 0.001);
        assert!((distance_to_segment(Pos2::new(-4.0, 3.0), a, b) - 5.0).abs() < 0.001);
        assert!((distance_to_segment(Pos2::new(1.0, 1.0), a, a) - 2f32.sqrt()).abs() < 0.001);
    }

    #[test]
    fn test_polyline_is_scaled() {
        let mut surface = RasterSurface::new(40, 40, 4.0);
        surface.fill(Color32::WHITE);
        surface.polyline(&[Pos2::new(1.0, 5.0), Pos2::new(9.0, 5.0)], 2.0, Color32::BLACK);

        let image = surface.image();
        // Middle of the stroke at 4x
        assert_eq!(image.get_pixel(20, 20)[0], 0);
        // Well outside the stroke's 4px half-width
        assert_eq!(image.get_pixel(20, 30)[0], 255);
    }

    #[test]
    fn test_round_caps_extend_past_endpoints() {
        let mut surface = RasterSurface::new(40, 40, 1.0);
        surface.fill(Color32::WHITE);
        surface.polyline(&[Pos2::new(10.0, 20.0), Pos2::new(30.0, 20.0)], 8.0, Color32::BLACK);

        let image = surface.image();
        assert!(image.get_pixel(7, 20)[0] < 128);
        assert_eq!(image.get_pixel(7, 25)[0], 255);
    }

    #[test]
    fn test_zero_sized_export_is_an_error() {
        let config = SketchConfig {
            canvas_size: [0, 256],
            ..Default::default()
        };
        let result = render_history(&CommandHistory::new(), &config);
        assert!(matches!(result, Err(SketchError::EmptySurface { .. })));
    }

    #[test]
    fn test_export_png_is_decodable_at_scale() {
        let mut history = CommandHistory::new();
        history.commit(Command::stroke(Stroke::new(
            Color32::BLACK,
            2.0,
            vec![Pos2::new(10.0, 10.0), Pos2::new(100.0, 100.0)],
        )));

        let config = SketchConfig::default();
        let bytes = export_png(&history, &config).unwrap();
        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png).unwrap();
        assert_eq!(decoded.width(), 1024);
        assert_eq!(decoded.height(), 1024);
    }
}
