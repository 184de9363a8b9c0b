// File: crates/livechart-render-skia/src/lib.rs
// Summary: Skia CPU raster implementation of the core Surface contract, with PNG/RGBA snapshots.

use std::path::Path;

use anyhow::Result;
use skia_safe as skia;

use livechart_core::{Color, Surface, TextAlign};

fn to_skia(color: Color) -> skia::Color {
    skia::Color::from_argb(color.a, color.r, color.g, color.b)
}

fn stroke_paint(color: Color, stroke_width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(to_skia(color));
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke_width);
    paint
}

/// CPU raster surface backed by Skia. Satisfies the core drawing contract
/// and can snapshot itself to PNG bytes or a raw RGBA8 buffer.
pub struct RasterSurface {
    surface: skia::Surface,
    width: i32,
    height: i32,
}

impl RasterSurface {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        Ok(Self { surface, width, height })
    }

    /// Encode the current contents as PNG.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write the current contents as a PNG file, creating parent
    /// directories as needed.
    pub fn write_png(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Copy out the pixels as tightly packed RGBA8.
    /// Returns (pixels, width, height, row_bytes).
    pub fn rgba8(&mut self) -> Result<(Vec<u8>, i32, i32, usize)> {
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = self.width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, self.width, self.height, row_bytes))
    }
}

impl Surface for RasterSurface {
    fn width(&self) -> f32 {
        self.width as f32
    }

    fn height(&self) -> f32 {
        self.height as f32
    }

    fn clear(&mut self, color: Color) {
        self.surface.canvas().clear(to_skia(color));
    }

    fn line(&mut self, from: (f32, f32), to: (f32, f32), color: Color, stroke_width: f32) {
        let paint = stroke_paint(color, stroke_width);
        self.surface.canvas().draw_line(from, to, &paint);
    }

    fn polyline(&mut self, points: &[(f32, f32)], color: Color, stroke_width: f32) {
        if points.len() < 2 {
            return;
        }
        let mut path = skia::Path::new();
        path.move_to(points[0]);
        for &p in &points[1..] {
            path.line_to(p);
        }
        let paint = stroke_paint(color, stroke_width);
        self.surface.canvas().draw_path(&path, &paint);
    }

    fn fill_circle(&mut self, center: (f32, f32), radius: f32, color: Color) {
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia(color));
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        self.surface.canvas().draw_circle(center, radius, &paint);
    }

    fn text(&mut self, text: &str, pos: (f32, f32), size: f32, color: Color, align: TextAlign) {
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia(color));
        paint.set_anti_alias(true);
        let mut font = skia::Font::default();
        font.set_size(size.max(1.0));

        let (x, y) = pos;
        let x = match align {
            TextAlign::Left => x,
            TextAlign::Right => {
                let (advance, _) = font.measure_str(text, Some(&paint));
                x - advance
            }
        };
        self.surface.canvas().draw_str(text, (x, y), &font, &paint);
    }
}
