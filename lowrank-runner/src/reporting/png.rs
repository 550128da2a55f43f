//! PNG table image.
//!
//! Title, dated subtitle, then the table: dark header row with white bold
//! text, light-gray banding on even rows (the header is row 0), black grid.
//! Text uses the 8x8 bitmap font scaled 2x; bold is double-struck.

use super::table::report_filename;
use super::{RenderError, ReportTable};
use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{ImageFormat, Rgb, RgbImage};
use std::path::{Path, PathBuf};
use tracing::info;

pub const TITLE: &str = "Stocks ranked by their distance from the 52-week low";

const HEADER_BG: Rgb<u8> = Rgb([0x40, 0x46, 0x6e]);
const BAND_BG: Rgb<u8> = Rgb([0xf0, 0xf0, 0xf0]);
const WHITE: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);
const BLACK: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);

const GLYPH: u32 = 8;
const SCALE: u32 = 2;
const CHAR_W: u32 = GLYPH * SCALE;
const CHAR_H: u32 = GLYPH * SCALE;

const MARGIN: u32 = 24;
const CELL_PAD_X: u32 = 10;
const CELL_PAD_Y: u32 = 7;
const ROW_H: u32 = CHAR_H + 2 * CELL_PAD_Y;
const TITLE_GAP: u32 = 10;
const TABLE_GAP: u32 = 20;

/// Pixel geometry of one rendered table.
#[derive(Debug, Clone, PartialEq)]
struct Layout {
    width: u32,
    height: u32,
    title_top: u32,
    subtitle_top: u32,
    table_left: u32,
    header_top: u32,
    col_widths: Vec<u32>,
}

impl Layout {
    fn for_table(table: &ReportTable) -> Self {
        let col_widths: Vec<u32> = table
            .column_widths()
            .iter()
            .map(|&chars| chars as u32 * CHAR_W + 2 * CELL_PAD_X)
            .collect();
        let table_width: u32 = col_widths.iter().sum();
        let title_width = text_width(TITLE, true);
        let width = table_width.max(title_width) + 2 * MARGIN;

        let title_top = MARGIN;
        let subtitle_top = title_top + CHAR_H + TITLE_GAP;
        let header_top = subtitle_top + CHAR_H + TABLE_GAP;
        let rows = table.rows.len() as u32 + 1;
        let height = header_top + rows * ROW_H + MARGIN;

        Self {
            width,
            height,
            title_top,
            subtitle_top,
            table_left: (width - table_width) / 2,
            header_top,
            col_widths,
        }
    }
}

/// Render the table into an in-memory RGB image.
pub fn render_png(table: &ReportTable) -> RgbImage {
    let layout = Layout::for_table(table);
    let mut img = RgbImage::from_pixel(layout.width, layout.height, WHITE);

    let title_x = centered(layout.width, 0, text_width(TITLE, true));
    draw_text(&mut img, title_x, layout.title_top, TITLE, BLACK, true);

    let subtitle = format!("Date: {}", table.date.format("%Y-%m-%d"));
    let subtitle_x = centered(layout.width, 0, text_width(&subtitle, false));
    draw_text(&mut img, subtitle_x, layout.subtitle_top, &subtitle, BLACK, false);

    let all_rows = std::iter::once(&table.header).chain(table.rows.iter());
    for (i, row) in all_rows.enumerate() {
        let y = layout.header_top + i as u32 * ROW_H;
        let (bg, fg, bold) = match i {
            0 => (HEADER_BG, WHITE, true),
            i if i % 2 == 0 => (BAND_BG, BLACK, false),
            _ => (WHITE, BLACK, false),
        };

        let mut x = layout.table_left;
        for (cell, &w) in row.iter().zip(&layout.col_widths) {
            fill_rect(&mut img, x, y, w, ROW_H, bg);
            stroke_rect(&mut img, x, y, w, ROW_H, BLACK);
            let text_x = centered(w, x, text_width(cell, bold));
            draw_text(&mut img, text_x, y + CELL_PAD_Y, cell, fg, bold);
            x += w;
        }
    }

    img
}

/// Write `stocks_52w_low_<date>.png` into `dir`.
pub fn write_png(table: &ReportTable, dir: &Path) -> Result<PathBuf, RenderError> {
    info!("Creating image from the report table.");
    let path = dir.join(report_filename(table.date, "png"));
    render_png(table)
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| RenderError::Image {
            path: path.clone(),
            source,
        })?;
    info!("Image file saved as {}", path.display());
    Ok(path)
}

fn text_width(text: &str, bold: bool) -> u32 {
    text.chars().count() as u32 * CHAR_W + u32::from(bold)
}

/// Left edge that centers `inner` within `outer` pixels starting at `origin`.
fn centered(outer: u32, origin: u32, inner: u32) -> u32 {
    origin + outer.saturating_sub(inner) / 2
}

fn draw_text(img: &mut RgbImage, x: u32, y: u32, text: &str, color: Rgb<u8>, bold: bool) {
    for (i, c) in text.chars().enumerate() {
        let glyph = BASIC_FONTS
            .get(c)
            .or_else(|| BASIC_FONTS.get('?'))
            .unwrap_or([0; 8]);
        let gx = x + i as u32 * CHAR_W;
        draw_glyph(img, gx, y, &glyph, color);
        if bold {
            draw_glyph(img, gx + 1, y, &glyph, color);
        }
    }
}

/// Bit 0 of each glyph row is the leftmost pixel.
fn draw_glyph(img: &mut RgbImage, x: u32, y: u32, glyph: &[u8; 8], color: Rgb<u8>) {
    for (row, bits) in glyph.iter().enumerate() {
        for col in 0..GLYPH {
            if bits & (1 << col) != 0 {
                fill_rect(
                    img,
                    x + col * SCALE,
                    y + row as u32 * SCALE,
                    SCALE,
                    SCALE,
                    color,
                );
            }
        }
    }
}

fn fill_rect(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    let x_end = (x + w).min(img.width());
    let y_end = (y + h).min(img.height());
    for py in y..y_end {
        for px in x..x_end {
            img.put_pixel(px, py, color);
        }
    }
}

fn stroke_rect(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    if w == 0 || h == 0 {
        return;
    }
    fill_rect(img, x, y, w, 1, color);
    fill_rect(img, x, y + h - 1, w, 1, color);
    fill_rect(img, x, y, 1, h, color);
    fill_rect(img, x + w - 1, y, 1, h, color);
}
