use image::codecs::png::PngEncoder;
use image::{ImageEncoder, Rgba, RgbaImage};

use super::pattern::ModuleGrid;
use super::LabelError;

/// Edge length of one module in rendered pixels (25 modules → 200 px).
pub const MODULE_PX: u32 = 8;

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Rasterize the grid: white canvas, one filled square per "on" module,
/// then the three finder markers drawn over the corners. The markers always
/// overwrite whatever the fill produced there.
pub fn render_bitmap(grid: &ModuleGrid) -> RgbaImage {
    let size = grid.size() as u32;
    let mut img = RgbaImage::from_pixel(size * MODULE_PX, size * MODULE_PX, WHITE);

    for row in 0..grid.size() {
        for col in 0..grid.size() {
            if grid.get(row, col) {
                fill_modules(&mut img, col as u32, row as u32, 1, 1, BLACK);
            }
        }
    }

    let far = size.saturating_sub(7);
    draw_finder(&mut img, 0, 0);
    draw_finder(&mut img, far, 0);
    draw_finder(&mut img, 0, far);

    img
}

/// Encode the rendered bitmap as PNG bytes.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, LabelError> {
    let mut png_bytes = Vec::new();
    let encoder = PngEncoder::new(&mut png_bytes);
    encoder.write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(png_bytes)
}

/// Nested-square finder marker: 7×7 black, 5×5 white inset by one module,
/// 3×3 black inset by two.
fn draw_finder(img: &mut RgbaImage, col: u32, row: u32) {
    fill_modules(img, col, row, 7, 7, BLACK);
    fill_modules(img, col + 1, row + 1, 5, 5, WHITE);
    fill_modules(img, col + 2, row + 2, 3, 3, BLACK);
}

/// Fill a rectangle given in module coordinates, clipped to the bitmap.
fn fill_modules(img: &mut RgbaImage, col: u32, row: u32, w: u32, h: u32, color: Rgba<u8>) {
    let x0 = col * MODULE_PX;
    let y0 = row * MODULE_PX;
    let x1 = (x0 + w * MODULE_PX).min(img.width());
    let y1 = (y0 + h * MODULE_PX).min(img.height());
    for y in y0..y1 {
        for x in x0..x1 {
            img.put_pixel(x, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::qr_label::pattern::{generate_grid, GRID_SIZE};

    fn module_at(img: &RgbaImage, col: u32, row: u32) -> Rgba<u8> {
        // sample the module's top-left pixel
        *img.get_pixel(col * MODULE_PX, row * MODULE_PX)
    }

    #[test]
    fn test_bitmap_dimensions() {
        let grid = generate_grid(3, GRID_SIZE).unwrap();
        let img = render_bitmap(&grid);
        assert_eq!(img.width(), 25 * MODULE_PX);
        assert_eq!(img.height(), 25 * MODULE_PX);
    }

    #[test]
    fn test_finder_overlay_matches_nested_squares() {
        // Independent of seed: corner (0,0) sits on the outer black ring,
        // (1,1) on the white inset, (2,2) on the black centre.
        for seed in [0, 1, 1_872_933_528] {
            let img = render_bitmap(&generate_grid(seed, GRID_SIZE).unwrap());
            assert_eq!(module_at(&img, 0, 0), BLACK);
            assert_eq!(module_at(&img, 1, 1), WHITE);
            assert_eq!(module_at(&img, 2, 2), BLACK);
            assert_eq!(module_at(&img, 6, 6), BLACK);

            // top-right marker starts at column 18
            assert_eq!(module_at(&img, 18, 0), BLACK);
            assert_eq!(module_at(&img, 19, 1), WHITE);
            assert_eq!(module_at(&img, 20, 2), BLACK);

            // bottom-left marker starts at row 18
            assert_eq!(module_at(&img, 0, 18), BLACK);
            assert_eq!(module_at(&img, 1, 19), WHITE);
            assert_eq!(module_at(&img, 2, 20), BLACK);
        }
    }

    #[test]
    fn test_fill_follows_grid_outside_finders() {
        let grid = generate_grid(1, GRID_SIZE).unwrap();
        let img = render_bitmap(&grid);
        for (row, col) in [(8usize, 8usize), (12, 12), (17, 17), (24, 24)] {
            let expected = if grid.get(row, col) { BLACK } else { WHITE };
            assert_eq!(module_at(&img, col as u32, row as u32), expected);
        }
    }

    #[test]
    fn test_png_roundtrip_signature() {
        let grid = generate_grid(9, GRID_SIZE).unwrap();
        let png = encode_png(&render_bitmap(&grid)).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
