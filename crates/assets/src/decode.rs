//! PNG sprite sheet loading.
//!
//! Sheets are decoded with palettes and low bit depths expanded and 16-bit
//! channels stripped, so every accepted image arrives as 8-bit gray, gray +
//! alpha, RGB or RGBA before being widened to [`Rgba`].

use std::fs;
use std::path::Path;

use log::{error, info};
use money_run_core::{PixelBuffer, Rgba, SpriteSheets};
use png::{BitDepth, ColorType, Transformations};

use crate::error::AssetError;

/// File name of the tile atlas inside an asset directory.
pub const TILES_FILE: &str = "tiles.png";

/// File name of the screen atlas inside an asset directory.
pub const SCREENS_FILE: &str = "screens.png";

/// Decode PNG file bytes into an RGBA buffer.
pub fn decode_png(bytes: &[u8]) -> Result<PixelBuffer, AssetError> {
    let mut decoder = png::Decoder::new(bytes);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf)?;
    let buf = &buf[..frame.buffer_size()];

    if frame.bit_depth != BitDepth::Eight {
        return Err(AssetError::Unsupported(format!(
            "bit depth {:?} after expansion",
            frame.bit_depth
        )));
    }

    let channels = frame.color_type.samples();
    let to_rgba: fn(&[u8]) -> Rgba = match frame.color_type {
        ColorType::Grayscale => |p| Rgba::new(p[0], p[0], p[0], 255),
        ColorType::GrayscaleAlpha => |p| Rgba::new(p[0], p[0], p[0], p[1]),
        ColorType::Rgb => |p| Rgba::new(p[0], p[1], p[2], 255),
        ColorType::Rgba => |p| Rgba::new(p[0], p[1], p[2], p[3]),
        other => {
            return Err(AssetError::Unsupported(format!(
                "color type {other:?} after expansion"
            )))
        }
    };

    let (width, height) = (frame.width, frame.height);
    let row_bytes = frame.line_size;
    let mut px = Vec::with_capacity(width as usize * height as usize);
    for row in buf.chunks_exact(row_bytes) {
        px.extend(
            row[..width as usize * channels]
                .chunks_exact(channels)
                .map(to_rgba),
        );
    }

    PixelBuffer::from_pixels(width, height, px).ok_or_else(|| {
        AssetError::Unsupported(format!("pixel data does not fill {width}x{height}"))
    })
}

/// Read and decode one PNG file.
pub fn load_png(path: &Path) -> Result<PixelBuffer, AssetError> {
    let bytes = fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_png(&bytes)
}

/// Load `tiles.png` and `screens.png` from `dir` and validate their layout.
pub fn load_sprite_sheets(dir: &Path) -> Result<SpriteSheets, AssetError> {
    let load = |name: &str| {
        let path = dir.join(name);
        load_png(&path).inspect_err(|err| {
            error!("failed to load {} [{}]: {err}", path.display(), err.code())
        })
    };

    let tiles = load(TILES_FILE)?;
    let screens = load(SCREENS_FILE)?;
    info!(
        "loaded sprite sheets from {} (tiles {}x{}, screens {}x{})",
        dir.display(),
        tiles.width(),
        tiles.height(),
        screens.width(),
        screens.height()
    );
    SpriteSheets::new(tiles, screens).map_err(|err| {
        error!("sprite sheets in {} rejected [{}]: {err}", dir.display(), err.code());
        AssetError::Sheet(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use money_run_core::types::{SCREEN_HEIGHT, SCREEN_WIDTH, TILE_ATLAS_HEIGHT, TILE_SIZE};

    fn encode(width: u32, height: u32, color: ColorType, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, width, height);
            encoder.set_color(color);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
            writer.finish().unwrap();
        }
        out
    }

    #[test]
    fn decodes_rgba_pixels_in_row_major_order() {
        let data = [
            255, 0, 0, 255, /* */ 0, 255, 0, 0, //
            0, 0, 255, 128, /* */ 10, 20, 30, 255,
        ];
        let img = decode_png(&encode(2, 2, ColorType::Rgba, &data)).unwrap();
        assert_eq!((img.width(), img.height()), (2, 2));
        assert_eq!(img.get(0, 0), Rgba::new(255, 0, 0, 255));
        assert!(img.get(1, 0).is_transparent());
        assert_eq!(img.get(0, 1), Rgba::new(0, 0, 255, 128));
        assert_eq!(img.get(1, 1), Rgba::opaque(10, 20, 30));
    }

    #[test]
    fn widens_rgb_and_gray_to_opaque() {
        let rgb = decode_png(&encode(1, 1, ColorType::Rgb, &[1, 2, 3])).unwrap();
        assert_eq!(rgb.get(0, 0), Rgba::opaque(1, 2, 3));

        let gray = decode_png(&encode(2, 1, ColorType::Grayscale, &[7, 200])).unwrap();
        assert_eq!(gray.get(1, 0), Rgba::opaque(200, 200, 200));

        let ga = decode_png(&encode(1, 1, ColorType::GrayscaleAlpha, &[9, 0])).unwrap();
        assert!(ga.get(0, 0).is_transparent());
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = decode_png(b"definitely not a png").unwrap_err();
        assert_eq!(err.code(), "decode");
    }

    #[test]
    fn loads_sheets_from_directory() {
        let dir = std::env::temp_dir().join(format!("money-run-assets-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let tiles = vec![200u8; (TILE_SIZE * TILE_ATLAS_HEIGHT * 4) as usize];
        let screens = vec![50u8; (SCREEN_WIDTH * SCREEN_HEIGHT * 2 * 3) as usize];
        let tiles_png = encode(TILE_SIZE, TILE_ATLAS_HEIGHT, ColorType::Rgba, &tiles);
        let screens_png = encode(SCREEN_WIDTH, SCREEN_HEIGHT * 2, ColorType::Rgb, &screens);
        fs::write(dir.join(TILES_FILE), tiles_png).unwrap();
        fs::write(dir.join(SCREENS_FILE), screens_png).unwrap();

        let sheets = load_sprite_sheets(&dir).unwrap();
        assert_eq!(sheets.tiles().get(0, 0), Rgba::new(200, 200, 200, 200));
        assert_eq!(sheets.screens().get(319, 479), Rgba::opaque(50, 50, 50));

        // Undersized tile atlas.
        let short = &tiles[..(TILE_SIZE * 40 * 4) as usize];
        fs::write(dir.join(TILES_FILE), encode(TILE_SIZE, 40, ColorType::Rgba, short)).unwrap();
        let err = load_sprite_sheets(&dir).unwrap_err();
        assert_eq!(err.code(), "sheet_too_small");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = std::env::temp_dir().join("money-run-assets-missing-dir");
        let err = load_sprite_sheets(&dir).unwrap_err();
        assert_eq!(err.code(), "io");
        assert!(err.to_string().contains(TILES_FILE));
    }
}
