use psf_engine::{Glyph, PsfFont};

#[test]
fn set_then_get() {
    let mut glyph = Glyph::new(8, 8);
    for y in 0..8 {
        for x in 0..8 {
            glyph.set_pixel(8, x, y, true);
            assert!(glyph.get_pixel(8, x, y));
            glyph.set_pixel(8, x, y, false);
            assert!(!glyph.get_pixel(8, x, y));
        }
    }
}

#[test]
fn neighbours_unchanged() {
    let mut glyph = Glyph::from_data(vec![0b1010_1010]);
    glyph.set_pixel(8, 1, 0, true);
    assert_eq!(glyph.data[0], 0b1110_1010);
    glyph.set_pixel(8, 0, 0, false);
    assert_eq!(glyph.data[0], 0b0110_1010);
    // setting an already set bit changes nothing
    glyph.set_pixel(8, 2, 0, true);
    assert_eq!(glyph.data[0], 0b0110_1010);
}

#[test]
fn width_five_bit_offsets() {
    let mut font = PsfFont::create_blank(2, 5).unwrap();
    let glyph = &mut font.glyphs[0];
    assert_eq!(glyph.data.len(), 2);

    for (x, bit) in (0..5).zip([7, 6, 5, 4, 3]) {
        glyph.set_pixel(5, x, 1, true);
        assert_eq!(glyph.data[1], 1 << bit, "x = {x}");
        glyph.set_pixel(5, x, 1, false);
    }
    assert_eq!(glyph.data, vec![0, 0]);
}

#[test]
fn width_five_padding_kept() {
    let mut glyph = Glyph::from_data(vec![0b0000_0111, 0b0000_0101]);
    for x in 0..5 {
        glyph.set_pixel(5, x, 0, true);
        glyph.set_pixel(5, x, 1, true);
    }
    assert_eq!(glyph.data, vec![0xFF, 0b1111_1101]);
    for x in 0..5 {
        glyph.set_pixel(5, x, 0, false);
    }
    assert_eq!(glyph.data[0], 0b0000_0111);
}

#[test]
fn blank_font_is_clear() {
    let font = PsfFont::create_blank(8, 8).unwrap();
    assert_eq!(font.glyph_count(), 256);
    for glyph in &font.glyphs {
        assert_eq!(glyph.data, vec![0; 8]);
        for y in 0..8 {
            for x in 0..8 {
                assert!(!glyph.get_pixel(8, x, y));
            }
        }
    }
}

#[test]
fn raster_matches_pixels() {
    let mut font = PsfFont::create_blank(3, 5).unwrap();
    font.set_pixel(7, 0, 0, true);
    font.set_pixel(7, 4, 2, true);

    let raster = font.render_glyph(7, 3).unwrap();
    assert_eq!((raster.width(), raster.height()), (15, 9));
    for (y, row) in raster.rows().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            assert_eq!(*cell, font.get_pixel(7, x / 3, y / 3).unwrap(), "({x}, {y})");
        }
    }
}

#[test]
fn raster_does_not_touch_glyph() {
    let glyph = Glyph::from_data(vec![0x0F]);
    let before = glyph.clone();
    let _ = glyph.render_to_raster(4, 2);
    assert_eq!(glyph, before);
}
