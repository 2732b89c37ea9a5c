use std::path::{Path, PathBuf};

use mogi_engine::coords::Vec2;
use mogi_engine::text::GLYPH_COUNT;
use mogi_engine::{Color, FontCache, HeadlessBackend, RenderContext, TextureCache};

const FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

fn system_font() -> Option<&'static Path> {
    FONT_PATHS.iter().map(Path::new).find(|p| p.exists())
}

fn context() -> RenderContext<HeadlessBackend> {
    RenderContext::new(HeadlessBackend::new(640.0, 480.0))
}

fn write_png(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("mogi-{}-{name}.png", std::process::id()));
    let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]));
    img.save(&path).unwrap();
    path
}

// ── system font ───────────────────────────────────────────────────────────

#[test]
fn system_font_packs_printable_ascii() {
    let Some(path) = system_font() else { return };
    let mut ctx = context();

    let atlas = ctx.load_font(path, 32.0).unwrap();
    assert_eq!(atlas.metrics().len(), GLYPH_COUNT);
    assert!(atlas.ascent() > 0.0);
    assert!(atlas.descent() <= 0.0);
    assert_eq!(atlas.font_bytes().len() as u64, std::fs::metadata(path).unwrap().len());

    let text = "The quick brown fox, 42!";
    let drawn = ctx.draw_text(&atlas, text, Vec2::zero(), Color::WHITE);
    assert!((ctx.measure_text(&atlas, text) - drawn).abs() < 1e-3);
    assert_eq!(ctx.measure_text(&atlas, ""), 0.0);

    ctx.destroy_font(atlas);
    assert_eq!(ctx.backend().texture_count(), 0);
}

#[test]
fn invalid_pixel_height_is_rejected() {
    let Some(path) = system_font() else { return };
    let mut ctx = context();
    assert!(ctx.load_font(path, 0.0).is_err());
    assert!(ctx.load_font(path, f32::NAN).is_err());
    assert_eq!(ctx.backend().texture_count(), 0);
}

// ── font cache ────────────────────────────────────────────────────────────

#[test]
fn font_cache_keys_on_path_and_size() {
    let Some(path) = system_font() else { return };
    let mut ctx = context();
    let mut cache = FontCache::new();

    let first = cache.get_or_load(&mut ctx, path, 24.0).unwrap().texture();
    let again = cache.get_or_load(&mut ctx, path, 24.0).unwrap().texture();
    assert_eq!(first, again);

    cache.get_or_load(&mut ctx, path, 12.0).unwrap();
    assert_eq!(cache.len(), 2);
    assert_eq!(ctx.backend().texture_count(), 2);

    assert!(cache.unload(&mut ctx, path, 24.0));
    assert!(!cache.unload(&mut ctx, path, 24.0));
    assert_eq!(ctx.backend().texture_count(), 1);

    cache.destroy(&mut ctx);
    assert_eq!(ctx.backend().texture_count(), 0);
}

#[test]
fn font_cache_does_not_keep_failures() {
    let mut ctx = context();
    let mut cache = FontCache::new();
    assert!(cache.get_or_load(&mut ctx, "/nonexistent/mogi.ttf", 16.0).is_err());
    assert!(cache.is_empty());
}

// ── texture cache ─────────────────────────────────────────────────────────

#[test]
fn texture_cache_loads_each_path_once() {
    let path = write_png("cache");
    let mut ctx = context();
    let mut cache = TextureCache::new();

    let tex = cache.get_or_load(&mut ctx, &path).unwrap();
    assert_eq!((tex.width, tex.height), (3, 2));
    let id = tex.id;
    assert_eq!(cache.get_or_load(&mut ctx, &path).unwrap().id, id);
    assert_eq!(ctx.backend().texture_count(), 1);

    let pixels = &ctx.backend().texture(id).unwrap().pixels;
    assert_eq!(&pixels[..4], &[10, 20, 30, 255]);

    cache.destroy(&mut ctx);
    assert_eq!(ctx.backend().texture_count(), 0);
    let _ = std::fs::remove_file(path);
}

#[test]
fn unreadable_image_is_an_error() {
    let path = std::env::temp_dir().join(format!("mogi-{}-garbage.png", std::process::id()));
    std::fs::write(&path, b"not an image").unwrap();

    let mut ctx = context();
    assert!(ctx.load_texture(&path).is_err());
    assert!(ctx.load_texture("/nonexistent/mogi.png").is_err());
    assert_eq!(ctx.backend().texture_count(), 0);
    let _ = std::fs::remove_file(path);
}
