use anyhow::{Context, Result};

use mogi_engine::coords::{Circle, Line, Rect, Vec2};
use mogi_engine::input::MouseButton;
use mogi_engine::logging::{init_logging, LoggingConfig};
use mogi_engine::{App, AppControl, Color, FontAtlas, Hsla, RenderContext, RoundedRectSpec, WindowBackend};

const FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

struct Demo {
    font: Option<FontAtlas>,
    small: Option<FontAtlas>,
    card_color: Color,
    clicks: u32,
}

impl Demo {
    fn chessboard(ctx: &mut RenderContext<WindowBackend>, origin: Vec2, cell: f32) {
        for row in 0..8 {
            for col in 0..8 {
                let color = if (row + col) % 2 == 0 { Color::from_hex("#EEEED2").unwrap_or(Color::WHITE) } else { Color::from_hex("#769656").unwrap_or(Color::GREEN) };
                let rect = Rect::new(origin.x + col as f32 * cell, origin.y + row as f32 * cell, cell, cell);
                ctx.draw_rect(rect, color);
            }
        }
        ctx.draw_rect_outline(Rect::new(origin.x, origin.y, cell * 8.0, cell * 8.0), Color::BLACK);
    }

    fn card(&mut self, ctx: &mut RenderContext<WindowBackend>, rect: Rect) {
        if let Some(pos) = ctx.cursor_pos() {
            if rect.contains(pos) && ctx.is_mouse_pressed(MouseButton::Left) {
                self.clicks += 1;
                self.card_color = Hsla::new((self.clicks * 47 % 360) as f32, 0.6, 0.55, 1.0).into();
            }
        }

        let shadow = Rect::new(rect.origin.x + 6.0, rect.origin.y + 8.0, rect.size.x, rect.size.y);
        ctx.draw_rounded_rect(&RoundedRectSpec {
            rect: shadow,
            border: Vec2::zero(),
            radius: 16.0,
            fill: Color::BLACK.with_opacity(0.35),
            border_color: Color::TRANSPARENT,
        });
        ctx.draw_rounded_rect(&RoundedRectSpec {
            rect,
            border: Vec2::new(3.0, 3.0),
            radius: 16.0,
            fill: self.card_color,
            border_color: Color::from_hex("#1F2937").unwrap_or(Color::BLACK),
        });

        if let Some(font) = &self.font {
            let label = "Buy now";
            let w = ctx.measure_text(font, label);
            let x = rect.origin.x + (rect.size.x - w) * 0.5;
            let y = rect.origin.y + (rect.size.y - font.line_height()) * 0.5;
            ctx.draw_text(font, label, Vec2::new(x, y), Color::WHITE);
        }
    }
}

impl App<WindowBackend> for Demo {
    fn on_frame(&mut self, ctx: &mut RenderContext<WindowBackend>, _dt: f32) -> AppControl {
        ctx.clear(Color::from_hex("#202124").unwrap_or(Color::BLACK));

        Self::chessboard(ctx, Vec2::new(40.0, 40.0), 40.0);
        self.card(ctx, Rect::new(420.0, 60.0, 320.0, 120.0));

        ctx.draw_circle(Circle::new(Vec2::new(500.0, 300.0), 60.0), Color::ORANGE);
        ctx.draw_circle_outline(Circle::new(Vec2::new(660.0, 300.0), 60.0), Color::CYAN);
        ctx.draw_circle(Circle::new(Vec2::new(580.0, 300.0), 4.0), Color::WHITE);

        let y = 420.0;
        ctx.draw_line(Line::new(Vec2::new(40.0, y), Vec2::new(760.0, y)), Color::WHITE);
        ctx.draw_thick_line(Line::new(Vec2::new(40.0, y + 30.0), Vec2::new(760.0, y + 60.0)), 6.0, Color::RED);
        ctx.draw_dashed_line(Line::new(Vec2::new(40.0, y + 100.0), Vec2::new(760.0, y + 100.0)), 18.0, 8.0, Color::YELLOW);
        ctx.draw_dotted_line(Line::new(Vec2::new(40.0, y + 140.0), Vec2::new(760.0, y + 180.0)), 3.0, 2.0, Color::PINK);

        ctx.draw_rect_with_outline(Rect::new(40.0, 660.0, 200.0, 80.0), Color::PURPLE, Color::WHITE);

        if let Some(small) = &self.small {
            let stats = ctx.stats();
            let text = format!("FPS {:.0} (avg {:.0})  frames {}", stats.fps(), stats.average_fps(), stats.total_frames());
            let size = ctx.window_size();
            ctx.draw_text(small, &text, Vec2::new(10.0, size.height - small.line_height() - 6.0), Color::GRAY);
        }

        AppControl::Continue
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let backend = WindowBackend::create(800, 800, "Mogi").context("failed to open window")?;
    let mut ctx = RenderContext::new(backend);

    let font_path = std::env::args()
        .nth(1)
        .or_else(|| FONT_PATHS.iter().find(|p| std::path::Path::new(p).exists()).map(|p| p.to_string()));

    let (font, small) = match &font_path {
        Some(path) => (ctx.load_font(path, 32.0).ok(), ctx.load_font(path, 16.0).ok()),
        None => {
            log::warn!("no font found; pass a .ttf path to draw text");
            (None, None)
        }
    };

    let mut demo = Demo {
        font,
        small,
        card_color: Color::from_hex("#2563EB").unwrap_or(Color::BLUE),
        clicks: 0,
    };

    let result = ctx.run(&mut demo);

    if let Some(font) = demo.font.take() {
        ctx.destroy_font(font);
    }
    if let Some(small) = demo.small.take() {
        ctx.destroy_font(small);
    }
    ctx.destroy();

    result.context("render loop failed")
}
