pub mod canvas;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::app::state::{AppMode, AppState};
use canvas::SkyCanvas;

pub const MIN_WIDTH: u16 = 20;
pub const MIN_HEIGHT: u16 = 8;

const SKY_TOP: (u8, u8, u8) = (0xF5, 0xE1, 0xB8);
const SKY_BOTTOM: (u8, u8, u8) = (0xF8, 0xE8, 0xC4);
const CLOUD_COLOR: Color = Color::White;
const SPINNER_COLOR: Color = Color::Rgb(0x8B, 0x6F, 0x47);

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning = Paragraph::new("Terminal too small. Resize to at least 20x8.")
            .wrap(Wrap { trim: true });
        frame.render_widget(warning, area);
        return;
    }

    render_sky(frame, area, state);
    render_spinner(frame, area, state);
    render_hint(frame, area, state);
}

fn render_sky(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut canvas = SkyCanvas::new(usize::from(area.width), usize::from(area.height));
    canvas.paint_scene(&state.scene, state.elapsed_secs());

    let rows = area.height;
    let lines: Vec<Line> = canvas
        .lines()
        .enumerate()
        .map(|(row, text)| {
            Line::from(Span::styled(
                text,
                Style::default()
                    .fg(CLOUD_COLOR)
                    .bg(sky_color(row as u16, rows)),
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_spinner(frame: &mut Frame, area: Rect, state: &AppState) {
    let row = area.y + area.height / 2;
    let spinner_area = Rect {
        x: area.x,
        y: row,
        width: area.width,
        height: 1,
    };
    let text = format!("{} Loading", loading_spinner(state.frame_tick));
    let spinner = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default()
            .fg(SPINNER_COLOR)
            .bg(sky_color(row - area.y, area.height))
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(spinner, spinner_area);
}

fn render_hint(frame: &mut Frame, area: Rect, state: &AppState) {
    let status = if state.mode == AppMode::Paused {
        "paused"
    } else {
        "space pause"
    };
    let text = format!(
        "seed {} · {} clouds · r reseed · {status} · q quit",
        state.scene.seed,
        state.scene.clouds.len()
    );
    let hint_area = Rect {
        x: area.x,
        y: area.bottom().saturating_sub(1),
        width: area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default()
            .fg(SPINNER_COLOR)
            .bg(sky_color(area.height.saturating_sub(1), area.height)),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(hint, hint_area);
}

/// Vertical gradient matching the web background.
fn sky_color(row: u16, rows: u16) -> Color {
    let t = if rows > 1 {
        f32::from(row) / f32::from(rows - 1)
    } else {
        0.0
    };
    let lerp = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
    Color::Rgb(
        lerp(SKY_TOP.0, SKY_BOTTOM.0),
        lerp(SKY_TOP.1, SKY_BOTTOM.1),
        lerp(SKY_TOP.2, SKY_BOTTOM.2),
    )
}

fn loading_spinner(frame_tick: u64) -> &'static str {
    const FRAMES: [&str; 8] = ["-", "\\", "|", "/", "-", "\\", "|", "/"];
    FRAMES[(frame_tick as usize) % FRAMES.len()]
}
