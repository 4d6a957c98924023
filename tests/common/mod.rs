#![allow(dead_code)]

use cloud_loader::{
    app::state::AppState,
    cli::PreviewArgs,
    config::{CloudConfig, Range},
    domain::cloud::PositionSpec,
};
use ratatui::{Terminal, backend::TestBackend};

pub fn frozen_preview_args() -> PreviewArgs {
    PreviewArgs {
        fps: 30,
        no_animation: true,
    }
}

/// One opaque 400x200 cloud pinned at 40%/40% with no delay, so at t=0 it
/// sits 100px left of its anchor (start of the drift).
pub fn pinned_cloud_config() -> CloudConfig {
    CloudConfig {
        count: 1,
        randomize: false,
        positions: vec![PositionSpec {
            top: Some(40.0),
            left: Some(40.0),
            ..PositionSpec::default()
        }],
        size_range: Range::new(400.0, 400.0),
        opacity_range: Range::new(1.0, 1.0),
        delay_range: Range::new(0.0, 0.0),
        ..CloudConfig::default()
    }
}

pub fn render_state_to_string(width: u16, height: u16, state: &AppState) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| cloud_loader::ui::render(frame, state))
        .expect("draw");

    let buffer = terminal.backend().buffer().clone();
    let mut lines = Vec::new();
    for y in 0..height {
        let mut line = String::new();
        for x in 0..width {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}
