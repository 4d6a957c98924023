use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use log::info;
use rand::Rng;
use tokio::sync::mpsc;

use crate::{
    app::events::{AppEvent, start_frame_task, start_signal_task},
    cli::PreviewArgs,
    config::CloudConfig,
    scene::{Scene, SceneCache},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Animating,
    Paused,
    Quit,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub config: CloudConfig,
    pub scene: Arc<Scene>,
    pub cache: SceneCache,
    pub elapsed: Duration,
    pub last_frame_at: Instant,
    pub frame_tick: u64,
    pub animate: bool,
    pub fps: u8,
}

impl AppState {
    pub fn new(config: CloudConfig, seed: u64, args: &PreviewArgs) -> Self {
        let mut cache = SceneCache::default();
        let scene = cache.get_or_generate(&config, seed);
        Self {
            mode: AppMode::Animating,
            running: true,
            config,
            scene,
            cache,
            elapsed: Duration::ZERO,
            last_frame_at: Instant::now(),
            frame_tick: 0,
            animate: !args.no_animation,
            fps: args.fps,
        }
    }

    pub fn handle_event(&mut self, event: AppEvent, tx: &mpsc::Sender<AppEvent>) {
        match event {
            AppEvent::Bootstrap => {
                start_frame_task(tx.clone(), self.fps);
                start_signal_task(tx.clone());
            }
            AppEvent::TickFrame => {
                let now = Instant::now();
                let delta = now.duration_since(self.last_frame_at);
                self.last_frame_at = now;
                self.advance(delta);
            }
            AppEvent::Input(input) => self.handle_input(&input),
            AppEvent::Quit => self.mode = AppMode::Quit,
        }
    }

    /// Moves the spinner every frame; cloud time only runs while animating.
    pub fn advance(&mut self, delta: Duration) {
        self.frame_tick = self.frame_tick.saturating_add(1);
        if self.animate && self.mode == AppMode::Animating {
            self.elapsed += delta;
        }
    }

    pub fn handle_input(&mut self, input: &Event) {
        let Event::Key(key) = input else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.mode = AppMode::Quit;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.mode = AppMode::Quit,
            KeyCode::Char('r') => {
                let seed = rand::rng().random();
                self.regenerate(seed);
            }
            KeyCode::Char(' ') => self.toggle_pause(),
            _ => {}
        }
    }

    pub fn regenerate(&mut self, seed: u64) {
        info!("regenerating scene with seed {seed}");
        self.scene = self.cache.get_or_generate(&self.config, seed);
        self.elapsed = Duration::ZERO;
    }

    pub fn toggle_pause(&mut self) {
        self.mode = match self.mode {
            AppMode::Animating => AppMode::Paused,
            AppMode::Paused => AppMode::Animating,
            AppMode::Quit => AppMode::Quit,
        };
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}
