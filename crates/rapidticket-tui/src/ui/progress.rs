//! Submit progress bar
//!
//! Purely cosmetic: the bar creeps toward 90% while the request is out and
//! only reaches 100% once the backend has answered.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Gauge},
};

const CREEP_LIMIT: f64 = 90.0;
const CREEP_RATE: f64 = 0.06;
const LINGER_TICKS: u16 = 25;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Running,
    Finished { linger: u16 },
}

#[derive(Debug, Clone)]
pub struct SubmitProgress {
    percent: f64,
    phase: Phase,
}

impl Default for SubmitProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmitProgress {
    pub fn new() -> Self {
        Self {
            percent: 0.0,
            phase: Phase::Idle,
        }
    }

    pub fn start(&mut self) {
        self.percent = 0.0;
        self.phase = Phase::Running;
    }

    pub fn finish(&mut self) {
        self.percent = 100.0;
        self.phase = Phase::Finished {
            linger: LINGER_TICKS,
        };
    }

    pub fn tick(&mut self) {
        match self.phase {
            Phase::Idle => {}
            Phase::Running => {
                self.percent += (CREEP_LIMIT - self.percent) * CREEP_RATE;
            }
            Phase::Finished { linger: 0 } => {
                self.phase = Phase::Idle;
                self.percent = 0.0;
            }
            Phase::Finished { linger } => {
                self.phase = Phase::Finished { linger: linger - 1 };
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn percent(&self) -> u16 {
        self.percent.round().clamp(0.0, 100.0) as u16
    }
}

pub fn draw_progress(f: &mut Frame, progress: &SubmitProgress, area: Rect) {
    if !progress.is_visible() {
        return;
    }

    let color = if progress.percent() >= 100 {
        Color::Green
    } else {
        Color::Cyan
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Sending"))
        .gauge_style(Style::default().fg(color))
        .percent(progress.percent());

    f.render_widget(gauge, area);
}
