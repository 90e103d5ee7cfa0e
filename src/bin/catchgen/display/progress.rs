use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

const TICK_CHARS: &str = "◐◓◑◒";

/// One spinner line per pipeline step on stderr, replaced by a check mark
/// and the step's timing once it completes.
pub struct StepSpinner {
    bar: Option<ProgressBar>,
    started: Instant,
    step_started: Instant,
    current: u8,
    total: u8,
}

impl StepSpinner {
    pub fn new(total: u8) -> Self {
        let now = Instant::now();
        Self {
            bar: None,
            started: now,
            step_started: now,
            current: 0,
            total,
        }
    }

    pub fn step(&mut self, description: &str) {
        self.clear();
        self.current += 1;
        self.step_started = Instant::now();

        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner:.blue} {prefix:.dim} {msg}") {
            bar.set_style(style.tick_chars(TICK_CHARS));
        }
        bar.set_prefix(format!("{}/{}", self.current, self.total));
        bar.set_message(description.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));

        self.bar = Some(bar);
    }

    pub fn complete_step(&mut self, description: &str, details: &[&str]) {
        self.clear();

        let mut stderr = io::stderr().lock();
        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m \x1b[2m{}/{}\x1b[0m {:<40} {:>6}",
            self.current,
            self.total,
            description,
            format_elapsed(self.step_started.elapsed())
        );
        for detail in details {
            let _ = writeln!(stderr, "        \x1b[2m↳\x1b[0m {}", detail);
        }
    }

    /// Prints `outcome` with the total run time.
    pub fn finish(mut self, outcome: &str) {
        self.clear();

        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr);
        let _ = writeln!(
            stderr,
            "  \x1b[1;32m■\x1b[0m {:<44} {:>8}",
            outcome,
            format_elapsed(self.started.elapsed())
        );
        let _ = writeln!(stderr);
    }

    fn clear(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

// A failing step returns early; the spinner must not outlive it on screen.
impl Drop for StepSpinner {
    fn drop(&mut self) {
        self.clear();
    }
}

fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs < 1.0 {
        format!("{}ms", elapsed.as_millis())
    } else {
        format!("{:.2}s", secs)
    }
}

pub enum Progress {
    Interactive(StepSpinner),
    Silent,
}

impl Progress {
    pub fn new(interactive: bool, total: u8) -> Self {
        if interactive {
            Self::Interactive(StepSpinner::new(total))
        } else {
            Self::Silent
        }
    }

    pub fn step(&mut self, description: &str) {
        if let Self::Interactive(s) = self {
            s.step(description);
        }
    }

    pub fn complete_step(&mut self, description: &str, details: &[&str]) {
        if let Self::Interactive(s) = self {
            s.complete_step(description, details);
        }
    }

    pub fn finish(self, outcome: &str) {
        if let Self::Interactive(s) = self {
            s.finish(outcome);
        }
    }
}
