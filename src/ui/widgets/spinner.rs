use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::ui::context::UiContext;

const SPINNER_FRAMES_BRAILLE: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const SPINNER_FRAMES_ASCII: &[char] = &['-', '\\', '|', '/'];
const FRAME_INTERVAL: Duration = Duration::from_millis(80);

/// Single-line progress indicator for blocking backend calls.
#[derive(Debug, Clone)]
pub struct Spinner {
    current: usize,
    message: String,
}

impl Spinner {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            current: 0,
            message: message.into(),
        }
    }

    pub fn tick(&mut self) {
        self.current = self.current.wrapping_add(1);
    }

    pub fn render(&self, supports_unicode: bool) -> String {
        let frames = if supports_unicode {
            SPINNER_FRAMES_BRAILLE
        } else {
            SPINNER_FRAMES_ASCII
        };
        let frame = frames[self.current % frames.len()];
        format!("{} {}", frame, self.message)
    }

}

/// Run `work` while a spinner animates on stderr.
///
/// Only animates on an interactive, non-CI, non-JSON terminal; otherwise
/// `work` just runs.
pub fn with_spinner<T>(ui: &UiContext, message: &str, work: impl FnOnce() -> T) -> T {
    if ui.json || !ui.caps.is_tty || ui.caps.is_ci {
        return work();
    }

    let done = Arc::new(AtomicBool::new(false));
    let unicode = ui.unicode;
    // Keep the frame on one line so `\r` redraws in place.
    let room = usize::from(ui.caps.width).saturating_sub(3);
    let mut spinner = Spinner::new(message.chars().take(room).collect::<String>());
    let handle = {
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut err = std::io::stderr();
            while !done.load(Ordering::Relaxed) {
                let _ = write!(err, "\r{}", spinner.render(unicode));
                let _ = err.flush();
                spinner.tick();
                thread::sleep(FRAME_INTERVAL);
            }
            let _ = write!(err, "\r\x1b[2K");
            let _ = err.flush();
        })
    };

    let result = work();
    done.store(true, Ordering::Relaxed);
    let _ = handle.join();
    result
}
