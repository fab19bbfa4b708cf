//
//  notion-cli
//  output/progress.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Spinners for in-flight requests.
//!
//! Spinners draw on stderr and are hidden in JSON mode, so stdout only ever
//! carries the response.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// A spinner that ends with a success or failure line.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// Starts a spinner with `message`, or a hidden one when `visible` is false.
    pub fn start(message: &str, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        if let Ok(spinner_style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            bar.set_style(spinner_style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    /// Stops the spinner with a green check.
    pub fn succeed(self, message: &str) {
        self.finish(format!("{} {}", style("✓").green(), message));
    }

    /// Stops the spinner with a red cross.
    pub fn fail(self, message: &str) {
        self.finish(format!("{} {}", style("✗").red(), message));
    }

    fn finish(self, line: String) {
        if let Ok(done) = ProgressStyle::with_template("{msg}") {
            self.bar.set_style(done);
        }
        self.bar.finish_with_message(line);
    }
}
