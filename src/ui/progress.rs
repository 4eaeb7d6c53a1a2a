//! Progress animation shown while the API call is in flight.

use std::future::Future;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::error::UiError;

const MESSAGE: &str = "Generating commit message...";
const TICK: Duration = Duration::from_millis(100);

/// Bar length; positions are percentages.
const BAR_LEN: u64 = 100;
const BAR_STEP: u64 = 10;
/// The bar stops here until the call actually finishes.
const BAR_CEILING: u64 = 90;

/// Which animation to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStyleKind {
    /// Compact dot spinner (fast mode).
    Spinner,
    /// Bar that creeps toward 90% and completes when the work is done.
    Bar,
}

/// Next bar position after one tick.
pub fn next_position(current: u64) -> u64 {
    if current >= BAR_CEILING {
        current
    } else {
        (current + BAR_STEP).min(BAR_CEILING)
    }
}

fn build_indicator(kind: ProgressStyleKind) -> Result<ProgressBar, UiError> {
    match kind {
        ProgressStyleKind::Spinner => {
            let style = ProgressStyle::with_template("\n {spinner:.magenta} {msg}")
                .map_err(|e| UiError::Template(e.to_string()))?
                .tick_strings(&["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷", "⣿"]);
            let pb = ProgressBar::new_spinner();
            pb.set_style(style);
            pb.set_message(MESSAGE);
            pb.enable_steady_tick(TICK);
            Ok(pb)
        }
        ProgressStyleKind::Bar => {
            let style = ProgressStyle::with_template("\n  {msg:.magenta.bold}\n  {bar:76.magenta/blue}")
                .map_err(|e| UiError::Template(e.to_string()))?
                .progress_chars("█▉▊▋▌▍▎▏ ");
            let pb = ProgressBar::new(BAR_LEN);
            pb.set_style(style);
            pb.set_message(MESSAGE);
            Ok(pb)
        }
    }
}

/// Run `work` while rendering a progress animation.
///
/// The animation is cleared when `work` completes. Pressing Ctrl-C while
/// waiting abandons the work and returns `UiError::Interrupted`.
pub async fn with_progress<F, T>(kind: ProgressStyleKind, work: F) -> Result<T, UiError>
where
    F: Future<Output = T>,
{
    let pb = build_indicator(kind)?;

    let ticker = (kind == ProgressStyleKind::Bar).then(|| {
        let pb = pb.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK);
            loop {
                interval.tick().await;
                pb.set_position(next_position(pb.position()));
            }
        })
    });

    let outcome = tokio::select! {
        value = work => Ok(value),
        _ = tokio::signal::ctrl_c() => {
            debug!("Interrupted while waiting for the API");
            Err(UiError::Interrupted)
        }
    };

    if let Some(ticker) = ticker {
        ticker.abort();
    }
    if outcome.is_ok() && kind == ProgressStyleKind::Bar {
        pb.set_position(BAR_LEN);
    }
    pb.finish_and_clear();

    outcome
}
