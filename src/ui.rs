// Progress feedback on stderr while a request is in flight. indicatif
// draws nothing when stderr is not a terminal, and the spinner is cleared
// once the step finishes so a successful run leaves no output behind.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Run `step` with a spinner showing `message`.
pub fn with_spinner<T>(message: &str, step: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = step();
    spinner.finish_and_clear();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_step_result() {
        assert_eq!(with_spinner("Working...", || 42), 42);
    }
}
