use std::cell::RefCell;

use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::diagnostics::{DiagnosticSink, Level};
use crate::utils::string::pluralize;

// Progress bar style templates as constants
const PROGRESS_BAR_TEMPLATE: &str =
    "{spinner:.cyan} {msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len}";

pub struct ProgressReporter {
    term: Term,
    current_bar: RefCell<Option<ProgressBar>>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            current_bar: RefCell::new(None),
        }
    }

    fn create_progress_bar(&self, len: u64, message: &str) -> ProgressBar {
        let pb = ProgressBar::new(len);
        let style = match ProgressStyle::default_bar().template(PROGRESS_BAR_TEMPLATE) {
            Ok(style) => style
                .progress_chars("█▉▊▋▌▍▎▏ ")
                .tick_strings(SPINNER_FRAMES),
            Err(_) => ProgressStyle::default_bar(),
        };
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn start_discovery(&self) {
        let _ = self.term.clear_line();
        eprintln!("{} Looking for a solution file...", style("🔍").cyan());
    }

    pub fn finish_discovery(&self, solution_name: &str, project_count: usize) {
        let _ = self.term.clear_line();
        eprintln!(
            "{} Solution {}: found {} {}",
            style("✓").green(),
            style(solution_name).bold(),
            style(project_count).yellow().bold(),
            pluralize("project", project_count)
        );
    }

    pub fn start_manifests(&self, total: usize) {
        let pb = self.create_progress_bar(total as u64, "Reading project manifests");
        *self.current_bar.borrow_mut() = Some(pb);
    }

    pub fn parsing_manifest(&self, project_name: &str) {
        if let Some(ref pb) = *self.current_bar.borrow() {
            pb.set_message(format!("Reading manifest: {project_name}"));
            pb.inc(1);
        }
    }

    pub fn finish_manifests(&self) {
        if let Some(pb) = self.current_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }

    /// Run `f` with the active progress bar hidden
    pub fn suspend<R>(&self, f: impl FnOnce() -> R) -> R {
        match self.current_bar.borrow().as_ref() {
            Some(pb) => pb.suspend(f),
            None => f(),
        }
    }
}

/// Forwards diagnostics to another sink without tearing an active progress bar
pub struct SuspendingSink<'a> {
    inner: &'a dyn DiagnosticSink,
    progress: Option<&'a ProgressReporter>,
}

impl<'a> SuspendingSink<'a> {
    pub fn new(inner: &'a dyn DiagnosticSink, progress: Option<&'a ProgressReporter>) -> Self {
        Self { inner, progress }
    }
}

impl DiagnosticSink for SuspendingSink<'_> {
    fn emit(&self, level: Level, message: &str) {
        match self.progress {
            Some(progress) => progress.suspend(|| self.inner.emit(level, message)),
            None => self.inner.emit(level, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;

    #[test]
    fn test_suspending_sink_forwards_with_and_without_bar() {
        let memory = MemorySink::new();
        let progress = ProgressReporter::new();
        progress.start_manifests(2);

        SuspendingSink::new(&memory, Some(&progress)).error("Api failed");
        progress.finish_manifests();
        SuspendingSink::new(&memory, None).debug("done");

        assert!(memory.contains(Level::Error, "Api failed"));
        assert!(memory.contains(Level::Debug, "done"));
    }

    #[test]
    fn test_suspend_returns_closure_value() {
        let progress = ProgressReporter::new();

        assert_eq!(progress.suspend(|| 7), 7);
    }
}
