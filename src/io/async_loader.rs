//! Asynchronous icon asset loading.
//!
//! Loads the fixed icon manifest on background threads, keeping the GUI
//! responsive during startup. Each manifest entry is read on its own thread
//! and the results are joined into a single completion message, so the
//! application sees exactly one transition out of the loading state.

use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;
use thumbgen::assets::{icon_manifest, read_icon_source};

/// Holds the state of an async asset loading operation.
///
/// Only the in_progress flag is shared; results come through a channel.
pub struct LoadingState {
    /// True if an asset loading operation is currently in progress
    pub in_progress: bool,
}

impl LoadingState {
    /// Creates a new loading state that is not in progress.
    pub fn new() -> Self {
        Self { in_progress: false }
    }
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw SVG text per icon color, ready to be parsed into an `IconSet`.
pub type LoadedSources = Vec<(&'static str, String)>;

/// Result of a completed asset loading operation.
pub enum LoadResult {
    /// Every manifest entry was read successfully
    Success(LoadedSources),
    /// Loading failed with an error
    Error(String),
    /// No completed operation to report
    None,
}

/// Manages asynchronous loading of the icon manifest.
pub struct AssetLoader {
    /// Shared loading state flag
    loading_state: Arc<Mutex<LoadingState>>,

    /// Channel receiver for the joined loading result
    loading_receiver: Option<Receiver<Result<LoadedSources, String>>>,
}

impl AssetLoader {
    /// Creates a new asset loader with no active loading operation.
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            loading_receiver: None,
        }
    }

    /// Checks if a loading operation is currently in progress.
    pub fn is_loading(&self) -> bool {
        let state = self.loading_state.lock().unwrap();
        state.in_progress
    }

    /// Starts loading every manifest entry asynchronously.
    ///
    /// Call `check_completion()` once per frame to pick up the result.
    ///
    /// # Arguments
    /// * `ctx` - egui context for requesting a repaint when loading completes
    pub fn start_load(&mut self, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);

        {
            let mut state = self.loading_state.lock().unwrap();
            state.in_progress = true;
        }

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();

        // Supervisor thread: fan out one reader per manifest entry, then
        // join them into a single result.
        thread::spawn(move || {
            let handles: Vec<_> = icon_manifest()
                .iter()
                .map(|source| thread::spawn(move || read_icon_source(source)))
                .collect();

            let mut sources = Vec::with_capacity(handles.len());
            let mut error: Option<String> = None;

            for handle in handles {
                match handle.join() {
                    Ok(Ok(loaded)) => sources.push(loaded),
                    Ok(Err(e)) => {
                        error.get_or_insert_with(|| format!("{e:#}"));
                    }
                    Err(_) => {
                        error.get_or_insert_with(|| "asset reader thread panicked".to_string());
                    }
                }
            }

            let result = match error {
                Some(msg) => Err(msg),
                None => Ok(sources),
            };
            let _ = sender.send(result);

            {
                let mut state = loading_state.lock().unwrap();
                state.in_progress = false;
            }

            // Notify GUI thread to repaint
            ctx_handle.request_repaint();
        });
    }

    /// Checks if background loading has completed and returns the result.
    ///
    /// # Returns
    /// * `LoadResult::Success` - Every entry was read
    /// * `LoadResult::Error` - At least one entry failed
    /// * `LoadResult::None` - Still loading or no operation active
    pub fn check_completion(&mut self) -> LoadResult {
        if let Some(receiver) = &self.loading_receiver {
            if let Ok(result) = receiver.try_recv() {
                self.loading_receiver = None;

                return match result {
                    Ok(sources) => LoadResult::Success(sources),
                    Err(error_msg) => LoadResult::Error(error_msg),
                };
            }
        }

        LoadResult::None
    }
}

impl Default for AssetLoader {
    fn default() -> Self {
        Self::new()
    }
}
