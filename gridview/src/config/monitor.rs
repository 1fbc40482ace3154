//! Config file change monitor. Watches the TOML file and signals reloads.
//!
//! The watcher runs on its own thread but never touches overlay state: it
//! only sends a signal the host drains on its UI thread before calling
//! [`GridViewSubscriber::apply_config_reload`].
//!
//! [`GridViewSubscriber::apply_config_reload`]: crate::adapter::GridViewSubscriber::apply_config_reload

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Duration;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};

/// Events within this window after a change are folded into one reload.
const DEBOUNCE: Duration = Duration::from_millis(200);

/// Watches the config file's parent directory and sends `()` on `reload_tx`
/// when the config file is modified.
pub struct ConfigMonitor {
    shutdown_tx: mpsc::Sender<()>,
    /// Owns the sender side of the event channel; dropping it ends the
    /// watch loop.
    watcher: Option<RecommendedWatcher>,
    thread: Option<JoinHandle<()>>,
}

impl ConfigMonitor {
    /// Start watching `path` for changes.
    /// Returns `None` if the parent directory doesn't exist or the watcher
    /// can't be created.
    pub fn new(path: PathBuf, reload_tx: mpsc::Sender<()>) -> Option<Self> {
        let parent = path.parent()?.to_path_buf();

        if !parent.exists() {
            log::info!(
                "config_monitor: parent dir {} does not exist, skipping watch",
                parent.display()
            );
            return None;
        }

        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();
        let (notify_tx, notify_rx) = mpsc::channel();

        let mut watcher = match notify::recommended_watcher(notify_tx) {
            Ok(w) => w,
            Err(e) => {
                log::warn!("config_monitor: failed to create watcher: {e}");
                return None;
            }
        };

        if let Err(e) = watcher.watch(&parent, RecursiveMode::NonRecursive) {
            log::warn!("config_monitor: failed to watch {}: {e}", parent.display());
            return None;
        }

        log::info!("config_monitor: watching {}", parent.display());

        let thread = std::thread::Builder::new()
            .name("gridview-config-watcher".into())
            .spawn(move || {
                Self::watch_loop(&path, &reload_tx, &notify_rx, &shutdown_rx);
            })
            .ok()?;

        Some(Self {
            shutdown_tx,
            watcher: Some(watcher),
            thread: Some(thread),
        })
    }

    fn watch_loop(
        config_file: &Path,
        reload_tx: &mpsc::Sender<()>,
        notify_rx: &mpsc::Receiver<Result<notify::Event, notify::Error>>,
        shutdown_rx: &mpsc::Receiver<()>,
    ) {
        while let Ok(event) = notify_rx.recv() {
            if shutdown_rx.try_recv().is_ok() {
                return;
            }

            let is_config_event = match &event {
                Ok(ev) => ev.paths.iter().any(|p| p == config_file),
                Err(_) => false,
            };
            if !is_config_event {
                continue;
            }

            while notify_rx.recv_timeout(DEBOUNCE).is_ok() {
                // Drain
            }

            if shutdown_rx.try_recv().is_ok() {
                return;
            }

            log::debug!("config_monitor: config file changed, signalling reload");
            if reload_tx.send(()).is_err() {
                // Receiver dropped.
                return;
            }
        }
    }

    /// Shut down the watcher thread.
    ///
    /// Dropping the watcher closes the event channel, which wakes the loop
    /// even when the directory is quiet.
    pub fn shutdown(mut self) {
        let _ = self.shutdown_tx.send(());
        drop(self.watcher.take());
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}
