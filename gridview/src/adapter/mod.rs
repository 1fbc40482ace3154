//! Host event adapter: one handler per editor notification.
//!
//! Every handler runs inside a drawing boundary. A failed pass is logged and
//! swallowed; a panicking pass additionally resets the overlay so the next
//! notification rebuilds it from an empty container.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;

use gridview_core::EditorEvent;

use crate::config::{self, Config, ConfigError, Preferences};
use crate::error::RenderError;
use crate::host::EditorHost;
use crate::overlay::GridOverlay;
use crate::raster::{BitmapSurface, SkiaSurface};

/// Name the subscriber registers under with the host.
pub const IDENTIFIER: &str = "com.typesupply.GridView.dynamicGrid";

/// Grid overlay bound to one host view.
pub struct GridViewSubscriber<H: EditorHost, S: BitmapSurface = SkiaSurface> {
    host: H,
    overlay: GridOverlay<S>,
    config_path: Option<PathBuf>,
}

impl<H: EditorHost, S: BitmapSurface> GridViewSubscriber<H, S> {
    /// Bind an overlay to `host`. Layers are created on the first event.
    pub fn new(host: H, config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let prefs = host
            .preferences()
            .unwrap_or_else(|| Preferences::from_config(&config));
        Ok(Self {
            host,
            overlay: GridOverlay::new(config, prefs),
            config_path: None,
        })
    }

    /// Reload config from `path` instead of the default location.
    #[must_use]
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn overlay(&self) -> &GridOverlay<S> {
        &self.overlay
    }

    pub fn view_built(&mut self) {
        self.handle(EditorEvent::ViewBuilt);
    }

    pub fn view_started(&mut self) {
        self.handle(EditorEvent::ViewStarted);
    }

    pub fn scaled(&mut self) {
        self.handle(EditorEvent::Scaled);
    }

    pub fn glyph_changed(&mut self) {
        self.handle(EditorEvent::GlyphChanged);
    }

    pub fn metrics_changed(&mut self) {
        self.handle(EditorEvent::MetricsChanged);
    }

    pub fn preferences_changed(&mut self) {
        self.handle(EditorEvent::PreferencesChanged);
    }

    /// Dispatch `event` inside the drawing boundary.
    pub fn handle(&mut self, event: EditorEvent) {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.dispatch(event)));
        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(e)) => log::warn!("{}: redraw skipped: {e}", event.name()),
            Err(payload) => {
                log::error!(
                    "{}: draw callback panicked: {}",
                    event.name(),
                    panic_message(payload.as_ref())
                );
                let reset = panic::catch_unwind(AssertUnwindSafe(|| {
                    self.overlay.fail_safe_reset(self.host.container_mut());
                }));
                if reset.is_err() {
                    log::error!("{}: container reset panicked", event.name());
                }
            }
        }
    }

    /// Re-read the config file and rebuild the overlay with it.
    ///
    /// An unreadable or invalid file is logged and the running config kept.
    pub fn apply_config_reload(&mut self) {
        let path = self.config_path.clone().unwrap_or_else(config::config_path);
        let new_config = match Config::try_load_from(&path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("config reload: {e}");
                return;
            }
        };
        if new_config == *self.overlay.config() {
            log::debug!("config reload: unchanged");
            return;
        }
        self.overlay.reconfigure(new_config);
        self.handle(EditorEvent::ViewBuilt);
        log::info!("config reload: applied");
    }

    fn dispatch(&mut self, event: EditorEvent) -> Result<(), RenderError> {
        log::debug!("event: {}", event.name());
        match event {
            EditorEvent::ViewBuilt => {
                self.reload_preferences();
                self.overlay.build(self.host.container_mut());
            }
            EditorEvent::ViewStarted => self.overlay.force_redraw(),
            EditorEvent::PreferencesChanged => self.reload_preferences(),
            EditorEvent::Scaled | EditorEvent::GlyphChanged | EditorEvent::MetricsChanged => {
                self.overlay.invalidate(event.invalidation());
            }
        }
        // A reset after a failed pass leaves no layers behind.
        if !self.overlay.state().has_layers() {
            self.overlay.build(self.host.container_mut());
        }
        let glyph = self.host.glyph();
        let device_scale = self.host.device_scale_factor();
        self.overlay
            .refresh(self.host.container_mut(), glyph, device_scale)
    }

    fn reload_preferences(&mut self) {
        let prefs = self
            .host
            .preferences()
            .unwrap_or_else(|| Preferences::from_config(self.overlay.config()));
        self.overlay.set_preferences(prefs);
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}
