use std::path::{Path, PathBuf};
use std::sync::Arc;

use trailmap::config::MapScreenConfig;
use trailmap::OverlayStore;

use crate::MapScreen;

struct TrailMapApp {
    screen: MapScreen,
}

impl eframe::App for TrailMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.screen.show(ctx);
    }
}

/// Builder that runs a [`MapScreen`] in a native window.
///
/// ```ignore
/// trailmap_egui::InitBuilder::new()
///     .with_config_file("trailmap.json")
///     .init()
///     .expect("failed to initialize");
/// ```
pub struct InitBuilder {
    store: Option<Arc<OverlayStore>>,
    config: MapScreenConfig,
    config_file: Option<PathBuf>,
    native_options: Option<eframe::NativeOptions>,
    logging: bool,
}

impl Default for InitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InitBuilder {
    /// Creates a builder with the default configuration and a store seeded with
    /// the sample overlays.
    pub fn new() -> Self {
        Self {
            store: None,
            config: MapScreenConfig::default(),
            config_file: None,
            native_options: None,
            logging: true,
        }
    }

    /// Uses an existing store instead of creating one.
    pub fn with_store(mut self, store: Arc<OverlayStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Sets the screen configuration.
    pub fn with_config(mut self, config: MapScreenConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads the screen configuration from a JSON file when the window opens. If
    /// the file cannot be used, the configuration set with
    /// [`InitBuilder::with_config`] (or the default) is kept.
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets native window options.
    pub fn with_native_options(mut self, options: eframe::NativeOptions) -> Self {
        self.native_options = Some(options);
        self
    }

    /// Enables or disables installing `env_logger`. Enabled by default.
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.logging = enabled;
        self
    }

    /// Opens the window and blocks until it is closed.
    pub fn init(self) -> anyhow::Result<()> {
        if self.logging {
            let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .try_init();
        }

        let store = self.store.unwrap_or_else(|| Arc::new(OverlayStore::new()));
        let config = match &self.config_file {
            Some(path) => MapScreenConfig::from_file_or(path, self.config),
            None => self.config,
        };
        let title = config.title.clone();
        let options = self.native_options.unwrap_or_else(|| eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(title.clone())
                .with_inner_size([900.0, 700.0]),
            ..Default::default()
        });

        log::info!("Starting {title}");
        eframe::run_native(
            &title,
            options,
            Box::new(move |cc| {
                let screen = MapScreen::new(store, config);
                screen.attach(&cc.egui_ctx);
                Ok(Box::new(TrailMapApp { screen }))
            }),
        )
        .map_err(|err| anyhow::anyhow!("failed to run map window: {err}"))
    }
}
