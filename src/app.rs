use egui::{Key, KeyboardShortcut, Modifiers};

use crate::config::SketchConfig;
use crate::document::Document;
use crate::error::{SketchError, SketchResult};
use crate::input::{InputHandler, PointerSnapshot};
use crate::panels::{central_panel, history_panel, tools_panel};
use crate::renderer::Renderer;
use crate::tools::ToolPalette;
use crate::{export, file_handler};

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut = KeyboardShortcut::new(
    Modifiers {
        shift: true,
        ..Modifiers::COMMAND
    },
    Key::Z,
);
const REDO_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

/// What survives a restart: settings and the palette, never the drawing.
#[derive(serde::Deserialize, serde::Serialize, Default)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
struct Settings {
    config: SketchConfig,
    palette: Option<ToolPalette>,
}

pub struct SketchApp {
    config: SketchConfig,
    document: Document,
    renderer: Renderer,
    input: InputHandler,
    /// Text typed into the "add sticker" field
    custom_sticker: String,
    last_revision: u64,
    last_error: Option<String>,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl SketchApp {
    /// Called once before the first frame. Fails if there is no raster context to draw on.
    pub fn new(cc: &eframe::CreationContext<'_>) -> SketchResult<Self> {
        if cc.gl.is_none() {
            log::error!("No GL context available, cannot set up the canvas");
            return Err(SketchError::ContextUnavailable);
        }

        let settings: Settings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        Ok(Self::with_settings(settings))
    }

    fn with_settings(settings: Settings) -> Self {
        let Settings { config, palette } = settings;
        let palette = palette.unwrap_or_else(|| ToolPalette::from_config(&config));
        Self {
            renderer: Renderer::new(config.background),
            document: Document::new(palette),
            input: InputHandler::new(),
            custom_sticker: String::new(),
            last_revision: 0,
            last_error: None,
            config,
        }
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn custom_sticker_mut(&mut self) -> &mut String {
        &mut self.custom_sticker
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Feed this frame's pointer state over the canvas into the document
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        let snapshot = PointerSnapshot::capture(ctx);
        for event in self.input.process(snapshot, canvas_rect) {
            self.document.handle_input(event);
        }
    }

    pub fn add_custom_sticker(&mut self) {
        let text = std::mem::take(&mut self.custom_sticker);
        self.document.palette_mut().add_custom_sticker(&text);
    }

    /// Render the committed drawing off-screen and hand it to the user
    pub fn export(&mut self) {
        let result = export::export_png(self.document.history(), &self.config).and_then(|bytes| {
            file_handler::offer_download(&bytes, &file_handler::export_file_name())
        });
        match result {
            Ok(()) => self.last_error = None,
            Err(err) => {
                log::error!("Export failed: {err}");
                self.last_error = Some(err.to_string());
            }
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Redo first: the plain undo shortcut would also match with shift held
        let (redo, undo) = ctx.input_mut(|i| {
            let redo = i.consume_shortcut(&REDO) || i.consume_shortcut(&REDO_ALT);
            let undo = i.consume_shortcut(&UNDO);
            (redo, undo)
        });
        if redo {
            self.document.redo();
        }
        if undo {
            self.document.undo();
        }
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let palette = self.document.palette();
        let mut config = self.config.clone();
        config.stickers = palette.stickers().to_vec();
        config.marker_color = palette.marker_color();

        let settings = Settings {
            config,
            palette: Some(palette.clone()),
        };
        eframe::set_value(storage, eframe::APP_KEY, &settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        history_panel::history_panel(self, ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Sticker Sketchpad");
            tools_panel::tools_panel(self, ui);
            central_panel::central_panel(self, ctx, ui);
        });

        let revision = self.document.revision();
        if revision != self.last_revision {
            self.last_revision = revision;
            ctx.request_repaint();
        }
    }
}
