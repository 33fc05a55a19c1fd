#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::{Path, PathBuf};

use eframe::egui;
use rfd::{MessageButtons, MessageDialog, MessageLevel};

use image_inspector::config::Config;
use image_inspector::export::{export_with_indent, with_default_extension};
use image_inspector::inspect::{Thumbnail, SUPPORTED_EXTENSIONS, inspect_within, is_supported_image};
use image_inspector::notify::{Level, Notification};

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let config = Config::load(None).unwrap_or_else(|e| {
        log::warn!("{e:#}");
        Config::default()
    });

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([config.window.width, config.window.height])
        .with_min_inner_size([480.0, 360.0])
        .with_drag_and_drop(true);

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Image Processor",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(config)))),
    )
}

// ── Main application state ──────────────────────────────────────────

struct App {
    config: Config,
    /// Metadata text shown in the info panel; exported as-is by "Save Info".
    info_text: String,
    /// Texture for the current thumbnail.
    texture: Option<egui::TextureHandle>,
    status: String,
}

impl App {
    fn new(config: Config) -> Self {
        Self {
            config,
            info_text: String::new(),
            texture: None,
            status: "Ready — open an image".into(),
        }
    }

    fn open_image(&mut self, ctx: &egui::Context) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Image files", SUPPORTED_EXTENSIONS)
            .pick_file()
        else {
            return;
        };
        self.load_image(ctx, &path);
    }

    /// Inspect `path` and, only if that succeeds, replace the preview and text.
    fn load_image(&mut self, ctx: &egui::Context, path: &Path) {
        match inspect_within(path, self.config.thumbnail.bounds()) {
            Ok(inspection) => {
                self.texture = Some(load_texture(ctx, &inspection.thumbnail));
                self.info_text = inspection.record.display_text();
                self.status = format!("Opened {}", inspection.record.filename);
            }
            Err(e) => {
                log::error!("{e}");
                show_notification(&Notification::from_error(&e));
            }
        }
    }

    fn save_metadata(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .set_file_name(&self.config.export.default_file_name)
            .save_file()
        else {
            return;
        };
        let path = with_default_extension(path);

        let notification = match export_with_indent(&self.info_text, &path, self.config.export.indent) {
            Ok(()) => {
                self.status = format!("Saved {}", path.display());
                Notification::export_succeeded()
            }
            Err(e) => {
                log::error!("{e}");
                Notification::from_error(&e)
            }
        };
        show_notification(&notification);
    }
}

fn load_texture(ctx: &egui::Context, thumbnail: &Thumbnail) -> egui::TextureHandle {
    let size = [thumbnail.width() as usize, thumbnail.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &thumbnail.to_rgba_pixels());
    ctx.load_texture("thumbnail", color_image, egui::TextureOptions::LINEAR)
}

fn show_notification(notification: &Notification) {
    let level = match notification.level {
        Level::Info => MessageLevel::Info,
        Level::Error => MessageLevel::Error,
    };
    MessageDialog::new()
        .set_level(level)
        .set_title(&notification.title)
        .set_description(&notification.message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle a dropped image file
        let dropped: Option<PathBuf> = ctx.input(|i| {
            i.raw.dropped_files.iter()
                .filter_map(|f| f.path.clone())
                .find(|p| is_supported_image(p))
        });
        if let Some(path) = dropped {
            self.load_image(ctx, &path);
        }

        // ── Top bar ─────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("Open Image").clicked() {
                    self.open_image(ctx);
                }
                if ui.button("Save Info").clicked() {
                    self.save_metadata();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(&self.status);
                });
            });
            ui.add_space(4.0);
        });

        // ── Bottom panel: metadata text ─────────────────────────────
        egui::TopBottomPanel::bottom("info")
            .resizable(true)
            .default_height(180.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add(
                            egui::TextEdit::multiline(&mut self.info_text)
                                .font(egui::TextStyle::Monospace)
                                .desired_width(f32::INFINITY)
                                .desired_rows(10),
                        );
                    });
            });

        // ── Central panel: thumbnail ────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| match &self.texture {
                Some(tex) => {
                    ui.image(egui::load::SizedTexture::new(tex.id(), tex.size_vec2()));
                }
                None => {
                    ui.label(egui::RichText::new("Open an image or drop one here")
                        .size(16.0)
                        .color(egui::Color32::GRAY));
                }
            });
        });
    }
}
