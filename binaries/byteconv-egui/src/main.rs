use byteconv_units::{FieldGroup, UnitScale};
use eframe::egui;

use crate::config::UiConfig;
use crate::widgets::unit_group::UnitGroup;

mod config;
mod fonts;
mod widgets;

struct ConverterApp {
    config: UiConfig,
    decimal: FieldGroup,
    binary: FieldGroup,
}

impl ConverterApp {
    fn new(cc: &eframe::CreationContext<'_>, config: UiConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        cc.egui_ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(config.item_spacing, config.item_spacing);
            style.spacing.button_padding = egui::vec2(6.0, 4.0);
        });
        cc.egui_ctx
            .set_fonts(fonts::load_fonts(egui::FontDefinitions::default()));
        cc.egui_ctx.set_zoom_factor(config.zoom_factor());
        Self {
            config,
            decimal: FieldGroup::new(UnitScale::decimal()),
            binary: FieldGroup::new(UnitScale::binary()),
        }
    }
}

impl eframe::App for ConverterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.push_id("decimal", |ui| {
                ui.add(UnitGroup {
                    group: &mut self.decimal,
                    config: &self.config,
                });
            });
            ui.add_space(self.config.group_spacing);
            ui.push_id("binary", |ui| {
                ui.add(UnitGroup {
                    group: &mut self.binary,
                    config: &self.config,
                });
            });
        });
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            "byteconv_units=info,byteconv_egui=info",
        ))
        .init();

    let config = UiConfig::default();
    let options = eframe::NativeOptions {
        viewport: config.viewport(),
        ..Default::default()
    };
    tracing::info!(title = config.window_title, "starting unit converter");
    eframe::run_native(
        "byteconv-egui",
        options,
        Box::new(move |cc| Ok(Box::new(ConverterApp::new(cc, config)))),
    )
}
