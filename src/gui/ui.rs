//! UI rendering and layout using egui.
//!
//! Drawing functions only read the app; what the user did is pushed onto an
//! action list that the frame applies afterwards.

use crate::gui::actions::Action;
use crate::gui::app::GuiApp;
use crate::gui::state::GuiState;
use eframe::egui;
use pagegrid_core::{Cell, TextAlign, Validation};

pub const SEARCH_ID: &str = "pagegrid_search";
const CELL_HEIGHT: f32 = 28.0;
const CELL_SPACING: f32 = 6.0;
/// Light yellow behind the selected cell.
const SELECTED_FILL: egui::Color32 = egui::Color32::from_rgb(254, 249, 195);

/// Apply light theme and style configuration.
pub fn apply_theme(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::light());

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 4.0);
        style.spacing.interact_size.y = CELL_HEIGHT;

        style
            .text_styles
            .insert(egui::TextStyle::Body, egui::FontId::proportional(14.0));
        style
            .text_styles
            .insert(egui::TextStyle::Button, egui::FontId::proportional(14.0));
        style
            .text_styles
            .insert(egui::TextStyle::Monospace, egui::FontId::monospace(13.0));
    });
}

fn egui_align(text_align: TextAlign) -> egui::Align {
    match text_align {
        TextAlign::Left => egui::Align::Min,
        TextAlign::Center => egui::Align::Center,
        TextAlign::Right => egui::Align::Max,
    }
}

/// Draw the top panel: search box and toolbar.
pub fn draw_top_panel(ui: &mut egui::Ui, app: &GuiApp, actions: &mut Vec<Action>) {
    ui.horizontal(|ui| {
        let mut term = app.grid.search_term().to_string();
        let resp = ui.add(
            egui::TextEdit::singleline(&mut term)
                .id(egui::Id::new(SEARCH_ID))
                .hint_text("Search...")
                .desired_width(220.0),
        );
        if resp.changed() {
            actions.push(Action::Search(term));
        }

        ui.separator();

        if ui
            .add_enabled(app.grid.can_undo(), egui::Button::new("Undo"))
            .on_hover_text("Ctrl+Z")
            .clicked()
        {
            actions.push(Action::Undo);
        }
        if ui
            .add_enabled(app.grid.can_redo(), egui::Button::new("Redo"))
            .on_hover_text("Ctrl+Y")
            .clicked()
        {
            actions.push(Action::Redo);
        }

        ui.separator();

        for text_align in TextAlign::ALL {
            let label = match text_align {
                TextAlign::Left => "Align Left",
                TextAlign::Center => "Align Center",
                TextAlign::Right => "Align Right",
            };
            if ui.button(label).clicked() {
                actions.push(Action::Align(text_align));
            }
        }

        ui.separator();
        ui.label(egui::RichText::new(app.selection_label()).weak());
    });
}

fn cell_hint(cell: &Cell) -> &'static str {
    match cell.validation {
        Validation::Numeric => "number",
        Validation::Text { .. } => "letters",
    }
}

/// Draw the cells of the current page as a grid of text fields.
pub fn draw_central_grid(
    ui: &mut egui::Ui,
    app: &GuiApp,
    state: &GuiState,
    actions: &mut Vec<Action>,
) {
    let columns = state.columns.max(1);
    let available_width = ui.available_width();
    let cell_width =
        ((available_width - CELL_SPACING * (columns as f32 - 1.0)) / columns as f32).max(40.0);
    let offset = app.grid.pager().offset();
    let selected = app.grid.selected();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("pagegrid_cells")
                .spacing(egui::vec2(CELL_SPACING, CELL_SPACING))
                .show(ui, |ui| {
                    for (visible, cell) in app.grid.visible_cells().iter().enumerate() {
                        let index = offset + visible;
                        let mut text = cell.value.clone();
                        let mut edit = egui::TextEdit::singleline(&mut text)
                            .id(egui::Id::new(("pagegrid_cell", index)))
                            .hint_text(cell_hint(cell))
                            .horizontal_align(egui_align(cell.formatting.effective_align()))
                            .desired_width(cell_width);
                        if selected == Some(index) {
                            edit = edit
                                .background_color(SELECTED_FILL)
                                .text_color(egui::Color32::BLACK);
                        }

                        let resp = ui.add_sized([cell_width, CELL_HEIGHT], edit);
                        if resp.gained_focus() || resp.clicked() {
                            actions.push(Action::Select(visible));
                        }
                        if resp.changed() {
                            actions.push(Action::Edit {
                                visible,
                                value: text,
                            });
                        }

                        if (visible + 1) % columns == 0 {
                            ui.end_row();
                        }
                    }
                });
        });
}

/// Draw pagination controls and the status line.
pub fn draw_bottom_panel(ui: &mut egui::Ui, app: &GuiApp, actions: &mut Vec<Action>) {
    let pager = app.grid.pager();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(pager.has_previous(), egui::Button::new("Previous"))
            .clicked()
        {
            actions.push(Action::PreviousPage);
        }
        ui.label(pager.label());
        if ui
            .add_enabled(pager.has_next(), egui::Button::new("Next"))
            .clicked()
        {
            actions.push(Action::NextPage);
        }

        ui.separator();

        let status = if app.status.is_empty() {
            "Ctrl+Z Undo  |  Ctrl+Y Redo  |  PgUp/PgDn Page  |  Ctrl+F Search"
        } else {
            app.status.as_str()
        };
        ui.label(
            egui::RichText::new(status)
                .monospace()
                .size(11.0)
                .color(egui::Color32::from_rgb(110, 110, 110)),
        );
    });
}

/// Draw the blocking alert window, if any.
pub fn draw_alert(ctx: &egui::Context, app: &GuiApp, actions: &mut Vec<Action>) {
    let Some(message) = app.alert.as_deref() else {
        return;
    };
    egui::Window::new("Alert")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    actions.push(Action::DismissAlert);
                }
            });
        });
}
