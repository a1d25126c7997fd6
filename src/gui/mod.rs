//! Pagegrid GUI - egui-based desktop application.
//!
//! - app.rs: Widget state and feedback (UI-agnostic)
//! - state.rs: Layout and focus state
//! - actions.rs: Action types and dispatch
//! - input.rs: Keyboard shortcuts
//! - ui.rs: egui rendering

pub mod actions;
pub mod app;
pub mod input;
pub mod state;
pub mod ui;

use eframe::egui;
use pagegrid_core::SpreadsheetGrid;

use self::actions::{Action, apply_action};
use self::app::GuiApp;
use self::input::{alert_dismissed, handle_keyboard_input};
use self::state::GuiState;
use self::ui::{
    SEARCH_ID, apply_theme, draw_alert, draw_bottom_panel, draw_central_grid, draw_top_panel,
};

/// Main GUI application wrapper implementing eframe::App trait.
pub struct PagegridGuiApp {
    app: GuiApp,
    state: GuiState,
}

impl PagegridGuiApp {
    pub fn new(grid: SpreadsheetGrid) -> Self {
        Self {
            app: GuiApp::new(grid),
            state: GuiState::new(),
        }
    }

    fn handle_actions(&mut self, actions: Vec<Action>) {
        for action in actions {
            log::trace!("gui action: {action:?}");
            apply_action(&mut self.app, &mut self.state, action);
            // Anything after a rejection belongs to a state the user has not seen.
            if self.app.alert.is_some() {
                break;
            }
        }
    }
}

impl eframe::App for PagegridGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        apply_theme(ctx);
        self.state.update_columns(ctx.screen_rect().width());

        let mut actions: Vec<Action> = Vec::new();
        let blocked = self.app.alert.is_some();

        if blocked {
            if alert_dismissed(ctx) {
                actions.push(Action::DismissAlert);
            }
        } else if let Some(action) = handle_keyboard_input(ctx) {
            actions.push(action);
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                draw_top_panel(ui, &self.app, &mut actions);
            });
        });

        egui::TopBottomPanel::bottom("pagination").show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                draw_bottom_panel(ui, &self.app, &mut actions);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                draw_central_grid(ui, &self.app, &self.state, &mut actions);
            });
        });

        draw_alert(ctx, &self.app, &mut actions);

        if !actions.is_empty() {
            self.handle_actions(actions);
            ctx.request_repaint();
        }

        if self.state.request_focus_search {
            ctx.memory_mut(|m| m.request_focus(egui::Id::new(SEARCH_ID)));
            self.state.request_focus_search = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_after_a_rejection_are_dropped() {
        let mut gui = PagegridGuiApp::new(SpreadsheetGrid::new());
        gui.handle_actions(vec![
            Action::Align(pagegrid_core::TextAlign::Left),
            Action::NextPage,
        ]);
        assert_eq!(gui.app.alert.as_deref(), Some("Please select a cell first."));
        assert_eq!(gui.app.grid.pager().page(), 0);
    }

    #[test]
    fn select_then_edit_in_one_frame() {
        let mut gui = PagegridGuiApp::new(SpreadsheetGrid::new());
        gui.handle_actions(vec![
            Action::Select(0),
            Action::Edit {
                visible: 0,
                value: "3".to_string(),
            },
        ]);
        assert_eq!(gui.app.grid.selected(), Some(0));
        assert_eq!(gui.app.grid.cells()[0].value, "3");
    }
}
