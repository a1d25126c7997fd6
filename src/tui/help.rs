//! Help text content for the help modal

use super::keymap::{Action, Binding, CustomKeymap, Keymap};
use pagegrid_core::{PAGE_SIZE, TextAlign};

/// Get the about section shown above the keybindings
pub fn get_about_help() -> Vec<String> {
    vec![
        "About Pagegrid".to_string(),
        String::new(),
        format!("  Cells are shown {PAGE_SIZE} per page. Even-numbered cells"),
        "  accept numbers, odd-numbered cells accept letters only.".to_string(),
        "  Every accepted keystroke can be undone.".to_string(),
    ]
}

/// Get keybinding help text for the current keymap
pub fn get_help_text(keymap: &Keymap) -> Vec<String> {
    match keymap {
        Keymap::Vim => vec![
            "Navigation:",
            "  h/j/k/l      Move left/down/up/right",
            "  Arrow keys   Move cursor",
            "  Tab/S-Tab    Next/previous cell",
            "  g / Home     First cell on page",
            "  G / End      Last cell on page",
            "",
            "Pages:",
            "  [ / PageUp   Previous page",
            "  ] / PageDown Next page",
            "",
            "Cells:",
            "  i / Enter    Edit cell",
            "  Space        Select cell",
            "  Enter / Esc  Finish editing",
            "  < = >        Align left/center/right",
            "",
            "Undo/Redo:",
            "  u            Undo",
            "  Ctrl+r       Redo",
            "",
            "Other:",
            "  /            Search",
            "  ? / F1       Toggle help",
            "  q            Quit",
        ]
        .into_iter()
        .map(str::to_string)
        .collect(),
        Keymap::Emacs => vec![
            "Navigation:",
            "  C-n/C-p      Move down/up",
            "  C-f/C-b      Move right/left",
            "  Arrow keys   Move cursor",
            "  M-< / M->    First/last cell on page",
            "",
            "Pages:",
            "  M-v / C-v    Previous/next page",
            "",
            "Cells:",
            "  Enter        Edit cell",
            "  C-SPC        Select cell",
            "  C-g / Esc    Finish editing",
            "  M-l/M-c/M-r  Align left/center/right",
            "",
            "Undo/Redo:",
            "  C-/ / C-_    Undo",
            "  M-/          Redo",
            "",
            "Other:",
            "  C-s          Search",
            "  F1           Toggle help",
            "  C-q          Quit",
        ]
        .into_iter()
        .map(str::to_string)
        .collect(),
        Keymap::Custom(custom) => custom_help_text(custom),
    }
}

fn custom_help_text(custom: &CustomKeymap) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    if let Some(desc) = custom.description.as_ref() {
        lines.push(desc.clone());
        lines.push(String::new());
    }
    lines.push("Normal:".to_string());
    append_bindings(&mut lines, &custom.bindings.normal);
    lines.push(String::new());
    lines.push("Edit:".to_string());
    append_bindings(&mut lines, &custom.bindings.edit);
    lines.push(String::new());
    lines.push("Search:".to_string());
    append_bindings(&mut lines, &custom.bindings.search);
    lines
}

fn append_bindings(lines: &mut Vec<String>, bindings: &[Binding]) {
    if bindings.is_empty() {
        lines.push("  (no bindings)".to_string());
        return;
    }
    let mut rows: Vec<(String, &'static str)> = bindings
        .iter()
        .map(|binding| (binding.combo.display(), action_label(&binding.action)))
        .collect();
    rows.sort();
    for (combo, label) in rows {
        lines.push(format!("  {:<12} {}", combo, label));
    }
}

fn action_label(action: &Action) -> &'static str {
    match action {
        Action::Cancel => "Cancel",
        Action::EnterEdit => "Edit cell",
        Action::CommitEdit => "Finish editing",
        Action::SelectCell => "Select cell",
        Action::EnterSearch => "Search",
        Action::Undo => "Undo",
        Action::Redo => "Redo",
        Action::Align(TextAlign::Left) => "Align left",
        Action::Align(TextAlign::Center) => "Align center",
        Action::Align(TextAlign::Right) => "Align right",
        Action::PrevPage => "Previous page",
        Action::NextPage => "Next page",
        Action::Move(-1, 0) => "Move left",
        Action::Move(1, 0) => "Move right",
        Action::Move(0, -1) => "Move up",
        Action::Move(0, 1) => "Move down",
        Action::Move(_, _) => "Move",
        Action::FirstCell => "First cell",
        Action::LastCell => "Last cell",
        Action::Help => "Toggle help",
        Action::Quit => "Quit",
    }
}
