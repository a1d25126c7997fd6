use super::{Action, Binding, CustomKeymap, KeyCombo, Keymap, KeymapBindings};
use crossterm::event::{KeyCode, KeyModifiers};
use directories::ProjectDirs;
use pagegrid_core::{Breakpoints, TextAlign};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const MAX_KEYMAP_FILE_BYTES: u64 = 1_048_576; // 1 MiB
const MAX_BINDINGS_PER_MODE: usize = 512;
const MAX_TOTAL_BINDINGS: usize = 1_024;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    meta: Option<ConfigMeta>,
    layout: Option<LayoutSection>,
    keymaps: Option<HashMap<String, KeymapSection>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigMeta {
    default: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LayoutSection {
    medium: Option<u32>,
    large: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct KeymapSection {
    description: Option<String>,
    normal: Option<HashMap<String, String>>,
    edit: Option<HashMap<String, String>>,
    search: Option<HashMap<String, String>>,
}

/// Everything read from `keymaps.toml`, resolved against the built-ins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub keymap: Keymap,
    /// Terminal-width breakpoints for the 2/3/5 column layout.
    pub breakpoints: Breakpoints,
    /// Problems found while loading. None of them are fatal.
    pub warnings: Vec<String>,
}

pub fn load_config(requested: Option<&str>, config_file: Option<&Path>) -> LoadedConfig {
    let mut warnings: Vec<String> = Vec::new();
    let config_path = config_file
        .map(Path::to_path_buf)
        .or_else(user_config_path);
    let file = config_path
        .as_deref()
        .and_then(|path| read_config_file(path, config_file.is_some(), &mut warnings));

    let breakpoints = file
        .as_ref()
        .and_then(|f| f.layout.as_ref())
        .map(|layout| resolve_breakpoints(layout, &mut warnings))
        .unwrap_or(Breakpoints::TERMINAL);

    let keymap = resolve_keymap(
        requested,
        file.as_ref(),
        config_path.as_deref(),
        &mut warnings,
    );

    for warning in &warnings {
        log::warn!("{warning}");
    }
    log::debug!(
        "resolved keymap '{}' with breakpoints {}/{}",
        keymap.name(),
        breakpoints.medium,
        breakpoints.large
    );

    LoadedConfig {
        keymap,
        breakpoints,
        warnings,
    }
}

/// Path of the per-user config file, if the platform has a config dir.
pub fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "pagegrid")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("keymaps.toml");
    Some(path)
}

fn read_config_file(path: &Path, explicit: bool, warnings: &mut Vec<String>) -> Option<ConfigFile> {
    if !path.exists() {
        if explicit {
            warnings.push(format!("Keymap file not found: {}", path.display()));
        }
        return None;
    }
    match std::fs::metadata(path) {
        Ok(meta) if meta.len() > MAX_KEYMAP_FILE_BYTES => {
            warnings.push(format!(
                "Refusing to read {}: file too large ({} bytes, max {})",
                path.display(),
                meta.len(),
                MAX_KEYMAP_FILE_BYTES
            ));
            None
        }
        Ok(_) => match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<ConfigFile>(&content) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    warnings.push(format!("Failed to parse {}: {}", path.display(), err));
                    None
                }
            },
            Err(err) => {
                warnings.push(format!("Failed to read {}: {}", path.display(), err));
                None
            }
        },
        Err(err) => {
            warnings.push(format!(
                "Failed to read metadata for {}: {}",
                path.display(),
                err
            ));
            None
        }
    }
}

fn resolve_breakpoints(layout: &LayoutSection, warnings: &mut Vec<String>) -> Breakpoints {
    let defaults = Breakpoints::TERMINAL;
    let medium = layout.medium.unwrap_or(defaults.medium);
    let large = layout.large.unwrap_or(defaults.large);
    if medium == 0 || medium >= large {
        warnings.push(format!(
            "Invalid layout breakpoints medium={} large={}; using {}/{}",
            medium, large, defaults.medium, defaults.large
        ));
        return defaults;
    }
    Breakpoints { medium, large }
}

fn resolve_keymap(
    requested: Option<&str>,
    file: Option<&ConfigFile>,
    config_path: Option<&Path>,
    warnings: &mut Vec<String>,
) -> Keymap {
    let location = || {
        config_path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "keymaps.toml".to_string())
    };
    let requested_name = requested.map(|name| name.trim()).filter(|s| !s.is_empty());
    let default_name = file
        .and_then(|f| f.meta.as_ref())
        .and_then(|m| m.default.as_deref());
    let target = requested_name.or(default_name).unwrap_or("vim");

    if let Some(keymaps) = file.and_then(|f| f.keymaps.as_ref()) {
        if let Some(entry) = keymaps.get(target) {
            match build_custom_keymap(target, entry) {
                Ok(custom) => return Keymap::Custom(custom),
                Err(errs) => warnings.extend(errs),
            }
        } else if requested_name.is_some() && !is_builtin_keymap(target) {
            warnings.push(format!("Keymap '{}' not found in {}", target, location()));
        }
    }

    if requested_name.is_none() && default_name.is_some() && !is_builtin_keymap(target) {
        let default_exists = file
            .and_then(|f| f.keymaps.as_ref())
            .is_some_and(|keymaps| keymaps.contains_key(target));
        if !default_exists {
            warnings.push(format!(
                "Default keymap '{}' not found in {}; falling back to built-in 'vim'",
                target,
                location()
            ));
        }
    }

    if target.eq_ignore_ascii_case("emacs") {
        Keymap::Emacs
    } else {
        if requested_name.is_some() && !target.eq_ignore_ascii_case("vim") {
            warnings.push(format!(
                "Falling back to built-in 'vim' keymap for '{}'",
                target
            ));
        }
        Keymap::Vim
    }
}

fn is_builtin_keymap(name: &str) -> bool {
    name.eq_ignore_ascii_case("vim") || name.eq_ignore_ascii_case("emacs")
}

fn build_custom_keymap(name: &str, entry: &KeymapSection) -> Result<CustomKeymap, Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    let normal = parse_mode_bindings("normal", entry.normal.as_ref(), &mut errors);
    let edit = parse_mode_bindings("edit", entry.edit.as_ref(), &mut errors);
    let search = parse_mode_bindings("search", entry.search.as_ref(), &mut errors);
    let total_bindings = normal.len() + edit.len() + search.len();
    if total_bindings > MAX_TOTAL_BINDINGS {
        errors.push(format!(
            "Too many total bindings: {} (max {})",
            total_bindings, MAX_TOTAL_BINDINGS
        ));
    }

    if errors.is_empty() {
        Ok(CustomKeymap {
            name: name.to_string(),
            description: entry.description.clone(),
            bindings: KeymapBindings {
                normal,
                edit,
                search,
            },
        })
    } else {
        Err(errors)
    }
}

fn parse_mode_bindings(
    mode: &str,
    raw: Option<&HashMap<String, String>>,
    errors: &mut Vec<String>,
) -> Vec<Binding> {
    let mut bindings: Vec<Binding> = Vec::new();
    let Some(raw) = raw else {
        return bindings;
    };
    if raw.len() > MAX_BINDINGS_PER_MODE {
        errors.push(format!(
            "Too many {} bindings: {} (max {})",
            mode,
            raw.len(),
            MAX_BINDINGS_PER_MODE
        ));
        return bindings;
    }
    for (combo_str, action_str) in raw {
        match (parse_key_combo(combo_str), action_from_str(action_str)) {
            (Ok(combo), Some(action)) => {
                if bindings.iter().any(|binding| binding.combo == combo) {
                    errors.push(format!(
                        "Duplicate key '{}' in {} bindings",
                        combo.display(),
                        mode
                    ));
                    continue;
                }
                bindings.push(Binding { combo, action });
            }
            (Ok(_), None) => errors.push(format!(
                "Invalid action '{}' in {} bindings",
                action_str, mode
            )),
            (Err(err), _) => errors.push(format!(
                "Invalid key '{}' in {} bindings: {}",
                combo_str, mode, err
            )),
        }
    }
    bindings
}

fn parse_key_combo(input: &str) -> Result<KeyCombo, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("empty key".to_string());
    }
    if let Some(ch) = parse_single_char(trimmed) {
        return Ok(KeyCombo {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::empty(),
        });
    }

    let (modifiers, key_part) = if !trimmed.contains('-') {
        (KeyModifiers::empty(), trimmed)
    } else if let Some(mod_str) = trimmed.strip_suffix('-') {
        // "C--" binds the dash key itself.
        let mod_str = mod_str.trim_end_matches('-');
        if mod_str.is_empty() {
            return Err("missing modifier before '-'".to_string());
        }
        (parse_modifiers(mod_str)?, "-")
    } else {
        let mut split = trimmed.rsplitn(2, '-');
        let key_part = split.next().ok_or_else(|| "empty key".to_string())?;
        let mod_str = split.next().unwrap_or_default();
        (parse_modifiers(mod_str)?, key_part)
    };

    Ok(KeyCombo {
        code: parse_key_code(key_part)?,
        modifiers,
    })
}

fn parse_modifiers(input: &str) -> Result<KeyModifiers, String> {
    let mut modifiers = KeyModifiers::empty();
    for part in input.split('-') {
        let raw = part.trim();
        if raw.is_empty() {
            return Err("empty modifier segment".to_string());
        }
        let flag = match raw.to_ascii_lowercase().as_str() {
            "c" | "ctrl" | "control" => KeyModifiers::CONTROL,
            "m" | "alt" | "meta" => KeyModifiers::ALT,
            "s" | "shift" => KeyModifiers::SHIFT,
            _ => return Err(format!("unknown modifier '{}'", part)),
        };
        if modifiers.contains(flag) {
            return Err(format!("duplicate modifier '{}'", raw));
        }
        modifiers.insert(flag);
    }
    if modifiers.is_empty() {
        return Err("empty modifier".to_string());
    }
    Ok(modifiers)
}

fn parse_key_code(input: &str) -> Result<KeyCode, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("empty key".to_string());
    }
    if let Some(ch) = parse_single_char(trimmed) {
        return Ok(KeyCode::Char(ch));
    }
    let norm = trimmed.to_ascii_lowercase();
    if let Some(n) = norm.strip_prefix('f').and_then(|n| n.parse::<u8>().ok())
        && (1..=12).contains(&n)
    {
        return Ok(KeyCode::F(n));
    }
    match norm.as_str() {
        "enter" | "return" => Ok(KeyCode::Enter),
        "esc" | "escape" => Ok(KeyCode::Esc),
        "backspace" => Ok(KeyCode::Backspace),
        "delete" => Ok(KeyCode::Delete),
        "tab" => Ok(KeyCode::Tab),
        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" => Ok(KeyCode::PageUp),
        "pagedown" => Ok(KeyCode::PageDown),
        "left" => Ok(KeyCode::Left),
        "right" => Ok(KeyCode::Right),
        "up" => Ok(KeyCode::Up),
        "down" => Ok(KeyCode::Down),
        "space" | "spc" => Ok(KeyCode::Char(' ')),
        "dash" | "minus" => Ok(KeyCode::Char('-')),
        "plus" => Ok(KeyCode::Char('+')),
        "greater" => Ok(KeyCode::Char('>')),
        "less" => Ok(KeyCode::Char('<')),
        "equal" => Ok(KeyCode::Char('=')),
        "slash" => Ok(KeyCode::Char('/')),
        "question" => Ok(KeyCode::Char('?')),
        "lbracket" | "leftbracket" => Ok(KeyCode::Char('[')),
        "rbracket" | "rightbracket" => Ok(KeyCode::Char(']')),
        _ => Err(format!("unknown key '{}'", input)),
    }
}

fn parse_single_char(input: &str) -> Option<char> {
    let mut chars = input.chars();
    let ch = chars.next()?;
    if chars.next().is_none() {
        Some(ch)
    } else {
        None
    }
}

pub(crate) fn action_from_str(input: &str) -> Option<Action> {
    match input.trim().to_ascii_lowercase().as_str() {
        "cancel" => Some(Action::Cancel),
        "enter_edit" => Some(Action::EnterEdit),
        "commit_edit" => Some(Action::CommitEdit),
        "select_cell" => Some(Action::SelectCell),
        "enter_search" => Some(Action::EnterSearch),
        "undo" => Some(Action::Undo),
        "redo" => Some(Action::Redo),
        "align_left" => Some(Action::Align(TextAlign::Left)),
        "align_center" => Some(Action::Align(TextAlign::Center)),
        "align_right" => Some(Action::Align(TextAlign::Right)),
        "prev_page" => Some(Action::PrevPage),
        "next_page" => Some(Action::NextPage),
        "move_left" => Some(Action::Move(-1, 0)),
        "move_right" => Some(Action::Move(1, 0)),
        "move_up" => Some(Action::Move(0, -1)),
        "move_down" => Some(Action::Move(0, 1)),
        "first_cell" => Some(Action::FirstCell),
        "last_cell" => Some(Action::LastCell),
        "help" => Some(Action::Help),
        "quit" => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    struct TempConfig(PathBuf);

    impl TempConfig {
        fn new(name: &str, content: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "pagegrid_{}_{}.toml",
                name,
                std::process::id()
            ));
            std::fs::write(&path, content).expect("write temp config");
            TempConfig(path)
        }
    }

    impl Drop for TempConfig {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    #[test_case("C-s", KeyCode::Char('s'), KeyModifiers::CONTROL ; "ctrl")]
    #[test_case("M-p", KeyCode::Char('p'), KeyModifiers::ALT ; "alt")]
    #[test_case("Enter", KeyCode::Enter, KeyModifiers::NONE ; "named key")]
    #[test_case("-", KeyCode::Char('-'), KeyModifiers::NONE ; "bare dash")]
    #[test_case("C--", KeyCode::Char('-'), KeyModifiers::CONTROL ; "ctrl dash")]
    #[test_case("é", KeyCode::Char('é'), KeyModifiers::NONE ; "unicode char")]
    #[test_case("F1", KeyCode::F(1), KeyModifiers::NONE ; "function key")]
    #[test_case("ctrl-shift-z", KeyCode::Char('z'), KeyModifiers::CONTROL.union(KeyModifiers::SHIFT) ; "long modifiers")]
    fn parses_key_combo(input: &str, code: KeyCode, modifiers: KeyModifiers) {
        let combo = parse_key_combo(input).expect("combo");
        assert_eq!(combo.code, code);
        assert_eq!(combo.modifiers, modifiers);
    }

    #[test_case("C-NotAKey", "unknown key")]
    #[test_case("--", "missing modifier")]
    #[test_case("C-C-s", "duplicate modifier")]
    #[test_case("X-s", "unknown modifier")]
    fn rejects_bad_key_combo(input: &str, message: &str) {
        let err = parse_key_combo(input).unwrap_err();
        assert!(err.contains(message), "{err}");
    }

    #[test_case("align_right", Action::Align(TextAlign::Right))]
    #[test_case("move_left", Action::Move(-1, 0))]
    #[test_case(" Next_Page ", Action::NextPage)]
    fn parses_action_names(input: &str, expected: Action) {
        assert_eq!(action_from_str(input), Some(expected));
    }

    #[test]
    fn unknown_action_is_none() {
        assert_eq!(action_from_str("save"), None);
    }

    #[test]
    fn loads_custom_keymap_and_layout() {
        let config = TempConfig::new(
            "custom",
            r#"
[meta]
default = "mine"

[layout]
medium = 60
large = 100

[keymaps.mine]
description = "my bindings"

[keymaps.mine.normal]
"x" = "undo"
"C-x" = "redo"

[keymaps.mine.edit]
"Esc" = "cancel"
"#,
        );

        let loaded = load_config(None, Some(&config.0));
        assert!(loaded.warnings.is_empty(), "{:?}", loaded.warnings);
        assert_eq!(loaded.breakpoints, Breakpoints { medium: 60, large: 100 });
        let Keymap::Custom(custom) = loaded.keymap else {
            panic!("expected custom keymap");
        };
        assert_eq!(custom.name, "mine");
        assert_eq!(custom.description.as_deref(), Some("my bindings"));
        assert_eq!(custom.bindings.normal.len(), 2);
        assert_eq!(custom.bindings.edit.len(), 1);
        assert!(custom.bindings.search.is_empty());
    }

    #[test]
    fn missing_explicit_file_warns() {
        let path = std::env::temp_dir().join("pagegrid_does_not_exist.toml");
        let loaded = load_config(None, Some(&path));
        assert_eq!(loaded.keymap, Keymap::Vim);
        assert_eq!(loaded.breakpoints, Breakpoints::TERMINAL);
        assert!(loaded.warnings.iter().any(|w| w.contains("not found")));
    }

    #[test]
    fn unknown_requested_keymap_falls_back_with_warning() {
        let config = TempConfig::new(
            "fallback",
            r#"
[meta]
default = "vim"

[keymaps.vim]
description = "Vim defaults"
"#,
        );

        let loaded = load_config(Some("nonexistent"), Some(&config.0));
        assert_eq!(loaded.keymap, Keymap::Vim);
        assert!(!loaded.warnings.is_empty());
    }

    #[test]
    fn rejects_oversized_file() {
        let config = TempConfig::new(
            "large",
            &"a".repeat(MAX_KEYMAP_FILE_BYTES as usize + 1),
        );

        let loaded = load_config(None, Some(&config.0));
        assert_eq!(loaded.keymap, Keymap::Vim);
        assert!(
            loaded
                .warnings
                .iter()
                .any(|w| w.contains("file too large") && w.contains("Refusing to read"))
        );
    }

    #[test]
    fn rejects_excessive_bindings() {
        let mut content = String::from("[keymaps.big.normal]\n");
        for i in 0..=MAX_BINDINGS_PER_MODE {
            content.push_str(&format!("\"C-{}\" = \"undo\"\n", i));
        }
        let config = TempConfig::new("many", &content);

        let loaded = load_config(Some("big"), Some(&config.0));
        assert_eq!(loaded.keymap, Keymap::Vim);
        assert!(
            loaded
                .warnings
                .iter()
                .any(|w| w.contains("Too many normal bindings"))
        );
    }

    #[test]
    fn rejects_duplicate_key_combos() {
        let config = TempConfig::new(
            "dups",
            r#"
[keymaps.dup.normal]
"C-s" = "undo"
"ctrl-s" = "redo"
"#,
        );

        let loaded = load_config(Some("dup"), Some(&config.0));
        assert_eq!(loaded.keymap, Keymap::Vim);
        assert!(
            loaded
                .warnings
                .iter()
                .any(|w| w.contains("Duplicate key") && w.contains("normal bindings"))
        );
    }

    #[test]
    fn warns_when_default_keymap_is_missing() {
        let config = TempConfig::new(
            "missing_default",
            r#"
[meta]
default = "nonexistent"
"#,
        );

        let loaded = load_config(None, Some(&config.0));
        assert_eq!(loaded.keymap, Keymap::Vim);
        assert!(
            loaded
                .warnings
                .iter()
                .any(|w| w.contains("Default keymap 'nonexistent' not found"))
        );
    }

    #[test]
    fn requested_builtin_does_not_warn() {
        let config = TempConfig::new(
            "builtin",
            r#"
[keymaps.custom]
description = "custom map"
"#,
        );

        let loaded = load_config(Some("emacs"), Some(&config.0));
        assert_eq!(loaded.keymap, Keymap::Emacs);
        assert!(loaded.warnings.is_empty());
    }

    #[test]
    fn rejects_unknown_fields() {
        let config = TempConfig::new(
            "unknown_field",
            r#"
[meta]
default = "vim"
extra = "not-allowed"
"#,
        );

        let loaded = load_config(None, Some(&config.0));
        assert_eq!(loaded.keymap, Keymap::Vim);
        assert!(loaded.warnings.iter().any(|w| w.contains("Failed to parse")));
    }

    #[test]
    fn inverted_breakpoints_fall_back() {
        let config = TempConfig::new(
            "bad_layout",
            r#"
[layout]
medium = 200
large = 100
"#,
        );

        let loaded = load_config(None, Some(&config.0));
        assert_eq!(loaded.breakpoints, Breakpoints::TERMINAL);
        assert!(
            loaded
                .warnings
                .iter()
                .any(|w| w.contains("Invalid layout breakpoints"))
        );
    }
}
