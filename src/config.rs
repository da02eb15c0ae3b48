//! User configuration — list keybindings, currency unit, and defaults.
//!
//! Stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/friend-split/config.toml` (default
//! `~/.config/friend-split/config.toml`).  A missing or unreadable file
//! falls back to the built-in defaults.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::seed::AVATAR_BASE;

// ───────────────────────────────────────── actions ───────────

/// Configurable actions available while the friend list has focus.
/// Form fields take raw text input and are not rebindable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    SelectFriend,
    ToggleAddForm,
    FocusForm,
    CloseForm,
    ShowHelp,
    Quit,
}

impl Action {
    /// Ordered list of all actions (used by the help popup and the writer).
    pub const ALL: &[Action] = &[
        Action::MoveUp,
        Action::MoveDown,
        Action::SelectFriend,
        Action::ToggleAddForm,
        Action::FocusForm,
        Action::CloseForm,
        Action::ShowHelp,
        Action::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::MoveUp => "Move Up",
            Action::MoveDown => "Move Down",
            Action::SelectFriend => "Select / Close Friend",
            Action::ToggleAddForm => "Add Friend / Hide",
            Action::FocusForm => "Focus Open Form",
            Action::CloseForm => "Close Open Form",
            Action::ShowHelp => "Help",
            Action::Quit => "Quit",
        }
    }

    fn config_key(self) -> &'static str {
        match self {
            Action::MoveUp => "move_up",
            Action::MoveDown => "move_down",
            Action::SelectFriend => "select_friend",
            Action::ToggleAddForm => "toggle_add_form",
            Action::FocusForm => "focus_form",
            Action::CloseForm => "close_form",
            Action::ShowHelp => "show_help",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// Named keys: (code, display label, config-file name).
const NAMED_KEYS: &[(KeyCode, &str, &str)] = &[
    (KeyCode::Char(' '), "Space", "Space"),
    (KeyCode::Up, "↑", "Up"),
    (KeyCode::Down, "↓", "Down"),
    (KeyCode::Left, "←", "Left"),
    (KeyCode::Right, "→", "Right"),
    (KeyCode::Enter, "Enter", "Enter"),
    (KeyCode::Esc, "Esc", "Esc"),
    (KeyCode::Tab, "Tab", "Tab"),
    (KeyCode::Backspace, "Bksp", "Backspace"),
    (KeyCode::Delete, "Del", "Delete"),
    (KeyCode::Home, "Home", "Home"),
    (KeyCode::End, "End", "End"),
];

/// A single key binding — key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    const MODIFIER_MASK: KeyModifiers = KeyModifiers::CONTROL
        .union(KeyModifiers::ALT)
        .union(KeyModifiers::SHIFT);

    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Only CTRL/ALT/SHIFT are compared.  SHIFT is ignored for character
    /// keys, since terminals disagree on whether `?` arrives with it.
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mut mask = Self::MODIFIER_MASK;
        if matches!(self.code, KeyCode::Char(_)) {
            mask.remove(KeyModifiers::SHIFT);
        }
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// User-friendly display string (e.g. `"↑"`, `"Ctrl+c"`, `"q"`).
    pub fn display(&self) -> String {
        self.render(|k| k.1)
    }

    fn to_config_string(&self) -> String {
        self.render(|k| k.2)
    }

    fn render(&self, pick: fn(&(KeyCode, &'static str, &'static str)) -> &'static str) -> String {
        let mut s = String::new();
        for (flag, prefix) in [
            (KeyModifiers::CONTROL, "Ctrl+"),
            (KeyModifiers::ALT, "Alt+"),
            (KeyModifiers::SHIFT, "Shift+"),
        ] {
            if self.modifiers.contains(flag) {
                s.push_str(prefix);
            }
        }
        match NAMED_KEYS.iter().find(|k| k.0 == self.code) {
            Some(entry) => s.push_str(pick(entry)),
            None => match self.code {
                KeyCode::Char(c) => s.push(c),
                KeyCode::F(n) => s.push_str(&format!("F{n}")),
                other => s.push_str(&format!("{other:?}")),
            },
        }
        s
    }

    /// Parse a key string like `"Ctrl+c"`, `"Up"`, `"q"`, `"Enter"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let (key_part, mods) = parts.split_last()?;

        for part in mods {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let lower = key_part.to_lowercase();
        let code = match lower.as_str() {
            "return" => KeyCode::Enter,
            "escape" => KeyCode::Esc,
            "bksp" => KeyCode::Backspace,
            "del" => KeyCode::Delete,
            named if NAMED_KEYS.iter().any(|k| k.2.eq_ignore_ascii_case(named)) => {
                NAMED_KEYS.iter().find(|k| k.2.eq_ignore_ascii_case(named))?.0
            }
            f if f.starts_with('f') && f.len() > 1 => KeyCode::F(f[1..].parse().ok()?),
            _ => {
                let mut chars = key_part.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                KeyCode::Char(c)
            }
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── config ────────────

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Currency unit appended to every amount.
    pub currency: String,
    /// Initial value of the image field in the add-friend form.
    pub default_image: String,
    /// Start with the sample friends.
    pub seed_friends: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            currency: "€".into(),
            default_image: AVATAR_BASE.into(),
            seed_friends: true,
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        m.insert(MoveUp, vec![KeyBind::new(Up, n), KeyBind::new(Char('k'), n)]);
        m.insert(MoveDown, vec![KeyBind::new(Down, n), KeyBind::new(Char('j'), n)]);
        m.insert(SelectFriend, vec![KeyBind::new(Enter, n), KeyBind::new(Char(' '), n)]);
        m.insert(ToggleAddForm, vec![KeyBind::new(Char('a'), n)]);
        m.insert(FocusForm, vec![KeyBind::new(Tab, n)]);
        m.insert(CloseForm, vec![KeyBind::new(Esc, n)]);
        m.insert(ShowHelp, vec![KeyBind::new(Char('?'), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n)]);

        m
    }

    /// Find the action bound to a key event.  The binding with the most
    /// modifiers wins when several match.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .flat_map(|(&action, binds)| binds.iter().map(move |b| (action, b)))
            .filter(|(_, bind)| bind.matches(event))
            .max_by_key(|(_, bind)| bind.modifiers.bits().count_ones())
            .map(|(action, _)| action)
    }

    /// Format the binding list for a given action (e.g. `"↑/k"`).
    pub fn display_bindings(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => {
                binds.iter().map(|b| b.display()).collect::<Vec<_>>().join("/")
            }
            _ => "unbound".into(),
        }
    }

    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Status-bar hint for the friend list.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}: navigate | {}: select | {}: add friend | {}: help | {}: quit",
            self.short_binding(Action::MoveUp),
            self.short_binding(Action::SelectFriend),
            self.short_binding(Action::ToggleAddForm),
            self.short_binding(Action::ShowHelp),
            self.short_binding(Action::Quit),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) => {
                tracing::debug!("no config at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Write the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.serialise())?;
        Ok(())
    }

    pub fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            match key {
                "currency" => {
                    config.currency = value.to_string();
                    continue;
                }
                "default_image" => {
                    if !value.is_empty() {
                        config.default_image = value.to_string();
                    }
                    continue;
                }
                "seed_friends" => {
                    config.seed_friends = value == "true";
                    continue;
                }
                _ => {}
            }

            let Some(action) = Action::from_config_key(key) else {
                tracing::debug!("ignoring unknown config key {key:?}");
                continue;
            };

            let parsed: Vec<KeyBind> = value
                .split(',')
                .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                .collect();
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# friend-split configuration".to_string(),
            String::new(),
            format!("currency = \"{}\"", self.currency),
            format!("default_image = \"{}\"", self.default_image),
            format!("seed_friends = {}", self.seed_friends),
            String::new(),
            "# Friend list key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/friend-split/config.toml`).
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join(env!("CARGO_PKG_NAME")).join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn defaults_match_list_keys() {
        let config = AppConfig::default();
        assert_eq!(config.match_key(key(KeyCode::Char('j'))), Some(Action::MoveDown));
        assert_eq!(config.match_key(key(KeyCode::Enter)), Some(Action::SelectFriend));
        assert_eq!(config.match_key(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn shifted_question_mark_opens_help() {
        let config = AppConfig::default();
        let ev = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(config.match_key(ev), Some(Action::ShowHelp));
    }

    #[test]
    fn parse_overrides_settings_and_bindings() {
        let config = AppConfig::parse(
            "# comment\ncurrency = \"$\"\nseed_friends = false\nquit = Ctrl+q, x\nbogus = 1\n",
        );
        assert_eq!(config.currency, "$");
        assert!(!config.seed_friends);
        assert_eq!(
            config.bindings[&Action::Quit],
            vec![
                KeyBind::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
                KeyBind::new(KeyCode::Char('x'), KeyModifiers::NONE),
            ]
        );
        assert_eq!(config.bindings[&Action::MoveUp], AppConfig::default_bindings()[&Action::MoveUp]);
    }

    #[test]
    fn unparsable_binding_keeps_default() {
        let config = AppConfig::parse("move_up = Hyper+Up\n");
        assert_eq!(config.bindings[&Action::MoveUp], AppConfig::default_bindings()[&Action::MoveUp]);
    }

    #[test]
    fn serialised_config_parses_back() {
        let mut config = AppConfig::default();
        config.currency = "CHF".into();
        config.bindings.insert(Action::ShowHelp, vec![KeyBind::new(KeyCode::F(1), KeyModifiers::NONE)]);

        let parsed = AppConfig::parse(&config.serialise());
        assert_eq!(parsed.currency, "CHF");
        assert_eq!(parsed.default_image, AVATAR_BASE);
        for &action in Action::ALL {
            assert_eq!(parsed.bindings[&action], config.bindings[&action], "{action:?}");
        }
    }

    #[test]
    fn display_uses_arrows_and_modifiers() {
        let bind = KeyBind::new(KeyCode::Up, KeyModifiers::ALT);
        assert_eq!(bind.display(), "Alt+↑");
        assert_eq!(bind.to_config_string(), "Alt+Up");
        assert_eq!(AppConfig::default().display_bindings(Action::MoveUp), "↑/k");
    }
}
