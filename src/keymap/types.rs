//! Core types for keyboard input: Keystroke, Modifiers, KeyCode

use std::fmt;
use std::str::FromStr;

/// Modifier keys held alongside a keystroke
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    /// Cmd on macOS, Win elsewhere
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
        alt: false,
        meta: false,
    };

    /// The platform "command" modifier (Cmd on macOS, Ctrl elsewhere)
    pub fn cmd() -> Modifiers {
        if cfg!(target_os = "macos") {
            Modifiers {
                meta: true,
                ..Modifiers::NONE
            }
        } else {
            Modifiers {
                ctrl: true,
                ..Modifiers::NONE
            }
        }
    }

    pub fn has_cmd(self) -> bool {
        if cfg!(target_os = "macos") {
            self.meta
        } else {
            self.ctrl
        }
    }

    pub fn is_empty(self) -> bool {
        self == Modifiers::NONE
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meta = if cfg!(target_os = "macos") { "Cmd" } else { "Win" };
        let held = [
            (self.ctrl, "Ctrl"),
            (self.shift, "Shift"),
            (self.alt, "Alt"),
            (self.meta, meta),
        ];
        let names: Vec<&str> = held
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, name)| *name)
            .collect();
        f.write_str(&names.join("+"))
    }
}

/// A key the grid reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character key
    Char(char),

    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    Up,
    Down,
    Left,
    Right,

    // Function keys
    F(u8),
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(c) => write!(f, "{}", c.to_uppercase()),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Escape => write!(f, "Escape"),
            KeyCode::Tab => write!(f, "Tab"),
            KeyCode::Backspace => write!(f, "Backspace"),
            KeyCode::Delete => write!(f, "Delete"),
            KeyCode::Up => write!(f, "ArrowUp"),
            KeyCode::Down => write!(f, "ArrowDown"),
            KeyCode::Left => write!(f, "ArrowLeft"),
            KeyCode::Right => write!(f, "ArrowRight"),
            KeyCode::F(n) => write!(f, "F{}", n),
        }
    }
}

/// A single keystroke: a key with modifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keystroke {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Keystroke {
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    /// Create a keystroke with no modifiers
    pub const fn key(key: KeyCode) -> Self {
        Self {
            key,
            mods: Modifiers::NONE,
        }
    }

    pub fn char(c: char) -> Self {
        Self {
            key: KeyCode::Char(c),
            mods: Modifiers::NONE,
        }
    }

    /// Platform command key plus a character (Cmd+C on macOS, Ctrl+C elsewhere)
    pub fn cmd_char(c: char) -> Self {
        Self {
            key: KeyCode::Char(c.to_ascii_lowercase()),
            mods: Modifiers::cmd(),
        }
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.mods.is_empty() {
            write!(f, "{}+{}", self.mods, self.key)
        } else {
            write!(f, "{}", self.key)
        }
    }
}

/// Error for an unparseable key string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid key: {0}")]
pub struct InvalidKey(pub String);

impl FromStr for Keystroke {
    type Err = InvalidKey;

    /// Parse a key string like "ArrowDown", "F2" or "cmd+c"
    fn from_str(key_str: &str) -> Result<Self, Self::Err> {
        let mut mods = Modifiers::NONE;
        let mut key_part = None;

        for part in key_str.trim().split('+') {
            let part_lower = part.to_lowercase();
            match part_lower.as_str() {
                "cmd" => {
                    let cmd = Modifiers::cmd();
                    mods.ctrl |= cmd.ctrl;
                    mods.meta |= cmd.meta;
                }
                "ctrl" | "control" => mods.ctrl = true,
                "shift" => mods.shift = true,
                "alt" | "option" | "opt" => mods.alt = true,
                "meta" | "super" | "win" => mods.meta = true,
                _ => {
                    if key_part.is_some() {
                        return Err(InvalidKey(key_str.to_string()));
                    }
                    key_part = Some(parse_key_code(part, &part_lower)?);
                }
            }
        }

        let key = key_part.ok_or_else(|| InvalidKey(key_str.to_string()))?;
        Ok(Keystroke::new(key, mods))
    }
}

fn parse_key_code(raw: &str, lower: &str) -> Result<KeyCode, InvalidKey> {
    let mut chars = raw.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    match lower {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Escape),
        "tab" => Ok(KeyCode::Tab),
        "backspace" | "back" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "space" => Ok(KeyCode::Char(' ')),

        "up" | "arrowup" => Ok(KeyCode::Up),
        "down" | "arrowdown" => Ok(KeyCode::Down),
        "left" | "arrowleft" => Ok(KeyCode::Left),
        "right" | "arrowright" => Ok(KeyCode::Right),

        _ => lower
            .strip_prefix('f')
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| (1..=24).contains(n))
            .map(KeyCode::F)
            .ok_or_else(|| InvalidKey(raw.to_string())),
    }
}
