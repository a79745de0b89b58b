//! Keybinding system for context-aware keyboard shortcuts
//!
//! Maps terminal keys to calculator commands and UI actions. The same
//! registry feeds the nav bar, the keypad legend and the help overlay, so a
//! key shown on screen is always the key that works.

use crate::app::AppMode;
use crate::engine::{BinaryOp, Command, NilaryOp, UnaryOp};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Send a command to the engine
    Calc(Command),
    /// Ask for a variable name, then store X
    StorePrompt,
    /// Ask for a variable name, then recall it
    RecallPrompt,
    Help,
    Cancel,
    Quit,
}

/// Help/legend grouping of a binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingGroup {
    Entry,
    Arithmetic,
    Functions,
    Stack,
    General,
}

impl BindingGroup {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Entry => "Entry",
            Self::Arithmetic => "Arithmetic",
            Self::Functions => "Functions",
            Self::Stack => "Stack",
            Self::General => "General",
        }
    }
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Shortcut for a plain character key bound to a command
    fn calc(c: char, command: Command, description: &str) -> Self {
        Self::new(KeyCode::Char(c), KeyAction::Calc(command), &c.to_string(), description)
    }

    /// Whether this binding fires for `event`.
    ///
    /// Shift is ignored: terminals report it inconsistently for symbols and
    /// capitals already arrive as distinct characters.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key == event.code && event.modifiers.difference(KeyModifiers::SHIFT) == self.modifiers
    }

    pub fn group(&self) -> BindingGroup {
        match &self.action {
            KeyAction::Calc(command) => match command {
                Command::Digit(_)
                | Command::DecimalSeparator
                | Command::ToggleSign
                | Command::ClearEntry
                | Command::Enter => BindingGroup::Entry,
                Command::Binary(_) => BindingGroup::Arithmetic,
                Command::Unary(_) | Command::Nilary(_) => BindingGroup::Functions,
                _ => BindingGroup::Stack,
            },
            KeyAction::StorePrompt | KeyAction::RecallPrompt => BindingGroup::Stack,
            KeyAction::Help | KeyAction::Cancel | KeyAction::Quit => BindingGroup::General,
        }
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "^C",
                "Quit",
            ),
            Keybinding::new(KeyCode::Esc, KeyAction::Cancel, "Esc", "Close help / cancel"),
        ];

        let mut normal: Vec<Keybinding> = ('0'..='9')
            .map(|d| Keybinding::calc(d, Command::Digit(d.to_string()), "Digit"))
            .collect();

        normal.extend([
            Keybinding::calc(',', Command::DecimalSeparator, "Decimal separator"),
            Keybinding::calc('.', Command::DecimalSeparator, "Decimal separator"),
            Keybinding::calc('n', Command::ToggleSign, "± Change sign"),
            Keybinding::new(
                KeyCode::Backspace,
                KeyAction::Calc(Command::ClearEntry),
                "Bksp",
                "CLR Clear entry",
            ),
            Keybinding::new(KeyCode::Enter, KeyAction::Calc(Command::Enter), "Enter", "Enter number"),
            // Arithmetic
            Keybinding::calc('+', Command::Binary(BinaryOp::Add), "+ Add"),
            Keybinding::calc('-', Command::Binary(BinaryOp::Subtract), "− Subtract"),
            Keybinding::calc('*', Command::Binary(BinaryOp::Multiply), "× Multiply"),
            Keybinding::calc('/', Command::Binary(BinaryOp::Divide), "÷ Divide"),
            Keybinding::calc('^', Command::Binary(BinaryOp::Power), "yˣ Power"),
            Keybinding::calc('Y', Command::Binary(BinaryOp::Root), "ˣ√y Root"),
            // Functions
            Keybinding::calc('s', Command::Unary(UnaryOp::Square), "x² Square"),
            Keybinding::calc('r', Command::Unary(UnaryOp::SquareRoot), "√x Square root"),
            Keybinding::calc('L', Command::Unary(UnaryOp::Log10), "log x Common log"),
            Keybinding::calc('l', Command::Unary(UnaryOp::Ln), "ln x Natural log"),
            Keybinding::calc('g', Command::Unary(UnaryOp::Exp10), "10ˣ Power of ten"),
            Keybinding::calc('G', Command::Unary(UnaryOp::Exp), "eˣ Exponential"),
            Keybinding::calc('S', Command::Unary(UnaryOp::Sine), "sin Sine"),
            Keybinding::calc('c', Command::Unary(UnaryOp::Cosine), "cos Cosine"),
            Keybinding::calc('t', Command::Unary(UnaryOp::Tangent), "tan Tangent"),
            Keybinding::calc('I', Command::Unary(UnaryOp::ArcSine), "sin⁻¹ Arc sine"),
            Keybinding::calc('O', Command::Unary(UnaryOp::ArcCosine), "cos⁻¹ Arc cosine"),
            Keybinding::calc('A', Command::Unary(UnaryOp::ArcTangent), "tan⁻¹ Arc tangent"),
            Keybinding::calc('p', Command::Nilary(NilaryOp::Pi), "π Pi"),
            Keybinding::calc('E', Command::Nilary(NilaryOp::E), "e Euler's number"),
            // Stack
            Keybinding::calc('x', Command::Swap, "x↔y Swap X and Y"),
            Keybinding::calc('d', Command::Duplicate, "DUP Duplicate X"),
            Keybinding::new(KeyCode::Delete, KeyAction::Calc(Command::Drop), "Del", "DROP Drop X"),
            Keybinding::calc('R', Command::Roll, "R↓ Roll stack"),
            Keybinding::calc('X', Command::ClearX, "CLx Clear X"),
            Keybinding::calc('K', Command::ClearStack, "CLST Clear Y, Z, T"),
            Keybinding::with_modifiers(
                KeyCode::Char('s'),
                KeyModifiers::CONTROL,
                KeyAction::StorePrompt,
                "^S",
                "STO Store X",
            ),
            Keybinding::with_modifiers(
                KeyCode::Char('r'),
                KeyModifiers::CONTROL,
                KeyAction::RecallPrompt,
                "^R",
                "RCL Recall variable",
            ),
            // General
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
        ]);

        self.mode_bindings.insert(AppMode::Normal, normal);

        // Prompts read any character as the name; only Esc and ^C are bound
        self.mode_bindings.insert(AppMode::StoreName, Vec::new());
        self.mode_bindings.insert(AppMode::RecallName, Vec::new());
    }

    /// Get all keybindings for a mode (mode-specific first, then global)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = self
            .mode_bindings
            .get(mode)
            .map(|b| b.iter().collect())
            .unwrap_or_default();
        bindings.extend(self.global_bindings.iter());
        bindings
    }

    /// Find the action bound to `event` in `mode`
    pub fn resolve(&self, mode: &AppMode, event: &KeyEvent) -> Option<&KeyAction> {
        self.get_bindings(mode)
            .into_iter()
            .find(|b| b.matches(event))
            .map(|b| &b.action)
    }

    /// First key bound to `command` in normal mode, for the keypad legend.
    ///
    /// Store and recall are reached through their name prompts.
    pub fn key_for(&self, command: &Command) -> Option<&str> {
        self.get_bindings(&AppMode::Normal)
            .into_iter()
            .find(|b| match (&b.action, command) {
                (KeyAction::Calc(bound), _) => bound == command,
                (KeyAction::StorePrompt, Command::Store(_)) => true,
                (KeyAction::RecallPrompt, Command::Recall(_)) => true,
                _ => false,
            })
            .map(|b| b.display.as_str())
    }

    /// Get navigation bar items for a mode
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        let shown: &[&str] = match mode {
            AppMode::Normal => &["Enter", "Bksp", "Del", "?", "Q"],
            AppMode::StoreName | AppMode::RecallName => &["Esc", "^C"],
        };

        self.get_bindings(mode)
            .into_iter()
            .filter(|b| shown.contains(&b.display.as_str()))
            .map(|b| NavBarItem {
                key_display: b.display.clone(),
                action_label: b.description.clone(),
            })
            .collect()
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let groups = [
            BindingGroup::Entry,
            BindingGroup::Arithmetic,
            BindingGroup::Functions,
            BindingGroup::Stack,
            BindingGroup::General,
        ];

        let bindings = self.get_bindings(mode);
        let mut sections = Vec::new();

        for group in groups {
            let mut items: Vec<(String, String)> = Vec::new();
            for binding in bindings.iter().filter(|b| b.group() == group) {
                // Collapse the ten digit keys into one line
                if let KeyAction::Calc(Command::Digit(_)) = binding.action {
                    if items.iter().any(|(key, _)| key == "0-9") {
                        continue;
                    }
                    items.push(("0-9".to_string(), binding.description.clone()));
                    continue;
                }
                items.push((binding.display.clone(), binding.description.clone()));
            }

            if !items.is_empty() {
                sections.push(HelpSection {
                    title: group.title().to_string(),
                    items,
                });
            }
        }

        sections
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}
