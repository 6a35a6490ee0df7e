//! The secret generator panel: state, key handling and rendering.

use std::cmp::Ordering;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::clipboard::{ClipboardController, ClipboardSink};
use crate::config::{Configuration, ConfigurationState, Length};
use crate::rand::RandomSource;
use crate::secret::CharClass;
use crate::terminal::{INNER_WIDTH, box_bottom, box_line, box_rule, box_top};
use crate::theme::{ColorSchemeQuery, Palette, ThemeController};

use LoopAction::*;
pub enum LoopAction {
    Break,
    Continue,
}

const HELP: &str = "←/→ length • Home/End min/max • r regenerate • c copy • q quit";

pub struct Widget<R, C> {
    state: ConfigurationState<R>,
    clipboard: ClipboardController<C>,
    theme: ThemeController,
    palette: Palette,
    notice: Option<String>,
}

impl<R: RandomSource, C: ClipboardSink> Widget<R, C> {
    pub fn new(config: Configuration, rng: R, sink: C, scheme: &dyn ColorSchemeQuery) -> Self {
        let theme = ThemeController::new(scheme);
        Self {
            state: ConfigurationState::new(config, rng),
            clipboard: ClipboardController::new(sink),
            palette: theme.current().palette(),
            theme,
            notice: None,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn tick(&mut self, now: Instant) {
        self.clipboard.tick(now);
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.clipboard.next_deadline()
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> LoopAction {
        if key.kind != KeyEventKind::Press {
            return Continue;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Break;
        }

        self.notice = None;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Break,
            KeyCode::Left | KeyCode::Down => self.state.step_length(-1),
            KeyCode::Right | KeyCode::Up => self.state.step_length(1),
            KeyCode::Home => self.state.set_length(Length::min()),
            KeyCode::End => self.state.set_length(Length::max()),
            KeyCode::Char('u') | KeyCode::Char('1') => self.state.toggle_class(CharClass::Uppercase),
            KeyCode::Char('l') | KeyCode::Char('2') => self.state.toggle_class(CharClass::Lowercase),
            KeyCode::Char('n') | KeyCode::Char('3') => self.state.toggle_class(CharClass::Numbers),
            KeyCode::Char('s') | KeyCode::Char('4') => self.state.toggle_class(CharClass::Special),
            KeyCode::Char('r') | KeyCode::Enter => self.state.regenerate(),
            KeyCode::Char('c') => self.copy(now),
            KeyCode::Char('t') => self.toggle_theme(),
            _ => {}
        }
        Continue
    }

    fn copy(&mut self, now: Instant) {
        if let Err(e) = self.clipboard.copy(self.state.secret(), now) {
            self.notice = Some(e.to_string());
        }
    }

    fn toggle_theme(&mut self) {
        let theme = self.theme.toggle();
        self.palette = theme.palette();
    }

    /// Frame lines, without background; the caller paints the palette.
    pub fn render(&self) -> Vec<String> {
        let p = &self.palette;
        let config = self.state.configuration();
        let secret = self.state.secret();
        let mut lines = Vec::with_capacity(20);

        lines.push(box_top("SECRET GENERATOR"));
        lines.push(box_line(""));
        if secret.is_empty() {
            lines.push(box_line(&p.paint(p.dim, "(no character classes selected)")));
        } else {
            lines.push(box_line(&p.paint(p.accent, secret.as_str())));
        }
        lines.push(box_line(""));

        let copy = if self.clipboard.acknowledged() {
            p.paint(p.copied, "[c] Copied!")
        } else {
            "[c] Copy".to_string()
        };
        lines.push(box_line(&format!("[r] Regenerate ↻    {copy}")));
        lines.push(box_rule());

        lines.push(box_line(&format!("Secret Length: {}", config.length.get())));
        lines.push(box_line(&slider(config.length, p)));
        lines.push(box_line(""));

        for (i, class) in CharClass::ALL.into_iter().enumerate() {
            let mark = if config.classes.get(class) { 'x' } else { ' ' };
            let key = class.label().chars().next().unwrap_or(' ').to_ascii_lowercase();
            lines.push(box_line(&format!(
                "[{mark}] {:<20} {}",
                class.label(),
                p.paint(p.dim, &format!("({key}/{})", i + 1))
            )));
        }
        lines.push(box_rule());

        let next = self.theme.current().toggled();
        lines.push(box_line(&p.paint(
            p.accent,
            &format!("[t] Switch to {} Mode", next.label()),
        )));
        match &self.notice {
            Some(notice) => {
                let notice: String = notice.chars().take(INNER_WIDTH).collect();
                lines.push(box_line(&p.paint(p.error, &notice)));
            }
            None => lines.push(box_line("")),
        }
        lines.push(box_line(&p.paint(p.dim, HELP)));
        lines.push(box_bottom());

        lines
    }
}

/// Range control: 4 ━━━━●────────── 50
fn slider(length: Length, p: &Palette) -> String {
    let mut filled = String::new();
    let mut rest = String::new();
    for v in Length::MIN..=Length::MAX {
        match v.cmp(&length.get()) {
            Ordering::Less => filled.push('━'),
            Ordering::Equal => filled.push('●'),
            Ordering::Greater => rest.push('─'),
        }
    }
    format!(
        "{} {}{} {}",
        Length::MIN,
        p.paint(p.accent, &filled),
        p.paint(p.dim, &rest),
        Length::MAX
    )
}
