use crate::app::action::Action;
use crate::app::hit::{HitMap, Panel};
use crate::catalog::Catalog;
use crate::config::{AppConfig, TimingConfig};
use crate::widgets::cart::Cart;
use crate::widgets::gallery::{Gallery, GalleryTiming};
use crate::widgets::modal::{Modal, Prompt};
use crate::widgets::notify::{Notifier, Severity};
use crate::widgets::ripple::Ripples;
use crate::widgets::stats::Stats;
use crate::widgets::todo::{TodoList, TodoTiming};
use chrono::Local;
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// Single-line text input. `cursor` is a byte offset on a char boundary.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Display columns between the start of the text and the cursor.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].width()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
    TodoInput,
    Page,
}

/// Per-panel scroll offsets, in rows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scroll {
    pub todo: usize,
    pub gallery: usize,
    pub cart: usize,
}

/// Everything the board owns. Handlers receive it by `&mut`; each widget is
/// an independent container inside it.
pub struct AppState {
    pub config: AppConfig,
    pub catalog: Catalog,
    pub todos: TodoList,
    pub gallery: Gallery,
    pub cart: Cart,
    pub notifier: Notifier,
    pub ripples: Ripples,
    pub modal: Modal,
    pub prompt: Option<Prompt>,
    pub input: InputState,
    pub focus: Focus,
    /// Hit areas from the last draw.
    pub hits: HitMap,
    pub hovered: Option<Action>,
    pub scroll: Scroll,
    pub clicks: u64,
    pub clock: Duration,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let t = &config.timing;
        let todos = TodoList::new(TodoTiming {
            enter: TimingConfig::ms(t.todo_enter_ms),
            exit: TimingConfig::ms(t.todo_exit_ms),
        });
        let gallery = Gallery::new(
            GalleryTiming {
                exit_stagger: TimingConfig::ms(t.card_exit_stagger_ms),
                exit: TimingConfig::ms(t.card_exit_ms),
                settle: TimingConfig::ms(t.gallery_settle_ms),
                enter_stagger: TimingConfig::ms(t.card_enter_stagger_ms),
                enter: TimingConfig::ms(t.card_enter_ms),
            },
            config.gallery.supersede_stale_loads,
        );
        let cart = Cart::new(TimingConfig::ms(t.cart_feedback_ms));
        let notifier = Notifier::new(TimingConfig::ms(t.notification_ms));
        let ripples = Ripples::new(TimingConfig::ms(t.ripple_ms));
        let catalog = Catalog::new(config.products.clone(), config.gallery.categories.clone());

        Self {
            config,
            catalog,
            todos,
            gallery,
            cart,
            notifier,
            ripples,
            modal: Modal::default(),
            prompt: None,
            input: InputState::new(),
            focus: Focus::TodoInput,
            hits: HitMap::default(),
            hovered: None,
            scroll: Scroll::default(),
            clicks: 0,
            clock: Duration::ZERO,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn stats(&self) -> Stats {
        Stats::collect(&self.todos, &self.gallery, &self.cart, self.clicks)
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.notifier.show(message, severity);
        self.dirty = true;
    }

    /// Move every widget's clock forward and run whatever became due.
    pub fn advance(&mut self, elapsed: Duration) {
        let animating = self.is_animating();
        self.clock += elapsed;
        let now = self.clock;
        self.todos.advance(now);
        self.gallery.advance(now);
        self.cart.advance(now);
        self.notifier.advance(now);
        self.ripples.advance(now);
        if animating {
            self.dirty = true;
        }
    }

    pub fn is_animating(&self) -> bool {
        self.todos.is_animating()
            || self.gallery.is_animating()
            || self.cart.is_animating()
            || self.notifier.is_animating()
            || self.ripples.is_animating()
    }

    pub fn timestamp(&self) -> String {
        Local::now().format(&self.config.ui.timestamp_format).to_string()
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::TodoInput => Focus::Page,
            Focus::Page => Focus::TodoInput,
        };
        self.dirty = true;
    }

    /// Scroll `panel` by `delta` rows, clamped to the content rows it had in
    /// the last draw. Gallery rows are rows of cards, so that count depends
    /// on the panel width.
    pub fn scroll_panel(&mut self, panel: Panel, delta: isize) {
        let max = self.hits.panel_rows(panel).saturating_sub(1);
        let offset = match panel {
            Panel::Todo => &mut self.scroll.todo,
            Panel::Gallery => &mut self.scroll.gallery,
            Panel::Cart => &mut self.scroll.cart,
        };
        *offset = offset.saturating_add_signed(delta).min(max);
        self.dirty = true;
    }
}
