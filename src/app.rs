use std::cell::Cell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, poll, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::{debug, info, warn};

use tui_hooks::config::Config;
use tui_hooks::events::{ClickOutside, EventKind, Hover, KeyPress, Listeners, OnScreen, ScrollPosition};
use tui_hooks::state::{Previous, Toggle, UpdateTrigger};
use tui_hooks::storage::{Storage, Stored};
use tui_hooks::task::{AsyncTask, Status};
use tui_hooks::theme::{Theme, ThemeVars};
use tui_hooks::timing::{Debounce, Throttle};
use tui_hooks::title::Title;
use tui_hooks::{History, StorageError};

use crate::input::{is_escape, EditResult, Editor};
use crate::ui;

/// Storage key for the committed value
const VALUE_KEY: &str = "value";

pub struct App {
    pub history: History<String>,
    pub editor: Editor,
    pub help: Toggle,
    pub help_outside: ClickOutside,
    pub help_hover: Hover,
    pub list_scroll: ScrollPosition,
    pub present_visible: OnScreen,
    pub timeline_key: KeyPress,
    pub previous: Previous<String>,
    pub theme: ThemeVars,
    pub message: Option<String>,
    pub status: String,
    pub should_quit: bool,
    theme_source: Theme,
    commit_gate: Debounce,
    status_gate: Throttle,
    redraw: UpdateTrigger,
    title: Title,
    base_title: String,
    listeners: Listeners,
    resized: Rc<Cell<bool>>,
    focus_lost: Rc<Cell<bool>>,
    storage: Option<Storage>,
    stored: Option<Stored<String>>,
    loader: Option<AsyncTask<Storage, StorageError>>,
}

impl App {
    pub fn new(config: &Config, theme: Theme) -> Self {
        let resized = Rc::new(Cell::new(false));
        let focus_lost = Rc::new(Cell::new(false));

        let mut listeners = Listeners::new();
        let flag = resized.clone();
        listeners.add(EventKind::Resize, move |_| flag.set(true));
        let flag = focus_lost.clone();
        listeners.add(EventKind::FocusLost, move |_| flag.set(true));

        let loader = config.storage_path.clone().map(|path: PathBuf| {
            AsyncTask::new(move || Storage::open(path.clone()), true)
        });

        let mut redraw = UpdateTrigger::new();
        redraw.request();

        Self {
            history: History::new(String::new()),
            editor: Editor::new(),
            help: Toggle::default(),
            help_outside: ClickOutside::new(),
            help_hover: Hover::new(),
            list_scroll: ScrollPosition::new().with_step(3),
            present_visible: OnScreen::new(0),
            timeline_key: KeyPress::new(KeyCode::F(2)),
            previous: Previous::new(),
            theme: ThemeVars::new(),
            message: None,
            status: String::new(),
            should_quit: false,
            theme_source: theme,
            commit_gate: Debounce::new(config.debounce()),
            status_gate: Throttle::new(config.throttle()),
            redraw,
            title: Title::new(config.title.clone()),
            base_title: config.title.clone(),
            listeners,
            resized,
            focus_lost,
            storage: None,
            stored: None,
            loader,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loader
            .as_ref()
            .is_some_and(|task| task.status() == Status::Pending)
    }

    /// Nothing typed or committed since start
    fn is_untouched(&self) -> bool {
        !self.history.can_undo() && !self.history.can_redo() && !self.has_pending_edit()
    }

    /// Draft differs from the committed value
    pub fn has_pending_edit(&self) -> bool {
        self.editor.buffer != *self.history.value()
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        self.title.apply(terminal.backend_mut())?;

        while !self.should_quit {
            self.tick(Instant::now());

            if self.redraw.take() {
                self.theme.apply(&self.theme_source);
                terminal.draw(|f| ui::render(f, self))?;
                self.title.apply(terminal.backend_mut())?;
            }

            if poll(Duration::from_millis(16))? {
                let event = event::read()?;
                self.handle_event(event);
            }
        }

        // don't lose an edit still waiting on the debounce
        self.commit();
        Ok(())
    }

    /// Timer-driven work: storage loading, debounced commits, status refresh
    fn tick(&mut self, now: Instant) {
        self.poll_loader();

        if self.commit_gate.poll_at(now) {
            self.commit();
        }

        if self.status_gate.try_fire_at(now) {
            let status = self.status_line();
            if status != self.status {
                self.status = status;
                self.redraw.request();
            }
        }
    }

    /// Pick up the storage once the background open finishes
    fn poll_loader(&mut self) {
        let Some(task) = self.loader.as_mut() else {
            return;
        };
        match task.poll() {
            Some(Status::Success) => {
                if let Some(mut storage) = task.take_value() {
                    let mut stored = Stored::load(&storage, VALUE_KEY, String::new());
                    if self.is_untouched() {
                        info!(key = VALUE_KEY, len = stored.value().len(), "restored value");
                        self.history = History::new(stored.value().clone());
                        self.editor.load(stored.value());
                    } else {
                        // edits made while loading win over the stored value
                        info!(key = VALUE_KEY, "keeping edits made during load");
                        stored.set(&mut storage, self.history.value().clone());
                    }
                    self.storage = Some(storage);
                    self.stored = Some(stored);
                }
                self.loader = None;
                self.redraw.request();
            }
            Some(_) => {
                let reason = task
                    .error()
                    .map(|e| e.to_string())
                    .or_else(|| task.failure().map(|e| e.to_string()))
                    .unwrap_or_else(|| "unknown error".to_string());
                warn!(error = %reason, "storage unavailable, continuing without persistence");
                self.message = Some(format!("Storage unavailable: {}", reason));
                self.loader = None;
                self.redraw.request();
            }
            None => {}
        }
    }

    fn status_line(&self) -> String {
        let flags = self.history.flags();
        let mut parts = vec![format!(
            "{}/{}",
            self.history.timeline().cursor() + 1,
            self.history.timeline().len()
        )];
        if flags.can_undo {
            parts.push("^Z undo".to_string());
        }
        if flags.can_redo {
            parts.push("^Y redo".to_string());
        }
        if self.has_pending_edit() {
            parts.push("editing".to_string());
        }
        if self.is_loading() {
            parts.push("loading".to_string());
        }
        parts.join("  ")
    }

    // === History helpers ===

    /// Commit the draft as the new present value
    fn commit(&mut self) {
        self.commit_gate.cancel();
        if !self.has_pending_edit() {
            return;
        }
        let before = self.history.value().clone();
        self.history.set(self.editor.buffer.clone());
        debug!(len = self.history.value().len(), "committed edit");
        self.after_change(before);
    }

    fn undo(&mut self) {
        self.commit();
        let before = self.history.value().clone();
        let was = self.history.can_undo();
        self.history.undo();
        if was {
            self.after_change(before);
            self.message = Some("Undo".to_string());
        }
    }

    fn redo(&mut self) {
        self.commit();
        let before = self.history.value().clone();
        let was = self.history.can_redo();
        self.history.redo();
        if was {
            self.after_change(before);
            self.message = Some("Redo".to_string());
        }
    }

    fn clear(&mut self) {
        self.commit_gate.cancel();
        let before = self.history.value().clone();
        self.history.reset();
        self.after_change(before);
        self.message = Some("History cleared".to_string());
    }

    /// Sync the editor, storage and title with the present value
    fn after_change(&mut self, before: String) {
        self.previous.track(&before);
        let value = self.history.value().clone();
        if self.editor.buffer != value {
            self.editor.load(&value);
        }
        if let (Some(storage), Some(stored)) = (self.storage.as_mut(), self.stored.as_mut()) {
            stored.set(storage, value);
        }
        let past = self.history.past().len();
        self.title.set(if past == 0 {
            self.base_title.clone()
        } else {
            format!("{} ({} edits)", self.base_title, past)
        });
        self.redraw.request();
    }

    // === Event handling ===

    fn handle_event(&mut self, event: Event) {
        self.listeners.dispatch(&event);
        if self.resized.take() {
            self.redraw.request();
        }
        if self.focus_lost.take() {
            self.commit();
        }

        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::F(2) {
            if self.timeline_key.handle(&key) {
                self.redraw.request();
            }
            return;
        }
        // some platforms report releases for every key
        if key.kind == KeyEventKind::Release {
            return;
        }
        self.timeline_key.reset();

        self.message = None;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('z') if ctrl => self.undo(),
            KeyCode::Char('y') if ctrl => self.redo(),
            KeyCode::Char('l') if ctrl => self.clear(),
            KeyCode::F(1) => {
                self.help.toggle();
            }
            KeyCode::PageDown => self.list_scroll.scroll_by(0, 5),
            KeyCode::PageUp => self.list_scroll.scroll_by(0, -5),
            _ if is_escape(key) => {
                if self.help.get() {
                    self.help.set(false);
                } else {
                    self.should_quit = true;
                }
            }
            _ => match self.editor.handle_key(key) {
                EditResult::Edited => self.commit_gate.trigger(),
                EditResult::Commit => self.commit(),
                EditResult::Moved | EditResult::Ignored => {}
            },
        }
        self.redraw.request();
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.help.get() && self.help_outside.handle(&mouse) {
            self.help.set(false);
            self.redraw.request();
            return;
        }
        if self.help_hover.handle(&mouse) || self.list_scroll.handle(&mouse) {
            self.redraw.request();
        }
    }

    // === Layout feedback from the renderer ===

    pub fn set_help_region(&mut self, region: Option<Rect>) {
        self.help_outside.set_region(region);
        self.help_hover.set_region(region);
    }

    /// Keep the present entry of the timeline list in view
    pub fn sync_list(&mut self, content: (u16, u16), region: Rect) {
        self.list_scroll.set_extent(content, region);
        let (_, offset) = self.list_scroll.position();
        let cursor = u16::try_from(self.history.timeline().cursor()).unwrap_or(u16::MAX);
        let target = Rect::new(0, cursor, content.0.max(1), 1);
        let viewport = Rect::new(0, offset, region.width.max(1), region.height);
        self.present_visible.observe(target, viewport);
        if !self.present_visible.is_intersecting() && region.height > 0 {
            let top = cursor.saturating_sub(region.height / 2);
            self.list_scroll.scroll_to(0, top);
            let (_, offset) = self.list_scroll.position();
            let viewport = Rect::new(0, offset, region.width.max(1), region.height);
            self.present_visible.observe(target, viewport);
        }
    }
}
