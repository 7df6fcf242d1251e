use crossterm::event::Event;
use tracing::debug;

/// Event categories a handler can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Key,
    Mouse,
    Resize,
    FocusGained,
    FocusLost,
    Paste,
}

impl EventKind {
    pub fn of(event: &Event) -> Self {
        match event {
            Event::Key(_) => EventKind::Key,
            Event::Mouse(_) => EventKind::Mouse,
            Event::Resize(..) => EventKind::Resize,
            Event::FocusGained => EventKind::FocusGained,
            Event::FocusLost => EventKind::FocusLost,
            Event::Paste(_) => EventKind::Paste,
        }
    }
}

/// Dispatch order: capture handlers run before bubble handlers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    #[default]
    Capture,
    Bubble,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Entry {
    id: ListenerId,
    kind: EventKind,
    phase: Phase,
    handler: Box<dyn FnMut(&Event)>,
}

/// A set of event handlers owned by one component
#[derive(Default)]
pub struct Listeners {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a capture-phase handler
    pub fn add(&mut self, kind: EventKind, handler: impl FnMut(&Event) + 'static) -> ListenerId {
        self.add_with_phase(kind, Phase::Capture, handler)
    }

    pub fn add_with_phase(
        &mut self,
        kind: EventKind,
        phase: Phase,
        handler: impl FnMut(&Event) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            kind,
            phase,
            handler: Box::new(handler),
        });
        id
    }

    /// Unregister a handler. Returns false if it was already gone.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Run every handler subscribed to this event's kind. Returns how many ran.
    pub fn dispatch(&mut self, event: &Event) -> usize {
        let kind = EventKind::of(event);
        let mut ran = 0;
        for phase in [Phase::Capture, Phase::Bubble] {
            for entry in self
                .entries
                .iter_mut()
                .filter(|e| e.kind == kind && e.phase == phase)
            {
                (entry.handler)(event);
                ran += 1;
            }
        }
        if ran == 0 {
            debug!(?kind, "no listener for event");
        }
        ran
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
