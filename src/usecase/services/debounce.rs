use std::time::Duration;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Generation counter behind a trailing-edge debounce: every keystroke takes
/// a ticket, and after the quiet period only the newest ticket fires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Debouncer {
    generation: u64,
}

impl Debouncer {
    pub fn trigger(&mut self) -> DebounceTicket {
        self.generation += 1;
        DebounceTicket(self.generation)
    }

    pub fn is_current(&self, ticket: DebounceTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Invalidates every outstanding ticket, e.g. when a discrete control
    /// already applied the latest input.
    pub fn cancel(&mut self) {
        self.generation += 1;
    }
}

/// Free-text filter inputs that wait for a quiet period before applying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebouncedInput {
    Search,
    MaxPrice,
}

/// One debouncer per typed filter input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterDebounce {
    search: Debouncer,
    max_price: Debouncer,
}

impl FilterDebounce {
    fn input(&mut self, input: DebouncedInput) -> &mut Debouncer {
        match input {
            DebouncedInput::Search => &mut self.search,
            DebouncedInput::MaxPrice => &mut self.max_price,
        }
    }

    pub fn trigger(&mut self, input: DebouncedInput) -> DebounceTicket {
        self.input(input).trigger()
    }

    pub fn is_current(&self, input: DebouncedInput, ticket: DebounceTicket) -> bool {
        match input {
            DebouncedInput::Search => self.search.is_current(ticket),
            DebouncedInput::MaxPrice => self.max_price.is_current(ticket),
        }
    }

    /// Drops every pending input. Called whenever the whole form is applied,
    /// since that already carries the latest typed text.
    pub fn cancel_all(&mut self) {
        self.search.cancel();
        self.max_price.cancel();
    }
}
