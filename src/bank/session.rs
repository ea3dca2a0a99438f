use uuid::Uuid;

/// Authenticated-session state, owned by the shell and passed into every
/// command handler.
///
/// At most one account is current at a time; a new login simply replaces the
/// previous session. There is no expiry.
#[derive(Debug, Clone, Copy, Default)]
pub struct Session {
    current: Option<Uuid>,
    sorted: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Uuid> {
        self.current
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn begin(&mut self, account: Uuid) {
        self.current = Some(account);
    }

    pub fn end(&mut self) {
        self.current = None;
    }

    pub fn sorted(&self) -> bool {
        self.sorted
    }

    pub fn toggle_sort(&mut self) -> bool {
        self.sorted = !self.sorted;
        self.sorted
    }
}
