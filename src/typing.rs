//! Typewriter effect: reveals a fixed message one character per tick.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingStep {
    /// A character was appended; more remain.
    Revealed(char),
    /// The final character was appended on this tick.
    Finished(char),
    /// Not running (never started, cleared, or already complete).
    Idle,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    message: String,
    revealed_bytes: usize, // byte offset into `message` of the revealed prefix
    revealed_chars: usize,
    started: bool,
    running: bool,
}

impl Typewriter {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            revealed_bytes: 0,
            revealed_chars: 0,
            started: false,
            running: false,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Clear the revealed text and start typing from the first character.
    pub fn restart(&mut self) {
        self.revealed_bytes = 0;
        self.revealed_chars = 0;
        self.started = true;
        self.running = !self.message.is_empty();
    }

    /// Stop and empty the revealed text.
    pub fn clear(&mut self) {
        self.revealed_bytes = 0;
        self.revealed_chars = 0;
        self.started = false;
        self.running = false;
    }

    pub fn tick(&mut self) -> TypingStep {
        if !self.running {
            return TypingStep::Idle;
        }
        let Some(c) = self.message[self.revealed_bytes..].chars().next() else {
            self.running = false;
            return TypingStep::Idle;
        };
        self.revealed_bytes += c.len_utf8();
        self.revealed_chars += 1;
        if self.revealed_bytes == self.message.len() {
            self.running = false;
            TypingStep::Finished(c)
        } else {
            TypingStep::Revealed(c)
        }
    }

    pub fn text(&self) -> &str {
        &self.message[..self.revealed_bytes]
    }

    pub fn revealed_chars(&self) -> usize {
        self.revealed_chars
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True once every character is shown. An empty message is complete as
    /// soon as it has been restarted.
    pub fn is_complete(&self) -> bool {
        self.started && !self.running && self.revealed_bytes == self.message.len()
    }
}

/// Lazily yields the remaining reveals, one per call.
impl Iterator for Typewriter {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        match self.tick() {
            TypingStep::Revealed(c) | TypingStep::Finished(c) => Some(c),
            TypingStep::Idle => None,
        }
    }
}
