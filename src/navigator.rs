//! Screen navigation: exactly one screen is active at a time.

/// The fixed set of screens, in the order of the intended journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Opening,
    AnimatedMessage,
    LoveLetter,
    Surprise,
    Final,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Opening,
        Screen::AnimatedMessage,
        Screen::LoveLetter,
        Screen::Surprise,
        Screen::Final,
    ];

    /// Id of the page region that shows this screen.
    pub fn element_id(self) -> &'static str {
        match self {
            Screen::Opening => "openingScreen",
            Screen::AnimatedMessage => "animatedMessage",
            Screen::LoveLetter => "loveLetter",
            Screen::Surprise => "surpriseSection",
            Screen::Final => "finalScene",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
}

impl Transition {
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Holds the single active screen. Ordering of the journey is left to the
/// caller; any screen may be requested at any time.
#[derive(Debug, Clone)]
pub struct Navigator {
    active: Screen,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self { active: Screen::Opening }
    }

    pub fn active(&self) -> Screen {
        self.active
    }

    pub fn is_active(&self, screen: Screen) -> bool {
        self.active == screen
    }

    pub fn transition_to(&mut self, screen: Screen) -> Transition {
        let from = std::mem::replace(&mut self.active, screen);
        Transition { from, to: screen }
    }
}
