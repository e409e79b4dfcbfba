//! Slide-in navigation panel and its static menu entries.

use std::time::Duration;

pub const DEFAULT_PANEL_ANIMATION: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Open/closed panel with a progress fraction that animates between the two.
///
/// `open` and `close` only set the target; progress moves in `advance`, which the
/// front end calls on frame ticks while `is_animating` holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    phase: PanelPhase,
    progress: f32,
    duration: Duration,
}

impl Panel {
    pub fn new(duration: Duration) -> Self {
        Self {
            phase: PanelPhase::Closed,
            progress: 0.0,
            duration,
        }
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    /// 0.0 when fully closed, 1.0 when fully open.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether the panel is open or heading there.
    pub fn is_open(&self) -> bool {
        matches!(self.phase, PanelPhase::Opening | PanelPhase::Open)
    }

    pub fn is_visible(&self) -> bool {
        self.phase != PanelPhase::Closed
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, PanelPhase::Opening | PanelPhase::Closing)
    }

    /// Returns `false` when the panel was already open or opening.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        self.phase = PanelPhase::Opening;
        if self.duration.is_zero() {
            self.settle();
        }
        true
    }

    /// Returns `false` when the panel was already closed or closing.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.phase = PanelPhase::Closing;
        if self.duration.is_zero() {
            self.settle();
        }
        true
    }

    pub fn advance(&mut self, elapsed: Duration) {
        if !self.is_animating() {
            return;
        }
        let step = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        match self.phase {
            PanelPhase::Opening => self.progress = (self.progress + step).min(1.0),
            PanelPhase::Closing => self.progress = (self.progress - step).max(0.0),
            PanelPhase::Open | PanelPhase::Closed => {}
        }
        let finished = match self.phase {
            PanelPhase::Opening => self.progress >= 1.0,
            PanelPhase::Closing => self.progress <= 0.0,
            PanelPhase::Open | PanelPhase::Closed => false,
        };
        if finished {
            self.settle();
        }
    }

    fn settle(&mut self) {
        match self.phase {
            PanelPhase::Opening | PanelPhase::Open => {
                self.phase = PanelPhase::Open;
                self.progress = 1.0;
            }
            PanelPhase::Closing | PanelPhase::Closed => {
                self.phase = PanelPhase::Closed;
                self.progress = 0.0;
            }
        }
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new(DEFAULT_PANEL_ANIMATION)
    }
}

/// Entries listed in the panel. Selecting one only closes the panel and notifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuEntry {
    Home,
    Settings,
}

impl MenuEntry {
    pub const ALL: &'static [MenuEntry] = &[MenuEntry::Home, MenuEntry::Settings];

    pub fn label(self) -> &'static str {
        match self {
            MenuEntry::Home => "Home",
            MenuEntry::Settings => "Settings",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            MenuEntry::Home => "⌂",
            MenuEntry::Settings => "⚙",
        }
    }

    pub fn notification(self) -> String {
        format!("{} Clicked", self.label())
    }

    /// Home is always drawn as the current screen.
    pub fn is_selected(self) -> bool {
        matches!(self, MenuEntry::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(50);

    #[test]
    fn starts_closed() {
        let panel = Panel::default();
        assert_eq!(panel.phase(), PanelPhase::Closed);
        assert!(!panel.is_visible());
        assert_eq!(panel.progress(), 0.0);
    }

    #[test]
    fn opens_over_the_configured_duration() {
        let mut panel = Panel::new(Duration::from_millis(200));
        assert!(panel.open());
        assert_eq!(panel.phase(), PanelPhase::Opening);

        panel.advance(FRAME);
        assert!(panel.is_animating());
        assert!(panel.progress() > 0.0 && panel.progress() < 1.0);

        for _ in 0..4 {
            panel.advance(FRAME);
        }
        assert_eq!(panel.phase(), PanelPhase::Open);
        assert_eq!(panel.progress(), 1.0);
    }

    #[test]
    fn repeated_open_request_is_ignored() {
        let mut panel = Panel::default();
        assert!(panel.open());
        assert!(!panel.open());
    }

    #[test]
    fn close_reverses_from_current_progress() {
        let mut panel = Panel::new(Duration::from_millis(200));
        panel.open();
        panel.advance(Duration::from_millis(100));
        let halfway = panel.progress();

        assert!(panel.close());
        assert_eq!(panel.phase(), PanelPhase::Closing);
        assert_eq!(panel.progress(), halfway);

        panel.advance(Duration::from_millis(100));
        assert_eq!(panel.phase(), PanelPhase::Closed);
        assert!(!panel.is_visible());
    }

    #[test]
    fn zero_duration_settles_immediately() {
        let mut panel = Panel::new(Duration::ZERO);
        panel.open();
        assert_eq!(panel.phase(), PanelPhase::Open);
        panel.close();
        assert_eq!(panel.phase(), PanelPhase::Closed);
    }

    #[test]
    fn closing_a_closed_panel_does_nothing() {
        let mut panel = Panel::default();
        assert!(!panel.close());
        assert_eq!(panel.phase(), PanelPhase::Closed);
    }

    #[test]
    fn menu_entries_name_themselves_in_notifications() {
        assert_eq!(MenuEntry::Home.notification(), "Home Clicked");
        assert_eq!(MenuEntry::Settings.notification(), "Settings Clicked");
        assert!(MenuEntry::Home.is_selected());
        assert!(!MenuEntry::Settings.is_selected());
    }
}
