// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation mode of a section-navigation widget.
//!
//! A navigation rail rests in [`NavMode::Ambient`] (a thin progress hint),
//! expands to [`NavMode::Engaged`] while the user hovers, focuses, or scrolls,
//! and can open a jump palette ([`NavMode::PaletteOpen`]).
//!
//! The palette is sticky: pointer and focus changes do not close it. Escape,
//! toggling, or picking a section does, and the mode then falls back to whatever
//! the remaining inputs imply.

use tracing::debug;

/// Presentation mode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum NavMode {
    /// Collapsed.
    #[default]
    Ambient,
    /// Expanded with labels.
    Engaged,
    /// Jump palette open.
    PaletteOpen,
}

/// Inputs to [`NavModeState::handle`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavInput {
    /// Pointer entered the widget.
    PointerEnter,
    /// Pointer left the widget.
    PointerLeave,
    /// Keyboard focus moved into the widget.
    FocusIn,
    /// Keyboard focus left the widget.
    FocusOut,
    /// The page started scrolling.
    ScrollStart,
    /// The page stopped scrolling.
    ScrollSettled,
    /// Palette shortcut pressed.
    TogglePalette,
    /// A section was chosen from the palette.
    SectionChosen,
    /// Escape pressed while the widget owns the key.
    Escape,
}

/// A mode transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ModeChange {
    /// Mode before the input.
    pub from: NavMode,
    /// Mode after the input.
    pub to: NavMode,
}

/// Mode machine plus the inputs that keep the widget engaged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavModeState {
    mode: NavMode,
    hovered: bool,
    focused: bool,
    scrolling: bool,
}

impl NavModeState {
    /// Start ambient with no inputs held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode.
    pub fn mode(&self) -> NavMode {
        self.mode
    }

    /// True in `Engaged` or `PaletteOpen`.
    pub fn is_expanded(&self) -> bool {
        self.mode != NavMode::Ambient
    }

    /// Apply one input and return the transition, if any.
    pub fn handle(&mut self, input: NavInput) -> Option<ModeChange> {
        let from = self.mode;
        match input {
            NavInput::PointerEnter => self.hovered = true,
            NavInput::PointerLeave => self.hovered = false,
            NavInput::FocusIn => self.focused = true,
            NavInput::FocusOut => self.focused = false,
            NavInput::ScrollStart => self.scrolling = true,
            NavInput::ScrollSettled => self.scrolling = false,
            NavInput::TogglePalette => {
                self.mode = if from == NavMode::PaletteOpen {
                    self.resting()
                } else {
                    NavMode::PaletteOpen
                };
            }
            NavInput::SectionChosen => {
                if from == NavMode::PaletteOpen {
                    self.mode = self.resting();
                }
            }
            NavInput::Escape => match from {
                NavMode::PaletteOpen => self.mode = self.resting(),
                NavMode::Engaged => {
                    self.hovered = false;
                    self.focused = false;
                    self.scrolling = false;
                    self.mode = NavMode::Ambient;
                }
                NavMode::Ambient => {}
            },
        }
        if self.mode != NavMode::PaletteOpen
            && !matches!(input, NavInput::TogglePalette | NavInput::Escape)
        {
            self.mode = self.resting();
        }
        if self.mode == from {
            return None;
        }
        debug!(?from, to = ?self.mode, ?input, "navigation mode changed");
        Some(ModeChange {
            from,
            to: self.mode,
        })
    }

    fn resting(&self) -> NavMode {
        if self.hovered || self.focused || self.scrolling {
            NavMode::Engaged
        } else {
            NavMode::Ambient
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(from: NavMode, to: NavMode) -> Option<ModeChange> {
        Some(ModeChange { from, to })
    }

    #[test]
    fn hover_engages_and_leave_returns_ambient() {
        let mut s = NavModeState::new();
        assert_eq!(
            s.handle(NavInput::PointerEnter),
            change(NavMode::Ambient, NavMode::Engaged)
        );
        assert_eq!(s.handle(NavInput::FocusIn), None);
        assert_eq!(s.handle(NavInput::PointerLeave), None);
        assert_eq!(
            s.handle(NavInput::FocusOut),
            change(NavMode::Engaged, NavMode::Ambient)
        );
    }

    #[test]
    fn scrolling_engages_until_settled() {
        let mut s = NavModeState::new();
        let _ = s.handle(NavInput::ScrollStart);
        assert!(s.is_expanded());
        let _ = s.handle(NavInput::ScrollSettled);
        assert_eq!(s.mode(), NavMode::Ambient);
    }

    #[test]
    fn palette_is_sticky_until_closed() {
        let mut s = NavModeState::new();
        let _ = s.handle(NavInput::PointerEnter);
        assert_eq!(
            s.handle(NavInput::TogglePalette),
            change(NavMode::Engaged, NavMode::PaletteOpen)
        );
        assert_eq!(s.handle(NavInput::PointerLeave), None);
        assert_eq!(s.mode(), NavMode::PaletteOpen);
        assert_eq!(
            s.handle(NavInput::Escape),
            change(NavMode::PaletteOpen, NavMode::Ambient)
        );
    }

    #[test]
    fn escape_closes_palette_back_to_engaged() {
        let mut s = NavModeState::new();
        let _ = s.handle(NavInput::FocusIn);
        let _ = s.handle(NavInput::TogglePalette);
        assert_eq!(
            s.handle(NavInput::Escape),
            change(NavMode::PaletteOpen, NavMode::Engaged)
        );
        assert_eq!(
            s.handle(NavInput::Escape),
            change(NavMode::Engaged, NavMode::Ambient)
        );
        assert_eq!(s.handle(NavInput::Escape), None);
    }

    #[test]
    fn choosing_a_section_closes_palette() {
        let mut s = NavModeState::new();
        let _ = s.handle(NavInput::TogglePalette);
        let _ = s.handle(NavInput::PointerEnter);
        assert_eq!(
            s.handle(NavInput::SectionChosen),
            change(NavMode::PaletteOpen, NavMode::Engaged)
        );
        // Outside the palette, choosing is inert.
        assert_eq!(s.handle(NavInput::SectionChosen), None);
    }

    #[test]
    fn toggle_twice_restores_resting_mode() {
        let mut s = NavModeState::new();
        let _ = s.handle(NavInput::TogglePalette);
        assert_eq!(
            s.handle(NavInput::TogglePalette),
            change(NavMode::PaletteOpen, NavMode::Ambient)
        );
    }
}
