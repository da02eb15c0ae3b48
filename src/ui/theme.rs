//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

use crate::core::balance::BalanceStatus;

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── friend list ────────────────────────────────────────────
    pub fn name_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn image_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn balance_style(status: BalanceStatus) -> Style {
        match status {
            BalanceStatus::YouOwe(_) => Style::default().fg(Color::Red),
            BalanceStatus::OwesYou(_) => Style::default().fg(Color::Green),
            BalanceStatus::Even => Style::default(),
        }
    }

    /// Friend whose split form is open.
    pub fn active_friend_style() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn cursor_style() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_style() -> Style {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    }

    // ── forms ──────────────────────────────────────────────────
    pub fn label_style() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn input_style(focused: bool) -> Style {
        let base = Style::default().add_modifier(Modifier::UNDERLINED);
        if focused {
            base.fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            base.fg(Color::White)
        }
    }

    pub fn disabled_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style(focused: bool) -> Style {
        if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    pub fn hint_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
