//! Layout definitions for the TUI
//!
//! Banner and header on top, expenses and alternatives on the left, the
//! projection column on the right, status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Announcement line
    pub banner: Rect,
    /// Title and tagline
    pub header: Rect,
    /// Expense grid
    pub expenses: Rect,
    /// Alternatives table
    pub alternatives: Rect,
    /// Rate and horizon controls
    pub parameters: Rect,
    /// Growth projection figures
    pub growth: Rect,
    /// Current path against better path
    pub comparison: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Banner
                Constraint::Length(3), // Header
                Constraint::Min(10),   // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(60),    // Tables
                Constraint::Length(46), // Projection column
            ])
            .split(vertical[2]);

        let tables = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(horizontal[0]);

        let column = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Parameters
                Constraint::Length(9), // Growth
                Constraint::Min(8),    // Comparison
            ])
            .split(horizontal[1]);

        Self {
            banner: vertical[0],
            header: vertical[1],
            expenses: tables[0],
            alternatives: tables[1],
            parameters: column[0],
            growth: column[1],
            comparison: column[2],
            status_bar: vertical[3],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
