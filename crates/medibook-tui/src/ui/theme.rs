//! Visual theme and color palette

use ratatui::style::{Color, Modifier, Style};

/// MediBook color palette
pub struct Theme {
    // Primary branding colors
    pub medi_blue: Color,
    pub medi_indigo: Color,
    pub medi_dark: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub highlight: Color,
    pub selection: Color,

    // Slot grid colors
    pub slot_open: Color,
    pub slot_taken: Color,
    pub slot_selected: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Primary branding - clinical blue
            medi_blue: Color::Rgb(59, 130, 246),   // #3B82F6
            medi_indigo: Color::Rgb(99, 102, 241), // #6366F1
            medi_dark: Color::Rgb(30, 41, 59),     // #1E293B

            // Status colors
            success: Color::Rgb(34, 197, 94),  // #22C55E - Green
            warning: Color::Rgb(245, 158, 11), // #F59E0B - Amber
            danger: Color::Rgb(239, 68, 68),   // #EF4444 - Red
            info: Color::Rgb(59, 130, 246),    // #3B82F6 - Blue

            // UI elements
            border: Color::Rgb(71, 85, 105),           // #475569
            border_focused: Color::Rgb(59, 130, 246),  // #3B82F6
            text_primary: Color::Rgb(248, 250, 252),   // #F8FAFC
            text_secondary: Color::Rgb(148, 163, 184), // #94A3B8
            text_muted: Color::Rgb(100, 116, 139),     // #64748B
            highlight: Color::Rgb(59, 130, 246),       // #3B82F6
            selection: Color::Rgb(51, 65, 85),         // #334155

            // Slot grids
            slot_open: Color::Rgb(248, 250, 252),
            slot_taken: Color::Rgb(100, 116, 139),
            slot_selected: Color::Rgb(59, 130, 246),
        }
    }
}

impl Theme {
    /// Get default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Get secondary text style
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Get muted text style
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Get highlighted text style
    pub fn text_highlight(&self) -> Style {
        Style::default()
            .fg(self.medi_blue)
            .add_modifier(Modifier::BOLD)
    }

    /// Get title style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.medi_blue)
            .add_modifier(Modifier::BOLD)
    }

    /// Get subtitle style
    pub fn subtitle(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Get border style
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Get focused border style
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    /// Get success style
    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Get warning style
    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Get danger style
    pub fn danger(&self) -> Style {
        Style::default()
            .fg(self.danger)
            .add_modifier(Modifier::BOLD)
    }

    /// Get info style
    pub fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Get selection/highlight style
    pub fn selection(&self) -> Style {
        Style::default().bg(self.selection).fg(self.medi_blue)
    }

    /// Get menu/list item style
    pub fn menu_item(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .bg(self.selection)
                .fg(self.medi_blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text_primary)
        }
    }

    /// Get input field style
    pub fn input(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.text_primary).bg(self.medi_dark)
        } else {
            Style::default().fg(self.text_secondary).bg(self.medi_dark)
        }
    }

    /// Style for a filled passcode slot
    pub fn otp_digit(&self) -> Style {
        Style::default()
            .fg(self.medi_blue)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for an empty passcode slot
    pub fn otp_placeholder(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for a slot cell in the booking grids
    pub fn slot(&self, available: bool, selected: bool, focused: bool) -> Style {
        if selected {
            Style::default()
                .fg(Color::Black)
                .bg(self.slot_selected)
                .add_modifier(Modifier::BOLD)
        } else if !available {
            Style::default()
                .fg(self.slot_taken)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if focused {
            Style::default().fg(self.slot_open).bg(self.selection)
        } else {
            Style::default().fg(self.slot_open)
        }
    }

    /// Create a high-contrast theme variant
    pub fn high_contrast() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::White,
            text_muted: Color::Gray,
            border: Color::White,
            border_focused: Color::Yellow,
            ..Self::default()
        }
    }
}
