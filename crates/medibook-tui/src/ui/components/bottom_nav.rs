//! Bottom navigation strip
//!
//! Display-only chrome mirroring the product's tab bar. Only the first
//! two tabs lead anywhere in this demo; the rest are placeholders.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::layout::columns;
use crate::ui::Theme;

/// A tab on the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTab {
    FindADoctor,
    Appointments,
    Records,
    Profile,
}

const TABS: [(NavTab, &str); 4] = [
    (NavTab::FindADoctor, "Find a Doctor"),
    (NavTab::Appointments, "Appointments"),
    (NavTab::Records, "Records"),
    (NavTab::Profile, "Profile"),
];

/// Draw the strip with `active` highlighted
pub fn render(frame: &mut Frame, area: Rect, active: NavTab, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for ((tab, label), cell) in TABS.iter().zip(columns(inner, TABS.len())) {
        let style = if *tab == active {
            theme.text_highlight()
        } else {
            theme.text_muted()
        };
        let widget = Paragraph::new(*label)
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(widget, cell);
    }
}
