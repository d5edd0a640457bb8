//! Doctor directory screen

use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::app::App;
use crate::ui::components::bottom_nav::{self, NavTab};
use crate::ui::layout::{render_footer, render_header, section_block, section_block_focused, ScreenLayout};

/// Draw the doctor list screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let layout = ScreenLayout::new(area);

    let crumb = app.state.router.breadcrumb();
    render_header(frame, layout.header, Some(crumb.as_str()), theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Greeting
            Constraint::Length(3), // Search bar
            Constraint::Min(6),    // Doctor cards
            Constraint::Length(2), // Bottom navigation
        ])
        .split(layout.content);

    render_greeting(frame, chunks[0], app);
    render_search_bar(frame, chunks[1], app);
    render_cards(frame, chunks[2], app);
    bottom_nav::render(frame, chunks[3], NavTab::FindADoctor, theme);

    let hints: &[(&str, &str)] = if app.state.doctor_list.searching {
        &[("Type", "Filter"), ("Enter", "Done"), ("Esc", "Done")]
    } else {
        &[
            ("↑/↓", "Navigate"),
            ("Enter", "View Profile"),
            ("F", "Favorite"),
            ("/", "Search"),
            ("?", "Help"),
            ("Esc", "Sign Out"),
        ]
    };
    render_footer(frame, layout.footer, hints, theme);
}

fn render_greeting(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let greeting = Line::from(vec![
        Span::styled(
            format!("Hello, {}", app.state.config.profile_name),
            theme.text().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   @{}", app.state.config.location),
            theme.text_muted(),
        ),
    ]);
    frame.render_widget(Paragraph::new(greeting), area);
}

fn render_search_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let searching = app.state.doctor_list.searching;

    let block = if searching {
        section_block_focused("Search Doctors", theme)
    } else {
        section_block("Search Doctors", theme)
    };

    let term = &app.state.doctor_list.search;
    let widget = if term.is_empty() && !searching {
        Paragraph::new("Search by name or specialization").style(theme.text_muted())
    } else if searching {
        Paragraph::new(format!("{term}▏")).style(theme.text())
    } else {
        Paragraph::new(term.as_str()).style(theme.text())
    };

    frame.render_widget(widget.block(block), area);
}

fn render_cards(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let doctors = app.state.filtered_doctors();

    if doctors.is_empty() {
        let empty = Paragraph::new("No doctors found matching your search.")
            .style(theme.text_muted())
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let bio_width = area.width.saturating_sub(6) as usize;
    let items: Vec<ListItem> = doctors
        .iter()
        .map(|doctor| {
            let mut name_spans = vec![Span::styled(
                doctor.name.clone(),
                theme.text().add_modifier(Modifier::BOLD),
            )];
            if app.state.directory.is_favorite(doctor.id) {
                name_spans.push(Span::styled("  ♥", theme.danger()));
            }

            let availability = if doctor.availability.is_available() {
                Span::styled(doctor.availability.label(), theme.success())
            } else {
                Span::styled(doctor.availability.label(), theme.text_muted())
            };

            let lines = vec![
                Line::from(name_spans),
                Line::from(vec![
                    Span::styled(doctor.specialty.label(), theme.text_highlight()),
                    Span::raw("  "),
                    availability,
                ]),
                Line::from(Span::styled(
                    truncate_to_width(&doctor.bio, bio_width),
                    theme.text_secondary(),
                )),
                Line::from(Span::styled(doctor.hours.clone(), theme.text_muted())),
                Line::default(),
            ];
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(section_block("Doctors", theme))
        .highlight_style(theme.selection())
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(
        app.state
            .doctor_list
            .selected
            .min(doctors.len().saturating_sub(1)),
    ));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Clip a line to the given display width, ellipsizing when needed
fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            out.push('…');
            return out;
        }
        width += w;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("short", 40), "short");
        let clipped = truncate_to_width("a very long biography line that will not fit", 12);
        assert!(clipped.ends_with('…'));
        assert!(clipped.chars().count() <= 12);
    }
}
