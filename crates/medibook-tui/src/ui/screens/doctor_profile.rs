//! Doctor profile screen

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use medibook_clinic::SELECTED_DOCTOR_KEY;
use medibook_core::Doctor;

use crate::app::App;
use crate::ui::components::bottom_nav::{self, NavTab};
use crate::ui::layout::{columns, render_footer, render_header, section_block, ScreenLayout};

/// Draw the doctor profile screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let layout = ScreenLayout::new(area);

    let crumb = app.state.router.breadcrumb();
    render_header(frame, layout.header, Some(crumb.as_str()), theme);

    // The handler redirects when the handoff is empty; this fallback only
    // shows for the frame in between.
    let doctor: Option<Doctor> = app
        .state
        .handoff
        .get(SELECTED_DOCTOR_KEY)
        .ok()
        .flatten();
    let Some(doctor) = doctor else {
        let empty = Paragraph::new("No doctor selected.")
            .style(theme.text_muted())
            .alignment(Alignment::Center);
        frame.render_widget(empty, layout.content);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Identity card
            Constraint::Length(4), // Stats strip
            Constraint::Min(4),    // About
            Constraint::Length(4), // Availability
            Constraint::Length(2), // Bottom navigation
        ])
        .split(layout.content);

    render_identity(frame, chunks[0], &doctor, app);
    render_stats(frame, chunks[1], &doctor, app);
    render_about(frame, chunks[2], &doctor, app);
    render_availability(frame, chunks[3], &doctor, app);
    bottom_nav::render(frame, chunks[4], NavTab::FindADoctor, theme);

    let hints = &[("Enter/B", "Book Appointment"), ("Esc", "Back")];
    render_footer(frame, layout.footer, hints, theme);
}

fn render_identity(frame: &mut Frame, area: Rect, doctor: &Doctor, app: &App) {
    let theme = &app.theme;
    let block = section_block("Doctor Profile", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            doctor.name.clone(),
            theme.text().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(doctor.specialty.label(), theme.text_highlight())),
        Line::from(Span::styled(doctor.credentials.clone(), theme.text_secondary())),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_stats(frame: &mut Frame, area: Rect, doctor: &Doctor, app: &App) {
    let theme = &app.theme;
    let block = section_block("At a Glance", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let stats = &doctor.stats;
    let cells = [
        (format_count(stats.patients), "patients"),
        (format!("{}+", stats.years_experience), "years experience"),
        (format!("{:.1}", stats.rating), "rating"),
        (group_thousands(stats.reviews), "reviews"),
    ];

    for ((value, label), cell) in cells.iter().zip(columns(inner, cells.len())) {
        let lines = vec![
            Line::from(Span::styled(
                value.clone(),
                theme.text().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(*label, theme.text_muted())),
        ];
        let widget = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(widget, cell);
    }
}

fn render_about(frame: &mut Frame, area: Rect, doctor: &Doctor, app: &App) {
    let theme = &app.theme;
    let widget = Paragraph::new(doctor.bio.clone())
        .style(theme.text_secondary())
        .wrap(Wrap { trim: true })
        .block(section_block("About", theme));
    frame.render_widget(widget, area);
}

fn render_availability(frame: &mut Frame, area: Rect, doctor: &Doctor, app: &App) {
    let theme = &app.theme;
    let block = section_block("Availability", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let status = if doctor.availability.is_available() {
        Span::styled(doctor.availability.label(), theme.success())
    } else {
        Span::styled(doctor.availability.label(), theme.danger())
    };
    let lines = vec![
        Line::from(status),
        Line::from(Span::styled(doctor.hours.clone(), theme.text_muted())),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Round a patient count down to thousands for display ("5,000+")
fn format_count(count: u32) -> String {
    if count >= 1000 {
        format!("{},{:03}+", count / 1000, (count / 100 % 10) * 100)
    } else {
        format!("{count}+")
    }
}

/// Group a count with a thousands separator ("4,942")
fn group_thousands(n: u32) -> String {
    if n >= 1000 {
        format!("{},{:03}", n / 1000, n % 1000)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_round_to_hundreds() {
        assert_eq!(format_count(5000), "5,000+");
        assert_eq!(format_count(4942), "4,900+");
        assert_eq!(format_count(320), "320+");
    }

    #[test]
    fn review_counts_keep_their_separator() {
        assert_eq!(group_thousands(4942), "4,942");
        assert_eq!(group_thousands(968), "968");
    }
}
