//! Appointment booking screen

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use medibook_clinic::SELECTED_DOCTOR_KEY;
use medibook_core::{Doctor, Period};

use crate::app::state::BookingFocus;
use crate::app::App;
use crate::ui::components::bottom_nav::{self, NavTab};
use crate::ui::layout::{
    columns, render_footer, render_header, section_block, section_block_focused, ScreenLayout,
};

/// Draw the booking screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let layout = ScreenLayout::new(area);

    let crumb = app.state.router.breadcrumb();
    render_header(frame, layout.header, Some(crumb.as_str()), theme);

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
            Constraint::Length(2),  // Doctor line
            Constraint::Length(4),  // Date strip
            Constraint::Length(10), // Morning grid
            Constraint::Length(6),  // Evening grid
            Constraint::Length(1),  // Message
            Constraint::Length(2),  // Bottom navigation
        ])
        .split(layout.content);

    let doctor_line = Line::from(vec![
        Span::styled(doctor.name.clone(), theme.text().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("  {} - {}", doctor.specialty.label(), app.state.config.location),
            theme.text_secondary(),
        ),
    ]);
    frame.render_widget(Paragraph::new(doctor_line), chunks[0]);

    render_date_strip(frame, chunks[1], app);
    render_slot_grid(frame, chunks[2], app, Period::Morning);
    render_slot_grid(frame, chunks[3], app, Period::Evening);

    if let Some(message) = &app.state.booking.message {
        let widget = Paragraph::new(message.as_str())
            .style(theme.warning())
            .alignment(Alignment::Center);
        frame.render_widget(widget, chunks[4]);
    }

    bottom_nav::render(frame, chunks[5], NavTab::Appointments, theme);

    let hints = &[
        ("Tab", "Section"),
        ("←→↑↓", "Move"),
        ("Enter", "Select Slot"),
        ("C", "Confirm"),
        ("Esc", "Back"),
    ];
    render_footer(frame, layout.footer, hints, theme);
}

fn render_date_strip(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.state.booking.focus == BookingFocus::Dates;
    let block = if focused {
        section_block_focused("Select Date", theme)
    } else {
        section_block("Select Date", theme)
    };
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let days = app.state.schedule.booking_days();
    for (index, (day, cell)) in days.iter().zip(columns(inner, days.len())).enumerate() {
        let selected = index == app.state.booking.date_index;
        let style = theme.menu_item(selected);
        let lines = vec![
            Line::from(Span::styled(day.weekday, style)),
            Line::from(Span::styled(format!("{}", day.day), style)),
        ];
        let widget = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(widget, cell);
    }
}

fn render_slot_grid(frame: &mut Frame, area: Rect, app: &App, period: Period) {
    let theme = &app.theme;
    let booking = &app.state.booking;
    let grid_focus = match period {
        Period::Morning => BookingFocus::Morning,
        Period::Evening => BookingFocus::Evening,
    };
    let focused = booking.focus == grid_focus;

    let block = if focused {
        section_block_focused(period.label(), theme)
    } else {
        section_block(period.label(), theme)
    };
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let slots = app.state.schedule.slots(period);
    let rows = slots.len().div_ceil(2);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(2); rows])
        .split(inner);

    for (index, slot) in slots.iter().enumerate() {
        let row = index / 2;
        let col = index % 2;
        let Some(row_area) = row_areas.get(row) else {
            continue;
        };
        let cells = columns(*row_area, 2);
        let cell = cells[col];

        let selected = booking.selected == Some((period, index));
        let under_cursor = focused && booking.slot_index == index;
        let style = theme.slot(slot.available, selected, under_cursor);

        let marker = if selected {
            "● "
        } else if under_cursor {
            "▶ "
        } else {
            "  "
        };
        let label = format!("{marker}{}", slot.label);
        let widget = Paragraph::new(label).style(style);
        frame.render_widget(widget, cell);
    }
}
