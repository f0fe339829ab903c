use std::{io, time::Duration};

use affidash_core::{format_eur, Overview};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Gauge, Padding, Paragraph},
};

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    bars: Color,
    earnings: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    bars: Color::Green,
    earnings: Color::Yellow,
};

pub fn run(overview: &Overview) -> Result<()> {
    if overview.stats.series.is_empty() {
        println!("No monthly figures yet.");
        return Ok(());
    }

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        terminal.draw(|f| ui(f, overview))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        _ => {}
                    }
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn ui(frame: &mut Frame, overview: &Overview) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Chart + Summary
            Constraint::Length(1), // Footer
        ])
        .split(size);

    // --- Header ---
    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(THEME.muted));

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "REFERRALS ",
            Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("— {}", overview.username),
            Style::default().fg(THEME.text),
        ),
    ]))
    .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(title, main_layout[0]);
    frame.render_widget(header_block, main_layout[0]);

    // --- Main Content Split ---
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(70), // Chart
            Constraint::Length(1),      // Gutter
            Constraint::Percentage(30), // Summary
        ])
        .split(main_layout[1]);

    draw_chart(frame, overview, content_chunks[0]);
    draw_summary(frame, overview, content_chunks[2]);

    // --- Footer ---
    let help = Line::from(vec![
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    let footer = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(THEME.muted));
    frame.render_widget(footer, main_layout[2]);
}

fn draw_chart(frame: &mut Frame, overview: &Overview, area: Rect) {
    let bar_items: Vec<Bar> = overview
        .stats
        .series
        .iter()
        .map(|point| {
            Bar::default()
                .label(point.label.as_str())
                .value(u64::from(point.referrals))
                .style(Style::default().fg(THEME.bars))
                .text_value(point.referrals.to_string())
        })
        .collect();

    let chart_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(" Referrals per month ");

    let chart = BarChart::default()
        .block(chart_block)
        .bar_width(7)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bar_items));

    frame.render_widget(chart, area);
}

fn draw_summary(frame: &mut Frame, overview: &Overview, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Totals
            Constraint::Min(1),     // Gauge
        ])
        .split(area);

    let stats = &overview.stats;
    let info_text = vec![
        Line::from(vec![Span::styled(
            "Overview",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Referrals:  ", Style::default().fg(THEME.muted)),
            Span::styled(
                stats.total_referrals.to_string(),
                Style::default().fg(THEME.bars).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("This month: ", Style::default().fg(THEME.muted)),
            Span::styled(
                stats.monthly_referrals.to_string(),
                Style::default().fg(THEME.bars),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Earned:     ", Style::default().fg(THEME.muted)),
            Span::styled(
                format_eur(stats.total_earnings),
                Style::default().fg(THEME.earnings).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("This month: ", Style::default().fg(THEME.muted)),
            Span::styled(
                format_eur(stats.monthly_earnings),
                Style::default().fg(THEME.earnings),
            ),
        ]),
    ];

    let info_block = Paragraph::new(info_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted))
            .title(" Summary "),
    );
    frame.render_widget(info_block, chunks[0]);

    // Share of all referrals earned in the current month.
    let ratio = if stats.total_referrals > 0 {
        stats.monthly_referrals as f64 / stats.total_referrals as f64
    } else {
        0.0
    };
    let label = format!("{:.0}% this month", ratio * 100.0);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Current-month share ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted)),
        )
        .gauge_style(Style::default().fg(THEME.primary))
        .ratio(ratio.min(1.0))
        .label(label);

    frame.render_widget(gauge, chunks[1]);
}
