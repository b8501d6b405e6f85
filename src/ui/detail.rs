use crate::app::App;
use crate::presenter;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let movie = match &app.detail {
        Some(m) => m,
        None => return,
    };

    // Layout: header(4) + summary(min) + cast(40%) + status(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Percentage(40),
            Constraint::Length(1),
        ])
        .split(area);

    // ── Metadata header ──
    let meta_lines = vec![
        Line::from(vec![
            Span::styled(" Title: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                presenter::display_title(movie),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Poster: ", Style::default().fg(Color::DarkGray)),
            Span::styled(&movie.poster, Style::default().fg(Color::Cyan)),
            Span::raw("   "),
            Span::styled("Cast size: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                movie.cast.len().to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    let meta_block = Paragraph::new(meta_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Movie Detail "),
    );
    frame.render_widget(meta_block, chunks[0]);

    // ── Summary ──
    let summary = Paragraph::new(movie.summary.as_str())
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Summary ")
                .title_bottom(
                    Line::from(format!(" scroll: {} ", app.detail_scroll))
                        .alignment(Alignment::Right),
                ),
        );
    frame.render_widget(summary, chunks[1]);

    // ── Cast ──
    let cast_text = presenter::cast_list(movie);
    let cast = Paragraph::new(cast_text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Cast "),
        );
    frame.render_widget(cast, chunks[2]);

    // ── Status bar ──
    let status_line = Line::from(vec![
        Span::styled(
            " ↑↓/PgUp/PgDn",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Scroll  "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Back  "),
        Span::styled(
            "?",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Help"),
    ]);
    let status_bar = Paragraph::new(status_line);
    frame.render_widget(status_bar, chunks[3]);
}
