//! Type chart tab - full 18×18 grid with a cursor

use super::{effectiveness_color, section_header, type_span};
use crate::app::App;
use pokecalc_core::{
    type_chart::{chart_symbol, effectiveness, row, Effectiveness},
    types::PokemonType,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CELL_WIDTH: usize = 4;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(21), Constraint::Length(6)])
        .split(area);

    draw_grid(f, app, chunks[0]);
    draw_detail(f, app, chunks[1]);
}

fn header_style(highlighted: bool) -> Style {
    if highlighted {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn draw_grid(f: &mut Frame, app: &App, area: Rect) {
    let (cursor_row, cursor_col) = app.chart_cursor;
    let mut lines: Vec<Line> = Vec::with_capacity(PokemonType::ALL.len() + 1);

    // Defending types across the top
    let mut header = vec![Span::raw(format!("{:>9}", "ATK \\ DEF"))];
    for (col, t) in PokemonType::ALL.iter().enumerate() {
        header.push(Span::styled(
            format!("{:>width$}", t.short_name().to_uppercase(), width = CELL_WIDTH),
            header_style(col == cursor_col),
        ));
    }
    lines.push(Line::from(header));

    for (r, attack) in PokemonType::ALL.iter().enumerate() {
        let mut spans = vec![Span::styled(
            format!("{:>9}", attack.short_name().to_uppercase()),
            header_style(r == cursor_row),
        )];
        for (c, multiplier) in row(*attack).iter().enumerate() {
            let mut style = Style::default().fg(effectiveness_color(*multiplier));
            if r == cursor_row && c == cursor_col {
                style = style.bg(Color::Yellow).fg(Color::Black).add_modifier(Modifier::BOLD);
            } else if r == cursor_row || c == cursor_col {
                style = style.bg(Color::Rgb(40, 40, 40));
            }
            spans.push(Span::styled(
                format!("{:>width$}", chart_symbol(*multiplier), width = CELL_WIDTH),
                style,
            ));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Type Chart "));

    f.render_widget(paragraph, area);
}

fn draw_detail(f: &mut Frame, app: &App, area: Rect) {
    let (attack, defend) = app.chart_selection();
    let multiplier = effectiveness(attack, defend);
    let label = Effectiveness::from_multiplier(multiplier).label();

    let lines = vec![
        section_header("Matchup"),
        Line::from(vec![
            Span::raw("  "),
            type_span(attack),
            Span::raw(" → "),
            type_span(defend),
            Span::raw(": "),
            Span::styled(
                format!("×{}", multiplier),
                Style::default().fg(effectiveness_color(multiplier)).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", label), Style::default().fg(Color::Gray)),
        ]),
        Line::from(Span::styled(
            "  Rows attack, columns defend. 0 immune, ½ resisted, 2 super effective.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}
