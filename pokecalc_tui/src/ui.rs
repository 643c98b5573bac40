//! UI rendering

mod capture_view;
mod damage_view;
mod help_view;
mod type_chart_view;

use crate::app::{App, Tab};
use pokecalc_core::{type_chart::Effectiveness, types::PokemonType};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Capture => capture_view::draw(f, app, chunks[1]),
        Tab::Damage => damage_view::draw(f, app, chunks[1]),
        Tab::TypeChart => type_chart_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![("x", "Export"), ("Tab", "Next tab"), ("q", "Quit")];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Capture | Tab::Damage => vec![
            ("↑/↓", "Field"),
            ("←/→", "Adjust"),
            ("H/L", "±10"),
            ("Space", "Toggle"),
            ("r", "Reset"),
        ],
        Tab::TypeChart => vec![("↑/↓", "Attacker"), ("←/→", "Defender")],
        Tab::Help => vec![],
    };

    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::White)));
    }

    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(format!("[{}]", key), Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
    }

    let title = match &app.status_message {
        Some(message) => format!(" {} ", message),
        None => " Keys ".to_string(),
    };

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(title))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" Poké Calculator "))
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

pub fn progress_bar(current: f64, max: f64, width: u16, filled_color: Color) -> Line<'static> {
    let percent = if max > 0.0 { (current / max).clamp(0.0, 1.0) } else { 0.0 };
    let filled = (percent * width as f64) as usize;
    let empty = width as usize - filled;

    Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(filled_color)),
        Span::styled("░".repeat(empty), Style::default().fg(Color::DarkGray)),
    ])
}

pub fn section_header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

/// An editable form row, highlighted when selected
pub fn field_line(label: &str, value: String, selected: bool) -> Line<'static> {
    let marker = if selected { "▶ " } else { "  " };
    let value_style = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Yellow)),
        Span::styled(format!("{:20}", label), Style::default().fg(Color::Gray)),
        Span::styled(value, value_style),
    ])
}

pub fn breakdown_line(label: &str, effect: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:22}", label), Style::default().fg(Color::Gray)),
        Span::styled(effect.to_string(), Style::default().fg(Color::White)),
    ])
}

pub fn check(flag: bool) -> String {
    let mark = if flag { "[x]" } else { "[ ]" };
    mark.to_string()
}

/// "fire" -> "Fire"
pub fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn type_color(t: PokemonType) -> Color {
    match t {
        PokemonType::Normal => Color::Gray,
        PokemonType::Fire => Color::LightRed,
        PokemonType::Water => Color::LightBlue,
        PokemonType::Electric => Color::Yellow,
        PokemonType::Grass => Color::LightGreen,
        PokemonType::Ice => Color::LightCyan,
        PokemonType::Fighting => Color::Red,
        PokemonType::Poison => Color::Magenta,
        PokemonType::Ground => Color::Rgb(226, 191, 101),
        PokemonType::Flying => Color::Rgb(169, 143, 243),
        PokemonType::Psychic => Color::LightMagenta,
        PokemonType::Bug => Color::Green,
        PokemonType::Rock => Color::Rgb(182, 161, 54),
        PokemonType::Ghost => Color::Rgb(115, 87, 151),
        PokemonType::Dragon => Color::Blue,
        PokemonType::Dark => Color::DarkGray,
        PokemonType::Steel => Color::White,
        PokemonType::Fairy => Color::Rgb(214, 133, 173),
    }
}

pub fn type_span(t: PokemonType) -> Span<'static> {
    Span::styled(title_case(t.name()), Style::default().fg(type_color(t)))
}

/// Colour for a chart multiplier
pub fn effectiveness_color(multiplier: f64) -> Color {
    match Effectiveness::from_multiplier(multiplier) {
        Effectiveness::NoEffect => Color::DarkGray,
        Effectiveness::QuarterEffective | Effectiveness::HalfEffective => Color::Red,
        Effectiveness::Neutral => Color::Gray,
        Effectiveness::SuperEffective | Effectiveness::DoubleSuperEffective => Color::Green,
    }
}
