//! Damage tab

use super::{breakdown_line, check, field_line, section_header, title_case, type_color, type_span};
use crate::app::{App, DamageField};
use pokecalc_core::{damage::HitsToKo, type_chart::Effectiveness, types::PokemonType};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_form(f, app, chunks[0]);
    draw_result(f, app, chunks[1]);
}

fn type_value(t: Option<PokemonType>) -> String {
    match t {
        Some(t) => title_case(t.name()),
        None => "(none)".to_string(),
    }
}

fn field_value(app: &App, field: DamageField) -> String {
    let form = &app.damage;
    match field {
        DamageField::Level => form.level.to_string(),
        DamageField::Attack => form.attack.to_string(),
        DamageField::Defense => form.defense.to_string(),
        DamageField::Power => form.power.to_string(),
        DamageField::MoveType => type_value(Some(form.move_type)),
        DamageField::AttackerType1 => type_value(Some(form.attacker_type1)),
        DamageField::AttackerType2 => type_value(form.attacker_type2),
        DamageField::DefenderType1 => type_value(Some(form.defender_type1)),
        DamageField::DefenderType2 => type_value(form.defender_type2),
        DamageField::Critical => check(form.critical),
        DamageField::Item => format!("{} (×{})", form.item.name(), form.item.multiplier()),
    }
}

fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let selected = app.selected_damage_field();
    let mut lines = vec![section_header("Attacker")];

    for field in DamageField::all() {
        match field {
            DamageField::Power => {
                lines.push(Line::from(""));
                lines.push(section_header("Move"));
            }
            DamageField::Defense => {
                lines.push(Line::from(""));
                lines.push(section_header("Defender"));
            }
            _ => {}
        }
        lines.push(field_line(field.label(), field_value(app, *field), *field == selected));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Battle Setup "));

    f.render_widget(paragraph, area);
}

fn effectiveness_style(effectiveness: Effectiveness) -> Style {
    if effectiveness.is_super_effective() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else if effectiveness.is_resisted() {
        Style::default().fg(Color::Red)
    } else if effectiveness == Effectiveness::NoEffect {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    }
}

fn draw_result(f: &mut Frame, app: &App, area: Rect) {
    let result = app.damage_result();
    let move_type = app.damage.move_type;

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                result.range_summary(),
                Style::default().fg(type_color(move_type)).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" damage", Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::raw("  "),
            type_span(move_type),
            Span::raw(" move: "),
            Span::styled(
                result.effectiveness_label.clone(),
                effectiveness_style(result.effectiveness),
            ),
        ]),
    ];

    if result.stab {
        lines.push(Line::from(Span::styled(
            "  Same-type attack bonus",
            Style::default().fg(Color::Cyan),
        )));
    }

    lines.push(Line::from(""));
    lines.push(section_header("Breakdown"));
    for term in &result.breakdown {
        lines.push(breakdown_line(&term.label, &term.value));
    }
    lines.push(breakdown_line("Base Damage", &result.base_damage.to_string()));

    lines.push(Line::from(""));
    lines.push(section_header("Against 100 HP"));
    lines.push(breakdown_line("Average Damage", &format!("{:.1}", result.average())));
    let ko = match result.hits_to_ko {
        HitsToKo::Hits(1) => "1 hit".to_string(),
        HitsToKo::Hits(n) => format!("{} hits", n),
        HitsToKo::Unbounded => format!("{} (no damage)", result.hits_to_ko),
    };
    lines.push(breakdown_line("Hits to KO", &ko));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Damage Range "));

    f.render_widget(paragraph, area);
}
