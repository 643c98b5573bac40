//! Capture tab - form on the left, probability and breakdown on the right

use super::{breakdown_line, check, field_line, progress_bar, section_header};
use crate::app::{App, CaptureField};
use pokecalc_core::{
    ball::SpecialRule,
    capture::{CaptureOutlook, CaptureResult},
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
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

fn outlook_color(outlook: CaptureOutlook) -> Color {
    match outlook {
        CaptureOutlook::VeryLikely => Color::Green,
        CaptureOutlook::Good => Color::Yellow,
        CaptureOutlook::Possible => Color::Rgb(255, 165, 0),
        CaptureOutlook::Tough => Color::Red,
    }
}

fn hp_color(current: u32, max: u32) -> Color {
    let ratio = current as f64 / max.max(1) as f64;
    if ratio > 0.5 {
        Color::Green
    } else if ratio > 0.2 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn field_value(app: &App, field: CaptureField) -> String {
    let form = &app.capture;
    match field {
        CaptureField::Level => form.level.to_string(),
        CaptureField::CatchRate => format!("{} / 255", form.base_catch_rate),
        CaptureField::MaxHp => form.max_hp.to_string(),
        CaptureField::CurrentHp => form.current_hp.to_string(),
        CaptureField::Status => format!(
            "[{}] {} (×{})",
            form.status.abbreviation(),
            super::title_case(form.status.name()),
            form.status.multiplier()
        ),
        CaptureField::WaterOrBug => check(form.flags.defender_is_water_or_bug),
        CaptureField::Ball => {
            let ball = app.selected_ball();
            format!("◀ {} ▶", ball.name)
        }
        CaptureField::Condition => match app.selected_ball().special {
            Some(SpecialRule::OverTime) => format!("{} / 10", form.flags.turn_count),
            Some(SpecialRule::FirstTurn) => check(form.flags.is_first_turn),
            Some(SpecialRule::NightCave) => check(form.flags.is_night_or_cave),
            Some(SpecialRule::WaterEncounter) => check(form.flags.is_water_encounter),
            Some(SpecialRule::Repeat) => check(form.flags.is_previously_caught),
            Some(SpecialRule::WaterBug) => check(form.flags.defender_is_water_or_bug),
            None => String::new(),
        },
    }
}

fn field_label(app: &App, field: CaptureField) -> &'static str {
    match (field, app.selected_ball().special) {
        (CaptureField::Condition, Some(rule)) => rule.condition_label(),
        _ => field.label(),
    }
}

fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let selected = app.selected_capture_field();
    let mut lines = vec![section_header("Wild Pokémon")];

    for field in app.capture_fields() {
        if field == CaptureField::Ball {
            lines.push(Line::from(""));
            lines.push(section_header("Ball"));
        }
        lines.push(field_line(
            field_label(app, field),
            field_value(app, field),
            selected == Some(field),
        ));
        if field == CaptureField::CurrentHp {
            let form = &app.capture;
            let mut bar = progress_bar(
                form.current_hp as f64,
                form.max_hp as f64,
                20,
                hp_color(form.current_hp, form.max_hp),
            );
            bar.spans.insert(0, Span::raw("    HP "));
            lines.push(bar);
        }
    }

    let ball = app.selected_ball();
    let resolution = app.ball_resolution();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", ball.description),
        Style::default().fg(Color::DarkGray),
    )));
    let multiplier_style = if resolution.condition_met {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    lines.push(Line::from(vec![
        Span::styled("  Multiplier: ", Style::default().fg(Color::Gray)),
        Span::styled(format!("×{}", resolution.multiplier), multiplier_style),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Capture Setup "))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn draw_result(f: &mut Frame, app: &App, area: Rect) {
    let result = app.capture_result();
    let lines = result_lines(&result);

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Catch Probability "));

    f.render_widget(paragraph, area);
}

fn result_lines(result: &CaptureResult) -> Vec<Line<'static>> {
    let outlook = result.outlook();
    let color = outlook_color(outlook);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {:.2}%", result.probability),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        {
            let mut bar = progress_bar(result.probability, 100.0, 30, color);
            bar.spans.insert(0, Span::raw("  "));
            bar
        },
        Line::from(Span::styled(
            format!("  {}", outlook.message()),
            Style::default().fg(color),
        )),
        Line::from(""),
        section_header("Breakdown"),
    ];

    for term in &result.breakdown {
        lines.push(breakdown_line(&term.label, &term.effect));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!("  {:22}", "Modified Catch Rate"), Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{:.2} / 255", result.modified_catch_rate),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled(format!("  {:22}", "HP Factor"), Style::default().fg(Color::Gray)),
        Span::styled(format!("{:.3}", result.hp_factor), Style::default().fg(Color::White)),
    ]));

    if result.is_guaranteed() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Guaranteed catch!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokecalc_core::{default_balls, types::StatusCondition};

    #[test]
    fn test_status_row_shows_badge() {
        let mut app = App::new(default_balls());
        assert_eq!(field_value(&app, CaptureField::Status), "[---] None (×1)");
        app.capture.status = StatusCondition::Paralysis;
        assert_eq!(field_value(&app, CaptureField::Status), "[PAR] Paralysis (×1.5)");
    }

    #[test]
    fn test_condition_row_uses_rule_label() {
        let mut app = App::new(default_balls());
        app.capture.ball_index = app.balls.iter().position(|b| b.id == "timerball").unwrap();
        assert_eq!(field_label(&app, CaptureField::Condition), "Turn Count");
        assert_eq!(field_value(&app, CaptureField::Condition), "1 / 10");
    }
}
