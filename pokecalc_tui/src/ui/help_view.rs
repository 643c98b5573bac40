//! Help tab view

use super::section_header;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        section_header("Navigation"),
        key_line("1-4", "Jump to tab (Capture/Damage/Chart/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Select field"),
        key_line("←/h  →/l", "Adjust value"),
        key_line("H / L", "Adjust by 10"),
        key_line("Space / Enter", "Toggle checkbox"),
        key_line("r", "Reset form"),
        key_line("x", "Export result as JSON"),
        key_line("?", "Toggle help"),
        key_line("q / Ctrl+C", "Quit"),
        Line::from(""),
        section_header("Capture Formula"),
        Line::from("  HP Factor  = (3 × MaxHP − 2 × CurrentHP) / (3 × MaxHP)"),
        Line::from("  Rate       = HP Factor × Catch Rate × Ball × Status"),
        Line::from("  Chance     = Rate / 255 × 100%, capped at 100%"),
        Line::from("  Status: Sleep/Freeze ×2.5, Paralysis/Burn/Poison ×1.5"),
        Line::from(""),
        section_header("Damage Formula"),
        Line::from("  Base = ⌊(2 × Level / 5 + 2) × Power × Atk / Def / 50⌋ + 2"),
        Line::from("  Mod  = STAB ×1.5 × Type × Critical ×1.5 × Item"),
        Line::from("  Range = ⌊Base × Mod × 0.85⌋ to ⌊Base × Mod⌋"),
        Line::from(""),
        section_header("Ball Table"),
    ];

    for ball in &app.balls {
        let rule = match ball.special {
            Some(rule) => format!("×{} when {}", rule.boosted_multiplier(), rule.condition_label()),
            None => format!("×{}", ball.multiplier),
        };
        lines.push(key_line(&ball.name, &rule));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help "))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
