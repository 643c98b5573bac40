//! Application state

use crate::export::{export_json, ExportError};
use pokecalc_core::{
    ball::{resolve_ball, BallResolution, PokeBall, SituationalFlags, SpecialRule},
    capture::{capture_probability, CaptureInput, CaptureResult},
    damage::{calculate_damage, DamageInput, DamageResult, HeldItem, Typing},
    types::{PokemonType, StatusCondition},
};
use serde::Serialize;
use std::path::PathBuf;

const MAX_LEVEL: u32 = 100;
const MIN_CATCH_RATE: u32 = 3;
const MAX_CATCH_RATE: u32 = 255;
const MAX_HP: u32 = 999;
const MAX_STAT: u32 = 999;
const MAX_POWER: u32 = 300;
const MAX_TURNS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Capture,
    Damage,
    TypeChart,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Capture, Tab::Damage, Tab::TypeChart, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Capture => "Capture",
            Tab::Damage => "Damage",
            Tab::TypeChart => "Type Chart",
            Tab::Help => "Help",
        }
    }
}

/// Editable rows on the capture tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureField {
    Level,
    CatchRate,
    MaxHp,
    CurrentHp,
    Status,
    WaterOrBug,
    Ball,
    /// The selected ball's situational condition, if it has one besides Water/Bug
    Condition,
}

impl CaptureField {
    pub fn label(&self) -> &'static str {
        match self {
            CaptureField::Level => "Level",
            CaptureField::CatchRate => "Base Catch Rate",
            CaptureField::MaxHp => "Max HP",
            CaptureField::CurrentHp => "Current HP",
            CaptureField::Status => "Status",
            CaptureField::WaterOrBug => "Water or Bug Type",
            CaptureField::Ball => "Poké Ball",
            CaptureField::Condition => "Condition",
        }
    }
}

/// Editable rows on the damage tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageField {
    Level,
    Attack,
    AttackerType1,
    AttackerType2,
    Power,
    MoveType,
    Critical,
    Item,
    Defense,
    DefenderType1,
    DefenderType2,
}

impl DamageField {
    pub fn all() -> &'static [DamageField] {
        &[
            DamageField::Level,
            DamageField::Attack,
            DamageField::AttackerType1,
            DamageField::AttackerType2,
            DamageField::Power,
            DamageField::MoveType,
            DamageField::Critical,
            DamageField::Item,
            DamageField::Defense,
            DamageField::DefenderType1,
            DamageField::DefenderType2,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DamageField::Level => "Level",
            DamageField::Attack => "Attack / Sp.Atk",
            DamageField::AttackerType1 => "Attacker Type",
            DamageField::AttackerType2 => "Attacker Type 2",
            DamageField::Power => "Base Power",
            DamageField::MoveType => "Move Type",
            DamageField::Critical => "Critical Hit",
            DamageField::Item => "Held Item",
            DamageField::Defense => "Defense / Sp.Def",
            DamageField::DefenderType1 => "Defender Type",
            DamageField::DefenderType2 => "Defender Type 2",
        }
    }
}

/// Raw capture form values
#[derive(Debug, Clone)]
pub struct CaptureForm {
    pub level: u32,
    pub base_catch_rate: u32,
    pub max_hp: u32,
    pub current_hp: u32,
    pub status: StatusCondition,
    pub ball_index: usize,
    pub flags: SituationalFlags,
}

impl Default for CaptureForm {
    fn default() -> Self {
        CaptureForm {
            level: 50,
            base_catch_rate: 45,
            max_hp: 100,
            current_hp: 50,
            status: StatusCondition::None,
            ball_index: 0,
            flags: SituationalFlags::default(),
        }
    }
}

/// Raw damage form values
#[derive(Debug, Clone)]
pub struct DamageForm {
    pub level: u32,
    pub attack: u32,
    pub defense: u32,
    pub power: u32,
    pub move_type: PokemonType,
    pub attacker_type1: PokemonType,
    pub attacker_type2: Option<PokemonType>,
    pub defender_type1: PokemonType,
    pub defender_type2: Option<PokemonType>,
    pub critical: bool,
    pub item: HeldItem,
}

impl Default for DamageForm {
    fn default() -> Self {
        DamageForm {
            level: 50,
            attack: 100,
            defense: 100,
            power: 80,
            move_type: PokemonType::Normal,
            attacker_type1: PokemonType::Normal,
            attacker_type2: None,
            defender_type1: PokemonType::Normal,
            defender_type2: None,
            critical: false,
            item: HeldItem::None,
        }
    }
}

impl DamageForm {
    pub fn to_input(&self) -> DamageInput {
        DamageInput {
            level: self.level,
            power: self.power,
            attack: self.attack,
            defense: self.defense,
            attacker: Typing::new(self.attacker_type1, self.attacker_type2),
            defender: Typing::new(self.defender_type1, self.defender_type2),
            move_type: self.move_type,
            critical: self.critical,
            item_multiplier: self.item.multiplier(),
        }
    }
}

/// Apply a signed step to a value and clamp it into `min..=max`
pub fn step_clamped(value: u32, delta: i32, min: u32, max: u32) -> u32 {
    let stepped = value as i64 + delta as i64;
    stepped.clamp(min as i64, max as i64) as u32
}

fn cycle_optional_type(current: Option<PokemonType>, forward: bool) -> Option<PokemonType> {
    match (current, forward) {
        (None, true) => Some(PokemonType::ALL[0]),
        (None, false) => Some(PokemonType::ALL[PokemonType::ALL.len() - 1]),
        (Some(PokemonType::Fairy), true) => None,
        (Some(PokemonType::Normal), false) => None,
        (Some(t), true) => Some(t.next()),
        (Some(t), false) => Some(t.prev()),
    }
}

#[derive(Serialize)]
struct CaptureExport<'a> {
    ball: &'a str,
    ball_multiplier: f64,
    input: &'a CaptureInput,
    result: &'a CaptureResult,
}

#[derive(Serialize)]
struct DamageExport<'a> {
    input: &'a DamageInput,
    result: &'a DamageResult,
}

pub struct App {
    pub current_tab: Tab,
    pub balls: Vec<PokeBall>,
    pub capture: CaptureForm,
    pub capture_selected: usize,
    pub damage: DamageForm,
    pub damage_selected: usize,
    /// (attacking, defending) cursor on the type chart
    pub chart_cursor: (usize, usize),
    pub status_message: Option<String>,
    /// Tab to go back to when help is dismissed
    return_tab: Tab,
    pub export_dir: PathBuf,
}

impl App {
    pub fn new(balls: Vec<PokeBall>) -> Self {
        App {
            current_tab: Tab::Capture,
            balls,
            capture: CaptureForm::default(),
            capture_selected: 0,
            damage: DamageForm::default(),
            damage_selected: 0,
            chart_cursor: (PokemonType::Fire.index(), PokemonType::Normal.index()),
            status_message: None,
            return_tab: Tab::Capture,
            export_dir: PathBuf::from("."),
        }
    }

    // === Navigation ===

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + 1) % tabs.len()];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + tabs.len() - 1) % tabs.len()];
    }

    pub fn set_tab(&mut self, index: usize) {
        if let Some(tab) = Tab::all().get(index) {
            self.current_tab = *tab;
        }
    }

    pub fn toggle_help(&mut self) {
        if self.current_tab == Tab::Help {
            self.current_tab = self.return_tab;
        } else {
            self.return_tab = self.current_tab;
            self.current_tab = Tab::Help;
        }
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Capture => {
                self.capture_selected = self.capture_selected.saturating_sub(1);
            }
            Tab::Damage => {
                self.damage_selected = self.damage_selected.saturating_sub(1);
            }
            Tab::TypeChart => {
                self.chart_cursor.0 = self.chart_cursor.0.saturating_sub(1);
            }
            Tab::Help => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Capture => {
                let last = self.capture_fields().len().saturating_sub(1);
                self.capture_selected = (self.capture_selected + 1).min(last);
            }
            Tab::Damage => {
                let last = DamageField::all().len() - 1;
                self.damage_selected = (self.damage_selected + 1).min(last);
            }
            Tab::TypeChart => {
                self.chart_cursor.0 = (self.chart_cursor.0 + 1).min(PokemonType::ALL.len() - 1);
            }
            Tab::Help => {}
        }
    }

    pub fn on_left(&mut self) {
        self.adjust(-1);
    }

    pub fn on_right(&mut self) {
        self.adjust(1);
    }

    /// Larger step for numeric fields
    pub fn on_big_left(&mut self) {
        self.adjust(-10);
    }

    pub fn on_big_right(&mut self) {
        self.adjust(10);
    }

    pub fn on_space(&mut self) {
        match self.current_tab {
            Tab::Capture => match self.selected_capture_field() {
                Some(CaptureField::WaterOrBug) | Some(CaptureField::Condition) => self.adjust(1),
                _ => {}
            },
            Tab::Damage => {
                if self.selected_damage_field() == DamageField::Critical {
                    self.damage.critical = !self.damage.critical;
                }
            }
            _ => {}
        }
    }

    pub fn reset(&mut self) {
        match self.current_tab {
            Tab::Capture => {
                self.capture = CaptureForm::default();
                self.capture_selected = 0;
            }
            Tab::Damage => {
                self.damage = DamageForm::default();
                self.damage_selected = 0;
            }
            _ => {}
        }
        self.status_message = Some("Reset to defaults".to_string());
    }

    fn adjust(&mut self, delta: i32) {
        match self.current_tab {
            Tab::Capture => self.adjust_capture(delta),
            Tab::Damage => self.adjust_damage(delta),
            Tab::TypeChart => {
                let col = self.chart_cursor.1 as i32 + delta.signum();
                self.chart_cursor.1 = col.clamp(0, PokemonType::ALL.len() as i32 - 1) as usize;
            }
            Tab::Help => {}
        }
    }

    // === Capture tab ===

    pub fn selected_ball(&self) -> &PokeBall {
        &self.balls[self.capture.ball_index.min(self.balls.len() - 1)]
    }

    /// Rows shown on the capture tab; the condition row depends on the ball
    pub fn capture_fields(&self) -> Vec<CaptureField> {
        let mut fields = vec![
            CaptureField::Level,
            CaptureField::CatchRate,
            CaptureField::MaxHp,
            CaptureField::CurrentHp,
            CaptureField::Status,
            CaptureField::WaterOrBug,
            CaptureField::Ball,
        ];
        match self.selected_ball().special {
            Some(SpecialRule::WaterBug) | None => {}
            Some(_) => fields.push(CaptureField::Condition),
        }
        fields
    }

    pub fn selected_capture_field(&self) -> Option<CaptureField> {
        self.capture_fields().get(self.capture_selected).copied()
    }

    fn adjust_capture(&mut self, delta: i32) {
        let Some(field) = self.selected_capture_field() else {
            return;
        };
        let form = &mut self.capture;
        match field {
            CaptureField::Level => form.level = step_clamped(form.level, delta, 1, MAX_LEVEL),
            CaptureField::CatchRate => {
                form.base_catch_rate =
                    step_clamped(form.base_catch_rate, delta, MIN_CATCH_RATE, MAX_CATCH_RATE)
            }
            CaptureField::MaxHp => {
                form.max_hp = step_clamped(form.max_hp, delta, 1, MAX_HP);
                form.current_hp = form.current_hp.min(form.max_hp);
            }
            CaptureField::CurrentHp => {
                form.current_hp = step_clamped(form.current_hp, delta, 1, form.max_hp)
            }
            CaptureField::Status => {
                let all = StatusCondition::ALL;
                let idx = all.iter().position(|s| *s == form.status).unwrap_or(0) as i32;
                let next = (idx + delta.signum()).rem_euclid(all.len() as i32) as usize;
                form.status = all[next];
            }
            CaptureField::WaterOrBug => {
                form.flags.defender_is_water_or_bug = !form.flags.defender_is_water_or_bug
            }
            CaptureField::Ball => {
                let len = self.balls.len() as i32;
                let next = (form.ball_index as i32 + delta.signum()).rem_euclid(len);
                form.ball_index = next as usize;
                // The condition row may have disappeared
                let last = self.capture_fields().len() - 1;
                self.capture_selected = self.capture_selected.min(last);
            }
            CaptureField::Condition => {
                let Some(rule) = self.selected_ball().special else {
                    return;
                };
                let flags = &mut self.capture.flags;
                match rule {
                    SpecialRule::FirstTurn => flags.is_first_turn = !flags.is_first_turn,
                    SpecialRule::NightCave => flags.is_night_or_cave = !flags.is_night_or_cave,
                    SpecialRule::WaterEncounter => {
                        flags.is_water_encounter = !flags.is_water_encounter
                    }
                    SpecialRule::Repeat => flags.is_previously_caught = !flags.is_previously_caught,
                    SpecialRule::OverTime => {
                        flags.turn_count = step_clamped(flags.turn_count, delta, 1, MAX_TURNS)
                    }
                    SpecialRule::WaterBug => {
                        flags.defender_is_water_or_bug = !flags.defender_is_water_or_bug
                    }
                }
            }
        }
    }

    pub fn ball_resolution(&self) -> BallResolution {
        resolve_ball(self.selected_ball(), &self.capture.flags)
    }

    pub fn capture_input(&self) -> CaptureInput {
        CaptureInput {
            max_hp: self.capture.max_hp,
            current_hp: self.capture.current_hp,
            base_catch_rate: self.capture.base_catch_rate,
            ball_multiplier: self.ball_resolution().multiplier,
            status_multiplier: self.capture.status.multiplier(),
            level: self.capture.level,
        }
    }

    pub fn capture_result(&self) -> CaptureResult {
        capture_probability(&self.capture_input())
    }

    // === Damage tab ===

    pub fn selected_damage_field(&self) -> DamageField {
        DamageField::all()[self.damage_selected.min(DamageField::all().len() - 1)]
    }

    fn adjust_damage(&mut self, delta: i32) {
        let forward = delta > 0;
        let field = self.selected_damage_field();
        let form = &mut self.damage;
        match field {
            DamageField::Level => form.level = step_clamped(form.level, delta, 1, MAX_LEVEL),
            DamageField::Attack => form.attack = step_clamped(form.attack, delta, 1, MAX_STAT),
            DamageField::Defense => form.defense = step_clamped(form.defense, delta, 1, MAX_STAT),
            DamageField::Power => form.power = step_clamped(form.power, delta, 0, MAX_POWER),
            DamageField::MoveType => {
                form.move_type = if forward { form.move_type.next() } else { form.move_type.prev() }
            }
            DamageField::AttackerType1 => {
                form.attacker_type1 = if forward {
                    form.attacker_type1.next()
                } else {
                    form.attacker_type1.prev()
                }
            }
            DamageField::AttackerType2 => {
                form.attacker_type2 = cycle_optional_type(form.attacker_type2, forward)
            }
            DamageField::DefenderType1 => {
                form.defender_type1 = if forward {
                    form.defender_type1.next()
                } else {
                    form.defender_type1.prev()
                }
            }
            DamageField::DefenderType2 => {
                form.defender_type2 = cycle_optional_type(form.defender_type2, forward)
            }
            DamageField::Critical => form.critical = !form.critical,
            DamageField::Item => {
                form.item = if forward { form.item.next() } else { form.item.prev() }
            }
        }
    }

    pub fn damage_result(&self) -> DamageResult {
        calculate_damage(&self.damage.to_input())
    }

    // === Type chart tab ===

    pub fn chart_selection(&self) -> (PokemonType, PokemonType) {
        (
            PokemonType::ALL[self.chart_cursor.0],
            PokemonType::ALL[self.chart_cursor.1],
        )
    }

    // === Export ===

    /// Write the current tab's result as JSON
    pub fn export_current(&mut self) {
        let outcome = match self.current_tab {
            Tab::Capture => self.export_capture(),
            Tab::Damage => self.export_damage(),
            _ => {
                self.status_message = Some("Nothing to export on this tab".to_string());
                return;
            }
        };

        self.status_message = Some(match outcome {
            Ok(path) => {
                tracing::info!(path = %path.display(), "exported result");
                format!("Exported to {}", path.display())
            }
            Err(err) => {
                tracing::warn!(error = %err, "export failed");
                format!("Export failed: {}", err)
            }
        });
    }

    fn export_capture(&self) -> Result<PathBuf, ExportError> {
        let input = self.capture_input();
        let result = capture_probability(&input);
        let export = CaptureExport {
            ball: &self.selected_ball().name,
            ball_multiplier: input.ball_multiplier,
            input: &input,
            result: &result,
        };
        export_json(&self.export_dir.join("capture_result.json"), &export)
    }

    fn export_damage(&self) -> Result<PathBuf, ExportError> {
        let input = self.damage.to_input();
        let result = calculate_damage(&input);
        let export = DamageExport {
            input: &input,
            result: &result,
        };
        export_json(&self.export_dir.join("damage_result.json"), &export)
    }
}
