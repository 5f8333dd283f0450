use core::time::Duration;

use chestrs::{
    Chest, Easing, Game, GameEvent, GameOptions, GameState, LidAnimation, Outcome, Tween,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmChestGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmChestGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Result<WasmChestGame, JsValue> {
        Self::build(GameOptions::default(), seed)
    }

    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(seed: u32, options: JsValue) -> Result<WasmChestGame, JsValue> {
        let options: JsOptions = serde_wasm_bindgen::from_value(options)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        Self::build(options.into_options(), seed)
    }

    pub fn reset(&mut self, seed: u32) -> Result<(), JsValue> {
        let options = self.game.options.clone();
        self.game = Game::new(options, seed as u64).map_err(js_err)?;
        Ok(())
    }

    /// Routes a press on the play button. Presses while disabled are ignored.
    pub fn press_play(&self) -> bool {
        self.game.press_play().is_ok()
    }

    pub fn start_round(&self) {
        self.game.start_round();
    }

    /// Routes a press on a chest. Returns the revealed label, or nothing when
    /// the press was ignored.
    pub fn click_chest(&self, index: u32) -> Option<String> {
        self.game
            .click_chest(index as usize)
            .ok()
            .map(|outcome| outcome.label().to_string())
    }

    /// Moves the game clock forward; call from the animation frame loop.
    pub fn advance(&self, elapsed_ms: f64) -> u32 {
        if !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
            return 0;
        }
        let Ok(elapsed) = Duration::try_from_secs_f64(elapsed_ms / 1000.0) else {
            return 0;
        };
        self.game.advance(elapsed) as u32
    }

    pub fn drain_events(&self) -> Result<JsValue, JsValue> {
        let events: Vec<JsEvent> = self
            .game
            .drain_events()
            .into_iter()
            .map(JsEvent::from)
            .collect();
        to_js_value(&events)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let round = self.game.round_state();
        let display = self.game.display();

        let snapshot = Snapshot {
            state: state_to_str(self.game.state()),
            round: round.round,
            clock_ms: self.game.now().as_secs_f64() * 1000.0,
            remaining: round.remaining() as u32,
            opened_count: round.opened_count as u32,
            chest_count: round.chest_count as u32,
            score: round.score as f64,
            play_enabled: self.game.is_play_enabled(),
            chests: self.game.chests().iter().map(JsChest::from_chest).collect(),
            score_text: display.score_text().to_string(),
            banner_text: display.banner_text().to_string(),
            banner_visible: display.is_banner_visible(),
        };

        to_js_value(&snapshot)
    }
}

impl WasmChestGame {
    fn build(options: GameOptions, seed: u32) -> Result<Self, JsValue> {
        let game = Game::new(options, seed as u64).map_err(js_err)?;
        Ok(Self { game })
    }
}

/// Options accepted from JavaScript; missing fields keep their defaults.
#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct JsOptions {
    chest_count: Option<u32>,
    win_chance: Option<f64>,
    win_bonus_chance: Option<f64>,
    animation_duration_ms: Option<u32>,
    bonus_banner_duration_ms: Option<u32>,
    win_points: Option<u32>,
    bonus_points: Option<u32>,
}

impl JsOptions {
    fn into_options(self) -> GameOptions {
        let mut options = GameOptions::default();
        if let Some(count) = self.chest_count {
            options = options.with_chest_count(count as usize);
        }
        if let Some(chance) = self.win_chance {
            options = options.with_win_chance(chance);
        }
        if let Some(chance) = self.win_bonus_chance {
            options = options.with_win_bonus_chance(chance);
        }
        if let Some(ms) = self.animation_duration_ms {
            options = options.with_animation_duration(Duration::from_millis(ms.into()));
        }
        if let Some(ms) = self.bonus_banner_duration_ms {
            options = options.with_bonus_banner_duration(Duration::from_millis(ms.into()));
        }
        if let Some(points) = self.win_points {
            options = options.with_win_points(points.into());
        }
        if let Some(points) = self.bonus_points {
            options = options.with_bonus_points(points.into());
        }
        options
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    state: &'static str,
    round: u32,
    clock_ms: f64,
    remaining: u32,
    opened_count: u32,
    chest_count: u32,
    score: f64,
    play_enabled: bool,
    chests: Vec<JsChest>,
    score_text: String,
    banner_text: String,
    banner_visible: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsChest {
    index: u32,
    x: f32,
    y: f32,
    opened: bool,
    enabled: bool,
    label: Option<&'static str>,
    tint: u32,
    alpha: f32,
    lid_lift: f32,
    lid_rotation: f32,
}

impl JsChest {
    fn from_chest(chest: &Chest) -> Self {
        let slot = chest.slot();
        let affordance = chest.affordance();
        let lid = chest.lid();
        Self {
            index: chest.index() as u32,
            x: slot.x,
            y: slot.y,
            opened: chest.is_opened(),
            enabled: chest.is_enabled(),
            label: chest.label(),
            tint: affordance.tint,
            alpha: affordance.alpha,
            lid_lift: lid.lift,
            lid_rotation: lid.rotation,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsTween {
    lift: f32,
    rotation: f32,
    duration_ms: f64,
    easing: &'static str,
}

impl From<&Tween> for JsTween {
    fn from(tween: &Tween) -> Self {
        Self {
            lift: tween.to.lift,
            rotation: tween.to.rotation,
            duration_ms: tween.duration.as_secs_f64() * 1000.0,
            easing: easing_to_str(tween.easing),
        }
    }
}

fn animation_to_js(animation: &LidAnimation) -> Vec<JsTween> {
    animation.steps.iter().map(JsTween::from).collect()
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum JsEvent {
    RoundStarted { round: u32 },
    ChestEnabled { index: u32 },
    ChestDisabled { index: u32 },
    ChestOpened {
        index: u32,
        outcome: &'static str,
        label: &'static str,
        animation: Vec<JsTween>,
    },
    ChestReset { index: u32, animation: Vec<JsTween> },
    ScoreChanged { text: String },
    BonusBannerShown { text: String },
    BonusBannerHidden,
    PlayEnabled,
    PlayDisabled,
    RoundCompleted { round: u32, score: f64 },
}

impl From<GameEvent> for JsEvent {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::RoundStarted { round } => Self::RoundStarted { round },
            GameEvent::ChestEnabled { index } => Self::ChestEnabled {
                index: index as u32,
            },
            GameEvent::ChestDisabled { index } => Self::ChestDisabled {
                index: index as u32,
            },
            GameEvent::ChestOpened {
                index,
                outcome,
                animation,
            } => Self::ChestOpened {
                index: index as u32,
                outcome: outcome_to_str(outcome),
                label: outcome.label(),
                animation: animation_to_js(&animation),
            },
            GameEvent::ChestReset { index, animation } => Self::ChestReset {
                index: index as u32,
                animation: animation_to_js(&animation),
            },
            GameEvent::ScoreChanged { text } => Self::ScoreChanged { text },
            GameEvent::BonusBannerShown { text } => Self::BonusBannerShown { text },
            GameEvent::BonusBannerHidden => Self::BonusBannerHidden,
            GameEvent::PlayEnabled => Self::PlayEnabled,
            GameEvent::PlayDisabled => Self::PlayDisabled,
            GameEvent::RoundCompleted { round, score } => Self::RoundCompleted {
                round,
                score: score as f64,
            },
        }
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::Idle => "Idle",
        GameState::Picking => "Picking",
        GameState::Opening => "Opening",
        GameState::RoundOver => "RoundOver",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Lost => "Lost",
        Outcome::Win => "Win",
        Outcome::Bonus => "Bonus",
    }
}

fn easing_to_str(easing: Easing) -> &'static str {
    match easing {
        Easing::Power2Out => "power2.out",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
