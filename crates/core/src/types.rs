use std::borrow::Cow;
use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;

use crate::content::ItemId;
use crate::state::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub const fn new(r: i32, c: i32) -> Self {
        Self { r, c }
    }

    pub fn offset(self, dr: i32, dc: i32) -> Self {
        Self { r: self.r + dr, c: self.c + dc }
    }

    pub fn step(self, direction: Direction, distance: i32) -> Self {
        let (dr, dc) = direction.delta();
        self.offset(dr * distance, dc * distance)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }
}

/// A single discrete action token after parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Move(Direction),
    Yes,
    No,
    /// 1-based index into the offered reward list.
    Choice(usize),
    ItemKey(char),
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputParseError {
    #[error("empty input token")]
    Empty,
    #[error("unrecognized input token `{0}`")]
    Unrecognized(String),
}

impl FromStr for Input {
    type Err = InputParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim().to_ascii_lowercase();
        if token.is_empty() {
            return Err(InputParseError::Empty);
        }

        let input = match token.as_str() {
            "up" | "w" => Input::Move(Direction::Up),
            "down" | "s" => Input::Move(Direction::Down),
            "left" | "a" => Input::Move(Direction::Left),
            "right" | "d" => Input::Move(Direction::Right),
            "up_left" => Input::Move(Direction::UpLeft),
            "up_right" => Input::Move(Direction::UpRight),
            "down_left" => Input::Move(Direction::DownLeft),
            "down_right" => Input::Move(Direction::DownRight),
            "yes" => Input::Yes,
            "no" => Input::No,
            numeric if numeric.bytes().all(|b| b.is_ascii_digit()) => {
                let index = numeric
                    .parse::<usize>()
                    .map_err(|_| InputParseError::Unrecognized(token.clone()))?;
                Input::Choice(index)
            }
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(key), None) => Input::ItemKey(key),
                    _ => return Err(InputParseError::Unrecognized(token)),
                }
            }
        };
        Ok(input)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Mode {
    Playing,
    ConfirmNextFloor,
    ChoosingItem { offers: Vec<ItemId> },
    ReconDirection,
    JumpingDirection,
    GameOver,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Playing => "playing",
            Mode::ConfirmNextFloor => "confirm_next_floor",
            Mode::ChoosingItem { .. } => "choosing_item",
            Mode::ReconDirection => "recon_direction",
            Mode::JumpingDirection => "jumping_direction",
            Mode::GameOver => "gameover",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UiEffect {
    FlashRed,
}

/// Follow-up the caller must perform once the current transition has settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineAction {
    AdvanceFloor,
}

/// Opaque bilingual payload. The engine never picks a language.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Text {
    pub ja: Cow<'static, str>,
    pub en: Cow<'static, str>,
}

impl Text {
    pub const fn fixed(ja: &'static str, en: &'static str) -> Self {
        Self { ja: Cow::Borrowed(ja), en: Cow::Borrowed(en) }
    }

    pub fn owned(ja: String, en: String) -> Self {
        Self { ja: Cow::Owned(ja), en: Cow::Owned(en) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tutorial {
    pub title: Text,
    pub content: Text,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FloorRevelation {
    pub floor: u32,
    pub revealed_fraction: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplayState {
    pub grid: Grid,
    pub player: Pos,
    pub exit: Pos,
    pub floor: u32,
    pub items: Vec<ItemId>,
    pub turn: u32,
    pub mode: Mode,
    pub exit_revealed_this_floor: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AcquiredItem {
    pub id: ItemId,
    pub name: Text,
    pub description: Text,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayView {
    pub display: DisplayState,
    pub prompt: String,
    pub message: &'static str,
    pub last_action_message: Option<Text>,
    pub ui_effect: Option<UiEffect>,
    pub new_item_acquired: Option<AcquiredItem>,
    pub tutorial: Option<Tutorial>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunSummary {
    pub final_floor: u32,
    pub final_items: BTreeMap<ItemId, u32>,
    pub floor_revelations: Vec<FloorRevelation>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameOverView {
    pub display: DisplayState,
    pub message: &'static str,
    pub last_action_message: Option<Text>,
    pub summary: RunSummary,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnResult {
    InProgress(PlayView),
    GameOver(GameOverView),
}

impl TurnResult {
    pub fn display(&self) -> &DisplayState {
        match self {
            TurnResult::InProgress(view) => &view.display,
            TurnResult::GameOver(view) => &view.display,
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, TurnResult::GameOver(_))
    }
}
