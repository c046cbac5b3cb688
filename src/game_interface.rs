use serde::{Deserialize, Serialize};

/// Numbers in the server's TypeScript payloads can be anything under the sun,
/// but board coordinates and movement deltas fit comfortably in i32.
/// Change this type if you hit deserialization errors with numbers.
pub type Number = i32;

#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Position {
    pub x: Number,
    pub y: Number,
}

#[derive(Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
pub enum GameObjectKind {
    #[serde(rename = "DiamondGameObject")]
    Diamond,
    #[serde(rename = "TeleportGameObject")]
    Teleporter,
    #[serde(rename = "DiamondButtonGameObject")]
    DiamondButton,
    /// Anything we don't act on (bases, other bots, ...).
    #[serde(other)]
    Other,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GameObjectProperties {
    pub points: Option<f64>,
    pub pair_id: Option<Number>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GameObject {
    pub position: Position,
    #[serde(rename = "type")]
    pub kind: GameObjectKind,
    #[serde(default)]
    pub properties: Option<GameObjectProperties>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub width: Number,
    pub height: Number,
    pub game_objects: Vec<GameObject>,
}

impl Board {
    /// Collectibles, in the order the board presents them.
    pub fn diamonds(&self) -> impl Iterator<Item = &GameObject> {
        self.game_objects
            .iter()
            .filter(|obj| obj.kind == GameObjectKind::Diamond)
    }

    /// Teleporters, in the order the board presents them.
    pub fn teleporters(&self) -> impl Iterator<Item = &GameObject> {
        self.game_objects
            .iter()
            .filter(|obj| obj.kind == GameObjectKind::Teleporter)
    }

    /// The red-diamond reset button. There is at most one on the board.
    pub fn diamond_button(&self) -> Option<&GameObject> {
        self.game_objects
            .iter()
            .find(|obj| obj.kind == GameObjectKind::DiamondButton)
    }
}

fn default_inventory_size() -> u32 {
    5
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BotProperties {
    pub base: Position,
    /// Diamonds currently carried.
    pub diamonds: u32,
    pub milliseconds_left: u64,
    #[serde(default = "default_inventory_size")]
    pub inventory_size: u32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct BotSnapshot {
    pub position: Position,
    pub properties: BotProperties,
}

/// One full per-turn snapshot, as received from the server.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GameTurn {
    pub turn: Number,
    pub bot: BotSnapshot,
    pub board: Board,
    #[serde(default)]
    pub is_over: bool,
}

/// Single-tile movement vector, the only thing the bot ever sends back.
#[derive(Serialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Move {
    pub dx: Number,
    pub dy: Number,
}

impl Move {
    pub const STAY: Move = Move { dx: 0, dy: 0 };

    /// The four unit steps the engine accepts.
    pub const CARDINALS: [Move; 4] = [
        Move { dx: 1, dy: 0 },
        Move { dx: 0, dy: 1 },
        Move { dx: -1, dy: 0 },
        Move { dx: 0, dy: -1 },
    ];
}
