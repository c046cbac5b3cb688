pub mod bot;
pub mod client;
pub mod distance;
pub mod game_interface;
pub mod macro_ai;
pub mod micro_ai;
pub mod teleporter;
