use futures_util::{SinkExt, StreamExt};
use log::{debug, error, info};
use serde_json::Error as JSONError;
use serde_json::{json, Value};
use thiserror::Error;
use tokio_tungstenite::tungstenite::Error as TungsteniteError;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::bot::{Bot, Error as BotError};
use crate::game_interface::GameTurn;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not connect to the game ({0})")]
    WebSocketError(#[from] TungsteniteError),
    #[error("The server did not respond to our registration request")]
    EmptyRegistrationResponse,
    #[error("Unable to (de)serialize payload from/to server ({0})")]
    JSONError(#[from] JSONError),
    #[error("Received error from server ({0})")]
    ServerError(String),
    #[error("Error while executing bot's code ({0})")]
    BotError(#[from] BotError),
}

pub struct WebSocketGameClient {
    bot: Bot,
    uri: String,
    token: Option<String>,
    bot_name: String,
}

impl WebSocketGameClient {
    pub fn new(bot: Bot, token: Option<String>, uri: String, bot_name: String) -> Self {
        WebSocketGameClient {
            bot,
            uri,
            token,
            bot_name,
        }
    }

    pub async fn run(&mut self) -> Result<(), Error> {
        let (mut stream, _resp) = connect_async(&self.uri).await?;

        let registration = match &self.token {
            Some(token) => json!({"type": "REGISTER", "token": token}),
            None => json!({"type": "REGISTER", "botName": self.bot_name}),
        };
        stream.send(Message::text(registration.to_string())).await?;

        while let Some(message) = stream.next().await {
            let message = message?;
            let message_text = message.to_text()?;
            debug!("Payload: {}", message_text);

            if message_text.is_empty() {
                return Err(Error::EmptyRegistrationResponse);
            }

            let parsed: Value = serde_json::from_str(message_text)?;
            if parsed["type"] == "ERROR" {
                return Err(Error::ServerError(parsed.to_string()));
            }

            let turn: GameTurn = serde_json::from_value(parsed)?;
            let current_turn = turn.turn;
            let game_move = self.bot.get_next_move(&turn)?;
            info!("Move for turn {current_turn}: {game_move:?}");

            let response = json!({"type": "COMMAND", "turn": current_turn, "move": game_move});
            debug!("Response payload: {}", response);
            stream.send(Message::Text(response.to_string())).await?;

            if self.bot.is_done(&turn) {
                info!("Game over, disconnecting.");
                return Ok(());
            }
        }
        Ok(())
    }
}
