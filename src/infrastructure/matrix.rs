//! # Matrix Service Adapter
//!
//! Implements the `ChatProvider` trait for the Matrix protocol using the `matrix_sdk`.
//! One `MatrixService` wraps one joined room: the digest room for scheduled sends,
//! or the originating room when replying to a command.

use crate::domain::traits::ChatProvider;
use crate::domain::types::MessageFormat;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use matrix_sdk::Client;
use matrix_sdk::room::Room;
use matrix_sdk::ruma::RoomId;
use matrix_sdk::ruma::events::room::message::RoomMessageEventContent;

#[derive(Clone)]
pub struct MatrixService {
    room: Room,
}

impl MatrixService {
    pub fn new(room: Room) -> Self {
        Self { room }
    }

    /// Resolve a configured room id against the rooms this client has joined.
    pub fn for_room_id(client: &Client, room_id: &str) -> Result<Self> {
        let room_id = RoomId::parse(room_id).with_context(|| format!("Invalid room id {room_id}"))?;
        let room = client
            .get_room(&room_id)
            .ok_or_else(|| anyhow!("Room {room_id} is not known to this account"))?;
        Ok(Self::new(room))
    }
}

#[async_trait]
impl ChatProvider for MatrixService {
    fn room_id(&self) -> String {
        self.room.room_id().as_str().to_string()
    }

    async fn send_message(&self, content: &str, format: MessageFormat) -> Result<String, String> {
        tracing::info!("Bot sending message to {}: {}", self.room_id(), content);
        let event = match format {
            MessageFormat::Markdown => RoomMessageEventContent::text_markdown(content),
            MessageFormat::Plain => RoomMessageEventContent::text_plain(content),
        };
        self.room
            .send(event)
            .await
            .map(|resp| resp.event_id.to_string())
            .map_err(|e| e.to_string())
    }
}
