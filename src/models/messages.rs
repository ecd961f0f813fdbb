use actix::Message;
use serde::{Deserialize, Serialize};

/// A move attempt as the browser client submits it. Squares are algebraic
/// ("e2"); `promotion` is a piece letter and may be omitted. Missing
/// squares default to empty strings and get rejected downstream, so a
/// half-formed frame never kills the connection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<String>,
}

/// Message sent from client to server
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientEvent {
    Move(MoveRequest),
    #[serde(rename = "reset-game")]
    ResetGame,
}

/// Message sent from server to client
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerEvent {
    PlayerRole { role: String },
    SpectatorRole,
    Move(MoveRequest),
    BoardState { fen: String },
    InvalidMove { rejected: MoveRequest, reason: String },
    #[serde(rename = "reset-game")]
    ResetGame,
}

/// Message type for WebSocket communication
#[derive(Message)]
#[rtype(result = "()")]
pub struct RelayWebSocketMessage(pub String);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn client_move_parses_from_the_wire_shape() {
        let event: ClientEvent =
            serde_json::from_str(r#"{"type":"move","from":"e2","to":"e4"}"#).unwrap();
        assert!(matches!(
            event,
            ClientEvent::Move(ref m) if m.from == "e2" && m.to == "e4" && m.promotion.is_none()
        ));

        let event: ClientEvent =
            serde_json::from_str(r#"{"type":"move","from":"e7","to":"e8","promotion":"q"}"#)
                .unwrap();
        assert!(matches!(
            event,
            ClientEvent::Move(ref m) if m.promotion.as_deref() == Some("q")
        ));
    }

    #[test]
    fn half_formed_move_still_parses() {
        // Missing squares surface as empty strings for the coordinator to
        // reject, rather than as a parse error.
        let event: ClientEvent = serde_json::from_str(r#"{"type":"move"}"#).unwrap();
        assert!(matches!(
            event,
            ClientEvent::Move(ref m) if m.from.is_empty() && m.to.is_empty()
        ));
    }

    #[test]
    fn reset_uses_the_kebab_case_tag() {
        assert!(matches!(
            serde_json::from_str::<ClientEvent>(r#"{"type":"reset-game"}"#).unwrap(),
            ClientEvent::ResetGame
        ));
        assert_eq!(
            serde_json::to_value(ServerEvent::ResetGame).unwrap(),
            json!({"type": "reset-game"})
        );
    }

    #[test]
    fn server_events_carry_the_documented_tags() {
        assert_eq!(
            serde_json::to_value(ServerEvent::PlayerRole { role: "w".to_string() }).unwrap(),
            json!({"type": "playerRole", "role": "w"})
        );
        assert_eq!(
            serde_json::to_value(ServerEvent::SpectatorRole).unwrap(),
            json!({"type": "spectatorRole"})
        );
        assert_eq!(
            serde_json::to_value(ServerEvent::BoardState { fen: "8/8 w - - 0 1".to_string() })
                .unwrap(),
            json!({"type": "boardState", "fen": "8/8 w - - 0 1"})
        );
    }

    #[test]
    fn broadcast_move_omits_an_absent_promotion() {
        let value = serde_json::to_value(ServerEvent::Move(MoveRequest {
            from: "e2".to_string(),
            to: "e4".to_string(),
            promotion: None,
        }))
        .unwrap();
        assert_eq!(value, json!({"type": "move", "from": "e2", "to": "e4"}));
    }
}
