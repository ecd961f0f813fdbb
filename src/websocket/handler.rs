use actix::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::{info, warn};
use uuid::Uuid;

use crate::models::{AppState, ClientEvent, RelayWebSocketMessage, ServerEvent};

/// WebSocket handler for one relay client
pub struct RelayWebSocket {
    pub id: String,
    pub app_state: web::Data<AppState>,
}

impl Actor for RelayWebSocket {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        // Seat the connection, then register the actor for broadcasts.
        let role = self.app_state.relay.lock().unwrap().seats.assign(&self.id);
        self.app_state
            .sessions
            .lock()
            .unwrap()
            .insert(self.id.clone(), ctx.address());

        let total_sessions = self.app_state.sessions.lock().unwrap().len();
        info!("WebSocket connection started: {} seated as {:?}", self.id, role);
        info!("Total active sessions: {}", total_sessions);

        let greeting = match role.code() {
            Some(code) => ServerEvent::PlayerRole { role: code.to_string() },
            None => ServerEvent::SpectatorRole,
        };
        self.send_to_self(&greeting, ctx);
    }

    fn stopping(&mut self, _: &mut Self::Context) -> Running {
        // Vacate the seat before dropping the session so the next
        // connection can claim it.
        self.app_state.relay.lock().unwrap().seats.release(&self.id);
        self.app_state.sessions.lock().unwrap().remove(&self.id);

        let total_sessions = self.app_state.sessions.lock().unwrap().len();
        info!("WebSocket connection closed: {}", self.id);
        info!("Total active sessions: {}", total_sessions);

        Running::Stop
    }
}

impl Handler<RelayWebSocketMessage> for RelayWebSocket {
    type Result = ();

    fn handle(&mut self, msg: RelayWebSocketMessage, ctx: &mut Self::Context) {
        ctx.text(msg.0);
    }
}

// WebSocket message handler
impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for RelayWebSocket {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(msg)) => {
                ctx.pong(&msg);
            }
            Ok(ws::Message::Pong(_)) => {
                // Do nothing for pong messages
            }
            Ok(ws::Message::Text(text)) => {
                match serde_json::from_str::<ClientEvent>(text.as_ref()) {
                    Ok(event) => self.handle_event(event, ctx),
                    Err(e) => {
                        // Unknown or unparseable frames are dropped; the
                        // sender gets nothing and the game is untouched.
                        warn!("Ignoring unparseable message from {}: {}", self.id, e);
                    }
                }
            }
            Ok(ws::Message::Binary(_)) => {
                warn!("Binary messages are not supported");
            }
            Ok(ws::Message::Close(reason)) => {
                info!("Connection closed: {:?}", reason);
                ctx.close(reason);
                ctx.stop();
            }
            _ => {
                ctx.stop();
            }
        }
    }
}

impl RelayWebSocket {
    pub fn handle_event(&mut self, event: ClientEvent, ctx: &mut ws::WebsocketContext<Self>) {
        match event {
            ClientEvent::Move(request) => self.handle_move(request, ctx),
            ClientEvent::ResetGame => self.handle_reset(ctx),
        }
    }

    /// Fan an event out to every connected client, the sender included.
    ///
    /// Callers hold the relay lock while enqueueing, so mailboxes receive
    /// transitions in the order they were committed. A session that has
    /// already gone away is simply skipped.
    pub fn broadcast(&self, event: &ServerEvent) {
        let payload = match serde_json::to_string(event) {
            Ok(s) => s,
            Err(e) => {
                warn!("Error serializing broadcast: {}", e);
                return;
            }
        };

        let sessions = self.app_state.sessions.lock().unwrap();
        for addr in sessions.values() {
            addr.do_send(RelayWebSocketMessage(payload.clone()));
        }
    }

    /// Unicast to this actor's own client.
    pub fn send_to_self(&self, event: &ServerEvent, ctx: &mut ws::WebsocketContext<Self>) {
        match serde_json::to_string(event) {
            Ok(s) => ctx.text(s),
            Err(e) => warn!("Error serializing message: {}", e),
        }
    }
}

/// WebSocket connection handler
pub async fn ws_index(
    req: HttpRequest,
    stream: web::Payload,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let id = Uuid::new_v4().to_string();
    info!("New WebSocket connection: {}", id);

    let ws = RelayWebSocket {
        id,
        app_state: app_state.clone(),
    };

    ws::start(ws, &req, stream)
}
