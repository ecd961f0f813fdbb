use actix_web_actors::ws;
use log::{info, warn};

use crate::models::{MoveRequest, ServerEvent};
use crate::websocket::handler::RelayWebSocket;

impl RelayWebSocket {
    pub fn handle_move(&mut self, request: MoveRequest, ctx: &mut ws::WebsocketContext<Self>) {
        let mut relay = self.app_state.relay.lock().unwrap();
        let role = relay.seats.role_of(&self.id);

        match relay.game.apply(role, &request) {
            Ok(played) => {
                info!("Move {} -> {} by {} accepted", played.from, played.to, self.id);
                let fen = relay.game.fen();
                // Both frames are enqueued before the relay lock drops, so
                // every client sees transitions in commit order.
                self.broadcast(&ServerEvent::Move(played));
                self.broadcast(&ServerEvent::BoardState { fen });
            }
            Err(rejection) => {
                warn!("Move by {} rejected: {}", self.id, rejection.reason());
                drop(relay);
                self.send_to_self(
                    &ServerEvent::InvalidMove {
                        rejected: request,
                        reason: rejection.reason().to_string(),
                    },
                    ctx,
                );
            }
        }
    }

    pub fn handle_reset(&mut self, _ctx: &mut ws::WebsocketContext<Self>) {
        // Anyone may reset, spectators included.
        let mut relay = self.app_state.relay.lock().unwrap();
        info!("Game reset requested by {}", self.id);
        let fen = relay.game.reset();
        self.broadcast(&ServerEvent::ResetGame);
        self.broadcast(&ServerEvent::BoardState { fen });
    }
}
