//! Push-event channel: server-initiated detection updates.

pub mod frame;
pub mod socket;

use tracing::{debug, info, warn};

use crate::state::ConnectionStatus;
use crate::types::PushEvent;
use frame::{EnginePacket, FrameError, SocketPacket};

pub const DETECTION_UPDATE: &str = "detection_update";

/// What the socket binding should do in response to one inbound frame.
#[derive(Debug, Clone, PartialEq)]
pub enum PushAction {
    Send(String),
    Status(ConnectionStatus),
    Deliver(PushEvent),
}

/// Translate one text frame into actions.
pub fn handle_frame(text: &str) -> Result<Vec<PushAction>, FrameError> {
    let actions = match frame::parse_engine(text)? {
        EnginePacket::Open(handshake) => {
            debug!(
                "Engine open sid={} upgrades={:?} ping={}ms/{}ms",
                handshake.sid, handshake.upgrades, handshake.ping_interval, handshake.ping_timeout
            );
            vec![PushAction::Send(frame::encode_connect())]
        }
        EnginePacket::Ping(payload) => vec![PushAction::Send(frame::encode_pong(&payload))],
        EnginePacket::Close => vec![PushAction::Status(ConnectionStatus::Offline)],
        EnginePacket::Message(packet) => handle_socket(packet)?,
        EnginePacket::Pong(_) | EnginePacket::Upgrade | EnginePacket::Noop => Vec::new(),
    };
    Ok(actions)
}

fn handle_socket(packet: SocketPacket) -> Result<Vec<PushAction>, FrameError> {
    let actions = match packet {
        SocketPacket::Connect { namespace, data } => {
            info!("Connected to server (namespace {})", namespace);
            debug!("Connect payload: {:?}", data);
            vec![PushAction::Status(ConnectionStatus::Live)]
        }
        SocketPacket::Disconnect { namespace } => {
            info!("Disconnected from server (namespace {})", namespace);
            vec![PushAction::Status(ConnectionStatus::Offline)]
        }
        SocketPacket::ConnectError { namespace, data } => {
            warn!("Server refused connection to {}: {:?}", namespace, data);
            vec![PushAction::Status(ConnectionStatus::Offline)]
        }
        SocketPacket::Event {
            namespace,
            ack,
            name,
            mut args,
        } if name == DETECTION_UPDATE && namespace == frame::DEFAULT_NAMESPACE => {
            if let Some(id) = ack {
                debug!("'{}' asked for ack {}; not answered", name, id);
            }
            if args.is_empty() {
                return Err(FrameError::MissingPayload(name));
            }
            let event: PushEvent = serde_json::from_value(args.remove(0))?;
            vec![PushAction::Deliver(event)]
        }
        SocketPacket::Event { namespace, name, .. } => {
            debug!("Ignoring push event '{}' on {}", name, namespace);
            Vec::new()
        }
        SocketPacket::Ack { namespace, ack, args } => {
            debug!("Ignoring ack {} on {} ({} args)", ack, namespace, args.len());
            Vec::new()
        }
    };
    Ok(actions)
}
