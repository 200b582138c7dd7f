//! Engine.IO v4 / Socket.IO v5 text frames.
//!
//! Only what a websocket-only client needs: binary attachments are rejected.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_NAMESPACE: &str = "/";

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("empty frame")]
    Empty,

    #[error("unknown engine packet type '{0}'")]
    UnknownEngineType(char),

    #[error("unknown socket packet type '{0}'")]
    UnknownSocketType(char),

    #[error("binary attachments are not supported")]
    BinaryUnsupported,

    #[error("event packet without a name")]
    MissingEventName,

    #[error("event '{0}' has no payload")]
    MissingPayload(String),

    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Engine.IO `open` handshake body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Handshake {
    pub sid: String,
    #[serde(default)]
    pub upgrades: Vec<String>,
    #[serde(default)]
    pub ping_interval: u64,
    #[serde(default)]
    pub ping_timeout: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EnginePacket {
    Open(Handshake),
    Close,
    Ping(String),
    Pong(String),
    Message(SocketPacket),
    Upgrade,
    Noop,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SocketPacket {
    Connect {
        namespace: String,
        data: Option<Value>,
    },
    Disconnect {
        namespace: String,
    },
    Event {
        namespace: String,
        ack: Option<u64>,
        name: String,
        args: Vec<Value>,
    },
    Ack {
        namespace: String,
        ack: u64,
        args: Vec<Value>,
    },
    ConnectError {
        namespace: String,
        data: Option<Value>,
    },
}

pub fn parse_engine(frame: &str) -> Result<EnginePacket, FrameError> {
    let mut chars = frame.chars();
    let kind = chars.next().ok_or(FrameError::Empty)?;
    let body = chars.as_str();
    match kind {
        '0' => Ok(EnginePacket::Open(serde_json::from_str(body)?)),
        '1' => Ok(EnginePacket::Close),
        '2' => Ok(EnginePacket::Ping(body.to_string())),
        '3' => Ok(EnginePacket::Pong(body.to_string())),
        '4' => Ok(EnginePacket::Message(parse_socket(body)?)),
        '5' => Ok(EnginePacket::Upgrade),
        '6' => Ok(EnginePacket::Noop),
        other => Err(FrameError::UnknownEngineType(other)),
    }
}

pub fn parse_socket(packet: &str) -> Result<SocketPacket, FrameError> {
    let mut chars = packet.chars();
    let kind = chars.next().ok_or(FrameError::Empty)?;
    let rest = chars.as_str();

    if matches!(kind, '5' | '6') {
        return Err(FrameError::BinaryUnsupported);
    }

    let (namespace, rest) = split_namespace(rest);
    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    let (ack_digits, payload) = rest.split_at(digits);
    let ack = ack_digits.parse::<u64>().ok();
    let data: Option<Value> = if payload.is_empty() {
        None
    } else {
        Some(serde_json::from_str(payload)?)
    };

    match kind {
        '0' => Ok(SocketPacket::Connect { namespace, data }),
        '1' => Ok(SocketPacket::Disconnect { namespace }),
        '2' => {
            let mut args = match data {
                Some(Value::Array(items)) => items,
                _ => return Err(FrameError::MissingEventName),
            };
            if args.is_empty() {
                return Err(FrameError::MissingEventName);
            }
            let name = match args.remove(0) {
                Value::String(name) => name,
                _ => return Err(FrameError::MissingEventName),
            };
            Ok(SocketPacket::Event {
                namespace,
                ack,
                name,
                args,
            })
        }
        '3' => {
            let args = match data {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            };
            Ok(SocketPacket::Ack {
                namespace,
                ack: ack.unwrap_or_default(),
                args,
            })
        }
        '4' => Ok(SocketPacket::ConnectError { namespace, data }),
        other => Err(FrameError::UnknownSocketType(other)),
    }
}

/// A custom namespace is written as `/name,` right after the type.
fn split_namespace(rest: &str) -> (String, &str) {
    if !rest.starts_with('/') {
        return (DEFAULT_NAMESPACE.to_string(), rest);
    }
    match rest.split_once(',') {
        Some((ns, tail)) => (ns.to_string(), tail),
        None => (rest.to_string(), ""),
    }
}

/// Socket.IO connect for the default namespace, wrapped in an engine message.
pub fn encode_connect() -> String {
    "40".to_string()
}

pub fn encode_pong(payload: &str) -> String {
    format!("3{}", payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_open_handshake() {
        let frame = r#"0{"sid":"lv_VI97HAXpY6yYWAAAC","upgrades":[],"pingInterval":25000,"pingTimeout":20000,"maxPayload":1000000}"#;
        match parse_engine(frame).unwrap() {
            EnginePacket::Open(h) => {
                assert_eq!(h.sid, "lv_VI97HAXpY6yYWAAAC");
                assert_eq!(h.ping_interval, 25000);
                assert_eq!(h.ping_timeout, 20000);
                assert!(h.upgrades.is_empty());
            }
            other => panic!("expected open, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_ping_and_close() {
        assert_eq!(parse_engine("2").unwrap(), EnginePacket::Ping(String::new()));
        assert_eq!(parse_engine("2abc").unwrap(), EnginePacket::Ping("abc".to_string()));
        assert_eq!(parse_engine("1").unwrap(), EnginePacket::Close);
        assert_eq!(parse_engine("6").unwrap(), EnginePacket::Noop);
    }

    #[test]
    fn test_parse_connect_ack() {
        let packet = parse_engine(r#"40{"sid":"wZX3oN0bSVIhsaknAAAI"}"#).unwrap();
        assert_eq!(
            packet,
            EnginePacket::Message(SocketPacket::Connect {
                namespace: "/".to_string(),
                data: Some(json!({"sid": "wZX3oN0bSVIhsaknAAAI"})),
            })
        );
    }

    #[test]
    fn test_parse_event() {
        let frame = r#"42["detection_update",{"result":{"is_ai_generated":true,"confidence_score":0.81},"type":"text"}]"#;
        match parse_engine(frame).unwrap() {
            EnginePacket::Message(SocketPacket::Event { namespace, ack, name, args }) => {
                assert_eq!(namespace, "/");
                assert_eq!(ack, None);
                assert_eq!(name, "detection_update");
                assert_eq!(args.len(), 1);
                assert_eq!(args[0]["type"], "text");
            }
            other => panic!("expected event, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_event_with_namespace_and_ack() {
        let packet = parse_socket(r#"2/admin,13["stats",1]"#).unwrap();
        assert_eq!(
            packet,
            SocketPacket::Event {
                namespace: "/admin".to_string(),
                ack: Some(13),
                name: "stats".to_string(),
                args: vec![json!(1)],
            }
        );
    }

    #[test]
    fn test_parse_disconnect_and_error() {
        assert_eq!(
            parse_socket("1").unwrap(),
            SocketPacket::Disconnect { namespace: "/".to_string() }
        );
        match parse_socket(r#"4{"message":"Not authorized"}"#).unwrap() {
            SocketPacket::ConnectError { data, .. } => {
                assert_eq!(data.unwrap()["message"], "Not authorized");
            }
            other => panic!("expected connect error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_frames() {
        assert!(matches!(parse_engine(""), Err(FrameError::Empty)));
        assert!(matches!(parse_engine("9"), Err(FrameError::UnknownEngineType('9'))));
        assert!(matches!(parse_engine("42[1,2]"), Err(FrameError::MissingEventName)));
        assert!(matches!(parse_engine("42[]"), Err(FrameError::MissingEventName)));
        assert!(matches!(parse_engine("42[\"x\""), Err(FrameError::Json(_))));
        assert!(matches!(parse_engine("451-[\"img\",{}]"), Err(FrameError::BinaryUnsupported)));
    }

    #[test]
    fn test_encoders() {
        assert_eq!(encode_connect(), "40");
        assert_eq!(encode_pong(""), "3");
        assert_eq!(encode_pong("abc"), "3abc");
    }
}
