//! Browser WebSocket binding for the push channel.
//!
//! No reconnect: once the socket closes the indicator stays offline until
//! the page is reloaded.

use std::rc::Rc;

use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, Event, MessageEvent, WebSocket};

use super::{handle_frame, PushAction};
use crate::state::ConnectionStatus;
use crate::types::PushEvent;

/// Open the socket and wire its handlers. The handlers live as long as the page.
pub fn connect<S, E>(url: &str, on_status: S, on_event: E) -> Result<WebSocket, JsValue>
where
    S: Fn(ConnectionStatus) + 'static,
    E: Fn(PushEvent) + 'static,
{
    info!("Opening push connection to {}", url);
    let ws = WebSocket::new(url)?;
    let on_status = Rc::new(on_status);

    let sender = ws.clone();
    let status = on_status.clone();
    let onmessage = Closure::<dyn FnMut(MessageEvent)>::new(move |ev: MessageEvent| {
        let Some(text) = ev.data().as_string() else {
            debug!("Ignoring binary push frame");
            return;
        };
        match handle_frame(&text) {
            Ok(actions) => {
                for action in actions {
                    match action {
                        PushAction::Send(reply) => {
                            if let Err(e) = sender.send_with_str(&reply) {
                                warn!("Failed to send push frame: {:?}", e);
                            }
                        }
                        PushAction::Status(s) => status(s),
                        PushAction::Deliver(event) => on_event(event),
                    }
                }
            }
            Err(e) => warn!("Dropping malformed push frame: {}", e),
        }
    });
    ws.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
    onmessage.forget();

    let status = on_status.clone();
    let onclose = Closure::<dyn FnMut(CloseEvent)>::new(move |ev: CloseEvent| {
        info!("Disconnected from server (code {})", ev.code());
        status(ConnectionStatus::Offline);
    });
    ws.set_onclose(Some(onclose.as_ref().unchecked_ref()));
    onclose.forget();

    let onerror = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        warn!("Push connection error");
    });
    ws.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    Ok(ws)
}
