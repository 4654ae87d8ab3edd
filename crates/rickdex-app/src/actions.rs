//! Action handlers: UpdateAction dispatch and background fetch tasks
//!
//! Each fetch runs in its own tokio task and reports back over the message
//! channel as a `*Loaded` or `*Failed` message. Remote errors stop here: they
//! are logged and turned into a message, never propagated.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use rickdex_api::CharacterSource;

use crate::message::Message;
use crate::request::RequestId;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<S>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    source: Arc<S>,
) -> JoinHandle<()>
where
    S: CharacterSource + Sync + 'static,
{
    match action {
        UpdateAction::FetchPage { request, page } => {
            spawn_fetch_page(request, page, msg_tx, source)
        }
        UpdateAction::FetchCharacter { request, id } => {
            spawn_fetch_character(request, id, msg_tx, source)
        }
    }
}

fn spawn_fetch_page<S>(
    request: RequestId,
    page: u32,
    msg_tx: mpsc::Sender<Message>,
    source: Arc<S>,
) -> JoinHandle<()>
where
    S: CharacterSource + Sync + 'static,
{
    tokio::spawn(async move {
        debug!("Fetching page {} ({})", page, request);
        let msg = match source.fetch_page(page).await {
            Ok(data) => Message::PageLoaded {
                request,
                page: data,
            },
            Err(e) => {
                error!("Failed to load character page {}: {}", page, e);
                Message::PageLoadFailed {
                    request,
                    page,
                    error: e.to_string(),
                }
            }
        };
        send(&msg_tx, msg).await;
    })
}

fn spawn_fetch_character<S>(
    request: RequestId,
    id: u32,
    msg_tx: mpsc::Sender<Message>,
    source: Arc<S>,
) -> JoinHandle<()>
where
    S: CharacterSource + Sync + 'static,
{
    tokio::spawn(async move {
        debug!("Fetching character {} ({})", id, request);
        let msg = match source.fetch_character(id).await {
            Ok(character) => Message::CharacterLoaded {
                request,
                character: Box::new(character),
            },
            Err(e) => {
                error!("Failed to load character {}: {}", id, e);
                Message::CharacterLoadFailed {
                    request,
                    id,
                    error: e.to_string(),
                }
            }
        };
        send(&msg_tx, msg).await;
    })
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        // Receiver dropped during shutdown
        debug!("Message channel closed, dropping fetch result");
    }
}
