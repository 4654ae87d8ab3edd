//! Message processing
//!
//! Runs a message through the TEA update function, follows up chained
//! messages and dispatches every resulting action.

use std::sync::Arc;

use tokio::sync::mpsc;

use rickdex_api::CharacterSource;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    source: &Arc<S>,
) where
    S: CharacterSource + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            // Fire and forget: the task reports back over msg_tx
            handle_action(action, msg_tx.clone(), source.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
