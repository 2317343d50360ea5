//! Dashboard actions: call the backend, then publish the result.
//!
//! Each action raises the relevant `is_loading` flag, awaits the resource
//! client and, on success, replaces the container value wholesale. On
//! failure the flag is lowered, the previous data is left as it was, and the
//! client error is returned unchanged.
//!
//! Concurrent actions on one container are last-write-wins, including the
//! flag: a failing action lowers it even while another is still in flight.

use std::future::Future;

use moderation_api::{ApiClient, ApiError, Chat, ChatUpdate, LoginRequest, RegisterRequest, User};
use tracing::{debug, info};

use crate::auth::AuthState;
use crate::chats::ChatsState;
use crate::container::StateContainer;
use crate::context::DashboardState;
use crate::error::{Result, StateError};
use crate::prompts::PromptsState;

/// State that carries a loading flag.
trait Loading {
    fn set_loading(&mut self, loading: bool);
}

impl Loading for AuthState {
    fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }
}

impl Loading for ChatsState {
    fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }
}

impl Loading for PromptsState {
    fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }
}

/// Run `call` with the container's loading flag raised.
///
/// The flag is only lowered here on failure; on success the caller publishes
/// a fresh value that already has it cleared.
async fn tracked<S, T, F>(container: &dyn StateContainer<S>, call: F) -> Result<T>
where
    S: Loading,
    F: Future<Output = moderation_api::Result<T>>,
{
    container.update(&mut |s| s.set_loading(true));
    match call.await {
        Ok(value) => Ok(value),
        Err(e) => {
            container.update(&mut |s| s.set_loading(false));
            Err(e.into())
        }
    }
}

/// Log in, fetch the account and publish the session.
pub async fn sign_in(
    client: &ApiClient,
    state: &DashboardState,
    credentials: &LoginRequest,
) -> Result<User> {
    let (user, token) = tracked(state.auth.as_ref(), async {
        let token = client.auth().login(credentials).await?;
        match client.auth().me().await {
            Ok(user) => Ok::<_, ApiError>((user, token)),
            Err(e) => {
                // login already stored the token
                client.auth().logout()?;
                Err(e)
            }
        }
    })
    .await?;

    info!(user_id = %user.id, "Signed in");
    state.auth.set(AuthState::signed_in(user.clone(), token));
    Ok(user)
}

/// Create an account.
///
/// The session is published only when the client is configured to log in
/// after registering; otherwise the auth state goes back to signed out and a
/// token already in the store is left alone.
pub async fn register(
    client: &ApiClient,
    state: &DashboardState,
    request: &RegisterRequest,
) -> Result<User> {
    let user = tracked(state.auth.as_ref(), client.auth().register(request)).await?;

    let token = client
        .config()
        .login_after_register
        .then(|| client.tokens().token())
        .flatten();
    match token {
        Some(token) => state.auth.set(AuthState::signed_in(user.clone(), token)),
        None => state.auth.set(AuthState::default()),
    }
    Ok(user)
}

/// Resume a session from a stored token.
///
/// Returns `Ok(None)` without a request when no token is stored. A token the
/// backend rejects with 401 is cleared and also yields `Ok(None)`.
pub async fn restore_session(client: &ApiClient, state: &DashboardState) -> Result<Option<User>> {
    let Some(token) = client.tokens().token() else {
        debug!("No stored token");
        return Ok(None);
    };

    match tracked(state.auth.as_ref(), client.auth().me()).await {
        Ok(user) => {
            info!(user_id = %user.id, "Restored session");
            state.auth.set(AuthState::signed_in(user.clone(), token));
            Ok(Some(user))
        }
        Err(StateError::Api(e)) if e.is_unauthorized() => {
            info!("Stored token rejected");
            client.auth().logout()?;
            state.auth.set(AuthState::default());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Drop the token and return every container to its defaults.
pub fn sign_out(client: &ApiClient, state: &DashboardState) -> Result<()> {
    client.auth().logout()?;
    state.reset();
    Ok(())
}

/// Fetch the operator's chats.
///
/// The active chat, if any, is refreshed from the new list; it is dropped if
/// the backend no longer returns it.
pub async fn load_chats(client: &ApiClient, state: &DashboardState) -> Result<Vec<Chat>> {
    let chats = tracked(state.chats.as_ref(), client.chats().list()).await?;
    debug!(count = chats.len(), "Loaded chats");

    let active_id = state.chats.get().active_chat.map(|c| c.id);
    let active_chat = active_id.and_then(|id| chats.iter().find(|c| c.id == id).cloned());
    state.chats.set(ChatsState {
        chats: chats.clone(),
        active_chat,
        is_loading: false,
    });
    Ok(chats)
}

/// Fetch one chat and make it the active chat.
pub async fn select_chat(client: &ApiClient, state: &DashboardState, chat_id: &str) -> Result<Chat> {
    let chat = tracked(state.chats.as_ref(), client.chats().get(chat_id)).await?;
    debug!(chat_id = %chat.id, "Selected chat");

    let mut next = state.chats.get();
    next.active_chat = Some(chat.clone());
    next.replace_chat(chat.clone());
    next.is_loading = false;
    state.chats.set(next);
    Ok(chat)
}

/// Send a partial settings update and publish the chat the backend returns.
pub async fn save_chat_settings(
    client: &ApiClient,
    state: &DashboardState,
    chat_id: &str,
    update: &ChatUpdate,
) -> Result<Chat> {
    let chat = tracked(state.chats.as_ref(), client.chats().update(chat_id, update)).await?;
    info!(chat_id = %chat.id, "Saved chat settings");

    let mut next = state.chats.get();
    next.replace_chat(chat.clone());
    next.is_loading = false;
    state.chats.set(next);
    Ok(chat)
}

/// Fetch system and custom prompts together.
pub async fn load_prompts(client: &ApiClient, state: &DashboardState) -> Result<PromptsState> {
    let prompts = client.prompts();
    let (system_prompts, custom_prompts) = tracked(state.prompts.as_ref(), async {
        tokio::try_join!(prompts.list_system(), prompts.list_custom())
    })
    .await?;
    debug!(
        system = system_prompts.len(),
        custom = custom_prompts.len(),
        "Loaded prompts"
    );

    let next = PromptsState {
        system_prompts,
        custom_prompts,
        is_loading: false,
    };
    state.prompts.set(next.clone());
    Ok(next)
}
