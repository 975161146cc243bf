//! `POST /api/chat`: validation, prompt assembly, and upstream error mapping.

use axum::{
    Json,
    body::{Body, to_bytes},
    extract::State,
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use cloudom_model::{ChatMessage, ChatModel, ModelError, deepseek::API_KEY_ENV};
use cloudom_rag::catalog::{COMPANY_NAME, CONTACT};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::MAX_BODY_BYTES;
use crate::protocol::{ChatReply, ChatRequest, ErrorBody};
use crate::server::AppState;

/// Number of conversation messages forwarded upstream.
pub const MAX_HISTORY_MESSAGES: usize = 12;

/// Failures of a chat request, each mapped to one HTTP status.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Server is missing DEEPSEEK_API_KEY")]
    MissingCredential,

    #[error("Invalid JSON")]
    InvalidJson,

    #[error("Missing user message")]
    MissingUserMessage,

    #[error("Upstream error")]
    Upstream { details: String },

    #[error("Empty model response")]
    EmptyCompletion,

    #[error("Request failed")]
    RequestFailed,
}

impl ChatError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingCredential => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidJson | Self::MissingUserMessage => StatusCode::BAD_REQUEST,
            Self::Upstream { .. } | Self::EmptyCompletion | Self::RequestFailed => {
                StatusCode::BAD_GATEWAY
            }
        }
    }

    fn body(&self) -> ErrorBody {
        let details = match self {
            Self::Upstream { details } => Some(details.clone()),
            _ => None,
        };
        ErrorBody { error: self.to_string(), details }
    }
}

impl From<ModelError> for ChatError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Upstream { details, .. } => Self::Upstream { details },
            ModelError::EmptyCompletion => Self::EmptyCompletion,
            ModelError::Request { .. } | ModelError::InvalidConfig(_) => Self::RequestFailed,
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut response = (status, Json(self.body())).into_response();
        if matches!(self, Self::MethodNotAllowed) {
            response.headers_mut().insert(header::ALLOW, HeaderValue::from_static("POST"));
        }
        response
    }
}

/// Axum handler for `/api/chat`, registered for every method.
///
/// The body is only read once the method and credential checks pass. A body
/// over [`MAX_BODY_BYTES`] is rejected as invalid JSON.
pub async fn chat_endpoint(
    State(state): State<AppState>,
    method: Method,
    body: Body,
) -> Result<Json<ChatReply>, ChatError> {
    if method != Method::POST {
        return Err(ChatError::MethodNotAllowed);
    }
    let Some(model) = state.model.as_deref() else {
        error!("chat request rejected: {API_KEY_ENV} is not configured");
        return Err(ChatError::MissingCredential);
    };
    let bytes = to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| {
        warn!(error = %e, limit = MAX_BODY_BYTES, "chat request body could not be read");
        ChatError::InvalidJson
    })?;
    let request = ChatRequest::from_slice(&bytes).map_err(|e| {
        warn!(error = %e, "chat request body is not valid JSON");
        ChatError::InvalidJson
    })?;
    handle_chat(model, request).await.map(Json)
}

/// Validate a parsed request, call the model, and shape the reply.
pub async fn handle_chat(model: &dyn ChatModel, request: ChatRequest) -> Result<ChatReply, ChatError> {
    if request.last_user_message().is_none_or(|m| m.content.is_empty()) {
        return Err(ChatError::MissingUserMessage);
    }

    let history = truncate_history(&request.messages, MAX_HISTORY_MESSAGES);
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(ChatMessage::system(system_instruction(&request.page_url, &request.context)));
    messages.extend(history);

    info!(
        model = model.name(),
        history = messages.len() - 1,
        context_chars = request.context.len(),
        "forwarding chat request"
    );

    let completion = model.complete(messages).await.map_err(|e| {
        error!(model = model.name(), error = %e, "chat completion failed");
        ChatError::from(e)
    })?;

    Ok(ChatReply { text: completion.text.trim().to_string() })
}

/// Keep the last `max` messages.
pub fn truncate_history(messages: &[ChatMessage], max: usize) -> Vec<ChatMessage> {
    let start = messages.len().saturating_sub(max);
    messages[start..].to_vec()
}

/// Build the system instruction for the support assistant.
pub fn system_instruction(page_url: &str, context: &str) -> String {
    let mut instruction = format!(
        "You are {COMPANY_NAME} AI Support.\n\
         Speak naturally, like a helpful support rep.\n\
         Never mention \"context\", \"prompt\", \"system\", \"policy\", or \"instructions\".\n\
         Do not say \"based on the provided context\" or similar.\n\
         Use only the information provided in the COMPANY INFO below.\n\
         If the answer is not in COMPANY INFO, say you're not sure and suggest contacting {email}.\n\
         Do not use Markdown formatting (no **bold**, no headings). Use plain text.\n\
         When listing items, use simple bullets like \"•\". Keep lines short.\n\
         When giving instructions, provide steps.\n",
        email = CONTACT.email,
    );
    if !page_url.is_empty() {
        instruction.push_str(&format!("Current page URL: {page_url}\n"));
    }
    if !context.is_empty() {
        instruction.push_str(&format!("\nCOMPANY INFO:\n{context}\n"));
    }
    instruction
}
