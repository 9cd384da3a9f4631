use serde::Deserialize;
use serde_json::Value;

/// Identity record resolved by the external authorization step.
///
/// Produced outside this crate (token lookup, installation store) for the
/// current workspace/installation; read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthorizationResult {
    /// User id of the bot's own identity; `None` when unknown.
    pub bot_user_id: Option<String>,
}

impl AuthorizationResult {
    /// Authorization result with a known bot user id.
    pub fn new(bot_user_id: impl Into<String>) -> Self {
        Self {
            bot_user_id: Some(bot_user_id.into()),
        }
    }
}

/// Per-request context filled in by earlier pipeline stages.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Authorization outcome for the current request, if resolution ran.
    pub authorization: Option<AuthorizationResult>,
    /// User id attributed to the event actor, if the payload carried one.
    pub actor_user_id: Option<String>,
}

/// One inbound event notification travelling through the pipeline.
///
/// The body is the raw semi-structured payload as delivered by the
/// transport; it is supplied per invocation and never retained past the
/// call.
#[derive(Debug, Clone)]
pub struct EventRequest {
    pub body: Value,
    pub context: RequestContext,
}

impl EventRequest {
    pub fn new(body: Value, context: RequestContext) -> Self {
        Self { body, context }
    }
}
