use serde_json::Value;

use crate::pipeline::AuthorizationResult;

use super::allow_list::AllowList;

/// Decides whether an inbound event notification was generated by the bot's
/// own identity and should be suppressed.
///
/// The decision is a pure function of the authorization result, the actor's
/// user id, the raw payload and the immutable allow-list; identical inputs
/// always produce identical answers.
#[derive(Debug, Clone, Default)]
pub struct SelfEventDetector {
    allow_list: AllowList,
}

impl SelfEventDetector {
    pub fn new(allow_list: AllowList) -> Self {
        Self { allow_list }
    }

    /// Check whether the event originated from the bot itself.
    ///
    /// # Decision Clauses
    ///
    /// Returns `true` only when all of the following hold:
    /// 1. an authorization result is present,
    /// 2. an actor user id is present,
    /// 3. the actor id equals the authorized bot user id exactly,
    /// 4. the payload carries a non-null `event` entry — slash commands and
    ///    other payload kinds never match,
    /// 5. the nested event's `type` is not on the allow-list; an absent or
    ///    non-string `type` never matches the allow-list.
    ///
    /// Missing fields never raise: anything short of an exact identity match
    /// means "not a self-event" and the notification is delivered
    /// downstream.
    pub fn is_self_event(
        &self,
        authorization: Option<&AuthorizationResult>,
        actor_user_id: Option<&str>,
        body: &Value,
    ) -> bool {
        let Some(authorization) = authorization else {
            return false;
        };
        let Some(actor_user_id) = actor_user_id else {
            return false;
        };
        if authorization.bot_user_id.as_deref() != Some(actor_user_id) {
            return false;
        }

        // Only Events-API-shaped notifications carry a nested `event` object.
        let Some(event) = body.get("event").filter(|event| !event.is_null()) else {
            return false;
        };

        match event.get("type").and_then(Value::as_str) {
            Some(event_type) => !self.allow_list.contains(event_type),
            // A typeless event object still counts as self-generated.
            None => true,
        }
    }
}
