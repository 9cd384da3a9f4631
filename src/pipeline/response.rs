use serde::Serialize;

/// Terminal value a pipeline run resolves to.
///
/// Both the acknowledgement path and the downstream handler produce one of
/// these; intermediate stages hand it back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageResponse {
    pub status: u16,
    pub body: String,
}

impl StageResponse {
    /// Success response with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }
}
