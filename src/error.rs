use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::entry::ConversationId;

pub type DialogueResult<T> = Result<T, DialogueError>;

#[derive(Debug, Error, Diagnostic)]
pub enum DialogueError {
    #[error("no conversation data for id {id}")]
    #[diagnostic(code("dialogue.not_found"))]
    NotFound { id: ConversationId },
    #[error("invalid conversation: {0}")]
    #[diagnostic(code("dialogue.invalid_conversation"))]
    InvalidConversation(String),
    #[error("resource limit exceeded: {0}")]
    #[diagnostic(code("dialogue.resource_limit"))]
    ResourceLimit(String),
    #[error("serialization error: {message}")]
    #[diagnostic(code("dialogue.serialization"))]
    Serialization {
        message: String,
        #[source_code]
        src: String,
        #[label("here")]
        span: SourceSpan,
    },
    #[error("config error: {0}")]
    #[diagnostic(code("dialogue.config"))]
    Config(String),
    #[error("io error: {0}")]
    #[diagnostic(code("dialogue.io"))]
    Io(#[from] std::io::Error),
}
