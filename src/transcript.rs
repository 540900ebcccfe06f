//! In-memory chat transcript. Append-only for the session; nothing here is
//! persisted, the whole log is lost on reload.

use crate::catalog::GREETING;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

impl Role {
    /// Role tag used on the wire.
    pub fn wire_name(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// A source reference returned by a search-grounded model reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Citation {
    pub uri: String,
    pub title: String,
}

#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub text: String,
    /// Empty unless the reply was grounded in a web search.
    pub citations: Vec<Citation>,
}

/// Ordered, append-only sequence of session messages.
#[derive(Clone, Debug)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Transcript {
    /// A fresh transcript already carries the Curator's greeting.
    pub fn new() -> Self {
        let mut t = Transcript {
            messages: Vec::new(),
            next_id: 0,
        };
        t.push(Role::Model, GREETING.to_owned(), Vec::new());
        t
    }

    pub fn push(&mut self, role: Role, text: String, citations: Vec<Citation>) -> &ChatMessage {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            role,
            text,
            citations,
        });
        self.messages.last().expect("just pushed")
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
