pub mod config;

mod message;
pub use message::ChatMessage;

pub mod prelude {
    pub use crate::config::Outbound;
    pub use crate::ChatMessage;
    pub use stream_chat_config::LoadFromEnv;
}
