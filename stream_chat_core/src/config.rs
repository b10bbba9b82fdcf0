use stream_chat_config::{load_from_env, LoadFromEnv};

use crate::ChatMessage;

/// Who we are and where we talk, when preparing messages to send.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Outbound {
    pub source: String,
    pub channel_name: String,
}

impl Outbound {
    pub const SOURCE_KEY: &'static str = "STREAM_CHAT_SOURCE";
    pub const CHANNEL_KEY: &'static str = "STREAM_CHAT_CHANNEL";

    /// Fills in the `source` and `channel_name` of `msg`, if they are empty.
    pub fn stamp(&self, mut msg: ChatMessage) -> ChatMessage {
        if msg.source().is_empty() {
            log::trace!("stamping source: {}", self.source);
            msg.set_source(&*self.source);
        }
        if msg.channel_name().is_empty() {
            log::trace!("stamping channel: {}", self.channel_name);
            msg.set_channel_name(&*self.channel_name);
        }
        msg
    }
}

impl LoadFromEnv for Outbound {
    fn load_from_env() -> anyhow::Result<Self> {
        load_from_env(&[
            (Self::SOURCE_KEY, |t: &mut Self, v| t.source = v),
            (Self::CHANNEL_KEY, |t: &mut Self, v| t.channel_name = v),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outbound() -> Outbound {
        Outbound {
            source: "shaken_bot".into(),
            channel_name: "#museun".into(),
        }
    }

    #[test]
    fn stamp_fills_empty_fields() {
        let msg = outbound().stamp(ChatMessage::from(("PRIVMSG", "hello")));
        assert_eq!(msg.source(), "shaken_bot");
        assert_eq!(msg.channel_name(), "#museun");
        assert_eq!(msg.command(), "PRIVMSG");
        assert_eq!(msg.message(), "hello");
        assert_eq!(msg.target(), "");
        assert_eq!(msg.tags(), "");
    }

    #[test]
    fn stamp_keeps_existing_fields() {
        let msg = ChatMessage::from(("PRIVMSG", "hello", "#other", "someone"));
        let stamped = outbound().stamp(msg.clone());
        assert_eq!(stamped, msg);

        let msg = ChatMessage::from(("PRIVMSG", "hello", "#other"));
        let stamped = outbound().stamp(msg);
        assert_eq!(stamped.channel_name(), "#other");
        assert_eq!(stamped.source(), "shaken_bot");
    }

    #[test]
    fn stamp_with_empty_defaults_is_a_no_op() {
        let msg = ChatMessage::from("JOIN");
        assert_eq!(Outbound::default().stamp(msg.clone()), msg);
    }
}
