/// The data for a single chat protocol message.
///
/// Every field is plain text and reads back as an empty string when it was never
/// set. No field is validated: protocol grammar belongs to whatever parses or
/// serializes the message.
///
/// The positional construction shapes always fill fields in the same order:
/// `command`, `message`, `channel_name`, `source`, then `target`.
///
/// ```
/// use stream_chat_core::ChatMessage;
///
/// let msg = ChatMessage::from(("PRIVMSG", "hello world", "#general", "alice", ""));
/// assert_eq!(msg.command(), "PRIVMSG");
/// assert_eq!(msg.tags(), "");
///
/// let msg = ChatMessage::from_command("PRIVMSG").with_tags("display-name=alice");
/// assert_eq!(msg.tags(), "display-name=alice");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ChatMessage {
    #[serde(deserialize_with = "null_as_empty")]
    source: String,
    #[serde(deserialize_with = "null_as_empty")]
    target: String,
    #[serde(deserialize_with = "null_as_empty")]
    channel_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    command: String,
    #[serde(deserialize_with = "null_as_empty")]
    message: String,
    #[serde(deserialize_with = "null_as_empty")]
    tags: String,
}

impl ChatMessage {
    /// Creates a message with every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a message that only defines a command.
    pub fn from_command(command: impl Into<String>) -> Self {
        Self::new().with_command(command)
    }

    /// The sender of the message.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The target of a command. This is not the channel.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The name of the channel the message is for.
    pub fn channel_name(&self) -> &str {
        &self.channel_name
    }

    /// The command (or numeric reply) being issued.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The text that was sent.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Raw message tags. Only present when the tags capability was negotiated.
    pub fn tags(&self) -> &str {
        &self.tags
    }

    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        [
            &self.source,
            &self.target,
            &self.channel_name,
            &self.command,
            &self.message,
            &self.tags,
        ]
        .into_iter()
        .all(|s| s.is_empty())
    }

    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }

    pub fn set_target(&mut self, target: impl Into<String>) {
        self.target = target.into();
    }

    pub fn set_channel_name(&mut self, channel_name: impl Into<String>) {
        self.channel_name = channel_name.into();
    }

    pub fn set_command(&mut self, command: impl Into<String>) {
        self.command = command.into();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn set_tags(&mut self, tags: impl Into<String>) {
        self.tags = tags.into();
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.set_source(source);
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.set_target(target);
        self
    }

    pub fn with_channel_name(mut self, channel_name: impl Into<String>) -> Self {
        self.set_channel_name(channel_name);
        self
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.set_command(command);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.set_message(message);
        self
    }

    /// Tags are never filled by a positional shape, this is the only way to
    /// set them while building.
    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.set_tags(tags);
        self
    }
}

impl From<&str> for ChatMessage {
    fn from(command: &str) -> Self {
        Self::from_command(command)
    }
}

impl From<String> for ChatMessage {
    fn from(command: String) -> Self {
        Self::from_command(command)
    }
}

impl<C, M> From<(C, M)> for ChatMessage
where
    C: Into<String>,
    M: Into<String>,
{
    fn from((command, message): (C, M)) -> Self {
        Self::from_command(command).with_message(message)
    }
}

impl<C, M, Ch> From<(C, M, Ch)> for ChatMessage
where
    C: Into<String>,
    M: Into<String>,
    Ch: Into<String>,
{
    fn from((command, message, channel_name): (C, M, Ch)) -> Self {
        Self::from((command, message)).with_channel_name(channel_name)
    }
}

impl<C, M, Ch, S> From<(C, M, Ch, S)> for ChatMessage
where
    C: Into<String>,
    M: Into<String>,
    Ch: Into<String>,
    S: Into<String>,
{
    fn from((command, message, channel_name, source): (C, M, Ch, S)) -> Self {
        Self::from((command, message, channel_name)).with_source(source)
    }
}

impl<C, M, Ch, S, T> From<(C, M, Ch, S, T)> for ChatMessage
where
    C: Into<String>,
    M: Into<String>,
    Ch: Into<String>,
    S: Into<String>,
    T: Into<String>,
{
    fn from((command, message, channel_name, source, target): (C, M, Ch, S, T)) -> Self {
        Self::from((command, message, channel_name, source)).with_target(target)
    }
}

// a `null` coming from the outside is the same as the field being absent
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    <Option<String> as serde::Deserialize>::deserialize(deserializer)
        .map(Option::unwrap_or_default)
}
