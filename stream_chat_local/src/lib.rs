use anyhow::Context;
use stream_chat_core::{config::Outbound, ChatMessage};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

#[derive(Clone, Debug, Default)]
pub struct Settings {
    pub pretty: bool,
    pub outbound: Option<Outbound>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub written: usize,
    pub skipped: usize,
}

/// Reads one json message per line from `reader` and writes it back out to `writer`
/// with every field present.
///
/// Blank lines are ignored. Lines that aren't a message, including lines that aren't
/// valid utf-8, are logged and counted as skipped.
pub async fn normalize(
    reader: impl AsyncBufRead + Unpin,
    mut writer: impl AsyncWrite + Unpin,
    settings: &Settings,
) -> anyhow::Result<Summary> {
    let mut summary = Summary::default();
    let mut lines = reader.split(b'\n');
    let mut line_no = 0_usize;

    while let Some(line) = lines.next_segment().await.context("cannot read the input")? {
        line_no += 1;
        let line = line.strip_suffix(b"\r").unwrap_or(&line);
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let msg = match serde_json::from_slice::<ChatMessage>(line) {
            Ok(msg) => msg,
            Err(err) => {
                log::warn!("skipping line {line_no}: {err}");
                summary.skipped += 1;
                continue;
            }
        };

        let msg = match &settings.outbound {
            Some(outbound) => outbound.stamp(msg),
            None => msg,
        };

        log::debug!(
            "[{}] {} {}: {}",
            msg.channel_name(),
            msg.command(),
            msg.source(),
            msg.message()
        );

        let out = if settings.pretty {
            serde_json::to_vec_pretty(&msg)?
        } else {
            serde_json::to_vec(&msg)?
        };
        writer.write_all(&out).await?;
        writer.write_all(b"\n").await?;
        summary.written += 1;
    }

    writer.flush().await?;
    log::info!(
        "wrote {} message(s), skipped {} line(s)",
        summary.written,
        summary.skipped
    );
    Ok(summary)
}
