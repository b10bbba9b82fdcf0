use anyhow::Context;
use gumdrop::Options as _;
use tokio::io::BufReader;

use stream_chat_core::prelude::{LoadFromEnv, Outbound};
use stream_chat_local::{normalize, Settings};

#[derive(Debug, gumdrop::Options)]
struct Args {
    /// prints the help message
    help: bool,

    /// pretty print each message
    pretty: bool,

    /// fill in empty sources and channels from STREAM_CHAT_SOURCE and STREAM_CHAT_CHANNEL
    stamp: bool,

    /// write the messages to this file instead of stdout
    #[options(meta = "<PATH>")]
    output: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let Args {
        pretty,
        stamp,
        output,
        ..
    } = Args::parse_args_default_or_exit();

    simple_env_load::load_env_from([".dev.env", ".log.env"]);
    alto_logger::TermLogger::new(
        alto_logger::Options::default()
            .with_time(alto_logger::TimeConfig::relative_now())
            .with_style(alto_logger::StyleConfig::SingleLine),
    )?
    .init()?;

    let outbound = if stamp {
        match Outbound::load_from_env() {
            Ok(outbound) => Some(outbound),
            Err(err) => {
                log::warn!("messages will not be stamped: {err}");
                None
            }
        }
    } else {
        None
    };

    let settings = Settings { pretty, outbound };
    let input = BufReader::new(tokio::io::stdin());

    let summary = match output {
        Some(path) => {
            log::info!("writing messages to {path}");
            let file = tokio::fs::File::create(&path)
                .await
                .with_context(|| format!("cannot create '{path}'"))?;
            normalize(input, file, &settings).await?
        }
        None => normalize(input, tokio::io::stdout(), &settings).await?,
    };

    if summary.skipped > 0 {
        log::warn!("{} line(s) were not messages", summary.skipped);
    }

    Ok(())
}
