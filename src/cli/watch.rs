//! Watch command implementation.
//!
//! Treats each stdin line as a chat message, dispatches it to a passively
//! attached viewer and writes every reply image to the output directory.

use std::borrow::Cow;
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::warn;

use crate::error::{Result, ViewerError};
use crate::output::{display_path, plural, Printer};
use crate::viewer::{Attachment, Message, Viewer};
use crate::watcher::{attach, MessageHub};

use super::ConfigArgs;

/// Read messages from stdin, one per line, and render replies
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Directory for rendered images
    #[arg(long, short, default_value = ".")]
    pub output: PathBuf,

    /// Role held by every message author (repeatable)
    #[arg(long = "role")]
    pub roles: Vec<String>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

pub fn run(args: WatchArgs, printer: &Printer) -> Result<()> {
    let stdin = io::stdin();
    watch(&args, stdin.lock(), printer).map(|_| ())
}

/// Dispatch every line of `input`; returns the paths written.
///
/// Invalid UTF-8 is replaced rather than ending the session.
fn watch(args: &WatchArgs, mut input: impl BufRead, printer: &Printer) -> Result<Vec<PathBuf>> {
    let config = args.config.load()?;
    if config.access_roles.is_empty() {
        printer.warning("Warning", "no access_roles configured; every message will be ignored");
    }

    fs::create_dir_all(&args.output).map_err(|e| ViewerError::Io {
        path: args.output.clone(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let mut hub = MessageHub::new();
    let subscription = attach(&mut hub, Viewer::builtin(config));

    let mut written = Vec::new();
    let mut lines = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lines += 1;

        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            warn!(line = lines, "message is not valid UTF-8; invalid bytes replaced");
        }
        let content = line.trim_end_matches(|c: char| c == '\n' || c == '\r');

        let message = Message::new(content).with_roles(args.roles.iter().cloned());
        for attachment in hub.dispatch(&message) {
            let path = save(&args.output, lines, &attachment)?;
            printer.status("Replied", &display_path(&path));
            written.push(path);
        }
    }

    let detached = hub.unsubscribe(subscription);
    debug_assert!(detached, "viewer subscription was removed before shutdown");
    printer.status(
        "Finished",
        &format!(
            "{}, {}",
            plural(lines, "message", "messages"),
            plural(written.len(), "image", "images")
        ),
    );

    Ok(written)
}

fn save(dir: &Path, line: usize, attachment: &Attachment) -> Result<PathBuf> {
    let path = dir.join(format!("{}-{}", line, attachment.name));
    fs::write(&path, &attachment.data).map_err(|e| ViewerError::Io {
        path: path.clone(),
        message: format!("Failed to write attachment: {}", e),
    })?;
    Ok(path)
}
