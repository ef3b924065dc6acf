//! Line-driven terminal front end.
//!
//! Each input line is treated as the new value of the search box. Lines
//! starting with `:` are commands:
//!
//! * `:<n>` selects the n-th suggestion of the last list and shows its card
//! * `:d` dismisses the suggestion list
//! * `:q` quits

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use super::{AutocompleteSession, Suggestions};
use crate::error::AutocompleteResult;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line<'a> {
    Input(&'a str),
    Select(usize),
    Dismiss,
    Quit,
    Unknown(&'a str),
}

impl<'a> Line<'a> {
    fn parse(line: &'a str) -> Self {
        let Some(command) = line.trim().strip_prefix(':') else {
            return Line::Input(line);
        };

        match command {
            "q" | "quit" => Line::Quit,
            "d" | "dismiss" => Line::Dismiss,
            n => match n.parse::<usize>() {
                Ok(index) if index > 0 => Line::Select(index),
                _ => Line::Unknown(line),
            },
        }
    }
}

/// Drives `session` from `input` until end of input or `:q`, writing
/// suggestion lists and cards to `output`.
pub async fn run_interactive<R, W>(
    session: &mut AutocompleteSession,
    input: R,
    mut output: W,
) -> AutocompleteResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut last: Option<Suggestions> = None;

    while let Some(line) = lines.next_line().await? {
        let rendered = match Line::parse(&line) {
            Line::Quit => break,
            Line::Input(value) => {
                let suggestions = session.suggest(value);
                let rendered = render_suggestions(&suggestions);
                last = Some(suggestions);
                rendered
            }
            Line::Select(index) => {
                let picked = last
                    .as_ref()
                    .filter(|s| s.visible)
                    .and_then(|s| s.items.get(index - 1))
                    .cloned();
                match picked {
                    Some(name) => match session.select(&name).await {
                        Some(card) => card.to_string(),
                        None => format!("  no details available for {name}\n"),
                    },
                    None => format!("  no suggestion numbered {index}\n"),
                }
            }
            Line::Dismiss => {
                session.dismiss();
                last = None;
                String::new()
            }
            Line::Unknown(command) => format!("  unknown command: {}\n", command.trim()),
        };

        output.write_all(rendered.as_bytes()).await?;
        output.flush().await?;
    }

    debug!("Interactive input closed");
    Ok(())
}

fn render_suggestions(suggestions: &Suggestions) -> String {
    if !suggestions.visible {
        return String::new();
    }
    if suggestions.is_empty() {
        return "  (no matches)\n".to_string();
    }

    suggestions
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("  {}. {item}\n", i + 1))
        .collect()
}
