use lumen_core::{Frame, HitRegion, Target};

/// Resolve an input target against the current frame.
pub(crate) fn resolve_target<'a>(frame: &'a Frame, target: &Target) -> Option<&'a HitRegion> {
    match target {
        Target::Id(id) => frame.hit_by_id(*id),
        Target::Label { label, index } => frame.hit_by_label(label, *index),
    }
}

/// Parses one runner command line. Blank lines yield `None`.
pub(crate) fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    Some(match verb {
        "" => return None,
        "show" => Command::Show,
        "quit" | "exit" => Command::Quit,
        "click" => {
            // `click <label> [n]`; a trailing integer selects among duplicates.
            let (label, index) = rest
                .rsplit_once(char::is_whitespace)
                .and_then(|(label, n)| Some((label.trim(), n.parse::<usize>().ok()?)))
                .unwrap_or((rest, 0));
            if label.is_empty() {
                Command::Unknown(line.to_string())
            } else {
                Command::Click {
                    label: label.to_string(),
                    index,
                }
            }
        }
        _ => Command::Unknown(line.to_string()),
    })
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Show,
    Click { label: String, index: usize },
    Quit,
    Unknown(String),
}
