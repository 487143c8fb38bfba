use bar_core::{BarError, Message, Result};

/// Parse one stdin line into a [`Message`].
///
/// Blank lines and `#` comments yield `Ok(None)`.  Values keep their
/// inner spacing: `set title hello   world` updates `title` to
/// `"hello   world"`.
pub fn parse(line: &str) -> Result<Option<Message>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = split_word(line);
    let msg = match verb {
        "add" => {
            let (key, rest) = split_word(rest);
            let (alignment, value) = split_word(rest);
            if key.is_empty() || alignment.is_empty() {
                return Err(usage("add <key> <left|right> <value>"));
            }
            Message::AddItem {
                key:       key.to_string(),
                value:     value.to_string(),
                alignment: alignment.to_string(),
            }
        }
        "set" => {
            let (key, value) = split_word(rest);
            if key.is_empty() {
                return Err(usage("set <key> <value>"));
            }
            Message::UpdateItem {
                key:   key.to_string(),
                value: value.to_string(),
            }
        }
        "remove" | "rm" => match rest {
            "" => return Err(usage("remove <key>")),
            key => Message::RemoveItem(key.to_string()),
        },
        "width" => {
            let width: f32 = rest
                .parse()
                .map_err(|_| usage("width <number>"))?;
            if !width.is_finite() || width < 0.0 {
                return Err(usage("width <number>"));
            }
            Message::WidthChanged(width)
        }
        "style" => {
            let (background, text) = split_word(rest);
            if background.is_empty() || text.is_empty() || text.contains(char::is_whitespace) {
                return Err(usage("style <#background> <#text>"));
            }
            Message::StyleChanged {
                background: background.to_string(),
                text:       text.to_string(),
            }
        }
        "redraw" => Message::Redraw,
        "reload" => Message::ConfigReloaded,
        "quit" | "exit" => Message::Shutdown,
        other => return Err(BarError::Command(format!("unknown command '{other}'"))),
    };

    Ok(Some(msg))
}

fn usage(form: &str) -> BarError {
    BarError::Command(format!("usage: {form}"))
}

/// First whitespace-delimited word and the trimmed remainder.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim()),
        None    => (s, ""),
    }
}
