//! Line-driven session over the headless document.

use std::io::{BufRead, Write};

use anyhow::{anyhow, bail, Context};
use tracker_core::Route;
use tracker_logging::tracker_debug;

use super::app::App;
use super::dom::HeadlessDom;
use super::events::DomEvent;

const HELP: &str = "\
commands:
  open <path>                      address-bar navigation
  go <route>                       click a nav link, e.g. `go digest`
  back | forward                   history navigation
  type <control> <text>            input event, e.g. `type filter-keyword react`
  pick <control> <value>           select change, e.g. `pick filter-sort match`
  check <control> <value> <on|off> checkbox change, e.g. `check pref-mode Remote on`
  click <action> [job-id]          delegated click, e.g. `click save jn-001`
  key <name>                       keydown, e.g. `key Escape`
  show                             print the document
  help                             this text
  quit                             end the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(DomEvent),
    Back,
    Forward,
    Show,
    Help,
    Quit,
}

/// Blank lines and `#` comments parse to `None`.
pub fn parse_command(line: &str) -> anyhow::Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let command = match verb {
        "open" => Command::Event(DomEvent::Open {
            path: required(rest, "open <path>")?.to_string(),
        }),
        "go" => {
            let id = required(rest, "go <route>")?;
            let route = Route::from_id(id).ok_or_else(|| anyhow!("unknown route {:?}", id))?;
            Command::Event(DomEvent::click_route(route))
        }
        "back" => Command::Back,
        "forward" => Command::Forward,
        "type" => {
            let (control, text) = rest.split_once(' ').unwrap_or((rest, ""));
            Command::Event(DomEvent::Input {
                control: required(control, "type <control> <text>")?.to_string(),
                value: text.to_string(),
            })
        }
        "pick" => {
            let (control, value) = rest
                .split_once(' ')
                .context("usage: pick <control> <value>")?;
            Command::Event(DomEvent::Change {
                control: control.to_string(),
                value: value.trim().to_string(),
                checked: None,
            })
        }
        "check" => {
            let (head, state) = rest
                .rsplit_once(' ')
                .context("usage: check <control> <value> <on|off>")?;
            let (control, value) = head
                .split_once(' ')
                .context("usage: check <control> <value> <on|off>")?;
            let checked = match state {
                "on" => true,
                "off" => false,
                other => bail!("expected on|off, got {:?}", other),
            };
            Command::Event(DomEvent::Change {
                control: control.to_string(),
                value: value.trim().to_string(),
                checked: Some(checked),
            })
        }
        "click" => {
            let mut parts = rest.split_whitespace();
            let action = parts
                .next()
                .context("usage: click <action> [job-id]")?;
            Command::Event(DomEvent::click_action(action, parts.next()))
        }
        "key" => Command::Event(DomEvent::KeyDown {
            key: required(rest, "key <name>")?.to_string(),
        }),
        "show" => Command::Show,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => bail!("unknown command {:?}; try `help`", other),
    };
    Ok(Some(command))
}

fn required<'a>(value: &'a str, usage: &str) -> anyhow::Result<&'a str> {
    if value.is_empty() {
        bail!("usage: {usage}");
    }
    Ok(value)
}

/// Reads commands until `quit` or end of input, printing the document after each event.
pub fn run<R: BufRead, W: Write>(
    app: &mut App<HeadlessDom>,
    input: R,
    mut output: W,
) -> anyhow::Result<()> {
    write!(output, "{}", app.host().snapshot())?;
    writeln!(output, "type `help` for commands")?;

    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(output, "error: {err:#}")?;
                continue;
            }
        };
        tracker_debug!("shell command {:?}", command);

        match command {
            Command::Event(event) => app.handle_event(event),
            Command::Back => {
                if !pop_history(app, HeadlessDom::back) {
                    writeln!(output, "already at the oldest entry")?;
                    continue;
                }
            }
            Command::Forward => {
                if !pop_history(app, HeadlessDom::forward) {
                    writeln!(output, "already at the newest entry")?;
                    continue;
                }
            }
            Command::Show => {}
            Command::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            Command::Quit => break,
        }
        write!(output, "{}", app.host().snapshot())?;
        output.flush()?;
    }
    Ok(())
}

/// Moves the history cursor and dispatches the resulting `popstate`.
fn pop_history(
    app: &mut App<HeadlessDom>,
    step: fn(&mut HeadlessDom) -> Option<DomEvent>,
) -> bool {
    match step(app.host_mut()) {
        Some(event) => {
            app.handle_event(event);
            true
        }
        None => false,
    }
}
