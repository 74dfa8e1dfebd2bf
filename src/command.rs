//! Line-oriented commands for the interactive session.
use crate::plotter::Plotter;
use crate::session::{MeasurementId, Session};
use crate::types::{format_cm, Measurement};
use std::path::PathBuf;

pub const HELP: &str = "\
Commands:
  add [west east]        append a measurement row (default 0.0 0.0)
  set <i> <west> <east>  replace both distances of row Fi
  west <i> <value>       edit the west distance of row Fi
  east <i> <value>       edit the east distance of row Fi
  del <i>                delete row Fi (rows below are renumbered)
  del #<id>              delete the row with id #<id>, whatever its label
  clear                  delete every row
  section <text>         set the section / square caption
  list                   show the current rows
  plot                   solve and print the results listing
  export [path]          write the last plot as PNG (default intersection_plot.png)
  help                   show this text
  quit                   leave the session";

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Add { west: String, east: String },
    Set { row: usize, west: String, east: String },
    West { row: usize, value: String },
    East { row: usize, value: String },
    Delete { row: usize },
    DeleteId { id: MeasurementId },
    Clear,
    Section(String),
    List,
    Plot,
    Export(Option<PathBuf>),
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    let Some((verb, rest)) = split_word(line) else {
        return Ok(None);
    };
    let args: Vec<&str> = rest.split_whitespace().collect();

    let cmd = match verb.to_ascii_lowercase().as_str() {
        "add" => match args.as_slice() {
            [] => Command::Add {
                west: format_cm(0.0),
                east: format_cm(0.0),
            },
            [w, e] => Command::Add {
                west: w.to_string(),
                east: e.to_string(),
            },
            _ => return Err("Usage: add [west east]".to_string()),
        },
        "set" => match args.as_slice() {
            [i, w, e] => Command::Set {
                row: parse_row(i)?,
                west: w.to_string(),
                east: e.to_string(),
            },
            _ => return Err("Usage: set <i> <west> <east>".to_string()),
        },
        "west" | "east" => {
            let [i, v] = args.as_slice() else {
                return Err(format!("Usage: {verb} <i> <value>"));
            };
            let (row, value) = (parse_row(i)?, v.to_string());
            if verb.eq_ignore_ascii_case("west") {
                Command::West { row, value }
            } else {
                Command::East { row, value }
            }
        }
        "del" | "delete" => match args.as_slice() {
            [i] if i.starts_with('#') => Command::DeleteId { id: i.parse()? },
            [i] => Command::Delete { row: parse_row(i)? },
            _ => return Err("Usage: del <i> | del #<id>".to_string()),
        },
        "clear" => Command::Clear,
        "section" => Command::Section(rest.trim().to_string()),
        "list" => Command::List,
        "plot" => Command::Plot,
        "export" => match args.as_slice() {
            [] => Command::Export(None),
            [p] => Command::Export(Some(PathBuf::from(p))),
            _ => return Err("Usage: export [path]".to_string()),
        },
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("Unknown command `{other}`; type `help`")),
    };
    Ok(Some(cmd))
}

fn split_word(line: &str) -> Option<(&str, &str)> {
    if line.is_empty() {
        return None;
    }
    Some(match line.find(char::is_whitespace) {
        Some(pos) => (&line[..pos], &line[pos..]),
        None => (line, ""),
    })
}

/// Accepts `3` or `F3`.
fn parse_row(raw: &str) -> Result<usize, String> {
    let digits = raw
        .strip_prefix('F')
        .or_else(|| raw.strip_prefix('f'))
        .unwrap_or(raw);
    digits
        .parse()
        .map_err(|_| format!("Invalid row `{raw}`; expected a number like 2 or F2"))
}

/// Apply `cmd` to `session` and return the lines to show the user.
pub fn execute(
    session: &mut Session,
    plotter: &Plotter,
    cmd: Command,
) -> Result<Vec<String>, String> {
    let lines = match cmd {
        Command::Add { west, east } => {
            session.add_row(Measurement::new(west, east));
            vec![format!("Added F{}", session.len())]
        }
        Command::Set { row, west, east } => {
            session.set_row(row, Measurement::new(west, east))?;
            Vec::new()
        }
        Command::West { row, value } => {
            session.set_west(row, value)?;
            Vec::new()
        }
        Command::East { row, value } => {
            session.set_east(row, value)?;
            Vec::new()
        }
        Command::Delete { row } => {
            session.delete_row(row)?;
            vec![format!("Deleted F{row}; {} rows remain", session.len())]
        }
        Command::DeleteId { id } => {
            let label = session.delete_by_id(id)?;
            vec![format!(
                "Deleted {id} (was {label}); {} rows remain",
                session.len()
            )]
        }
        Command::Clear => {
            session.clear();
            vec!["All measurements cleared".to_string()]
        }
        Command::Section(text) => {
            session.set_section(text);
            Vec::new()
        }
        Command::List => list_rows(session),
        Command::Plot => {
            let outcome = session.plot(plotter);
            outcome.listing
        }
        Command::Export(path) => {
            let png = session.export(plotter)?;
            let path = path.unwrap_or_else(|| PathBuf::from(png.file_name));
            png.write_to(&path)?;
            vec![format!(
                "Saved {}x{} PNG ({} dpi) to {}",
                png.width,
                png.height,
                png.dpi,
                path.display()
            )]
        }
        Command::Help => HELP.lines().map(str::to_string).collect(),
        Command::Quit => Vec::new(),
    };
    Ok(lines)
}

fn list_rows(session: &Session) -> Vec<String> {
    let mut lines = vec![format!("Section: {}", session.section())];
    if session.is_empty() {
        lines.push("(no measurements)".to_string());
    }
    for (label, row) in session.labelled_rows() {
        let m = &row.measurement;
        lines.push(format!(
            "{label} {}: west={} east={}",
            row.id,
            m.west.as_deref().unwrap_or("-"),
            m.east.as_deref().unwrap_or("-")
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(session: &mut Session, line: &str) -> Result<Vec<String>, String> {
        let cmd = parse_command(line)?.expect("non-blank command");
        execute(session, &Plotter::default(), cmd)
    }

    #[test]
    fn parses_the_command_set() {
        assert_eq!(parse_command("   "), Ok(None));
        assert_eq!(
            parse_command("add"),
            Ok(Some(Command::Add {
                west: "0.0".into(),
                east: "0.0".into()
            }))
        );
        assert_eq!(
            parse_command("SET F2 250 250"),
            Ok(Some(Command::Set {
                row: 2,
                west: "250".into(),
                east: "250".into()
            }))
        );
        assert_eq!(
            parse_command("east 3 12.5"),
            Ok(Some(Command::East {
                row: 3,
                value: "12.5".into()
            }))
        );
        assert_eq!(
            parse_command("section  Section 9 Square 7 "),
            Ok(Some(Command::Section("Section 9 Square 7".into())))
        );
        assert_eq!(parse_command("export"), Ok(Some(Command::Export(None))));
        assert!(parse_command("del x").is_err());
        assert!(parse_command("del #x").is_err());
        assert!(matches!(
            parse_command("del #12"),
            Ok(Some(Command::DeleteId { .. }))
        ));
        assert!(parse_command("add 1").is_err());
        assert!(parse_command("frobnicate").is_err());
    }

    #[test]
    fn session_walkthrough() {
        let mut s = Session::default();
        run(&mut s, "set 1 250 250").unwrap();
        run(&mut s, "add 100 100").unwrap();
        run(&mut s, "add abc 100").unwrap();
        run(&mut s, "add 400 10").unwrap();

        let listing = run(&mut s, "plot").unwrap();
        assert_eq!(
            listing,
            [
                "Intersecting Points Found:",
                "F1: x = 175.0 cm, y = 178.5 cm",
                "Non-intersecting Pairs:",
                "F2: west=100.0, east=100.0 --> too far apart",
                "F4: west=400.0, east=10.0 --> one circle inside another",
            ]
        );

        run(&mut s, "del 2").unwrap();
        let rows = run(&mut s, "list").unwrap();
        assert_eq!(rows[2], "F2 #3: west=abc east=100");
        assert_eq!(rows[3], "F3 #4: west=400 east=10");
    }

    #[test]
    fn delete_by_id_survives_renumbering() {
        let mut s = Session::default();
        run(&mut s, "add 1 1").unwrap();
        run(&mut s, "add 2 2").unwrap();
        run(&mut s, "del 1").unwrap();
        let out = run(&mut s, "del #3").unwrap();
        assert_eq!(out, ["Deleted #3 (was F2); 1 rows remain"]);
        let rows = run(&mut s, "list").unwrap();
        assert_eq!(rows[1..], ["F1 #2: west=1 east=1"]);
        assert!(run(&mut s, "del #3").is_err());
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn errors_leave_the_session_intact() {
        let mut s = Session::default();
        assert!(run(&mut s, "export").is_err());
        assert!(run(&mut s, "del 5").is_err());
        assert_eq!(s.len(), 1);
        run(&mut s, "clear").unwrap();
        let rows = run(&mut s, "list").unwrap();
        assert_eq!(rows[1], "(no measurements)");
    }
}
