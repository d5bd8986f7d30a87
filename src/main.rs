use std::io::{self, BufRead, Write};

use match_turn::{JsonSerialisable, MatchTurn};
use serde::Deserialize;
use serde_json::Value;

#[macro_use]
extern crate log;

#[derive(Deserialize, Debug, Default)]
struct Config {
    /// Stop at the first malformed record instead of skipping it
    #[serde(default)]
    strict: bool,

    #[serde(default)]
    pretty: bool,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    accepted: usize,
    rejected: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "turn_inspect=info,match_turn=info");
    }
    env_logger::init();

    // Env config
    let cfg = match envy::prefixed("TURN_INSPECT_").from_env::<Config>() {
        Ok(config) => config,
        Err(e) => {
            warn!("Could not read configuration, using defaults: {}", e);
            Config::default()
        }
    };
    trace!("Running with {:?}", cfg);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = inspect(stdin.lock(), stdout.lock(), &cfg)?;

    info!(
        "Accepted {} match turns, rejected {}",
        summary.accepted, summary.rejected
    );
    Ok(())
}

/// Reads one JSON record per line and writes back the canonical form of every valid match turn
fn inspect<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    cfg: &Config,
) -> Result<Summary, Box<dyn std::error::Error>> {
    let mut summary = Summary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_number = index + 1;

        match decode_line(&line) {
            Ok(turn) => {
                let record = Value::Object(turn.to_json());
                if cfg.pretty {
                    serde_json::to_writer_pretty(&mut writer, &record)?;
                } else {
                    serde_json::to_writer(&mut writer, &record)?;
                }
                writeln!(writer)?;
                summary.accepted += 1;
            }
            Err(reason) => {
                if cfg.strict {
                    return Err(format!("line {}: {}", line_number, reason).into());
                }
                warn!("Skipping line {}: {}", line_number, reason);
                summary.rejected += 1;
            }
        }
    }

    writer.flush()?;
    Ok(summary)
}

fn decode_line(line: &str) -> Result<MatchTurn, Box<dyn std::error::Error>> {
    match serde_json::from_str::<Value>(line)? {
        Value::Object(record) => Ok(MatchTurn::from_json(&record)?),
        _ => Err("record is not a JSON object".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = r#"{"type":"move","turn":1,"gamer":"alice","data":"e2e4","createdAt":10,"extra":true}

{"type":"move","gamer":"bob","data":"e7e5","createdAt":20}
[1, 2]
not json
{"type":"move","turnNumber":2,"gamer":"bob","data":"e7e5","createdAt":20}
"#;

    #[test]
    fn skips_malformed_lines_by_default() {
        let mut out = Vec::new();
        let summary = inspect(INPUT.as_bytes(), &mut out, &Config::default()).expect("inspect");

        assert_eq!(
            summary,
            Summary {
                accepted: 2,
                rejected: 3
            }
        );

        let out = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);

        let second: MatchTurn = serde_json::from_str(lines[1]).expect("deserialize");
        assert_eq!(second, MatchTurn::new("move", 2, "bob", "e7e5", 20));
        assert!(!lines[0].contains("extra"));
    }

    #[test]
    fn strict_mode_stops_at_first_rejection() {
        let cfg = Config {
            strict: true,
            pretty: false,
        };
        let mut out = Vec::new();
        let err = inspect(INPUT.as_bytes(), &mut out, &cfg).unwrap_err();

        assert!(err.to_string().starts_with("line 3:"));
        assert!(err.to_string().contains("\"turn\""));
        assert_eq!(String::from_utf8(out).expect("utf8").lines().count(), 1);
    }

    #[test]
    fn pretty_output_is_still_one_record() {
        let cfg = Config {
            strict: true,
            pretty: true,
        };
        let mut out = Vec::new();
        inspect(
            r#"{"type":"pass","turn":4,"gamer":"carol","data":"","createdAt":99}"#.as_bytes(),
            &mut out,
            &cfg,
        )
        .expect("inspect");

        let turn: MatchTurn = serde_json::from_slice(&out).expect("deserialize");
        assert_eq!(turn.kind(), "pass");
        assert_eq!(turn.created_at(), 99);
    }
}
