// SPDX-License-Identifier: MIT
//
// ripliel: reading anchors beneath lines of text.
//
// This is the command-line host that wires together all the crates:
//
//   ripliel-style  → text hash, (pattern, color) selection, SVG drawing
//   ripliel-text   → sentence splitting and interval crossing
//   ripliel-config → validated settings, JSON file store
//   ripliel-anchor → visual lines, skip policy, paragraph plans
//
// Commands:
//
//   ripliel style <text>                         hash, pattern and color
//   ripliel render <pattern> <#rrggbb> [width]   one anchor as SVG
//   ripliel sentences <text>                     one sentence per line
//   ripliel config [settings.json]               validated config as JSON
//   ripliel init <settings.json>                 seed an empty store
//   ripliel plan <layout.json> [--settings <f>] [--svg]
//
// Logging goes to stderr and is controlled by RUST_LOG (default: warn).

use std::io::{self, Write};
use std::path::PathBuf;
use std::{env, fs, process};

use ripliel_anchor::{Layout, ParagraphPlan, plan_layout};
use ripliel_config::{Config, JsonFileStore, Settings, StoreError};
use ripliel_style::render::to_svg;
use ripliel_style::{AnchorPattern, Rgb, hash, select_style};
use ripliel_text::split_into_sentences;
use serde_json::Value;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
usage: ripliel <command> [args]

commands:
  style <text>                              show the anchor style for <text>
  render <pattern> <#rrggbb> [width]        draw one anchor as SVG (width 50)
  sentences <text>                          split <text> into sentences
  config [settings.json]                    print the validated config
  init <settings.json>                      write default settings if empty
  plan <layout.json> [--settings <file>] [--svg]
                                            plan anchors for a measured page";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type Result<T> = std::result::Result<T, CliError>;

// ---------------------------------------------------------------------------
// Argument parsing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Help,
    Style(String),
    Render { pattern: AnchorPattern, color: Rgb, width: f64 },
    Sentences(String),
    Config(Option<PathBuf>),
    Init(PathBuf),
    Plan { layout: PathBuf, settings: Option<PathBuf>, svg: bool },
}

fn usage(msg: impl Into<String>) -> CliError {
    CliError::Usage(msg.into())
}

/// Parse the arguments after the program name.
fn parse_args(args: &[String]) -> Result<Command> {
    let Some((cmd, rest)) = args.split_first() else {
        return Ok(Command::Help);
    };

    match cmd.as_str() {
        "help" | "-h" | "--help" => Ok(Command::Help),
        "style" => Ok(Command::Style(rest.join(" "))),
        "render" => parse_render(rest),
        "sentences" => Ok(Command::Sentences(rest.join(" "))),
        "config" => match rest {
            [] => Ok(Command::Config(None)),
            [path] => Ok(Command::Config(Some(PathBuf::from(path)))),
            _ => Err(usage("config takes at most one file")),
        },
        "init" => match rest {
            [path] => Ok(Command::Init(PathBuf::from(path))),
            _ => Err(usage("init takes exactly one file")),
        },
        "plan" => parse_plan(rest),
        other => Err(usage(format!("unknown command: {other}"))),
    }
}

/// Width used by `render` when none is given: the widest anchor.
const DEFAULT_RENDER_WIDTH: f64 = 50.0;

fn parse_render(args: &[String]) -> Result<Command> {
    let (name, color, width) = match args {
        [name, color] => (name, color, None),
        [name, color, width] => (name, color, Some(width)),
        _ => return Err(usage("render takes a pattern, a color and an optional width")),
    };
    let pattern = AnchorPattern::from_name(name)
        .ok_or_else(|| usage(format!("unknown pattern: {name}")))?;
    let color = Rgb::hex(color).ok_or_else(|| usage(format!("not a #rrggbb color: {color}")))?;
    let width = match width {
        None => DEFAULT_RENDER_WIDTH,
        Some(w) => w
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite() && *w > 0.0)
            .ok_or_else(|| usage(format!("not a positive width: {w}")))?,
    };
    Ok(Command::Render { pattern, color, width })
}

fn parse_plan(args: &[String]) -> Result<Command> {
    let mut layout = None;
    let mut settings = None;
    let mut svg = false;

    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--svg" => svg = true,
            "--settings" => {
                let path = it.next().ok_or_else(|| usage("--settings needs a file"))?;
                settings = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => {
                return Err(usage(format!("unknown option: {flag}")));
            }
            path if layout.is_none() => layout = Some(PathBuf::from(path)),
            extra => return Err(usage(format!("unexpected argument: {extra}"))),
        }
    }

    let layout = layout.ok_or_else(|| usage("plan needs a layout file"))?;
    Ok(Command::Plan { layout, settings, svg })
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn run(cmd: &Command, out: &mut impl Write) -> Result<()> {
    match cmd {
        Command::Help => writeln!(out, "{USAGE}")?,
        Command::Style(text) => {
            let style = select_style(text);
            writeln!(out, "hash:    {}", hash(text))?;
            writeln!(out, "pattern: {} (#{})", style.pattern, style.pattern.index())?;
            writeln!(out, "color:   {}", style.color)?;
        }
        Command::Render { pattern, color, width } => {
            writeln!(out, "{}", to_svg(*pattern, *color, *width))?;
        }
        Command::Sentences(text) => {
            for sentence in split_into_sentences(text) {
                writeln!(out, "{}", sentence.trim())?;
            }
        }
        Command::Config(path) => {
            let config = load_config(path.as_ref());
            let mut blob = config.to_blob();
            if let Some(family) = config.font_family() {
                blob.insert("fontFamily".into(), Value::from(family));
            }
            writeln!(out, "{}", serde_json::to_string_pretty(&blob)?)?;
        }
        Command::Init(path) => {
            let mut store = JsonFileStore::new(path);
            let written = Settings::install_defaults(&mut store)?;
            let path = store.path().display();
            if written {
                writeln!(out, "wrote defaults to {path}")?;
            } else {
                writeln!(out, "{path} already has settings")?;
            }
        }
        Command::Plan { layout, settings, svg } => {
            let config = load_config(settings.as_ref());
            let page: Layout = serde_json::from_str(&fs::read_to_string(layout)?)?;
            let plans = plan_layout(&page, &config);
            info!(paragraphs = page.paragraphs.len(), planned = plans.len(), "page planned");
            if *svg {
                write_svg(&plans, out)?;
            } else {
                writeln!(out, "{}", serde_json::to_string_pretty(&plans)?)?;
            }
        }
    }
    Ok(())
}

/// The validated config from `path`, or the defaults when there is none.
fn load_config(path: Option<&PathBuf>) -> Config {
    path.map_or_else(Config::default, |p| {
        Settings::load(&JsonFileStore::new(p)).config()
    })
}

/// One line per anchor: paragraph, line, slot, left, top, then the markup.
fn write_svg(plans: &[ParagraphPlan], out: &mut impl Write) -> io::Result<()> {
    for plan in plans {
        for a in &plan.anchors {
            let svg = to_svg(a.style.pattern, a.style.color, a.width);
            let p = a.positions;
            for (slot, left) in [("start", p.start), ("middle", p.middle), ("end", p.end)] {
                writeln!(out, "{}\t{}\t{slot}\t{left}\t{}\t{svg}", plan.paragraph, a.line, a.top)?;
            }
        }
    }
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let result = parse_args(&args).and_then(|cmd| run(&cmd, &mut io::stdout().lock()));

    if let Err(e) = result {
        eprintln!("ripliel: {e}");
        if matches!(e, CliError::Usage(_)) {
            eprintln!("\n{USAGE}");
        }
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    fn output(cmd: &Command) -> String {
        let mut buf = Vec::new();
        run(cmd, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    // ── Parsing ───────────────────────────────────────────────────────────

    #[test]
    fn no_args_is_help() {
        assert_eq!(parse_args(&[]).unwrap(), Command::Help);
        assert_eq!(parse_args(&args(&["--help"])).unwrap(), Command::Help);
    }

    #[test]
    fn style_joins_words() {
        assert_eq!(
            parse_args(&args(&["style", "hello", "world"])).unwrap(),
            Command::Style("hello world".into())
        );
    }

    #[test]
    fn config_optional_path() {
        assert_eq!(parse_args(&args(&["config"])).unwrap(), Command::Config(None));
        assert_eq!(
            parse_args(&args(&["config", "s.json"])).unwrap(),
            Command::Config(Some("s.json".into()))
        );
        assert!(parse_args(&args(&["config", "a", "b"])).is_err());
    }

    #[test]
    fn plan_flags_any_order() {
        let cmd = parse_args(&args(&["plan", "--svg", "page.json", "--settings", "s.json"])).unwrap();
        assert_eq!(
            cmd,
            Command::Plan {
                layout: "page.json".into(),
                settings: Some("s.json".into()),
                svg: true,
            }
        );
    }

    #[test]
    fn plan_errors() {
        assert!(matches!(parse_args(&args(&["plan"])), Err(CliError::Usage(_))));
        assert!(parse_args(&args(&["plan", "a.json", "--settings"])).is_err());
        assert!(parse_args(&args(&["plan", "a.json", "--fast"])).is_err());
        assert!(parse_args(&args(&["plan", "a.json", "b.json"])).is_err());
    }

    #[test]
    fn unknown_command() {
        let err = parse_args(&args(&["draw"])).unwrap_err();
        assert!(err.to_string().starts_with("unknown command: draw"));
    }

    // ── Commands ──────────────────────────────────────────────────────────

    #[test]
    fn style_output() {
        assert_eq!(
            output(&Command::Style(String::new())),
            "hash:    0\npattern: dots-small (#0)\ncolor:   #e74c3c\n"
        );
    }

    #[test]
    fn render_parses_pattern_and_color() {
        let cmd = parse_args(&args(&["render", "stars", "#3498db", "24"])).unwrap();
        assert_eq!(
            cmd,
            Command::Render {
                pattern: AnchorPattern::from_name("stars").unwrap(),
                color: Rgb::new(0x34, 0x98, 0xdb),
                width: 24.0,
            }
        );
        let Command::Render { width, .. } = parse_args(&args(&["render", "pipes", "e74c3c"])).unwrap()
        else {
            panic!("expected render");
        };
        assert_eq!(width, DEFAULT_RENDER_WIDTH);
    }

    #[test]
    fn render_rejects_bad_input() {
        assert!(parse_args(&args(&["render", "sparkles", "#e74c3c"])).is_err());
        assert!(parse_args(&args(&["render", "stars", "red"])).is_err());
        assert!(parse_args(&args(&["render", "stars", "#e74c3c", "-3"])).is_err());
        assert!(parse_args(&args(&["render", "stars"])).is_err());
    }

    #[test]
    fn render_output() {
        let out = output(&Command::Render {
            pattern: AnchorPattern::from_name("pipes").unwrap(),
            color: Rgb::new(0xe7, 0x4c, 0x3c),
            width: 20.0,
        });
        assert!(out.starts_with("<svg"));
        assert!(out.contains("viewBox=\"0 0 20 6\""));
    }

    #[test]
    fn init_accepts_blank_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "").unwrap();
        assert!(output(&Command::Init(path)).starts_with("wrote defaults"));
    }

    #[test]
    fn sentences_output() {
        assert_eq!(
            output(&Command::Sentences("One. Two! Three?".into())),
            "One.\nTwo!\nThree?\n"
        );
    }

    #[test]
    fn config_defaults_without_file() {
        let v: Value = serde_json::from_str(&output(&Command::Config(None))).unwrap();
        assert_eq!(v["sentenceInterval"], 3);
        assert!(v["fontFamily"].as_str().unwrap().ends_with("serif"));
    }

    #[test]
    fn init_then_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        assert!(output(&Command::Init(path.clone())).starts_with("wrote defaults"));
        assert!(output(&Command::Init(path.clone())).ends_with("already has settings\n"));

        fs::write(&path, r#"{ "sentenceInterval": 99, "useSerifFont": false }"#).unwrap();
        let v: Value = serde_json::from_str(&output(&Command::Config(Some(path)))).unwrap();
        assert_eq!(v["sentenceInterval"], 20);
        assert_eq!(v.get("fontFamily"), None);
    }

    #[test]
    fn plan_json_and_svg() {
        let dir = tempfile::tempdir().unwrap();
        let layout = dir.path().join("page.json");
        fs::write(
            &layout,
            r#"{ "paragraphs": [ { "tag": "p", "lines": [
                { "left": 100, "right": 600, "top": 0, "bottom": 16, "text": "A sentence that ends here." }
            ] } ] }"#,
        )
        .unwrap();
        let settings = dir.path().join("settings.json");
        fs::write(&settings, r#"{ "sentenceInterval": 1 }"#).unwrap();

        let cmd = Command::Plan { layout: layout.clone(), settings: Some(settings.clone()), svg: false };
        let v: Value = serde_json::from_str(&output(&cmd)).unwrap();
        assert_eq!(v[0]["paragraph"], 0);
        assert_eq!(v[0]["anchors"][0]["middle"], 325.0);

        let cmd = Command::Plan { layout, settings: Some(settings), svg: true };
        let svg = output(&cmd);
        let rows: Vec<&str> = svg.lines().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("0\t0\tstart\t100\t17\t<svg"));
        assert!(rows[2].starts_with("0\t0\tend\t550\t17\t<svg"));
    }

    #[test]
    fn plan_missing_layout_is_io_error() {
        let cmd = Command::Plan { layout: "/nonexistent/page.json".into(), settings: None, svg: false };
        let mut buf = Vec::new();
        assert!(matches!(run(&cmd, &mut buf), Err(CliError::Io(_))));
    }
}
