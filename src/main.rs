//! Webshooter CLI
//!
//! Usage:
//!   webshooter                              # Built-in demo session
//!   webshooter --replay session.jsonl       # Replay a recording
//!   webshooter --serve                      # HTTP API server
//!   webshooter --replay session.jsonl --json

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use tracing::{info, warn};

use webshooter::core::{demo_session, load_recording, run_server, save_recording, CueSink, FrameOrchestrator};
use webshooter::logging::init_logging;
use webshooter::types::{CueEvent, GestureConfig, HandReport, HandsFrame, TickReport};
use webshooter::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "webshooter",
    version = VERSION,
    about = "Webshooter - hand-gesture recognition and flick-throw projectiles",
    long_about = "Webshooter classifies hand skeletons into finger postures and gestures,\n\
                  detects flick throws while the Spider gesture is held, and simulates\n\
                  the launched projectiles.\n\n\
                  Modes:\n  \
                  --demo     Built-in scripted session (default)\n  \
                  --replay   Replay a JSON-lines recording of hand frames\n  \
                  --serve    HTTP API server mode\n\n\
                  Gestures:\n  \
                  SPIDER - index and little extended, the rest curled\n  \
                  PEACE  - index and middle fanned into a V, the rest curled"
)]
struct Args {
    /// Replay a recording (one HandsFrame JSON object per line)
    #[arg(short, long)]
    replay: Option<PathBuf>,

    /// Run the built-in demo session
    #[arg(short, long)]
    demo: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (default: 127.0.0.1:3000)
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output one TickReport JSON object per tick
    #[arg(long)]
    json: bool,

    /// Print every tick with a per-finger table
    #[arg(long)]
    verbose: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Enable joint visualization hints in reports
    #[arg(long)]
    show_joints: bool,

    /// Write the processed frames to this file
    #[arg(long)]
    record: Option<PathBuf>,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Log format: pretty or json
    #[arg(long, default_value = "pretty")]
    log_format: String,
}

/// Rings the terminal bell for every cue; silent in JSON mode
struct TerminalBell {
    enabled: bool,
}

impl CueSink for TerminalBell {
    fn cue(&mut self, event: &CueEvent) {
        if !self.enabled {
            return;
        }
        // Throws get a double ring
        let bell = match event {
            CueEvent::Thrown { .. } => "\x07\x07",
            _ => "\x07",
        };
        eprint!("{}", bell);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level, &args.log_format);

    if args.no_color {
        colored::control::set_override(false);
    }

    let config = load_config(&args)?;

    if args.serve {
        return run_serve(&args, config).await;
    }

    // --demo wins over --replay
    let (mode, frames) = match &args.replay {
        Some(path) if !args.demo => {
            let frames = load_recording(path).with_context(|| format!("failed to load {}", path.display()))?;
            ("Replay", frames)
        }
        _ => ("Demo", demo_session()),
    };
    run_session(mode, &frames, config, &args)?;

    if let Some(path) = &args.record {
        save_recording(path, &frames).with_context(|| format!("failed to record to {}", path.display()))?;
        info!(path = %path.display(), frames = frames.len(), "session recorded");
    }
    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<GestureConfig> {
    let mut config = match &args.config {
        Some(path) => GestureConfig::load(path).with_context(|| format!("failed to load config {}", path.display()))?,
        None => GestureConfig::default(),
    };
    if args.show_joints {
        config.show_joint_visuals = true;
    }
    Ok(config)
}

/// Drive every frame through one orchestrator
fn run_session(mode: &str, frames: &[HandsFrame], config: GestureConfig, args: &Args) -> anyhow::Result<()> {
    let mut orchestrator = FrameOrchestrator::new(config);
    let mut bell = TerminalBell { enabled: !args.json };
    if !args.json {
        print_header(mode);
        println!("{} frames", frames.len());
        println!();
    }
    let mut stdout = io::stdout().lock();

    let mut previous: Option<TickReport> = None;
    let mut throws = 0usize;
    for frame in frames {
        let report = orchestrator.tick_with_sink(frame, frame.time, &mut bell);
        throws += report
            .events
            .iter()
            .filter(|e| matches!(e, CueEvent::Thrown { .. }))
            .count();

        if args.json {
            writeln!(stdout, "{}", serde_json::to_string(&report)?)?;
        } else if args.verbose {
            print_verbose(&mut stdout, &report)?;
        } else if is_notable(&report, previous.as_ref()) {
            let line = if args.no_color {
                report.to_parseable_string()
            } else {
                report.to_terminal_string()
            };
            writeln!(stdout, "{}", line)?;
        }
        previous = Some(report);
    }

    if frames.is_empty() {
        warn!("no frames to process");
    }
    if !args.json {
        writeln!(stdout)?;
        writeln!(
            stdout,
            "Session ended. Ticks: {} | Throws: {} | Projectiles live: {}",
            orchestrator.tick_count(),
            throws,
            orchestrator.active_projectiles().len()
        )?;
    }
    Ok(())
}

/// A tick is worth printing when something changed
fn is_notable(report: &TickReport, previous: Option<&TickReport>) -> bool {
    let Some(prev) = previous else {
        return true;
    };
    let hand_changed = |a: &HandReport, b: &HandReport| {
        a.tracked != b.tracked || a.gestures != b.gestures || a.posture_string() != b.posture_string()
    };
    !report.events.is_empty()
        || hand_changed(&report.left, &prev.left)
        || hand_changed(&report.right, &prev.right)
        || report.projectiles.len() != prev.projectiles.len()
}

/// Print header
fn print_header(mode: &str) {
    let title = format!("Webshooter v{} - {}", VERSION, mode);
    println!("{}", "═".repeat(44).bold());
    println!("  {}", title.bold());
    println!("{}", "═".repeat(44).bold());
    println!();
}

/// Print a tick with the per-finger breakdown
fn print_verbose(out: &mut impl Write, report: &TickReport) -> io::Result<()> {
    writeln!(out, "┌─────────────────────────────────────────────┐")?;
    writeln!(out, "│ t = {:.3}s  projectiles = {}", report.time, report.projectiles.len())?;
    for hand in [&report.left, &report.right] {
        writeln!(out, "├─────────────────────────────────────────────┤")?;
        if !hand.tracked {
            writeln!(out, "│ {} {}", hand.side, "not tracked".dimmed())?;
            continue;
        }
        let gestures = &hand.gestures;
        writeln!(
            out,
            "│ {}  spider={} peace={}",
            hand.side,
            flag(gestures.spider_active),
            flag(gestures.peace_active)
        )?;
        for m in &hand.fingers {
            writeln!(
                out,
                "│   {:<7} ratio={:.3} {} {}",
                m.display_name,
                m.curl_ratio,
                m.posture().symbol(),
                if m.is_pinching { "pinch".magenta().to_string() } else { String::new() }
            )?;
        }
        if let Some(check) = &hand.throw_check {
            writeln!(out, "│   throw: {} ({:.2} m/s)", check.reason.code(), check.speed)?;
        }
    }
    for event in &report.events {
        writeln!(out, "│ {}", event.label().yellow())?;
    }
    writeln!(out, "└─────────────────────────────────────────────┘")
}

fn flag(active: bool) -> colored::ColoredString {
    if active {
        "on".green().bold()
    } else {
        "off".dimmed()
    }
}

/// Run HTTP API server
async fn run_serve(args: &Args, config: GestureConfig) -> anyhow::Result<()> {
    println!();
    print_header("API Server");
    run_server(&args.addr, config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_joints_flag_overrides_default() {
        let args = Args::parse_from(["webshooter", "--show-joints"]);
        let config = load_config(&args).unwrap();
        assert!(config.show_joint_visuals);
    }

    #[test]
    fn test_invalid_config_file_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"launch_multiplier\": -1.0}}").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let args = Args::parse_from(["webshooter", "--config", path.as_str()]);
        let err = load_config(&args).unwrap_err();
        assert!(format!("{:#}", err).contains("launch_multiplier"));
    }
}
