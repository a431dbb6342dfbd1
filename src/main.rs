// SPDX-License-Identifier: MIT
//
// cv-accent — pick the résumé page's accent colour from the command line.
//
// Wires the crates together the same way the page script does:
//
//   cv-contrast::AccentSelector → AccentPair → CssVariables (style sink)
//
// and prints the resulting custom-property declarations, ready to paste
// into a stylesheet or feed to a build step.
//
//   cv-accent                     random pair
//   cv-accent check "#663399"     contrast report for one colour
//   cv-accent force "rgb(0 0 0)"  declarations for a fixed colour
//
// Diagnostics (contrast shortfalls, attempt-cap fallbacks) go to stderr
// through tracing; `RUST_LOG` overrides the default `info` filter.
//
// Exit codes: 0 on success, 1 for invalid options, 2 for unreadable colours.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cv_color::{Color, ParseColorError};
use cv_contrast::config::{AccentConfig, DEFAULT_MAX_ATTEMPTS};
use cv_contrast::contrast::{MIN_CONTRAST_RATIO, evaluate_contrast_with};
use cv_contrast::picker::force_company_colour;
use cv_contrast::selector::AccentSelector;
use cv_contrast::sink::{CssVariables, set_accent_colours};

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "cv-accent", version, about)]
struct Cli {
    /// Contrast ratio the text colour must reach.
    #[arg(long, global = true, default_value_t = MIN_CONTRAST_RATIO)]
    min_contrast: f64,

    /// Random draws before giving up and using the last one.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,

    /// How to print declarations.
    #[arg(long, global = true, value_enum, default_value_t = Format::Css)]
    format: Format,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Pick a random accent colour (the default).
    Random,

    /// Report white/black text contrast for a colour.
    Check {
        /// `rgb(...)`, `rgba(...)`, `#rrggbb`, `#rgb`, `white` or `black`.
        colour: String,
    },

    /// Use a fixed accent colour, warning if its contrast is short.
    Force { colour: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One `name: value;` declaration per line.
    Css,
    /// Declarations wrapped in a `:root { ... }` rule.
    Root,
}

impl Cli {
    fn config(&self) -> Result<AccentConfig> {
        AccentConfig::default()
            .with_min_contrast(self.min_contrast)
            .with_max_attempts(self.max_attempts)
            .validate()
            .context("invalid options")
    }
}

// ─── Commands ───────────────────────────────────────────────────────────────

fn render(vars: &CssVariables, format: Format) -> String {
    match format {
        Format::Css => vars.to_string(),
        Format::Root => {
            let mut rule = vars.to_root_rule();
            rule.push('\n');
            rule
        }
    }
}

fn parse_colour(text: &str) -> Result<Color> {
    text.parse::<Color>()
        .with_context(|| format!("cannot read colour {text:?}"))
}

fn check_report(color: Color, min_contrast: f64) -> String {
    let report = evaluate_contrast_with(color, min_contrast);
    let verdict = if report.enough { "yes" } else { "no" };
    format!(
        "colour:       {color} ({hex})\n\
         white ratio:  {white:.2}\n\
         black ratio:  {black:.2}\n\
         best text:    {which}\n\
         enough:       {verdict} (>= {min_contrast})\n",
        hex = color.to_hex(),
        white = report.white_ratio,
        black = report.black_ratio,
        which = report.which,
    )
}

fn run(cli: &Cli) -> Result<String> {
    let config = cli.config()?;

    match &cli.command {
        None | Some(Command::Random) => {
            let selection = AccentSelector::new(config).pick(&mut rand::rng());
            debug!(
                accent = %selection.pair.accent,
                text = %selection.pair.text,
                attempts = selection.attempts,
                exhausted = selection.exhausted,
                "random accent pair"
            );
            let mut vars = CssVariables::new();
            set_accent_colours(&mut vars, selection.pair);
            Ok(render(&vars, cli.format))
        }
        Some(Command::Check { colour }) => {
            Ok(check_report(parse_colour(colour)?, config.min_contrast))
        }
        Some(Command::Force { colour }) => {
            let color = parse_colour(colour)?;
            let mut vars = CssVariables::new();
            force_company_colour(&mut vars, color, config.min_contrast);
            Ok(render(&vars, cli.format))
        }
    }
}

// ─── Main ───────────────────────────────────────────────────────────────────

/// 2 for unreadable colours, 1 for everything else.
fn exit_status(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<ParseColorError>().is_some() {
        2
    } else {
        1
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("cv-accent: {e:#}");
            ExitCode::from(exit_status(&e))
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
