// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Catalan Explorer CLI entrypoint.
//!
//! By default this runs the interactive walkthrough. The `paths`, `reflect` and `numbers`
//! subcommands print engine results to stdout for scripting and quick checks.

use std::error::Error;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use catalan_explorer::config::{ExplorerConfig, MAX_GRID_SIZE};
use catalan_explorer::engine::{
    bad_path_count, catalan, generate_all_paths, generate_bad_paths, reflect, total_path_count,
    LatticePath, MoveSequence, MAX_ENUMERATION_SIZE,
};
use catalan_explorer::render::{render_grid, GridScene};
use catalan_explorer::tui::{self, TuiTheme};

const PROGRAM: &str = "catalan-explorer";
/// Largest `n` the `numbers` table prints.
const MAX_TABLE_SIZE: u32 = 1000;
/// Longest move list `reflect` accepts: a path to `(n, n)` for the largest enumerable grid,
/// plus one step either way.
const MAX_REFLECT_MOVES: usize = 2 * MAX_ENUMERATION_SIZE as usize + 2;

#[derive(Parser, Debug)]
#[command(name = PROGRAM, version)]
#[command(about = "Derive the Catalan numbers from lattice-path puzzles")]
struct Cli {
    /// TOML file with grid size and animation timings
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Grid size for the walkthrough (overrides the config file)
    #[arg(
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_GRID_SIZE))
    )]
    grid_size: Option<u32>,

    /// Write logs to this file while the TUI is running
    #[arg(long, value_name = "FILE", global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Run the interactive walkthrough (default)
    Tui,
    /// List every monotone path from (0,0) to (n,n)
    Paths {
        #[arg(
            short = 'n',
            default_value_t = 3,
            value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_ENUMERATION_SIZE))
        )]
        n: u32,
        /// Only paths that rise above the diagonal
        #[arg(long)]
        bad: bool,
        /// Print JSON instead of move sequences
        #[arg(long)]
        json: bool,
    },
    /// Reflect a path at its first touch of y = x + 1
    Reflect {
        /// Moves such as "U U R R R R R U U U"
        #[arg(value_name = "MOVES")]
        moves: MoveSequence,
    },
    /// Table of n, C(2n,n), C(2n,n-1) and C_n
    Numbers {
        #[arg(
            long,
            value_name = "N",
            default_value_t = 10,
            value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_TABLE_SIZE))
        )]
        up_to: u32,
    },
}

#[derive(Debug, thiserror::Error)]
#[error("path never touches y = x + 1")]
struct NoReflection;

#[derive(Debug, thiserror::Error)]
#[error("path has {len} moves, at most {max} are supported")]
struct TooManyMoves {
    len: usize,
    max: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, None | Some(Command::Tui));
    if let Err(err) = init_tracing(interactive, cli.log_file.as_deref()) {
        eprintln!("{PROGRAM}: {err}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = %err, "exiting with failure");
            eprintln!("{PROGRAM}: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(interactive: bool, log_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    if !interactive {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr))
            .with(env_filter)
            .init();
        return Ok(());
    }

    // The TUI owns the terminal, so logs go to a file or nowhere.
    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|err| format!("failed to open log file {}: {err}", path.display()))?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .init();
            tracing::info!(path = %path.display(), "logging initialized");
        }
        None => tracing_subscriber::registry().with(env_filter).init(),
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let command = match cli.command {
        None | Some(Command::Tui) => return run_tui(cli.config.as_deref(), cli.grid_size),
        Some(command) => command,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match command {
        Command::Paths { n, bad, json } => write_paths(&mut out, n, bad, json)?,
        Command::Reflect { moves } => write_reflection(&mut out, &moves)?,
        Command::Numbers { up_to } => write_numbers(&mut out, up_to)?,
        Command::Tui => {}
    }
    out.flush()?;
    Ok(())
}

fn run_tui(config_path: Option<&Path>, grid_size: Option<u32>) -> Result<(), Box<dyn Error>> {
    let mut config = ExplorerConfig::load(config_path)?;
    if let Some(grid_size) = grid_size {
        config = config.with_grid_size(grid_size);
        config.validate()?;
    }
    let theme = TuiTheme::from_env()?;
    tracing::info!(grid_size = config.grid_size, "starting walkthrough");
    tui::run(config, theme)
}

#[derive(Serialize)]
struct PathListing<'a> {
    n: u32,
    bad: bool,
    count: usize,
    paths: &'a [LatticePath],
}

fn write_paths(out: &mut impl Write, n: u32, bad: bool, json: bool) -> Result<(), Box<dyn Error>> {
    let paths = if bad { generate_bad_paths(n) } else { generate_all_paths(n) };
    tracing::debug!(n, bad, count = paths.len(), "enumerated paths");

    if json {
        let listing = PathListing { n, bad, count: paths.len(), paths: &paths };
        serde_json::to_writer_pretty(&mut *out, &listing)?;
        writeln!(out)?;
        return Ok(());
    }

    for path in &paths {
        writeln!(out, "{}", path.moves())?;
    }
    let kind = if bad { "bad paths" } else { "paths" };
    writeln!(out, "{} {kind} to ({n},{n})", paths.len())?;
    Ok(())
}

fn write_reflection(out: &mut impl Write, moves: &MoveSequence) -> Result<(), Box<dyn Error>> {
    if moves.len() > MAX_REFLECT_MOVES {
        return Err(TooManyMoves { len: moves.len(), max: MAX_REFLECT_MOVES }.into());
    }
    let path = LatticePath::from_moves(moves);
    let reflection = reflect(&path).ok_or(NoReflection)?;
    let reflected = reflection.path();

    let width = path.end().x.max(reflected.end().x);
    let height = path.end().y.max(reflected.end().y);
    let scene = GridScene {
        reflection_line: true,
        path: Some(&path),
        reflected: Some(reflected),
        marker: Some(reflection.pivot()),
        ..GridScene::new(width, height)
    };
    let grid = render_grid(&scene)?;

    writeln!(out, "pivot: {}", reflection.pivot())?;
    writeln!(out, "original:  {moves}")?;
    writeln!(out, "reflected: {}", reflected.moves())?;
    writeln!(out, "ends at {}", reflected.end())?;
    writeln!(out)?;
    writeln!(out, "{}", grid.trimmed_text())?;
    Ok(())
}

fn write_numbers(out: &mut impl Write, up_to: u32) -> io::Result<()> {
    let rows = (0..=up_to)
        .map(|n| {
            [
                n.to_string(),
                total_path_count(n).to_string(),
                bad_path_count(n).to_string(),
                catalan(n).to_string(),
            ]
        })
        .collect::<Vec<_>>();
    let header = ["n", "C(2n,n)", "C(2n,n-1)", "C_n"];
    let widths: [usize; 4] = std::array::from_fn(|col| {
        rows.iter().map(|row| row[col].len()).chain([header[col].len()]).max().unwrap_or(0)
    });

    let mut write_row = |cells: [&str; 4]| -> io::Result<()> {
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:>width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(out, "{line}")
    };
    write_row(header)?;
    for row in &rows {
        write_row([&row[0], &row[1], &row[2], &row[3]])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<(), Box<dyn Error>>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).expect("command output");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn defaults_to_the_tui() {
        let cli = Cli::try_parse_from([PROGRAM]).expect("parse");
        assert_eq!(cli.command, None);
        assert_eq!(cli.grid_size, None);

        let cli = Cli::try_parse_from([PROGRAM, "--grid-size", "4", "--log-file", "x.log", "tui"])
            .expect("parse");
        assert_eq!(cli.command, Some(Command::Tui));
        assert_eq!(cli.grid_size, Some(4));
        assert_eq!(cli.log_file, Some(PathBuf::from("x.log")));
    }

    #[test]
    fn rejects_out_of_range_sizes() {
        assert!(Cli::try_parse_from([PROGRAM, "--grid-size", "8"]).is_err());
        assert!(Cli::try_parse_from([PROGRAM, "--grid-size", "0"]).is_err());
        assert!(Cli::try_parse_from([PROGRAM, "paths", "-n", "11"]).is_err());
        assert!(Cli::try_parse_from([PROGRAM, "numbers", "--up-to", "1001"]).is_err());

        let cli = Cli::try_parse_from([PROGRAM, "numbers", "--up-to", "1000"]).expect("parse");
        assert_eq!(cli.command, Some(Command::Numbers { up_to: 1000 }));
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from([PROGRAM, "paths", "-n", "2", "--bad", "--json"])
            .expect("parse");
        assert_eq!(cli.command, Some(Command::Paths { n: 2, bad: true, json: true }));

        let cli = Cli::try_parse_from([PROGRAM, "reflect", "U U R R R R R U U U"]).expect("parse");
        let Some(Command::Reflect { moves }) = cli.command else {
            panic!("expected reflect");
        };
        assert_eq!(moves.len(), 10);

        assert!(Cli::try_parse_from([PROGRAM, "reflect", "U X"]).is_err());
    }

    #[test]
    fn paths_lists_moves_and_a_count() {
        let text = output(|out| write_paths(out, 2, false, false));
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(
            lines,
            ["R R U U", "R U R U", "R U U R", "U R R U", "U R U R", "U U R R", "6 paths to (2,2)"]
        );

        let text = output(|out| write_paths(out, 2, true, false));
        assert!(text.ends_with("4 bad paths to (2,2)\n"));
    }

    #[test]
    fn paths_json_carries_the_count() {
        let text = output(|out| write_paths(out, 3, true, true));
        let value: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert_eq!(value["count"], 15);
        assert_eq!(value["paths"].as_array().map(Vec::len), Some(15));
    }

    #[test]
    fn reflect_reports_the_pivot() {
        let moves = "U U R R R R R U U U".parse::<MoveSequence>().expect("moves");
        let text = output(|out| write_reflection(out, &moves));
        assert!(text.starts_with("pivot: (0,1)\n"));
        assert!(text.contains("reflected: U R U U U U U R R R\n"));
        assert!(text.contains("ends at (4,6)\n"));
    }

    #[test]
    fn reflect_fails_without_a_touch() {
        let moves = "R U R U".parse::<MoveSequence>().expect("moves");
        let err = write_reflection(&mut Vec::new(), &moves).expect_err("valid path");
        assert_eq!(err.to_string(), "path never touches y = x + 1");
    }

    #[test]
    fn reflect_rejects_oversized_paths_before_drawing() {
        let mut moves = "U".repeat(50_000);
        moves.push_str(&"R".repeat(50_000));
        let moves = moves.parse::<MoveSequence>().expect("moves");
        let mut buf = Vec::new();
        let err = write_reflection(&mut buf, &moves).expect_err("too long");
        assert_eq!(err.to_string(), "path has 100000 moves, at most 22 are supported");
        assert!(buf.is_empty());

        let longest = format!("{}{}", "U".repeat(11), "R".repeat(11));
        let moves = longest.parse::<MoveSequence>().expect("moves");
        let text = output(|out| write_reflection(out, &moves));
        assert!(text.contains("ends at (10,12)\n"));
    }

    #[test]
    fn numbers_table_is_right_aligned() {
        let mut buf = Vec::new();
        write_numbers(&mut buf, 3).expect("table");
        let text = String::from_utf8(buf).expect("utf8");
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "n  C(2n,n)  C(2n,n-1)  C_n");
        assert_eq!(lines[1], "0        1          0    1");
        assert_eq!(lines[4], "3       20         15    5");
    }
}
