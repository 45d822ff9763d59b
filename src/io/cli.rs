//! Command-line interface for validating map files and querying movement

use crate::io::error::{MazeError, Result, file_system_error, invalid_parameter};
use crate::io::map_file::{collect_map_files, read_map_file};
use crate::io::progress::ProgressManager;
use crate::maze::{Direction, Maze, Position};
use clap::Parser;
use log::{error, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Label used in reports for the built-in map
pub const DEFAULT_MAP_LABEL: &str = "<default>";

#[derive(Parser, Debug)]
#[command(name = "wallmaze")]
#[command(
    version,
    about = "Validate string-grid maze maps and query wall-aware movement"
)]
/// Command-line arguments for the maze checker
pub struct Cli {
    /// Map file or directory of .maze files (built-in map when omitted)
    #[arg(value_name = "TARGET")]
    pub target: Option<PathBuf>,

    /// Print each map in canonical form after validating it
    #[arg(short, long)]
    pub print: bool,

    /// Cell to query movement from, as `i,j`
    #[arg(short, long, value_name = "I,J")]
    pub from: Option<Position>,

    /// Heading to query (all four when omitted)
    #[arg(short = 'd', long, requires = "from")]
    pub heading: Option<Direction>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Headings covered by a movement query
    pub fn headings(&self) -> Vec<Direction> {
        self.heading.map_or_else(|| Direction::ALL.to_vec(), |d| vec![d])
    }
}

/// Validates the maps named on the command line and writes a report
pub struct MapChecker {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MapChecker {
    /// Create a checker for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self {
            cli,
            progress_manager: None,
        }
    }

    /// Check every map named by the CLI arguments, reporting to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if the target cannot be read or the report cannot be
    /// written, which stops the batch at once. Maps that fail to load or
    /// query are logged and counted, then surface as [`MazeError::BatchFailed`]
    pub fn process(&mut self, out: &mut impl Write) -> Result<()> {
        let Some(target) = self.cli.target.clone() else {
            let maze = Maze::default_maze()?;
            let answers = self.query(&maze)?;
            return Self::write_report(out, DEFAULT_MAP_LABEL, &maze, self.cli.print, &answers);
        };

        let files = Self::collect_files(&target)?;
        if files.is_empty() {
            warn!("No map files found in {}", target.display());
            return Ok(());
        }

        if target.is_dir() && self.cli.should_show_progress() {
            let mut pm = ProgressManager::new();
            pm.initialize(files.len());
            self.progress_manager = Some(pm);
        }

        let mut failed = 0;
        for file in &files {
            if let Some(ref pm) = self.progress_manager {
                pm.start_file(file);
            }

            let label = file.display().to_string();
            let succeeded = match read_map_file(file) {
                Ok(maze) => match self.query(&maze) {
                    Ok(answers) => {
                        Self::write_report(out, &label, &maze, self.cli.print, &answers)?;
                        true
                    }
                    Err(e) => {
                        error!("{label}: {e}");
                        false
                    }
                },
                Err(e) => {
                    error!("{e}");
                    false
                }
            };
            if !succeeded {
                failed += 1;
            }

            if let Some(ref pm) = self.progress_manager {
                pm.complete_file();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish(failed);
        }

        if failed > 0 {
            return Err(MazeError::BatchFailed {
                failed,
                total: files.len(),
            });
        }
        info!("Checked {} map(s)", files.len());
        Ok(())
    }

    fn collect_files(target: &Path) -> Result<Vec<PathBuf>> {
        if target.is_file() {
            Ok(vec![target.to_path_buf()])
        } else if target.is_dir() {
            collect_map_files(target)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a map file or directory",
            ))
        }
    }

    /// Answer the requested movement queries before anything is written
    fn query(&self, maze: &Maze) -> Result<Vec<Answer>> {
        let Some(pos) = self.cli.from else {
            return Ok(Vec::new());
        };

        self.cli
            .headings()
            .into_iter()
            .map(|dir| {
                Ok(Answer {
                    pos,
                    dir,
                    forward: maze.can_move_forward(pos, dir)?,
                    backward: maze.can_move_backward(pos, dir)?,
                })
            })
            .collect()
    }

    fn write_report(
        out: &mut impl Write,
        label: &str,
        maze: &Maze,
        print: bool,
        answers: &[Answer],
    ) -> Result<()> {
        let write_err = |e| file_system_error(Path::new(REPORT_PATH), "write", e);

        writeln!(out, "{label}: {}x{}", maze.width(), maze.height()).map_err(write_err)?;

        if print {
            for row in maze.to_map() {
                writeln!(out, "{row}").map_err(write_err)?;
            }
        }

        for answer in answers {
            writeln!(
                out,
                "  {} {}: forward {}, backward {}",
                answer.pos,
                answer.dir,
                yes_no(answer.forward),
                yes_no(answer.backward)
            )
            .map_err(write_err)?;
        }

        Ok(())
    }
}

/// Movement answers for one heading
struct Answer {
    pos: Position,
    dir: Direction,
    forward: bool,
    backward: bool,
}

/// Path reported when the report stream itself fails
const REPORT_PATH: &str = "<report>";

const fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
