//! Reading and writing string-grid map files

use crate::io::configuration::MAP_FILE_EXTENSION;
use crate::io::error::{Result, WithPath, file_system_error};
use crate::maze::Maze;
use log::debug;
use std::path::{Path, PathBuf};

/// Load a maze from a map file
///
/// # Errors
///
/// Returns [`crate::MazeError::FileSystem`] if the file cannot be read, or
/// [`crate::MazeError::MapFile`] wrapping the decoding error if the map is malformed
pub fn read_map_file(path: &Path) -> Result<Maze> {
    let text =
        std::fs::read_to_string(path).map_err(|e| file_system_error(path, "read", e))?;
    let maze = text.parse::<Maze>().with_path(path)?;

    debug!(
        "Loaded {}x{} maze from {}",
        maze.width(),
        maze.height(),
        path.display()
    );
    Ok(maze)
}

/// Write a maze as a map file, one row per line
///
/// # Errors
///
/// Returns [`crate::MazeError::FileSystem`] if the file cannot be written
pub fn write_map_file(path: &Path, maze: &Maze) -> Result<()> {
    let mut text = maze.to_string();
    text.push('\n');
    std::fs::write(path, text).map_err(|e| file_system_error(path, "write", e))?;

    debug!("Wrote {}x{} maze to {}", maze.width(), maze.height(), path.display());
    Ok(())
}

/// Check whether a path carries the map file extension
pub fn is_map_file(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(MAP_FILE_EXTENSION)
}

/// List map files in a directory, sorted by path
///
/// # Errors
///
/// Returns [`crate::MazeError::FileSystem`] if the directory cannot be read
pub fn collect_map_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| file_system_error(dir, "read_dir", e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| file_system_error(dir, "read_dir", e))?
            .path();
        if path.is_file() && is_map_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
