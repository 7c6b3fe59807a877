use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::error::{DemoError, Result};
use crate::models::{Direction, RoomId};

/// Pattern demos: a nutrition plan builder and a room/wall maze builder.
#[derive(Parser, Debug)]
#[command(name = "pattern_demos")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a nutrition plan through the director and print it.
    Plan(PlanArgs),

    /// Build rooms and door walls and print each room's sides.
    Maze(MazeArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Plan request JSON file; the demo values are used when omitted.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Prompt for every plan field.
    #[arg(short, long)]
    pub interactive: bool,

    /// Print the plan as JSON instead of the text report.
    #[arg(long)]
    pub json: bool,

    /// Also write the plan as JSON to this path.
    #[arg(long)]
    pub save: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct MazeArgs {
    /// Number of rooms to build, numbered from 1.
    #[arg(long, default_value = "2")]
    pub rooms: RoomId,

    /// Door walls to add, as FIRST:SECOND room ids.
    #[arg(long = "door", value_parser = parse_door, default_value = "1:2")]
    pub doors: Vec<(RoomId, RoomId)>,

    /// Sides to enter after building, as ROOM:DIRECTION.
    #[arg(long = "enter", value_parser = parse_entry)]
    pub entries: Vec<(RoomId, Direction)>,

    /// Print the maze as JSON instead of the text report.
    #[arg(long)]
    pub json: bool,
}

fn split_pair(s: &str) -> Result<(&str, &str)> {
    s.split_once(':')
        .ok_or_else(|| DemoError::InvalidInput(format!("Expected A:B, got '{}'", s)))
}

fn parse_room_id(s: &str) -> Result<RoomId> {
    s.trim()
        .parse()
        .map_err(|_| DemoError::InvalidInput(format!("Invalid room id: '{}'", s)))
}

/// Parse `1:2` into a pair of room ids.
pub fn parse_door(s: &str) -> Result<(RoomId, RoomId)> {
    let (first, second) = split_pair(s)?;
    Ok((parse_room_id(first)?, parse_room_id(second)?))
}

/// Parse `1:north` into a room id and direction.
pub fn parse_entry(s: &str) -> Result<(RoomId, Direction)> {
    let (room, direction) = split_pair(s)?;
    Ok((parse_room_id(room)?, direction.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_door() {
        assert_eq!(parse_door("1:2").unwrap(), (1, 2));
        assert_eq!(parse_door(" 3 : 4 ").unwrap(), (3, 4));
        assert!(parse_door("12").is_err());
        assert!(parse_door("a:2").is_err());
    }

    #[test]
    fn test_parse_entry() {
        assert_eq!(parse_entry("2:south").unwrap(), (2, Direction::South));
        assert!(parse_entry("2:up").is_err());
    }

    #[test]
    fn test_maze_defaults() {
        let cli = Cli::try_parse_from(["pattern_demos", "maze"]).unwrap();
        match cli.command {
            Some(Command::Maze(args)) => {
                assert_eq!(args.rooms, 2);
                assert_eq!(args.doors, vec![(1, 2)]);
                assert!(args.entries.is_empty());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_repeated_doors_and_verbosity() {
        let cli = Cli::try_parse_from([
            "pattern_demos",
            "-vv",
            "maze",
            "--rooms",
            "3",
            "--door",
            "1:2",
            "--door",
            "2:3",
            "--enter",
            "1:n",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Maze(args)) => {
                assert_eq!(args.doors, vec![(1, 2), (2, 3)]);
                assert_eq!(args.entries, vec![(1, Direction::North)]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
