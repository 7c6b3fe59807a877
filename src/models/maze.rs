use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DemoError;

pub type RoomId = u32;

/// Compass direction of a room side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Canonical order used by reports.
    pub const ALL: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    #[inline]
    fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    fn lowercase(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "north" | "n" => Ok(Self::North),
            "east" | "e" => Ok(Self::East),
            "south" | "s" => Ok(Self::South),
            "west" | "w" => Ok(Self::West),
            other => Err(DemoError::InvalidInput(format!(
                "Unknown direction: {}",
                other
            ))),
        }
    }
}

/// Index of a wall in the maze's wall arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WallId(pub usize);

pub const DOOR_OPEN_MESSAGE: &str = "Entering through an open door";
pub const DOOR_CLOSED_MESSAGE: &str = "Door is closed, cannot enter";

/// A room side: either a plain wall or a door shared by two rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Wall {
    Plain { direction: Direction },
    Door { rooms: (RoomId, RoomId), open: bool },
}

impl Wall {
    pub fn plain(direction: Direction) -> Self {
        Wall::Plain { direction }
    }

    /// New door between two rooms. Doors start closed.
    pub fn door(first: RoomId, second: RoomId) -> Self {
        Wall::Door {
            rooms: (first, second),
            open: false,
        }
    }

    pub fn is_door(&self) -> bool {
        matches!(self, Wall::Door { .. })
    }

    /// Message reported when something tries to pass through this side.
    ///
    /// Entering never changes the wall.
    pub fn enter(&self) -> &'static str {
        match self {
            Wall::Plain { direction } => match direction {
                Direction::North => "Entering a wall to the north",
                Direction::East => "Entering a wall to the east",
                Direction::South => "Entering a wall to the south",
                Direction::West => "Entering a wall to the west",
            },
            Wall::Door { open: true, .. } => DOOR_OPEN_MESSAGE,
            Wall::Door { open: false, .. } => DOOR_CLOSED_MESSAGE,
        }
    }

    /// Report label: classified by kind, never by door state.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Wall::Plain { .. } => "Regular Wall",
            Wall::Door { .. } => "Door Wall",
        }
    }
}

/// A maze node with one side per direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    number: RoomId,
    sides: [WallId; 4],
}

impl Room {
    pub fn new(number: RoomId, sides: [WallId; 4]) -> Self {
        Self { number, sides }
    }

    pub fn room_no(&self) -> RoomId {
        self.number
    }

    pub fn side(&self, direction: Direction) -> WallId {
        self.sides[direction.index()]
    }

    pub fn set_side(&mut self, direction: Direction, wall: WallId) {
        self.sides[direction.index()] = wall;
    }

    /// Sides in canonical direction order.
    pub fn sides(&self) -> impl Iterator<Item = (Direction, WallId)> + '_ {
        Direction::ALL.into_iter().map(move |d| (d, self.side(d)))
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Wall::Plain { direction } => write!(f, "wall ({})", direction.lowercase()),
            Wall::Door { rooms, open } => write!(
                f,
                "door {}-{} ({})",
                rooms.0,
                rooms.1,
                if *open { "open" } else { "closed" }
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_wall_messages() {
        assert_eq!(
            Wall::plain(Direction::North).enter(),
            "Entering a wall to the north"
        );
        assert_eq!(
            Wall::plain(Direction::West).enter(),
            "Entering a wall to the west"
        );
    }

    #[test]
    fn test_door_messages_follow_open_flag() {
        let closed = Wall::door(1, 2);
        assert_eq!(closed.enter(), DOOR_CLOSED_MESSAGE);

        let open = Wall::Door {
            rooms: (1, 2),
            open: true,
        };
        assert_eq!(open.enter(), DOOR_OPEN_MESSAGE);
    }

    #[test]
    fn test_kind_label_ignores_door_state() {
        let open = Wall::Door {
            rooms: (1, 2),
            open: true,
        };
        assert_eq!(open.kind_label(), "Door Wall");
        assert_eq!(Wall::door(1, 2).kind_label(), "Door Wall");
        assert_eq!(Wall::plain(Direction::East).kind_label(), "Regular Wall");
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("North".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!("s".parse::<Direction>().unwrap(), Direction::South);
        assert!("up".parse::<Direction>().is_err());
    }

    #[test]
    fn test_room_set_side() {
        let mut room = Room::new(7, [WallId(0), WallId(1), WallId(2), WallId(3)]);
        room.set_side(Direction::South, WallId(9));

        assert_eq!(room.room_no(), 7);
        assert_eq!(room.side(Direction::South), WallId(9));
        assert_eq!(room.side(Direction::North), WallId(0));
    }
}
