use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    specs::{FIELD_HEIGHT, FIELD_WIDTH, GOAL_MAX_Y, GOAL_MIN_Y, MAX_X_COORDINATE},
    Point, TeamSide,
};

pub const MIN_COLS: u32 = 4;
pub const MAX_COLS: u32 = 200;
pub const MIN_ROWS: u32 = 2;
pub const MAX_ROWS: u32 = 100;

#[derive(Debug, Error, PartialEq)]
pub enum MapperError {
    #[error("Number of cols must be in [{MIN_COLS}, {MAX_COLS}], got {0}")]
    InvalidCols(u32),
    #[error("Number of rows must be in [{MIN_ROWS}, {MAX_ROWS}], got {0}")]
    InvalidRows(u32),
    #[error("Region ({col}, {row}) is outside of a {cols}x{rows} grid")]
    OutOfBounds { col: u32, row: u32, cols: u32, rows: u32 },
}

/// A goal, identified by the side that defends it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Goal {
    /// The team defending this goal
    pub place: TeamSide,
    pub center: Point,
    /// The post with the greater y coordinate
    pub top_pole: Point,
    /// The post with the smaller y coordinate
    pub bottom_pole: Point,
}

impl Goal {
    /// Returns the goal defended by `side`.
    pub fn defended_by(side: TeamSide) -> Self {
        let x = match side {
            TeamSide::Home => 0.0,
            TeamSide::Away => MAX_X_COORDINATE,
        };
        Self {
            place: side,
            center: Point::new(x, FIELD_HEIGHT / 2.0),
            top_pole: Point::new(x, GOAL_MAX_Y),
            bottom_pole: Point::new(x, GOAL_MIN_Y),
        }
    }
}

/// A cell of the mapper grid.
///
/// Columns and rows are normalized to the attack direction of the mapper's side:
/// column `0` is always next to the team's own goal, and higher rows are always to
/// the team's left. A region therefore means the same thing to both teams, while
/// the underlying [`Point`]s differ.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    col: u32,
    row: u32,
    side: TeamSide,
    cols: u32,
    rows: u32,
}

impl Region {
    pub fn col(&self) -> u32 {
        self.col
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn side(&self) -> TeamSide {
        self.side
    }

    /// The adjacent region towards the attacked goal. Regions in the last column
    /// return themselves.
    pub fn front(&self) -> Region {
        self.with(self.col.saturating_add(1).min(self.cols - 1), self.row)
    }

    /// The adjacent region towards the own goal.
    pub fn back(&self) -> Region {
        self.with(self.col.saturating_sub(1), self.row)
    }

    pub fn left(&self) -> Region {
        self.with(self.col, self.row.saturating_add(1).min(self.rows - 1))
    }

    pub fn right(&self) -> Region {
        self.with(self.col, self.row.saturating_sub(1))
    }

    /// The absolute point at the center of the region.
    pub fn center(&self) -> Point {
        let width = FIELD_WIDTH / self.cols as f64;
        let height = FIELD_HEIGHT / self.rows as f64;
        let (cx, cy) = match self.side {
            TeamSide::Home => (self.col, self.row),
            TeamSide::Away => (self.cols - 1 - self.col, self.rows - 1 - self.row),
        };
        Point::new(
            cx as f64 * width + width / 2.0,
            cy as f64 * height + height / 2.0,
        )
    }

    fn with(&self, col: u32, row: u32) -> Region {
        Region { col, row, ..*self }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Splits the field into a `cols x rows` grid as seen from one team.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct Mapper {
    cols: u32,
    rows: u32,
    side: TeamSide,
}

impl Mapper {
    pub fn new(cols: u32, rows: u32, side: TeamSide) -> Result<Self, MapperError> {
        if !(MIN_COLS..=MAX_COLS).contains(&cols) {
            return Err(MapperError::InvalidCols(cols));
        }
        if !(MIN_ROWS..=MAX_ROWS).contains(&rows) {
            return Err(MapperError::InvalidRows(rows));
        }
        Ok(Self { cols, rows, side })
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn side(&self) -> TeamSide {
        self.side
    }

    pub fn region_width(&self) -> f64 {
        FIELD_WIDTH / self.cols as f64
    }

    pub fn region_height(&self) -> f64 {
        FIELD_HEIGHT / self.rows as f64
    }

    pub fn get_region(&self, col: u32, row: u32) -> Result<Region, MapperError> {
        if col >= self.cols || row >= self.rows {
            return Err(MapperError::OutOfBounds {
                col,
                row,
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(self.region(col, row))
    }

    /// Returns the region containing `point`. Points outside of the field are
    /// clamped to the closest region.
    pub fn get_region_from_point(&self, point: &Point) -> Region {
        let cx = cell_index(point.x, self.region_width(), self.cols);
        let cy = cell_index(point.y, self.region_height(), self.rows);
        match self.side {
            TeamSide::Home => self.region(cx, cy),
            TeamSide::Away => self.region(self.cols - 1 - cx, self.rows - 1 - cy),
        }
    }

    /// The goal this mapper's team attacks.
    pub fn attack_goal(&self) -> Goal {
        Goal::defended_by(self.side.opposite())
    }

    /// The goal this mapper's team defends.
    pub fn defense_goal(&self) -> Goal {
        Goal::defended_by(self.side)
    }

    fn region(&self, col: u32, row: u32) -> Region {
        Region {
            col,
            row,
            side: self.side,
            cols: self.cols,
            rows: self.rows,
        }
    }
}

fn cell_index(coord: f64, cell_size: f64, count: u32) -> u32 {
    let idx = (coord / cell_size).floor();
    if idx.is_nan() || idx < 0.0 {
        0
    } else {
        (idx as u32).min(count - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Mapper::new(3, 6, TeamSide::Home),
            Err(MapperError::InvalidCols(3))
        );
        assert_eq!(
            Mapper::new(10, 101, TeamSide::Home),
            Err(MapperError::InvalidRows(101))
        );
        let mapper = Mapper::new(10, 6, TeamSide::Home).unwrap();
        assert!(matches!(
            mapper.get_region(10, 0),
            Err(MapperError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_region_from_point_home() {
        let mapper = Mapper::new(10, 5, TeamSide::Home).unwrap();
        let region = mapper.get_region_from_point(&Point::new(500.0, 500.0));
        assert_eq!((region.col(), region.row()), (0, 0));

        let region = mapper.get_region_from_point(&Point::new(4100.0, 9999.0));
        assert_eq!((region.col(), region.row()), (2, 4));

        // The far corner belongs to the last region
        let region = mapper.get_region_from_point(&Point::new(FIELD_WIDTH, FIELD_HEIGHT));
        assert_eq!((region.col(), region.row()), (9, 4));

        let region = mapper.get_region_from_point(&Point::new(-10.0, -10.0));
        assert_eq!((region.col(), region.row()), (0, 0));
    }

    #[test]
    fn test_region_from_point_away_is_mirrored() {
        let mapper = Mapper::new(10, 5, TeamSide::Away).unwrap();
        let region = mapper.get_region_from_point(&Point::new(500.0, 500.0));
        assert_eq!((region.col(), region.row()), (9, 4));

        let region = mapper.get_region_from_point(&Point::new(19500.0, 9500.0));
        assert_eq!((region.col(), region.row()), (0, 0));
    }

    #[test]
    fn test_center_round_trip() {
        for side in [TeamSide::Home, TeamSide::Away] {
            let mapper = Mapper::new(10, 6, side).unwrap();
            let region = mapper.get_region(3, 4).unwrap();
            assert_eq!(mapper.get_region_from_point(&region.center()), region);
        }

        let home = Mapper::new(10, 5, TeamSide::Home).unwrap();
        let center = home.get_region(0, 0).unwrap().center();
        assert_relative_eq!(center.x, 1000.0);
        assert_relative_eq!(center.y, 1000.0);

        let away = Mapper::new(10, 5, TeamSide::Away).unwrap();
        let center = away.get_region(0, 0).unwrap().center();
        assert_relative_eq!(center.x, 19000.0);
        assert_relative_eq!(center.y, 9000.0);
    }

    #[test]
    fn test_neighbours_are_clamped() {
        let mapper = Mapper::new(10, 6, TeamSide::Home).unwrap();
        let region = mapper.get_region(4, 2).unwrap();
        assert_eq!(region.front().col(), 5);
        assert_eq!(region.back().col(), 3);
        assert_eq!(region.left().row(), 3);
        assert_eq!(region.right().row(), 1);

        let corner = mapper.get_region(9, 5).unwrap();
        assert_eq!(corner.front(), corner);
        assert_eq!(corner.left(), corner);
        let corner = mapper.get_region(0, 0).unwrap();
        assert_eq!(corner.back(), corner);
        assert_eq!(corner.right(), corner);
    }

    #[test]
    fn test_front_points_to_the_attacked_goal() {
        let away = Mapper::new(10, 6, TeamSide::Away).unwrap();
        let region = away.get_region_from_point(&Point::new(10500.0, 5000.0));
        assert!(region.front().center().x < region.center().x);

        let home = Mapper::new(10, 6, TeamSide::Home).unwrap();
        let region = home.get_region_from_point(&Point::new(10500.0, 5000.0));
        assert!(region.front().center().x > region.center().x);
    }

    #[test]
    fn test_goals() {
        let mapper = Mapper::new(10, 6, TeamSide::Home).unwrap();
        let attack = mapper.attack_goal();
        assert_eq!(attack.place, TeamSide::Away);
        assert_eq!(attack.center, Point::new(MAX_X_COORDINATE, 5000.0));
        assert_eq!(attack.top_pole.y, GOAL_MAX_Y);
        assert_eq!(attack.bottom_pole.y, GOAL_MIN_Y);
        assert_eq!(mapper.defense_goal().center, Point::new(0.0, 5000.0));
    }
}
