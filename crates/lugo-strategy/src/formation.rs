use anyhow::{anyhow, Result};
use lugo_core::{Mapper, PlayerNumber, Point, Region, SnapshotInspector};
use serde::{Deserialize, Serialize};

/// Computes where a player should stand when it is not chasing the ball.
pub trait ExpectedPosition {
    fn expected_position(
        &self,
        inspector: &SnapshotInspector<'_>,
        mapper: &Mapper,
        number: PlayerNumber,
    ) -> Result<Point>;
}

/// How far up the field the team is, judged by the ball.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TeamPhase {
    /// Ball in our third of the field
    Defensive,
    /// Ball in the middle third
    Normal,
    /// Ball in the opponent's third
    Offensive,
}

impl TeamPhase {
    pub const ALL: [TeamPhase; 3] = [TeamPhase::Defensive, TeamPhase::Normal, TeamPhase::Offensive];

    pub fn from_ball_region(ball_region: &Region, cols: u32) -> Self {
        let field_third = cols as f64 / 3.0;
        let col = ball_region.col() as f64;
        if col < field_third {
            TeamPhase::Defensive
        } else if col < field_third * 2.0 {
            TeamPhase::Normal
        } else {
            TeamPhase::Offensive
        }
    }
}

impl std::fmt::Display for TeamPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamPhase::Defensive => write!(f, "defensive"),
            TeamPhase::Normal => write!(f, "normal"),
            TeamPhase::Offensive => write!(f, "offensive"),
        }
    }
}

/// The mapper cell a player occupies in one phase.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormationSlot {
    pub number: u32,
    pub col: u32,
    pub row: u32,
}

const fn slot(number: u32, col: u32, row: u32) -> FormationSlot {
    FormationSlot { number, col, row }
}

/// A tactic table assigning each field player a region per [`TeamPhase`].
///
/// Slots are expressed in normalized mapper coordinates, so the same formation works
/// for both sides of the field. The goalkeeper has no slot.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Formation {
    pub defensive: Vec<FormationSlot>,
    pub normal: Vec<FormationSlot>,
    pub offensive: Vec<FormationSlot>,
}

impl Formation {
    pub fn slots(&self, phase: TeamPhase) -> &[FormationSlot] {
        match phase {
            TeamPhase::Defensive => &self.defensive,
            TeamPhase::Normal => &self.normal,
            TeamPhase::Offensive => &self.offensive,
        }
    }

    pub fn slot(&self, phase: TeamPhase, number: PlayerNumber) -> Option<&FormationSlot> {
        self.slots(phase)
            .iter()
            .find(|s| s.number == number.as_u32())
    }

    /// The region assigned to `number` in `phase`.
    pub fn region_for(&self, mapper: &Mapper, phase: TeamPhase, number: PlayerNumber) -> Result<Region> {
        let slot = self
            .slot(phase, number)
            .ok_or_else(|| anyhow!("No {} formation slot for player {}", phase, number))?;
        Ok(mapper.get_region(slot.col, slot.row)?)
    }

    /// Checks that every slot fits on the mapper grid.
    pub fn validate(&self, mapper: &Mapper) -> Result<()> {
        for phase in TeamPhase::ALL {
            for slot in self.slots(phase) {
                mapper.get_region(slot.col, slot.row).map_err(|err| {
                    anyhow!("Invalid {} slot for player {}: {}", phase, slot.number, err)
                })?;
            }
        }
        Ok(())
    }
}

impl Default for Formation {
    /// A 4-4-2 laid out on a 10x6 grid.
    fn default() -> Self {
        Self {
            defensive: vec![
                slot(2, 1, 1),
                slot(3, 2, 2),
                slot(4, 2, 3),
                slot(5, 1, 4),
                slot(6, 3, 1),
                slot(7, 3, 2),
                slot(8, 3, 3),
                slot(9, 3, 4),
                slot(10, 4, 3),
                slot(11, 4, 2),
            ],
            normal: vec![
                slot(2, 2, 1),
                slot(3, 4, 2),
                slot(4, 4, 3),
                slot(5, 2, 4),
                slot(6, 5, 1),
                slot(7, 8, 2),
                slot(8, 8, 3),
                slot(9, 5, 4),
                slot(10, 9, 3),
                slot(11, 9, 2),
            ],
            offensive: vec![
                slot(2, 3, 1),
                slot(3, 5, 2),
                slot(4, 5, 3),
                slot(5, 3, 4),
                slot(6, 7, 1),
                slot(7, 8, 2),
                slot(8, 8, 3),
                slot(9, 7, 4),
                slot(10, 9, 3),
                slot(11, 9, 2),
            ],
        }
    }
}

impl ExpectedPosition for Formation {
    fn expected_position(
        &self,
        inspector: &SnapshotInspector<'_>,
        mapper: &Mapper,
        number: PlayerNumber,
    ) -> Result<Point> {
        let ball_region = mapper.get_region_from_point(&inspector.ball().position);
        let phase = TeamPhase::from_ball_region(&ball_region, mapper.cols());
        let region = self.region_for(mapper, phase, number)?;
        Ok(region.center())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lugo_core::TeamSide;

    #[test]
    fn test_phase_from_ball_region() {
        let mapper = Mapper::new(10, 6, TeamSide::Home).unwrap();
        let phase_at = |x: f64| {
            let region = mapper.get_region_from_point(&Point::new(x, 5000.0));
            TeamPhase::from_ball_region(&region, mapper.cols())
        };
        assert_eq!(phase_at(100.0), TeamPhase::Defensive);
        // Column 3 is still below 10 / 3
        assert_eq!(phase_at(7000.0), TeamPhase::Defensive);
        assert_eq!(phase_at(8000.0), TeamPhase::Normal);
        assert_eq!(phase_at(13000.0), TeamPhase::Normal);
        assert_eq!(phase_at(14000.0), TeamPhase::Offensive);
        assert_eq!(phase_at(19999.0), TeamPhase::Offensive);
    }

    #[test]
    fn test_phase_is_relative_to_the_team() {
        let mapper = Mapper::new(10, 6, TeamSide::Away).unwrap();
        let region = mapper.get_region_from_point(&Point::new(100.0, 5000.0));
        assert_eq!(
            TeamPhase::from_ball_region(&region, mapper.cols()),
            TeamPhase::Offensive
        );
    }

    #[test]
    fn test_default_formation_covers_field_players() {
        let formation = Formation::default();
        let mapper = Mapper::new(10, 6, TeamSide::Home).unwrap();
        formation.validate(&mapper).unwrap();

        for phase in TeamPhase::ALL {
            assert!(formation.slot(phase, PlayerNumber::GOALKEEPER).is_none());
            for number in 2..=11 {
                let number = PlayerNumber::new(number).unwrap();
                assert!(formation.region_for(&mapper, phase, number).is_ok());
            }
        }
    }

    #[test]
    fn test_validate_rejects_small_grids() {
        let mapper = Mapper::new(6, 6, TeamSide::Home).unwrap();
        assert!(Formation::default().validate(&mapper).is_err());
    }

    #[test]
    fn test_missing_slot() {
        let mapper = Mapper::new(10, 6, TeamSide::Home).unwrap();
        let err = Formation::default()
            .region_for(&mapper, TeamPhase::Normal, PlayerNumber::GOALKEEPER)
            .unwrap_err();
        assert!(err.to_string().contains("player 1"));
    }
}
