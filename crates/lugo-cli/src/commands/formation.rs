use std::{io::Write, path::Path};

use anyhow::Result;
use lugo_core::{Mapper, TeamSide};
use lugo_strategy::{Formation, TeamPhase};

use super::load_settings;

pub fn print_formation(settings_file: &Path, side: TeamSide) -> Result<()> {
    let settings = load_settings(settings_file)?;
    let mapper = settings.mapper(side)?;
    let stdout = std::io::stdout();
    write_formation(&mut stdout.lock(), &settings.formation, &mapper)
}

/// One line per slot: phase, player, region and the absolute center of the region.
fn write_formation(out: &mut impl Write, formation: &Formation, mapper: &Mapper) -> Result<()> {
    writeln!(
        out,
        "{} formation on a {}x{} grid",
        mapper.side(),
        mapper.cols(),
        mapper.rows()
    )?;
    for phase in TeamPhase::ALL {
        for slot in formation.slots(phase) {
            let center = mapper.get_region(slot.col, slot.row)?.center();
            writeln!(
                out,
                "{:<10} {:>2}  ({}, {})  {:>7.1} {:>7.1}",
                phase.to_string(),
                slot.number,
                slot.col,
                slot.row,
                center.x,
                center.y
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_away_formation_is_mirrored() {
        let formation = Formation::default();
        let mapper = Mapper::new(10, 6, TeamSide::Away).unwrap();
        let mut out = Vec::new();
        write_formation(&mut out, &formation, &mapper).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "away formation on a 10x6 grid");
        assert_eq!(lines.len(), 1 + 3 * 10);
        // Player 2 defends from region (1, 1), at the far end of the field for Away
        assert!(lines[1].starts_with("defensive"));
        assert!(lines[1].ends_with("17000.0  7500.0"), "{}", lines[1]);
    }
}
