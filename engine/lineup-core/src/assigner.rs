use crate::types::{Position, RosterPlayer};
use std::collections::HashSet;
use tracing::debug;

// Roster spot counts for the league format.
pub const MAX_CENTERS: usize = 3;
pub const MAX_LEFT_WINGS: usize = 2;
pub const MAX_RIGHT_WINGS: usize = 2;
pub const MAX_DEFENSEMEN: usize = 3;
pub const MAX_UTILS: usize = 1;

/// One of the six output buckets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    C,
    LW,
    RW,
    D,
    Util,
    BN,
}

impl Slot {
    /// The position code the roster-update API expects for this bucket.
    pub fn code(self) -> &'static str {
        match self {
            Slot::C => "C",
            Slot::LW => "LW",
            Slot::RW => "RW",
            Slot::D => "D",
            Slot::Util => "Util",
            Slot::BN => "BN",
        }
    }

    pub const ALL: [Slot; 6] = [Slot::C, Slot::LW, Slot::RW, Slot::D, Slot::Util, Slot::BN];
}

/// The final six-way partition of the filtered input sequence.
///
/// Every input player lands in exactly one bucket, and within a bucket
/// players keep their input (priority) order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptimizedLineup {
    pub c: Vec<RosterPlayer>,
    pub lw: Vec<RosterPlayer>,
    pub rw: Vec<RosterPlayer>,
    pub d: Vec<RosterPlayer>,
    pub util: Vec<RosterPlayer>,
    pub bn: Vec<RosterPlayer>,
}

impl OptimizedLineup {
    pub fn bucket(&self, slot: Slot) -> &[RosterPlayer] {
        match slot {
            Slot::C => &self.c,
            Slot::LW => &self.lw,
            Slot::RW => &self.rw,
            Slot::D => &self.d,
            Slot::Util => &self.util,
            Slot::BN => &self.bn,
        }
    }

    /// Every `(slot, player)` pair, bucket by bucket. This is the shape the
    /// roster-update client serializes.
    pub fn assignments(&self) -> impl Iterator<Item = (Slot, &RosterPlayer)> {
        Slot::ALL.iter().flat_map(move |&slot| self.bucket(slot).iter().map(move |p| (slot, p)))
    }

    pub fn player_count(&self) -> usize {
        Slot::ALL.iter().map(|&s| self.bucket(s).len()).sum()
    }

    fn push(&mut self, slot: Slot, player: RosterPlayer) {
        debug!(player = %player.full_name, slot = slot.code(), "assigned");
        match slot {
            Slot::C => self.c.push(player),
            Slot::LW => self.lw.push(player),
            Slot::RW => self.rw.push(player),
            Slot::D => self.d.push(player),
            Slot::Util => self.util.push(player),
            Slot::BN => self.bn.push(player),
        }
    }
}

/// Greedily partition a priority-sorted player sequence into slots.
///
/// Single forward pass, no backtracking: each player takes the first of their
/// eligible positions (in source order) that still has capacity, then Util,
/// then bench. Earlier assignments are never revisited to improve later ones;
/// the engine optimizes for priority order, not global slot utility. Total
/// for any input, including empty sequences and players with no eligible
/// positions.
pub fn optimize_lineup(sorted_players: Vec<RosterPlayer>) -> OptimizedLineup {
    let mut lineup = OptimizedLineup::default();

    let mut center_count = 0;
    let mut left_wing_count = 0;
    let mut right_wing_count = 0;
    let mut defensemen_count = 0;
    let mut util_count = 0;

    // Guards against duplicate entries in the input sequence.
    let mut assigned: HashSet<String> = HashSet::new();

    for player in sorted_players {
        if assigned.contains(&player.full_name) {
            continue;
        }
        assigned.insert(player.full_name.clone());

        let mut primary = None;
        for &position in &player.eligible_positions {
            primary = match position {
                Position::C if center_count < MAX_CENTERS => {
                    center_count += 1;
                    Some(Slot::C)
                }
                Position::LW if left_wing_count < MAX_LEFT_WINGS => {
                    left_wing_count += 1;
                    Some(Slot::LW)
                }
                Position::RW if right_wing_count < MAX_RIGHT_WINGS => {
                    right_wing_count += 1;
                    Some(Slot::RW)
                }
                Position::D if defensemen_count < MAX_DEFENSEMEN => {
                    defensemen_count += 1;
                    Some(Slot::D)
                }
                _ => None,
            };
            if primary.is_some() {
                break;
            }
        }

        match primary {
            Some(slot) => lineup.push(slot, player),
            None if util_count < MAX_UTILS => {
                util_count += 1;
                lineup.push(Slot::Util, player);
            }
            None => lineup.push(Slot::BN, player),
        }
    }

    lineup
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, positions: &[Position]) -> RosterPlayer {
        RosterPlayer {
            player_key: format!("419.p.{}", name.to_lowercase().replace(' ', "")),
            full_name: name.to_string(),
            team_abbr: "COL".to_string(),
            status: String::new(),
            eligible_positions: positions.to_vec(),
        }
    }

    fn names(bucket: &[RosterPlayer]) -> Vec<&str> {
        bucket.iter().map(|p| p.full_name.as_str()).collect()
    }

    #[test]
    fn center_overflow_spills_to_util() {
        // Scenario A: C fills to capacity, fourth center lands in Util.
        let lineup = optimize_lineup(vec![
            player("P1", &[Position::C, Position::LW]),
            player("P2", &[Position::C]),
            player("P3", &[Position::C]),
            player("P4", &[Position::C]),
        ]);
        assert_eq!(names(&lineup.c), ["P1", "P2", "P3"]);
        assert_eq!(names(&lineup.util), ["P4"]);
        assert!(lineup.bn.is_empty());
    }

    #[test]
    fn util_overflow_spills_to_bench() {
        // Scenario B: with C and Util both full, a fifth center benches.
        let lineup = optimize_lineup(vec![
            player("P1", &[Position::C, Position::LW]),
            player("P2", &[Position::C]),
            player("P3", &[Position::C]),
            player("P4", &[Position::C]),
            player("P5", &[Position::C]),
        ]);
        assert_eq!(names(&lineup.util), ["P4"]);
        assert_eq!(names(&lineup.bn), ["P5"]);
    }

    #[test]
    fn empty_input_yields_empty_lineup() {
        // Scenario C.
        let lineup = optimize_lineup(Vec::new());
        for slot in Slot::ALL {
            assert!(lineup.bucket(slot).is_empty(), "{} not empty", slot.code());
        }
    }

    #[test]
    fn first_eligible_position_with_capacity_wins() {
        // LW is listed first, so P2 takes LW even though C is still open.
        let lineup = optimize_lineup(vec![
            player("P1", &[Position::C]),
            player("P2", &[Position::LW, Position::C]),
        ]);
        assert_eq!(names(&lineup.c), ["P1"]);
        assert_eq!(names(&lineup.lw), ["P2"]);
    }

    #[test]
    fn full_primary_falls_through_to_next_eligible() {
        let lineup = optimize_lineup(vec![
            player("L1", &[Position::LW]),
            player("L2", &[Position::LW]),
            player("L3", &[Position::LW, Position::RW]),
        ]);
        assert_eq!(names(&lineup.lw), ["L1", "L2"]);
        assert_eq!(names(&lineup.rw), ["L3"]);
    }

    #[test]
    fn goalie_only_eligibility_goes_to_util_then_bench() {
        // G is not an assigner position; a goalie competes only for Util/BN.
        let lineup = optimize_lineup(vec![
            player("G1", &[Position::G]),
            player("G2", &[Position::G]),
        ]);
        assert_eq!(names(&lineup.util), ["G1"]);
        assert_eq!(names(&lineup.bn), ["G2"]);
    }

    #[test]
    fn no_eligible_positions_goes_to_util_then_bench() {
        let lineup = optimize_lineup(vec![player("X1", &[]), player("X2", &[])]);
        assert_eq!(names(&lineup.util), ["X1"]);
        assert_eq!(names(&lineup.bn), ["X2"]);
    }

    #[test]
    fn duplicate_names_are_assigned_once() {
        let lineup =
            optimize_lineup(vec![player("Dup", &[Position::C]), player("Dup", &[Position::C])]);
        assert_eq!(lineup.player_count(), 1);
        assert_eq!(names(&lineup.c), ["Dup"]);
    }

    #[test]
    fn partition_and_capacity_hold_for_a_full_roster() {
        let input = vec![
            player("C1", &[Position::C]),
            player("W1", &[Position::LW, Position::RW]),
            player("C2", &[Position::C, Position::RW]),
            player("D1", &[Position::D]),
            player("W2", &[Position::RW]),
            player("D2", &[Position::D]),
            player("C3", &[Position::C]),
            player("W3", &[Position::LW]),
            player("D3", &[Position::D]),
            player("C4", &[Position::C]),
            player("D4", &[Position::D]),
            player("W4", &[Position::LW]),
            player("G1", &[Position::G]),
        ];
        let expected: Vec<&str> = input.iter().map(|p| p.full_name.as_str()).collect();
        let lineup = optimize_lineup(input.clone());

        // Capacity property.
        assert!(lineup.c.len() <= MAX_CENTERS);
        assert!(lineup.lw.len() <= MAX_LEFT_WINGS);
        assert!(lineup.rw.len() <= MAX_RIGHT_WINGS);
        assert!(lineup.d.len() <= MAX_DEFENSEMEN);
        assert!(lineup.util.len() <= MAX_UTILS);

        // Partition property: no player lost, none duplicated.
        assert_eq!(lineup.player_count(), expected.len());
        let mut seen: Vec<&str> = lineup.assignments().map(|(_, p)| p.full_name.as_str()).collect();
        seen.sort_unstable();
        let mut want = expected.clone();
        want.sort_unstable();
        assert_eq!(seen, want);

        // Order preservation: each bucket is a subsequence of the input.
        for slot in Slot::ALL {
            let bucket = names(lineup.bucket(slot));
            let mut cursor = 0;
            for name in &bucket {
                let pos = expected[cursor..]
                    .iter()
                    .position(|n| n == name)
                    .unwrap_or_else(|| panic!("{name} out of order in {}", slot.code()));
                cursor += pos + 1;
            }
        }

        // Determinism: identical input, identical partition.
        assert_eq!(lineup, optimize_lineup(input));
    }
}
