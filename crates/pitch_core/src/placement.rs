//! Kick-off placement
//!
//! Every role gets a vertical lane at a fixed x on its team's half. Players
//! sharing a role are spread evenly down that lane in roster order, the
//! keeper sits on the goal line at mid-height, and substitutes line up along
//! the bottom edge starting from their own corner.
//!
//! Placement is a pure function of its inputs: no randomness is involved.

use crate::error::{PitchError, Result};
use crate::field::{Side, ROLE_SIZE};
use crate::geometry::Location;
use crate::player::{Player, Role};
use serde::{Deserialize, Serialize};

/// Horizontal gap between consecutive bench seats.
pub const BENCH_STEP: i32 = 80;
/// Right-side bench seats are shifted by this much from the right edge.
pub const BENCH_INSET: i32 = 40;

/// Top offset and vertical margin of each outfield lane.
struct Lane {
    top: i32,
    margin: i32,
}

const DEFENDER_LANE: Lane = Lane { top: 60, margin: 120 };
const MIDFIELDER_LANE: Lane = Lane { top: 80, margin: 160 };
const FORWARD_LANE: Lane = Lane { top: 180, margin: 360 };

/// y of the `index`-th of `total` players spread over a lane.
///
/// A lone player (`total <= 1`) sits at the lane's top offset.
fn lane_y(lane: &Lane, height: i32, index: usize, total: usize) -> i32 {
    if total <= 1 {
        return lane.top;
    }
    let span = height - lane.margin - ROLE_SIZE;
    lane.top + span * index as i32 / (total as i32 - 1)
}

/// Kick-off location for one player of `role`, being the `index`-th of `total` in that role.
pub fn lane_location(role: Role, width: i32, height: i32, side: Side, index: usize, total: usize) -> Location {
    let pick = |left_x: i32| if side.is_left() { left_x } else { Side::mirror_x(width, left_x) };

    match role {
        Role::Goalkeeper => Location::new(pick(0), height / 2 - ROLE_SIZE / 2),
        Role::Defender => Location::new(pick(width / 6), lane_y(&DEFENDER_LANE, height, index, total)),
        Role::Midfielder => {
            Location::new(pick(width / 3), lane_y(&MIDFIELDER_LANE, height, index, total))
        }
        // Forwards face each other across the centre line instead of mirroring.
        Role::Forward => {
            let x = if side.is_left() { width / 2 - 60 } else { width / 2 + 20 };
            Location::new(x, lane_y(&FORWARD_LANE, height, index, total))
        }
    }
}

/// Seat of the `seat`-th occupied bench slot.
pub fn bench_location(width: i32, height: i32, side: Side, seat: usize) -> Location {
    let offset = seat as i32 * BENCH_STEP;
    let x = if side.is_left() { offset } else { width - offset - BENCH_INSET };
    Location::new(x, height)
}

/// Number of players per role in `main`, indexed by `Role::index`.
fn role_counts(main: &[Player]) -> [usize; 4] {
    let mut counts = [0usize; 4];
    for player in main {
        counts[player.role().index()] += 1;
    }
    counts
}

/// Assign a kick-off location to every fielded player and every occupied bench slot.
///
/// Empty bench slots (`None`) are skipped without consuming a seat.
pub fn init_locations(
    width: i32,
    height: i32,
    side: Side,
    main: &mut [Player],
    bench: &mut [Option<Player>],
) {
    let counts = role_counts(main);
    let mut next = [0usize; 4];

    for player in main.iter_mut() {
        let slot = player.role().index();
        let location = lane_location(player.role(), width, height, side, next[slot], counts[slot]);
        next[slot] += 1;
        log::trace!("placed {} ({}) at {}", player.name(), player.role().abbreviation(), location);
        player.place_at(location);
    }

    for (seat, player) in bench.iter_mut().flatten().enumerate() {
        let location = bench_location(width, height, side, seat);
        log::trace!("benched {} at {}", player.name(), location);
        player.place_at(location);
    }
}

// ============================================================================
// Squad
// ============================================================================

/// Fielded players plus bench slots for one team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Squad {
    pub main: Vec<Player>,
    #[serde(default)]
    pub bench: Vec<Option<Player>>,
}

impl Squad {
    pub fn new(main: Vec<Player>, bench: Vec<Option<Player>>) -> Self {
        Self { main, bench }
    }

    pub fn goalkeeper_count(&self) -> usize {
        self.main.iter().filter(|p| p.role().is_goalkeeper()).count()
    }

    /// A fielded squad needs exactly one goalkeeper.
    pub fn validate(&self) -> Result<()> {
        match self.goalkeeper_count() {
            0 => Err(PitchError::MissingGoalkeeper),
            1 => Ok(()),
            count => Err(PitchError::MultipleGoalkeepers { count }),
        }
    }

    pub fn init_locations(&mut self, width: i32, height: i32, side: Side) {
        init_locations(width, height, side, &mut self.main, &mut self.bench);
    }

    pub fn goalkeeper(&self) -> Option<&Player> {
        self.main.iter().find(|p| p.role().is_goalkeeper())
    }

    pub fn bench_players(&self) -> impl Iterator<Item = &Player> {
        self.bench.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FIELD_HEIGHT, FIELD_WIDTH};
    use crate::name::Name;

    fn player(first: &str, number: i32, role: Role) -> Player {
        Player::new(Name::new(first, "Test").unwrap(), number, role, 25, 180).unwrap()
    }

    /// 1 GK, 4 DEF, 4 MID, 2 FWD with roles interleaved to exercise per-role indexing.
    fn four_four_two() -> Vec<Player> {
        vec![
            player("Dino", 2, Role::Defender),
            player("Gigi", 1, Role::Goalkeeper),
            player("Marco", 8, Role::Midfielder),
            player("Dani", 3, Role::Defender),
            player("Franco", 9, Role::Forward),
            player("Andrea", 6, Role::Midfielder),
            player("Paolo", 4, Role::Defender),
            player("Rino", 10, Role::Midfielder),
            player("Fabio", 5, Role::Defender),
            player("Pippo", 11, Role::Forward),
            player("Mauro", 7, Role::Midfielder),
        ]
    }

    fn located(main: &[Player], first: &str) -> Location {
        main.iter().find(|p| p.name().first() == first).and_then(Player::location).unwrap()
    }

    #[test]
    fn test_left_side_lanes() {
        let mut main = four_four_two();
        init_locations(FIELD_WIDTH, FIELD_HEIGHT, Side::Left, &mut main, &mut []);

        assert_eq!(located(&main, "Gigi"), Location::new(0, 280));
        assert_eq!(located(&main, "Dino"), Location::new(166, 60));
        assert_eq!(located(&main, "Dani"), Location::new(166, 206));
        assert_eq!(located(&main, "Paolo"), Location::new(166, 353));
        assert_eq!(located(&main, "Fabio"), Location::new(166, 500));
        assert_eq!(located(&main, "Marco"), Location::new(333, 80));
        assert_eq!(located(&main, "Andrea"), Location::new(333, 213));
        assert_eq!(located(&main, "Rino"), Location::new(333, 346));
        assert_eq!(located(&main, "Mauro"), Location::new(333, 480));
        assert_eq!(located(&main, "Franco"), Location::new(440, 180));
        assert_eq!(located(&main, "Pippo"), Location::new(440, 380));
    }

    #[test]
    fn test_right_side_lanes() {
        let mut main = four_four_two();
        init_locations(FIELD_WIDTH, FIELD_HEIGHT, Side::Right, &mut main, &mut []);

        assert_eq!(located(&main, "Gigi"), Location::new(960, 280));
        assert_eq!(located(&main, "Dino"), Location::new(794, 60));
        assert_eq!(located(&main, "Marco"), Location::new(627, 80));
        assert_eq!(located(&main, "Franco"), Location::new(520, 180));
    }

    #[test]
    fn test_side_symmetry() {
        let mut left = four_four_two();
        let mut right = four_four_two();
        init_locations(FIELD_WIDTH, FIELD_HEIGHT, Side::Left, &mut left, &mut []);
        init_locations(FIELD_WIDTH, FIELD_HEIGHT, Side::Right, &mut right, &mut []);

        for (l, r) in left.iter().zip(&right) {
            let (l_loc, r_loc) = (l.location().unwrap(), r.location().unwrap());
            assert_eq!(l_loc.y, r_loc.y);
            match l.role() {
                Role::Forward => {
                    assert_eq!(l_loc.x, FIELD_WIDTH / 2 - 60);
                    assert_eq!(r_loc.x, FIELD_WIDTH / 2 + 20);
                }
                _ => assert_eq!(r_loc.x, FIELD_WIDTH - l_loc.x - ROLE_SIZE),
            }
        }
    }

    #[test]
    fn test_placement_is_deterministic() {
        let mut first = four_four_two();
        let mut second = four_four_two();
        init_locations(FIELD_WIDTH, FIELD_HEIGHT, Side::Left, &mut first, &mut []);
        init_locations(FIELD_WIDTH, FIELD_HEIGHT, Side::Left, &mut second, &mut []);
        assert_eq!(first, second);

        // placing again over existing locations yields the same result
        init_locations(FIELD_WIDTH, FIELD_HEIGHT, Side::Left, &mut first, &mut []);
        assert_eq!(first, second);
    }

    #[test]
    fn test_bench_skips_empty_slots_left() {
        let mut bench = vec![
            Some(player("P", 12, Role::Goalkeeper)),
            None,
            Some(player("Q", 13, Role::Defender)),
            Some(player("R", 14, Role::Forward)),
        ];
        init_locations(FIELD_WIDTH, FIELD_HEIGHT, Side::Left, &mut [], &mut bench);

        let seats: Vec<_> = bench.iter().map(|slot| slot.as_ref().and_then(Player::location)).collect();
        assert_eq!(
            seats,
            vec![
                Some(Location::new(0, 600)),
                None,
                Some(Location::new(80, 600)),
                Some(Location::new(160, 600)),
            ]
        );
    }

    #[test]
    fn test_bench_right_side_steps_leftwards() {
        let mut bench = vec![None, Some(player("P", 12, Role::Goalkeeper)), Some(player("Q", 13, Role::Defender))];
        init_locations(FIELD_WIDTH, FIELD_HEIGHT, Side::Right, &mut [], &mut bench);

        let xs: Vec<i32> = bench.iter().flatten().map(|p| p.location().unwrap().x).collect();
        assert_eq!(xs, vec![960, 880]);
        assert!(bench.iter().flatten().all(|p| p.location().unwrap().y == FIELD_HEIGHT));
    }

    #[test]
    fn test_single_player_lane_uses_top_offset() {
        let mut main = vec![
            player("Gigi", 1, Role::Goalkeeper),
            player("Solo", 5, Role::Defender),
            player("Mid", 8, Role::Midfielder),
            player("Nine", 9, Role::Forward),
        ];
        init_locations(FIELD_WIDTH, FIELD_HEIGHT, Side::Left, &mut main, &mut []);

        assert_eq!(located(&main, "Solo"), Location::new(166, 60));
        assert_eq!(located(&main, "Mid"), Location::new(333, 80));
        assert_eq!(located(&main, "Nine"), Location::new(440, 180));
    }

    #[test]
    fn test_lane_location_respects_custom_field() {
        // 500 x 400 pitch: defender span = 400 - 120 - 40 = 240
        assert_eq!(lane_location(Role::Defender, 500, 400, Side::Left, 1, 3), Location::new(83, 180));
        assert_eq!(lane_location(Role::Goalkeeper, 500, 400, Side::Right, 0, 1), Location::new(460, 180));
    }

    #[test]
    fn test_squad_goalkeeper_validation() {
        let mut squad = Squad::new(four_four_two(), vec![]);
        assert!(squad.validate().is_ok());
        assert_eq!(squad.goalkeeper().unwrap().number(), 1);

        squad.main.retain(|p| !p.role().is_goalkeeper());
        assert_eq!(squad.validate(), Err(PitchError::MissingGoalkeeper));

        squad.main.push(player("A", 1, Role::Goalkeeper));
        squad.main.push(player("B", 12, Role::Goalkeeper));
        assert_eq!(squad.validate(), Err(PitchError::MultipleGoalkeepers { count: 2 }));
    }

    #[test]
    fn test_squad_init_places_everyone() {
        let mut squad = Squad::new(four_four_two(), vec![Some(player("Sub", 15, Role::Midfielder)), None]);
        squad.init_locations(FIELD_WIDTH, FIELD_HEIGHT, Side::Left);

        assert!(squad.main.iter().all(Player::is_placed));
        assert_eq!(squad.bench_players().count(), 1);
        assert!(squad.bench_players().all(Player::is_placed));
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn squad_of(defenders: usize, midfielders: usize, forwards: usize) -> Vec<Player> {
            let mut main = vec![player("Keeper", 1, Role::Goalkeeper)];
            let mut number = 2;
            for (role, n) in [(Role::Defender, defenders), (Role::Midfielder, midfielders), (Role::Forward, forwards)] {
                for _ in 0..n {
                    main.push(player("Outfield", number, role));
                    number += 1;
                }
            }
            main
        }

        proptest! {
            /// Property: mirrored squads agree on y and mirror x (forwards use their own pairing)
            #[test]
            fn prop_side_symmetry(d in 1usize..6, m in 1usize..6, f in 1usize..4) {
                let mut left = squad_of(d, m, f);
                let mut right = left.clone();
                init_locations(FIELD_WIDTH, FIELD_HEIGHT, Side::Left, &mut left, &mut []);
                init_locations(FIELD_WIDTH, FIELD_HEIGHT, Side::Right, &mut right, &mut []);
                for (l, r) in left.iter().zip(&right) {
                    let (a, b) = (l.location().unwrap(), r.location().unwrap());
                    prop_assert_eq!(a.y, b.y);
                    if l.role() != Role::Forward {
                        prop_assert_eq!(b.x, FIELD_WIDTH - a.x - ROLE_SIZE);
                    }
                }
            }

            /// Property: bench x values form an arithmetic progression with step ±80
            #[test]
            fn prop_bench_progression(slots in proptest::collection::vec(any::<bool>(), 0..12), left in any::<bool>()) {
                let mut bench: Vec<Option<Player>> = slots
                    .iter()
                    .enumerate()
                    .map(|(i, filled)| filled.then(|| player("Sub", i as i32 + 12, Role::Midfielder)))
                    .collect();
                let side = Side::from_left(left);
                init_locations(FIELD_WIDTH, FIELD_HEIGHT, side, &mut [], &mut bench);
                let xs: Vec<i32> = bench.iter().flatten().map(|p| p.location().unwrap().x).collect();
                for pair in xs.windows(2) {
                    prop_assert_eq!(pair[1] - pair[0], if left { BENCH_STEP } else { -BENCH_STEP });
                }
                prop_assert!(bench.iter().flatten().all(|p| p.location().unwrap().y == FIELD_HEIGHT));
            }
        }
    }
}
