//! Amphipod burrow organization: the minimum energy to sort every pod
//! into its home room.
//!
//! The searched states are whole occupancy records, not grid cells: an
//! 11-cell hallway plus four rooms of up to four slots. Pods of one
//! species are interchangeable, so occupancy alone is the state and
//! permutations of equal pods collapse to a single value.

use stride_paths::{Cost, Pathfinder, WeightedSpace};

use crate::input::InputError;

/// Hallway length; rooms open onto cells 2, 4, 6 and 8.
const HALL_LEN: usize = 11;
/// Hallway cells a pod may stop on (every cell not above a room).
const HALL_STOPS: [usize; 7] = [0, 1, 3, 5, 7, 9, 10];
/// Deepest supported room layout; part two unfolds to four rows.
const MAX_DEPTH: usize = 4;

/// An amphipod species. Discriminants double as home-room indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pod {
    Amber,
    Bronze,
    Copper,
    Desert,
}

impl Pod {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::Amber),
            'B' => Some(Self::Bronze),
            'C' => Some(Self::Copper),
            'D' => Some(Self::Desert),
            _ => None,
        }
    }

    /// Energy per step.
    fn step_cost(self) -> Cost {
        match self {
            Self::Amber => 1,
            Self::Bronze => 10,
            Self::Copper => 100,
            Self::Desert => 1000,
        }
    }

    /// Index of this pod's home room.
    fn home(self) -> usize {
        self as usize
    }
}

/// Hallway x coordinate of room `r`'s doorway.
fn room_x(r: usize) -> usize {
    2 + 2 * r
}

/// Occupancy of the hallway and the four rooms. Room slot 0 is the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Burrow {
    hall: [Option<Pod>; HALL_LEN],
    rooms: [[Option<Pod>; MAX_DEPTH]; 4],
}

impl Burrow {
    /// Parse the standard diagram; returns the burrow and its room depth.
    ///
    /// Room rows carry letters at columns 3, 5, 7 and 9; the hallway is
    /// assumed empty (as in every puzzle input).
    pub fn parse(text: &str) -> Result<(Self, usize), InputError> {
        let mut rooms = [[None; MAX_DEPTH]; 4];
        let mut depth = 0;
        for (li, line) in text.lines().enumerate().skip(2) {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() < 10 || chars[3] == '#' {
                break;
            }
            if depth == MAX_DEPTH {
                return Err(InputError::Parse {
                    line: li + 1,
                    msg: format!("more than {MAX_DEPTH} room rows"),
                });
            }
            for r in 0..4 {
                let c = chars[3 + 2 * r];
                let pod = Pod::from_char(c).ok_or_else(|| InputError::Parse {
                    line: li + 1,
                    msg: format!("expected an amphipod letter, got {c:?}"),
                })?;
                rooms[r][depth] = Some(pod);
            }
            depth += 1;
        }
        if depth == 0 {
            return Err(InputError::Parse {
                line: 3,
                msg: "no room rows found".into(),
            });
        }
        Ok((
            Self {
                hall: [None; HALL_LEN],
                rooms,
            },
            depth,
        ))
    }

    /// Insert the two folded rows between a two-row diagram's rows,
    /// producing the four-row variant of the puzzle.
    pub fn unfold(mut self) -> Self {
        use Pod::{Amber, Bronze, Copper, Desert};
        const FOLDED: [[Pod; 4]; 2] = [
            [Desert, Copper, Bronze, Amber],
            [Desert, Bronze, Amber, Copper],
        ];
        for (r, room) in self.rooms.iter_mut().enumerate() {
            room[3] = room[1];
            room[1] = Some(FOLDED[0][r]);
            room[2] = Some(FOLDED[1][r]);
        }
        self
    }
}

/// The burrow as a weighted space: states are occupancies, moves are
/// legal pod relocations, costs are energy.
pub struct BurrowSpace {
    depth: usize,
}

impl BurrowSpace {
    pub fn new(depth: usize) -> Self {
        assert!(
            (1..=MAX_DEPTH).contains(&depth),
            "room depth must be 1..={MAX_DEPTH}"
        );
        Self { depth }
    }

    /// Whether every room is filled with its own species.
    pub fn organized(&self, s: &Burrow) -> bool {
        s.hall.iter().all(Option::is_none)
            && (0..4)
                .all(|r| (0..self.depth).all(|d| s.rooms[r][d].is_some_and(|p| p.home() == r)))
    }

    /// Room `r` holds nothing but its own species (gaps allowed).
    fn room_clean(&self, s: &Burrow, r: usize) -> bool {
        (0..self.depth).all(|d| s.rooms[r][d].is_none_or(|p| p.home() == r))
    }

    /// Deepest free slot of room `r`, or `None` when it is full.
    fn entry_slot(&self, s: &Burrow, r: usize) -> Option<usize> {
        (0..self.depth).rev().find(|&d| s.rooms[r][d].is_none())
    }

    /// Topmost occupied slot of room `r`.
    fn top_slot(&self, s: &Burrow, r: usize) -> Option<usize> {
        (0..self.depth).find(|&d| s.rooms[r][d].is_some())
    }

    /// Every hallway cell after `from` up to and including `to` is free.
    fn hall_clear(&self, s: &Burrow, from: usize, to: usize) -> bool {
        let cells = if from < to { from + 1..=to } else { to..=from - 1 };
        cells.into_iter().all(|x| s.hall[x].is_none())
    }
}

impl WeightedSpace for BurrowSpace {
    type State = Burrow;

    fn moves(&self, s: &Burrow, buf: &mut Vec<(Burrow, Cost)>) {
        // Hallway pods head home once the room is clean and the way clear.
        for &x in &HALL_STOPS {
            let Some(pod) = s.hall[x] else { continue };
            let r = pod.home();
            if !self.room_clean(s, r) || !self.hall_clear(s, x, room_x(r)) {
                continue;
            }
            let Some(d) = self.entry_slot(s, r) else {
                continue;
            };
            let steps = room_x(r).abs_diff(x) + d + 1;
            let mut next = *s;
            next.hall[x] = None;
            next.rooms[r][d] = Some(pod);
            buf.push((next, steps as Cost * pod.step_cost()));
        }

        // Top pods leave any room that still hosts a stranger.
        for r in 0..4 {
            if self.room_clean(s, r) {
                continue;
            }
            let Some(d) = self.top_slot(s, r) else {
                continue;
            };
            let Some(pod) = s.rooms[r][d] else { continue };
            let from = room_x(r);
            let up = d + 1;

            // Straight to its home room when that is already possible.
            let home = pod.home();
            if home != r && self.room_clean(s, home) && self.hall_clear(s, from, room_x(home)) {
                if let Some(hd) = self.entry_slot(s, home) {
                    let steps = up + room_x(home).abs_diff(from) + hd + 1;
                    let mut next = *s;
                    next.rooms[r][d] = None;
                    next.rooms[home][hd] = Some(pod);
                    buf.push((next, steps as Cost * pod.step_cost()));
                }
            }

            // Otherwise park on any reachable hallway stop.
            for &x in &HALL_STOPS {
                if !self.hall_clear(s, from, x) {
                    continue;
                }
                let steps = up + from.abs_diff(x);
                let mut next = *s;
                next.rooms[r][d] = None;
                next.hall[x] = Some(pod);
                buf.push((next, steps as Cost * pod.step_cost()));
            }
        }
    }

    /// Per-pod lower bound: every displaced pod must at least walk out of
    /// its room, across to its doorway and one step down; a pod homed
    /// above a stranger must additionally step aside and back.
    fn estimate(&self, s: &Burrow) -> Cost {
        let mut total = 0;
        for &x in &HALL_STOPS {
            if let Some(pod) = s.hall[x] {
                let across = room_x(pod.home()).abs_diff(x);
                total += (across + 1) as Cost * pod.step_cost();
            }
        }
        for r in 0..4 {
            for d in 0..self.depth {
                let Some(pod) = s.rooms[r][d] else { continue };
                let home = pod.home();
                if home == r {
                    let stranger_below = (d + 1..self.depth)
                        .any(|b| s.rooms[r][b].is_some_and(|p| p.home() != r));
                    if stranger_below {
                        total += (d + 1 + 2 + 1) as Cost * pod.step_cost();
                    }
                } else {
                    let across = room_x(home).abs_diff(room_x(r));
                    total += (d + 1 + across + 1) as Cost * pod.step_cost();
                }
            }
        }
        total
    }
}

/// Minimum total energy to organize `start`, or `None` if no legal move
/// sequence gets there.
pub fn least_energy(start: &Burrow, depth: usize) -> Option<Cost> {
    let space = BurrowSpace::new(depth);
    let mut pf = Pathfinder::new();
    let path = pf.shortest_path(&space, *start, |s| space.organized(s))?;
    Some(path.total_cost)
}
