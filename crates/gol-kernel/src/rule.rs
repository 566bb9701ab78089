//! Conway's B3/S23 rule.

/// Next state of a single cell given its current state and live-neighbour
/// count.
///
/// | now   | live neighbours | next  |
/// |-------|-----------------|-------|
/// | alive | 0–1             | dead (underpopulation) |
/// | alive | 2–3             | alive (survival)       |
/// | alive | 4–8             | dead (overpopulation)  |
/// | dead  | 3               | alive (reproduction)   |
/// | dead  | anything else   | dead                   |
#[inline]
pub fn next_state(alive: bool, live_neighbours: u8) -> bool {
    matches!((alive, live_neighbours), (true, 2) | (true, 3) | (false, 3))
}
