// Configuration constants for the 24-point game
pub const CARD_COUNT: usize = 4;
pub const TARGET: i64 = 24;
pub const MAX_DEPTH: usize = CARD_COUNT - 1;
pub const PRUNE_THRESHOLD: f64 = 0.0;

// Heuristic weights; they sum to one so the blended score stays in [0, 1]
pub const DISTANCE_WEIGHT: f64 = 0.85;
pub const DENOMINATOR_WEIGHT: f64 = 0.15;
