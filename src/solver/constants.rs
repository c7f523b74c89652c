// Classic 24 game target
pub const DEFAULT_TARGET: f64 = 24.0;
