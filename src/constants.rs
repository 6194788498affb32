// Playfield dimensions
pub const SCREEN_WIDTH: usize = 80;
pub const SCREEN_HEIGHT: usize = 20;

// Bird physics (rows per tick)
pub const GRAVITY: f64 = 0.1;
pub const IMPULSE: f64 = -0.3;

// Bird placement
pub const BIRD_X: i32 = 10;
pub const BIRD_START_Y: f64 = (SCREEN_HEIGHT / 2) as f64;
pub const GLYPH_ROWS: usize = 4;
pub const GLYPH_COLS: usize = 6;

// Obstacles
pub const OBSTACLE_COUNT: usize = 3;
pub const OBSTACLE_WIDTH: i32 = 4;
pub const GAP_SPAN: i32 = 8;
pub const OBSTACLE_SPACING: i32 = 25;
pub const RESPAWN_OFFSET: i32 = 10;
/// Obstacles shift one column every this many simulation ticks.
pub const SCROLL_EVERY_TICKS: u32 = 2;

// Evolution
pub const SCORE_PER_LEVEL: u32 = 2;
pub const MAX_EVOLUTION_LEVEL: u8 = 12;

// Frame timing (microseconds)
pub const BASE_TICK_DELAY_US: u64 = 33_333;
pub const MIN_TICK_DELAY_US: u64 = 16_666;
pub const TICK_DELAY_STEP_US: u64 = 1_000;

// Glyph characters
pub const BODY_CHAR: char = '#';
pub const BEAK_CHAR: char = '>';
pub const OBSTACLE_CHAR: char = '|';
pub const BORDER_HORIZONTAL: char = '-';
pub const BORDER_VERTICAL: char = '|';
