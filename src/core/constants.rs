// Player defaults
pub const STARTING_HP: i32 = 30;
pub const STARTING_GOLD: u32 = 50;
pub const FULL_HP: i32 = 30;

// Rest (sleeping at the inn)
pub const REST_COST: u32 = 5;

// Transactions
pub const DEFAULT_PURCHASE_QUANTITY: u32 = 1;
pub const MAX_PURCHASE_QUANTITY: u32 = 99;

// Config
pub const CONFIG_DIR_NAME: &str = ".delve";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_LOG_FILTER: &str = "delve=warn";
