pub struct Config {
    pub app_title: &'static str,
    /// Wipe storage and reseed the default parties on every page load.
    pub reset_on_load: bool,
    pub vote_return_delay_ms: u32,
    pub log_level: &'static str,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            app_title: "Voter Registration",
            reset_on_load: true,
            vote_return_delay_ms: 2_000,
            log_level: "info",
        }
    }
}

pub const CONFIG: Config = Config::new();
