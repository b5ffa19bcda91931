use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;

use oppidum_game::solver::{DEFAULT_MAX_RESULTS, RECOMMENDED_COMBINATION_CEILING};

pub struct Config {
    /// Directory holding the JSON profile and collection stores.
    pub data_dir: PathBuf,
    pub default_max_results: usize,
    /// Searches estimated above this many combinations require explicit
    /// confirmation from the caller.
    pub combination_ceiling: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let data_dir = match env::var("OPPIDUM_DATA_DIR") {
            Ok(val) => PathBuf::from(val),
            Err(_) => PathBuf::from("data"),
        };

        let default_max_results = match env::var("OPPIDUM_MAX_RESULTS") {
            Ok(val) => val.parse::<usize>().unwrap_or(DEFAULT_MAX_RESULTS).max(1),
            Err(_) => DEFAULT_MAX_RESULTS,
        };

        let combination_ceiling = match env::var("OPPIDUM_COMBINATION_CEILING") {
            Ok(val) => val
                .parse::<u64>()
                .unwrap_or(RECOMMENDED_COMBINATION_CEILING),
            Err(_) => RECOMMENDED_COMBINATION_CEILING,
        };

        Self {
            data_dir,
            default_max_results,
            combination_ceiling,
        }
    }
}
