use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Parser, Debug)]
#[command(name = "jokes", bin_name = "jokes", version)]
#[command(about = "Serve jokes over HTTP from a single JSON file", long_about = None)]
pub struct Config {
    /// JSON file holding the jokes. Created on first use.
    #[arg(long, env = "DB_FILE")]
    pub db_file: PathBuf,

    /// Port to listen on (0 picks a free one)
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}
