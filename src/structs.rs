use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create config.toml file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Register a torrent by its hex info hash, then exit.
    #[arg(long, value_name = "INFO_HASH")]
    pub add_torrent: Option<String>,
    /// Release name used together with --add-torrent.
    #[arg(long, requires = "add_torrent", default_value = "")]
    pub release_name: String,

    /// Register a user by passkey, then exit.
    #[arg(long, value_name = "PASSKEY", requires = "user_id")]
    pub add_user: Option<String>,
    #[arg(long)]
    pub user_id: Option<u32>,

    /// Whitelist a peer id prefix, then exit.
    #[arg(long, value_name = "PREFIX", requires = "client_name")]
    pub add_client: Option<String>,
    #[arg(long)]
    pub client_name: Option<String>
}
