mod config;
pub use config::EpisodeConfig;

mod episode;
pub use episode::EpisodeSpec;
