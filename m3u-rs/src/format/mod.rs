mod channel;
mod playlist;
pub use channel::*;
pub use playlist::*;

pub mod directives {
    pub const EXTM3U: &str = "#EXTM3U";
    pub const EXTINF: &str = "#EXTINF";

    /// Display name used when an `#EXTINF` line carries none
    pub const UNNAMED: &str = "Unnamed";
}
