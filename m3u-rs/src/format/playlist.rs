#[cfg(feature = "serde")]
use serde::Serialize;
use smol_str::SmolStr;

use crate::format::M3uChannel;

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct M3uPlaylist {
    /// The `#EXTM3U` line, present on well-formed playlists
    pub header: Option<SmolStr>,
    /// Channels in the order they appear in the source
    pub channels: Vec<M3uChannel>,
}
