use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::Serialize;
use smol_str::SmolStr;

use crate::format::directives;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct M3uChannel {
    /// The `#EXTINF` line this channel was built from, verbatim
    pub extinf: SmolStr,
    pub attributes: HashMap<SmolStr, SmolStr>,
    pub name: SmolStr,
    pub url: SmolStr,
}

impl M3uChannel {
    pub fn new(extinf: impl Into<SmolStr>) -> Self {
        Self {
            extinf: extinf.into(),
            attributes: HashMap::new(),
            name: SmolStr::new_static(directives::UNNAMED),
            url: SmolStr::default(),
        }
    }
}
