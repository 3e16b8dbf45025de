mod client_kind;
mod playlist_parse;
pub use client_kind::*;
pub use playlist_parse::*;
