use std::{collections::HashMap, mem::take, str::Lines};

use lazy_static::lazy_static;
use regex::Regex;
use smol_str::SmolStr;

use crate::format::{M3uChannel, M3uPlaylist, directives};

/// Line oriented m3u parser.
///
/// Malformed input never fails the parse, it only yields fewer channels.
pub struct Parser<'a> {
    lines: Lines<'a>,
    playlist: M3uPlaylist,
    channel: Option<M3uChannel>,
}

/// Parse a whole m3u document in one go
pub fn parse_playlist(input: impl AsRef<str>) -> M3uPlaylist {
    let mut parser = Parser::new(input.as_ref());
    parser.parse();
    parser.get_result()
}

lazy_static! {
    /// `#EXTINF:<duration> <attributes>[,<name>]`, the first comma starts the name
    static ref EXTINF_REGEX: Regex =
        Regex::new(r"^#EXTINF:\s*-?[0-9.]*\s*(.*?)(?:\s*,(.*))?$").expect("Regular expression error");
}

fn parse_attributes(input: impl AsRef<str>) -> HashMap<SmolStr, SmolStr> {
    input
        .as_ref()
        .split("\" ")
        .filter_map(|token| {
            let (key, value) = token.split_once('=')?;
            let key = key.trim();
            if key.is_empty() || value.is_empty() {
                return None;
            }

            Some((key.into(), value.trim_matches('"').into()))
        })
        .collect()
}

fn parse_channel_info(line: &str) -> M3uChannel {
    let mut channel = M3uChannel::new(line);

    let Some(captures) = EXTINF_REGEX.captures(line) else {
        return channel;
    };

    if let Some(attributes) = captures.get(1) {
        channel.attributes = parse_attributes(attributes.as_str());
    }

    if let Some(name) = captures.get(2).filter(|x| !x.as_str().is_empty()) {
        channel.name = name.as_str().into();
    }

    channel
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines(),
            playlist: M3uPlaylist::default(),
            channel: None,
        }
    }

    fn next_line(&mut self) -> Option<&'a str> {
        self.lines.by_ref().map(str::trim).find(|x| !x.is_empty())
    }

    pub fn parse(&mut self) {
        while let Some(line) = self.next_line() {
            if line.starts_with(directives::EXTM3U) {
                self.playlist.header = Some(line.into());
            } else if line.starts_with(directives::EXTINF) {
                // an unfinished channel is dropped here
                self.channel = Some(parse_channel_info(line));
            } else if line.starts_with('#') {
                // unknown directive
                continue;
            } else if let Some(mut channel) = self.channel.take() {
                channel.url = line.into();
                self.playlist.channels.push(channel);
            }
        }
    }

    pub fn get_result(&mut self) -> M3uPlaylist {
        self.channel = None;
        take(&mut self.playlist)
    }
}
