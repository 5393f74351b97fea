//! Manifest line parsing.

use crate::voice::VoiceDescriptor;

/// Delimiter between the voice name field and the checksum field.
const FIELD_DELIM: char = '\t';

/// Parse one manifest line into a descriptor.
///
/// Returns `None` for malformed lines: not exactly two tab-separated fields,
/// or a name that is not exactly three dash-separated tokens.
pub fn parse_line(line: &str) -> Option<VoiceDescriptor> {
    let fields: Vec<&str> = line.split(FIELD_DELIM).collect();
    if fields.len() != 2 {
        return None;
    }
    let tokens: Vec<&str> = fields[0].split('-').collect();
    if tokens.len() != 3 {
        return None;
    }
    Some(VoiceDescriptor {
        language: tokens[0].to_string(),
        region: tokens[1].to_string(),
        variant: tokens[2].to_string(),
        expected_md5: fields[1].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_well_formed() {
        let v = parse_line("eng-USA-rms\td41d8cd98f00b204e9800998ecf8427e").unwrap();
        assert_eq!(v.language, "eng");
        assert_eq!(v.region, "USA");
        assert_eq!(v.variant, "rms");
        assert_eq!(v.expected_md5, "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn parse_line_wrong_field_count() {
        assert!(parse_line("eng-USA-rms").is_none());
        assert!(parse_line("eng-USA-rms\tabc\textra").is_none());
        assert!(parse_line("").is_none());
    }

    #[test]
    fn parse_line_wrong_token_count() {
        assert!(parse_line("bad-line\tabc123").is_none());
        assert!(parse_line("eng-USA-male-extra\tabc123").is_none());
    }

    #[test]
    fn parse_line_comma_separated_is_malformed() {
        // The shape of the legacy fallback entry; a comma is not a field
        // delimiter, so the whole line reads as a single field.
        assert!(parse_line("eng-USA-male,rms").is_none());
    }
}
