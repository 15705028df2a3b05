//! Word emitter: packs the flat image into byte-reversed 32-bit lines.

use std::io::{self, Write};

use crate::config::{FillByte, WORD_SIZE};

pub const HEADER: &str = "@0";

/// Pads `group` to a full word with `fill`, reverses it and joins it lowercase.
pub fn word<S: AsRef<str>>(group: &[S], fill: &FillByte) -> String {
    let mut bytes: Vec<&str> = group.iter().map(AsRef::as_ref).collect();
    bytes.resize(WORD_SIZE.max(bytes.len()), fill.as_str());
    bytes.reverse();
    bytes.concat().to_lowercase()
}

pub fn words<'a, S: AsRef<str>>(
    tokens: &'a [S],
    fill: &'a FillByte,
) -> impl Iterator<Item = String> + 'a {
    tokens.chunks(WORD_SIZE).map(move |g| word(g, fill))
}

/// Writes the header and every word line. Returns the number of words written.
pub fn write_image<W: Write, S: AsRef<str>>(
    mut out: W,
    tokens: &[S],
    fill: &FillByte,
) -> io::Result<usize> {
    writeln!(out, "{HEADER}")?;
    let mut count = 0;
    for w in words(tokens, fill) {
        writeln!(out, "{w}")?;
        count += 1;
    }
    Ok(count)
}

pub fn render<S: AsRef<str>>(tokens: &[S], fill: &FillByte) -> String {
    let mut buf = String::new();
    buf.push_str(HEADER);
    buf.push('\n');
    for w in words(tokens, fill) {
        buf.push_str(&w);
        buf.push('\n');
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_is_byte_reversed() {
        assert_eq!(word(&["de", "ad", "be", "ef"], &FillByte::default()), "efbeadde");
    }

    #[test]
    fn short_word_padded_before_reversal() {
        let fill = FillByte::default();
        assert_eq!(word(&["aa", "bb"], &fill), "0000bbaa");
        assert_eq!(word(&["01"], &FillByte::new("EE").unwrap()), "eeeeee01");
    }

    #[test]
    fn output_is_lowercased() {
        assert_eq!(word(&["AB", "Cd", "eF", "12"], &FillByte::default()), "12efcdab");
    }

    #[test]
    fn empty_image_is_header_only() {
        let tokens: [&str; 0] = [];
        assert_eq!(render(&tokens, &FillByte::default()), "@0\n");
    }

    #[test]
    fn write_image_counts_words() {
        let tokens = ["01", "02", "03", "04", "05"];
        let mut out = Vec::new();
        let n = write_image(&mut out, &tokens, &FillByte::default()).unwrap();
        assert_eq!(n, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "@0\n04030201\n00000005\n");
    }
}
