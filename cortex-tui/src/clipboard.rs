//! Clipboard writes through the OSC 52 terminal escape.

use std::io::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Escape sequence asking the terminal to put `text` on the system clipboard.
pub fn osc52_sequence(text: &str) -> String {
    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

pub fn copy_to(out: &mut impl Write, text: &str) -> std::io::Result<()> {
    out.write_all(osc52_sequence(text).as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_wraps_base64_payload() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x1b\\");
    }

    #[test]
    fn copy_writes_sequence() {
        let mut buf = Vec::new();
        copy_to(&mut buf, "kubectl apply").unwrap();
        let written = String::from_utf8(buf).unwrap();
        assert!(written.starts_with("\x1b]52;c;"));
        assert!(written.ends_with("\x1b\\"));
    }
}
