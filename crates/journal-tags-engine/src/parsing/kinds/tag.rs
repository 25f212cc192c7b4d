/// Delimiters of the `<Name-- content --Name/>` micro-format.
pub struct TagDelimiters;

impl TagDelimiters {
    /// Starts an opening delimiter.
    pub const OPEN: u8 = b'<';
    /// Follows the name in an opening delimiter and precedes it in a closing one.
    pub const MARKER: &'static [u8; 2] = b"--";
    /// Ends a closing delimiter.
    pub const CLOSE_END: &'static [u8; 2] = b"/>";

    /// Tag names are runs of ASCII letters, digits, `_` and `-`.
    pub fn is_name_byte(b: u8) -> bool {
        b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
    }

    /// `<Name--`
    pub fn open(name: &str) -> String {
        format!("<{name}--")
    }

    /// `--Name/>`
    pub fn close(name: &str) -> String {
        format!("--{name}/>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_bytes() {
        for b in b"azAZ09_-" {
            assert!(TagDelimiters::is_name_byte(*b));
        }
        for b in b" <>/.!\n" {
            assert!(!TagDelimiters::is_name_byte(*b));
        }
    }

    #[test]
    fn delimiters_render() {
        assert_eq!(TagDelimiters::open("Code"), "<Code--");
        assert_eq!(TagDelimiters::close("Code"), "--Code/>");
    }
}
