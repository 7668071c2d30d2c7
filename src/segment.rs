use std::cmp::Ordering;

/// A single comparable piece of a version string, borrowed from it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    /// A maximal run of ASCII letters
    Alpha(&'a str),
    /// A maximal run of ASCII digits, leading zeros kept
    Numeric(&'a str),
    /// A lone `~`, marks a pre-release
    Tilde,
}

impl Segment<'_> {
    /// Compare two segments sitting at the same position
    fn vercmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Segment::Tilde, Segment::Tilde) => Ordering::Equal,
            (Segment::Tilde, _) => Ordering::Less,
            (_, Segment::Tilde) => Ordering::Greater,
            (Segment::Numeric(_), Segment::Alpha(_)) => Ordering::Greater,
            (Segment::Alpha(_), Segment::Numeric(_)) => Ordering::Less,
            (Segment::Numeric(a), Segment::Numeric(b)) => {
                let a = a.trim_start_matches('0');
                let b = b.trim_start_matches('0');
                // Longer wins without looking at the digits
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            },
            (Segment::Alpha(a), Segment::Alpha(b)) => a.cmp(b),
        }
    }

    /// How a segment left over on the longer side orders that side against
    /// the shorter one
    fn trailing(&self) -> Ordering {
        match self {
            Segment::Numeric(_) => Ordering::Greater,
            Segment::Alpha(_) | Segment::Tilde => Ordering::Less,
        }
    }
}

/// Iterator over the segments of a string, left to right. Anything that is
/// not an ASCII letter, an ASCII digit or `~` only separates segments and is
/// never yielded.
pub(crate) struct Segments<'a> {
    remaining: &'a str
}

impl<'a> Segments<'a> {
    pub(crate) fn new(value: &'a str) -> Self {
        Self { remaining: value }
    }
}

fn run_length<F>(value: &str, matches: F) -> usize
where
    F: Fn(&u8) -> bool
{
    value.bytes().position(|byte| !matches(&byte)).unwrap_or(value.len())
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = match self.remaining.bytes().position(|byte|
            byte.is_ascii_alphanumeric() || byte == b'~')
        {
            Some(start) => start,
            None => {
                self.remaining = "";
                return None
            },
        };
        let rest = &self.remaining[start..];
        let (segment, len) = match rest.as_bytes()[0] {
            b'~' => (Segment::Tilde, 1),
            byte if byte.is_ascii_digit() => {
                let len = run_length(rest, u8::is_ascii_digit);
                (Segment::Numeric(&rest[..len]), len)
            },
            _ => {
                let len = run_length(rest, u8::is_ascii_alphabetic);
                (Segment::Alpha(&rest[..len]), len)
            },
        };
        self.remaining = &rest[len..];
        Some(segment)
    }
}

/// Compare two version (or release) strings the way `rpmvercmp` in libalpm
/// does.
///
/// Both strings are broken into segments (runs of letters, runs of digits,
/// or a lone `~`) which are compared pairwise:
/// - a `~` sorts before anything else, two `~` tie
/// - a numeric segment is always newer than an alphabetic one
/// - two numeric segments compare by length after dropping leading zeros,
///   then digit by digit
/// - two alphabetic segments compare as plain strings
///
/// If one side runs out of segments first, its opponent's next segment
/// decides: a number makes the longer side newer, a letter run or a `~`
/// makes it older, so `1.0 < 1.0.1` but `1.0rc < 1.0` and `1.0~rc < 1.0`.
///
/// Separators are dropped, so `1.2.3` and `1_2_3` are equal.
pub fn rpmvercmp(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal
    }
    let mut segs_a = Segments::new(a);
    let mut segs_b = Segments::new(b);
    loop {
        match (segs_a.next(), segs_b.next()) {
            (Some(seg_a), Some(seg_b)) => match seg_a.vercmp(&seg_b) {
                Ordering::Equal => continue,
                order => return order,
            },
            (None, None) => return Ordering::Equal,
            (Some(extra), None) => return extra.trailing(),
            (None, Some(extra)) => return extra.trailing().reverse(),
        }
    }
}
