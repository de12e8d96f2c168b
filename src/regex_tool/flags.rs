use std::fmt;
use std::str::FromStr;

use super::PatternError;

/// ECMAScript flag set, written the way it is typed into the flags box
/// (`"gi"`, `"gmy"`, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    /// `d`: accepted, match indices are always reported.
    pub indices: bool,
    pub global: bool,
    pub ignore_case: bool,
    pub multiline: bool,
    pub dot_all: bool,
    pub unicode: bool,
    pub unicode_sets: bool,
    pub sticky: bool,
}

impl Flags {
    pub const GLOBAL: Flags = Flags {
        indices: false,
        global: true,
        ignore_case: false,
        multiline: false,
        dot_all: false,
        unicode: false,
        unicode_sets: false,
        sticky: false,
    };

    pub fn parse(s: &str) -> Result<Flags, PatternError> {
        let mut flags = Flags::default();
        for c in s.chars() {
            let slot = match c {
                'd' => &mut flags.indices,
                'g' => &mut flags.global,
                'i' => &mut flags.ignore_case,
                'm' => &mut flags.multiline,
                's' => &mut flags.dot_all,
                'u' => &mut flags.unicode,
                'v' => &mut flags.unicode_sets,
                'y' => &mut flags.sticky,
                other => return Err(PatternError::UnknownFlag(other)),
            };
            if *slot {
                return Err(PatternError::DuplicateFlag(c));
            }
            *slot = true;
        }
        if flags.unicode && flags.unicode_sets {
            return Err(PatternError::ConflictingFlags('u', 'v'));
        }
        Ok(flags)
    }

    /// The letters that change how a pattern compiles. `g` and `y` only
    /// drive the scan; `d` changes nothing.
    pub(crate) fn engine_letters(&self) -> String {
        [
            (self.ignore_case, 'i'),
            (self.multiline, 'm'),
            (self.dot_all, 's'),
            (self.unicode, 'u'),
            (self.unicode_sets, 'v'),
        ]
        .into_iter()
        .filter_map(|(on, c)| on.then_some(c))
        .collect()
    }
}

impl FromStr for Flags {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Flags::parse(s)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (on, c) in [
            (self.indices, 'd'),
            (self.global, 'g'),
            (self.ignore_case, 'i'),
            (self.multiline, 'm'),
            (self.dot_all, 's'),
            (self.unicode, 'u'),
            (self.unicode_sets, 'v'),
            (self.sticky, 'y'),
        ] {
            if on {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
