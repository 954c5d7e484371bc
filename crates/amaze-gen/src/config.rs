//! Generator configuration.

use std::fmt;
use std::str::FromStr;

/// How the next frontier cell is taken off the frontier list.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrontierPick {
    /// Uniformly at random. Produces the classic Prim's maze texture.
    #[default]
    Random,
    /// Most recently added cell. Long winding corridors.
    Newest,
    /// Least recently added cell. Grows outward in rings.
    Oldest,
}

impl FrontierPick {
    /// All policies, in declaration order.
    pub const ALL: [FrontierPick; 3] = [Self::Random, Self::Newest, Self::Oldest];

    /// Lower-case name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Newest => "newest",
            Self::Oldest => "oldest",
        }
    }
}

impl fmt::Display for FrontierPick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FrontierPick {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown frontier policy \u{201c}{s}\u{201d}"))
    }
}

/// Size and policy of a maze to generate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    /// Number of rows. Must be positive.
    pub rows: i32,
    /// Number of columns. Must be positive.
    pub columns: i32,
    /// Frontier selection policy.
    pub pick: FrontierPick,
}

impl MazeConfig {
    /// A `rows × columns` maze with the default policy.
    pub fn new(rows: i32, columns: i32) -> Self {
        Self {
            rows,
            columns,
            pick: FrontierPick::default(),
        }
    }

    /// Set the frontier policy (builder).
    pub fn with_pick(mut self, pick: FrontierPick) -> Self {
        self.pick = pick;
        self
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self::new(20, 20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_policy_names() {
        for p in FrontierPick::ALL {
            assert_eq!(p.name().parse::<FrontierPick>(), Ok(p));
        }
        assert_eq!("NEWEST".parse::<FrontierPick>(), Ok(FrontierPick::Newest));
        assert!("sideways".parse::<FrontierPick>().is_err());
    }

    #[test]
    fn builder() {
        let c = MazeConfig::new(3, 7).with_pick(FrontierPick::Oldest);
        assert_eq!((c.rows, c.columns, c.pick), (3, 7, FrontierPick::Oldest));
        assert_eq!(MazeConfig::default().pick, FrontierPick::Random);
    }
}
