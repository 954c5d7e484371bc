/// How a renderer should treat a cell while a search is in progress.
///
/// Variants are listed from highest to lowest display priority: a cell that
/// is both the start and on the path reports [`Start`](CellStatus::Start).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellStatus {
    /// The node most recently expanded.
    Current,
    /// The search origin.
    Start,
    /// The search target.
    Goal,
    /// On the path from the start to the current node.
    Path,
    /// Queued for evaluation.
    Open,
    /// Fully evaluated.
    Closed,
    /// Not touched by the search.
    None,
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn status_round_trip() {
        let json = serde_json::to_string(&CellStatus::Path).unwrap();
        let back: CellStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CellStatus::Path);
    }
}
