//! Built-in seed patterns, stored as literal grid coordinates.

/// A named pattern: absolute `(x, y)` grid coordinates of its live
/// cells.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "glider",
        cells: &[(7, 6), (8, 7), (6, 8), (7, 8), (8, 8)],
    },
    Pattern {
        name: "blinker",
        cells: &[(13, 14), (14, 14), (15, 14)],
    },
    Pattern {
        // The gun is 36 columns wide; on the default 30-column grid
        // its right edge lives past the visible area.
        name: "gosper-glider-gun",
        cells: &[
            // Left block
            (1, 5), (2, 5), (1, 6), (2, 6),
            // Left ship
            (11, 5), (11, 6), (11, 7), (12, 4), (12, 8), (13, 3), (13, 9),
            (14, 3), (14, 9), (15, 6), (16, 4), (16, 8), (17, 5), (17, 6),
            (17, 7), (18, 6),
            // Right ship
            (21, 3), (21, 4), (21, 5), (22, 3), (22, 4), (22, 5), (23, 2),
            (23, 6), (25, 1), (25, 2), (25, 6), (25, 7),
            // Right block
            (35, 3), (35, 4), (36, 3), (36, 4),
        ],
    },
];

/// Look up a pattern by its exact name.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_by_name() {
        assert!(find("glider").is_some());
        assert!(find("blinker").is_some());
        assert!(find("gosper-glider-gun").is_some());
        assert!(find("herschel").is_none());
    }

    #[test]
    fn cell_counts() {
        assert_eq!(find("glider").unwrap().cells.len(), 5);
        assert_eq!(find("blinker").unwrap().cells.len(), 3);
        assert_eq!(find("gosper-glider-gun").unwrap().cells.len(), 36);
    }

    #[test]
    fn no_duplicate_cells() {
        for pattern in PATTERNS {
            let mut seen = std::collections::HashSet::new();
            for cell in pattern.cells {
                assert!(seen.insert(cell), "{} repeats {:?}", pattern.name, cell);
            }
        }
    }

    #[test]
    fn coordinates_are_non_negative() {
        for pattern in PATTERNS {
            for &(x, y) in pattern.cells {
                assert!(x >= 0 && y >= 0, "{} has {:?}", pattern.name, (x, y));
            }
        }
    }
}
