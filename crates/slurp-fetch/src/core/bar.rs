//! Sub-character progress-bar rendering.
//!
//! A unit budget of B discrete progress steps is drawn into `ceil(B / 8)`
//! terminal cells. Each cell represents up to eight sub-units and is drawn
//! with one of nine glyphs (empty through full block), so the bar moves
//! smoothly even though progress itself is quantized.

/// Nine fill levels per cell: empty, then the eight left-block eighths.
const GLYPHS: [char; 9] = [' ', '▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];

/// Sub-units represented by a single terminal cell.
const SUBUNITS_PER_CELL: u32 = 8;

/// Number of terminal cells needed to draw `budget` progress units.
///
/// # Examples
///
/// ```
/// use slurp_fetch::core::cell_count;
///
/// assert_eq!(cell_count(100), 13);
/// assert_eq!(cell_count(8), 1);
/// ```
pub fn cell_count(budget: u32) -> usize {
    budget.div_ceil(SUBUNITS_PER_CELL) as usize
}

/// Render `units` out of `budget` as a bracketed fixed-width bar.
///
/// The output width is constant for a given budget, so the line can be
/// redrawn in place with a carriage return. `units` beyond the budget are
/// clamped.
pub fn render_bar(units: u32, budget: u32) -> String {
    let cells = cell_count(budget);
    let units = units.min(budget);
    let mut bar = String::with_capacity(cells * 3 + 2);
    bar.push('[');
    for cell in 0..cells as u32 {
        let filled = units
            .saturating_sub(cell * SUBUNITS_PER_CELL)
            .min(SUBUNITS_PER_CELL);
        bar.push(GLYPHS[filled as usize]);
    }
    bar.push(']');
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_count_rounds_up() {
        assert_eq!(cell_count(100), 13);
        assert_eq!(cell_count(96), 12);
        assert_eq!(cell_count(1), 1);
        assert_eq!(cell_count(9), 2);
    }

    #[test]
    fn test_render_empty_and_full() {
        assert_eq!(render_bar(0, 8), "[ ]");
        assert_eq!(render_bar(8, 8), "[█]");
        assert_eq!(render_bar(100, 100), format!("[{}█]", "█".repeat(11)));
    }

    #[test]
    fn test_render_partial_fill() {
        assert_eq!(render_bar(1, 8), "[▏]");
        assert_eq!(render_bar(4, 8), "[▌]");
        assert_eq!(render_bar(7, 8), "[▉]");
        // 10 units of 16: first cell full, second at 2/8
        assert_eq!(render_bar(10, 16), "[█▎]");
    }

    #[test]
    fn test_render_clamps_overflow() {
        assert_eq!(render_bar(200, 8), "[█]");
    }

    #[test]
    fn test_render_width_is_constant() {
        let budget = 100;
        let width = render_bar(0, budget).chars().count();
        for units in 0..=budget {
            assert_eq!(render_bar(units, budget).chars().count(), width);
        }
    }

    #[test]
    fn test_render_is_monotone_in_units() {
        // Each cell's fill level never decreases as units grow.
        let budget = 100;
        let mut previous: Vec<usize> = vec![0; cell_count(budget)];
        for units in 0..=budget {
            let bar = render_bar(units, budget);
            let levels: Vec<usize> = bar
                .chars()
                .filter(|c| *c != '[' && *c != ']')
                .map(|c| GLYPHS.iter().position(|g| *g == c).unwrap())
                .collect();
            for (now, before) in levels.iter().zip(&previous) {
                assert!(now >= before);
            }
            previous = levels;
        }
    }
}
