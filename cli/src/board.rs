//! Board rendering: one column of `**` per pile, tallest pile on top

use nim_engine::GameState;

/// Render `state` with rows from `height` down to 1 and a 1-based pile footer.
///
/// Rows with no objects at all are skipped.
pub fn render(state: &GameState, height: u32) -> String {
    let mut out = String::from("Board:\n");
    for row in (1..=height).rev() {
        let line: String = state
            .piles()
            .iter()
            .map(|&pile| if pile >= row { "** " } else { "   " })
            .collect();
        if line.contains('*') {
            out.push('\t');
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }
    let footer: Vec<String> = (1..=state.piles().len()).map(|n| format!("{:<3}", n)).collect();
    out.push('\t');
    out.push_str(footer.concat().trim_end());
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_columns() {
        let state = GameState::new(vec![1, 0, 2]).unwrap();
        assert_eq!(render(&state, 2), "Board:\n\t      **\n\t**    **\n\t1  2  3\n");
    }

    #[test]
    fn test_render_skips_empty_rows() {
        let state = GameState::new(vec![1, 1]).unwrap();
        assert_eq!(render(&state, 7), "Board:\n\t** **\n\t1  2\n");
    }

    #[test]
    fn test_render_empty_board() {
        let state = GameState::new(vec![0, 0]).unwrap();
        assert_eq!(render(&state, 3), "Board:\n\t1  2\n");
    }
}
