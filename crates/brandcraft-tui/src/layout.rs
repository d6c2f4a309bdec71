//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Widest the result board's palette column gets
const PALETTE_MAX_WIDTH: u16 = 36;

/// Below this width the result board stacks its columns
const STACK_BELOW_WIDTH: u16 = 70;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar
    pub header: Rect,
    /// Form or result board
    pub body: Rect,
    /// Key hints and transient status
    pub footer: Rect,
}

/// Split the screen into header, body and a one-line footer
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

/// Areas of the result board
#[derive(Debug, Clone, Copy)]
pub struct BoardAreas {
    /// Headline, mission, voice and tags
    pub story: Rect,
    /// Palette list
    pub palette: Rect,
}

/// Two columns on wide terminals, stacked on narrow ones
pub fn board(area: Rect) -> BoardAreas {
    if area.width < STACK_BELOW_WIDTH {
        let chunks = Layout::vertical([Constraint::Min(6), Constraint::Length(10)]).split(area);
        return BoardAreas {
            story: chunks[0],
            palette: chunks[1],
        };
    }

    let chunks = Layout::horizontal([
        Constraint::Min(30),
        Constraint::Length(PALETTE_MAX_WIDTH),
    ])
    .split(area);
    BoardAreas {
        story: chunks[0],
        palette: chunks[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_layout() {
        let areas = create(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.footer.height, 1);
        assert_eq!(areas.footer.y, 23);
        assert_eq!(areas.body.height, 20);
    }

    #[test]
    fn test_board_columns_on_wide_terminal() {
        let areas = board(Rect::new(0, 0, 100, 20));
        assert_eq!(areas.palette.width, PALETTE_MAX_WIDTH);
        assert_eq!(areas.story.width, 100 - PALETTE_MAX_WIDTH);
        assert_eq!(areas.story.y, areas.palette.y);
    }

    #[test]
    fn test_board_stacks_on_narrow_terminal() {
        let areas = board(Rect::new(0, 0, 50, 30));
        assert_eq!(areas.story.width, 50);
        assert_eq!(areas.palette.width, 50);
        assert!(areas.palette.y > areas.story.y);
    }
}
