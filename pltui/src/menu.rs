//! Popup menu placement

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Widget allocation, relative to its window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Places a menu just above `widget`, one pixel right of its left edge.
pub fn position_above(window_origin: Point, widget: Rect, menu_height: i32) -> Point {
    Point {
        x: window_origin.x + widget.x + 1,
        y: window_origin.y + widget.y - menu_height - 1,
    }
}

/// Places the playback mode menu so its bottom edge sits just above the
/// bottom of `button`, aligned on its left corner.
pub fn position_mode_menu(window_origin: Point, button: Rect, menu_height: i32) -> Point {
    Point {
        x: window_origin.x + button.x + 1,
        y: window_origin.y + button.y + button.height - menu_height - 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_sits_above_button() {
        let origin = Point { x: 100, y: 50 };
        let button = Rect {
            x: 10,
            y: 400,
            width: 24,
            height: 24,
        };
        assert_eq!(
            position_above(origin, button, 120),
            Point { x: 111, y: 329 }
        );
    }

    #[test]
    fn test_mode_menu_covers_button_corner() {
        let origin = Point { x: 100, y: 50 };
        let button = Rect {
            x: 10,
            y: 400,
            width: 24,
            height: 24,
        };
        assert_eq!(
            position_mode_menu(origin, button, 120),
            Point { x: 111, y: 351 }
        );
    }
}
