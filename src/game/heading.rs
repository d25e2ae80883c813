/// Direction of snake movement, as a unit vector on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Heading) -> bool {
        matches!(
            (self, other),
            (Heading::Up, Heading::Down)
                | (Heading::Down, Heading::Up)
                | (Heading::Left, Heading::Right)
                | (Heading::Right, Heading::Left)
        )
    }

    /// Returns the delta (dcol, drow) for moving one cell in this heading
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }
}

/// Snapshot of the directional keys seen during one tick
///
/// The presentation surface fills one of these between ticks; the core
/// resolves it to at most one heading request. When several keys are held at
/// once, the first match in left, right, up, down order wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl InputSnapshot {
    /// Record a directional key press
    pub fn press(&mut self, heading: Heading) {
        match heading {
            Heading::Left => self.left = true,
            Heading::Right => self.right = true,
            Heading::Up => self.up = true,
            Heading::Down => self.down = true,
        }
    }

    /// Resolve to a single heading request, if any directional key was seen
    pub fn requested_heading(&self) -> Option<Heading> {
        if self.left {
            Some(Heading::Left)
        } else if self.right {
            Some(Heading::Right)
        } else if self.up {
            Some(Heading::Up)
        } else if self.down {
            Some(Heading::Down)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_headings() {
        assert!(Heading::Up.is_opposite(Heading::Down));
        assert!(Heading::Down.is_opposite(Heading::Up));
        assert!(Heading::Left.is_opposite(Heading::Right));
        assert!(Heading::Right.is_opposite(Heading::Left));

        assert!(!Heading::Up.is_opposite(Heading::Left));
        assert!(!Heading::Up.is_opposite(Heading::Up));
        assert!(!Heading::Right.is_opposite(Heading::Down));
    }

    #[test]
    fn test_heading_delta() {
        assert_eq!(Heading::Up.delta(), (0, -1));
        assert_eq!(Heading::Down.delta(), (0, 1));
        assert_eq!(Heading::Left.delta(), (-1, 0));
        assert_eq!(Heading::Right.delta(), (1, 0));
    }

    #[test]
    fn test_empty_snapshot_requests_nothing() {
        assert_eq!(InputSnapshot::default().requested_heading(), None);
    }

    #[test]
    fn test_single_key_resolves_to_its_heading() {
        let mut snapshot = InputSnapshot::default();
        snapshot.press(Heading::Down);
        assert_eq!(snapshot.requested_heading(), Some(Heading::Down));
    }

    #[test]
    fn test_priority_order_left_right_up_down() {
        let all = InputSnapshot {
            left: true,
            right: true,
            up: true,
            down: true,
        };
        assert_eq!(all.requested_heading(), Some(Heading::Left));

        let no_left = InputSnapshot {
            right: true,
            up: true,
            down: true,
            ..Default::default()
        };
        assert_eq!(no_left.requested_heading(), Some(Heading::Right));

        let up_down = InputSnapshot {
            up: true,
            down: true,
            ..Default::default()
        };
        assert_eq!(up_down.requested_heading(), Some(Heading::Up));
    }
}
