use crate::game_interface::{Number, Position};

/// Manhattan distance. The engine only allows the four cardinal moves, so
/// this is the true step count on an empty board.
pub fn manhattan(a: Position, b: Position) -> Number {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: Number, y: Number) -> Position {
        Position { x, y }
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(manhattan(pos(0, 0), pos(3, 4)), 7);
        assert_eq!(manhattan(pos(3, 4), pos(0, 0)), 7);
        assert_eq!(manhattan(pos(2, 2), pos(2, 2)), 0);
        assert_eq!(manhattan(pos(-1, -1), pos(1, 1)), 4);
    }
}
