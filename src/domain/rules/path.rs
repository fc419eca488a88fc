use crate::domain::coordinate::{Coord, PathStep};
use crate::domain::models::{Direction, PathError};
use crate::domain::rules::legality::Reachability;

impl Reachability {
    /// Reconstruct the shortest path from this search's source to
    /// `target` as direction runs: consecutive steps in the same
    /// direction collapse into one `PathStep` with their total length.
    /// A target this search never reached is an error, not a stale
    /// read. `target == source` yields an empty path.
    pub fn shortest_path(&self, target: Coord) -> Result<Vec<PathStep>, PathError> {
        if !target.in_bounds() {
            return Err(PathError::OffBoard(target));
        }
        if self.distance(target).is_none() {
            return Err(PathError::Unreachable(target));
        }

        let mut steps: Vec<Direction> = Vec::new();
        let mut current = target;
        while current != self.source {
            let previous = self.predecessor[current.row as usize][current.col as usize]
                .ok_or(PathError::Unreachable(target))?;
            let direction = Direction::between(previous, current)
                .ok_or(PathError::Unreachable(target))?;
            steps.push(direction);
            current = previous;
        }
        steps.reverse();

        let mut path: Vec<PathStep> = Vec::new();
        for direction in steps {
            match path.last_mut() {
                Some(run) if run.direction == direction => run.distance += 1,
                _ => path.push(PathStep {
                    direction,
                    distance: 1,
                }),
            }
        }
        Ok(path)
    }
}
