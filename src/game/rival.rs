//! Rival snake decision heuristic
//!
//! Pure function of the rival's head, heading, and the apple pool, plus one
//! injectable random source. Blends boundary avoidance with apple pursuit;
//! higher levels pursue more often and closer to the edges.

use rand::seq::SliceRandom;
use rand::Rng;

use super::action::Direction;
use super::config::LevelConfig;
use super::state::{Apple, Position};

/// Pick the rival's next heading. Never reverses; keeps the current heading
/// only when the grid is too degenerate to offer any other candidate.
pub fn decide_heading<R: Rng>(
    head: Position,
    heading: Direction,
    grid_width: usize,
    grid_height: usize,
    apples: &[Apple],
    level: &LevelConfig,
    rng: &mut R,
) -> Direction {
    let mut safe = Vec::new();
    let mut risky = Vec::new();

    for dir in Direction::ALL {
        if dir == heading.opposite() {
            continue;
        }

        let next = head.step(dir);
        if in_danger_zone(next, grid_width, grid_height, level.danger_zone) {
            risky.push(dir);
        } else {
            safe.push(dir);
        }
    }

    // Chase the nearest apple with level-dependent probability.
    if !apples.is_empty() && rng.gen_bool(level.pursuit_chance) {
        if let Some(target) = apples
            .iter()
            .min_by_key(|a| head.manhattan_distance(a.pos))
            .map(|a| a.pos)
        {
            let mut toward = Vec::new();
            if target.x < head.x && heading != Direction::Right {
                toward.push(Direction::Left);
            }
            if target.x > head.x && heading != Direction::Left {
                toward.push(Direction::Right);
            }
            if target.y < head.y && heading != Direction::Down {
                toward.push(Direction::Up);
            }
            if target.y > head.y && heading != Direction::Up {
                toward.push(Direction::Down);
            }

            let good: Vec<Direction> = toward
                .iter()
                .copied()
                .filter(|d| safe.contains(d))
                .collect();

            if let Some(&dir) = good.choose(rng) {
                return dir;
            }

            // Toward the apple but inside the danger zone: taken freely at
            // high levels, otherwise only when nothing safe remains.
            if level.pursue_unsafe || safe.is_empty() {
                if let Some(&dir) = toward.choose(rng) {
                    return dir;
                }
            }
        }
    }

    if !safe.is_empty() && rng.gen_bool(level.safe_bias) {
        if let Some(&dir) = safe.choose(rng) {
            return dir;
        }
    }

    let mut legal = safe;
    legal.extend(risky);

    if let Some(&dir) = legal.choose(rng) {
        return dir;
    }

    heading
}

/// A cell within `margin` of any grid edge counts as dangerous
fn in_danger_zone(pos: Position, grid_width: usize, grid_height: usize, margin: i32) -> bool {
    pos.x < margin
        || pos.x >= grid_width as i32 - margin
        || pos.y < margin
        || pos.y >= grid_height as i32 - margin
}
