//! Scrolling ground generation

use rand::Rng;

use super::state::{Segment, World};
use crate::consts::*;

/// Scroll the ground left, append a segment when the right edge runs short,
/// and drop the oldest segment once it is fully off-screen
pub fn scroll_terrain(world: &mut World) {
    for segment in &mut world.terrain {
        segment.pos.x -= SCROLL_SPEED;
    }

    let last_end = world
        .terrain
        .last()
        .map(Segment::end)
        .unwrap_or(0.0);

    if last_end < world.viewport.width {
        let width = world.rng.random_range(SEGMENT_MIN_WIDTH..SEGMENT_MAX_WIDTH);
        // Butt the new piece against the last one so coverage has no seam
        world
            .terrain
            .push(Segment::new(last_end, &world.viewport, width));
        log::debug!("Ground segment appended at x={:.1} (w={:.1})", last_end, width);
    }

    if world.terrain.len() > MIN_SEGMENTS && world.terrain[0].end() < 0.0 {
        world.terrain.remove(0);
    }
}

/// Slack for float drift when comparing segment edges
const EDGE_EPSILON: f32 = 1e-3;

/// Whether the segments cover `[0, width]` without a gap
pub fn covers_viewport(terrain: &[Segment], width: f32) -> bool {
    let Some(first) = terrain.first() else {
        return false;
    };
    if first.pos.x > EDGE_EPSILON {
        return false;
    }

    let mut reach = first.end();
    for segment in &terrain[1..] {
        if reach >= width {
            break;
        }
        if segment.pos.x > reach + EDGE_EPSILON {
            return false;
        }
        reach = reach.max(segment.end());
    }
    reach + EDGE_EPSILON >= width
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Viewport;
    use proptest::prelude::*;

    #[test]
    fn test_initial_segment_scrolls() {
        let mut world = World::new(Viewport::new(800.0, 450.0), 5);
        scroll_terrain(&mut world);
        assert_eq!(world.terrain.len(), 1);
        assert_eq!(world.terrain[0].pos.x, -2.0);
    }

    #[test]
    fn test_segment_appended_when_edge_enters_view() {
        let mut world = World::new(Viewport::new(800.0, 450.0), 5);
        // Initial segment ends at 1600, enters the view after 401 ticks
        for _ in 0..400 {
            scroll_terrain(&mut world);
        }
        assert_eq!(world.terrain.len(), 1);

        scroll_terrain(&mut world);
        assert_eq!(world.terrain.len(), 2);
        let added = &world.terrain[1];
        assert_eq!(added.pos.x, world.terrain[0].end());
        assert!(added.width >= 200.0 && added.width < 300.0);
        assert_eq!(added.height, 60.0);
        assert_eq!(added.pos.y, 390.0);
    }

    #[test]
    fn test_keeps_at_least_three_segments() {
        let mut world = World::new(Viewport::new(800.0, 450.0), 11);
        for _ in 0..5_000 {
            scroll_terrain(&mut world);
            assert!(!world.terrain.is_empty());
        }
        assert!(world.terrain.len() >= MIN_SEGMENTS);
        // Everything but the leading piece still touches the view
        for segment in &world.terrain[1..] {
            assert!(segment.end() >= 0.0);
        }
    }

    #[test]
    fn test_covers_viewport_detects_gap() {
        let vp = Viewport::new(800.0, 450.0);
        let terrain = vec![Segment::new(0.0, &vp, 400.0), Segment::new(410.0, &vp, 500.0)];
        assert!(!covers_viewport(&terrain, 800.0));
        let terrain = vec![Segment::new(-5.0, &vp, 405.0), Segment::new(400.0, &vp, 500.0)];
        assert!(covers_viewport(&terrain, 800.0));
    }

    proptest! {
        #[test]
        fn prop_terrain_always_covers_viewport(
            seed in any::<u64>(),
            width in 320.0f32..1920.0,
            ticks in 1usize..3000,
        ) {
            let mut world = World::new(Viewport::new(width, width * 0.5), seed);
            for _ in 0..ticks {
                scroll_terrain(&mut world);
                prop_assert!(covers_viewport(&world.terrain, width));
                // Consecutive pieces meet edge to edge
                for pair in world.terrain.windows(2) {
                    prop_assert!((pair[1].pos.x - pair[0].end()).abs() < EDGE_EPSILON);
                }
            }
        }
    }
}
