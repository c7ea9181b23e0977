//! Collision detection for axis-aligned geometry
//!
//! Pure functions over ball, paddle, and brick positions; no side effects
//! beyond the returned outcome. The paddle and brick tests require the
//! ball's horizontal span to lie strictly inside the target's span, so a
//! ball approaching at a shallow angle can clear the edge before the test
//! ever passes - a known simplification, kept rather than silently fixed.

use super::state::{Ball, Brick, Paddle};

/// Outcome of the wall check; both axes are tested independently and can
/// flip in the same tick (corner case)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallReflection {
    pub flip_x: bool,
    pub flip_y: bool,
}

impl WallReflection {
    pub fn any(&self) -> bool {
        self.flip_x || self.flip_y
    }
}

/// Which velocity components reverse at the field boundary
///
/// A single flip per axis even when both edges are crossed at once; the
/// bottom edge flips `y` like any other wall, and the round-end check in
/// the tick loop fires afterwards.
pub fn reflect_off_walls(ball: &Ball, field_width: f32, field_height: f32) -> WallReflection {
    WallReflection {
        flip_x: ball.right() > field_width || ball.left() < 0.0,
        flip_y: ball.bottom() > field_height || ball.top() < 0.0,
    }
}

/// True iff the ball rebounds off the paddle this tick
///
/// The ball must sit strictly inside the paddle's horizontal span with its
/// bottom edge past the paddle's top. On a hit the caller sets `vel.y` to
/// `-ball.speed`: a fixed upward rebound, not derived from the contact
/// point.
pub fn rebounds_off_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.left() > paddle.x && ball.right() < paddle.right() && ball.bottom() > paddle.y
}

/// True iff the ball's bounding box intersects the brick
///
/// All four edge tests are required: strict containment on x, overlap on
/// y. On a hit the caller flips `vel.y` (never `vel.x` - edge and corner
/// hits are not distinguished) and hides the brick.
pub fn intersects_brick(ball: &Ball, brick: &Brick) -> bool {
    ball.left() > brick.x
        && ball.right() < brick.right()
        && ball.bottom() > brick.y
        && ball.top() < brick.bottom()
}
