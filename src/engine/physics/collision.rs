// Landing resolution against one-way platforms

use crate::core::Rect;

/// How far below a platform's top edge the previous frame's feet may have been
/// while still counting as a landing. Catches fast falls that overshoot the edge.
pub const LANDING_TOLERANCE: f32 = 5.0;

/// Find the platform a falling body lands on this step.
///
/// Only bodies that are falling or resting (`velocity_y >= 0`) can land. A body
/// lands on a platform when its feet are at or below the platform top now, were
/// at most `LANDING_TOLERANCE` below it before the step, and the two overlap
/// horizontally. The first matching platform in list order wins and its top edge
/// is returned as the new bottom of the body.
pub fn resolve_landing(body: &Rect, velocity_y: f32, platforms: &[Rect]) -> Option<f32> {
    if velocity_y < 0.0 {
        return None;
    }

    let bottom = body.bottom();
    let previous_bottom = bottom - velocity_y;

    platforms
        .iter()
        .find(|platform| {
            bottom >= platform.top()
                && previous_bottom <= platform.top() + LANDING_TOLERANCE
                && body.overlaps_horizontally(platform)
        })
        .map(Rect::top)
}
