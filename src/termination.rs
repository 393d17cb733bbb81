use crate::path_segment::PathSegment;

/// Whether the segment still needs tracing.
pub fn is_alive(segment: &PathSegment) -> bool {
    segment.remaining_bounces > 0
}

/// Stable partition of `segments`: the alive ones stay in `segments`,
/// the finished ones are returned. Both keep their relative order.
pub fn compact(segments: &mut Vec<PathSegment>) -> Vec<PathSegment> {
    let (alive, finished): (Vec<PathSegment>, Vec<PathSegment>) =
        segments.drain(..).partition(is_alive);
    *segments = alive;
    finished
}
