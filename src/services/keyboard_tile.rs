use crate::models::{ArrowDirection, TilePosition};

/// Next tile position for an arrow chord pressed while the window sits at
/// `current` (`None` meaning untiled).
///
/// The table encodes progressive subdivision: halves split into quarters on
/// the perpendicular axis, quarters slide toward their neighbor or expand
/// back to the enclosing half, and `Maximize` bridges into the
/// `Fullscreen`/`Restore` actions. `Restore` is transient and never a
/// resting state, so transitions out of it always return `None`. Unmapped
/// pairs are deliberate no-ops, never errors.
pub fn transition(
    current: Option<TilePosition>,
    direction: ArrowDirection,
) -> Option<TilePosition> {
    use ArrowDirection::{Down, Left, Right, Up};
    use TilePosition::*;

    match (current, direction) {
        (None, Left) => Some(LeftHalf),
        (None, Right) => Some(RightHalf),
        (None, Up) => Some(Maximize),

        (Some(LeftHalf), Up) => Some(TopLeftQuarter),
        (Some(LeftHalf), Down) => Some(BottomLeftQuarter),
        (Some(LeftHalf), Right) => Some(RightHalf),

        (Some(RightHalf), Up) => Some(TopRightQuarter),
        (Some(RightHalf), Down) => Some(BottomRightQuarter),
        (Some(RightHalf), Left) => Some(LeftHalf),

        (Some(TopHalf), Left) => Some(TopLeftQuarter),
        (Some(TopHalf), Right) => Some(TopRightQuarter),
        (Some(TopHalf), Down) => Some(BottomHalf),

        (Some(BottomHalf), Left) => Some(BottomLeftQuarter),
        (Some(BottomHalf), Right) => Some(BottomRightQuarter),
        (Some(BottomHalf), Up) => Some(TopHalf),

        (Some(Maximize), Up) => Some(Fullscreen),
        (Some(Maximize), Down) => Some(Restore),
        (Some(Maximize), Left) => Some(LeftHalf),
        (Some(Maximize), Right) => Some(RightHalf),

        (Some(Fullscreen), Down) => Some(Restore),

        (Some(TopLeftQuarter), Right) => Some(TopRightQuarter),
        (Some(TopLeftQuarter), Down) => Some(BottomLeftQuarter),
        (Some(TopLeftQuarter), Left) => Some(LeftHalf),
        (Some(TopLeftQuarter), Up) => Some(TopHalf),

        (Some(TopRightQuarter), Left) => Some(TopLeftQuarter),
        (Some(TopRightQuarter), Down) => Some(BottomRightQuarter),
        (Some(TopRightQuarter), Right) => Some(RightHalf),
        (Some(TopRightQuarter), Up) => Some(TopHalf),

        (Some(BottomLeftQuarter), Right) => Some(BottomRightQuarter),
        (Some(BottomLeftQuarter), Up) => Some(TopLeftQuarter),
        (Some(BottomLeftQuarter), Left) => Some(LeftHalf),
        (Some(BottomLeftQuarter), Down) => Some(BottomHalf),

        (Some(BottomRightQuarter), Left) => Some(BottomLeftQuarter),
        (Some(BottomRightQuarter), Up) => Some(TopRightQuarter),
        (Some(BottomRightQuarter), Right) => Some(RightHalf),
        (Some(BottomRightQuarter), Down) => Some(BottomHalf),

        _ => None,
    }
}
