/// Cosmetic tag the host can map to a material; no gameplay effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleTint {
    Yellow,
    Orange,
    Violet,
}

impl ObstacleTint {
    pub const ALL: [ObstacleTint; 3] = [ObstacleTint::Yellow, ObstacleTint::Orange, ObstacleTint::Violet];
}

/// One obstacle on the track. Positions are the footprint center:
/// `lateral` on the side-to-side axis, `forward` along the direction of
/// travel (same scale as the player's distance counter).
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub lateral: f32,
    pub forward: f32,
    pub tint: ObstacleTint,
}

impl Obstacle {
    pub fn new(lateral: f32, forward: f32, tint: ObstacleTint) -> Self {
        Self { lateral, forward, tint }
    }
}
