use bevy::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

pub struct RngPlugin;
impl Plugin for RngPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(GlobalRng::default());
    }
}

/// Seeded so shimmer timing is reproducible between runs.
#[derive(Resource)]
pub struct GlobalRng {
    pub uniform: Pcg64Mcg,
}

impl Default for GlobalRng {
    fn default() -> Self {
        GlobalRng {
            uniform: Pcg64Mcg::seed_from_u64(12345),
        }
    }
}
