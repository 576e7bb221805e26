//! Movement domain: ground and wall detection systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ContactSensors, GameLayer, Player, WallContact};

/// Extra ray length past the collider edge.
const PROBE_DISTANCE: f32 = 4.0;

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut ContactSensors), With<Player>>,
) {
    // Filter to only hit Ground layer entities (not enemies, coins, etc.)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut sensors) in &mut query {
        let was_grounded = sensors.grounded;

        // Cast a short ray downward from the feet
        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 24.0,
        };

        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, half_height);
        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            PROBE_DISTANCE,
            true,
            &ground_filter,
        );

        sensors.grounded = hit.is_some();

        if sensors.grounded != was_grounded {
            debug!("Ground contact changed: grounded={}", sensors.grounded);
        }
    }
}

pub(crate) fn detect_walls(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut ContactSensors), With<Player>>,
) {
    // Filter to only hit Wall layer entities
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Wall);

    for (transform, collider, mut sensors) in &mut query {
        let half_width = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.x,
            None => 12.0,
        };

        let origin = transform.translation.truncate();
        let reach = half_width + PROBE_DISTANCE;

        let left_hit = spatial_query.cast_ray(origin, Dir2::NEG_X, reach, true, &wall_filter);
        let right_hit = spatial_query.cast_ray(origin, Dir2::X, reach, true, &wall_filter);

        sensors.wall = match (left_hit.is_some(), right_hit.is_some()) {
            (true, false) => WallContact::Left,
            (false, true) => WallContact::Right,
            // Wedged between two walls still counts as touching.
            (true, true) => WallContact::Left,
            (false, false) => WallContact::None,
        };
    }
}
