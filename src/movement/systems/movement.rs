//! Movement domain: per-frame motor update for the player.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    AvianWorld, CharacterMotor, CollisionResolver, MotorTuning, MovementInput, Player, Tick,
};

pub(crate) fn drive_motor(
    time: Res<Time>,
    gravity: Res<Gravity>,
    input: Res<MovementInput>,
    tuning: Res<MotorTuning>,
    spatial_query: SpatialQuery,
    sensors: Query<(), With<Sensor>>,
    mut query: Query<
        (
            Entity,
            &mut Transform,
            &mut CollisionResolver,
            &mut CharacterMotor,
            &CollisionLayers,
            Option<&Children>,
        ),
        With<Player>,
    >,
) {
    let tick = Tick {
        now: time.elapsed_secs(),
        dt: time.delta_secs(),
        gravity: gravity.0,
    };

    for (entity, mut transform, mut resolver, mut motor, layers, children) in &mut query {
        let own_entities =
            std::iter::once(entity).chain(children.map(|c| c.to_vec()).unwrap_or_default());
        let world = AvianWorld::new(&spatial_query, &sensors, layers, own_entities);

        let mut position = transform.translation.truncate();
        motor.tick(&mut resolver, &mut position, &input, &tuning, &tick, &world);

        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}
