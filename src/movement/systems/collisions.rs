//! Movement domain: keeps the registered hitbox in step with the bounding box.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{CollisionResolver, Player, PlayerHitbox};

pub(crate) fn sync_hitbox_shape(
    mut players: Query<(&mut CollisionResolver, &Children), With<Player>>,
    mut hitboxes: Query<(&mut Collider, &mut Transform), (With<PlayerHitbox>, Without<Player>)>,
) {
    for (mut resolver, children) in &mut players {
        if !resolver.take_shape_changed() {
            continue;
        }

        let bounds = *resolver.bounds();
        for child in children.to_vec() {
            let Ok((mut collider, mut transform)) = hitboxes.get_mut(child) else {
                continue;
            };
            *collider = Collider::rectangle(bounds.size().x, bounds.size().y);
            transform.translation.x = bounds.offset().x;
            transform.translation.y = bounds.offset().y;
        }
    }
}
