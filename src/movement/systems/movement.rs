//! Movement domain: controller attachment, the physics tick, and transform sync.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::systems::collisions::AvianCollisionQuery;
use crate::movement::{
    DirectionalFilters, MovementController, MovementError, MovementInput, MovementTuning, Player,
    StateLoopEvent, StateSwitchEvent,
};

/// Builds a controller for every player that lacks one. A player without a
/// box collider cannot move and is treated as a fatal setup error.
pub(crate) fn attach_movement_controllers(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    players: Query<
        (Entity, &Transform, Option<&Collider>),
        (With<Player>, Without<MovementController>),
    >,
) -> Result {
    for (entity, transform, collider) in &players {
        let collider = collider.ok_or(MovementError::MissingBodyShape)?;
        let controller = MovementController::new(tuning.clone(), collider)?
            .with_position(transform.translation.truncate());

        info!(
            "Attached movement controller: entity={:?}, half_extents={}, state={:?}",
            entity,
            controller.half_extents(),
            controller.state()
        );

        commands.entity(entity).insert(controller);
    }

    Ok(())
}

/// One fixed-timestep tick for every controlled player.
///
/// All players share one `MovementInput`; the first tick consumes the jump edge.
#[allow(clippy::too_many_arguments)]
pub(crate) fn run_movement_tick(
    time: Res<Time>,
    input: Option<ResMut<MovementInput>>,
    filters: Res<DirectionalFilters>,
    spatial_query: SpatialQuery,
    frictions: Query<&Friction>,
    mut players: Query<(Entity, &Transform, &Collider, &mut MovementController), With<Player>>,
    mut switch_events: MessageWriter<StateSwitchEvent>,
    mut loop_events: MessageWriter<StateLoopEvent>,
) -> Result {
    let Some(mut input) = input else {
        error!("Movement tick ran without a MovementInput resource");
        return Err(MovementError::MissingInputSource.into());
    };

    let dt = time.delta_secs();
    let friction_of =
        |entity: Entity| frictions.get(entity).map_or(0.0, |f| f.dynamic_coefficient);

    for (entity, transform, collider, mut controller) in &mut players {
        controller.refresh_extents(collider)?;
        let world = AvianCollisionQuery::new(&spatial_query, &filters, &friction_of, entity);
        let outcome = controller.tick(transform.translation.truncate(), &mut *input, &world, dt)?;

        for switch in outcome.switches {
            switch_events.write(StateSwitchEvent {
                entity,
                previous: switch.previous,
                next: switch.next,
            });
        }

        loop_events.write(StateLoopEvent {
            entity,
            state: outcome.state,
        });
    }

    Ok(())
}

/// Pushes the simulated position to the transform on the visual cadence.
pub(crate) fn sync_transforms(mut players: Query<(&MovementController, &mut Transform), With<Player>>) {
    for (controller, mut transform) in &mut players {
        let position = controller.position();
        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}
