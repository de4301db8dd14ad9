//! Movement domain: the system that ticks every controlled character.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::collisions::AvianProbe;
use crate::movement::{
    ControllerTuning, Dead, LocomotionChanged, MovementInput, MovementState, Player, TickContext,
};

/// Tick each player's controller and hand the result to its rigid body.
///
/// The written velocity replaces whatever the body carried into the frame.
pub(crate) fn advance_controllers(
    time: Res<Time>,
    real_time: Res<Time<Real>>,
    input: Res<MovementInput>,
    controller: Res<ControllerTuning>,
    spatial_query: SpatialQuery,
    mut changes: MessageWriter<LocomotionChanged>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &mut MovementState,
            &mut LinearVelocity,
            Has<Dead>,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let now = real_time.elapsed_secs_f64();

    for (entity, transform, mut state, mut velocity, dead) in &mut query {
        if dead && !state.is_dead {
            state.kill();
            info!("Player {:?} died; motion frozen", entity);
        }

        let ctx = TickContext {
            dt,
            now,
            input: *input,
            position: transform.translation.truncate(),
        };
        let probe = AvianProbe::new(&spatial_query, entity);
        let outcome = state.tick(&ctx, &controller, &probe);

        velocity.0 = outcome.velocity;

        if let Some((from, to)) = outcome.transition {
            debug!("Locomotion {:?}: {:?} -> {:?}", entity, from, to);
            changes.write(LocomotionChanged { entity, from, to });
        }
    }
}
