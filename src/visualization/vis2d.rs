use bevy::app::AppExit;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use crate::simulation::scenario::Scenario;
use crate::simulation::states::TRACKED;

#[derive(Component)]
struct ParticleIndex(pub usize);

// Chamber units are already screen pixels
const SCALE: f32 = 1.0;

/// Run the Bevy 2D viewer over a built scenario: step the physics with the
/// real frame delta, draw the discs (tracked one red), and print the session
/// report once the observation window is exhausted.
pub fn run_2d(scenario: Scenario) {
    println!(
        "run_2d: starting Bevy 2D viewer with {} particles",
        scenario.gas.len()
    );

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_particles_system)
        .add_systems(
            Update,
            (physics_step_system, sync_transforms_system, session_end_system),
        )
        .run();
}

/// World-space offset putting the chamber center at the camera origin.
fn view_center(scenario: &Scenario) -> (f32, f32) {
    let b = &scenario.boundary;
    (
        ((b.left + b.right) / 2.0) as f32,
        ((b.lower + b.upper) / 2.0) as f32,
    )
}

fn setup_particles_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    let (cx, cy) = view_center(&scenario);
    let tracked_material = materials.add(ColorMaterial::from(Color::rgb(0.89, 0.0, 0.13)));
    let other_material = materials.add(ColorMaterial::from(Color::WHITE));

    for (i, p) in scenario.gas.particles.iter().enumerate() {
        let radius_screen = p.radius as f32 * SCALE;
        let x = (p.x.x as f32 - cx) * SCALE;
        let y = (p.x.y as f32 - cy) * SCALE;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: if i == TRACKED {
                    tracked_material.clone()
                } else {
                    other_material.clone()
                },
                transform: Transform::from_xyz(x, y, 0.0),
                ..Default::default()
            },
            ParticleIndex(i),
        ));
    }
}

fn physics_step_system(time: Res<Time>, mut scenario: ResMut<Scenario>) {
    let dt = time.delta_seconds() as f64;

    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        boundary,
        gas,
        stepper,
        stats,
        ..
    } = &mut *scenario;

    stepper.step(gas, boundary, stats, dt);
}

fn sync_transforms_system(
    scenario: Res<Scenario>,
    mut query: Query<(&ParticleIndex, &mut Transform)>,
) {
    let (cx, cy) = view_center(&scenario);
    for (ParticleIndex(i), mut transform) in &mut query {
        if let Some(p) = scenario.gas.particles.get(*i) {
            transform.translation.x = (p.x.x as f32 - cx) * SCALE;
            transform.translation.y = (p.x.y as f32 - cy) * SCALE;
        }
    }
}

fn session_end_system(
    scenario: Res<Scenario>,
    mut reported: Local<bool>,
    mut exit: EventWriter<AppExit>,
) {
    if scenario.stepper.finished() && !*reported {
        *reported = true;
        println!("{}", scenario.stats.report());
        exit.send(AppExit);
    }
}
