use bevy::math::primitives::Sphere;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::animation::engine::ConnectionState;
use crate::animation::integrator::{advance, point_size};
use crate::animation::sampler::Shape;
use crate::animation::scenario::Scenario;
use crate::tension::source::pointer_to_tension;

/// Component tagging each point with its particle index into
/// Scenario.field.render
#[derive(Component)]
struct ParticleIndex(pub usize);

/// Shared handles for the particle points; one material for all of them so a
/// color change is a single asset write
#[derive(Resource)]
struct ParticleAssets {
    material: Handle<StandardMaterial>,
}

/// Simulation-space → screen-space scaling factor for positions and sizes
const SCALE: f32 = 50.0;

/// Distance of the camera from the origin along +Z
const CAMERA_DISTANCE: f32 = 450.0;

/// Convenience entrypoint: build the Bevy app around a prepared scenario
///
/// The frame loop is created exactly once here. Shape, color and tension all
/// flow through the `Scenario` resource, so nothing about the loop is ever
/// torn down or rebuilt when they change
pub fn run_viewer(scenario: Scenario) {
    println!(
        "run_viewer: starting with {} particles ({} palette colors)",
        scenario.field.len(),
        scenario.palette.len()
    );

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (handle_input, pointer_tension, animate_step, sync_transforms).chain(),
        )
        .run();
}

/// Startup system: spawn camera, the shared point assets, and one entity per
/// particle
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scenario: Res<Scenario>,
) {
    // Camera looking at the origin over a pure black background
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)),
            ..Default::default()
        },
        transform: Transform::from_xyz(0.0, 0.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    // One unit-sphere mesh shared by every particle; per-frame size changes
    // go through Transform::scale, not the mesh
    let mesh = meshes.add(Sphere::new(1.0).mesh());

    let [r, g, b] = scenario.palette.first().copied().unwrap_or([1.0, 1.0, 1.0]);
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(r, g, b),
        unlit: true,
        ..Default::default()
    });

    for (i, p) in scenario.field.render.iter().enumerate() {
        commands.spawn((
            PbrBundle {
                mesh: mesh.clone(),
                material: material.clone(),
                transform: Transform::from_xyz(
                    (p.x as f32) * SCALE,
                    (p.y as f32) * SCALE,
                    (p.z as f32) * SCALE,
                ),
                ..Default::default()
            },
            ParticleIndex(i),
        ));
    }

    commands.insert_resource(ParticleAssets { material });
}

/// Per-frame animation step: pump the remote link, then relax + compose
fn animate_step(mut scenario: ResMut<Scenario>, time: Res<Time>) {
    let Scenario {
        parameters,
        engine,
        field,
        ..
    } = &mut *scenario;

    let t = time.elapsed_seconds_f64();

    // Remote report delivery happens here, between render ticks — the
    // per-particle loop below only ever sees the final clamped scalar
    engine.tick(t);

    advance(field, t, engine.tension(), parameters);
}

/// Copy the render buffer into entity transforms and apply the
/// tension-driven point size
fn sync_transforms(
    scenario: Res<Scenario>,
    mut query: Query<(&ParticleIndex, &mut Transform)>,
) {
    let size = point_size(scenario.engine.tension(), &scenario.parameters) as f32 * SCALE;

    for (ParticleIndex(i), mut transform) in &mut query {
        if let Some(p) = scenario.field.render.get(*i) {
            transform.translation = Vec3::new(
                (p.x as f32) * SCALE,
                (p.y as f32) * SCALE,
                (p.z as f32) * SCALE,
            );
            transform.scale = Vec3::splat(size);
        }
    }
}

/// Pointer fallback: vertical cursor position → tension while disconnected
fn pointer_tension(
    mut scenario: ResMut<Scenario>,
    mut cursor: EventReader<CursorMoved>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let height = window.height() as f64;

    for ev in cursor.read() {
        let t = pointer_to_tension(ev.position.y as f64, height);
        scenario.engine.pointer_moved(t);
    }
}

/// Keyboard input: digits select shapes, C cycles the palette, Space toggles
/// the remote session
fn handle_input(
    mut scenario: ResMut<Scenario>,
    keys: Res<ButtonInput<KeyCode>>,
    assets: Option<Res<ParticleAssets>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    const SHAPE_KEYS: [(KeyCode, Shape); 6] = [
        (KeyCode::Digit1, Shape::Sphere),
        (KeyCode::Digit2, Shape::Heart),
        (KeyCode::Digit3, Shape::Flower),
        (KeyCode::Digit4, Shape::Saturn),
        (KeyCode::Digit5, Shape::Buddha),
        (KeyCode::Digit6, Shape::Fireworks),
    ];

    let Scenario {
        engine,
        field,
        palette,
        ..
    } = &mut *scenario;

    for (key, shape) in SHAPE_KEYS {
        if keys.just_pressed(key) {
            engine.set_shape(shape, field);
        }
    }

    if keys.just_pressed(KeyCode::KeyC) {
        engine.cycle_color(palette.len());
        if let (Some(assets), Some([r, g, b])) =
            (assets.as_ref(), palette.get(engine.color_index).copied())
        {
            if let Some(mat) = materials.get_mut(&assets.material) {
                mat.base_color = Color::srgb(r, g, b);
            }
        }
    }

    if keys.just_pressed(KeyCode::Space) {
        match engine.connection {
            ConnectionState::Connected | ConnectionState::Connecting => {
                engine.disconnect();
                info!("remote session disconnected; pointer mode restored");
            }
            ConnectionState::Disconnected => {
                // This build ships without a production vision backend; the
                // connect path is exercised through injected sessions. Keep
                // the notice honest instead of pretending to connect
                if engine.has_credential() {
                    info!("no vision backend in this build; staying in pointer mode");
                } else {
                    info!("no API credential configured; staying in pointer mode");
                }
            }
        }
    }
}
