//! Character domain: spawning the character and building its visual.

use bevy::prelude::*;

use crate::character::systems::begin_fall;
use crate::character::{Character, CharacterSize, MotionState, StagePosition};
use crate::config::{CharacterShape, WidgetConfig};
use crate::stage::StageLayout;

const BODY_COLOR: Color = Color::srgb(1.0, 0.843, 0.0);
const OUTLINE_COLOR: Color = Color::srgb(1.0, 0.784, 0.0);
const EYE_COLOR: Color = Color::BLACK;

/// Star outline in a 24x24 box, top-left origin, clockwise on screen.
const STAR_POINTS: [(f32, f32); 10] = [
    (12.0, 2.0),
    (15.09, 8.26),
    (22.0, 9.27),
    (17.0, 14.14),
    (18.18, 21.02),
    (12.0, 17.77),
    (5.82, 21.02),
    (7.0, 14.14),
    (2.0, 9.27),
    (8.91, 8.26),
];
/// Centroid of the star's inner pentagon, the fan origin for triangulation.
const STAR_CENTER: (f32, f32) = (12.0, 12.51);
const EYE_CENTER: (f32, f32) = (9.0, 10.0);
const EYE_RADIUS: f32 = 1.0;
const SHAPE_BOX: f32 = 24.0;
const OUTLINE_SCALE: f32 = 1.04;

pub(crate) fn spawn_character(
    mut commands: Commands,
    config: Res<WidgetConfig>,
    layout: Res<StageLayout>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let size = Vec2::splat(config.character_size);
    let (state, position) = initial_motion(&layout, &config, size);

    let body = materials.add(BODY_COLOR);
    let outline = materials.add(OUTLINE_COLOR);
    let eye = materials.add(EYE_COLOR);
    let scale = config.character_size / SHAPE_BOX;

    commands
        .spawn((
            Character,
            state,
            StagePosition(position),
            CharacterSize(size),
            Transform::default(),
            Visibility::default(),
        ))
        .with_children(|parent| {
            let parts = shape_meshes(config.shape, scale, &mut meshes, &body, &outline);
            for (mesh, material, z) in parts {
                parent.spawn((
                    Mesh2d(mesh),
                    MeshMaterial2d(material),
                    Transform::from_xyz(0.0, 0.0, z),
                ));
            }

            parent.spawn((
                Mesh2d(meshes.add(Circle::new(EYE_RADIUS * scale))),
                MeshMaterial2d(eye),
                Transform::from_translation(box_to_local(EYE_CENTER, scale).extend(0.2)),
            ));
        });

    info!("Spawned {:?} character, {}x{}", config.shape, size.x, size.y);
}

/// Starting state: top-left corner of the stage, already falling to the floor
/// when the stage has been measured.
pub(crate) fn initial_motion(
    layout: &StageLayout,
    config: &WidgetConfig,
    size: Vec2,
) -> (MotionState, Vec2) {
    let mut state = MotionState::default();
    let position = Vec2::ZERO;

    if let Some(stage) = layout.size() {
        begin_fall(&mut state, position, size, stage, config);
    }
    (state, position)
}

/// Map a point from the 24-unit shape box (y down) to centered local space (y up).
fn box_to_local(point: (f32, f32), scale: f32) -> Vec2 {
    let half = SHAPE_BOX * 0.5;
    Vec2::new(point.0 - half, half - point.1) * scale
}

/// Star as a triangle fan around its center.
pub(crate) fn star_triangles(scale: f32) -> Vec<Triangle2d> {
    let center = box_to_local(STAR_CENTER, scale);
    (0..STAR_POINTS.len())
        .map(|i| {
            let a = box_to_local(STAR_POINTS[i], scale);
            let b = box_to_local(STAR_POINTS[(i + 1) % STAR_POINTS.len()], scale);
            Triangle2d::new(center, b, a)
        })
        .collect()
}

fn shape_meshes(
    shape: CharacterShape,
    scale: f32,
    meshes: &mut Assets<Mesh>,
    body: &Handle<ColorMaterial>,
    outline: &Handle<ColorMaterial>,
) -> Vec<(Handle<Mesh>, Handle<ColorMaterial>, f32)> {
    let extent = (SHAPE_BOX - 4.0) * scale;

    match shape {
        CharacterShape::Star => {
            let mut parts: Vec<_> = star_triangles(scale * OUTLINE_SCALE)
                .into_iter()
                .map(|tri| (meshes.add(tri), outline.clone(), 0.0))
                .collect();
            parts.extend(
                star_triangles(scale)
                    .into_iter()
                    .map(|tri| (meshes.add(tri), body.clone(), 0.1)),
            );
            parts
        }
        CharacterShape::Circle => vec![
            (
                meshes.add(Circle::new(extent * 0.5 * OUTLINE_SCALE)),
                outline.clone(),
                0.0,
            ),
            (meshes.add(Circle::new(extent * 0.5)), body.clone(), 0.1),
        ],
        CharacterShape::Square => vec![
            (
                meshes.add(Rectangle::from_length(extent * OUTLINE_SCALE)),
                outline.clone(),
                0.0,
            ),
            (meshes.add(Rectangle::from_length(extent)), body.clone(), 0.1),
        ],
    }
}
