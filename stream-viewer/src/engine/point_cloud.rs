use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::view::NoFrustumCulling;
use frame_codec::RenderableAttributes;

#[derive(Component)]
pub struct PointCloud;

/// Single owner of the most recently normalised frame.
///
/// Written only by the ingest system, read by the upload system; a new frame
/// always replaces the snapshot whole, so a redraw can never observe a
/// half-updated cloud.
#[derive(Resource, Default)]
pub struct RenderState {
    pub attributes: RenderableAttributes,
    pub point_count: usize,
    pub frames_received: u64,
    pub dirty: bool,
}

impl RenderState {
    /// Install a freshly normalised frame, replacing the previous one.
    pub fn install_frame(&mut self, attributes: RenderableAttributes, point_count: usize) {
        self.attributes = attributes;
        self.point_count = point_count;
        self.frames_received += 1;
        self.dirty = true;
    }
}

/// Spawn the streamed cloud as a single point-list entity.
///
/// The material is unlit with vertex colors and the reference viewer's 0.8
/// opacity. Frustum culling is off: the cloud is rebuilt every frame and its
/// extents move with the stream.
pub fn spawn_point_cloud(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let mesh = create_stream_mesh(&RenderableAttributes::default());
    let material = StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, 0.8),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    };

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(material)),
        Transform::default(),
        PointCloud,
        NoFrustumCulling,
    ));
}

pub fn create_stream_mesh(attributes: &RenderableAttributes) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, attributes.positions.clone());
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, color_attribute(attributes));
    mesh
}

/// Expand RGB triples to the RGBA vertex colors the mesh pipeline expects.
fn color_attribute(attributes: &RenderableAttributes) -> Vec<[f32; 4]> {
    attributes
        .colors
        .iter()
        .map(|[r, g, b]| [*r, *g, *b, 1.0])
        .collect()
}

/// Push the latest snapshot into the mesh, replacing both attribute arrays.
pub fn upload_point_cloud(
    mut state: ResMut<RenderState>,
    mut meshes: ResMut<Assets<Mesh>>,
    query: Query<&Mesh3d, With<PointCloud>>,
) {
    if !state.dirty {
        return;
    }

    for mesh_handle in &query {
        if let Some(mesh) = meshes.get_mut(&mesh_handle.0) {
            mesh.insert_attribute(
                Mesh::ATTRIBUTE_POSITION,
                state.attributes.positions.clone(),
            );
            mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, color_attribute(&state.attributes));
            state.dirty = false;
        }
    }
}
