use anyhow::{anyhow, Result};
use glam::{Vec3, Vec4};
use gltf::mesh::util::ReadIndices;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::placement::Aabb;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

pub struct Primitive {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    /// Base color factor from the primitive's material.
    pub base_color: Vec4,
}

/// CPU-side mesh decoded from the GLB, plus its model-space bounds.
pub struct MeshData {
    pub name: String,
    pub primitives: Vec<Primitive>,
    pub bounds: Aabb,
}

/// Fetch the GLB asset and decode it into a `MeshData`.
pub async fn load_model(url: &str) -> Result<MeshData> {
    let bytes = fetch_bytes(url).await?;
    decode_glb(&bytes)
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch {}: {:?}", url, e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow!("fetch {}: not a Response: {:?}", url, e))?;
    if !resp.ok() {
        return Err(anyhow!("fetch {}: HTTP {}", url, resp.status()));
    }
    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow!("array_buffer: {:?}", e))?,
    )
    .await
    .map_err(|e| anyhow!("array_buffer: {:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Decode a GLB, merging every triangle primitive of every mesh.
///
/// Missing normals fall back to +Y; missing indices fall back to sequential.
fn decode_glb(bytes: &[u8]) -> Result<MeshData> {
    let (doc, buffers, _images) = gltf::import_slice(bytes)?;

    let name = doc
        .meshes()
        .next()
        .and_then(|m| m.name().map(str::to_owned))
        .unwrap_or_else(|| "model".to_owned());

    let mut primitives = Vec::new();
    let mut bounds: Option<Aabb> = None;

    for mesh in doc.meshes() {
        for prim in mesh.primitives() {
            if prim.mode() != gltf::mesh::Mode::Triangles {
                log::warn!("skipping non-triangle primitive ({:?})", prim.mode());
                continue;
            }
            let reader = prim.reader(|b| buffers.get(b.index()).map(|bb| bb.0.as_slice()));
            let positions: Vec<[f32; 3]> = match reader.read_positions() {
                Some(it) => it.collect(),
                None => continue,
            };
            let normals: Vec<[f32; 3]> = match reader.read_normals() {
                Some(it) => it.collect(),
                None => vec![[0.0, 1.0, 0.0]; positions.len()],
            };
            let indices: Vec<u32> = match reader.read_indices() {
                Some(ReadIndices::U8(it)) => it.map(u32::from).collect(),
                Some(ReadIndices::U16(it)) => it.map(u32::from).collect(),
                Some(ReadIndices::U32(it)) => it.collect(),
                None => (0..positions.len() as u32).collect(),
            };

            let prim_bounds = Aabb::from_points(positions.iter().copied().map(Vec3::from));
            bounds = match (bounds, prim_bounds) {
                (Some(a), Some(b)) => Some(Aabb {
                    min: a.min.min(b.min),
                    max: a.max.max(b.max),
                }),
                (a, b) => a.or(b),
            };

            let base_color =
                Vec4::from(prim.material().pbr_metallic_roughness().base_color_factor());

            let vertices = positions
                .iter()
                .zip(normals.iter())
                .map(|(p, n)| Vertex {
                    position: *p,
                    normal: *n,
                })
                .collect();

            primitives.push(Primitive {
                vertices,
                indices,
                base_color,
            });
        }
    }

    let bounds = bounds.ok_or_else(|| anyhow!("no geometry in GLB"))?;
    if primitives.is_empty() {
        return Err(anyhow!("no triangle primitives in GLB"));
    }

    Ok(MeshData {
        name,
        primitives,
        bounds,
    })
}
