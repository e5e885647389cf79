//! Assembles the 3D rack scene: uprights and beams for every rack row plus
//! the optional address and level labels.

use glam::Vec3;

use crate::config::{RackAddressing, WarehouseParams};
use crate::constants::*;
use crate::error::Result;
use crate::geometry::{BoxMesh, Bounds, TriangleMesh, Triangulation};
use crate::layout::{bay_boundaries, bays, beam_bands, generate_rack_rows, Rack};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneVariant {
    /// Structure plus bay address and level labels.
    Labeled,
    /// Structure only.
    Plain,
}

impl SceneVariant {
    pub fn title(self) -> &'static str {
        match self {
            SceneVariant::Labeled => "Warehouse Racking System with Address Labels",
            SceneVariant::Plain => "Warehouse Racking System with 18-inch Separation",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberKind {
    Upright,
    Beam,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RackFace {
    Front,
    Back,
}

/// One structural member as an axis-aligned box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Member {
    pub kind: MemberKind,
    pub rack_id: u32,
    pub face: RackFace,
    pub bounds: Bounds,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelKind {
    BayAddress,
    LevelName,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneLabel {
    pub kind: LabelKind,
    pub position: Vec3,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MemberStyle {
    pub rgb: [f32; 3],
    pub opacity: f32,
}

impl MemberStyle {
    #[inline]
    pub fn rgba(&self) -> [f32; 4] {
        [self.rgb[0], self.rgb[1], self.rgb[2], self.opacity]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneStyle {
    pub upright: MemberStyle,
    pub beam: MemberStyle,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            upright: MemberStyle {
                rgb: UPRIGHT_RGB,
                opacity: UPRIGHT_OPACITY,
            },
            beam: MemberStyle {
                rgb: BEAM_RGB,
                opacity: BEAM_OPACITY,
            },
        }
    }
}

impl SceneStyle {
    pub fn for_kind(&self, kind: MemberKind) -> &MemberStyle {
        match kind {
            MemberKind::Upright => &self.upright,
            MemberKind::Beam => &self.beam,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RackScene {
    pub variant: SceneVariant,
    pub racks: Vec<Rack>,
    pub members: Vec<Member>,
    pub labels: Vec<SceneLabel>,
}

pub const AXIS_TITLES: [&str; 3] = [
    "Depth (X, inches)",
    "Width along Aisle (Y, inches)",
    "Height (Z, inches)",
];

impl RackScene {
    pub fn title(&self) -> &'static str {
        self.variant.title()
    }

    pub fn members_of(&self, kind: MemberKind) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(move |m| m.kind == kind)
    }

    /// Bounds of every member, or `None` for an empty scene.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut it = self.members.iter().map(|m| m.bounds);
        let first = it.next()?;
        Some(it.fold(first, |acc, b| acc.union(&b)))
    }

    /// Flatten all members into one colored triangle mesh.
    pub fn mesh(&self, style: &SceneStyle, triangulation: Triangulation) -> TriangleMesh {
        let mut mesh = TriangleMesh::with_capacity(self.members.len(), triangulation);
        for m in &self.members {
            mesh.push_box(
                &BoxMesh::from(&m.bounds),
                style.for_kind(m.kind).rgba(),
                triangulation,
            );
        }
        mesh
    }
}

/// Generate the full scene for `params`.
pub fn build_scene(
    params: &WarehouseParams,
    addressing: &RackAddressing,
    variant: SceneVariant,
) -> Result<RackScene> {
    let racks = generate_rack_rows(params)?;
    let boundaries = bay_boundaries(params.bays_per_row, params.bay_width);
    let bands = beam_bands(params);
    let t = params.beam_thickness;
    let row_len = params.row_length();

    let mut members =
        Vec::with_capacity(racks.len() * 2 * (boundaries.len() + bands.len()));
    for rack in &racks {
        let faces = [
            (RackFace::Front, rack.front_span(t)),
            (RackFace::Back, rack.back_span(t)),
        ];
        for &y in &boundaries {
            for &(face, (x0, x1)) in &faces {
                members.push(Member {
                    kind: MemberKind::Upright,
                    rack_id: rack.id,
                    face,
                    bounds: Bounds::new(
                        x0,
                        x1,
                        y - params.upright_half_width,
                        y + params.upright_half_width,
                        0.0,
                        params.rack_height,
                    ),
                });
            }
        }
        for band in &bands {
            for &(face, (x0, x1)) in &faces {
                members.push(Member {
                    kind: MemberKind::Beam,
                    rack_id: rack.id,
                    face,
                    bounds: Bounds::new(x0, x1, 0.0, row_len, band.z_bottom, band.z_top),
                });
            }
        }
    }

    let labels = match variant {
        SceneVariant::Labeled => place_labels(params, addressing, &racks)?,
        SceneVariant::Plain => Vec::new(),
    };

    log::debug!(
        "built {:?} scene: {} racks, {} members, {} labels",
        variant,
        racks.len(),
        members.len(),
        labels.len()
    );
    Ok(RackScene {
        variant,
        racks,
        members,
        labels,
    })
}

/// Bay address labels on every rack front, plus level names on the two end racks.
pub fn place_labels(
    params: &WarehouseParams,
    addressing: &RackAddressing,
    racks: &[Rack],
) -> Result<Vec<SceneLabel>> {
    let mut labels = Vec::new();
    for rack in racks {
        let address = addressing.lookup(rack.id)?;
        let x = rack.front_x();
        for bay in bays(params.bays_per_row, params.bay_width) {
            labels.push(SceneLabel {
                kind: LabelKind::BayAddress,
                position: Vec3::new(x, bay.center_y(), BAY_LABEL_Z),
                text: address.bay_code(bay.number),
            });
        }
        if rack.single_sided {
            for level in &params.levels {
                labels.push(SceneLabel {
                    kind: LabelKind::LevelName,
                    position: Vec3::new(x, LEVEL_LABEL_Y, level.elevation + LEVEL_LABEL_LIFT),
                    text: format!("Level {}", level.name),
                });
            }
        }
    }
    Ok(labels)
}
