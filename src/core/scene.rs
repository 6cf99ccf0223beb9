use glam::Vec3;

// Static scenery dimensions. The room is a 5x3x7 shell with the stage and
// screen along the far (+z) wall and open gates in the side walls.

pub const STAGE_POSITION: Vec3 = Vec3::new(0.0, 0.2, 5.0);

pub const SCREEN_POSITION: Vec3 = Vec3::new(-0.05, 1.5, 4.0);
pub const SCREEN_RADIUS: f32 = 2.5;
pub const SCREEN_HEIGHT: f32 = 1.5;
/// Arc swept by the curved screen, a backward sweep of 0.6 turns of pi.
pub const SCREEN_ARC: f32 = -std::f32::consts::PI * 0.6;
pub const SCREEN_YAW: f32 = std::f32::consts::PI / 3.3;
pub const SCREEN_RADIAL_SEGMENTS: usize = 32;

const WALL_THICKNESS: f32 = 0.02;

// CSS color names used by the original scenery, as linear-ish RGB.
pub const COLOR_GREY: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
pub const COLOR_LIGHT_BLUE: [f32; 4] = [0.678, 0.847, 0.902, 1.0];
pub const COLOR_GATE: [f32; 4] = [0.678, 0.847, 0.902, 0.5];
pub const COLOR_DARK_GRAY: [f32; 4] = [0.663, 0.663, 0.663, 1.0];
pub const COLOR_LIGHT_GRAY: [f32; 4] = [0.827, 0.827, 0.827, 1.0];
pub const COLOR_SEAT_BODY: [f32; 4] = [0.545, 0.0, 0.0, 1.0]; // dark red
pub const COLOR_SEAT_LEG: [f32; 4] = [0.545, 0.271, 0.075, 1.0]; // saddle brown
pub const COLOR_SEAT_SELECTED: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// One axis-aligned colored box; the only primitive the scenery needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxPart {
    pub center: Vec3,
    pub size: Vec3,
    pub color: [f32; 4],
}

/// Walls, floor, ceiling, stage and stairs. Built once at scene start.
pub fn room_boxes() -> Vec<BoxPart> {
    let mut boxes = vec![
        // Floor and ceiling
        BoxPart {
            center: Vec3::new(0.0, 0.0, 2.0),
            size: Vec3::new(5.0, WALL_THICKNESS, 7.0),
            color: COLOR_GREY,
        },
        BoxPart {
            center: Vec3::new(0.0, 3.0, 0.0),
            size: Vec3::new(5.0, WALL_THICKNESS, 3.0),
            color: COLOR_GREY,
        },
        // Left wall with translucent entry gate
        BoxPart {
            center: Vec3::new(-2.5, 1.5, 0.5),
            size: Vec3::new(WALL_THICKNESS, 3.0, 2.0),
            color: COLOR_LIGHT_BLUE,
        },
        BoxPart {
            center: Vec3::new(-2.5, 1.5, -1.0),
            size: Vec3::new(WALL_THICKNESS, 3.0, 1.0),
            color: COLOR_GATE,
        },
        // Right wall with translucent exit gate
        BoxPart {
            center: Vec3::new(2.5, 1.5, 0.5),
            size: Vec3::new(WALL_THICKNESS, 3.0, 2.0),
            color: COLOR_LIGHT_BLUE,
        },
        BoxPart {
            center: Vec3::new(2.5, 1.5, -1.0),
            size: Vec3::new(WALL_THICKNESS, 3.0, 1.0),
            color: COLOR_GATE,
        },
    ];
    boxes.extend(stage_boxes(STAGE_POSITION));
    boxes
}

/// Stage slab plus the five stair steps hugging its left edge.
pub fn stage_boxes(at: Vec3) -> Vec<BoxPart> {
    let step = Vec3::new(0.4, 0.1, 0.2);
    let mut boxes = vec![BoxPart {
        center: at,
        size: Vec3::new(5.0, 0.5, 2.0),
        color: COLOR_DARK_GRAY,
    }];
    let steps = [
        Vec3::new(-1.4, 0.1, 1.0),
        Vec3::new(-1.4, 0.0, 1.2),
        Vec3::new(-1.4, -0.1, 1.3),
        Vec3::new(-1.4, -0.2, 1.3),
        Vec3::new(-1.4, -0.3, 1.4),
    ];
    for offset in steps {
        boxes.push(BoxPart {
            center: at + offset,
            size: step,
            color: COLOR_LIGHT_GRAY,
        });
    }
    boxes
}

/// Chair geometry: seat plank, four legs, back rest. Six boxes per seat.
///
/// Selected seats are drawn all white; hover brightening is applied by the
/// renderer on top of whatever this returns.
pub fn chair_boxes(position: Vec3, scale: f32, selected: bool) -> [BoxPart; 6] {
    let (body, leg) = if selected {
        (COLOR_SEAT_SELECTED, COLOR_SEAT_SELECTED)
    } else {
        (COLOR_SEAT_BODY, COLOR_SEAT_LEG)
    };
    let leg_size = Vec3::new(0.05, 0.5, 0.05) * scale;
    let leg_y = -0.25 * scale;
    let leg_xz = 0.2 * scale;
    [
        BoxPart {
            center: position,
            size: Vec3::new(0.5, 0.1, 0.5) * scale,
            color: body,
        },
        BoxPart {
            center: position + Vec3::new(leg_xz, leg_y, leg_xz),
            size: leg_size,
            color: leg,
        },
        BoxPart {
            center: position + Vec3::new(-leg_xz, leg_y, leg_xz),
            size: leg_size,
            color: leg,
        },
        BoxPart {
            center: position + Vec3::new(leg_xz, leg_y, -leg_xz),
            size: leg_size,
            color: leg,
        },
        BoxPart {
            center: position + Vec3::new(-leg_xz, leg_y, -leg_xz),
            size: leg_size,
            color: leg,
        },
        BoxPart {
            center: position + Vec3::new(0.0, 0.2 * scale, -0.25 * scale),
            size: Vec3::new(0.5, 0.4, 0.1) * scale,
            color: body,
        },
    ]
}

/// Curved-screen mesh: an open cylinder segment as a triangle strip grid,
/// with u running along the arc and v along the height.
#[derive(Clone, Debug, Default)]
pub struct ScreenMesh {
    /// Interleaved `[x, y, z, u, v]` per vertex.
    pub vertices: Vec<[f32; 5]>,
    pub indices: Vec<u16>,
}

pub fn screen_mesh() -> ScreenMesh {
    let segments = SCREEN_RADIAL_SEGMENTS;
    let mut mesh = ScreenMesh {
        vertices: Vec::with_capacity((segments + 1) * 2),
        indices: Vec::with_capacity(segments * 6),
    };
    for i in 0..=segments {
        let frac = i as f32 / segments as f32;
        let theta = SCREEN_YAW + frac * SCREEN_ARC;
        let x = SCREEN_POSITION.x + SCREEN_RADIUS * theta.sin();
        let z = SCREEN_POSITION.z + SCREEN_RADIUS * theta.cos();
        let half_h = SCREEN_HEIGHT * 0.5;
        mesh.vertices
            .push([x, SCREEN_POSITION.y + half_h, z, frac, 0.0]);
        mesh.vertices
            .push([x, SCREEN_POSITION.y - half_h, z, frac, 1.0]);
    }
    for i in 0..segments as u16 {
        let a = i * 2;
        mesh.indices
            .extend_from_slice(&[a, a + 1, a + 2, a + 2, a + 1, a + 3]);
    }
    mesh
}
