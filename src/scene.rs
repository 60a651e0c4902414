// Colored Squares – A pyramid of colored squares
// Copyright (C) 2023  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.


//! The fixed layout of the scene: a grey ground strip with a 4-3-1
//! pyramid of coloured squares standing on it.
//!
//! Every quad reuses the same unit square which lies in the XZ plane. A
//! rotation of -90° about the X axis stands it up in the XY plane so that
//! it faces the camera.

use nalgebra::{Matrix4, Vector3};
use std::f32::consts::FRAC_PI_2;

// Vertical half-size of the orthographic box
pub const HALF_HEIGHT: f32 = 3.0;
// Thickness of the ground strip
pub const GROUND_HEIGHT: f32 = 0.35;
pub const GROUND_WIDTH: f32 = 10.0;
// Height of a square in XY after rotation
pub const SQUARE_SIZE: f32 = 1.0;
// Gap between the top of the ground and the bottom of the base row
pub const GROUND_GAP: f32 = 0.32;
pub const INTER_ROW_GAP: f32 = 0.0;
// Moves the whole pyramid up or down together
pub const PYRAMID_OFFSET_Y: f32 = 0.0;

pub const GROUND_TOP_Y: f32 = -HALF_HEIGHT + GROUND_HEIGHT;
pub const BASE_ROW_Y: f32 =
    GROUND_TOP_Y + SQUARE_SIZE * 0.5 + GROUND_GAP + PYRAMID_OFFSET_Y;
pub const SECOND_ROW_Y: f32 = BASE_ROW_Y + SQUARE_SIZE + INTER_ROW_GAP;
pub const APEX_ROW_Y: f32 = SECOND_ROW_Y + SQUARE_SIZE + INTER_ROW_GAP;

// Turns the XZ unit square so that it faces forward
pub const FACE_FORWARD: f32 = -FRAC_PI_2;

pub const N_QUADS: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneQuad {
    pub translation: [f32; 3],
    // Angle in radians about the X axis
    pub rotation: f32,
    pub scale: [f32; 3],
    pub color: [f32; 4],
}

impl SceneQuad {
    const fn square(x: f32, y: f32, color: [f32; 4]) -> SceneQuad {
        SceneQuad {
            translation: [x, y, 0.0],
            rotation: FACE_FORWARD,
            scale: [SQUARE_SIZE, SQUARE_SIZE, SQUARE_SIZE],
            color,
        }
    }

    /// The model matrix T · R · S, ie. the square is scaled first, then
    /// rotated and then translated.
    pub fn model_matrix(&self) -> Matrix4<f32> {
        Matrix4::new_translation(&Vector3::from(self.translation))
            * Matrix4::from_axis_angle(&Vector3::x_axis(), self.rotation)
            * Matrix4::new_nonuniform_scaling(&Vector3::from(self.scale))
    }
}

/// Everything that gets drawn, in drawing order.
pub static SCENE_LAYOUT: [SceneQuad; N_QUADS] = [
    // The scale happens before the rotation, while the square is still
    // flat in XZ, so GROUND_HEIGHT scales the zero-thickness axis and the
    // strip comes out one unit tall.
    SceneQuad {
        translation: [0.0, -HALF_HEIGHT + GROUND_HEIGHT * 0.5, 0.0],
        rotation: FACE_FORWARD,
        scale: [GROUND_WIDTH, GROUND_HEIGHT, 1.0],
        color: [0.55, 0.55, 0.55, 1.0],
    },
    SceneQuad::square(-1.5, BASE_ROW_Y, [1.0, 0.2, 0.2, 1.0]),
    SceneQuad::square(-0.5, BASE_ROW_Y, [0.2, 1.0, 0.2, 1.0]),
    SceneQuad::square(0.5, BASE_ROW_Y, [0.2, 0.6, 1.0, 1.0]),
    SceneQuad::square(1.5, BASE_ROW_Y, [1.0, 0.6, 0.2, 1.0]),
    SceneQuad::square(-1.0, SECOND_ROW_Y, [0.8, 0.2, 1.0, 1.0]),
    SceneQuad::square(0.0, SECOND_ROW_Y, [1.0, 0.9, 0.2, 1.0]),
    SceneQuad::square(1.0, SECOND_ROW_Y, [0.2, 1.0, 0.8, 1.0]),
    SceneQuad::square(0.0, APEX_ROW_Y, [0.9, 0.3, 0.4, 1.0]),
];
