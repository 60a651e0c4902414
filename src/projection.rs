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


use nalgebra::Orthographic3;
use crate::scene::HALF_HEIGHT;

pub const Z_NEAR: f32 = -1.0;
pub const Z_FAR: f32 = 1.0;

/// Width over height, or 1.0 for an empty framebuffer.
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    if height > 0 {
        width as f32 / height as f32
    } else {
        1.0
    }
}

/// An orthographic box that always shows the full vertical range
/// [-HALF_HEIGHT, HALF_HEIGHT]. Only the horizontal range follows the
/// shape of the window.
pub fn orthographic(width: u32, height: u32) -> Orthographic3<f32> {
    let half_width = aspect_ratio(width, height) * HALF_HEIGHT;

    Orthographic3::new(
        -half_width,
        half_width,
        -HALF_HEIGHT,
        HALF_HEIGHT,
        Z_NEAR,
        Z_FAR,
    )
}
