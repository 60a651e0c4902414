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


pub struct WindowConfig {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
    pub gl_major_version: u8,
    pub gl_minor_version: u8,
}

impl Default for WindowConfig {
    fn default() -> WindowConfig {
        WindowConfig {
            title: "Colored Squares",
            width: 1200,
            height: 700,
            min_width: 400,
            min_height: 300,
            // The shaders are written for GLSL 4.50
            gl_major_version: 4,
            gl_minor_version: 6,
        }
    }
}
