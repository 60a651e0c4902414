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


use std::rc::Rc;
use nalgebra::Matrix4;
use crate::gl::Gl;
use crate::resources::{Resources, N_SQUARE_VERTICES};
use crate::scene::{SceneQuad, SCENE_LAYOUT};
use crate::projection;

pub const CLEAR_COLOR: [f32; 4] = [0.10, 0.10, 0.12, 1.0];

pub struct ScenePainter<G: Gl> {
    gl: Rc<G>,
    resources: Resources<G>,
    projection: Matrix4<f32>,
    // The camera never moves
    view: Matrix4<f32>,
    width: u32,
    height: u32,
    viewport_dirty: bool,
}

impl<G: Gl> ScenePainter<G> {
    /// Sets up the fixed GL state and builds the GPU resources. The
    /// context must be current.
    pub fn new(gl: Rc<G>) -> ScenePainter<G> {
        gl.disable(glow::DEPTH_TEST);
        gl.clear_color(
            CLEAR_COLOR[0],
            CLEAR_COLOR[1],
            CLEAR_COLOR[2],
            CLEAR_COLOR[3],
        );

        let resources = Resources::new(&gl);

        ScenePainter {
            gl,
            resources,
            projection: projection::orthographic(1, 1).to_homogeneous(),
            view: Matrix4::identity(),
            width: 1,
            height: 1,
            viewport_dirty: true,
        }
    }

    pub fn resources(&self) -> &Resources<G> {
        &self.resources
    }

    pub fn projection(&self) -> &Matrix4<f32> {
        &self.projection
    }

    pub fn update_fb_size(&mut self, width: u32, height: u32) {
        self.viewport_dirty = true;
        self.width = width;
        self.height = height;

        self.projection = projection::orthographic(width, height)
            .to_homogeneous();

        log::debug!(
            "Framebuffer resized to {}x{} (aspect {})",
            width,
            height,
            projection::aspect_ratio(width, height),
        );
    }

    pub fn paint(&mut self) {
        let gl = &self.gl;

        if self.viewport_dirty {
            gl.viewport(0, 0, self.width as i32, self.height as i32);
            self.viewport_dirty = false;
        }

        gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);

        self.resources.bind(gl);

        for quad in SCENE_LAYOUT.iter() {
            self.paint_quad(quad);
        }

        gl.bind_vertex_array(None);
        gl.use_program(None);
    }

    fn paint_quad(&self, quad: &SceneQuad) {
        let mvp = self.projection * self.view * quad.model_matrix();
        let [r, g, b, a] = quad.color;
        let gl = &self.gl;

        gl.uniform_matrix_4_f32_slice(
            self.resources.mvp_uniform(),
            false, // transpose
            mvp.as_slice(),
        );
        gl.uniform_4_f32(self.resources.color_uniform(), r, g, b, a);

        gl.draw_arrays(glow::TRIANGLES, 0, N_SQUARE_VERTICES);
    }

    /// Releases the GPU resources. This must be the last call and the
    /// context must still be current.
    pub fn teardown(&mut self) {
        self.resources.teardown();
    }
}
