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


//! Owns every GPU object the scene needs: the flat-colour program with
//! its cached uniform locations and the one unit square that all of the
//! quads are drawn with.

use std::rc::Rc;
use crate::gl::Gl;
use crate::shaders::{self, Program};
use crate::buffer::Buffer;
use crate::array_object::ArrayObject;

pub const N_SQUARE_VERTICES: i32 = 6;

// A unit square lying in the XZ plane (y = 0) made from two
// counter-clockwise triangles.
static UNIT_SQUARE_VERTICES: [f32; N_SQUARE_VERTICES as usize * 3] = [
    -0.5, 0.0, -0.5,
    0.5, 0.0, -0.5,
    0.5, 0.0, 0.5,

    -0.5, 0.0, -0.5,
    0.5, 0.0, 0.5,
    -0.5, 0.0, 0.5,
];

/// A missing object is represented by `None` so that rendering with a
/// half-built set of resources just doesn’t show anything.
pub struct Resources<G: Gl> {
    program: Option<Program<G>>,
    mvp_uniform: Option<G::UniformLocation>,
    color_uniform: Option<G::UniformLocation>,
    array_object: Option<ArrayObject<G>>,
    buffer: Option<Buffer<G>>,
}

impl<G: Gl> Resources<G> {
    pub fn new(gl: &Rc<G>) -> Resources<G> {
        let (program, mvp_uniform, color_uniform) =
            match shaders::create_square_program(gl) {
                Ok(program) => {
                    let mvp = program.uniform_location("mvp");
                    let color = program.uniform_location("color");
                    (Some(program), mvp, color)
                },
                Err(e) => {
                    log::error!("{}", e);
                    (None, None, None)
                },
            };

        let (array_object, buffer) = match create_geometry(gl) {
            Ok((array_object, buffer)) => (Some(array_object), Some(buffer)),
            Err(e) => {
                log::error!("Failed to create the square geometry: {}", e);
                (None, None)
            },
        };

        log::debug!(
            "GPU resources created (program: {}, geometry: {})",
            program.is_some(),
            buffer.is_some(),
        );

        Resources {
            program,
            mvp_uniform,
            color_uniform,
            array_object,
            buffer,
        }
    }

    pub fn program_id(&self) -> Option<G::Program> {
        self.program.as_ref().map(Program::id)
    }

    pub fn vertex_array_id(&self) -> Option<G::VertexArray> {
        self.array_object.as_ref().map(ArrayObject::id)
    }

    pub fn buffer_id(&self) -> Option<G::Buffer> {
        self.buffer.as_ref().map(Buffer::id)
    }

    pub fn mvp_uniform(&self) -> Option<&G::UniformLocation> {
        self.mvp_uniform.as_ref()
    }

    pub fn color_uniform(&self) -> Option<&G::UniformLocation> {
        self.color_uniform.as_ref()
    }

    pub fn bind(&self, gl: &G) {
        gl.use_program(self.program_id());

        match self.array_object {
            Some(ref array_object) => array_object.bind(),
            None => gl.bind_vertex_array(None),
        }
    }

    /// Releases the buffer, the vertex array and the program, in that
    /// order. Must be called with the context current. Calling it again
    /// does nothing.
    pub fn teardown(&mut self) {
        let mut n_released = 0;

        if self.buffer.take().is_some() {
            n_released += 1;
        }
        if self.array_object.take().is_some() {
            n_released += 1;
        }

        self.mvp_uniform = None;
        self.color_uniform = None;

        if self.program.take().is_some() {
            n_released += 1;
        }

        if n_released > 0 {
            log::debug!("Released {} GPU objects", n_released);
        }
    }
}

impl<G: Gl> Drop for Resources<G> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn create_geometry<G: Gl>(
    gl: &Rc<G>,
) -> Result<(ArrayObject<G>, Buffer<G>), String> {
    let array_object = ArrayObject::new(Rc::clone(gl))?;

    array_object.bind();

    let buffer_data = unsafe {
        std::slice::from_raw_parts(
            UNIT_SQUARE_VERTICES.as_ptr() as *const u8,
            std::mem::size_of_val(&UNIT_SQUARE_VERTICES),
        )
    };

    let buffer = Buffer::new_static(
        Rc::clone(gl),
        glow::ARRAY_BUFFER,
        buffer_data,
    )?;

    array_object.set_attribute(
        shaders::POSITION_ATTRIB,
        3, // size
        glow::FLOAT,
        false, // normalized
        3 * std::mem::size_of::<f32>() as i32, // stride
        &buffer,
        0, // offset
    );

    gl.bind_buffer(glow::ARRAY_BUFFER, None);
    gl.bind_vertex_array(None);

    Ok((array_object, buffer))
}
