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
use crate::gl::Gl;

pub const POSITION_ATTRIB: u32 = 0;

static SQUARE_VERTEX_SOURCE: &str = "\
#version 450 core
layout(location = 0) in vec3 position;
uniform mat4 mvp;
void main()
{
    gl_Position = mvp * vec4(position, 1.0);
}
";

static SQUARE_FRAGMENT_SOURCE: &str = "\
#version 450 core
uniform vec4 color;
out vec4 FragColor;
void main()
{
    FragColor = color;
}
";

pub struct Shader<G: Gl> {
    id: G::Shader,
    gl: Rc<G>,
}

impl<G: Gl> Shader<G> {
    pub fn new(
        gl: Rc<G>,
        shader_type: u32,
        source: &str,
    ) -> Result<Shader<G>, String> {
        let id = gl.create_shader(shader_type)?;

        gl.shader_source(id, source);

        let shader = Shader { id, gl };

        shader.compile()?;

        Ok(shader)
    }

    fn compile(&self) -> Result<(), String> {
        self.gl.compile_shader(self.id);

        if self.gl.get_shader_compile_status(self.id) {
            Ok(())
        } else {
            let mut log = self.gl.get_shader_info_log(self.id);

            if log.len() > 0 {
                log.push_str("\n\n");
            }

            log.push_str("Shader failed to compile");

            Err(log)
        }
    }
}

impl<G: Gl> Drop for Shader<G> {
    fn drop(&mut self) {
        self.gl.delete_shader(self.id);
    }
}

pub struct Program<G: Gl> {
    id: G::Program,
    gl: Rc<G>,
}

impl<G: Gl> Program<G> {
    pub fn new(
        gl: Rc<G>,
        shaders: &[Shader<G>],
    ) -> Result<Program<G>, String> {
        let id = gl.create_program()?;

        for shader in shaders.iter() {
            gl.attach_shader(id, shader.id);
        }

        let program = Program { id, gl };

        program.link()?;

        Ok(program)
    }

    pub fn id(&self) -> G::Program {
        self.id
    }

    pub fn uniform_location(&self, name: &str) -> Option<G::UniformLocation> {
        let location = self.gl.get_uniform_location(self.id, name);

        if location.is_none() {
            log::warn!("Missing “{}” uniform", name);
        }

        location
    }

    fn link(&self) -> Result<(), String> {
        self.gl.link_program(self.id);

        if self.gl.get_program_link_status(self.id) {
            Ok(())
        } else {
            let mut log = self.gl.get_program_info_log(self.id);

            if log.len() > 0 {
                log.push_str("\n\n");
            }

            log.push_str("Program failed to link");

            Err(log)
        }
    }
}

impl<G: Gl> Drop for Program<G> {
    fn drop(&mut self) {
        self.gl.delete_program(self.id);
    }
}

/// Builds the flat-colour program used for every square. The
/// intermediate shader objects are released before returning, whether or
/// not linking worked.
pub fn create_square_program<G: Gl>(gl: &Rc<G>) -> Result<Program<G>, String> {
    let shaders = [
        create_shader(
            Rc::clone(gl),
            glow::VERTEX_SHADER,
            "vertex",
            SQUARE_VERTEX_SOURCE,
        )?,
        create_shader(
            Rc::clone(gl),
            glow::FRAGMENT_SHADER,
            "fragment",
            SQUARE_FRAGMENT_SOURCE,
        )?,
    ];

    Program::new(Rc::clone(gl), &shaders)
}

fn create_shader<G: Gl>(
    gl: Rc<G>,
    shader_type: u32,
    stage_name: &str,
    source: &str,
) -> Result<Shader<G>, String> {
    Shader::new(gl, shader_type, source)
        .map_err(|e| format!("{} shader: {}", stage_name, e))
}
