use crate::{
    config::Settings,
    world::{Axis, Camera, Scene},
};

/// One discrete viewer action. The `f32` is a multiple of the configured
/// step, normally `+1.0` or `-1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Turn the camera about `Axis`.
    Rotate(Axis, f32),
    /// Move along a camera-relative axis (shifts the world the other way).
    Move(Axis, f32),
    /// Change the field of view; positive widens.
    Zoom(f32),
}

impl Command {
    /// Mutate camera or world. Safe to call repeatedly; effects compose.
    pub fn apply(self, camera: &mut Camera, scene: &mut Scene, settings: &Settings) {
        match self {
            Command::Rotate(axis, dir) => {
                camera.rotate(axis, dir * settings.rot_step.get(axis.index()));
            }
            Command::Move(axis, dir) => {
                let d = axis.unit() * dir * settings.move_step;
                scene.shift(camera.translate(d.x, d.y, d.z));
            }
            Command::Zoom(dir) => camera.zoom(dir * settings.zoom_step),
        }
        log::trace!("{self:?} -> fov {:.1}°", camera.fov());
    }
}
