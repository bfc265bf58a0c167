use glam::{Mat4, Vec3};
use smallvec::SmallVec;

use crate::{
    config::Settings,
    control::Command,
    engine::{
        clip::clip_segment,
        cull::is_back_facing,
        transform::project,
        types::{FrameStats, RenderMode, Screen},
    },
    renderer::{DrawCall, Renderer, RendererExt, Rgba, ScreenPolygon, ScreenSegment},
    world::{Camera, EDGES, Scene},
};

/// Owns everything a frame is built from and runs the pipeline:
/// transform → cull → project → rasterize → present.
pub struct Engine<R: Renderer> {
    pub renderer: R,
    pub scene: Scene,
    pub camera: Camera,
    pub settings: Settings,
    pub screen: Screen,
    pub mode: RenderMode,
    calls: Vec<DrawCall>,
}

impl<R: Renderer> Engine<R> {
    pub fn new(renderer: R, scene: Scene, settings: Settings, mode: RenderMode) -> Self {
        Self {
            renderer,
            scene,
            camera: Camera::new(&settings),
            screen: Screen::new(settings.width, settings.height),
            settings,
            mode,
            calls: Vec::new(),
        }
    }

    /// Mutate camera or world between frames.
    pub fn apply(&mut self, cmd: Command) {
        cmd.apply(&mut self.camera, &mut self.scene, &self.settings);
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        log::info!("render mode: {:?}", self.mode);
    }

    /// Build and rasterize one frame, then hand the finished buffer to
    /// `submit`.
    pub fn render_frame(&mut self, submit: impl FnOnce(&[Rgba], usize, usize)) -> FrameStats {
        self.calls.clear();
        let proj = self.camera.projection_matrix();

        let stats = match self.mode {
            RenderMode::Filled => self.collect_faces(&proj),
            RenderMode::Wireframe => self.collect_edges(&proj),
        };
        log::debug!("{stats:?}");

        self.renderer.draw_frame(
            self.screen.w,
            self.screen.h,
            self.settings.clear_colour,
            &mut self.calls,
            submit,
        );
        stats
    }

    /// Every front-facing quad with at least three drawable corners.
    fn collect_faces(&mut self, proj: &Mat4) -> FrameStats {
        let mut stats = FrameStats::default();
        let camera = &self.camera;
        let screen = self.screen;

        for prism in &self.scene.prisms {
            for face in prism.faces() {
                stats.faces += 1;

                let cam = face.points.map(|p| camera.to_cam(p));
                if is_back_facing(&cam) {
                    stats.culled += 1;
                    continue;
                }

                let Some(projected) = project(&cam, proj) else {
                    log::trace!("face behind the eye: {cam:?}");
                    stats.rejected += 1;
                    continue;
                };

                let points: SmallVec<[Vec3; 4]> = projected
                    .iter()
                    .filter_map(|v| v.ndc.map(|ndc| screen.to_pixels(ndc).extend(v.depth)))
                    .collect();
                if points.len() < 3 {
                    log::trace!("face with {} drawable corners", points.len());
                    stats.rejected += 1;
                    continue;
                }

                stats.polygons += 1;
                self.calls.push(DrawCall::Fill(ScreenPolygon {
                    points,
                    colour: face.colour,
                }));
            }
        }
        stats
    }

    /// Every visible piece of every prism edge, clipped to the viewport.
    fn collect_edges(&mut self, proj: &Mat4) -> FrameStats {
        let mut stats = FrameStats::default();
        let camera = &self.camera;
        let screen = self.screen;
        let rect = screen.clip_rect();

        for prism in &self.scene.prisms {
            let cam = prism.world_vertices().map(|p| camera.to_cam(p));
            let Some(projected) = project(&cam, proj) else {
                stats.rejected += 1;
                continue;
            };
            let pixels = projected.map(|v| v.ndc.map(|ndc| screen.to_pixels(ndc)));

            for [a, b] in EDGES {
                /* an endpoint too close to the eye makes the edge undrawable */
                let (Some(p0), Some(p1)) = (pixels[a], pixels[b]) else {
                    continue;
                };
                if let Some((from, to)) = clip_segment(p0, p1, &rect) {
                    stats.segments += 1;
                    self.calls.push(DrawCall::Line(ScreenSegment {
                        from,
                        to,
                        colour: prism.colour,
                    }));
                }
            }
        }
        stats
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        renderer::Software,
        world::{Axis, Prism},
    };
    use glam::vec3;

    const RED: Rgba = 0x00_FF0000;

    fn engine(prisms: Vec<Prism>, mode: RenderMode) -> Engine<Software> {
        let settings = Settings {
            width: 160,
            height: 120,
            ..Settings::default()
        };
        Engine::new(Software::default(), Scene::new(prisms), settings, mode)
    }

    #[test]
    fn empty_scene_is_clear_colour() {
        let mut e = engine(Vec::new(), RenderMode::Filled);
        let stats = e.render_frame(|_, _, _| {});
        assert_eq!(stats, FrameStats::default());
        assert!(e.renderer.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn prism_behind_eye_draws_nothing() {
        let prism = Prism::new([1.0; 3], vec3(0.0, 0.0, 5.0), RED);
        let mut e = engine(vec![prism], RenderMode::Filled);
        let stats = e.render_frame(|_, _, _| {});
        assert_eq!(stats.polygons, 0);
        assert_eq!(stats.faces, 6);
        assert!(e.renderer.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn turning_around_brings_it_into_view() {
        let prism = Prism::new([1.0; 3], vec3(0.0, 0.0, 5.0), RED);
        let mut e = engine(vec![prism], RenderMode::Filled);
        // 40 steps of π/40 = half a turn
        for _ in 0..40 {
            e.apply(Command::Rotate(Axis::Y, 1.0));
        }
        let stats = e.render_frame(|_, _, _| {});
        assert_eq!(stats.polygons, 1);
        assert_eq!(e.renderer.pixel(80, 60), Some(RED));
    }

    #[test]
    fn wireframe_draws_clipped_edges() {
        let mut e = engine(
            vec![Prism::new([1.0; 3], vec3(0.0, 0.0, -4.0), RED)],
            RenderMode::Wireframe,
        );
        let stats = e.render_frame(|_, _, _| {});
        assert_eq!(stats.segments, 12);
        assert!(e.renderer.pixels().iter().any(|&p| p == RED));
        // wireframe leaves the interior of the front face empty
        assert_eq!(e.renderer.pixel(80, 60), Some(0));
    }

    #[test]
    fn wireframe_skips_edges_at_the_eye() {
        // deep prism whose near corners sit on the eye plane (z = 0)
        let mut e = engine(
            vec![Prism::new([1.0, 4.0, 1.0], vec3(0.0, 0.0, -2.0), RED)],
            RenderMode::Wireframe,
        );
        let stats = e.render_frame(|_, _, _| {});
        // only the far square has both endpoints drawable
        assert_eq!(stats.segments, 4);
    }

    #[test]
    fn moving_forward_shifts_the_world() {
        let prism = Prism::new([1.0; 3], vec3(0.0, 0.0, -10.0), RED);
        let mut e = engine(vec![prism], RenderMode::Filled);
        e.apply(Command::Move(Axis::Z, 1.0));
        assert_eq!(e.scene.prisms[0].position, vec3(0.0, 0.0, -9.0));
    }
}
