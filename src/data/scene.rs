//! Terrain placeholder scene and the render-loop animator that spins it.

use std::f64::consts::TAU;

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Radians added to the rotation angle on each render tick.
pub const ROTATION_STEP: f64 = 0.01;

/// Per-frame rotation driver.
///
/// Starts stopped; the application starts it once at launch and never stops
/// it, but `stop` exists so a bounded number of ticks can be driven in tests.
#[derive(Debug, Clone)]
pub struct SceneAnimator {
    angle: f64,
    step: f64,
    running: bool,
    ticks: u64,
}

impl Default for SceneAnimator {
    fn default() -> Self {
        Self::with_step(ROTATION_STEP)
    }
}

impl SceneAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_step(step: f64) -> Self {
        Self {
            angle: 0.0,
            step,
            running: false,
            ticks: 0,
        }
    }

    pub fn start(&mut self) {
        if !self.running {
            log::debug!("scene animator started (step {} rad)", self.step);
        }
        self.running = true;
    }

    pub fn stop(&mut self) {
        if self.running {
            log::debug!("scene animator stopped after {} ticks", self.ticks);
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance by one step if running. Returns whether the angle changed.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.angle = (self.angle + self.step).rem_euclid(TAU);
        self.ticks += 1;
        true
    }

    /// Current rotation in `[0, 2π)`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of ticks applied while running.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// Perspective camera looking at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for SceneCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 4.0, 6.0),
            target: Vec3::ZERO,
            fov_y_deg: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl SceneCamera {
    fn view_projection(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(self.fov_y_deg.to_radians(), aspect.max(1e-3), self.near, self.far);
        let view = Mat4::look_at_rh(self.position, self.target, Vec3::Y);
        proj * view
    }
}

/// A subdivided square plane standing in for a terrain model.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainScene {
    /// Edge length in world units.
    pub size: f32,
    /// Subdivisions per edge.
    pub segments: u32,
    /// Fixed rotation about X applied before the animated spin, laying the plane flat.
    pub base_tilt: f32,
    pub camera: SceneCamera,
}

impl Default for TerrainScene {
    fn default() -> Self {
        Self {
            size: 10.0,
            segments: 32,
            base_tilt: -std::f32::consts::FRAC_PI_2,
            camera: SceneCamera::default(),
        }
    }
}

impl TerrainScene {
    /// Grid vertex `(i, j)` in plane-local coordinates.
    fn vertex(&self, i: u32, j: u32) -> Vec3 {
        let n = self.segments.max(1) as f32;
        let half = self.size / 2.0;
        Vec3::new(
            -half + self.size * i as f32 / n,
            -half + self.size * j as f32 / n,
            0.0,
        )
    }

    fn model(&self, angle: f32) -> Mat4 {
        Mat4::from_rotation_x(self.base_tilt) * Mat4::from_rotation_z(angle)
    }

    /// Wireframe edges projected to normalized device coordinates (`[-1, 1]`,
    /// y up) for the given spin angle and viewport aspect ratio.
    ///
    /// Edges with an endpoint behind the near plane are dropped.
    pub fn wireframe(&self, angle: f32, aspect: f32) -> Vec<[Vec2; 2]> {
        let mvp = self.camera.view_projection(aspect) * self.model(angle);
        let project = |p: Vec3| -> Option<Vec2> {
            let clip: Vec4 = mvp * p.extend(1.0);
            if clip.w <= self.camera.near {
                return None;
            }
            Some(Vec2::new(clip.x / clip.w, clip.y / clip.w))
        };

        let n = self.segments.max(1);
        let mut edges = Vec::with_capacity((2 * n * (n + 1)) as usize);
        for a in 0..=n {
            for b in 0..n {
                for (p, q) in [
                    (self.vertex(a, b), self.vertex(a, b + 1)),
                    (self.vertex(b, a), self.vertex(b + 1, a)),
                ] {
                    if let (Some(p), Some(q)) = (project(p), project(q)) {
                        edges.push([p, q]);
                    }
                }
            }
        }
        edges
    }
}
