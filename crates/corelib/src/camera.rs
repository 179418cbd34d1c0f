use crate::{Mat4, Vec3, transform};

pub const DEFAULT_FOV_DEG: f32 = 35.0;
pub const SCENE_NEAR: f32 = 0.1;
pub const SCENE_FAR: f32 = 20000.0;
/// Degrees per rotate command.
pub const ROTATE_STEP: f32 = 1.0;

/// Discrete camera input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CameraCommand {
    Forward,
    Backward,
    Left,
    Right,
    RotateUp,
    RotateDown,
    RotateLeft,
    RotateRight,
}

/// Fly camera with an extra model rotation about its own up/right axes.
#[derive(Clone, Copy, Debug)]
pub struct FlyCamera {
    pub position: Vec3,
    pub front: Vec3,
    pub up: Vec3,
    /// Point the up/right basis is derived from.
    pub target: Vec3,
    right: Vec3,
    /// Model rotation about `up`, degrees.
    pub rotation_up: f32,
    /// Model rotation about `right`, degrees.
    pub rotation_right: f32,
    pub move_step: f32,
    pub fov_y_deg: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl FlyCamera {
    pub fn new(position: Vec3, front: Vec3, up: Vec3, move_step: f32) -> Self {
        let mut camera = Self {
            position,
            front,
            up,
            target: Vec3::ZERO,
            right: Vec3::X,
            rotation_up: 0.0,
            rotation_right: 0.0,
            move_step,
            fov_y_deg: DEFAULT_FOV_DEG,
            z_near: SCENE_NEAR,
            z_far: SCENE_FAR,
        };
        camera.update_basis();
        camera
    }

    #[inline]
    pub fn with_rotation(mut self, rotation_up: f32, rotation_right: f32) -> Self {
        self.rotation_up = rotation_up;
        self.rotation_right = rotation_right;
        self
    }

    #[inline]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Re-derive `right` and `up` from the direction to `target`.
    /// Degenerate directions leave the basis untouched.
    pub fn update_basis(&mut self) {
        let Some(direction) = (self.position - self.target).try_normalize() else {
            return;
        };
        let Some(right) = self.up.cross(direction).try_normalize() else {
            return;
        };
        self.right = right;
        self.up = direction.cross(right);
    }

    pub fn apply(&mut self, command: CameraCommand) {
        let strafe = self.front.cross(self.up).normalize_or_zero() * self.move_step;
        match command {
            CameraCommand::Forward => self.position += self.front * self.move_step,
            CameraCommand::Backward => self.position -= self.front * self.move_step,
            CameraCommand::Right => self.position += strafe,
            CameraCommand::Left => self.position -= strafe,
            CameraCommand::RotateUp => self.rotation_right += ROTATE_STEP,
            CameraCommand::RotateDown => self.rotation_right -= ROTATE_STEP,
            CameraCommand::RotateLeft => self.rotation_up += ROTATE_STEP,
            CameraCommand::RotateRight => self.rotation_up -= ROTATE_STEP,
        }
        self.update_basis();
    }

    /// Spin the model about the camera's up axis.
    pub fn auto_rotate(&mut self, degrees: f32) {
        self.rotation_up = transform::wrap_degrees(self.rotation_up + degrees);
        self.update_basis();
    }

    #[inline]
    pub fn view(&self) -> Mat4 {
        let look = Mat4::look_at_rh(self.position, self.position + self.front, self.up);
        let spin = transform::axis_angle(self.up, self.rotation_up)
            * transform::axis_angle(self.right, self.rotation_right);
        look * spin
    }

    /// OpenGL-style projection (z in [-1,1]).
    #[inline]
    pub fn proj(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fov_y_deg.to_radians(),
            aspect.max(1e-6),
            self.z_near,
            self.z_far,
        )
    }

    #[inline]
    pub fn mvp(&self, aspect: f32) -> Mat4 {
        self.proj(aspect) * self.view()
    }
}
