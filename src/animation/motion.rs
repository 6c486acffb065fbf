//! Rigid motion: main blob rotation, satellite orbits, and camera sway.

use glam::{Vec2, Vec3};

use crate::options::{BlobOptions, CameraOptions, SatelliteOptions};

/// Angle of satellite `index` on the unit circle.
#[must_use]
pub fn satellite_angle(index: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    index as f32 / count as f32 * std::f32::consts::TAU
}

/// Euler rotation (x, y, z) of the main blob, with pointer parallax.
#[must_use]
pub fn blob_rotation(options: &BlobOptions, t: f32, pointer: Vec2) -> Vec3 {
    let [pitch_freq, pitch_amp] = options.pitch_wobble;
    let [roll_freq, roll_amp] = options.roll_wobble;
    let [yaw_parallax, pitch_parallax] = options.pointer_parallax;
    Vec3::new(
        (t * pitch_freq).sin() * pitch_amp + pointer.y * pitch_parallax,
        t * options.spin_rate + pointer.x * yaw_parallax,
        (t * roll_freq).cos() * roll_amp,
    )
}

/// Placement of satellite `index` before the animation starts: on an
/// ellipse around the main blob.
#[must_use]
pub fn satellite_rest_position(
    options: &SatelliteOptions,
    index: usize,
) -> Vec3 {
    let a = satellite_angle(index, options.count);
    let [ex, ey, ez] = options.initial_ellipse;
    Vec3::new(a.cos() * ex, (a * 1.3).sin() * ey, a.sin() * ez)
}

/// Orbiting position and pulsing uniform scale of satellite `index` at
/// time `t`.
#[must_use]
pub fn satellite_pose(
    options: &SatelliteOptions,
    index: usize,
    t: f32,
    center_x: f32,
) -> (Vec3, f32) {
    let i = index as f32;
    let a = satellite_angle(index, options.count);
    let radius = options.orbit_radius + (t + i).sin() * options.orbit_wobble;

    let [bob_freq, bob_phase, bob_amp] = options.bobbing;
    let [float_freq, float_phase, float_amp] = options.floating;
    let bobbing = (t * bob_freq + i * bob_phase).sin() * bob_amp;
    let floating = (t * float_freq + i * float_phase).cos() * float_amp;

    let [sx, sy, sz] = options.orbit_speed;
    let [height, depth] = options.orbit_extent;
    let position = Vec3::new(
        (a + t * sx).cos() * radius + center_x,
        (a * 1.3 + t * sy).sin() * height + bobbing,
        (a + t * sz).sin() * depth + floating,
    );

    let [pulse_freq, pulse_amp] = options.pulse;
    let scale = 1.0 + (t * pulse_freq + i).sin() * pulse_amp;
    (position, scale)
}

/// Eye position after sway and pointer influence.
#[must_use]
pub fn camera_eye(options: &CameraOptions, t: f32, pointer: Vec2) -> Vec3 {
    let base = Vec3::from(options.eye);
    let [fx, ax] = options.sway_x;
    let [fy, ay] = options.sway_y;
    let [px, py] = options.pointer_influence;
    Vec3::new(
        base.x + (t * fx).sin() * ax + pointer.x * px,
        base.y + (t * fy).cos() * ay + pointer.y * py,
        base.z,
    )
}
