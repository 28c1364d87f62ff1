// Host-side tests for scene composition, the per-frame update and the
// frame supervisor.

use glam::Vec2;
use hero_scene::constants::*;
use hero_scene::core::materials::*;
use hero_scene::core::rig::smoothing_factor;
use hero_scene::core::texture::dot_texture;
use hero_scene::core::{
    ElementKind, FrameDriver, FrameSupervisor, Scene, SceneConfig, SceneError, Tick, Viewport,
};

fn scene() -> Scene {
    Scene::new(SceneConfig::default(), Viewport::new(1280.0, 720.0, 1.0, MAX_PIXEL_RATIO))
        .expect("scene builds")
}

#[test]
fn half_scroll_single_frame() {
    let mut s = scene();
    s.set_scroll(0.5);
    let base = s.rig().base();
    s.update(0.016);

    let target = s.rig().target_position(0.016, Vec2::ZERO, 0.5);
    assert!(target.y >= CAMERA_MIN_Y);
    let k = smoothing_factor(CAMERA_SMOOTHING_BASE, 0.016);
    let expected = base.lerp(target, k);
    assert!((s.rig().position() - expected).length() < 1e-5);
    assert!((s.fog_density() - 0.0145).abs() < 1e-7);
    assert!((s.state().time() - 0.016).abs() < 1e-7);
}

#[test]
fn frame_delta_is_capped_and_sanitized() {
    let mut s = scene();
    s.update(1.0);
    assert!((s.state().time() - MAX_FRAME_DT).abs() < 1e-7);
    s.update(f32::NAN);
    s.update(-3.0);
    assert!((s.state().time() - MAX_FRAME_DT).abs() < 1e-7);
}

#[test]
fn dispose_freezes_the_scene() {
    let mut s = scene();
    s.update(0.02);
    s.dispose();
    s.dispose();
    s.set_scroll(1.0);
    s.update(0.02);
    assert!(s.is_disposed());
    assert_eq!(s.state().scroll_progress(), 0.0);
    assert!((s.state().time() - 0.02).abs() < 1e-7);
}

#[test]
fn skirt_moves_but_body_does_not() {
    let mut s = scene();
    let body_before = s.mesh(ElementKind::Figure).expect("body").clone();
    for _ in 0..20 {
        s.update(0.05);
    }
    assert_eq!(s.mesh(ElementKind::Figure).expect("body"), &body_before);
    let moved = s
        .skirt()
        .vertices
        .iter()
        .zip(s.skirt_rest().positions())
        .any(|(v, r)| v.position != *r);
    assert!(moved);
}

#[test]
fn pointer_reaches_materials() {
    let mut s = scene();
    s.set_pointer_client(1280.0, 0.0);
    assert_eq!(s.state().pointer_target(), Vec2::new(1.0, 1.0));
    for _ in 0..100 {
        s.update(0.05);
    }
    let m = s.materials();
    assert!(m.terrain.pointer[0] > 0.9);
    assert_eq!(m.terrain.pointer, m.particles.pointer);
    assert!(m.particles.wind[0] > 0.0);
    assert_eq!(m.sky.time, s.state().time());
    assert_eq!(m.scene.camera_pos[3], s.state().time());
}

#[test]
fn resize_updates_aspect_and_resolution() {
    let mut s = scene();
    s.resize(Viewport::new(600.0, 600.0, 3.0, MAX_PIXEL_RATIO));
    assert_eq!(s.rig().aspect(), 1.0);
    s.update(0.016);
    assert_eq!(s.materials().scene.resolution[..3], [1200.0, 1200.0, 2.0]);
    assert_eq!(s.materials().particles.pixel_ratio, 2.0);
}

#[test]
fn viewport_caps_pixel_ratio() {
    let v = Viewport::new(800.0, 600.0, 3.0, 2.0);
    assert_eq!(v.pixel_ratio, 2.0);
    assert_eq!(v.physical_size(), (1600, 1200));
    assert_eq!(Viewport::new(800.0, 600.0, 0.5, 2.0).pixel_ratio, 1.0);
    assert_eq!(Viewport::new(800.0, 600.0, f64::NAN, 2.0).pixel_ratio, 1.0);
    assert_eq!(Viewport::new(0.0, 0.0, 1.0, 2.0).physical_size(), (1, 1));
}

#[test]
fn draw_order_and_meshes() {
    assert_eq!(
        ElementKind::DRAW_ORDER,
        [
            ElementKind::Sky,
            ElementKind::Terrain,
            ElementKind::Figure,
            ElementKind::Particles
        ]
    );
    let s = scene();
    assert!(s.mesh(ElementKind::Sky).is_some());
    assert!(s.mesh(ElementKind::Terrain).is_some());
    assert!(s.mesh(ElementKind::Particles).is_none());
    assert_eq!(s.particles().len(), PARTICLE_COUNT as usize);
    assert_eq!(
        s.dot_texture().len(),
        (DOT_TEXTURE_SIZE * DOT_TEXTURE_SIZE * 4) as usize
    );
}

#[test]
fn uniform_blocks_use_whole_rows() {
    assert_eq!(std::mem::size_of::<SceneUniforms>(), 192);
    assert_eq!(std::mem::size_of::<SkyUniforms>(), 16);
    assert_eq!(std::mem::size_of::<TerrainUniforms>(), 64);
    assert_eq!(std::mem::size_of::<ParticleUniforms>(), 32);
    assert_eq!(std::mem::size_of::<FigureUniforms>(), 80);
}

#[test]
fn dot_texture_is_seeded() {
    let a = dot_texture(64, 10, 7);
    assert_eq!(a.len(), 64 * 64 * 4);
    assert_eq!(a, dot_texture(64, 10, 7));
    assert_ne!(a, dot_texture(64, 10, 8));
    assert!(a.chunks_exact(4).all(|px| px[3] == 255));
    assert!(a.chunks_exact(4).any(|px| px[0] > 0x06));
}

// ---------------- frame supervisor ----------------

#[derive(Default)]
struct FakeDriver {
    disposed: bool,
    inert: bool,
    fail_update: bool,
    fail_draw: bool,
    updates: u32,
    draws: u32,
}

impl FrameDriver for FakeDriver {
    fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn is_inert(&self) -> bool {
        self.inert
    }

    fn update(&mut self, _dt: f32) -> Result<(), SceneError> {
        self.updates += 1;
        if self.fail_update {
            return Err(SceneError::Frame("boom".into()));
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<(), SceneError> {
        self.draws += 1;
        if self.fail_draw {
            return Err(SceneError::Frame("lost".into()));
        }
        Ok(())
    }
}

#[test]
fn disposed_driver_stops_the_loop() {
    let mut sup = FrameSupervisor::new();
    let mut d = FakeDriver {
        disposed: true,
        ..Default::default()
    };
    assert_eq!(sup.tick(&mut d, 0.016), Tick::Stop);
    assert_eq!(d.updates, 0);
    assert_eq!(d.draws, 0);
    assert_eq!(sup.frames(), 0);
}

#[test]
fn failing_frame_keeps_the_loop_alive() {
    let mut sup = FrameSupervisor::new();
    let mut d = FakeDriver {
        fail_update: true,
        ..Default::default()
    };
    for _ in 0..3 {
        assert_eq!(sup.tick(&mut d, 0.016), Tick::Continue);
    }
    assert_eq!(d.draws, 0);
    assert_eq!(sup.failures(), 3);
    assert_eq!(sup.consecutive_failures(), 3);

    d.fail_update = false;
    assert_eq!(sup.tick(&mut d, 0.016), Tick::Continue);
    assert_eq!(d.draws, 1);
    assert_eq!(sup.consecutive_failures(), 0);
    assert_eq!(sup.failures(), 3);
    assert_eq!(sup.frames(), 4);
}

#[test]
fn inert_driver_stops_the_loop() {
    let mut sup = FrameSupervisor::new();
    let mut d = FakeDriver::default();
    assert_eq!(sup.tick(&mut d, 0.016), Tick::Continue);
    d.inert = true;
    assert_eq!(sup.tick(&mut d, 0.016), Tick::Stop);
    assert_eq!(d.updates, 1);
    assert_eq!(sup.frames(), 1);
}

#[test]
fn failing_draw_keeps_the_loop_alive() {
    let mut sup = FrameSupervisor::new();
    let mut d = FakeDriver {
        fail_draw: true,
        ..Default::default()
    };
    assert_eq!(sup.tick(&mut d, 0.016), Tick::Continue);
    assert_eq!(sup.tick(&mut d, 0.016), Tick::Continue);
    assert_eq!((d.updates, d.draws), (2, 2));
    assert_eq!(sup.consecutive_failures(), 2);

    d.fail_draw = false;
    assert_eq!(sup.tick(&mut d, 0.016), Tick::Continue);
    assert_eq!(sup.consecutive_failures(), 0);
    assert_eq!(sup.failures(), 2);
}

#[test]
fn failures_keep_counting_past_the_log_cadence() {
    let mut sup = FrameSupervisor::new();
    let mut d = FakeDriver {
        fail_update: true,
        ..Default::default()
    };
    let ticks = FRAME_ERROR_LOG_EVERY + 1;
    for _ in 0..ticks {
        assert_eq!(sup.tick(&mut d, 0.016), Tick::Continue);
    }
    assert_eq!(sup.consecutive_failures(), ticks);
    assert_eq!(sup.failures(), ticks as u64);
    assert_eq!(sup.frames(), ticks as u64);
}

#[test]
fn default_config_matches_constants() {
    let c = SceneConfig::default();
    assert_eq!(c.particle_count, PARTICLE_COUNT);
    assert_eq!(c.clear_color, CLEAR_COLOR);
    assert_eq!(c.max_pixel_ratio, MAX_PIXEL_RATIO);
}
