// src/globe/animation.rs
use crate::globe::interaction::{ResumeTimer, resume_if_due};
use crate::globe::resources::InteractionTuning;
use crate::globe::state::CameraState;
use std::time::Duration;

/// Kennung eines gestarteten Frame-Loops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// Was ein Tick bewirkt hat; der Renderer zeichnet danach neu
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    pub frame: u64,
    pub rotation: f32,
    pub resumed: bool,
}

/// Expliziter Frame-Loop. Läuft nur zwischen `start` und `cancel`.
#[derive(Debug, Default)]
pub struct FrameLoop {
    active: Option<FrameHandle>,
    next_id: u64,
    frames: u64,
}

impl FrameLoop {
    /// Startet den Loop. Läuft er bereits, wird der bestehende Handle zurückgegeben.
    pub fn start(&mut self) -> FrameHandle {
        if let Some(handle) = self.active {
            return handle;
        }
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.active = Some(handle);
        handle
    }

    /// Bricht den Loop ab, falls `handle` der aktive ist
    pub fn cancel(&mut self, handle: FrameHandle) -> bool {
        if self.active == Some(handle) {
            self.active = None;
            true
        } else {
            false
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Ein Frame: fälligen Timer auslösen, dann Rotation um die aktuelle Geschwindigkeit weiterdrehen
    pub fn tick(
        &mut self,
        camera: &mut CameraState,
        timer: &mut ResumeTimer,
        now: Duration,
        tuning: &InteractionTuning,
    ) -> Option<FrameTick> {
        self.active?;

        let resumed = resume_if_due(camera, timer, now, tuning);
        if !camera.is_dragging {
            camera.rotate_by(-camera.rotation_speed);
        }
        self.frames += 1;

        Some(FrameTick {
            frame: self.frames,
            rotation: camera.rotation_angle(),
            resumed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_tick_advances_rotation_while_running() {
        let tuning = InteractionTuning::default();
        let mut camera = CameraState::new(tuning.ambient_speed);
        camera.set_rotation_angle(1.0);
        let mut timer = ResumeTimer::default();
        let mut frame_loop = FrameLoop::default();

        assert!(frame_loop.tick(&mut camera, &mut timer, Duration::ZERO, &tuning).is_none());
        assert_eq!(camera.rotation_angle(), 1.0);

        frame_loop.start();
        let tick = frame_loop
            .tick(&mut camera, &mut timer, Duration::ZERO, &tuning)
            .unwrap();
        assert_eq!(tick.frame, 1);
        assert_abs_diff_eq!(camera.rotation_angle(), 1.0 - tuning.ambient_speed, epsilon = 1e-6);
    }

    #[test]
    fn test_cancelled_loop_no_longer_advances() {
        let tuning = InteractionTuning::default();
        let mut camera = CameraState::new(tuning.ambient_speed);
        let mut timer = ResumeTimer::default();
        let mut frame_loop = FrameLoop::default();

        let handle = frame_loop.start();
        frame_loop.tick(&mut camera, &mut timer, Duration::ZERO, &tuning);
        assert!(frame_loop.cancel(handle));
        assert!(!frame_loop.is_running());

        let before = camera.rotation_angle();
        for _ in 0..10 {
            assert!(frame_loop.tick(&mut camera, &mut timer, Duration::ZERO, &tuning).is_none());
        }
        assert_eq!(camera.rotation_angle(), before);
        assert_eq!(frame_loop.frames(), 1);
    }

    #[test]
    fn test_stale_handle_cannot_cancel_new_loop() {
        let mut frame_loop = FrameLoop::default();
        let first = frame_loop.start();
        assert_eq!(frame_loop.start(), first);
        frame_loop.cancel(first);
        let second = frame_loop.start();
        assert_ne!(first, second);
        assert!(!frame_loop.cancel(first));
        assert!(frame_loop.is_running());
    }

    #[test]
    fn test_tick_fires_due_resume_before_rotating() {
        let tuning = InteractionTuning::default();
        let mut camera = CameraState::new(0.0);
        camera.set_rotation_angle(2.0);
        let mut timer = ResumeTimer::default();
        timer.schedule(Duration::ZERO, tuning.drag_quiet);
        let mut frame_loop = FrameLoop::default();
        frame_loop.start();

        let tick = frame_loop
            .tick(&mut camera, &mut timer, tuning.drag_quiet, &tuning)
            .unwrap();
        assert!(tick.resumed);
        assert_abs_diff_eq!(tick.rotation, 2.0 - tuning.ambient_speed, epsilon = 1e-6);
    }
}
