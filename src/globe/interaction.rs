// src/globe/interaction.rs
//
// Zustandsmaschine für Ziehen, Hover und das verzögerte Wiederaufnehmen der Eigenrotation.

use crate::globe::resources::InteractionTuning;
use crate::globe::state::CameraState;
use bevy::log::debug;
use std::time::Duration;

/// Zeiger-Ereignisse über der Zeichenfläche, bereits in logische Koordinaten übersetzt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down,
    /// Horizontale Bewegung seit dem letzten Ereignis
    Move { dx: f32 },
    Up,
    Enter,
    Leave,
}

/// Einmaliger, abbrechbarer Timer zum Wiederaufnehmen der Eigenrotation.
///
/// Jedes `schedule` ersetzt einen ausstehenden Timer. Nach dem Auslösen ist der Timer leer,
/// ein zweites `poll` ändert nichts mehr.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResumeTimer {
    due: Option<Duration>,
    generation: u64,
}

impl ResumeTimer {
    pub fn schedule(&mut self, now: Duration, quiet: Duration) {
        self.generation = self.generation.wrapping_add(1);
        self.due = Some(now.saturating_add(quiet));
    }

    pub fn cancel(&mut self) {
        if self.due.take().is_some() {
            self.generation = self.generation.wrapping_add(1);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// Zählt jedes Planen und Abbrechen, nützlich für Logs
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// `true` genau einmal, sobald `now` den Fälligkeitszeitpunkt erreicht hat
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

/// Wendet ein Zeiger-Ereignis auf den Kamerazustand an. `now` ist die App-Zeit.
pub fn apply_pointer_event(
    camera: &mut CameraState,
    timer: &mut ResumeTimer,
    event: PointerEvent,
    now: Duration,
    tuning: &InteractionTuning,
) {
    match event {
        PointerEvent::Down => {
            camera.is_dragging = true;
            camera.rotation_speed = 0.0;
            camera.last_interaction = now;
            timer.cancel();
        }
        PointerEvent::Move { dx } => {
            if camera.is_dragging && dx.is_finite() {
                camera.rotate_by(-dx * tuning.drag_sensitivity);
                camera.rotation_speed = 0.0;
                camera.last_interaction = now;
            }
        }
        PointerEvent::Up => {
            if camera.is_dragging {
                camera.is_dragging = false;
                camera.last_interaction = now;
                timer.schedule(now, tuning.drag_quiet);
                debug!("Drag ended, resume scheduled (gen {}).", timer.generation());
            }
        }
        PointerEvent::Enter => {
            camera.is_hovering = true;
            // Ein noch offenes Fortsetzen vom letzten Verlassen gilt nicht mehr
            timer.cancel();
            if !camera.is_dragging {
                camera.rotation_speed = tuning.hover_speed;
            }
        }
        PointerEvent::Leave => {
            camera.is_hovering = false;
            camera.is_dragging = false;
            timer.schedule(now, tuning.leave_quiet);
        }
    }
}

/// Löst einen fälligen Timer aus. Gibt `true` zurück, wenn die Eigenrotation wieder läuft.
pub fn resume_if_due(
    camera: &mut CameraState,
    timer: &mut ResumeTimer,
    now: Duration,
    tuning: &InteractionTuning,
) -> bool {
    if !timer.poll(now) {
        return false;
    }
    // Ziehen und erneutes Betreten brechen den Timer vorher ab
    camera.rotation_speed = tuning.ambient_speed;
    debug!("Ambient rotation resumed.");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::utils::constants::TAU;
    use approx::assert_abs_diff_eq;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn setup() -> (CameraState, ResumeTimer, InteractionTuning) {
        let tuning = InteractionTuning::default();
        (CameraState::new(tuning.ambient_speed), ResumeTimer::default(), tuning)
    }

    #[test]
    fn test_drag_rotates_opposite_to_delta() {
        let (mut camera, mut timer, tuning) = setup();
        camera.set_rotation_angle(1.0);
        apply_pointer_event(&mut camera, &mut timer, PointerEvent::Down, ms(0), &tuning);
        assert_eq!(camera.rotation_speed, 0.0);
        apply_pointer_event(
            &mut camera,
            &mut timer,
            PointerEvent::Move { dx: 20.0 },
            ms(100),
            &tuning,
        );
        assert_abs_diff_eq!(camera.rotation_angle(), 1.0 - 20.0 * 0.005, epsilon = 1e-5);
    }

    #[test]
    fn test_move_without_drag_does_nothing() {
        let (mut camera, mut timer, tuning) = setup();
        apply_pointer_event(
            &mut camera,
            &mut timer,
            PointerEvent::Move { dx: 50.0 },
            ms(0),
            &tuning,
        );
        assert_eq!(camera.rotation_angle(), 0.0);
    }

    #[test]
    fn test_drag_release_resumes_ambient_after_quiet_period() {
        let (mut camera, mut timer, tuning) = setup();
        apply_pointer_event(&mut camera, &mut timer, PointerEvent::Enter, ms(0), &tuning);
        apply_pointer_event(&mut camera, &mut timer, PointerEvent::Down, ms(500), &tuning);
        apply_pointer_event(
            &mut camera,
            &mut timer,
            PointerEvent::Move { dx: -100.0 },
            ms(600),
            &tuning,
        );
        apply_pointer_event(&mut camera, &mut timer, PointerEvent::Up, ms(700), &tuning);
        assert_eq!(camera.rotation_speed, 0.0);

        assert!(!resume_if_due(&mut camera, &mut timer, ms(2500), &tuning));
        assert_eq!(camera.rotation_speed, 0.0);

        assert!(resume_if_due(&mut camera, &mut timer, ms(2700), &tuning));
        assert_eq!(camera.rotation_speed, tuning.ambient_speed);
    }

    #[test]
    fn test_new_drag_cancels_pending_resume() {
        let (mut camera, mut timer, tuning) = setup();
        apply_pointer_event(&mut camera, &mut timer, PointerEvent::Down, ms(0), &tuning);
        apply_pointer_event(&mut camera, &mut timer, PointerEvent::Up, ms(100), &tuning);
        assert!(timer.is_pending());
        apply_pointer_event(&mut camera, &mut timer, PointerEvent::Down, ms(1000), &tuning);
        assert!(!timer.is_pending());

        assert!(!resume_if_due(&mut camera, &mut timer, ms(5000), &tuning));
        assert_eq!(camera.rotation_speed, 0.0);
    }

    #[test]
    fn test_resume_fires_once() {
        let (mut camera, mut timer, tuning) = setup();
        apply_pointer_event(&mut camera, &mut timer, PointerEvent::Leave, ms(0), &tuning);
        assert!(resume_if_due(&mut camera, &mut timer, ms(1000), &tuning));
        let after_first = camera;
        assert!(!resume_if_due(&mut camera, &mut timer, ms(1500), &tuning));
        assert_eq!(camera, after_first);
    }

    #[test]
    fn test_reenter_cancels_leave_resume() {
        let (mut camera, mut timer, tuning) = setup();
        apply_pointer_event(&mut camera, &mut timer, PointerEvent::Enter, ms(0), &tuning);
        apply_pointer_event(&mut camera, &mut timer, PointerEvent::Leave, ms(100), &tuning);
        apply_pointer_event(&mut camera, &mut timer, PointerEvent::Enter, ms(400), &tuning);
        assert!(!timer.is_pending());

        assert!(!resume_if_due(&mut camera, &mut timer, ms(1200), &tuning));
        assert!(camera.is_hovering);
        assert_eq!(camera.rotation_speed, tuning.hover_speed);
    }

    #[test]
    fn test_schedule_saturates_instead_of_overflowing() {
        let mut timer = ResumeTimer::default();
        timer.schedule(ms(1000), Duration::MAX);
        assert!(timer.is_pending());
        assert!(!timer.poll(Duration::from_secs(u64::MAX / 2)));
        assert!(timer.poll(Duration::MAX));
    }

    #[test]
    fn test_leave_ends_drag() {
        let (mut camera, mut timer, tuning) = setup();
        apply_pointer_event(&mut camera, &mut timer, PointerEvent::Enter, ms(0), &tuning);
        apply_pointer_event(&mut camera, &mut timer, PointerEvent::Down, ms(100), &tuning);
        apply_pointer_event(&mut camera, &mut timer, PointerEvent::Leave, ms(200), &tuning);
        assert!(!camera.is_dragging);
        assert!(!camera.is_hovering);
        assert!(timer.is_pending());
    }

    #[test]
    fn test_enter_while_dragging_keeps_speed_zero() {
        let (mut camera, mut timer, tuning) = setup();
        apply_pointer_event(&mut camera, &mut timer, PointerEvent::Down, ms(0), &tuning);
        apply_pointer_event(&mut camera, &mut timer, PointerEvent::Enter, ms(100), &tuning);
        assert_eq!(camera.rotation_speed, 0.0);
        assert!(camera.is_hovering);
    }

    #[test]
    fn test_rotation_stays_in_range_for_any_drag() {
        let (mut camera, mut timer, tuning) = setup();
        apply_pointer_event(&mut camera, &mut timer, PointerEvent::Down, ms(0), &tuning);
        for (i, dx) in [-100.0, 3000.0, -0.001, 1e6, -1e6, 0.0, f32::NAN, 7.5]
            .into_iter()
            .enumerate()
        {
            apply_pointer_event(
                &mut camera,
                &mut timer,
                PointerEvent::Move { dx },
                ms(i as u64 * 10),
                &tuning,
            );
            let angle = camera.rotation_angle();
            assert!((0.0..TAU).contains(&angle), "angle {angle} after dx {dx}");
        }
    }
}
