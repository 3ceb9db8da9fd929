// src/globe/session.rs
use crate::globe::animation::{FrameHandle, FrameLoop, FrameTick};
use crate::globe::data::{FloatMarker, LandSet};
use crate::globe::error::GlobeResult;
use crate::globe::hit_test::{ClickTarget, hit_test, resolve_click};
use crate::globe::interaction::{PointerEvent, ResumeTimer, apply_pointer_event};
use crate::globe::resources::{GlobeSettings, InteractionTuning};
use crate::globe::state::{CameraState, CursorAffordance};
use crate::globe::view::GlobeView;
use crate::math::types::Vec2;
use crate::render::surface::{FrameStats, SurfaceLayout};
use bevy::log::{debug, info};
use bevy::prelude::Resource;
use std::collections::HashSet;
use std::time::Duration;

/// Eingaben, für die eine Sitzung Listener registriert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    PointerDown,
    PointerMove,
    PointerUp,
    PointerEnter,
    PointerLeave,
    Click,
    Resize,
}

impl ListenerKind {
    pub const ALL: [ListenerKind; 7] = [
        ListenerKind::PointerDown,
        ListenerKind::PointerMove,
        ListenerKind::PointerUp,
        ListenerKind::PointerEnter,
        ListenerKind::PointerLeave,
        ListenerKind::Click,
        ListenerKind::Resize,
    ];

    fn of(event: &PointerEvent) -> Self {
        match event {
            PointerEvent::Down => ListenerKind::PointerDown,
            PointerEvent::Move { .. } => ListenerKind::PointerMove,
            PointerEvent::Up => ListenerKind::PointerUp,
            PointerEvent::Enter => ListenerKind::PointerEnter,
            PointerEvent::Leave => ListenerKind::PointerLeave,
        }
    }
}

#[derive(Debug, Default)]
pub struct ListenerRegistry {
    attached: HashSet<ListenerKind>,
}

impl ListenerRegistry {
    pub fn attach_all(&mut self) {
        self.attached.extend(ListenerKind::ALL);
    }

    pub fn detach_all(&mut self) {
        self.attached.clear();
    }

    pub fn is_attached(&self, kind: ListenerKind) -> bool {
        self.attached.contains(&kind)
    }

    pub fn len(&self) -> usize {
        self.attached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }
}

/// Eine eingebundene Globus-Instanz.
///
/// Besitzt Kamerazustand, Daten, Frame-Loop und Listener. Alles wird beim Mounten
/// angelegt und beim `unmount` (oder spätestens beim Drop) wieder freigegeben.
#[derive(Resource, Debug)]
pub struct GlobeSession {
    pub camera: CameraState,
    resume: ResumeTimer,
    frame_loop: FrameLoop,
    frame_handle: Option<FrameHandle>,
    listeners: ListenerRegistry,
    markers: Vec<FloatMarker>,
    land: LandSet,
    layout: SurfaceLayout,
    hovered: Option<usize>,
    last_stats: FrameStats,
}

impl GlobeSession {
    pub fn mount(
        settings: &GlobeSettings,
        markers: Vec<FloatMarker>,
        land: LandSet,
    ) -> GlobeResult<Self> {
        // Ungültige Geometrie-Einstellungen fallen hier auf, nicht erst beim ersten Frame
        settings.projector()?;

        let mut frame_loop = FrameLoop::default();
        let frame_handle = frame_loop.start();
        let mut listeners = ListenerRegistry::default();
        listeners.attach_all();

        info!(
            "Globe mounted with {} floats and {} land polygons.",
            markers.len(),
            land.len()
        );

        Ok(Self {
            camera: CameraState::new(settings.ambient_speed),
            resume: ResumeTimer::default(),
            frame_loop,
            frame_handle: Some(frame_handle),
            listeners,
            markers,
            land,
            layout: SurfaceLayout::new(Vec2::splat(settings.canvas_size)),
            hovered: None,
            last_stats: FrameStats::default(),
        })
    }

    /// Beendet den Frame-Loop und entfernt alle Listener. Mehrfacher Aufruf ist harmlos.
    pub fn unmount(&mut self) {
        let was_mounted = self.is_mounted();
        if let Some(handle) = self.frame_handle.take() {
            self.frame_loop.cancel(handle);
        }
        self.listeners.detach_all();
        self.resume.cancel();
        self.hovered = None;
        if was_mounted {
            info!("Globe unmounted after {} frames.", self.frame_loop.frames());
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.frame_handle.is_some() || !self.listeners.is_empty()
    }

    pub fn is_animating(&self) -> bool {
        self.frame_loop.is_running()
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    pub fn markers(&self) -> &[FloatMarker] {
        &self.markers
    }

    pub fn land(&self) -> &LandSet {
        &self.land
    }

    pub fn layout(&self) -> &SurfaceLayout {
        &self.layout
    }

    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    pub fn record_stats(&mut self, stats: FrameStats) {
        self.last_stats = stats;
    }

    pub fn view(&self, settings: &GlobeSettings) -> GlobeResult<GlobeView> {
        GlobeView::new(settings, self.camera.rotation_angle())
    }

    /// Gibt `false` zurück, wenn für dieses Ereignis kein Listener registriert ist
    pub fn handle_pointer(
        &mut self,
        event: PointerEvent,
        now: Duration,
        tuning: &InteractionTuning,
    ) -> bool {
        if !self.listeners.is_attached(ListenerKind::of(&event)) {
            return false;
        }
        if event == PointerEvent::Leave {
            self.hovered = None;
        }
        apply_pointer_event(&mut self.camera, &mut self.resume, event, now, tuning);
        true
    }

    pub fn tick(&mut self, now: Duration, tuning: &InteractionTuning) -> Option<FrameTick> {
        self.frame_loop.tick(&mut self.camera, &mut self.resume, now, tuning)
    }

    /// Passt die Zeichenfläche an Leinwandgröße und Anzeigebereich an.
    /// Gleiche Maße ändern nichts.
    pub fn resize(&mut self, canvas_size: f32, area_min: Vec2, area_size: Vec2) -> bool {
        if !self.listeners.is_attached(ListenerKind::Resize) {
            return false;
        }
        let canvas_changed = self.layout.set_logical_size(Vec2::splat(canvas_size));
        let changed = self.layout.resize(area_min, area_size) || canvas_changed;
        if changed {
            debug!(
                "Globe surface resized to scale {:.3} (layout {}).",
                self.layout.scale(),
                self.layout.generation()
            );
        }
        changed
    }

    /// Hover-Ziel neu bestimmen; `logical` ist `None`, wenn der Zeiger nicht über der Fläche ist
    pub fn update_hover(
        &mut self,
        view: &GlobeView,
        logical: Option<Vec2>,
    ) -> Option<&FloatMarker> {
        if !self.listeners.is_attached(ListenerKind::PointerMove) {
            return None;
        }
        self.hovered = logical.and_then(|p| {
            let marker = hit_test(view, &self.markers, p)?;
            self.markers.iter().position(|m| std::ptr::eq(m, marker))
        });
        self.hovered()
    }

    pub fn hovered(&self) -> Option<&FloatMarker> {
        self.hovered.and_then(|i| self.markers.get(i))
    }

    pub fn click(&self, view: &GlobeView, logical: Vec2) -> ClickTarget<'_> {
        if !self.listeners.is_attached(ListenerKind::Click) {
            return ClickTarget::Nothing;
        }
        resolve_click(view, &self.markers, &self.land, logical)
    }

    pub fn cursor(&self) -> CursorAffordance {
        CursorAffordance::resolve(&self.camera, self.hovered.is_some())
    }
}

impl Drop for GlobeSession {
    fn drop(&mut self) {
        self.unmount();
    }
}
