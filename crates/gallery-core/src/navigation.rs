//! Carousel navigation: turns pick events into at most one animated rotation
//! of the ring and commits the new current artwork when it lands.
//!
//! Two synchronous entry points drive everything: [`NavigationController::on_pointer_hit`]
//! (or [`NavigationController::on_pointer_miss`]) from input handling and
//! [`NavigationController::on_tick`] from the frame loop. Requests that arrive
//! while a transition is in flight are dropped, never queued.

use crate::constants::TRANSITION_DURATION;
use crate::easing::{Easing, Tween};
use crate::gallery::{Direction, GalleryState};
use crate::pick::PickHit;
use crate::scene::ElementKind;
use std::time::Duration;

/// Which interactive element fired, carrying the index it was bound to when
/// the layout was built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavTarget {
    /// Show the next artwork.
    Advance(usize),
    /// Show the previous artwork.
    Retreat(usize),
}

impl NavTarget {
    #[inline]
    pub fn direction(self) -> Direction {
        match self {
            NavTarget::Advance(_) => Direction::Left,
            NavTarget::Retreat(_) => Direction::Right,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            NavTarget::Advance(i) | NavTarget::Retreat(i) => i,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NavTarget::Advance(_) => "advance",
            NavTarget::Retreat(_) => "retreat",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    pub direction: Direction,
    pub target_index: usize,
}

impl From<NavTarget> for NavigationRequest {
    fn from(target: NavTarget) -> Self {
        Self {
            direction: target.direction(),
            target_index: target.index(),
        }
    }
}

/// Tuning for the ring rotation.
#[derive(Clone, Debug)]
pub struct NavigationParams {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for NavigationParams {
    fn default() -> Self {
        Self {
            duration: TRANSITION_DURATION,
            easing: Easing::QuadraticInOut,
        }
    }
}

/// Write target for the caption shown under the facing artwork.
pub trait CaptionSink {
    fn set_visible(&mut self, visible: bool);
    fn set_text(&mut self, title: &str, artist: &str);
}

/// In-memory caption, for hosts that draw text themselves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Caption {
    pub title: String,
    pub artist: String,
    pub visible: bool,
}

impl CaptionSink for Caption {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_text(&mut self, title: &str, artist: &str) {
        title.clone_into(&mut self.title);
        artist.clone_into(&mut self.artist);
    }
}

/// The one in-flight rotation.
#[derive(Clone, Debug)]
pub struct TransitionState {
    request: NavigationRequest,
    tween: Tween,
}

impl TransitionState {
    pub fn start_angle(&self) -> f32 {
        self.tween.from()
    }

    pub fn end_angle(&self) -> f32 {
        self.tween.to()
    }

    /// Linear elapsed fraction in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.tween.progress()
    }

    pub fn pending_index(&self) -> usize {
        self.request.target_index
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ignored {
    /// The pointer hit nothing.
    Miss,
    /// The nearest hit was an artwork or border.
    NotInteractive,
    /// The nearest hit was an arrow mounted on an artwork that is not facing the viewer.
    NotFacing,
    /// A transition is already running.
    Busy,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PickOutcome {
    Started(NavigationRequest),
    Ignored(Ignored),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    Idle,
    Animating { progress: f32 },
    Completed { index: usize },
}

pub struct NavigationController {
    gallery: GalleryState,
    params: NavigationParams,
    rotation: f32,
    transition: Option<TransitionState>,
}

impl NavigationController {
    pub fn new(gallery: GalleryState, params: NavigationParams) -> Self {
        Self {
            gallery,
            params,
            rotation: 0.0,
            transition: None,
        }
    }

    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    /// Current yaw of the gallery root, in radians.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn transition(&self) -> Option<&TransitionState> {
        self.transition.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Write the current artwork into `caption` and make it visible.
    pub fn show_current(&self, caption: &mut impl CaptionSink) {
        let art = self.gallery.current_artwork();
        caption.set_text(&art.title, &art.artist);
        caption.set_visible(true);
    }

    /// React to a hit-test. Only the nearest hit is considered.
    pub fn on_pointer_hit(&mut self, hits: &[PickHit], caption: &mut impl CaptionSink) -> PickOutcome {
        let Some(nearest) = hits.iter().min_by(|a, b| a.distance.total_cmp(&b.distance)) else {
            return self.on_pointer_miss();
        };
        match nearest.kind {
            ElementKind::Arrow(binding) => {
                // A side arrow's bound target is relative to its own artwork, not the facing one.
                if binding.owner != self.gallery.current_index() {
                    log::debug!(
                        "[nav] ignoring {} arrow on artwork {} (facing {})",
                        binding.target.name(),
                        binding.owner,
                        self.gallery.current_index()
                    );
                    return PickOutcome::Ignored(Ignored::NotFacing);
                }
                self.request(binding.target, caption)
            }
            ElementKind::Artwork { .. } | ElementKind::Border { .. } => {
                PickOutcome::Ignored(Ignored::NotInteractive)
            }
        }
    }

    pub fn on_pointer_miss(&mut self) -> PickOutcome {
        PickOutcome::Ignored(Ignored::Miss)
    }

    /// Step to the neighbour in `direction`, e.g. from a keyboard shortcut.
    pub fn navigate(&mut self, direction: Direction, caption: &mut impl CaptionSink) -> PickOutcome {
        let index = self.gallery.neighbor_index(direction);
        let target = match direction {
            Direction::Left => NavTarget::Advance(index),
            Direction::Right => NavTarget::Retreat(index),
        };
        self.request(target, caption)
    }

    /// Start a transition towards `target` unless one is already running.
    pub fn request(&mut self, target: NavTarget, caption: &mut impl CaptionSink) -> PickOutcome {
        if let Some(t) = &self.transition {
            log::debug!(
                "[nav] dropping {} -> {}: transition to {} in flight",
                target.name(),
                target.index(),
                t.pending_index()
            );
            return PickOutcome::Ignored(Ignored::Busy);
        }
        let request = NavigationRequest::from(target);
        let start = self.rotation;
        let end = start + request.direction.rotation_sign() * self.gallery.step_angle();
        caption.set_visible(false);
        self.transition = Some(TransitionState {
            request,
            tween: Tween::new(start, end, self.params.duration, self.params.easing),
        });
        log::info!(
            "[nav] {} {} -> {} ({:.3} -> {:.3} rad)",
            target.name(),
            self.gallery.current_index(),
            request.target_index,
            start,
            end
        );
        PickOutcome::Started(request)
    }

    /// Advance the running transition by `dt`, committing it when it lands.
    pub fn on_tick(&mut self, dt: Duration, caption: &mut impl CaptionSink) -> TickOutcome {
        let Some(t) = self.transition.as_mut() else {
            return TickOutcome::Idle;
        };
        self.rotation = t.tween.advance(dt);
        if !t.tween.is_finished() {
            return TickOutcome::Animating {
                progress: t.tween.progress(),
            };
        }
        let index = t.pending_index();
        self.transition = None;
        self.gallery.commit(index);
        self.show_current(caption);
        log::info!("[nav] now showing {}", index);
        TickOutcome::Completed { index }
    }
}

impl std::fmt::Debug for NavigationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationController")
            .field("current", &self.gallery.current_index())
            .field("rotation", &self.rotation)
            .field("transition", &self.transition)
            .finish()
    }
}
