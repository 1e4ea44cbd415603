use std::time::Instant;

use crate::host::NodeSurface;
use crate::overlay::OverlayId;
use crate::transitions::TransitionConfig;
use crate::types::Point;

/// A move that reached its target during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completed {
    pub node: OverlayId,
    pub target: Point,
    /// Generation of the show/hide request that scheduled the move.
    pub generation: u64,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    /// Waiting for the next tick. The snap to `from` has already been applied.
    Scheduled,
    Running { start: Instant },
}

/// A single in-flight move of one overlay.
#[derive(Debug, Clone)]
struct Move {
    node: OverlayId,
    from: Point,
    to: Point,
    config: TransitionConfig,
    generation: u64,
    phase: Phase,
}

/// Drives overlay moves across frames.
///
/// Moves are committed in two phases. [`animate_to`](Self::animate_to) only
/// records the request; the animated phase starts on the following
/// [`tick`](Self::tick). Whatever synchronous placement the caller made before
/// scheduling is therefore visible for at least one frame before interpolation
/// begins.
#[derive(Debug, Default)]
pub struct TransitionRunner {
    /// Active moves, in scheduling order. At most one per node.
    moves: Vec<Move>,
    /// Reduced motion flag - when true, moves complete on their first tick.
    reduced_motion: bool,
}

impl TransitionRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable reduced motion (accessibility).
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    /// Returns true if any move is scheduled or running.
    pub fn has_active_transitions(&self) -> bool {
        !self.moves.is_empty()
    }

    /// Target of the move in flight for `node`, if any.
    pub fn target(&self, node: OverlayId) -> Option<Point> {
        self.moves.iter().find(|m| m.node == node).map(|m| m.to)
    }

    /// Schedule a move of `node` from `from` to `to`.
    ///
    /// Replaces any move already in flight for the node. The replaced move never
    /// reports completion.
    pub fn animate_to(
        &mut self,
        node: OverlayId,
        from: Point,
        to: Point,
        config: TransitionConfig,
        generation: u64,
    ) {
        if self.cancel(node) {
            log::debug!("{node}: superseding in-flight move");
        }

        self.moves.push(Move {
            node,
            from,
            to,
            config,
            generation,
            phase: Phase::Scheduled,
        });
    }

    /// Change the target of the move in flight for `node`, keeping its generation.
    /// Returns false if the node has no move.
    pub fn retarget(&mut self, node: OverlayId, to: Point) -> bool {
        match self.moves.iter_mut().find(|m| m.node == node) {
            Some(mv) => {
                mv.to = to;
                true
            }
            None => false,
        }
    }

    /// Drop the move for `node` without completing it.
    pub fn cancel(&mut self, node: OverlayId) -> bool {
        let before = self.moves.len();
        self.moves.retain(|m| m.node != node);
        self.moves.len() != before
    }

    /// Advance every move to `now`, placing nodes on `surface`.
    ///
    /// Scheduled moves start here. Returns the moves that reached their target,
    /// in scheduling order.
    pub fn tick<S: NodeSurface + ?Sized>(&mut self, now: Instant, surface: &mut S) -> Vec<Completed> {
        let reduced_motion = self.reduced_motion;
        let mut completed = Vec::new();

        self.moves.retain_mut(|mv| {
            let start = match mv.phase {
                Phase::Scheduled => {
                    mv.phase = Phase::Running { start: now };
                    now
                }
                Phase::Running { start } => start,
            };

            let duration = mv.config.duration;
            let progress = if reduced_motion || duration.is_zero() {
                1.0
            } else {
                (now.saturating_duration_since(start).as_secs_f32() / duration.as_secs_f32())
                    .min(1.0)
            };

            if progress >= 1.0 {
                surface.place(mv.node, mv.to);
                completed.push(Completed {
                    node: mv.node,
                    target: mv.to,
                    generation: mv.generation,
                });
                return false;
            }

            let point = mv.from.lerp(mv.to, mv.config.easing.apply(progress));
            log::trace!("{}: frame at {:?} ({:.2})", mv.node, point, progress);
            surface.place(mv.node, point);
            true
        });

        completed
    }
}
