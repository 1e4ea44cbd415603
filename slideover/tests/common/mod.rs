#![allow(dead_code)]

use std::collections::HashMap;
use std::time::{Duration, Instant};

use slideover::{
    MaskSurface, NodeSurface, OverlayId, PageSurface, Point, Size, Stage, ViewportProbe,
};

/// Host double that records every call the stage makes.
#[derive(Debug, Default)]
pub struct MockHost {
    pub viewport: Size,
    pub scroll_y: i32,
    pub touch: bool,
    pub positions: HashMap<OverlayId, Point>,
    pub placements: Vec<(OverlayId, Point)>,
    pub sizes: HashMap<OverlayId, Size>,
    pub z_indexes: HashMap<OverlayId, i32>,
    pub removed: Vec<OverlayId>,
    pub pinned: Option<(i32, u32)>,
    pub scroll_calls: Vec<i32>,
    pub mask_creations: u32,
    pub mask_calls: Vec<bool>,
    pub mask_visible: bool,
}

impl MockHost {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: Size::new(width, height),
            ..Default::default()
        }
    }

    pub fn position(&self, node: OverlayId) -> Option<Point> {
        self.positions.get(&node).copied()
    }

    pub fn placements_of(&self, node: OverlayId) -> Vec<Point> {
        self.placements
            .iter()
            .filter(|(id, _)| *id == node)
            .map(|(_, p)| *p)
            .collect()
    }
}

impl ViewportProbe for MockHost {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn scroll_y(&self) -> i32 {
        self.scroll_y
    }

    fn has_touch(&self) -> bool {
        self.touch
    }
}

impl PageSurface for MockHost {
    fn scroll_to(&mut self, y: i32) {
        self.scroll_y = y;
        self.scroll_calls.push(y);
    }

    fn pin_page(&mut self, offset: i32, height: u32) {
        self.pinned = Some((offset, height));
    }

    fn unpin_page(&mut self) {
        self.pinned = None;
    }
}

impl NodeSurface for MockHost {
    fn place(&mut self, node: OverlayId, at: Point) {
        self.positions.insert(node, at);
        self.placements.push((node, at));
    }

    fn resize_node(&mut self, node: OverlayId, size: Size) {
        self.sizes.insert(node, size);
    }

    fn set_z_index(&mut self, node: OverlayId, z_index: i32) {
        self.z_indexes.insert(node, z_index);
    }

    fn remove_node(&mut self, node: OverlayId) {
        self.removed.push(node);
        self.positions.remove(&node);
    }
}

impl MaskSurface for MockHost {
    fn create_mask(&mut self) {
        self.mask_creations += 1;
    }

    fn set_mask_display(&mut self, visible: bool) {
        self.mask_visible = visible;
        self.mask_calls.push(visible);
    }
}

/// Tick the stage until no transition is in flight. Returns the time reached.
pub fn settle(stage: &mut Stage<MockHost>, mut now: Instant) -> Instant {
    for _ in 0..100 {
        stage.tick(now);
        if !stage.is_animating() {
            return now;
        }
        now += Duration::from_millis(100);
    }
    panic!("transitions did not settle");
}
