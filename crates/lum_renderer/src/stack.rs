//! Fixed-capacity path stack.
//!
//! Replaces recursion in the kernel. Each lane allocates one stack up
//! front and reuses it for every sample; it never grows.

use lum_math::{Color, Ray};

/// One pending piece of a light path.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PathSegment {
    pub ray: Ray,
    /// Product of the diffuse reflectances along the path so far
    pub weight: Color,
    /// Bounces still permitted
    pub depth: u32,
}

/// Array-backed stack with a top index.
#[derive(Debug, Clone)]
pub struct PathStack {
    segments: Box<[PathSegment]>,
    top: usize,
}

impl PathStack {
    /// Allocate a stack holding at most `capacity` segments.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            segments: vec![PathSegment::default(); capacity].into_boxed_slice(),
            top: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.segments.len()
    }

    pub fn len(&self) -> usize {
        self.top
    }

    pub fn is_empty(&self) -> bool {
        self.top == 0
    }

    /// Drop every segment, keeping the storage.
    pub fn clear(&mut self) {
        self.top = 0;
    }

    /// Push a segment.
    ///
    /// # Panics
    ///
    /// Panics when full. `RenderConfig::validate` sizes the stack so the
    /// kernel never gets here.
    #[inline]
    pub fn push(&mut self, segment: PathSegment) {
        self.segments[self.top] = segment;
        self.top += 1;
    }

    /// Pop the most recently pushed segment.
    #[inline]
    pub fn pop(&mut self) -> Option<PathSegment> {
        if self.top == 0 {
            return None;
        }
        self.top -= 1;
        Some(self.segments[self.top])
    }
}
