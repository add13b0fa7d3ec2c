//! Strided assignment of pixels to lanes.
//!
//! Lane `k` owns pixels `k, k + W, k + 2W, ...` below the pixel count.
//! Every pixel has exactly one owner, so lanes never write the same
//! output cell and need no synchronization.

/// Static pixel-to-lane assignment for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    lanes: usize,
    pixels: usize,
}

impl Partition {
    /// Partition `pixels` pixels across `lanes` lanes.
    ///
    /// # Panics
    ///
    /// Panics if `lanes` is zero.
    pub fn new(lanes: usize, pixels: usize) -> Self {
        assert!(lanes > 0, "lane count must be positive");
        Self { lanes, pixels }
    }

    pub fn lanes(&self) -> usize {
        self.lanes
    }

    pub fn pixels(&self) -> usize {
        self.pixels
    }

    /// Pixel indices owned by `lane`, ascending.
    pub fn lane_pixels(&self, lane: usize) -> impl Iterator<Item = usize> {
        (lane..self.pixels).step_by(self.lanes)
    }

    /// Number of pixels owned by `lane`.
    pub fn lane_len(&self, lane: usize) -> usize {
        if lane >= self.pixels {
            0
        } else {
            (self.pixels - lane + self.lanes - 1) / self.lanes
        }
    }

    /// Lane that owns `pixel`.
    #[inline]
    pub fn owner(&self, pixel: usize) -> usize {
        pixel % self.lanes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_complete(partition: &Partition) {
        let mut seen = vec![0u32; partition.pixels()];
        for lane in 0..partition.lanes() {
            let owned: Vec<usize> = partition.lane_pixels(lane).collect();
            assert_eq!(owned.len(), partition.lane_len(lane));
            for pixel in owned {
                assert_eq!(partition.owner(pixel), lane);
                seen[pixel] += 1;
            }
        }
        assert!(seen.iter().all(|&n| n == 1), "{:?}", partition);
    }

    #[test]
    fn test_small_partition() {
        let partition = Partition::new(3, 8);
        assert_eq!(partition.lane_pixels(0).collect::<Vec<_>>(), vec![0, 3, 6]);
        assert_eq!(partition.lane_pixels(1).collect::<Vec<_>>(), vec![1, 4, 7]);
        assert_eq!(partition.lane_pixels(2).collect::<Vec<_>>(), vec![2, 5]);
    }

    #[test]
    fn test_more_lanes_than_pixels() {
        let partition = Partition::new(10, 4);
        assert_eq!(partition.lane_len(3), 1);
        assert_eq!(partition.lane_len(4), 0);
        assert_eq!(partition.lane_pixels(7).count(), 0);
        assert_complete(&partition);
    }

    #[test]
    fn test_empty_image() {
        let partition = Partition::new(4, 0);
        for lane in 0..4 {
            assert_eq!(partition.lane_len(lane), 0);
        }
        assert_complete(&partition);
    }

    #[test]
    fn test_random_partitions_are_complete() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let lanes = rng.gen_range(1..64);
            let pixels = rng.gen_range(0..2000);
            assert_complete(&Partition::new(lanes, pixels));
        }
    }

    #[test]
    #[should_panic]
    fn test_zero_lanes_panics() {
        Partition::new(0, 10);
    }
}
