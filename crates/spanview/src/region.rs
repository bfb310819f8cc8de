//! Screen rectangles.

/// An axis-aligned rectangle on the output surface, in terminal cells.
///
/// Regions are plain values. The only derivation is [`Region::shrink_one_line`],
/// used by views to consume a line of vertical space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region {
    pub left: usize,
    pub top: usize,
    pub width: usize,
    pub height: usize,
    /// Marks the region that stands for the whole current output surface.
    pub is_output_resource: bool,
}

impl Region {
    /// Create a region that is not the output surface itself.
    pub fn new(left: usize, top: usize, width: usize, height: usize) -> Self {
        Region {
            left,
            top,
            width,
            height,
            is_output_resource: false,
        }
    }

    /// Create the region describing the whole output surface.
    pub fn output(width: usize, height: usize) -> Self {
        Region {
            is_output_resource: true,
            ..Region::new(0, 0, width, height)
        }
    }

    /// Returns this region one line shorter, starting one line lower.
    ///
    /// The result is never the output surface. Callers decide whether a
    /// region is still tall enough to shrink; height saturates at zero.
    pub fn shrink_one_line(&self) -> Region {
        Region::new(
            self.left,
            self.top.saturating_add(1),
            self.width,
            self.height.saturating_sub(1),
        )
    }

    /// Same geometry with the output-surface flag cleared.
    pub fn detached(&self) -> Region {
        Region::new(self.left, self.top, self.width, self.height)
    }

    /// Exclusive right edge.
    pub fn right(&self) -> usize {
        self.left.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> usize {
        self.top.saturating_add(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shrink_one_line() {
        let region = Region::new(3, 4, 20, 10);
        let shrunk = region.shrink_one_line();
        assert_eq!(shrunk, Region::new(3, 5, 20, 9));
    }

    #[test]
    fn test_shrink_clears_output_flag() {
        let screen = Region::output(80, 24);
        assert!(screen.is_output_resource);
        assert!(!screen.shrink_one_line().is_output_resource);
    }

    #[test]
    fn test_shrink_saturates_at_zero_height() {
        let flat = Region::new(0, 0, 5, 0);
        assert_eq!(flat.shrink_one_line().height, 0);
    }

    #[test]
    fn test_detached_keeps_geometry() {
        let screen = Region::output(80, 24);
        let copy = screen.detached();
        assert_eq!((copy.left, copy.top, copy.width, copy.height), (0, 0, 80, 24));
        assert!(!copy.is_output_resource);
    }

    #[test]
    fn test_edges() {
        let region = Region::new(2, 3, 10, 4);
        assert_eq!(region.right(), 12);
        assert_eq!(region.bottom(), 7);
    }

    #[test]
    fn test_edges_saturate_at_max() {
        let region = Region::new(usize::MAX - 1, usize::MAX, 10, 4);
        assert_eq!(region.right(), usize::MAX);
        assert_eq!(region.bottom(), usize::MAX);
        let shrunk = region.shrink_one_line();
        assert_eq!((shrunk.top, shrunk.height), (usize::MAX, 3));
    }
}
