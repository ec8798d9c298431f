use delve_blocks::BlockType;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

/// Returned when a resolved layer has no positive weight, or no layer exists.
pub const FALLBACK_BLOCK: BlockType = BlockType::Dirt;

/// Depth band: applies to every depth `<= max_depth` not claimed by an earlier
/// layer. Weights are indexed by [`BlockType::index`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    pub max_depth: i32,
    pub weights: [u32; BlockType::COUNT],
}

impl Layer {
    pub const fn new(max_depth: i32, weights: [u32; BlockType::COUNT]) -> Self {
        Self { max_depth, weights }
    }

    #[inline]
    pub fn total_weight(&self) -> u64 {
        self.weights.iter().map(|w| u64::from(*w)).sum()
    }

    /// Probability of drawing `ty` from this layer, `0.0` for an all-zero layer.
    pub fn probability(&self, ty: BlockType) -> f64 {
        let total = self.total_weight();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.weights[ty.index()]) / total as f64
    }
}

/// Ordered layers with a prepared sampler per layer.
#[derive(Clone, Debug)]
pub struct LayerTable {
    layers: Vec<Layer>,
    samplers: Vec<Option<WeightedIndex<u64>>>,
}

impl LayerTable {
    pub fn new(layers: Vec<Layer>) -> Self {
        // Summed in u64 so four u32 weights cannot overflow. WeightedIndex
        // rejects an all-zero table; those layers keep `None` and resolve to
        // the fixed fallback.
        let samplers = layers
            .iter()
            .map(|l| WeightedIndex::new(l.weights.iter().map(|w| u64::from(*w))).ok())
            .collect();
        Self { layers, samplers }
    }

    #[inline]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Index of the first layer whose `max_depth >= depth`, else the last layer.
    pub fn resolve_index(&self, depth: i32) -> Option<usize> {
        if self.layers.is_empty() {
            return None;
        }
        Some(
            self.layers
                .iter()
                .position(|l| l.max_depth >= depth)
                .unwrap_or(self.layers.len() - 1),
        )
    }

    #[inline]
    pub fn resolve(&self, depth: i32) -> Option<&Layer> {
        self.resolve_index(depth).map(|i| &self.layers[i])
    }

    /// Draws one block type for `depth`, proportional to the resolved layer's
    /// weights.
    pub fn roll<R: Rng + ?Sized>(&self, depth: i32, rng: &mut R) -> BlockType {
        self.resolve_index(depth)
            .and_then(|i| self.samplers[i].as_ref())
            .and_then(|s| BlockType::from_index(s.sample(rng)))
            .unwrap_or(FALLBACK_BLOCK)
    }
}

impl From<Vec<Layer>> for LayerTable {
    fn from(layers: Vec<Layer>) -> Self {
        Self::new(layers)
    }
}

/// Inclusive integer range the structure's overall depth is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthRange {
    pub min: u32,
    pub max: u32,
}

impl DepthRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Uniform draw from `[min, max]`. A reversed range is read as its swap.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        rng.random_range(lo..=hi)
    }
}
