//! Windowed spatial sweep.
//!
//! Buildings are sorted by x. An outer window `xs[i..=j]` slides over that
//! order while its x-span stays within `max_width`; both ends advance by
//! `stride`. Each outer window is re-sorted by y, and inner windows
//! `ys[m..e]` with `k <= e - m <= k + size_boost` are emitted, the end
//! advancing by `inner_stride`.
//!
//! The strides and caps bound the number of windows examined on large
//! inputs. Smaller strides explore more candidates at a higher cost.

use crate::geometry::Building;
use crate::solver::Strategy;
use crate::strategy::{indices_sorted_by, sort_indices_by, CandidateGenerator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for [`WindowedSweep`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SweepConfig {
    /// Step between outer window starts, and between outer window ends.
    pub stride: usize,
    /// Maximum x-span of an outer window.
    pub max_width: f64,
    /// How many buildings beyond `k` an inner window may hold.
    pub size_boost: usize,
    /// Step between inner window ends.
    pub inner_stride: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            stride: 30,
            max_width: 4000.0,
            size_boost: 1000,
            inner_stride: 100,
        }
    }
}

impl SweepConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Visits every window: strides of one, no width cap.
    pub fn exhaustive() -> Self {
        Self {
            stride: 1,
            max_width: f64::INFINITY,
            size_boost: usize::MAX / 2,
            inner_stride: 1,
        }
    }

    /// Sets the outer stride (clamped to at least 1).
    pub fn with_stride(mut self, stride: usize) -> Self {
        self.stride = stride.max(1);
        self
    }

    /// Sets the maximum x-span.
    pub fn with_max_width(mut self, max_width: f64) -> Self {
        self.max_width = max_width;
        self
    }

    /// Sets the size boost.
    pub fn with_size_boost(mut self, size_boost: usize) -> Self {
        self.size_boost = size_boost;
        self
    }

    /// Sets the inner stride (clamped to at least 1).
    pub fn with_inner_stride(mut self, inner_stride: usize) -> Self {
        self.inner_stride = inner_stride.max(1);
        self
    }
}

/// Generator for [`Strategy::WindowedSweep`].
#[derive(Debug, Clone)]
pub struct WindowedSweep {
    config: SweepConfig,
}

impl WindowedSweep {
    /// Creates a sweep with the given parameters.
    pub fn new(config: SweepConfig) -> Self {
        Self { config }
    }

    /// Sweep parameters.
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }
}

impl Default for WindowedSweep {
    fn default() -> Self {
        Self::new(SweepConfig::default())
    }
}

impl CandidateGenerator for WindowedSweep {
    fn strategy(&self) -> Strategy {
        Strategy::WindowedSweep
    }

    fn generate(
        &self,
        buildings: &[Building],
        min_required: usize,
        emit: &mut dyn FnMut(&[usize]),
    ) {
        let n = buildings.len();
        let k = min_required;
        if k == 0 || k > n {
            return;
        }

        let stride = self.config.stride.max(1);
        let inner_stride = self.config.inner_stride.max(1);
        let xs = indices_sorted_by(buildings, |b| b.x);
        let mut window: Vec<usize> = Vec::new();

        for i in (0..n).step_by(stride) {
            let x_start = buildings[xs[i]].x;
            let mut j = i + k;
            while j < n && buildings[xs[j]].x - x_start <= self.config.max_width {
                window.clear();
                window.extend_from_slice(&xs[i..=j]);
                sort_indices_by(&mut window, buildings, |b| b.y);

                let len = window.len();
                for m in 0..=(len - k) {
                    let upper = len.min((m + k).saturating_add(self.config.size_boost));
                    let mut e = m + k;
                    while e <= upper {
                        emit(&window[m..e]);
                        let Some(next) = e.checked_add(inner_stride) else {
                            break;
                        };
                        e = next;
                    }
                }

                let Some(next) = j.checked_add(stride) else {
                    break;
                };
                j = next;
            }
        }
    }
}
