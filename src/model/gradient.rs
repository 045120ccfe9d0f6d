use crate::constants::MARKER_MAX;
use crate::error::{GradientError, Result};
use crate::interpolation::{self, ColorSample};

use super::marker::{AlphaMarker, Channel, ColorMarker, MarkerId, Positioned};
use super::marker_list::MarkerList;

/// Color/intensity and alpha markers of one HDR gradient.
///
/// Index-based accessors are only valid until the next structural change
/// (add, remove or resort); hold a `MarkerId` to follow a marker across them.
#[derive(Debug, Clone)]
pub struct GradientState {
    colors: MarkerList<ColorMarker>,
    alphas: MarkerList<AlphaMarker>,
}

impl Default for GradientState {
    fn default() -> Self {
        Self::new()
    }
}

impl GradientState {
    pub fn new() -> Self {
        Self::with_capacity(MARKER_MAX)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            colors: MarkerList::new(capacity),
            alphas: MarkerList::new(capacity),
        }
    }

    /// Opaque white from 0 to 1.
    pub fn white() -> Self {
        let mut state = Self::new();
        state.add_color_marker(0.0, [1.0, 1.0, 1.0], 1.0);
        state.add_color_marker(1.0, [1.0, 1.0, 1.0], 1.0);
        state.add_alpha_marker(0.0, 1.0);
        state.add_alpha_marker(1.0, 1.0);
        state
    }

    pub fn colors(&self) -> &MarkerList<ColorMarker> {
        &self.colors
    }

    pub fn alphas(&self) -> &MarkerList<AlphaMarker> {
        &self.alphas
    }

    pub(crate) fn colors_mut(&mut self) -> &mut MarkerList<ColorMarker> {
        &mut self.colors
    }

    pub(crate) fn alphas_mut(&mut self) -> &mut MarkerList<AlphaMarker> {
        &mut self.alphas
    }

    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    pub fn alpha_count(&self) -> usize {
        self.alphas.len()
    }

    pub fn marker_count(&self, channel: Channel) -> usize {
        match channel {
            Channel::Color => self.colors.len(),
            Channel::Alpha => self.alphas.len(),
        }
    }

    pub fn try_add_color_marker(
        &mut self,
        position: f32,
        color: [f32; 3],
        intensity: f32,
    ) -> Result<MarkerId> {
        let marker = ColorMarker::new(position, color, intensity);
        let capacity = self.colors.capacity();
        let (index, id) = self
            .colors
            .insert(marker)
            .ok_or(GradientError::CapacityExhausted {
                channel: Channel::Color,
                capacity,
            })?;
        log::debug!(
            "added color marker #{} at {:.3} (slot {})",
            id.raw(),
            marker.position,
            index
        );
        Ok(id)
    }

    /// Position is clamped to [0, 1]. Returns false if the channel is full.
    pub fn add_color_marker(&mut self, position: f32, color: [f32; 3], intensity: f32) -> bool {
        self.try_add_color_marker(position, color, intensity).is_ok()
    }

    pub fn try_add_alpha_marker(&mut self, position: f32, alpha: f32) -> Result<MarkerId> {
        let marker = AlphaMarker::new(position, alpha);
        let capacity = self.alphas.capacity();
        let (index, id) = self
            .alphas
            .insert(marker)
            .ok_or(GradientError::CapacityExhausted {
                channel: Channel::Alpha,
                capacity,
            })?;
        log::debug!(
            "added alpha marker #{} at {:.3} (slot {})",
            id.raw(),
            marker.position,
            index
        );
        Ok(id)
    }

    /// Position is clamped to [0, 1]. Returns false if the channel is full.
    pub fn add_alpha_marker(&mut self, position: f32, alpha: f32) -> bool {
        self.try_add_alpha_marker(position, alpha).is_ok()
    }

    pub fn try_remove_color_marker(&mut self, index: usize) -> Result<ColorMarker> {
        let len = self.colors.len();
        let (_, marker) = self
            .colors
            .remove(index)
            .ok_or(GradientError::IndexOutOfRange {
                channel: Channel::Color,
                index,
                len,
            })?;
        log::debug!("removed color marker {}", index);
        Ok(marker)
    }

    pub fn remove_color_marker(&mut self, index: usize) -> bool {
        self.try_remove_color_marker(index).is_ok()
    }

    pub fn try_remove_alpha_marker(&mut self, index: usize) -> Result<AlphaMarker> {
        let len = self.alphas.len();
        let (_, marker) = self
            .alphas
            .remove(index)
            .ok_or(GradientError::IndexOutOfRange {
                channel: Channel::Alpha,
                index,
                len,
            })?;
        log::debug!("removed alpha marker {}", index);
        Ok(marker)
    }

    pub fn remove_alpha_marker(&mut self, index: usize) -> bool {
        self.try_remove_alpha_marker(index).is_ok()
    }

    pub fn remove_marker_by_id(&mut self, channel: Channel, id: MarkerId) -> bool {
        match channel {
            Channel::Color => self
                .colors
                .index_of(id)
                .is_some_and(|index| self.remove_color_marker(index)),
            Channel::Alpha => self
                .alphas
                .index_of(id)
                .is_some_and(|index| self.remove_alpha_marker(index)),
        }
    }

    pub fn color_marker(&self, index: usize) -> Option<&ColorMarker> {
        self.colors.get(index)
    }

    pub fn color_marker_mut(&mut self, index: usize) -> Option<&mut ColorMarker> {
        self.colors.get_mut(index)
    }

    pub fn alpha_marker(&self, index: usize) -> Option<&AlphaMarker> {
        self.alphas.get(index)
    }

    pub fn alpha_marker_mut(&mut self, index: usize) -> Option<&mut AlphaMarker> {
        self.alphas.get_mut(index)
    }

    /// Moves a marker and restores ordering. Returns false for an unknown id.
    pub fn set_marker_position(&mut self, channel: Channel, id: MarkerId, position: f32) -> bool {
        let found = match channel {
            Channel::Color => self
                .colors
                .get_by_id_mut(id)
                .map(|marker| marker.set_position(position)),
            Channel::Alpha => self
                .alphas
                .get_by_id_mut(id)
                .map(|marker| marker.set_position(position)),
        };
        if found.is_some() {
            self.resort(channel);
        }
        found.is_some()
    }

    /// Restores position order on one channel after live position edits.
    pub fn resort(&mut self, channel: Channel) -> bool {
        match channel {
            Channel::Color => self.colors.resort(),
            Channel::Alpha => self.alphas.resort(),
        }
    }

    pub fn clear(&mut self) {
        self.colors.clear();
        self.alphas.clear();
    }

    /// Color and intensity at `x`; opaque white at unit intensity when there
    /// are no color markers.
    pub fn evaluate_color(&self, x: f32) -> ColorSample {
        interpolation::sample(self.colors.as_slice(), x, |marker| ColorSample {
            color: marker.color,
            intensity: marker.intensity,
        })
        .unwrap_or(ColorSample::WHITE)
    }

    /// Alpha at `x`; fully opaque when there are no alpha markers.
    pub fn evaluate_alpha(&self, x: f32) -> f32 {
        interpolation::sample(self.alphas.as_slice(), x, |marker| marker.alpha).unwrap_or(1.0)
    }

    /// `[r * intensity, g * intensity, b * intensity, alpha]`, the value drawn
    /// on the bar.
    pub fn evaluate_combined(&self, x: f32) -> [f32; 4] {
        let [r, g, b] = self.evaluate_color(x).premultiplied();
        [r, g, b, self.evaluate_alpha(x)]
    }

    /// Inserts a marker at `x` carrying the value the gradient already has
    /// there, so the rendered gradient does not change.
    pub fn insert_sampled(&mut self, channel: Channel, x: f32) -> Option<MarkerId> {
        let inserted = match channel {
            Channel::Color => {
                let sample = self.evaluate_color(x);
                self.try_add_color_marker(x, sample.color, sample.intensity)
            }
            Channel::Alpha => {
                let alpha = self.evaluate_alpha(x);
                self.try_add_alpha_marker(x, alpha)
            }
        };

        match inserted {
            Ok(id) => Some(id),
            Err(err) => {
                log::debug!("click insert skipped: {}", err);
                None
            }
        }
    }

    /// Sorted, deduplicated positions of every marker plus both bar ends.
    /// Consecutive pairs bound the segments the bar is drawn with.
    pub fn segment_stops(&self) -> Vec<f32> {
        let mut stops: Vec<f32> = self
            .colors
            .as_slice()
            .iter()
            .map(|m| m.position)
            .chain(self.alphas.as_slice().iter().map(|m| m.position))
            .chain([0.0, 1.0])
            .collect();
        stops.sort_by(f32::total_cmp);
        stops.dedup();
        stops
    }
}
